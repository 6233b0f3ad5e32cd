use anyhow::Result;

use crate::snmp::{parse_oid, SnmpClientV2c};

const MAX_REPETITIONS: u32 = 10;

/// Одна строка табличного обхода
///
/// `Ok` несёт значения строго в порядке запрошенных колонок (смысл
/// определяется позицией, не именем), `Err` — текст построчной ошибки.
/// Ошибочная строка не прерывает обход.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEvent {
    Ok(Vec<String>),
    Err(String),
}

/// Контракт табличного обходчика
///
/// Ошибка самого обхода (недоступная цель и т.п.) возвращается как `Err`
/// внешнего `Result`; построчные сбои — как `RowEvent::Err` внутри
/// последовательности. Повторов обходчик не делает.
pub trait TableWalker {
    async fn walk(&mut self, columns: &[&str]) -> Result<Vec<RowEvent>>;
}

/// Табличный обходчик поверх SNMPv2c клиента
///
/// Обходит каждое поддерево-колонку отдельно и склеивает ячейки в строки
/// по суффиксу OID (индексу строки).
pub struct SnmpTableWalker {
    client: SnmpClientV2c,
}

impl SnmpTableWalker {
    pub fn new(client: SnmpClientV2c) -> Self {
        Self { client }
    }
}

impl TableWalker for SnmpTableWalker {
    async fn walk(&mut self, columns: &[&str]) -> Result<Vec<RowEvent>> {
        let mut per_column: Vec<Vec<(String, String)>> = Vec::with_capacity(columns.len());

        for column in columns {
            let root = parse_oid(column)?;
            let entries = self.client.walk_bulk(&root, MAX_REPETITIONS).await?;

            let prefix = format!("{}.", column);
            let cells = entries
                .into_iter()
                .map(|(oid, value)| {
                    let full = oid.to_string();
                    let suffix = full.strip_prefix(&prefix).unwrap_or(&full).to_string();
                    (suffix, value)
                })
                .collect();

            per_column.push(cells);
        }

        Ok(assemble_rows(&per_column))
    }
}

/// Склеивает ячейки колонок в построчные события
///
/// Набор строк задаёт первая колонка (ifIndex), порядок — порядок её
/// обхода. Строка без ячейки в какой-то из колонок становится
/// `RowEvent::Err`, остальные строки при этом не теряются.
pub(crate) fn assemble_rows(per_column: &[Vec<(String, String)>]) -> Vec<RowEvent> {
    let Some(index_column) = per_column.first() else {
        return Vec::new();
    };

    let mut events = Vec::with_capacity(index_column.len());

    for (suffix, _) in index_column {
        let mut values = Vec::with_capacity(per_column.len());
        let mut missing = None;

        for (pos, cells) in per_column.iter().enumerate() {
            match cells.iter().find(|(s, _)| s == suffix) {
                Some((_, value)) => values.push(value.clone()),
                None => {
                    missing = Some(pos);
                    break;
                }
            }
        }

        events.push(match missing {
            None => RowEvent::Ok(values),
            Some(pos) => RowEvent::Err(format!(
                "нет значения в колонке {} для индекса {}",
                pos, suffix
            )),
        });
    }

    events
}

/// Обходчик с заранее заданным ответом (для тестов потоков)
#[cfg(test)]
pub(crate) struct CannedWalker {
    pub events: Vec<RowEvent>,
    pub fail: Option<String>,
}

#[cfg(test)]
impl CannedWalker {
    pub fn ok(events: Vec<RowEvent>) -> Self {
        Self { events, fail: None }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            events: Vec::new(),
            fail: Some(message.to_string()),
        }
    }
}

#[cfg(test)]
impl TableWalker for CannedWalker {
    async fn walk(&mut self, _columns: &[&str]) -> Result<Vec<RowEvent>> {
        match &self.fail {
            Some(message) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(self.events.clone()),
        }
    }
}
