use anyhow::{Context, Result};
use tracing::debug;

use super::iftype;
use super::reply::{HelperReply, InterfaceDescriptor};
use super::walker::{RowEvent, TableWalker};

const IF_INDEX: &str = "1.3.6.1.2.1.2.2.1.1";
const IF_DESCR: &str = "1.3.6.1.2.1.2.2.1.2";
const IF_TYPE: &str = "1.3.6.1.2.1.2.2.1.3";
const IF_PHYSADDRESS: &str = "1.3.6.1.2.1.2.2.1.6";

/// Колонки потока обнаружения, порядок жёсткий
const DISCOVERY_COLUMNS: [&str; 4] = [IF_INDEX, IF_DESCR, IF_TYPE, IF_PHYSADDRESS];

/// Идентификатор ответа помощника
pub const HELPER_ID: &str = "SelectNetworkInterfaces";

/// Помощник обнаружения: полная таблица интерфейсов для UI выбора
pub struct InterfaceDiscovery;

impl InterfaceDiscovery {
    /// Выполняет поток обнаружения
    ///
    /// Выбор индексов здесь не участвует — возвращается вся таблица в
    /// порядке обхода. Жёсткий сбой обхода отменяет весь запрос: частичная
    /// таблица не возвращается.
    pub async fn call<W: TableWalker>(walker: &mut W) -> HelperReply {
        match Self::build_table(walker).await {
            Ok(rows) => HelperReply::table(HELPER_ID, rows),
            Err(e) => HelperReply::failure(HELPER_ID, format!("{:#}", e)),
        }
    }

    async fn build_table<W: TableWalker>(walker: &mut W) -> Result<Vec<InterfaceDescriptor>> {
        let events = walker.walk(&DISCOVERY_COLUMNS).await?;

        let mut rows = Vec::with_capacity(events.len());

        for event in events {
            let values = match event {
                RowEvent::Ok(values) => values,
                RowEvent::Err(message) => {
                    debug!(%message, "пропуск ошибочной строки при обнаружении");
                    continue;
                }
            };

            let column = |pos: usize, name: &str| -> Result<String> {
                values
                    .get(pos)
                    .cloned()
                    .with_context(|| format!("строка без колонки {}", name))
            };

            rows.push(InterfaceDescriptor {
                if_index: column(0, "ifIndex")?,
                if_descr: column(1, "ifDescr")?,
                if_type: iftype::resolve(&column(2, "ifType")?),
                if_phys_address: column(3, "ifPhysAddress")?,
            });
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::reply::HelperStatus;
    use crate::probe::walker::CannedWalker;

    fn discovery_row(if_index: &str, descr: &str, type_code: &str, phys: &str) -> RowEvent {
        RowEvent::Ok(vec![
            if_index.to_string(),
            descr.to_string(),
            type_code.to_string(),
            phys.to_string(),
        ])
    }

    #[tokio::test]
    async fn returns_full_table_in_walk_order() {
        let mut walker = CannedWalker::ok(vec![
            discovery_row("3", "eth1", "6", "00:1A:2B:3C:4D:5F"),
            discovery_row("1", "lo", "24", ""),
            discovery_row("2", "eth0", "6", "00:1A:2B:3C:4D:5E"),
        ]);

        let reply = InterfaceDiscovery::call(&mut walker).await;

        let HelperReply::Table { id, status, rows } = reply else {
            panic!("ожидалась таблица");
        };
        assert_eq!(id, "SelectNetworkInterfaces");
        assert_eq!(status, HelperStatus::Success);
        assert_eq!(
            rows.iter().map(|r| r.if_index.as_str()).collect::<Vec<_>>(),
            vec!["3", "1", "2"]
        );
        assert_eq!(rows[0].if_type, "ethernet-csmacd");
        assert_eq!(rows[1].if_type, "softwareLoopback");
        assert_eq!(rows[1].if_descr, "lo");
        assert_eq!(rows[2].if_phys_address, "00:1A:2B:3C:4D:5E");
    }

    #[tokio::test]
    async fn unknown_type_code_keeps_raw_code() {
        let mut walker = CannedWalker::ok(vec![discovery_row("1", "tun0", "99", "")]);

        let reply = InterfaceDiscovery::call(&mut walker).await;

        let HelperReply::Table { rows, .. } = reply else {
            panic!("ожидалась таблица");
        };
        assert_eq!(rows[0].if_type, "unknown(99)");
    }

    #[tokio::test]
    async fn err_rows_are_skipped_without_losing_the_rest() {
        let mut walker = CannedWalker::ok(vec![
            discovery_row("1", "lo", "24", ""),
            RowEvent::Err("row timeout".to_string()),
            discovery_row("2", "eth0", "6", "00:1A:2B:3C:4D:5E"),
        ]);

        let reply = InterfaceDiscovery::call(&mut walker).await;

        let HelperReply::Table { rows, .. } = reply else {
            panic!("ожидалась таблица");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].if_index, "1");
        assert_eq!(rows[1].if_index, "2");
    }

    #[tokio::test]
    async fn walk_failure_yields_simple_failure_reply() {
        let mut walker = CannedWalker::failing("target unreachable");

        let reply = InterfaceDiscovery::call(&mut walker).await;

        let HelperReply::Simple {
            id,
            status,
            message,
        } = reply
        else {
            panic!("ожидался простой ответ");
        };
        assert_eq!(id, "SelectNetworkInterfaces");
        assert_eq!(status, HelperStatus::Failure);
        assert!(message.contains("target unreachable"));
    }
}
