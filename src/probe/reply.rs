use std::collections::BTreeMap;

use serde::Serialize;

/// Статус числового отчёта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ERROR")]
    Error,
}

/// Ответ метрик-потока: статус, сообщение и счётчики по интерфейсам
///
/// Счётчики лежат как ifIndex -> имя метрики -> значение; BTreeMap даёт
/// стабильный порядок в JSON.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReply {
    pub status: CheckStatus,
    pub message: String,
    pub performances: BTreeMap<String, BTreeMap<String, u64>>,
}

impl CheckReply {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Ok,
            message: message.into(),
            performances: BTreeMap::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Error,
            message: message.into(),
            performances: BTreeMap::new(),
        }
    }

    pub fn put_performance(&mut self, if_index: &str, metric: &str, value: u64) {
        self.performances
            .entry(if_index.to_string())
            .or_default()
            .insert(metric.to_string(), value);
    }
}

/// Статус ответа помощника обнаружения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HelperStatus {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "FAILURE")]
    Failure,
}

/// Одна строка таблицы обнаружения
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceDescriptor {
    #[serde(rename = "ifIndex")]
    pub if_index: String,
    #[serde(rename = "ifDescr")]
    pub if_descr: String,
    #[serde(rename = "ifType")]
    pub if_type: String,
    #[serde(rename = "ifPhysAddress")]
    pub if_phys_address: String,
}

/// Ответ потока обнаружения: либо полная таблица, либо сообщение об ошибке
///
/// Два варианта одного вызова моделируются перечислением, а не иерархией
/// типов.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HelperReply {
    Table {
        id: String,
        status: HelperStatus,
        rows: Vec<InterfaceDescriptor>,
    },
    Simple {
        id: String,
        status: HelperStatus,
        message: String,
    },
}

impl HelperReply {
    pub fn table(id: &str, rows: Vec<InterfaceDescriptor>) -> Self {
        HelperReply::Table {
            id: id.to_string(),
            status: HelperStatus::Success,
            rows,
        }
    }

    pub fn failure(id: &str, message: impl Into<String>) -> Self {
        HelperReply::Simple {
            id: id.to_string(),
            status: HelperStatus::Failure,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_performance_groups_metrics_by_interface() {
        let mut reply = CheckReply::ok("ok");
        reply.put_performance("2", "IfInOctets", 100);
        reply.put_performance("2", "IfOutOctets", 200);
        reply.put_performance("3", "IfInOctets", 300);

        assert_eq!(reply.performances.len(), 2);
        assert_eq!(reply.performances["2"]["IfInOctets"], 100);
        assert_eq!(reply.performances["2"]["IfOutOctets"], 200);
        assert_eq!(reply.performances["3"]["IfInOctets"], 300);
    }

    #[test]
    fn statuses_serialize_to_wire_names() {
        assert_eq!(serde_json::to_string(&CheckStatus::Ok).unwrap(), "\"OK\"");
        assert_eq!(
            serde_json::to_string(&CheckStatus::Error).unwrap(),
            "\"ERROR\""
        );
        assert_eq!(
            serde_json::to_string(&HelperStatus::Success).unwrap(),
            "\"SUCCESS\""
        );
        assert_eq!(
            serde_json::to_string(&HelperStatus::Failure).unwrap(),
            "\"FAILURE\""
        );
    }

    #[test]
    fn descriptor_serializes_with_mib_field_names() {
        let row = InterfaceDescriptor {
            if_index: "1".into(),
            if_descr: "lo".into(),
            if_type: "softwareLoopback".into(),
            if_phys_address: "".into(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["ifIndex"], "1");
        assert_eq!(json["ifDescr"], "lo");
        assert_eq!(json["ifType"], "softwareLoopback");
        assert_eq!(json["ifPhysAddress"], "");
    }
}
