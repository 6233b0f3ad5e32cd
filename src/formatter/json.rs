use serde::Serialize;

use crate::probe::reply::{CheckReply, HelperReply};

/// JSON конверт для ответа метрик-потока
#[derive(Debug, Clone, Serialize)]
pub struct CheckReportJson {
    pub target: String,
    pub timestamp: String,
    /// Сколько интерфейсов попало в отчёт
    pub interface_count: usize,
    #[serde(flatten)]
    pub reply: CheckReply,
}

/// JSON конверт для ответа потока обнаружения
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryReportJson {
    pub target: String,
    pub timestamp: String,
    /// Сколько строк в таблице (0 при сбое)
    pub row_count: usize,
    #[serde(flatten)]
    pub reply: HelperReply,
}

/// JSON форматтер ответов пробы
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn format_check(target: &str, reply: &CheckReply) -> CheckReportJson {
        CheckReportJson {
            target: target.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            interface_count: reply.performances.len(),
            reply: reply.clone(),
        }
    }

    pub fn format_discovery(target: &str, reply: &HelperReply) -> DiscoveryReportJson {
        let row_count = match reply {
            HelperReply::Table { rows, .. } => rows.len(),
            HelperReply::Simple { .. } => 0,
        };

        DiscoveryReportJson {
            target: target.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            row_count,
            reply: reply.clone(),
        }
    }

    /// Сериализует ответ метрик-потока в JSON строку
    pub fn check_to_json_string(target: &str, reply: &CheckReply) -> anyhow::Result<String> {
        serde_json::to_string_pretty(&Self::format_check(target, reply))
            .map_err(|e| anyhow::anyhow!("Ошибка сериализации в JSON: {}", e))
    }

    /// Сериализует ответ потока обнаружения в JSON строку
    pub fn discovery_to_json_string(target: &str, reply: &HelperReply) -> anyhow::Result<String> {
        serde_json::to_string_pretty(&Self::format_discovery(target, reply))
            .map_err(|e| anyhow::anyhow!("Ошибка сериализации в JSON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::reply::InterfaceDescriptor;

    #[test]
    fn check_report_counts_interfaces_and_flattens_reply() {
        let mut reply = CheckReply::ok("IfTable fetch success for: 2");
        reply.put_performance("2", "IfInOctets", 1);

        let json: serde_json::Value =
            serde_json::to_value(JsonFormatter::format_check("127.0.0.1:161", &reply)).unwrap();

        assert_eq!(json["interface_count"], 1);
        assert_eq!(json["status"], "OK");
        assert_eq!(json["performances"]["2"]["IfInOctets"], 1);
    }

    #[test]
    fn discovery_report_counts_rows() {
        let reply = HelperReply::table(
            "SelectNetworkInterfaces",
            vec![InterfaceDescriptor {
                if_index: "1".into(),
                if_descr: "lo".into(),
                if_type: "softwareLoopback".into(),
                if_phys_address: "".into(),
            }],
        );

        let json: serde_json::Value =
            serde_json::to_value(JsonFormatter::format_discovery("127.0.0.1:161", &reply))
                .unwrap();

        assert_eq!(json["row_count"], 1);
        assert_eq!(json["status"], "SUCCESS");
        assert_eq!(json["rows"][0]["ifIndex"], "1");
    }

    #[test]
    fn failed_discovery_report_has_zero_rows_and_message() {
        let reply = HelperReply::failure("SelectNetworkInterfaces", "target unreachable");

        let json: serde_json::Value =
            serde_json::to_value(JsonFormatter::format_discovery("127.0.0.1:161", &reply))
                .unwrap();

        assert_eq!(json["row_count"], 0);
        assert_eq!(json["status"], "FAILURE");
        assert_eq!(json["message"], "target unreachable");
    }
}
