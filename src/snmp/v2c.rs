use anyhow::{Context, Result};
use snmp2::{AsyncSession, Oid, Value};

/// SNMPv2c клиент поверх асинхронной сессии
pub struct SnmpClientV2c {
    session: AsyncSession,
}

impl SnmpClientV2c {
    pub async fn new(target: &str, community: &[u8]) -> Result<Self> {
        let session = AsyncSession::new_v2c(target, community, 2)
            .await
            .context("Не удалось создать SNMP сессию")?;

        Ok(Self { session })
    }

    /// Обходит поддерево OID через GETBULK и возвращает пары (OID, значение)
    ///
    /// Значения сразу приводятся к плоским строкам: счётчики и целые как
    /// десятичный текст, октетные строки как текст или hex (см. render_value).
    // TODO: деградация до GETNEXT, если агент не отвечает на GETBULK
    pub async fn walk_bulk(
        &mut self,
        start_oid: &Oid<'_>,
        max_repetitions: u32,
    ) -> Result<Vec<(Oid<'static>, String)>> {
        let mut results: Vec<(Oid<'static>, String)> = Vec::new();
        let mut current_oid = start_oid.to_owned();

        loop {
            let resp = self
                .session
                .getbulk(&[&current_oid], 0, max_repetitions)
                .await
                .context("SNMP GETBULK запрос не удался")?;

            let mut items = Vec::new();
            let mut found_any = false;

            for (oid, value) in resp.varbinds {
                if !oid.starts_with(start_oid) {
                    // Вышли за границу поддерева
                    results.extend(items);
                    return Ok(results);
                }

                let value_str = render_value(&value);
                items.push((oid.to_owned(), value_str));
                current_oid = oid.to_owned();
                found_any = true;
            }

            if !found_any {
                break;
            }

            results.extend(items);
        }

        Ok(results)
    }
}

/// Приводит SNMP значение к плоской строке
///
/// Октетные строки с непечатаемыми байтами (ifPhysAddress) выводятся
/// как hex-пары через двоеточие.
fn render_value(value: &Value) -> String {
    match value {
        Value::Integer(n) => n.to_string(),
        Value::Counter32(n) | Value::Unsigned32(n) | Value::Timeticks(n) => n.to_string(),
        Value::Counter64(n) => n.to_string(),
        Value::OctetString(bytes) => render_octets(bytes),
        Value::ObjectIdentifier(oid) => oid.to_string(),
        Value::IpAddress(ip) => format!("{}.{}.{}.{}", ip[0], ip[1], ip[2], ip[3]),
        Value::Boolean(b) => b.to_string(),
        Value::Null => String::new(),
        other => format!("{:?}", other),
    }
}

fn render_octets(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) if s.chars().all(|c| !c.is_control()) => s.to_string(),
        _ => bytes
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(":"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_printable_octets_as_text() {
        assert_eq!(render_octets(b"eth0"), "eth0");
    }

    #[test]
    fn renders_binary_octets_as_hex() {
        assert_eq!(
            render_octets(&[0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]),
            "00:1A:2B:3C:4D:5E"
        );
    }
}
