use anyhow::{Context, Result};
use snmp2::Oid;

/// Парсит строку вида "1.3.6.1.2.1.2.2.1.1" в объект Oid
pub fn parse_oid(oid_str: &str) -> Result<Oid<'static>> {
    let parts: Result<Vec<u64>, _> = oid_str
        .trim()
        .split('.')
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<u64>())
        .collect();

    let parts = parts.context(format!("Невалидный OID: {}", oid_str))?;
    Oid::from(&parts)
        .map_err(|e| anyhow::anyhow!("Не удалось создать Oid из '{}': {:?}", oid_str, e))
}
