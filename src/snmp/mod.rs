use anyhow::Result;

pub mod oid;
pub mod v2c;

pub use oid::parse_oid;
pub use v2c::SnmpClientV2c;

/// Создаёт SNMPv2c клиент
// TODO: фабрика для выбора версии (v2c/v3) по конфигурации
pub async fn create_v2c_client(target: &str, community: &[u8]) -> Result<SnmpClientV2c> {
    SnmpClientV2c::new(target, community).await
}
