use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Базовые настройки приложения
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Настройки подключения
    pub connection: ConnectionSettings,
    /// Настройки аутентификации
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionSettings {
    /// Таймаут для SNMP операций (секунды)
    pub timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Community string для SNMPv2c
    pub community: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            connection: ConnectionSettings { timeout: 10 },
            auth: AuthSettings {
                community: "public".to_string(),
            },
        }
    }
}

impl Settings {
    /// Загружает настройки из YAML файла
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .context(format!("Не удалось прочитать файл: {}", path.display()))?;

        serde_yml::from_str(&content).context("Не удалось распарсить YAML настроек")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let settings = Settings::default();
        assert_eq!(settings.connection.timeout, 10);
        assert_eq!(settings.auth.community, "public");
    }

    #[test]
    fn loads_from_yaml() {
        let yaml = "connection:\n  timeout: 5\nauth:\n  community: lab\n";
        let settings: Settings = serde_yml::from_str(yaml).unwrap();
        assert_eq!(settings.connection.timeout, 5);
        assert_eq!(settings.auth.community, "lab");
    }
}
