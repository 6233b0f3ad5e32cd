use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

pub mod settings;

pub use settings::Settings;

/// Главная конфигурация приложения
///
/// Значения из YAML файла, поверх них переменные окружения.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub settings: Settings,
}

impl AppConfig {
    /// Загружает конфигурацию: YAML если файл есть, иначе значения по умолчанию
    pub fn load(settings_path: impl AsRef<Path>) -> Self {
        let path = settings_path.as_ref();
        let settings = if path.exists() {
            match Settings::load(path) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %format!("{:#}", e),
                        "настройки не загружены, использую значения по умолчанию"
                    );
                    Settings::default()
                }
            }
        } else {
            Settings::default()
        };

        Self { settings }
    }

    /// Цель опроса host:port
    pub fn get_target(&self) -> String {
        env::var("SNMP_TARGET").unwrap_or_else(|_| "127.0.0.1:161".to_string())
    }

    /// Таймаут SNMP операций (секунды)
    pub fn get_timeout(&self) -> u64 {
        env::var("SNMP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(self.settings.connection.timeout)
    }

    /// Community для SNMPv2c
    pub fn get_community(&self) -> Vec<u8> {
        env::var("SNMP_COMMUNITY")
            .unwrap_or_else(|_| self.settings.auth.community.clone())
            .into_bytes()
    }

    /// Аргумент метрик-потока: выбор индексов интерфейсов через запятую
    ///
    /// Отсутствие переменной — это отсутствие аргумента, а не пустой выбор;
    /// различие важно для ответа об ошибке аргумента.
    pub fn get_if_selection(&self) -> Option<String> {
        env::var("IF_SELECTION").ok()
    }

    /// Режим запуска: "check" (метрики) или "discover" (обнаружение)
    pub fn get_mode(&self) -> String {
        env::var("PROBE_MODE").unwrap_or_else(|_| "check".to_string())
    }
}
