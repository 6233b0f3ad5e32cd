use std::collections::HashMap;

use anyhow::Result;
use tokio::time::{timeout, Duration};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod formatter;
mod probe;
mod snmp;

use formatter::JsonFormatter;
use probe::discovery::HELPER_ID;
use probe::{CheckNetworkInterfaces, CheckReply, HelperReply, InterfaceDiscovery, SnmpTableWalker};

const SETTINGS_PATH: &str = "./settings.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::AppConfig::load(SETTINGS_PATH);
    let target = config.get_target();
    let mode = config.get_mode();
    let timeout_duration = Duration::from_secs(config.get_timeout());

    info!(%target, %mode, "запуск пробы интерфейсов");

    let client = snmp::create_v2c_client(&target, &config.get_community()).await?;
    let mut walker = SnmpTableWalker::new(client);

    match mode.as_str() {
        "check" => {
            // Аргументы метрик-потока; отсутствие IF_SELECTION означает
            // отсутствие аргумента и уходит в ответ как ошибка аргумента
            let mut args = HashMap::new();
            if let Some(selection) = config.get_if_selection() {
                args.insert("if_selection".to_string(), selection);
            }

            let reply = match timeout(
                timeout_duration,
                CheckNetworkInterfaces::execute(&mut walker, &args),
            )
            .await
            {
                Ok(reply) => reply,
                Err(_) => CheckReply::error("TIMEOUT"),
            };

            println!("{}", JsonFormatter::check_to_json_string(&target, &reply)?);
        }
        "discover" => {
            let reply = match timeout(timeout_duration, InterfaceDiscovery::call(&mut walker))
                .await
            {
                Ok(reply) => reply,
                Err(_) => HelperReply::failure(HELPER_ID, "TIMEOUT"),
            };

            println!(
                "{}",
                JsonFormatter::discovery_to_json_string(&target, &reply)?
            );
        }
        other => {
            anyhow::bail!("Неизвестный режим PROBE_MODE: {}", other);
        }
    }

    Ok(())
}
