use std::collections::HashMap;

use anyhow::{Context, Result};
use tracing::warn;

use super::reply::CheckReply;
use super::selection::Selection;
use super::walker::{RowEvent, TableWalker};

const IF_INDEX: &str = "1.3.6.1.2.1.2.2.1.1";
const IF_IN_OCTETS: &str = "1.3.6.1.2.1.2.2.1.10";
const IF_IN_UCASTPKTS: &str = "1.3.6.1.2.1.2.2.1.11";
const IF_IN_NUCASTPKTS: &str = "1.3.6.1.2.1.2.2.1.12";
const IF_IN_ERRORS: &str = "1.3.6.1.2.1.2.2.1.14";
const IF_OUT_OCTETS: &str = "1.3.6.1.2.1.2.2.1.16";
const IF_OUT_UCASTPKTS: &str = "1.3.6.1.2.1.2.2.1.17";
const IF_OUT_NUCASTPKTS: &str = "1.3.6.1.2.1.2.2.1.18";
const IF_OUT_ERRORS: &str = "1.3.6.1.2.1.2.2.1.20";

/// Колонки метрик-потока: ifIndex плюс восемь счётчиков, порядок жёсткий
const METRIC_COLUMNS: [&str; 9] = [
    IF_INDEX,
    IF_IN_OCTETS,
    IF_IN_UCASTPKTS,
    IF_IN_NUCASTPKTS,
    IF_IN_ERRORS,
    IF_OUT_OCTETS,
    IF_OUT_UCASTPKTS,
    IF_OUT_NUCASTPKTS,
    IF_OUT_ERRORS,
];

/// Имена метрик, позиция i соответствует колонке i + 1
const METRIC_NAMES: [&str; 8] = [
    "IfInOctets",
    "IfInUcastPkts",
    "IfInNucastPkts",
    "IfInErrors",
    "IfOutOctets",
    "IfOutUcastPkts",
    "IfOutNucastPkts",
    "IfOutErrors",
];

/// Проверка счётчиков интерфейсов по ifTable
pub struct CheckNetworkInterfaces;

impl CheckNetworkInterfaces {
    /// Выполняет метрик-поток: обход таблицы и отбор по if_selection
    ///
    /// Любая ошибка ловится на границе вызова и превращается в ERROR-ответ;
    /// наружу ответ уходит всегда ровно один.
    pub async fn execute<W: TableWalker>(
        walker: &mut W,
        args: &HashMap<String, String>,
    ) -> CheckReply {
        let raw_selection = match args.get("if_selection") {
            Some(value) => value.clone(),
            None => {
                return CheckReply::error("Missing or wrong argument: if_selection");
            }
        };

        let selection = Selection::parse(&raw_selection);

        // Текст последней построчной ошибки; при общем сбое именно он
        // уходит в ответ вместо реальной причины (причина — в лог).
        // Унаследованная связка двух разных сигналов, см. DESIGN.md.
        let mut last_error = String::from("undefined");

        match Self::correlate(walker, &raw_selection, &selection, &mut last_error).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(cause = %format!("{:#}", e), "сбой метрик-потока");
                CheckReply::error(format!("Error: {}", last_error))
            }
        }
    }

    async fn correlate<W: TableWalker>(
        walker: &mut W,
        raw_selection: &str,
        selection: &Selection,
        last_error: &mut String,
    ) -> Result<CheckReply> {
        let events = walker.walk(&METRIC_COLUMNS).await?;

        let mut reply = CheckReply::ok(format!("IfTable fetch success for: {}", raw_selection));

        for event in events {
            let values = match event {
                RowEvent::Ok(values) => values,
                RowEvent::Err(message) => {
                    // Построчный сбой не прерывает обход
                    *last_error = message;
                    continue;
                }
            };

            let if_index = values.first().context("строка без колонки ifIndex")?;
            if !selection.contains(if_index) {
                continue;
            }

            for (pos, metric) in METRIC_NAMES.iter().enumerate() {
                let raw = values
                    .get(pos + 1)
                    .with_context(|| format!("строка {} без колонки {}", if_index, metric))?;
                let value: u64 = raw.parse().with_context(|| {
                    format!("счётчик {} интерфейса {}: не число '{}'", metric, if_index, raw)
                })?;
                reply.put_performance(if_index, metric, value);
            }
        }

        Ok(reply)
    }
}
