use std::collections::HashMap;
use std::sync::LazyLock;

/// Таблица кодов ifType из IF-MIB (фиксированные 32 значения)
///
/// Строится один раз при старте процесса и дальше только читается.
static IF_TYPE_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("1", "other"),
        ("2", "regular1822"),
        ("3", "hdh1822"),
        ("4", "ddn-x25"),
        ("5", "rfc877-x25"),
        ("6", "ethernet-csmacd"),
        ("7", "iso88023-csmacd"),
        ("8", "iso88024-tokenBus"),
        ("9", "iso88025-tokenRing"),
        ("10", "iso88026-man"),
        ("11", "starLan"),
        ("12", "proteon-10Mbit"),
        ("13", "proteon-80Mbit"),
        ("14", "hyperchannel"),
        ("15", "fddi"),
        ("16", "lapb"),
        ("17", "sdlc"),
        ("18", "ds1"),
        ("19", "e1"),
        ("20", "basicISDN"),
        ("21", "primaryISDN"),
        ("22", "propPointToPointSerial"),
        ("23", "ppp"),
        ("24", "softwareLoopback"),
        ("25", "eon"),
        ("26", "ethernet-3Mbit"),
        ("27", "nsip"),
        ("28", "slip"),
        ("29", "ultra"),
        ("30", "ds3"),
        ("31", "sip"),
        ("32", "frame-relay"),
    ])
});

/// Переводит числовой код типа интерфейса в каноническое имя
///
/// Тотальная функция: для неизвестного кода возвращает "unknown(<код>)",
/// пустой строки не бывает.
pub fn resolve(code: &str) -> String {
    match IF_TYPE_NAMES.get(code) {
        Some(name) => (*name).to_string(),
        None => format!("unknown({})", code),
    }
}
