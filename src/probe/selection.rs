use std::collections::HashSet;

/// Набор интересующих индексов интерфейсов
///
/// Строится из строки вида "1,2,3" простым разрезанием по запятым, без
/// тримминга и валидации. Пустая строка даёт набор из одного элемента ""
/// — он непустой, но реальному ifIndex никогда не равен, поэтому такой
/// выбор не совпадает ни с одной строкой таблицы.
#[derive(Debug, Clone)]
pub struct Selection {
    indexes: HashSet<String>,
}

impl Selection {
    pub fn parse(raw: &str) -> Self {
        Self {
            indexes: raw.split(',').map(str::to_owned).collect(),
        }
    }

    /// Точное строковое совпадение с ifIndex
    pub fn contains(&self, if_index: &str) -> bool {
        self.indexes.contains(if_index)
    }
}
