use crate::ElementError;
use serde::Deserialize;
use std::sync::OnceLock;

const ELEMENTS_JSON: &str = include_str!("../resources/elements.json");

static DEFAULT_TABLE: OnceLock<Result<PeriodicTable, String>> = OnceLock::new();

/// One provider entry, in the provider's own vocabulary.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementData {
    #[serde(rename = "z")]
    pub atomic_number: i64,
    pub symbol: String,
    pub name: String,
    #[serde(rename = "weight")]
    pub atomic_weight: Option<f64>,
    pub density: Option<f64>,
    #[serde(rename = "mp")]
    pub melting_point: Option<f64>,
    #[serde(rename = "bp")]
    pub boiling_point: Option<f64>,
    #[serde(rename = "en")]
    pub en_pauling: Option<f64>,
    pub econf: String,
    #[serde(rename = "ox", default)]
    pub oxistates: Vec<i32>,
    #[serde(rename = "radius")]
    pub atomic_radius: Option<f64>,
    #[serde(rename = "year")]
    pub discovery_year: Option<i32>,
    #[serde(rename = "group")]
    pub group_id: Option<i32>,
    pub period: Option<i32>,
    pub series: String,
}

/// The reference provider: a read-only periodic table.
#[derive(Debug, Clone)]
pub struct PeriodicTable {
    entries: Vec<ElementData>,
}

impl PeriodicTable {
    /// The table compiled into this crate, parsed once per process.
    pub fn embedded() -> Result<&'static PeriodicTable, ElementError> {
        DEFAULT_TABLE
            .get_or_init(|| Self::from_json(ELEMENTS_JSON).map_err(|e| e.to_string()))
            .as_ref()
            .map_err(|e| ElementError::Dataset(e.clone()))
    }

    pub fn from_json(text: &str) -> Result<Self, ElementError> {
        let entries: Vec<ElementData> =
            serde_json::from_str(text).map_err(|e| ElementError::Dataset(e.to_string()))?;
        Ok(Self { entries })
    }

    pub fn from_entries(entries: Vec<ElementData>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementData> {
        self.entries.iter()
    }

    /// Exact symbol lookup.
    pub fn get(&self, symbol: &str) -> Result<&ElementData, ElementError> {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .ok_or_else(|| ElementError::UnknownElement(symbol.to_string()))
    }

    /// Lookup by symbol (any case), English name (any case), or atomic number.
    pub fn lookup(&self, key: &str) -> Result<&ElementData, ElementError> {
        let key = key.trim();
        if let Ok(z) = key.parse::<i64>() {
            return self
                .entries
                .iter()
                .find(|e| e.atomic_number == z)
                .ok_or_else(|| ElementError::UnknownElement(key.to_string()));
        }
        self.entries
            .iter()
            .find(|e| e.symbol == key)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|e| e.symbol.eq_ignore_ascii_case(key) || e.name.eq_ignore_ascii_case(key))
            })
            .ok_or_else(|| ElementError::UnknownElement(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_has_every_element_once() {
        let table = PeriodicTable::embedded().unwrap();
        assert_eq!(table.len(), 118);

        let mut numbers: Vec<i64> = table.iter().map(|e| e.atomic_number).collect();
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers, (1..=118).collect::<Vec<_>>());

        let mut symbols: Vec<&str> = table.iter().map(|e| e.symbol.as_str()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 118);
    }

    #[test]
    fn get_is_case_sensitive() {
        let table = PeriodicTable::embedded().unwrap();
        assert_eq!(table.get("Na").unwrap().name, "Sodium");
        assert!(table.get("NA").is_err());
    }

    #[test]
    fn lookup_accepts_symbol_name_or_number() {
        let table = PeriodicTable::embedded().unwrap();
        assert_eq!(table.lookup("fe").unwrap().symbol, "Fe");
        assert_eq!(table.lookup("iron").unwrap().symbol, "Fe");
        assert_eq!(table.lookup(" 26 ").unwrap().symbol, "Fe");
        assert!(table.lookup("Xx").is_err());
        assert!(table.lookup("0").is_err());
    }

    #[test]
    fn exact_symbol_wins_over_case_folded_match() {
        // "Co" (cobalt) must not be shadowed by a case-insensitive hit on another entry.
        let table = PeriodicTable::embedded().unwrap();
        assert_eq!(table.lookup("Co").unwrap().name, "Cobalt");
    }
}
