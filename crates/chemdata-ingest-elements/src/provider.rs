use crate::table::{ElementData, PeriodicTable};
use crate::ElementError;
use chemdata_model::ElementRecord;

const MAX_ATOMIC_NUMBER: i64 = 118;

/// Maps provider entries into [`ElementRecord`]s.
#[derive(Debug, Clone, Copy)]
pub struct ElementProvider<'a> {
    table: &'a PeriodicTable,
}

impl ElementProvider<'static> {
    /// Provider over the embedded periodic table.
    pub fn embedded() -> Result<Self, ElementError> {
        Ok(Self {
            table: PeriodicTable::embedded()?,
        })
    }
}

impl<'a> ElementProvider<'a> {
    pub fn new(table: &'a PeriodicTable) -> Self {
        Self { table }
    }

    /// Every element in the table. The first bad entry aborts the whole batch.
    pub fn fetch_all(&self) -> Result<Vec<ElementRecord>, ElementError> {
        self.table.iter().map(to_record).collect()
    }

    /// A single element by symbol, name, or atomic number.
    ///
    /// Provider errors are logged and turned into `None`.
    pub fn fetch_one(&self, symbol: &str) -> Option<ElementRecord> {
        match self.table.lookup(symbol).and_then(to_record) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::error!(symbol = %symbol, error = %err, "error fetching element data");
                None
            }
        }
    }
}

/// Flatten one provider entry. Any failing accessor fails the whole element.
pub fn to_record(data: &ElementData) -> Result<ElementRecord, ElementError> {
    let label = if data.symbol.trim().is_empty() {
        format!("#{}", data.atomic_number)
    } else {
        data.symbol.clone()
    };

    let atomic_number = checked_atomic_number(&label, data.atomic_number)?;
    let symbol = required(&label, "symbol", &data.symbol)?;
    let name = required(&label, "name", &data.name)?;
    let electron_configuration = required(&label, "electron_configuration", &data.econf)?;
    let category = required(&label, "series", &data.series)?;

    if let Some(period) = data.period {
        if !(1..=7).contains(&period) {
            return Err(ElementError::OutOfRange {
                element: label,
                field: "period",
                value: period as i64,
            });
        }
    }
    if let Some(group) = data.group_id {
        if !(1..=18).contains(&group) {
            return Err(ElementError::OutOfRange {
                element: label,
                field: "group_id",
                value: group as i64,
            });
        }
    }

    Ok(ElementRecord {
        symbol,
        name,
        atomic_number,
        atomic_mass: data.atomic_weight,
        density: data.density,
        melting_point: data.melting_point,
        boiling_point: data.boiling_point,
        electronegativity: data.en_pauling,
        electron_configuration,
        oxidation_states: format_oxidation_states(&data.oxistates),
        atomic_radius: data.atomic_radius,
        discovery_year: data.discovery_year,
        group_number: data.group_id,
        period: data.period,
        category,
    })
}

fn checked_atomic_number(label: &str, z: i64) -> Result<u32, ElementError> {
    if (1..=MAX_ATOMIC_NUMBER).contains(&z) {
        Ok(z as u32)
    } else {
        Err(ElementError::OutOfRange {
            element: label.to_string(),
            field: "atomic_number",
            value: z,
        })
    }
}

fn required(label: &str, field: &'static str, value: &str) -> Result<String, ElementError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ElementError::MissingField {
            element: label.to_string(),
            field,
        });
    }
    Ok(value.to_string())
}

/// `[-1, 1, 3]` → `"-1, +1, +3"`; no states → empty string.
fn format_oxidation_states(states: &[i32]) -> String {
    states
        .iter()
        .map(|s| if *s > 0 { format!("+{s}") } else { s.to_string() })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(symbol: &str, z: i64) -> ElementData {
        ElementData {
            atomic_number: z,
            symbol: symbol.to_string(),
            name: "Testium".to_string(),
            atomic_weight: Some(1.0),
            density: None,
            melting_point: None,
            boiling_point: None,
            en_pauling: None,
            econf: "1s".to_string(),
            oxistates: vec![-1, 1],
            atomic_radius: None,
            discovery_year: None,
            group_id: Some(1),
            period: Some(1),
            series: "Nonmetals".to_string(),
        }
    }

    #[test]
    fn sodium_maps_every_field() {
        let provider = ElementProvider::embedded().unwrap();
        let na = provider.fetch_one("Na").unwrap();
        assert_eq!(na.name, "Sodium");
        assert_eq!(na.atomic_number, 11);
        assert_eq!(na.electron_configuration, "[Ne] 3s");
        assert_eq!(na.oxidation_states, "-1, +1");
        assert_eq!(na.group_number, Some(1));
        assert_eq!(na.period, Some(3));
        assert_eq!(na.category, "Alkali metals");
        assert!(na.electronegativity.is_some());
    }

    #[test]
    fn fetch_all_returns_118_records() {
        let provider = ElementProvider::embedded().unwrap();
        let all = provider.fetch_all().unwrap();
        assert_eq!(all.len(), 118);
        assert!(all.iter().any(|e| e.symbol == "Og" && e.atomic_number == 118));
    }

    #[test]
    fn fetch_one_unknown_is_none() {
        let provider = ElementProvider::embedded().unwrap();
        assert!(provider.fetch_one("Zz").is_none());
    }

    #[test]
    fn one_bad_entry_fails_the_batch() {
        let table = PeriodicTable::from_entries(vec![entry("Aa", 1), entry("", 2)]);
        let err = ElementProvider::new(&table).fetch_all().unwrap_err();
        assert!(matches!(err, ElementError::MissingField { field: "symbol", .. }));
    }

    #[test]
    fn fetch_one_swallows_mapping_errors() {
        let table = PeriodicTable::from_entries(vec![entry("Aa", 0)]);
        assert!(ElementProvider::new(&table).fetch_one("Aa").is_none());
    }

    #[test]
    fn noble_gas_without_states_formats_empty() {
        assert_eq!(format_oxidation_states(&[]), "");
        assert_eq!(format_oxidation_states(&[2, 4]), "+2, +4");
    }
}
