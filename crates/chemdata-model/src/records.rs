use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Element
// ============================================================================

/// Physical constants for one chemical element.
///
/// Units: mass in u, density in g/cm³, melting/boiling points in K,
/// atomic radius in pm, electronegativity on the Pauling scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub symbol: String,
    pub name: String,
    pub atomic_number: u32,
    pub atomic_mass: Option<f64>,
    pub density: Option<f64>,
    pub melting_point: Option<f64>,
    pub boiling_point: Option<f64>,
    pub electronegativity: Option<f64>,
    pub electron_configuration: String,
    pub oxidation_states: String,
    pub atomic_radius: Option<f64>,
    pub discovery_year: Option<i32>,
    pub group_number: Option<i32>,
    pub period: Option<i32>,
    pub category: String,
}

impl ElementRecord {
    /// Column names in storage order.
    pub const COLUMNS: [&'static str; 15] = [
        "symbol",
        "name",
        "atomic_number",
        "atomic_mass",
        "density",
        "melting_point",
        "boiling_point",
        "electronegativity",
        "electron_configuration",
        "oxidation_states",
        "atomic_radius",
        "discovery_year",
        "group_number",
        "period",
        "category",
    ];

    /// `(column, value)` pairs in storage order.
    pub fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("symbol", FieldValue::text(&self.symbol)),
            ("name", FieldValue::text(&self.name)),
            ("atomic_number", FieldValue::Int(self.atomic_number as i64)),
            ("atomic_mass", FieldValue::real(self.atomic_mass)),
            ("density", FieldValue::real(self.density)),
            ("melting_point", FieldValue::real(self.melting_point)),
            ("boiling_point", FieldValue::real(self.boiling_point)),
            ("electronegativity", FieldValue::real(self.electronegativity)),
            (
                "electron_configuration",
                FieldValue::text(&self.electron_configuration),
            ),
            ("oxidation_states", FieldValue::text(&self.oxidation_states)),
            ("atomic_radius", FieldValue::real(self.atomic_radius)),
            ("discovery_year", FieldValue::int(self.discovery_year)),
            ("group_number", FieldValue::int(self.group_number)),
            ("period", FieldValue::int(self.period)),
            ("category", FieldValue::text(&self.category)),
        ]
    }
}

// ============================================================================
// Compound
// ============================================================================

/// A compound as assembled from PubChem.
///
/// `cas_number` is part of the stored shape but the pipeline has no source for
/// it, so freshly resolved records always carry `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundRecord {
    pub name: String,
    pub formula: String,
    pub molecular_weight: Option<f64>,
    pub density: Option<f64>,
    pub melting_point: Option<f64>,
    pub boiling_point: Option<f64>,
    pub solubility: Option<String>,
    pub appearance: Option<String>,
    pub iupac_name: Option<String>,
    pub cas_number: Option<String>,
    pub pubchem_cid: Option<i64>,
}

impl CompoundRecord {
    /// Column names in storage order.
    pub const COLUMNS: [&'static str; 11] = [
        "name",
        "formula",
        "molecular_weight",
        "density",
        "melting_point",
        "boiling_point",
        "solubility",
        "appearance",
        "iupac_name",
        "cas_number",
        "pubchem_cid",
    ];

    pub fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("name", FieldValue::text(&self.name)),
            ("formula", FieldValue::text(&self.formula)),
            ("molecular_weight", FieldValue::real(self.molecular_weight)),
            ("density", FieldValue::real(self.density)),
            ("melting_point", FieldValue::real(self.melting_point)),
            ("boiling_point", FieldValue::real(self.boiling_point)),
            ("solubility", FieldValue::opt_text(self.solubility.as_deref())),
            ("appearance", FieldValue::opt_text(self.appearance.as_deref())),
            ("iupac_name", FieldValue::opt_text(self.iupac_name.as_deref())),
            ("cas_number", FieldValue::opt_text(self.cas_number.as_deref())),
            (
                "pubchem_cid",
                self.pubchem_cid.map_or(FieldValue::Null, FieldValue::Int),
            ),
        ]
    }
}

// ============================================================================
// Field values
// ============================================================================

/// A loosely-typed column value, used for display and generic row handling.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Int(i64),
    Real(f64),
    Text(String),
}

impl FieldValue {
    fn text(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }

    fn opt_text(s: Option<&str>) -> Self {
        s.map_or(FieldValue::Null, FieldValue::text)
    }

    fn real(v: Option<f64>) -> Self {
        v.map_or(FieldValue::Null, FieldValue::Real)
    }

    fn int(v: Option<i32>) -> Self {
        v.map_or(FieldValue::Null, |i| FieldValue::Int(i as i64))
    }

    pub fn is_null(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Int(i) => write!(f, "{i}"),
            FieldValue::Real(r) => write!(f, "{r}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> CompoundRecord {
        CompoundRecord {
            name: "Water".to_string(),
            formula: "H2O".to_string(),
            molecular_weight: Some(18.015),
            density: Some(1.0),
            melting_point: Some(0.0),
            boiling_point: Some(100.0),
            solubility: None,
            appearance: Some("Colorless liquid".to_string()),
            iupac_name: Some("oxidane".to_string()),
            cas_number: None,
            pubchem_cid: Some(962),
        }
    }

    #[test]
    fn compound_fields_follow_column_order() {
        let names: Vec<&str> = water().fields().into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, CompoundRecord::COLUMNS.to_vec());
    }

    #[test]
    fn null_fields_are_reported() {
        let fields = water().fields();
        let cas = fields.iter().find(|(k, _)| *k == "cas_number").unwrap();
        assert!(cas.1.is_null());
        let cid = fields.iter().find(|(k, _)| *k == "pubchem_cid").unwrap();
        assert_eq!(cid.1, FieldValue::Int(962));
        assert_eq!(cid.1.to_string(), "962");
    }

    #[test]
    fn compound_json_keeps_null_cas_number() {
        let json = serde_json::to_value(water()).unwrap();
        assert!(json["cas_number"].is_null());
        assert_eq!(json["formula"], "H2O");
        let back: CompoundRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, water());
    }
}
