//! Numeric extraction from free-text experimental values.
//!
//! PubChem reports measured properties as human-written text (`"78 °C"`,
//! `"-114.1 °C at 760 mm Hg"`, `"0.789 g/cu cm at 20 °C"`). We only keep the
//! first number; units and qualifiers are dropped.

use regex::Regex;
use std::sync::OnceLock;

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[-+]?(?:\d+\.\d+|\d+|\.\d+)").expect("numeric pattern is valid")
    })
}

/// Extract the first signed decimal-or-integer token from `text`.
///
/// Returns `None` when the text carries no digits at all.
pub fn extract_number(text: &str) -> Option<f64> {
    number_pattern()
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Like [`extract_number`], but for an optional field.
pub fn extract_optional(text: Option<&str>) -> Option<f64> {
    text.and_then(extract_number)
}
