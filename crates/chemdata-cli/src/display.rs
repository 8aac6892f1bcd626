use crate::search::{Hit, SearchHit};
use chemdata_model::FieldValue;
use colored::Colorize;
use std::collections::HashSet;

/// Short label for a column, title-cased otherwise.
pub fn label(field: &str) -> String {
    match field {
        "atomic_number" => "Z".to_string(),
        "atomic_mass" => "A".to_string(),
        "melting_point" => "Mp".to_string(),
        "boiling_point" => "Bp".to_string(),
        "molecular_weight" => "MW".to_string(),
        "electron_configuration" => "EC".to_string(),
        "electronegativity" => "EN".to_string(),
        other => other
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
    }
}

pub fn unit(field: &str) -> Option<&'static str> {
    match field {
        "atomic_mass" | "molecular_weight" => Some("u"),
        "melting_point" | "boiling_point" => Some("K"),
        "density" => Some("g/cm³"),
        "atomic_radius" => Some("pm"),
        _ => None,
    }
}

/// `(label, value)` rows for a detail view.
///
/// The name comes first, then fields in `order`, then every remaining non-null
/// field in column order. Each field appears once.
pub fn detail_rows(fields: &[(&'static str, FieldValue)], order: &[&str]) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    let mut emit = |field: &str, rows: &mut Vec<(String, String)>| {
        let Some((name, value)) = fields.iter().find(|(k, _)| *k == field) else {
            return;
        };
        let name: &str = name;
        if !seen.insert(name) || value.is_null() {
            return;
        }
        let text = match unit(name) {
            Some(u) => format!("{value} {u}"),
            None => value.to_string(),
        };
        rows.push((label(name), text));
    };

    emit("name", &mut rows);
    for field in order {
        emit(*field, &mut rows);
    }
    for (field, _) in fields {
        emit(*field, &mut rows);
    }
    rows
}

pub fn print_detail(title: &str, rows: &[(String, String)]) {
    println!("{}", title.bold());
    for (label, value) in rows {
        println!("  {}: {}", label.green(), value);
    }
}

/// One line per hit: name, symbol or formula, kind, score.
pub fn print_hits(hits: &[SearchHit]) {
    for SearchHit { hit, score } in hits {
        match hit {
            Hit::Element(e) => println!(
                "{} ({})  {} {}",
                e.name.blue().bold(),
                e.symbol,
                "element".dimmed(),
                score.to_string().dimmed()
            ),
            Hit::Compound(c) => println!(
                "{} ({})  {} {}",
                c.name.magenta().bold(),
                c.formula,
                "compound".dimmed(),
                score.to_string().dimmed()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chemdata_model::{CompoundRecord, ElementRecord};

    fn sodium() -> ElementRecord {
        ElementRecord {
            symbol: "Na".to_string(),
            name: "Sodium".to_string(),
            atomic_number: 11,
            atomic_mass: Some(22.99),
            density: Some(0.971),
            melting_point: Some(370.94),
            boiling_point: None,
            electronegativity: Some(0.93),
            electron_configuration: "[Ne] 3s".to_string(),
            oxidation_states: "-1, +1".to_string(),
            atomic_radius: Some(180.0),
            discovery_year: Some(1807),
            group_number: Some(1),
            period: Some(3),
            category: String::new(),
        }
    }

    #[test]
    fn labels() {
        assert_eq!(label("atomic_number"), "Z");
        assert_eq!(label("electronegativity"), "EN");
        assert_eq!(label("oxidation_states"), "Oxidation States");
        assert_eq!(label("pubchem_cid"), "Pubchem Cid");
        assert_eq!(label("name"), "Name");
    }

    #[test]
    fn element_detail_order_units_and_nulls() {
        let order = ["symbol", "name", "atomic_number", "atomic_mass", "density"];
        let rows = detail_rows(&sodium().fields(), &order);
        let labels: Vec<&str> = rows.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Name",
                "Symbol",
                "Z",
                "A",
                "Density",
                "Mp",
                "EN",
                "EC",
                "Oxidation States",
                "Atomic Radius",
                "Discovery Year",
                "Group Number",
                "Period",
            ]
        );
        assert_eq!(rows[3].1, "22.99 u");
        assert_eq!(rows[4].1, "0.971 g/cm³");
        assert_eq!(rows[5].1, "370.94 K");
        assert_eq!(rows[9].1, "180 pm");
    }

    #[test]
    fn compound_detail_skips_unknown_order_fields() {
        let water = CompoundRecord {
            name: "Water".to_string(),
            formula: "H2O".to_string(),
            molecular_weight: Some(18.015),
            density: None,
            melting_point: None,
            boiling_point: None,
            solubility: None,
            appearance: None,
            iupac_name: Some("oxidane".to_string()),
            cas_number: None,
            pubchem_cid: Some(962),
        };
        let rows = detail_rows(&water.fields(), &["symbol", "formula", "molecular_weight"]);
        assert_eq!(
            rows,
            vec![
                ("Name".to_string(), "Water".to_string()),
                ("Formula".to_string(), "H2O".to_string()),
                ("MW".to_string(), "18.015 u".to_string()),
                ("Iupac Name".to_string(), "oxidane".to_string()),
                ("Pubchem Cid".to_string(), "962".to_string()),
            ]
        );
    }
}
