//! Experimental properties from a PUG View record.
//!
//! PUG View returns a nested `Record.Section[].Section[]...` tree keyed by
//! `TOCHeading`. We only read one branch of it, described declaratively by a
//! [`PropertyPath`]. The walker returns whatever it finds and never fails: any
//! missing key or unexpected shape simply means "no data".

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperimentalField {
    BoilingPoint,
    MeltingPoint,
    Density,
    Solubility,
    Appearance,
}

/// Section title → subsection title → leaf heading → field.
#[derive(Debug, Clone, Copy)]
pub struct PropertyPath {
    pub section: &'static str,
    pub subsection: &'static str,
    pub leaves: &'static [(&'static str, ExperimentalField)],
}

pub const EXPERIMENTAL_PROPERTIES: PropertyPath = PropertyPath {
    section: "Chemical and Physical Properties",
    subsection: "Experimental Properties",
    leaves: &[
        ("Boiling Point", ExperimentalField::BoilingPoint),
        ("Melting Point", ExperimentalField::MeltingPoint),
        ("Density", ExperimentalField::Density),
        ("Solubility", ExperimentalField::Solubility),
        ("Physical Description", ExperimentalField::Appearance),
        ("Color/Form", ExperimentalField::Appearance),
    ],
};

impl PropertyPath {
    pub fn field_for(&self, heading: &str) -> Option<ExperimentalField> {
        self.leaves
            .iter()
            .find(|(title, _)| *title == heading)
            .map(|(_, field)| *field)
    }

    /// Walk `record` and collect the raw text for every mapped leaf.
    ///
    /// Leaves are visited in document order; a later leaf mapped to the same
    /// field replaces the earlier value.
    pub fn extract(&self, record: &Value) -> ExperimentalProperties {
        let mut props = ExperimentalProperties::default();
        let Some(leaves) = self.leaves_of(record) else {
            return props;
        };

        for leaf in leaves {
            let Some(field) = heading(leaf).and_then(|h| self.field_for(h)) else {
                continue;
            };
            if let Some(text) = first_information_value(leaf) {
                props.set(field, text);
            }
        }
        props
    }

    fn leaves_of<'a>(&self, record: &'a Value) -> Option<&'a Vec<Value>> {
        let top = record.get("Record")?.get("Section")?.as_array()?;
        let section = find_section(top, self.section)?;
        let subsection = find_section(section.get("Section")?.as_array()?, self.subsection)?;
        subsection.get("Section")?.as_array()
    }
}

/// Raw experimental text, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperimentalProperties {
    pub boiling_point: Option<String>,
    pub melting_point: Option<String>,
    pub density: Option<String>,
    pub solubility: Option<String>,
    pub appearance: Option<String>,
}

impl ExperimentalProperties {
    pub fn set(&mut self, field: ExperimentalField, value: String) {
        let slot = match field {
            ExperimentalField::BoilingPoint => &mut self.boiling_point,
            ExperimentalField::MeltingPoint => &mut self.melting_point,
            ExperimentalField::Density => &mut self.density,
            ExperimentalField::Solubility => &mut self.solubility,
            ExperimentalField::Appearance => &mut self.appearance,
        };
        *slot = Some(value);
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn heading(section: &Value) -> Option<&str> {
    section.get("TOCHeading").and_then(Value::as_str)
}

fn find_section<'a>(sections: &'a [Value], title: &str) -> Option<&'a Value> {
    sections.iter().find(|s| heading(s) == Some(title))
}

/// First `Information[]` item carrying a string or a number.
fn first_information_value(leaf: &Value) -> Option<String> {
    leaf.get("Information")?
        .as_array()?
        .iter()
        .find_map(information_value)
}

fn information_value(item: &Value) -> Option<String> {
    let value = item.get("Value")?;

    let markup = value
        .get("StringWithMarkup")
        .and_then(|m| m.get(0))
        .and_then(|m| m.get("String"))
        .and_then(Value::as_str);
    if let Some(text) = markup {
        return Some(text.to_string());
    }

    let number = match value.get("Number")?.get(0)? {
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    match value.get("Unit").and_then(Value::as_str) {
        Some(unit) => Some(format!("{number} {unit}")),
        None => Some(number),
    }
}
