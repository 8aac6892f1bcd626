//! `chemdata.json` configuration.
//!
//! Every field has a default, so a partial file (or none at all) is fine.

use anyhow::{Context, Result};
use chemdata_ingest_pubchem::PubChemConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "chemdata.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChemConfig {
    pub db_path: PathBuf,
    pub cache_dir: PathBuf,
    pub names_file: PathBuf,
    pub pubchem: PubChemConfig,
    pub display: DisplayConfig,
    pub search: SearchConfig,
    /// Element fields shown first in detail views, in this order.
    pub element_fields: Vec<String>,
    /// Compound fields shown first in detail views, in this order.
    pub compound_fields: Vec<String>,
}

impl Default for ChemConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("data/chemdata.db"),
            cache_dir: PathBuf::from("data/cache"),
            names_file: PathBuf::from("data/compounds.txt"),
            pubchem: PubChemConfig::default(),
            display: DisplayConfig::default(),
            search: SearchConfig::default(),
            element_fields: ["symbol", "name", "atomic_number", "atomic_mass", "density"]
                .map(String::from)
                .to_vec(),
            compound_fields: ["formula", "name", "molecular_weight"]
                .map(String::from)
                .to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub max_results: usize,
    pub use_colors: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_results: 50,
            use_colors: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Minimum fuzzy score (0-100) for an element to be listed.
    pub fuzzy_threshold: u32,
    pub enable_fuzzy: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 60,
            enable_fuzzy: true,
        }
    }
}

impl ChemConfig {
    /// Load from `path`. A missing file gives the defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read config: {}", path.display()))
            }
        };
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Field order for detail views: element fields, then compound fields.
    pub fn detail_order(&self) -> Vec<&str> {
        self.element_fields
            .iter()
            .chain(self.compound_fields.iter())
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let cfg = ChemConfig::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(cfg, ChemConfig::default());
        assert_eq!(cfg.display.max_results, 50);
        assert_eq!(cfg.search.fuzzy_threshold, 60);
        assert_eq!(cfg.pubchem.timeout_secs, 10);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chemdata.json");
        fs::write(
            &path,
            r#"{ "db_path": "/tmp/x.db", "search": { "fuzzy_threshold": 75 }, "pubchem": { "timeout_secs": 3 } }"#,
        )
        .unwrap();

        let cfg = ChemConfig::load(&path).unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/x.db"));
        assert_eq!(cfg.search.fuzzy_threshold, 75);
        assert!(cfg.search.enable_fuzzy);
        assert_eq!(cfg.pubchem.timeout_secs, 3);
        assert_eq!(cfg.pubchem.base_url, PubChemConfig::default().base_url);
        assert_eq!(cfg.cache_dir, PathBuf::from("data/cache"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chemdata.json");
        fs::write(&path, "{ db_path: ").unwrap();
        let err = ChemConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn detail_order_chains_element_then_compound_fields() {
        let cfg = ChemConfig::default();
        assert_eq!(
            cfg.detail_order(),
            vec![
                "symbol",
                "name",
                "atomic_number",
                "atomic_mass",
                "density",
                "formula",
                "name",
                "molecular_weight"
            ]
        );
    }
}
