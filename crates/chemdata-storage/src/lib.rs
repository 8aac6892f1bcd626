//! Chemdata SQLite storage
//!
//! ```text
//! ┌──────────────┐   upsert    ┌─────────────────────────────┐
//! │   Seeder /   │────────────►│  chemdata.db                │
//! │     CLI      │             │   elements  (symbol, Z uniq)│
//! │              │◄────────────│   compounds (name uniq)     │
//! └──────────────┘ find/search └─────────────────────────────┘
//! ```
//!
//! Every operation opens its own connection, runs, and drops it. There is no
//! pooling and no long-lived handle; writes are committed before return.

pub mod schema;

#[cfg(test)]
mod tests;

use chemdata_model::{CompoundRecord, ElementRecord};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub db_path: PathBuf,
}

impl StoreConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreCounts {
    pub elements: u64,
    pub compounds: u64,
}

// ============================================================================
// Store
// ============================================================================

#[derive(Debug, Clone)]
pub struct ChemStore {
    config: StoreConfig,
}

impl ChemStore {
    /// Prepare a store at `config.db_path`, creating the parent directory.
    ///
    /// The database file itself is created by the first connection.
    pub fn open(config: StoreConfig) -> Result<Self> {
        if let Some(parent) = config.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { config })
    }

    pub fn path(&self) -> &Path {
        &self.config.db_path
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.config.db_path)?)
    }

    pub fn init_schema(&self) -> Result<()> {
        let conn = self.connect()?;
        conn.execute_batch(schema::CREATE_ELEMENTS)?;
        conn.execute_batch(schema::CREATE_COMPOUNDS)?;
        if let Err(err) = conn.execute_batch(schema::COMPOUND_NAME_INDEX) {
            tracing::warn!(
                path = %self.config.db_path.display(),
                error = %err,
                "could not enforce unique compound names"
            );
        }
        tracing::debug!(path = %self.config.db_path.display(), "schema ready");
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------------

    pub fn upsert_element(&self, element: &ElementRecord) -> Result<()> {
        let conn = self.connect()?;
        insert_element(&conn, element)?;
        Ok(())
    }

    /// Upsert a batch inside one transaction.
    pub fn upsert_elements(&self, elements: &[ElementRecord]) -> Result<usize> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        for element in elements {
            insert_element(&tx, element)?;
        }
        tx.commit()?;
        Ok(elements.len())
    }

    pub fn upsert_compound(&self, compound: &CompoundRecord) -> Result<()> {
        let conn = self.connect()?;
        conn.execute(
            &schema::upsert_sql("compounds", &CompoundRecord::COLUMNS),
            params![
                compound.name,
                compound.formula,
                compound.molecular_weight,
                compound.density,
                compound.melting_point,
                compound.boiling_point,
                compound.solubility,
                compound.appearance,
                compound.iupac_name,
                compound.cas_number,
                compound.pubchem_cid,
            ],
        )?;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    pub fn find_compound_by_name(&self, name: &str) -> Result<Option<CompoundRecord>> {
        let conn = self.connect()?;
        let sql = format!(
            "{} WHERE name = ?1",
            schema::select_sql("compounds", &CompoundRecord::COLUMNS)
        );
        Ok(conn.query_row(&sql, params![name], compound_from_row).optional()?)
    }

    pub fn find_element_by_symbol(&self, symbol: &str) -> Result<Option<ElementRecord>> {
        let conn = self.connect()?;
        let sql = format!(
            "{} WHERE symbol = ?1",
            schema::select_sql("elements", &ElementRecord::COLUMNS)
        );
        Ok(conn.query_row(&sql, params![symbol], element_from_row).optional()?)
    }

    pub fn list_elements(&self) -> Result<Vec<ElementRecord>> {
        let sql = format!(
            "{} ORDER BY atomic_number",
            schema::select_sql("elements", &ElementRecord::COLUMNS)
        );
        self.query_elements(&sql, None)
    }

    pub fn list_compounds(&self) -> Result<Vec<CompoundRecord>> {
        let sql = format!(
            "{} ORDER BY name",
            schema::select_sql("compounds", &CompoundRecord::COLUMNS)
        );
        self.query_compounds(&sql, None)
    }

    /// Case-insensitive substring match on name, symbol, or atomic number.
    pub fn search_elements(&self, query: &str) -> Result<Vec<ElementRecord>> {
        let sql = format!(
            "{} WHERE name LIKE ?1 ESCAPE '\\' \
               OR symbol LIKE ?1 ESCAPE '\\' \
               OR CAST(atomic_number AS TEXT) LIKE ?1 ESCAPE '\\' \
             ORDER BY atomic_number",
            schema::select_sql("elements", &ElementRecord::COLUMNS)
        );
        self.query_elements(&sql, Some(&schema::like_pattern(query)))
    }

    /// Case-insensitive substring match on name or formula.
    pub fn search_compounds(&self, query: &str) -> Result<Vec<CompoundRecord>> {
        let sql = format!(
            "{} WHERE name LIKE ?1 ESCAPE '\\' OR formula LIKE ?1 ESCAPE '\\' ORDER BY name",
            schema::select_sql("compounds", &CompoundRecord::COLUMNS)
        );
        self.query_compounds(&sql, Some(&schema::like_pattern(query)))
    }

    pub fn counts(&self) -> Result<StoreCounts> {
        let conn = self.connect()?;
        let count = |table: &str| -> Result<u64> {
            let n: i64 =
                conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
            Ok(n as u64)
        };
        Ok(StoreCounts {
            elements: count("elements")?,
            compounds: count("compounds")?,
        })
    }

    fn query_elements(&self, sql: &str, pattern: Option<&str>) -> Result<Vec<ElementRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = match pattern {
            Some(p) => stmt.query_map(params![p], element_from_row)?,
            None => stmt.query_map([], element_from_row)?,
        };
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn query_compounds(&self, sql: &str, pattern: Option<&str>) -> Result<Vec<CompoundRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = match pattern {
            Some(p) => stmt.query_map(params![p], compound_from_row)?,
            None => stmt.query_map([], compound_from_row)?,
        };
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

// ============================================================================
// Row mapping
// ============================================================================

fn insert_element(conn: &Connection, e: &ElementRecord) -> rusqlite::Result<usize> {
    conn.execute(
        &schema::upsert_sql("elements", &ElementRecord::COLUMNS),
        params![
            e.symbol,
            e.name,
            e.atomic_number,
            e.atomic_mass,
            e.density,
            e.melting_point,
            e.boiling_point,
            e.electronegativity,
            e.electron_configuration,
            e.oxidation_states,
            e.atomic_radius,
            e.discovery_year,
            e.group_number,
            e.period,
            e.category,
        ],
    )
}

fn element_from_row(row: &Row<'_>) -> rusqlite::Result<ElementRecord> {
    Ok(ElementRecord {
        symbol: row.get("symbol")?,
        name: row.get("name")?,
        atomic_number: row.get("atomic_number")?,
        atomic_mass: row.get("atomic_mass")?,
        density: row.get("density")?,
        melting_point: row.get("melting_point")?,
        boiling_point: row.get("boiling_point")?,
        electronegativity: row.get("electronegativity")?,
        electron_configuration: row
            .get::<_, Option<String>>("electron_configuration")?
            .unwrap_or_default(),
        oxidation_states: row
            .get::<_, Option<String>>("oxidation_states")?
            .unwrap_or_default(),
        atomic_radius: row.get("atomic_radius")?,
        discovery_year: row.get("discovery_year")?,
        group_number: row.get("group_number")?,
        period: row.get("period")?,
        category: row.get::<_, Option<String>>("category")?.unwrap_or_default(),
    })
}

fn compound_from_row(row: &Row<'_>) -> rusqlite::Result<CompoundRecord> {
    Ok(CompoundRecord {
        name: row.get("name")?,
        formula: row.get("formula")?,
        molecular_weight: row.get("molecular_weight")?,
        density: row.get("density")?,
        melting_point: row.get("melting_point")?,
        boiling_point: row.get("boiling_point")?,
        solubility: row.get("solubility")?,
        appearance: row.get("appearance")?,
        iupac_name: row.get("iupac_name")?,
        cas_number: row.get("cas_number")?,
        pubchem_cid: row.get("pubchem_cid")?,
    })
}
