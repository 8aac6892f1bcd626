//! Table definitions.
//!
//! The schema is additive only: tables are created if missing and never
//! altered. `compounds.name` is unique so `INSERT OR REPLACE` keys on it.

pub const CREATE_ELEMENTS: &str = "
CREATE TABLE IF NOT EXISTS elements (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    symbol TEXT UNIQUE NOT NULL,
    name TEXT NOT NULL,
    atomic_number INTEGER UNIQUE NOT NULL,
    atomic_mass REAL,
    density REAL,
    melting_point REAL,
    boiling_point REAL,
    electronegativity REAL,
    electron_configuration TEXT,
    oxidation_states TEXT,
    atomic_radius REAL,
    discovery_year INTEGER,
    group_number INTEGER,
    period INTEGER,
    category TEXT
);";

pub const CREATE_COMPOUNDS: &str = "
CREATE TABLE IF NOT EXISTS compounds (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE NOT NULL,
    formula TEXT NOT NULL,
    molecular_weight REAL,
    density REAL,
    melting_point REAL,
    boiling_point REAL,
    solubility TEXT,
    appearance TEXT,
    iupac_name TEXT,
    cas_number TEXT,
    pubchem_cid INTEGER
);";

/// Databases created before `name` was unique get the constraint here.
/// Fails if such a database already holds duplicate names.
pub const COMPOUND_NAME_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_compounds_name ON compounds(name);";

/// `INSERT OR REPLACE INTO {table} ({columns}) VALUES (?1, ?2, ...)`
pub fn upsert_sql(table: &str, columns: &[&str]) -> String {
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
    format!(
        "INSERT OR REPLACE INTO {table} ({}) VALUES ({})",
        columns.join(", "),
        placeholders.join(", ")
    )
}

pub fn select_sql(table: &str, columns: &[&str]) -> String {
    format!("SELECT {} FROM {table}", columns.join(", "))
}

/// Escape `query` for use inside `LIKE '%…%' ESCAPE '\'`.
pub fn like_pattern(query: &str) -> String {
    let mut out = String::with_capacity(query.len() + 2);
    out.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}
