//! Store tests against scratch databases

use super::*;
use tempfile::tempdir;

fn test_store() -> (ChemStore, tempfile::TempDir) {
    let dir = tempdir().unwrap();
    let store = ChemStore::open(StoreConfig::new(dir.path().join("nested/chem.db"))).unwrap();
    store.init_schema().unwrap();
    (store, dir)
}

fn element(symbol: &str, name: &str, z: u32) -> ElementRecord {
    ElementRecord {
        symbol: symbol.to_string(),
        name: name.to_string(),
        atomic_number: z,
        atomic_mass: Some(z as f64 * 2.0),
        density: None,
        melting_point: Some(300.0),
        boiling_point: None,
        electronegativity: Some(1.0),
        electron_configuration: "[Ne] 3s1".to_string(),
        oxidation_states: "+1".to_string(),
        atomic_radius: None,
        discovery_year: Some(1807),
        group_number: Some(1),
        period: Some(3),
        category: "alkali metal".to_string(),
    }
}

fn compound(name: &str, formula: &str, cid: i64) -> CompoundRecord {
    CompoundRecord {
        name: name.to_string(),
        formula: formula.to_string(),
        molecular_weight: Some(18.015),
        density: None,
        melting_point: Some(0.0),
        boiling_point: Some(100.0),
        solubility: None,
        appearance: Some("Colorless liquid".to_string()),
        iupac_name: Some("oxidane".to_string()),
        cas_number: None,
        pubchem_cid: Some(cid),
    }
}

#[test]
fn open_creates_parent_directory() {
    let (store, dir) = test_store();
    assert!(dir.path().join("nested").is_dir());
    assert!(store.path().exists());
}

#[test]
fn init_schema_is_idempotent() {
    let (store, _dir) = test_store();
    store.init_schema().unwrap();
    store.init_schema().unwrap();
    assert_eq!(store.counts().unwrap(), StoreCounts::default());
}

#[test]
fn element_upsert_replaces_by_symbol() {
    let (store, _dir) = test_store();
    store.upsert_element(&element("Na", "Sodium", 11)).unwrap();

    let mut updated = element("Na", "Sodium", 11);
    updated.density = Some(0.968);
    store.upsert_element(&updated).unwrap();

    assert_eq!(store.counts().unwrap().elements, 1);
    assert_eq!(store.find_element_by_symbol("Na").unwrap(), Some(updated));
    assert_eq!(store.find_element_by_symbol("na").unwrap(), None);
}

#[test]
fn batch_upsert_twice_keeps_one_row_each() {
    let (store, _dir) = test_store();
    let batch = vec![
        element("H", "Hydrogen", 1),
        element("He", "Helium", 2),
        element("Li", "Lithium", 3),
    ];
    assert_eq!(store.upsert_elements(&batch).unwrap(), 3);
    store.upsert_elements(&batch).unwrap();
    assert_eq!(store.counts().unwrap().elements, 3);

    let listed: Vec<u32> = store
        .list_elements()
        .unwrap()
        .into_iter()
        .map(|e| e.atomic_number)
        .collect();
    assert_eq!(listed, vec![1, 2, 3]);
}

#[test]
fn compound_upsert_is_unique_on_name() {
    let (store, _dir) = test_store();
    store.upsert_compound(&compound("Water", "H2O", 962)).unwrap();
    store.upsert_compound(&compound("Water", "H2O", 962)).unwrap();

    let mut replaced = compound("Water", "H2O", 962);
    replaced.density = Some(0.997);
    store.upsert_compound(&replaced).unwrap();

    assert_eq!(store.counts().unwrap().compounds, 1);
    assert_eq!(store.find_compound_by_name("Water").unwrap(), Some(replaced));
}

#[test]
fn find_compound_is_exact() {
    let (store, _dir) = test_store();
    store.upsert_compound(&compound("Water", "H2O", 962)).unwrap();
    assert!(store.find_compound_by_name("water").unwrap().is_none());
    assert!(store.find_compound_by_name("Wat").unwrap().is_none());
}

#[test]
fn search_elements_matches_name_symbol_and_number() {
    let (store, _dir) = test_store();
    store
        .upsert_elements(&[
            element("Na", "Sodium", 11),
            element("Ne", "Neon", 10),
            element("Sn", "Tin", 50),
        ])
        .unwrap();

    let by_symbol: Vec<String> = store
        .search_elements("na")
        .unwrap()
        .into_iter()
        .map(|e| e.symbol)
        .collect();
    assert_eq!(by_symbol, vec!["Na"]);

    let by_name = store.search_elements("NEO").unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Neon");

    let by_number: Vec<u32> = store
        .search_elements("1")
        .unwrap()
        .into_iter()
        .map(|e| e.atomic_number)
        .collect();
    assert_eq!(by_number, vec![10, 11]);

    assert_eq!(store.search_elements("").unwrap().len(), 3);
}

#[test]
fn search_treats_wildcards_literally() {
    let (store, _dir) = test_store();
    store.upsert_compound(&compound("Water", "H2O", 962)).unwrap();
    store
        .upsert_compound(&compound("100% ethanol", "C2H6O", 702))
        .unwrap();

    assert!(store.search_compounds("_").unwrap().is_empty());
    let pct = store.search_compounds("%").unwrap();
    assert_eq!(pct.len(), 1);
    assert_eq!(pct[0].name, "100% ethanol");

    let by_formula = store.search_compounds("h2o").unwrap();
    assert_eq!(by_formula.len(), 1);
    assert_eq!(by_formula[0].name, "Water");
}

#[test]
fn list_compounds_is_sorted_by_name() {
    let (store, _dir) = test_store();
    store.upsert_compound(&compound("Water", "H2O", 962)).unwrap();
    store.upsert_compound(&compound("Benzene", "C6H6", 241)).unwrap();
    let names: Vec<String> = store
        .list_compounds()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Benzene", "Water"]);
}

#[test]
fn legacy_table_gets_unique_name_index() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("legacy.db");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE compounds (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                formula TEXT NOT NULL,
                molecular_weight REAL, density REAL, melting_point REAL,
                boiling_point REAL, solubility TEXT, appearance TEXT,
                iupac_name TEXT, cas_number TEXT, pubchem_cid INTEGER
            );",
        )
        .unwrap();
    }

    let store = ChemStore::open(StoreConfig::new(&path)).unwrap();
    store.init_schema().unwrap();
    store.upsert_compound(&compound("Water", "H2O", 962)).unwrap();
    store.upsert_compound(&compound("Water", "H2O", 962)).unwrap();
    assert_eq!(store.counts().unwrap().compounds, 1);
}

#[test]
fn legacy_duplicates_do_not_block_init() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dupes.db");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE compounds (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                formula TEXT NOT NULL,
                molecular_weight REAL, density REAL, melting_point REAL,
                boiling_point REAL, solubility TEXT, appearance TEXT,
                iupac_name TEXT, cas_number TEXT, pubchem_cid INTEGER
            );
            INSERT INTO compounds (name, formula) VALUES ('Water', 'H2O');
            INSERT INTO compounds (name, formula) VALUES ('Water', 'H2O');",
        )
        .unwrap();
    }

    let store = ChemStore::open(StoreConfig::new(&path)).unwrap();
    store.init_schema().unwrap();
    assert_eq!(store.counts().unwrap().compounds, 2);
}
