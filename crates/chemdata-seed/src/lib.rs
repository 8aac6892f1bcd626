//! Database initialization
//!
//! One sequential pass:
//!
//! 1. create the schema
//! 2. load every element from the provider and upsert it (all or nothing)
//! 3. read the compound name list
//! 4. for each name not already stored, resolve it and upsert the result
//!
//! A missing name list is not an error: elements are still seeded and the run
//! ends early. Names that fail to resolve are logged and skipped.

use anyhow::{Context, Result};
use chemdata_ingest_elements::ElementProvider;
use chemdata_ingest_pubchem::{CompoundResolver, Transport};
use chemdata_storage::ChemStore;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// What a run did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    /// Elements upserted.
    pub elements: usize,
    /// Names read from the list (after dropping comments and blanks).
    pub names: usize,
    /// Compounds newly resolved and stored.
    pub inserted: usize,
    /// Names already present in the store.
    pub skipped: usize,
    /// Names that could not be resolved.
    pub failed: usize,
    pub names_file_found: bool,
}

/// Trimmed names, without blank lines or `#` comments.
pub fn parse_name_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub struct Seeder<'a, T> {
    store: ChemStore,
    elements: ElementProvider<'a>,
    resolver: CompoundResolver<T>,
}

impl<'a, T: Transport> Seeder<'a, T> {
    pub fn new(store: ChemStore, elements: ElementProvider<'a>, resolver: CompoundResolver<T>) -> Self {
        Self {
            store,
            elements,
            resolver,
        }
    }

    pub fn store(&self) -> &ChemStore {
        &self.store
    }

    pub fn resolver(&self) -> &CompoundResolver<T> {
        &self.resolver
    }

    pub fn run(&self, names_file: &Path) -> Result<SeedSummary> {
        let mut summary = SeedSummary::default();

        self.store
            .init_schema()
            .with_context(|| format!("initializing schema in {}", self.store.path().display()))?;

        summary.elements = self.seed_elements()?;
        tracing::info!(count = summary.elements, "elements stored");

        let text = match fs::read_to_string(names_file) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %names_file.display(),
                    "compound name list not found, skipping compounds"
                );
                return Ok(summary);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", names_file.display()));
            }
        };
        summary.names_file_found = true;

        let names = parse_name_list(&text);
        summary.names = names.len();
        for name in &names {
            self.seed_compound(name, &mut summary)?;
        }

        tracing::info!(
            elements = summary.elements,
            names = summary.names,
            inserted = summary.inserted,
            skipped = summary.skipped,
            failed = summary.failed,
            "database initialization complete"
        );
        Ok(summary)
    }

    fn seed_elements(&self) -> Result<usize> {
        let records = self
            .elements
            .fetch_all()
            .context("loading elements from the provider")?;
        self.store
            .upsert_elements(&records)
            .context("storing elements")
    }

    fn seed_compound(&self, name: &str, summary: &mut SeedSummary) -> Result<()> {
        let existing = self
            .store
            .find_compound_by_name(name)
            .with_context(|| format!("looking up compound {name}"))?;
        if existing.is_some() {
            tracing::debug!(name = %name, "compound already stored");
            summary.skipped += 1;
            return Ok(());
        }

        match self.resolver.resolve(name) {
            Some(compound) => {
                self.store
                    .upsert_compound(&compound)
                    .with_context(|| format!("storing compound {name}"))?;
                tracing::info!(name = %name, cid = ?compound.pubchem_cid, "compound stored");
                summary.inserted += 1;
            }
            None => {
                tracing::warn!(name = %name, "failed to fetch compound");
                summary.failed += 1;
            }
        }
        Ok(())
    }
}
