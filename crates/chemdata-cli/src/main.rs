//! Chemdata CLI
//!
//! - `init`: create the database, load elements, resolve the compound list
//! - `search`, `element`, `compound`, `elements`: read the database
//! - `fetch`: resolve one compound through the cache (optionally store it)
//! - `cache`: inspect or drop cache entries

use anyhow::{anyhow, Context, Result};
use chemdata_ingest_elements::{ElementProvider, PeriodicTable};
use chemdata_ingest_pubchem::{CompoundCache, CompoundResolver, Endpoints, HttpTransport};
use chemdata_seed::Seeder;
use chemdata_storage::{ChemStore, StoreConfig};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

mod config;
mod display;
mod search;

use config::{ChemConfig, DEFAULT_CONFIG_PATH};
use search::ElementMatch;

#[derive(Parser)]
#[command(name = "chemdata")]
#[command(author, version, about = "Chemical element and compound database")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Config file (JSON). Missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// SQLite database (overrides config)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Compound cache directory (overrides config)
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Only warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the schema, load all elements, and resolve the compound name list.
    Init {
        /// Newline-delimited compound names (`#` comments allowed)
        #[arg(long)]
        names: Option<PathBuf>,
    },

    /// Ranked search over elements and compounds.
    Search {
        query: String,
        /// Minimum fuzzy score (0-100) for elements
        #[arg(long)]
        threshold: Option<u32>,
        /// Substring matching only, no fuzzy scoring
        #[arg(long)]
        exact: bool,
        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show one element (symbol, name, or atomic number).
    Element { key: String },

    /// Show one stored compound by exact name.
    Compound { name: String },

    /// List every element by atomic number.
    Elements,

    /// Resolve one compound through the cache and print it as JSON.
    Fetch {
        name: String,
        /// Also upsert the result into the database
        #[arg(long)]
        store: bool,
    },

    /// Compound cache maintenance.
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },
}

#[derive(Subcommand)]
enum CacheCommands {
    /// Drop the cached entry for a name.
    Evict { name: String },
    /// Print the cache file path for a name.
    Path { name: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    let mut cfg = ChemConfig::load(&cli.global.config)?;
    if let Some(db) = cli.global.db.clone() {
        cfg.db_path = db;
    }
    if let Some(dir) = cli.global.cache_dir.clone() {
        cfg.cache_dir = dir;
    }
    if !cfg.display.use_colors {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Init { names } => {
            let names = names.unwrap_or_else(|| cfg.names_file.clone());
            cmd_init(&cfg, &names)
        }
        Commands::Search {
            query,
            threshold,
            exact,
            limit,
        } => cmd_search(&cfg, &query, threshold, exact, limit),
        Commands::Element { key } => cmd_element(&cfg, &key),
        Commands::Compound { name } => cmd_compound(&cfg, &name),
        Commands::Elements => cmd_elements(&cfg),
        Commands::Fetch { name, store } => cmd_fetch(&cfg, &name, store),
        Commands::Cache { command } => match command {
            CacheCommands::Evict { name } => cmd_cache_evict(&cfg, &name),
            CacheCommands::Path { name } => cmd_cache_path(&cfg, &name),
        },
    }
}

fn init_tracing(args: &GlobalArgs) {
    let level = if args.quiet {
        tracing::Level::WARN
    } else {
        match args.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

// ============================================================================
// Wiring
// ============================================================================

fn open_store(cfg: &ChemConfig) -> Result<ChemStore> {
    ChemStore::open(StoreConfig::new(&cfg.db_path))
        .with_context(|| format!("failed to open database: {}", cfg.db_path.display()))
}

fn open_cache(cfg: &ChemConfig) -> Result<CompoundCache> {
    CompoundCache::open(&cfg.cache_dir)
        .with_context(|| format!("failed to open cache: {}", cfg.cache_dir.display()))
}

fn build_resolver(cfg: &ChemConfig) -> Result<CompoundResolver<HttpTransport>> {
    let transport = HttpTransport::new(&cfg.pubchem).context("failed to build http client")?;
    let endpoints = Endpoints::from_config(&cfg.pubchem)
        .with_context(|| format!("invalid PubChem base url: {}", cfg.pubchem.base_url))?;
    Ok(CompoundResolver::new(transport, open_cache(cfg)?, endpoints))
}

// ============================================================================
// Commands
// ============================================================================

fn cmd_init(cfg: &ChemConfig, names: &Path) -> Result<()> {
    println!(
        "{} {}",
        "Initializing".green().bold(),
        cfg.db_path.display()
    );

    let seeder = Seeder::new(
        open_store(cfg)?,
        ElementProvider::embedded()?,
        build_resolver(cfg)?,
    );
    let summary = seeder.run(names)?;

    println!("  elements:  {}", summary.elements);
    if summary.names_file_found {
        println!("  names:     {}", summary.names);
        println!("  inserted:  {}", summary.inserted);
        println!("  skipped:   {}", summary.skipped);
        println!("  failed:    {}", summary.failed);
    } else {
        println!(
            "  {} no name list at {}",
            "warning:".yellow().bold(),
            names.display()
        );
    }
    println!("{}", "ok".green().bold());
    Ok(())
}

fn cmd_search(
    cfg: &ChemConfig,
    query: &str,
    threshold: Option<u32>,
    exact: bool,
    limit: Option<usize>,
) -> Result<()> {
    let store = open_store(cfg)?;
    let fuzzy = cfg.search.enable_fuzzy && !exact;

    let (elements, mode) = if fuzzy {
        let threshold = threshold.unwrap_or(cfg.search.fuzzy_threshold);
        (store.list_elements()?, ElementMatch::Fuzzy { threshold })
    } else {
        (store.search_elements(query)?, ElementMatch::Substring)
    };
    let compounds = store.search_compounds(query)?;

    let hits = search::rank(
        query,
        elements,
        compounds,
        mode,
        limit.unwrap_or(cfg.display.max_results),
    );
    if hits.is_empty() {
        eprintln!("{} no matches for {:?}", "info:".yellow().bold(), query);
        return Ok(());
    }
    display::print_hits(&hits);
    Ok(())
}

fn cmd_element(cfg: &ChemConfig, key: &str) -> Result<()> {
    let symbol = PeriodicTable::embedded()?
        .lookup(key)
        .map(|e| e.symbol.clone())
        .unwrap_or_else(|_| key.to_string());

    let element = open_store(cfg)?
        .find_element_by_symbol(&symbol)?
        .ok_or_else(|| anyhow!("element not found: {key} (run `chemdata init` first?)"))?;

    let rows = display::detail_rows(&element.fields(), &cfg.detail_order());
    display::print_detail(&format!("{} ({})", element.name, element.symbol), &rows);
    Ok(())
}

fn cmd_compound(cfg: &ChemConfig, name: &str) -> Result<()> {
    let compound = open_store(cfg)?
        .find_compound_by_name(name)?
        .ok_or_else(|| anyhow!("compound not found: {name}"))?;

    let rows = display::detail_rows(&compound.fields(), &cfg.detail_order());
    display::print_detail(&format!("{} ({})", compound.name, compound.formula), &rows);
    Ok(())
}

fn cmd_elements(cfg: &ChemConfig) -> Result<()> {
    for e in open_store(cfg)?.list_elements()? {
        let mass = e.atomic_mass.map(|m| format!("{m:.3}")).unwrap_or_default();
        println!(
            "{:>3}  {:<3}  {:<14} {}",
            e.atomic_number,
            e.symbol.bold(),
            e.name,
            mass.dimmed()
        );
    }
    Ok(())
}

fn cmd_fetch(cfg: &ChemConfig, name: &str, store: bool) -> Result<()> {
    let resolver = build_resolver(cfg)?;
    let compound = resolver
        .resolve(name)
        .ok_or_else(|| anyhow!("could not resolve compound: {name}"))?;

    println!("{}", serde_json::to_string_pretty(&compound)?);

    if store {
        let db = open_store(cfg)?;
        db.init_schema()?;
        db.upsert_compound(&compound)?;
        eprintln!(
            "{} stored {} in {}",
            "ok".green().bold(),
            compound.name,
            cfg.db_path.display()
        );
    }
    Ok(())
}

fn cmd_cache_evict(cfg: &ChemConfig, name: &str) -> Result<()> {
    let cache = open_cache(cfg)?;
    if cache.evict(name)? {
        eprintln!("{} evicted {}", "ok".green().bold(), name);
    } else {
        eprintln!("{} nothing cached for {}", "info:".yellow().bold(), name);
    }
    Ok(())
}

fn cmd_cache_path(cfg: &ChemConfig, name: &str) -> Result<()> {
    let cache = open_cache(cfg)?;
    println!("{}", cache.path_for(name).display());
    Ok(())
}
