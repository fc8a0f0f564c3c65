//! scrutin: command-line front end for scrutin-core
//!
//! Runs the search pipeline over a dataset from your terminal: free-text
//! search, structured filters, ordering, suggestions and the recent-search
//! history.
//!
//! Usage examples
//! --------------
//!
//! - Search the bundled sample countries
//!   $ scrutin search sen
//!
//! - West African countries voting in 2024
//!   $ scrutin search --region "Afrique de l'Ouest" --from 2024 --to 2024
//!
//! - Order by year
//!   $ scrutin search --sort date
//!
//! - Autocomplete
//!   $ scrutin suggest ma
//!
//! - Recent searches
//!   $ scrutin recent
//!   $ scrutin recent --clear
//!
//! Data source
//! -----------
//!
//! Without `--input` the bundled sample of African countries is used. Any
//! JSON array of objects works; `.json.gz` files are decompressed on the
//! fly. Column names come from the `[fields]` section of the config file.
mod args;

use crate::args::{CliArgs, Commands, SearchArgs};
use anyhow::Context;
use clap::Parser;
use scrutin_core::config::Config;
use scrutin_core::loader;
use scrutin_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.debug);

    let config = Config::load(args.config.as_deref()).context("loading configuration")?;

    let records = match &args.input {
        Some(path) => loader::load_records_with(path, &config.fields.record)
            .with_context(|| format!("loading dataset {}", path.display()))?,
        None => loader::sample_countries()?.to_vec(),
    };
    tracing::debug!(records = records.len(), "dataset ready");

    let history = RecentSearches::new(FileStore::new(config.history.resolved_dir()));

    match args.command {
        Commands::Search(search) => run_search(&config, records, &history, search),

        Commands::Suggest { query, keys, limit } => {
            let engine = engine_for(&config, records, keys);
            let limit = limit.unwrap_or(config.search.suggestion_limit);
            for r in engine.suggest(&query, limit) {
                println!("{}", r.name());
            }
            Ok(())
        }

        Commands::Recent { key, clear } => {
            let key = key.unwrap_or_else(|| config.history.key.clone());
            if clear {
                history.clear(&key).context("clearing recent searches")?;
                println!("Cleared recent searches for {key}");
            } else {
                for line in recent_lines(&history, &key) {
                    println!("{line}");
                }
            }
            Ok(())
        }

        Commands::Stats => {
            let stats = engine_for(&config, records, Vec::new()).stats();
            println!("Dataset statistics:");
            println!("  Records: {}", stats.records);
            println!("  Regions:");
            for (region, count) in &stats.regions {
                println!("    {region} ({count})");
            }
            println!("  Types:");
            for (kind, count) in &stats.types {
                println!("    {kind} ({count})");
            }
            match (stats.earliest_year, stats.latest_year) {
                (Some(a), Some(b)) => println!("  Years: {a}-{b}"),
                _ => println!("  Years: none"),
            }
            Ok(())
        }
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Lines printed by `scrutin recent`; unreadable history shows as empty.
fn recent_lines<S: KeyValueStore>(history: &RecentSearches<S>, key: &str) -> Vec<String> {
    let recent = history.load(key);
    if recent.is_empty() {
        return vec!["No recent searches".to_string()];
    }
    recent
}

/// Engine over `records`, searching `keys` or the configured keys when empty.
fn engine_for(config: &Config, records: Vec<DynRecord>, keys: Vec<String>) -> SearchEngine<DynRecord> {
    let keys = if keys.is_empty() { config.search.keys.clone() } else { keys };
    SearchEngine::with_keys(records, keys).with_fields(config.fields.filter.clone())
}

fn run_search<S: KeyValueStore>(
    config: &Config,
    records: Vec<DynRecord>,
    history: &RecentSearches<S>,
    args: SearchArgs,
) -> anyhow::Result<()> {
    let mut filters = FilterSpec::new()
        .regions(args.regions)
        .types(args.types)
        .statuses(args.statuses)
        .expertise(args.expertise);
    if args.from.is_some() || args.to.is_some() {
        filters = filters.year_range(YearRange::new(args.from, args.to));
    }

    let request = SearchRequest::new(args.query.as_str())
        .filters(filters)
        .sort(args.sort.unwrap_or(config.search.sort));

    let engine = engine_for(config, records, args.keys);
    let results = engine.run(&request);

    let key = args.history.unwrap_or_else(|| config.history.key.clone());
    history.save(&key, &args.query);

    if results.is_empty() {
        println!("No records found matching: {}", args.query);
        return Ok(());
    }
    let shown = args.limit.unwrap_or(results.len());
    for r in results.iter().take(shown) {
        println!("{} ({})", r.name(), r.id());
    }
    if shown < results.len() {
        println!("... {} more", results.len() - shown);
    }
    Ok(())
}
