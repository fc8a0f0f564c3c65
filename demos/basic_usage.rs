//! Basic usage example for scrutin-rs
//!
//! Loads the bundled sample countries and walks through search, filtering,
//! sorting and suggestions.

use scrutin_core::loader::sample_countries;
use scrutin_core::prelude::*;

fn main() -> Result<()> {
    println!("=== Scrutin-RS Basic Usage Example ===\n");

    let countries = sample_countries()?.to_vec();
    println!("✓ Loaded {} countries\n", countries.len());

    let engine = SearchEngine::with_keys(countries, ["name", "languages"]);

    // Example 1: Free-text search ignores accents and case
    println!("--- Example 1: Search for \"cote\" ---");
    for c in engine.search("cote") {
        println!("- {} ({})", c.name(), c.id());
    }
    println!();

    // Example 2: Search reaches list fields too
    println!("--- Example 2: Countries speaking Arabic (\"arabe\") ---");
    for c in engine.search("arabe") {
        println!("- {}", c.name());
    }
    println!();

    // Example 3: Filter by region
    println!("--- Example 3: Countries in Afrique Australe ---");
    let southern = engine.run(
        &SearchRequest::default().filters(FilterSpec::new().regions(["Afrique Australe"])),
    );
    for c in &southern {
        println!("- {}", c.name());
    }
    println!();

    // Example 4: Order by year
    println!("--- Example 4: Countries by election year ---");
    for c in engine.run(&SearchRequest::default().sort(SortMode::Date)) {
        match c.number("year") {
            Some(y) => println!("- {y:.0}  {}", c.name()),
            None => println!("- ----  {}", c.name()),
        }
    }
    println!();

    // Example 5: Autocomplete
    println!("--- Example 5: Suggestions for \"ma\" ---");
    for c in engine.suggest("ma", 3) {
        println!("- {}", c.name());
    }
    println!();

    // Example 6: Dataset statistics
    println!("--- Example 6: Statistics ---");
    let stats = engine.stats();
    println!("Records: {}", stats.records);
    for (region, count) in &stats.regions {
        println!("  {region}: {count}");
    }
    if let (Some(a), Some(b)) = (stats.earliest_year, stats.latest_year) {
        println!("Years:   {a}-{b}");
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
