//! Error handling example for scrutin-rs
//!
//! Shows which operations can fail and how failures surface.

use scrutin_core::loader::{load_records, records_from_str};
use scrutin_core::prelude::*;

struct OfflineStore;

impl KeyValueStore for OfflineStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(ScrutinError::Storage("storage offline".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(ScrutinError::Storage("storage offline".to_string()))
    }
}

fn main() -> Result<()> {
    println!("=== Scrutin-RS Error Handling Example ===\n");

    // Example 1: Missing dataset
    println!("--- Example 1: Loading a missing dataset ---");
    match load_records("does/not/exist.json") {
        Ok(records) => println!("✓ Loaded {} records", records.len()),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 2: Bad rows are skipped, bad documents are rejected
    println!("--- Example 2: Malformed data ---");
    let rows = records_from_str(
        r#"[{"id": 1, "name": "Ghana"}, {"name": "no id"}, {"id": 3, "name": 42}]"#,
        &RecordKeys::default(),
    )?;
    println!("  kept {} of 3 rows", rows.len());
    if let Err(e) = records_from_str(r#"{"id": 1}"#, &RecordKeys::default()) {
        println!("  rejected: {e}");
    }
    println!();

    // Example 3: Unknown sort mode
    println!("--- Example 3: Parsing sort modes ---");
    for input in ["date", " Alphabetic ", "score"] {
        match input.parse::<SortMode>() {
            Ok(mode) => println!("  {input:?} -> {mode}"),
            Err(e) => println!("  {input:?} -> {e}"),
        }
    }
    println!();

    // Example 4: Queries never fail
    println!("--- Example 4: Empty and unmatched queries ---");
    let engine = SearchEngine::new(rows);
    println!("  \"\"      -> {} results", engine.search("").len());
    println!("  \"zzz\"   -> {} results", engine.search("zzz").len());
    println!("  \"g\"     -> {} suggestions", engine.suggest("g", 5).len());
    println!();

    // Example 5: Storage failures degrade instead of propagating
    println!("--- Example 5: Offline history store ---");
    let recent = RecentSearches::new(OfflineStore);
    println!("  save -> {:?}", recent.save("k", "ghana"));
    println!("  load -> {:?}", recent.load("k"));
    if let Err(e) = recent.try_load("k") {
        println!("  try_load -> {e}");
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
