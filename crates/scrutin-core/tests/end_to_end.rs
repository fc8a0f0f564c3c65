//! End-to-end behaviour of the search flow over a small country table.
//!
//! # Running
//!
//! ```sh
//! cargo test -p scrutin-core --test end_to_end
//! ```

use scrutin_core::loader::{load_records, load_records_with, sample_countries};
use scrutin_core::prelude::*;

fn three_countries() -> Vec<DynRecord> {
    vec![
        DynRecord::new("1", "Kenya").with("region", "Est").with("year", 2022),
        DynRecord::new("2", "Sénégal").with("region", "Ouest").with("year", 2024),
        DynRecord::new("3", "Maroc").with("region", "Nord").with("year", 2024),
    ]
}

fn ids<R: Record>(items: &[R]) -> Vec<String> {
    items.iter().map(|r| r.id().to_string()).collect()
}

fn names<R: Record>(items: &[R]) -> Vec<String> {
    items.iter().map(|r| r.name().to_string()).collect()
}

// ---------------------------------------------------------------------------
// Scenario: query, then year range, then alphabetic order
// ---------------------------------------------------------------------------

#[test]
fn query_then_range_then_sort() {
    let records = three_countries();

    let by_query = search_items(&records, &["name"], "sen");
    assert_eq!(ids(&by_query), ["2"]);

    let by_year = filter_items(
        &records,
        &FilterSpec::new().year_range(YearRange::between(2022, 2023)),
    );
    assert_eq!(ids(&by_year), ["1"]);

    let sorted = sort_items(&records, SortMode::Alphabetic);
    assert_eq!(names(&sorted), ["Kenya", "Maroc", "Sénégal"]);

    // inputs are untouched
    assert_eq!(records, three_countries());
}

#[test]
fn same_scenario_through_the_engine() {
    let engine = SearchEngine::new(three_countries());

    assert_eq!(ids(&engine.run(&SearchRequest::new("sen"))), ["2"]);

    let ranged = SearchRequest::default()
        .filters(FilterSpec::new().year_range(YearRange::between(2022, 2023)));
    assert_eq!(ids(&engine.run(&ranged)), ["1"]);

    let sorted = engine.run(&SearchRequest::default());
    assert_eq!(names(&sorted), ["Kenya", "Maroc", "Sénégal"]);
}

#[test]
fn region_filter_returns_exact_subset() {
    let records = three_countries();
    let out = filter_items(&records, &FilterSpec::new().regions(["Ouest"]));
    assert_eq!(ids(&out), ["2"]);
    assert!(out.iter().all(|r| r.field("region") == Some(FieldValue::Text("Ouest"))));
}

#[test]
fn diacritic_and_case_insensitive_queries() {
    let records = vec![
        DynRecord::new("ci", "Côte d'Ivoire"),
        DynRecord::new("cg", "Congo"),
    ];
    for q in ["cote", "COTE", "côté"] {
        assert_eq!(ids(&search_items(&records, &["name"], q)), ["ci"], "query {q:?}");
    }
}

// ---------------------------------------------------------------------------
// Recent searches backed by files
// ---------------------------------------------------------------------------

#[test]
fn file_backed_history_survives_a_new_store() {
    let dir = tempfile::tempdir().unwrap();
    let key = "recentCSOSearches";

    {
        let recent = RecentSearches::new(FileStore::new(dir.path().join("history")));
        for q in ["a", "b", "c", "d", "e", "f"] {
            recent.save(key, q);
        }
    }

    let reopened = RecentSearches::new(FileStore::new(dir.path().join("history")));
    assert_eq!(reopened.load(key), ["f", "e", "d", "c", "b"]);

    reopened.save(key, "c");
    assert_eq!(reopened.load(key), ["c", "f", "e", "d", "b"]);
}

#[test]
fn corrupt_history_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("k.json"), "[1, 2").unwrap();
    let recent = RecentSearches::new(FileStore::new(dir.path()));
    assert!(recent.try_load("k").is_err());
    assert!(recent.load("k").is_empty());

    // saving needs a readable history
    assert!(recent.save("k", "mali").is_empty());
}

#[test]
fn unwritable_history_dir_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();

    let recent = RecentSearches::new(FileStore::new(&blocker));
    assert!(recent.save("k", "togo").is_empty());
    assert!(recent.load("k").is_empty());
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

#[test]
fn loads_remapped_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pays.json");
    std::fs::write(
        &path,
        r#"[
            {"Id": 1, "nom_pays": "Bénin", "Zone geographique": "Afrique de l'Ouest"},
            {"Id": 2, "nom_pays": "Égypte", "Zone geographique": "Afrique du Nord"}
        ]"#,
    )
    .unwrap();

    let records = load_records_with(&path, &RecordKeys::new("Id", "nom_pays")).unwrap();
    assert_eq!(names(&records), ["Bénin", "Égypte"]);

    let engine = SearchEngine::with_keys(records, ["name", "Zone geographique"]);
    assert_eq!(ids(&engine.search("nord")), ["2"]);
}

#[cfg(feature = "compact")]
#[test]
fn loads_gzip_dataset() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("countries.json.gz");
    let file = std::fs::File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder
        .write_all(br#"[{"id": "ke", "name": "Kenya"}, {"id": "tz", "name": "Tanzanie"}]"#)
        .unwrap();
    encoder.finish().unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(ids(&records), ["ke", "tz"]);
}

#[test]
fn bundled_sample_supports_the_whole_flow() {
    let engine = SearchEngine::with_keys(sample_countries().unwrap().to_vec(), ["name", "languages"]);

    let west_2024 = engine.run(
        &SearchRequest::default()
            .filters(
                FilterSpec::new()
                    .regions(["Afrique de l'Ouest"])
                    .year_range(YearRange::between(2024, 2024)),
            )
            .sort(SortMode::Alphabetic),
    );
    assert_eq!(names(&west_2024), ["Ghana", "Sénégal"]);

    let swahili = engine.search("swahili");
    assert_eq!(names(&swahili), ["Kenya"]);

    let stats = engine.stats();
    assert_eq!(stats.records, 20);
    assert_eq!(stats.regions.get("Afrique de l'Ouest"), Some(&8));
    assert_eq!(stats.regions.values().sum::<usize>(), 20);
    assert_eq!(stats.earliest_year, Some(2020));
    assert_eq!(stats.latest_year, Some(2026));
}
