// crates/scrutin-core/src/loader/mod.rs

//! # Data Loader
//!
//! Turns exported JSON tables into [`DynRecord`] collections. Handles the
//! physical layer (I/O, decompression) in `common_io` and the conversion of
//! each object here.
//!
//! A dataset is a JSON array of objects. Objects that cannot become a record
//! (no identifier, no string name) are skipped and logged; anything other
//! than an array is an error.

use crate::error::{Result, ScrutinError};
use crate::model::{DynRecord, RecordKeys};
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

mod common_io;

pub use common_io::open_stream;

/// A small bundled country table, handy for demos and smoke tests.
const SAMPLE_COUNTRIES_JSON: &str = include_str!("../../data/countries.json");

static SAMPLE_COUNTRIES: OnceCell<Vec<DynRecord>> = OnceCell::new();

/// The bundled sample countries, parsed once per process.
pub fn sample_countries() -> Result<&'static [DynRecord]> {
    SAMPLE_COUNTRIES
        .get_or_try_init(|| records_from_str(SAMPLE_COUNTRIES_JSON, &RecordKeys::default()))
        .map(Vec::as_slice)
}

/// Load a dataset using the default `id` / `name` columns.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<DynRecord>> {
    load_records_with(path, &RecordKeys::default())
}

/// Load a dataset, taking identifier and name from the given columns.
pub fn load_records_with(path: impl AsRef<Path>, keys: &RecordKeys) -> Result<Vec<DynRecord>> {
    let path = path.as_ref();
    let reader = open_stream(path)?;
    let records = records_from_reader(reader, keys)?;
    debug!(path = %path.display(), records = records.len(), "dataset loaded");
    Ok(records)
}

pub fn records_from_reader<R: Read>(reader: R, keys: &RecordKeys) -> Result<Vec<DynRecord>> {
    let value: Value = serde_json::from_reader(reader)?;
    records_from_value(value, keys)
}

pub fn records_from_str(s: &str, keys: &RecordKeys) -> Result<Vec<DynRecord>> {
    let value: Value = serde_json::from_str(s)?;
    records_from_value(value, keys)
}

/// Convert an already parsed JSON array.
pub fn records_from_value(value: Value, keys: &RecordKeys) -> Result<Vec<DynRecord>> {
    let Value::Array(rows) = value else {
        return Err(ScrutinError::InvalidRecord(
            "dataset must be a JSON array of objects".to_string(),
        ));
    };

    let mut out = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        match DynRecord::from_value_with(row, keys) {
            Ok(record) => out.push(record),
            Err(e) => warn!(index, error = %e, "skipping dataset row"),
        }
    }
    Ok(out)
}
