// crates/scrutin-core/src/common.rs
use crate::filter::FilterFields;
use crate::traits::{FieldValue, Record};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Simple aggregate statistics for a record collection.
///
/// Returned by [`SearchEngine::stats`](crate::search::SearchEngine::stats).
/// `regions` and `types` map each distinct value to the number of records
/// carrying it, which is what the filter sidebars show next to each option.
/// A list-valued field counts once per distinct element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub records: usize,
    pub regions: BTreeMap<String, usize>,
    pub types: BTreeMap<String, usize>,
    pub earliest_year: Option<i64>,
    pub latest_year: Option<i64>,
}

fn tally(counts: &mut BTreeMap<String, usize>, value: Option<FieldValue<'_>>) {
    match value {
        Some(FieldValue::Text(v)) => *counts.entry(v.to_string()).or_default() += 1,
        Some(FieldValue::List(items)) => {
            let mut seen: Vec<&str> = Vec::with_capacity(items.len());
            for item in &items {
                if !seen.contains(&item.as_ref()) {
                    seen.push(item.as_ref());
                    *counts.entry(item.to_string()).or_default() += 1;
                }
            }
        }
        _ => {}
    }
}

impl DatasetStats {
    pub fn collect<R: Record>(items: &[R], fields: &FilterFields) -> Self {
        let mut regions = BTreeMap::new();
        let mut types = BTreeMap::new();
        let mut earliest: Option<i64> = None;
        let mut latest: Option<i64> = None;

        for item in items {
            tally(&mut regions, item.field(&fields.region));
            tally(&mut types, item.field(&fields.kind));
            if let Some(y) = item.number(&fields.year) {
                let y = y as i64;
                earliest = Some(earliest.map_or(y, |e| e.min(y)));
                latest = Some(latest.map_or(y, |l| l.max(y)));
            }
        }

        Self {
            records: items.len(),
            regions,
            types,
            earliest_year: earliest,
            latest_year: latest,
        }
    }
}
