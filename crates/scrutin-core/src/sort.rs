// crates/scrutin-core/src/sort.rs

//! Ordering strategies for record collections.

use crate::error::ScrutinError;
use crate::filter::FilterFields;
use crate::text::normalize;
use crate::traits::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a result list is ordered.
///
/// `Relevance` is a placeholder slot: it keeps the incoming order and does
/// no scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Ascending by display name.
    #[default]
    Alphabetic,
    /// Ascending by year; a missing year sorts as 0.
    Date,
    Relevance,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Alphabetic => write!(f, "alphabetic"),
            SortMode::Date => write!(f, "date"),
            SortMode::Relevance => write!(f, "relevance"),
        }
    }
}

impl FromStr for SortMode {
    type Err = ScrutinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alphabetic" => Ok(SortMode::Alphabetic),
            "date" => Ok(SortMode::Date),
            "relevance" => Ok(SortMode::Relevance),
            _ => Err(ScrutinError::InvalidSortMode(s.to_string())),
        }
    }
}

/// Return a reordered copy of `items`; the input is left untouched.
pub fn sort_items<R: Record + Clone>(items: &[R], mode: SortMode) -> Vec<R> {
    sort_items_with(items, mode, &FilterFields::default())
}

/// Like [`sort_items`], reading the year from `fields.year`.
///
/// Both orderings are stable. Names are compared on their normalized form,
/// so case and accents do not affect placement ("Égypte" sorts with the
/// E's).
pub fn sort_items_with<R: Record + Clone>(items: &[R], mode: SortMode, fields: &FilterFields) -> Vec<R> {
    let mut out = items.to_vec();
    match mode {
        SortMode::Alphabetic => out.sort_by_cached_key(|r| normalize(r.name())),
        SortMode::Date => {
            out.sort_by(|a, b| {
                let ya = a.number(&fields.year).unwrap_or(0.0);
                let yb = b.number(&fields.year).unwrap_or(0.0);
                ya.total_cmp(&yb)
            });
        }
        SortMode::Relevance => {}
    }
    out
}
