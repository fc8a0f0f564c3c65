// crates/scrutin-core/src/search.rs

//! Free-text matching and the combined search → filter → sort pipeline.

use crate::common::DatasetStats;
use crate::filter::{filter_items_with, FilterFields, FilterSpec};
use crate::sort::{sort_items_with, SortMode};
use crate::text::normalize;
use crate::traits::Record;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Search keys used when none are given.
pub const DEFAULT_SEARCH_KEYS: &[&str] = &["name"];

/// Minimum trimmed query length (in characters) before suggestions appear.
pub const SUGGESTION_MIN_CHARS: usize = 2;

/// One query as issued by a directory page: free text, filters and ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filters: FilterSpec,
    #[serde(default)]
    pub sort: SortMode,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn filters(mut self, filters: FilterSpec) -> Self {
        self.filters = filters;
        self
    }

    pub fn sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }
}

/// Whether `item` matches an already normalized query on any of `keys`.
///
/// An empty query matches everything.
pub fn matches_record<R, S>(item: &R, keys: &[S], normalized_query: &str) -> bool
where
    R: Record + ?Sized,
    S: AsRef<str>,
{
    if normalized_query.is_empty() {
        return true;
    }
    keys.iter().any(|key| {
        item.field(key.as_ref())
            .is_some_and(|value| value.matches_normalized(normalized_query))
    })
}

/// Keep the records whose configured keys contain `query`.
///
/// Matching is accent- and case-insensitive. A blank query returns the
/// input unchanged; otherwise the survivors keep their relative order.
pub fn search_items<R, S>(items: &[R], keys: &[S], query: &str) -> Vec<R>
where
    R: Record + Clone,
    S: AsRef<str>,
{
    let q = normalize(query);
    if q.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| matches_record(*item, keys, &q))
        .cloned()
        .collect()
}

/// In-memory search over a fixed record collection.
///
/// The search keys are set at construction and apply to every query.
/// Filtering and sorting read the remaining fields through
/// [`FilterFields`], so the engine itself only depends on `id` and `name`.
///
/// # Example
///
/// ```rust
/// use scrutin_core::model::DynRecord;
/// use scrutin_core::search::SearchEngine;
///
/// let engine = SearchEngine::new(vec![
///     DynRecord::new("1", "Côte d'Ivoire"),
///     DynRecord::new("2", "Cameroun"),
/// ]);
/// let hits = engine.search("cote");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id, "1");
/// ```
#[derive(Debug, Clone)]
pub struct SearchEngine<T> {
    items: Vec<T>,
    search_keys: Vec<String>,
    fields: FilterFields,
}

impl<T: Record> SearchEngine<T> {
    /// Engine searching the display name only.
    pub fn new(items: Vec<T>) -> Self {
        Self::with_keys(items, DEFAULT_SEARCH_KEYS.iter().copied())
    }

    /// Engine searching the given keys, in order.
    pub fn with_keys<I, S>(items: Vec<T>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items,
            search_keys: keys.into_iter().map(Into::into).collect(),
            fields: FilterFields::default(),
        }
    }

    /// Override the field names used by filtering, date sorting and stats.
    pub fn with_fields(mut self, fields: FilterFields) -> Self {
        self.fields = fields;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn search_keys(&self) -> &[String] {
        &self.search_keys
    }

    pub fn fields(&self) -> &FilterFields {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a single record matches `query` on the configured keys.
    pub fn matches(&self, item: &T, query: &str) -> bool {
        matches_record(item, self.search_keys.as_slice(), &normalize(query))
    }

    /// All records matching `query`, in collection order.
    pub fn search(&self, query: &str) -> Vec<&T> {
        let refs: Vec<&T> = self.items.iter().collect();
        search_items(&refs, self.search_keys.as_slice(), query)
    }

    /// Autocomplete candidates: the first `limit` matches, and nothing for
    /// queries shorter than [`SUGGESTION_MIN_CHARS`].
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&T> {
        if query.trim().chars().count() < SUGGESTION_MIN_CHARS {
            return Vec::new();
        }
        let q = normalize(query);
        self.items
            .iter()
            .filter(|item| matches_record(*item, self.search_keys.as_slice(), &q))
            .take(limit)
            .collect()
    }

    /// Apply structured criteria to any collection, using this engine's field names.
    pub fn filter_items<R: Record + Clone>(&self, items: &[R], filters: &FilterSpec) -> Vec<R> {
        filter_items_with(items, filters, &self.fields)
    }

    /// Order any collection, using this engine's year field.
    pub fn sort_items<R: Record + Clone>(&self, items: &[R], mode: SortMode) -> Vec<R> {
        sort_items_with(items, mode, &self.fields)
    }

    /// Run a full request: search, then filter, then sort.
    pub fn run(&self, request: &SearchRequest) -> Vec<&T> {
        let matched = self.search(&request.query);
        let filtered = self.filter_items(&matched, &request.filters);
        let sorted = self.sort_items(&filtered, request.sort);
        debug!(
            query = %request.query,
            total = self.items.len(),
            matched = matched.len(),
            filtered = filtered.len(),
            sort = %request.sort,
            "search pipeline finished"
        );
        sorted
    }

    /// Summary of the collection.
    pub fn stats(&self) -> DatasetStats {
        DatasetStats::collect(&self.items, &self.fields)
    }
}
