// crates/scrutin-core/src/filter.rs

//! Structured filtering: set membership on enumerated fields and an
//! inclusive year range.
//!
//! Every criterion is optional. An empty set or an absent range never
//! excludes a record, so `FilterSpec::default()` is the identity filter.

use crate::traits::{FieldValue, Record};
use serde::{Deserialize, Serialize};

/// Field names the filter and the date sort read from a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterFields {
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_type", rename = "type")]
    pub kind: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_expertise")]
    pub expertise: String,
    #[serde(default = "default_year")]
    pub year: String,
}

fn default_region() -> String { "region".to_string() }
fn default_type() -> String { "type".to_string() }
fn default_status() -> String { "status".to_string() }
fn default_expertise() -> String { "expertise".to_string() }
fn default_year() -> String { "year".to_string() }

impl Default for FilterFields {
    fn default() -> Self {
        Self {
            region: default_region(),
            kind: default_type(),
            status: default_status(),
            expertise: default_expertise(),
            year: default_year(),
        }
    }
}

/// Inclusive year interval; a `None` bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl YearRange {
    pub fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }

    /// Both bounds set, e.g. `YearRange::between(2022, 2023)`.
    pub fn between(min: i64, max: i64) -> Self {
        Self::new(Some(min), Some(max))
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Whether a record's year satisfies the range.
    ///
    /// A missing year only passes a fully unbounded range.
    pub fn contains(&self, year: Option<f64>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(year) = year else {
            return false;
        };
        self.min.map_or(true, |min| year >= min as f64) && self.max.map_or(true, |max| year <= max as f64)
    }
}

/// The optional criteria applied by [`filter_items`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub statuses: Vec<String>,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub year_range: Option<YearRange>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn regions<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn types<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn statuses<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.statuses = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn expertise<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expertise = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn year_range(mut self, range: YearRange) -> Self {
        self.year_range = Some(range);
        self
    }

    /// True when no criterion can exclude anything.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
            && self.types.is_empty()
            && self.statuses.is_empty()
            && self.expertise.is_empty()
            && self.year_range.map_or(true, |r| r.is_unbounded())
    }

    /// Number of active selections, as shown on a filter badge.
    ///
    /// Each selected set value counts once; a bounded year range counts once.
    pub fn active_count(&self) -> usize {
        let ranged = self.year_range.is_some_and(|r| !r.is_unbounded());
        self.regions.len()
            + self.types.len()
            + self.statuses.len()
            + self.expertise.len()
            + usize::from(ranged)
    }

    /// Evaluate every criterion against one record (AND across criteria).
    pub fn matches<R: Record + ?Sized>(&self, item: &R, fields: &FilterFields) -> bool {
        member_of(item.field(&fields.region), &self.regions)
            && member_of(item.field(&fields.kind), &self.types)
            && member_of(item.field(&fields.status), &self.statuses)
            && member_of(item.field(&fields.expertise), &self.expertise)
            && self
                .year_range
                .map_or(true, |range| range.contains(item.number(&fields.year)))
    }
}

/// Set membership: exact, case-sensitive equality with one allowed value.
/// List fields pass when any element is allowed.
fn member_of(value: Option<FieldValue<'_>>, allowed: &[String]) -> bool {
    if allowed.is_empty() {
        return true;
    }
    match value {
        Some(FieldValue::Text(s)) => allowed.iter().any(|a| a == s),
        Some(FieldValue::List(items)) => items.iter().any(|v| allowed.iter().any(|a| a == v)),
        _ => false,
    }
}

/// Keep the records satisfying every criterion, using the default field names.
///
/// The output is a new vector in the original relative order.
pub fn filter_items<R: Record + Clone>(items: &[R], filters: &FilterSpec) -> Vec<R> {
    filter_items_with(items, filters, &FilterFields::default())
}

/// Like [`filter_items`], reading criteria fields under custom names.
pub fn filter_items_with<R: Record + Clone>(
    items: &[R],
    filters: &FilterSpec,
    fields: &FilterFields,
) -> Vec<R> {
    if filters.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| filters.matches(*item, fields))
        .cloned()
        .collect()
}
