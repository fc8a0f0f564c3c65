// crates/scrutin-core/src/traits.rs
use crate::text::{contains_normalized, equals_normalized, normalize};
use std::borrow::Cow;

/// A borrowed view of one field of a [`Record`].
///
/// Records are loosely typed bags; this enum is the common shape the
/// matcher, filter and sorter look at. Anything that is neither text, a
/// number nor a list of strings shows up as [`FieldValue::Other`] and is
/// ignored by matching.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    List(Vec<Cow<'a, str>>),
    Other,
}

impl<'a> FieldValue<'a> {
    /// Build a list value from borrowed strings.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<str> + ?Sized + 'a,
    {
        FieldValue::List(items.into_iter().map(|s| Cow::Borrowed(s.as_ref())).collect())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Accent-insensitive + case-insensitive substring match.
    ///
    /// Text matches on its own normalized form, lists when at least one
    /// element does; numbers and other values never match.
    pub fn matches_query(&self, query: &str) -> bool {
        self.matches_normalized(&normalize(query))
    }

    /// Same as [`FieldValue::matches_query`] for a query that has already
    /// been passed through [`normalize`].
    pub fn matches_normalized(&self, normalized_query: &str) -> bool {
        match self {
            FieldValue::Text(s) => normalize(s).contains(normalized_query),
            FieldValue::List(items) => items.iter().any(|v| normalize(v).contains(normalized_query)),
            FieldValue::Number(_) | FieldValue::Other => false,
        }
    }
}

/// The capability set every searchable item provides.
///
/// Implementors expose a unique identifier, a display name and an open set
/// of dynamically named fields. The engine itself only relies on `id` and
/// `name`; filter and sort components reach other fields through
/// [`Record::field`].
///
/// # Examples
/// ```rust
/// use scrutin_core::traits::{FieldValue, Record};
///
/// struct Place(&'static str, &'static str);
/// impl Record for Place {
///     fn id(&self) -> &str { self.0 }
///     fn name(&self) -> &str { self.1 }
///     fn field(&self, key: &str) -> Option<FieldValue<'_>> {
///         match key {
///             "id" => Some(FieldValue::Text(self.0)),
///             "name" => Some(FieldValue::Text(self.1)),
///             _ => None,
///         }
///     }
/// }
///
/// assert!(Place("ci", "Côte d'Ivoire").is_named("cote d'ivoire"));
/// assert!(Place("ci", "Côte d'Ivoire").name_contains("COTE"));
/// ```
pub trait Record {
    /// Unique identifier of the record.
    fn id(&self) -> &str;

    /// Canonical display name.
    fn name(&self) -> &str;

    /// Look up a field by name. `id` and `name` must be reachable here too.
    fn field(&self, key: &str) -> Option<FieldValue<'_>>;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_normalized(self.name(), q)
    }

    /// Accent-insensitive + case-insensitive substring match on the name.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        contains_normalized(self.name(), q)
    }

    /// Numeric value of a field, if it holds one.
    #[inline]
    fn number(&self, key: &str) -> Option<f64> {
        self.field(key).and_then(|v| v.as_number())
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        (**self).field(key)
    }
}
