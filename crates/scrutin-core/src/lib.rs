// crates/scrutin-core/src/lib.rs

//! # scrutin-core
//!
//! In-memory search, filtering and sorting for the record collections of an
//! election-observation directory: country profiles, election calendars and
//! civil-society organisations.
//!
//! ```text
//! records ──► search (free text) ──► filter (criteria) ──► sort ──► caller
//!                  │
//!                  └──► recent searches (durable, per key)
//! ```
//!
//! Every transform takes a slice and returns a new `Vec`; inputs are never
//! mutated. Only `recent` and `loader` perform I/O.
//!
//! ```rust
//! use scrutin_core::prelude::*;
//!
//! let engine = SearchEngine::new(vec![
//!     DynRecord::new("1", "Kenya").with("region", "Est").with("year", 2022),
//!     DynRecord::new("2", "Sénégal").with("region", "Ouest").with("year", 2024),
//!     DynRecord::new("3", "Maroc").with("region", "Nord").with("year", 2024),
//! ]);
//!
//! let hits = engine.search("sen");
//! assert_eq!(hits[0].name(), "Sénégal");
//!
//! let sorted = engine.run(&SearchRequest::default().sort(SortMode::Alphabetic));
//! let names: Vec<&str> = sorted.iter().map(|r| r.name()).collect();
//! assert_eq!(names, ["Kenya", "Maroc", "Sénégal"]);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod error;
pub mod filter;
#[cfg(feature = "json")]
pub mod loader;
pub mod model;
pub mod recent;
pub mod search;
pub mod sort;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DatasetStats;
pub use crate::error::{Result, ScrutinError};
pub use crate::filter::{filter_items, FilterFields, FilterSpec, YearRange};
pub use crate::model::{Country, DynRecord, Election, Organization, RecordKeys};
pub use crate::recent::{FileStore, KeyValueStore, MemoryStore, RecentSearches, MAX_RECENT_SEARCHES};
pub use crate::search::{search_items, SearchEngine, SearchRequest};
pub use crate::sort::{sort_items, SortMode};
pub use crate::text::normalize;
pub use crate::traits::{FieldValue, Record};

pub mod prelude {
    //! Everything needed for the common search flow.
    pub use crate::error::{Result, ScrutinError};
    pub use crate::filter::{filter_items, FilterFields, FilterSpec, YearRange};
    pub use crate::model::{Country, DynRecord, Election, Organization, RecordKeys};
    pub use crate::recent::{FileStore, KeyValueStore, MemoryStore, RecentSearches};
    pub use crate::search::{search_items, SearchEngine, SearchRequest};
    pub use crate::sort::{sort_items, SortMode};
    pub use crate::traits::{FieldValue, Record};
}
