// crates/scrutin-core/src/model/mod.rs

//! Record types understood by the engine.
//!
//! [`DynRecord`] is the loosely typed bag the loader produces; the typed
//! [`Country`], [`Election`] and [`Organization`] structs expose their own
//! fields under the generic names the filter and sorter look up (`region`,
//! `type`, `status`, `expertise`, `year`).
pub mod domain;
pub mod record;

pub use domain::{Country, Election, Organization};
pub use record::{DynRecord, RecordKeys};
