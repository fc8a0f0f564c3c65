// crates/scrutin-core/src/error.rs

//! Error types shared across the crate.
//!
//! Matching, filtering and sorting are total and never produce an error; the
//! variants below come from dataset loading, configuration and the durable
//! recent-search store.

use thiserror::Error;

/// Convenient result alias used throughout `scrutin-core`.
pub type Result<T> = std::result::Result<T, ScrutinError>;

#[derive(Debug, Error)]
pub enum ScrutinError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("unknown sort mode `{0}` (expected alphabetic, date or relevance)")]
    InvalidSortMode(String),

    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
