// crates/scrutin-core/src/recent.rs

//! Recent-search history, persisted per caller-chosen key.
//!
//! History is a JSON array of at most [`MAX_RECENT_SEARCHES`] distinct
//! strings, most recent first. Storage is injected through
//! [`KeyValueStore`]: [`MemoryStore`] for tests, [`FileStore`] for a local
//! directory, and the browser `localStorage` in `scrutin-wasm`.
//!
//! Storage problems never reach the search flow. [`RecentSearches::save`]
//! and [`RecentSearches::load`] log the failure and degrade to a no-op or an
//! empty list; [`RecentSearches::try_save`] / [`RecentSearches::try_load`]
//! return the error for callers that want it.

use crate::error::{Result, ScrutinError};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Upper bound on stored entries per key.
pub const MAX_RECENT_SEARCHES: usize = 5;

/// A durable string-to-string store.
///
/// Concurrent writers to the same key race; the last write wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Process-local store, mainly for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| ScrutinError::Storage("memory store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| ScrutinError::Storage("memory store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
///
/// The directory is created on first write. Keys map one-to-one onto file
/// names: ASCII alphanumerics and `-` are kept, every other byte (including
/// `_`) is written as `_XX` in hex. The empty key is stored as `_.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let mut stem = String::with_capacity(key.len());
        for b in key.bytes() {
            if b.is_ascii_alphanumeric() || b == b'-' {
                stem.push(char::from(b));
            } else {
                stem.push_str(&format!("_{b:02X}"));
            }
        }
        if stem.is_empty() {
            stem.push('_');
        }
        self.dir.join(format!("{stem}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ScrutinError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// Bounded, de-duplicated history of free-text queries.
#[derive(Debug)]
pub struct RecentSearches<S> {
    store: S,
}

impl<S: KeyValueStore> RecentSearches<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored history for `key`; a missing or blank entry is an empty history.
    pub fn try_load(&self, key: &str) -> Result<Vec<String>> {
        let raw = match self.store.get(key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(Vec::new()),
        };
        let mut searches: Vec<String> = serde_json::from_str(&raw)?;
        searches.truncate(MAX_RECENT_SEARCHES);
        Ok(searches)
    }

    /// Put `query` at the front of the history for `key` and persist it.
    ///
    /// An earlier identical entry (exact, case-sensitive) is removed first
    /// and the list is cut to [`MAX_RECENT_SEARCHES`]. Blank queries are not
    /// recorded. Returns the history as persisted.
    pub fn try_save(&self, key: &str, query: &str) -> Result<Vec<String>> {
        let previous = self.try_load(key)?;
        if query.trim().is_empty() {
            return Ok(previous);
        }
        let mut updated = Vec::with_capacity(MAX_RECENT_SEARCHES);
        updated.push(query.to_string());
        updated.extend(previous.into_iter().filter(|s| s != query));
        updated.truncate(MAX_RECENT_SEARCHES);

        let encoded = serde_json::to_string(&updated)?;
        self.store.set(key, &encoded)?;
        Ok(updated)
    }

    /// Like [`RecentSearches::try_load`], logging failures and returning an
    /// empty history instead.
    pub fn load(&self, key: &str) -> Vec<String> {
        self.try_load(key).unwrap_or_else(|e| {
            warn!(key, error = %e, "could not read recent searches");
            Vec::new()
        })
    }

    /// Like [`RecentSearches::try_save`], logging failures and leaving the
    /// stored history as it was.
    pub fn save(&self, key: &str, query: &str) -> Vec<String> {
        match self.try_save(key, query) {
            Ok(saved) => saved,
            Err(e) => {
                warn!(key, error = %e, "could not save recent search");
                Vec::new()
            }
        }
    }

    /// Reset the history for `key`.
    pub fn clear(&self, key: &str) -> Result<()> {
        self.store.set(key, "[]")
    }
}
