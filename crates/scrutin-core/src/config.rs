// crates/scrutin-core/src/config.rs

//! Configuration types for scrutin.
//!
//! [`Config::load`] layers, in order: the embedded defaults, the user file
//! (`$XDG_CONFIG_HOME/scrutin/config.toml` unless a path is given) and
//! `SCRUTIN_*` environment variables (`SCRUTIN_SEARCH__SORT=date`).
//! [`Config::defaults`] returns the embedded defaults without touching the
//! filesystem (useful in tests).

use crate::error::Result;
use crate::filter::FilterFields;
use crate::model::RecordKeys;
use crate::sort::SortMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
keys             = ["name"]
sort             = "alphabetic"
suggestion_limit = 5

[fields]
id        = "id"
name      = "name"
region    = "region"
type      = "type"
status    = "status"
expertise = "expertise"
year      = "year"

[history]
dir = ""
key = "recent-searches"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub fields: FieldsConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

/// `[search]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_keys")]
    pub keys: Vec<String>,
    #[serde(default)]
    pub sort: SortMode,
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

fn default_keys() -> Vec<String> { vec!["name".to_string()] }
fn default_suggestion_limit() -> usize { 5 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            keys: default_keys(),
            sort: SortMode::default(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

/// `[fields]` section: column names in the dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldsConfig {
    #[serde(flatten)]
    pub record: RecordKeys,
    #[serde(flatten)]
    pub filter: FilterFields,
}

/// `[history]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Directory for history files; empty means the platform data dir.
    #[serde(default)]
    pub dir: String,
    #[serde(default = "default_history_key")]
    pub key: String,
}

fn default_history_key() -> String { "recent-searches".to_string() }

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            key: default_history_key(),
        }
    }
}

impl HistoryConfig {
    /// Directory holding history files.
    pub fn resolved_dir(&self) -> PathBuf {
        if self.dir.trim().is_empty() {
            data_dir().join("history")
        } else {
            PathBuf::from(&self.dir)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. `path` overrides the default user
    /// file location; a missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);

        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .add_source(config::Environment::with_prefix("SCRUTIN").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        Self {
            search: SearchConfig::default(),
            fields: FieldsConfig::default(),
            history: HistoryConfig::default(),
        }
    }

    /// Parse a TOML document layered over the defaults.
    pub fn from_toml(source: &str) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
        .join("scrutin")
        .join("config.toml")
}

fn data_dir() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local").join("share"))
        .join("scrutin")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.search.keys, ["name"]);
        assert_eq!(cfg.search.sort, SortMode::Alphabetic);
        assert_eq!(cfg.search.suggestion_limit, 5);
        assert_eq!(cfg.fields.record.name, "name");
        assert_eq!(cfg.fields.filter.kind, "type");
        assert_eq!(cfg.history.key, "recent-searches");
    }

    #[test]
    fn embedded_toml_matches_defaults() {
        let cfg = Config::from_toml("").unwrap();
        assert_eq!(cfg.search.keys, Config::defaults().search.keys);
        assert_eq!(cfg.fields.filter, FilterFields::default());
        assert_eq!(cfg.fields.record, RecordKeys::default());
    }

    #[test]
    fn user_values_override_defaults() {
        let cfg = Config::from_toml(
            r#"
            [search]
            keys = ["nom", "ville"]
            sort = "date"

            [fields]
            name = "nom"
            year = "annee de creation"

            [history]
            dir = "/tmp/scrutin-history"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.search.keys, ["nom", "ville"]);
        assert_eq!(cfg.search.sort, SortMode::Date);
        assert_eq!(cfg.fields.record.name, "nom");
        assert_eq!(cfg.fields.record.id, "id");
        assert_eq!(cfg.fields.filter.year, "annee de creation");
        assert_eq!(cfg.history.resolved_dir(), PathBuf::from("/tmp/scrutin-history"));
    }

    #[test]
    fn bad_sort_mode_is_a_config_error() {
        let err = Config::from_toml("[search]\nsort = \"score\"").unwrap_err();
        assert!(matches!(err, crate::error::ScrutinError::Config(_)));
    }
}
