//! scrutin-cli
//! ===========
//!
//! Command-line interface for `scrutin-core`.
//!
//! This crate primarily provides a binary (`scrutin`). The library target
//! only exists so that docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install scrutin-cli
//! scrutin --help
//! scrutin search cote
//! scrutin search --region "Afrique de l'Ouest" --sort date
//! scrutin suggest ma --limit 3
//! scrutin recent
//! scrutin stats
//! ```
//!
//! Configuration is read from `$XDG_CONFIG_HOME/scrutin/config.toml` (or
//! `--config`) and `SCRUTIN_*` environment variables, e.g.
//! `SCRUTIN_SEARCH__SORT=date`.
//!
//! For programmatic access use the [`scrutin-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
