use clap::{Args, Parser, Subcommand};
use scrutin_core::SortMode;
use std::path::PathBuf;

/// CLI arguments for scrutin
#[derive(Debug, Parser)]
#[command(
    name = "scrutin",
    version,
    about = "Search, filter and sort election-observation records"
)]
pub struct CliArgs {
    /// Path to a JSON or JSON.gz dataset (default: bundled sample countries)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Config file (default: $XDG_CONFIG_HOME/scrutin/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a query through search, filters and sorting
    Search(SearchArgs),

    /// Name suggestions for a partial query
    Suggest {
        /// Partial text (at least two characters)
        query: String,

        /// Field to search (repeatable; default from config)
        #[arg(short = 'k', long = "key")]
        keys: Vec<String>,

        /// Maximum number of suggestions (default from config)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show or clear the recent searches
    Recent {
        /// History key (default from config)
        #[arg(long = "history")]
        key: Option<String>,

        /// Empty the history instead of printing it
        #[arg(long)]
        clear: bool,
    },

    /// Show a summary of the dataset
    Stats,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free text; omit to list everything
    #[arg(default_value = "")]
    pub query: String,

    /// Field to search (repeatable; default from config)
    #[arg(short = 'k', long = "key")]
    pub keys: Vec<String>,

    /// Allowed region (repeatable)
    #[arg(long = "region")]
    pub regions: Vec<String>,

    /// Allowed type (repeatable)
    #[arg(long = "type")]
    pub types: Vec<String>,

    /// Allowed status (repeatable)
    #[arg(long = "status")]
    pub statuses: Vec<String>,

    /// Allowed expertise (repeatable)
    #[arg(long = "expertise")]
    pub expertise: Vec<String>,

    /// Earliest year, inclusive
    #[arg(long = "from")]
    pub from: Option<i64>,

    /// Latest year, inclusive
    #[arg(long = "to")]
    pub to: Option<i64>,

    /// alphabetic, date or relevance (default from config)
    #[arg(short = 's', long)]
    pub sort: Option<SortMode>,

    /// Print at most this many results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// History key to record the query under (default from config)
    #[arg(long = "history")]
    pub history: Option<String>,
}
