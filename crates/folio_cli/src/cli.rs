use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use folio_core::{SortKey, ViewMode};

/// folio - browse the portfolio catalog from a terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (missing file means defaults)
    #[arg(long, global = true, default_value = folio_core::config::CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Absolute directory for rolling log files (overrides config)
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error (overrides config)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects matching the filters
    Projects {
        #[command(flatten)]
        filters: FilterArgs,

        /// Layout: grid|list
        #[arg(long, default_value = "grid")]
        view: ViewMode,
    },

    /// Summary numbers for the projects matching the filters
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Categories, domains and their counts
    Facets,

    /// Show the preview dialog content for one project
    Preview {
        /// Project id
        id: String,
    },

    /// List certifications
    Certs {
        /// Number of "load more" presses
        #[arg(long, default_value_t = 0)]
        more: usize,
    },
}

#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Category to keep, or `all`
    #[arg(long, default_value = folio_core::ALL_SENTINEL)]
    pub category: String,

    /// Domain to keep, or `all`
    #[arg(long, default_value = folio_core::ALL_SENTINEL)]
    pub domain: String,

    /// Case-insensitive text matched against title, description, technologies and tags
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Sort key: year|domain|title
    #[arg(long, default_value = "year")]
    pub sort: SortKey,
}
