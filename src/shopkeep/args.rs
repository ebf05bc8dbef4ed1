use clap::{Args, Parser, Subcommand};
use shopkeep::model::SortOption;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shopkeep", version)]
#[command(about = "Manage a small product catalog from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding products.json and config.json (default: $SHOPKEEP_HOME, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products, one page at a time
    #[command(alias = "ls")]
    List {
        /// Only products whose name or description contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Order by `name` or `creation-date`
        #[arg(long)]
        sort: Option<SortOption>,

        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Add a product
    #[command(alias = "n")]
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Show one or more products in full
    #[command(alias = "v")]
    Show {
        /// Product ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Change fields of a product
    #[command(alias = "e")]
    Edit {
        /// Product id
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete one or more products
    #[command(alias = "rm")]
    Delete {
        /// Product ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Replace the catalog with the built-in sample products
    Reset,

    /// Get or set configuration
    Config {
        /// Configuration key (page-size, default-sort)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Browse and edit interactively
    Shell,
}

#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Product name (1-30 characters)
    #[arg(long)]
    pub name: Option<String>,

    /// Description (up to 200 characters)
    #[arg(long, short)]
    pub description: Option<String>,

    /// Price, greater than zero
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,
}
