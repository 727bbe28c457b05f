//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use estate_core::KeyScheme;

use crate::commands::bookmark::BookmarkCommand;
use crate::commands::catalog::{ListArgs, SearchArgs, ShowArgs, TypesArgs};

/// Catalog served when no API is configured.
pub const DEFAULT_API: &str = "https://ikoyiproperty.com";

/// Browse property listings and manage bookmarks.
#[derive(Parser, Debug)]
#[command(name = "estate")]
#[command(author, version = env!("ESTATE_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the catalog and the bookmarks live.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Base URL of the catalog API
    #[arg(long, env = "ESTATE_API", default_value = DEFAULT_API, global = true)]
    pub api: String,

    /// Directory for bookmarks (defaults to the platform data directory)
    #[arg(long, env = "ESTATE_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 15, global = true)]
    pub timeout_secs: u64,

    /// Bookmark key scheme: `id`, or `title` for stores written by older clients
    #[arg(long, default_value = "id", global = true)]
    pub key_scheme: KeyScheme,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the property type filters
    Types(TypesArgs),

    /// Page through listings
    List(ListArgs),

    /// Search listing titles
    Search(SearchArgs),

    /// Show one listing with its features
    Show(ShowArgs),

    /// Manage bookmarks
    Bookmark(BookmarkCommand),
}
