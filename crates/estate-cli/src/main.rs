//! estate - Browse and bookmark property listings from the terminal.
//!
//! A thin wrapper over `estate-core`: listings come from the WordPress
//! catalog, bookmarks live in a local data directory.

mod cli;
mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{bookmark, catalog};
use context::Context;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let ctx = Context::from_args(&cli.global)?;

    match cli.command {
        Commands::Types(args) => catalog::types::run(&ctx, args).await,
        Commands::List(args) => catalog::list::run(&ctx, args).await,
        Commands::Search(args) => catalog::search::run(&ctx, args).await,
        Commands::Show(args) => catalog::show::run(&ctx, args).await,
        Commands::Bookmark(cmd) => bookmark::handle(&ctx, cmd).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Logs go to stderr so stdout stays parseable.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
