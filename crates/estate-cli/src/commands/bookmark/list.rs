//! Bookmark list command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the bookmarks as a JSON object keyed by bookmark key
    #[arg(long)]
    pub json: bool,
}

pub async fn run(ctx: &Context, args: ListArgs) -> Result<()> {
    let bookmarks = ctx.bookmarks().await?;
    let saved = bookmarks
        .get_all()
        .await
        .context("Failed to read bookmarks")?;

    if args.json {
        return output::json_pretty(&saved);
    }

    if saved.is_empty() {
        output::note("No bookmarks yet.");
        return Ok(());
    }

    for (key, snapshot) in &saved {
        output::bookmark(key, snapshot);
    }
    Ok(())
}
