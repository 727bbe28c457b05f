//! Bookmark remove command implementation.

use anyhow::{Context as _, Result, bail};
use clap::Args;

use estate_core::BookmarkKey;

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Bookmark key, as shown by `estate bookmark list`
    pub key: BookmarkKey,
}

pub async fn run(ctx: &Context, args: RemoveArgs) -> Result<()> {
    let bookmarks = ctx.bookmarks().await?;

    if !bookmarks.subscribe().contains(&args.key) {
        bail!("No bookmark under '{}'", args.key);
    }

    bookmarks
        .remove(&args.key)
        .await
        .context("Failed to remove bookmark")?;

    output::success(&format!("Removed {}", args.key));
    Ok(())
}
