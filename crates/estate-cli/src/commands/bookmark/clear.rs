//! Bookmark clear command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ClearArgs {}

pub async fn run(ctx: &Context, _args: ClearArgs) -> Result<()> {
    let bookmarks = ctx.bookmarks().await?;
    let removed = bookmarks
        .clear()
        .await
        .context("Failed to clear bookmarks")?;

    output::success(&format!("Removed {} bookmark(s)", removed));
    Ok(())
}
