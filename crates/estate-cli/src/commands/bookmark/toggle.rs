//! Bookmark toggle command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use estate_core::{BookmarkState, Catalog, ListingId};

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ToggleArgs {
    /// Listing id
    pub id: ListingId,
}

pub async fn run(ctx: &Context, args: ToggleArgs) -> Result<()> {
    let catalog = ctx.catalog()?;
    let bookmarks = ctx.bookmarks().await?;

    // The snapshot needs the listing's display fields.
    let detail = catalog
        .listing(&args.id)
        .await
        .with_context(|| format!("Failed to load listing {}", args.id))?;

    let state = bookmarks
        .toggle(&detail.listing)
        .await
        .context("Failed to update bookmark")?;

    match state {
        BookmarkState::Added => output::success(&format!("Bookmarked {}", detail.listing.title)),
        BookmarkState::Removed => {
            output::success(&format!("Removed bookmark for {}", detail.listing.title))
        }
    }
    Ok(())
}
