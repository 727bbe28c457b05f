//! List command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use estate_core::{CatalogView, FilterKey, HOME_PAGE_SIZE, LoadOutcome};

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Property type id, or `all`
    #[arg(long, default_value = "all")]
    pub filter: FilterKey,

    /// Number of pages to load
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Print the listings as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(ctx: &Context, args: ListArgs) -> Result<()> {
    let view = CatalogView::new(ctx.catalog()?, HOME_PAGE_SIZE, ctx.bookmarks().await?);

    let mut outcome = view
        .select(args.filter.clone())
        .await
        .context("Failed to load listings")?;
    while matches!(outcome, LoadOutcome::Loaded { .. }) && view.state().page < args.pages {
        outcome = view.load_more().await.context("Failed to load more listings")?;
    }

    let cards = view.cards();
    if args.json {
        return output::json_pretty(&cards);
    }

    if cards.is_empty() {
        output::note("No listings found.");
        return Ok(());
    }

    for card in &cards {
        output::card(card);
    }

    let state = view.state();
    let tail = if state.has_more {
        "more available"
    } else {
        "end of list"
    };
    output::note(&format!(
        "{} listings, {} page(s), {}",
        cards.len(),
        state.page,
        tail
    ));
    Ok(())
}
