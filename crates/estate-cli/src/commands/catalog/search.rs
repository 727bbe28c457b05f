//! Search command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use estate_core::{FilterKey, ListingCard, search};

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for in listing titles
    pub query: String,

    /// Property type id, or `all`
    #[arg(long, default_value = "all")]
    pub filter: FilterKey,

    /// Print the matches as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(ctx: &Context, args: SearchArgs) -> Result<()> {
    let catalog = ctx.catalog()?;
    let bookmarks = ctx.bookmarks().await?;

    let results = search(catalog.as_ref(), &args.filter, &args.query)
        .await
        .context("Search failed")?;

    let cards: Vec<ListingCard> = results
        .listings
        .into_iter()
        .map(|listing| ListingCard {
            bookmarked: bookmarks.is_bookmarked(&listing),
            listing,
        })
        .collect();

    if args.json {
        return output::json_pretty(&cards);
    }

    if cards.is_empty() {
        output::note(&format!(
            "No matches among {} listings.",
            results.fetched
        ));
        return Ok(());
    }

    for card in &cards {
        output::card(card);
    }
    output::note(&format!(
        "{} of {} listings match",
        cards.len(),
        results.fetched
    ));
    Ok(())
}
