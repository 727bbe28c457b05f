//! Show command implementation.

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;

use estate_core::{Catalog, ListingDetail, ListingId};

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Listing id
    pub id: ListingId,

    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    #[serde(flatten)]
    detail: &'a ListingDetail,
    bookmarked: bool,
}

pub async fn run(ctx: &Context, args: ShowArgs) -> Result<()> {
    let catalog = ctx.catalog()?;
    let bookmarks = ctx.bookmarks().await?;

    let detail = catalog
        .listing(&args.id)
        .await
        .with_context(|| format!("Failed to load listing {}", args.id))?;
    let bookmarked = bookmarks.is_bookmarked(&detail.listing);

    if args.json {
        return output::json_pretty(&ShowOutput {
            detail: &detail,
            bookmarked,
        });
    }

    let listing = &detail.listing;
    output::field("Title", &listing.title);
    output::field("Type", &listing.property_type);
    output::field("City", &listing.city);
    output::field("Price", &format!("₦{}", listing.price));
    if let Some(rating) = &listing.rating {
        output::field("Rating", rating);
    }
    if let Some(image) = &listing.featured_image_url {
        output::field("Image", image);
    }
    output::field("Bookmarked", if bookmarked { "yes" } else { "no" });

    if !detail.features.is_empty() {
        println!();
        for feature in &detail.features {
            println!("  • {}", feature);
        }
    }
    Ok(())
}
