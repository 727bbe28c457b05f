//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use estate_core::{BookmarkKey, BookmarkSnapshot, ListingCard};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a note to stderr, leaving stdout to results.
pub fn note(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print one listing card on two lines.
pub fn card(card: &ListingCard) {
    let listing = &card.listing;
    let marker = if card.bookmarked {
        "★".yellow()
    } else {
        " ".normal()
    };
    println!(
        "{} {:>6}  {}",
        marker,
        listing.id.as_str().dimmed(),
        listing.title.bold()
    );
    println!(
        "          {} · {} · ₦{}",
        listing.property_type, listing.city, listing.price
    );
}

/// Print a saved bookmark with the key that removes it.
pub fn bookmark(key: &BookmarkKey, snapshot: &BookmarkSnapshot) {
    println!("{}  {}", snapshot.title.bold(), key.as_str().dimmed());
    println!(
        "   {} · {} · ₦{}",
        snapshot.category, snapshot.location, snapshot.price
    );
}
