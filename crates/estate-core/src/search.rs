//! Title search over the catalog.

use tracing::{debug, instrument};

use crate::Result;
use crate::traits::Catalog;
use crate::types::{FilterKey, Listing, PageNumber, SEARCH_PAGE_SIZE};

/// Listings matching a search, out of those fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub listings: Vec<Listing>,
    /// How many listings were fetched before matching.
    pub fetched: usize,
}

/// Fetch one large page for `filter` and keep the listings whose title
/// contains `query`, ignoring case. A blank query keeps everything.
#[instrument(skip(catalog))]
pub async fn search<C>(catalog: &C, filter: &FilterKey, query: &str) -> Result<SearchResults>
where
    C: Catalog + ?Sized,
{
    let listings = catalog
        .fetch_page(filter, PageNumber::FIRST, SEARCH_PAGE_SIZE)
        .await?;
    let fetched = listings.len();

    let needle = query.trim().to_lowercase();
    let listings: Vec<Listing> = if needle.is_empty() {
        listings
    } else {
        listings
            .into_iter()
            .filter(|l| l.title.to_lowercase().contains(&needle))
            .collect()
    };

    debug!(fetched, matched = listings.len(), "Search complete");
    Ok(SearchResults { listings, fetched })
}
