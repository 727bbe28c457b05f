//! Catalog screen adapter.
//!
//! Joins the paginated working set with bookmark membership and gives the
//! UI one entry point for toggling, so screens never pick a store.

use std::sync::Arc;

use serde::Serialize;
use tracing::{instrument, warn};

use crate::Result;
use crate::bookmarks::{BookmarkSet, BookmarkSnapshot, BookmarkState, BookmarkStore};
use crate::pagination::{LoadOutcome, PaginationController, PaginationState};
use crate::traits::{Catalog, KeyValueStore};
use crate::types::{FilterChip, FilterKey, Listing, PageSize};

/// A listing as rendered on a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingCard {
    pub listing: Listing,
    pub bookmarked: bool,
}

/// Result of opening a catalog screen.
#[derive(Debug)]
pub struct Activation {
    /// Filter chips, always starting with `All`. Only `All` when the type
    /// list could not be loaded.
    pub chips: Vec<FilterChip>,
    /// Outcome of loading the first page of `All`.
    pub first_page: Result<LoadOutcome>,
}

/// A catalog screen: filter chips, the working set, and bookmark status.
#[derive(Debug)]
pub struct CatalogView<C, S> {
    pager: PaginationController<C>,
    bookmarks: BookmarkStore<S>,
}

impl<C: Catalog, S: KeyValueStore> CatalogView<C, S> {
    pub fn new(catalog: Arc<C>, per_page: PageSize, bookmarks: BookmarkStore<S>) -> Self {
        Self {
            pager: PaginationController::new(catalog, per_page),
            bookmarks,
        }
    }

    /// Load the filter chips and the first page of `All` together.
    #[instrument(skip(self))]
    pub async fn activate(&self) -> Activation {
        let catalog = Arc::clone(self.pager.catalog());
        let (types, first_page) = tokio::join!(
            catalog.property_types(),
            self.pager.select_filter(FilterKey::All)
        );

        let chips = match types {
            Ok(types) => FilterChip::row(&types),
            Err(e) => {
                warn!(error = %e, "Failed to load property types");
                vec![FilterChip::all()]
            }
        };

        Activation { chips, first_page }
    }

    pub async fn select(&self, filter: FilterKey) -> Result<LoadOutcome> {
        self.pager.select_filter(filter).await
    }

    pub async fn load_more(&self) -> Result<LoadOutcome> {
        self.pager.load_more().await
    }

    pub fn state(&self) -> PaginationState {
        self.pager.state()
    }

    /// The working set with each listing's bookmark status.
    pub fn cards(&self) -> Vec<ListingCard> {
        self.pager
            .state()
            .items
            .into_iter()
            .map(|listing| ListingCard {
                bookmarked: self.bookmarks.is_bookmarked(&listing),
                listing,
            })
            .collect()
    }

    pub fn is_bookmarked(&self, listing: &Listing) -> bool {
        self.bookmarks.is_bookmarked(listing)
    }

    pub async fn toggle_bookmark(&self, listing: &Listing) -> Result<BookmarkState> {
        self.bookmarks.toggle(listing).await
    }

    /// The "my bookmarks" list, rebuilt from storage.
    pub async fn saved(&self) -> Result<Vec<BookmarkSnapshot>> {
        self.bookmarks.list_all().await
    }

    /// A live bookmark membership handle for other screens.
    pub fn bookmark_set(&self) -> BookmarkSet<S> {
        self.bookmarks.subscribe()
    }
}
