//! estate-core - Listing catalog pagination and bookmark persistence.
//!
//! The remote catalog and the durable key-value store are reached through
//! the [`Catalog`] and [`KeyValueStore`] traits; backends live in
//! `estate-http` and `estate-file`.
//!
//! # Example
//!
//! ```
//! use estate_core::{BookmarkStore, KeyScheme, MemoryStore};
//!
//! # async fn example() -> estate_core::Result<()> {
//! let bookmarks = BookmarkStore::open(MemoryStore::new(), KeyScheme::ListingId).await?;
//! let saved = bookmarks.list_all().await?;
//! assert!(saved.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod bookmarks;
pub mod error;
pub mod features;
pub mod memory;
pub mod pagination;
pub mod search;
pub mod traits;
pub mod types;
pub mod view;

pub use bookmarks::{
    BookmarkIndex, BookmarkKey, BookmarkSet, BookmarkSnapshot, BookmarkState, BookmarkStore,
    KeyScheme,
};
pub use error::Error;
pub use features::extract_features;
pub use memory::MemoryStore;
pub use pagination::{LoadOutcome, PageStatus, PaginationController, PaginationState};
pub use search::{SearchResults, search};
pub use traits::{Catalog, KeyValueStore, KeyedValue};
pub use types::{
    ApiUrl, FilterChip, FilterKey, HOME_PAGE_SIZE, Listing, ListingDetail, ListingId, PageNumber,
    PageSize, PropertyType, SEARCH_PAGE_SIZE,
};
pub use view::{Activation, CatalogView, ListingCard};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
