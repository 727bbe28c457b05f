//! Bookmark persistence.
//!
//! A bookmark is one entry in a [`KeyValueStore`](crate::traits::KeyValueStore)
//! under a `bookmark_` key, holding a [`BookmarkSnapshot`] of the listing.
//! [`BookmarkStore`] is the only writer; [`BookmarkSet`] handles observe
//! its membership without touching storage.

mod key;
mod projection;
mod snapshot;
mod store;

pub use key::{BOOKMARK_PREFIX, BookmarkKey, KeyScheme};
pub use projection::{BookmarkIndex, BookmarkSet};
pub use snapshot::BookmarkSnapshot;
pub use store::{BookmarkState, BookmarkStore};
