//! Reactive, read-only view of the persisted bookmarks.

use std::collections::BTreeMap;

use tokio::sync::watch;

use crate::Result;
use crate::traits::KeyValueStore;
use crate::types::{Listing, ListingId};

use super::key::BookmarkKey;
use super::store::{BookmarkState, BookmarkStore};

/// The set of bookmarked keys, with the listing id recorded in each
/// snapshot when there is one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkIndex {
    entries: BTreeMap<BookmarkKey, Option<ListingId>>,
}

impl BookmarkIndex {
    pub fn contains(&self, key: &BookmarkKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns true if any bookmark records this listing id.
    pub fn has(&self, id: &ListingId) -> bool {
        self.entries.values().any(|v| v.as_ref() == Some(id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &BookmarkKey> {
        self.entries.keys()
    }

    /// Returns true if the index changed.
    pub(crate) fn insert(&mut self, key: BookmarkKey, id: Option<ListingId>) -> bool {
        self.entries.insert(key, id.clone()) != Some(id)
    }

    /// Returns true if the index changed.
    pub(crate) fn remove(&mut self, key: &BookmarkKey) -> bool {
        self.entries.remove(key).is_some()
    }
}

/// Process-lifetime bookmark membership, derived from a [`BookmarkStore`].
///
/// Every screen holding a `BookmarkSet` observes the same state as the
/// persisted store: writes go through the store and the set is updated
/// from the store's result, never independently.
#[derive(Debug)]
pub struct BookmarkSet<S> {
    store: BookmarkStore<S>,
    rx: watch::Receiver<BookmarkIndex>,
}

impl<S> Clone for BookmarkSet<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            rx: self.rx.clone(),
        }
    }
}

impl<S: KeyValueStore> BookmarkSet<S> {
    pub(crate) fn new(store: BookmarkStore<S>, rx: watch::Receiver<BookmarkIndex>) -> Self {
        Self { store, rx }
    }

    /// Returns true if the listing with this id is bookmarked.
    pub fn has(&self, id: &ListingId) -> bool {
        self.rx.borrow().has(id)
    }

    pub fn contains(&self, key: &BookmarkKey) -> bool {
        self.rx.borrow().contains(key)
    }

    /// Returns true if the listing's key, under the store's scheme, is bookmarked.
    pub fn is_bookmarked(&self, listing: &Listing) -> bool {
        self.store
            .key_for(listing)
            .is_ok_and(|key| self.contains(&key))
    }

    pub fn len(&self) -> usize {
        self.rx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.borrow().is_empty()
    }

    /// A copy of the current membership.
    pub fn snapshot(&self) -> BookmarkIndex {
        self.rx.borrow().clone()
    }

    /// Toggle through the persisted store.
    pub async fn toggle(&self, listing: &Listing) -> Result<BookmarkState> {
        self.store.toggle(listing).await
    }

    /// Wait until the membership changes after the last observed state.
    pub async fn changed(&mut self) {
        // The store owns the sender and this set owns a store handle,
        // so the channel cannot close underneath us.
        let _ = self.rx.changed().await;
    }

    /// Mark the current state as seen.
    pub fn mark_seen(&mut self) {
        self.rx.mark_unchanged();
    }
}
