//! The persisted bookmark store.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, watch};
use tracing::{debug, instrument, warn};

use crate::Result;
use crate::traits::KeyValueStore;
use crate::types::Listing;

use super::key::{BookmarkKey, KeyScheme};
use super::projection::{BookmarkIndex, BookmarkSet};
use super::snapshot::BookmarkSnapshot;

/// Outcome of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkState {
    /// The listing was not bookmarked and now is.
    Added,
    /// The listing was bookmarked and no longer is.
    Removed,
}

impl BookmarkState {
    pub fn is_bookmarked(self) -> bool {
        matches!(self, BookmarkState::Added)
    }
}

/// The single authoritative record of bookmarked listings.
///
/// One key-value entry per bookmark, keyed `bookmark_<suffix>`. Mutations
/// of the same key are serialised through a per-key async mutex, so a
/// toggle's read-modify-write is atomic with respect to other callers
/// of this store. Membership is published to [`BookmarkSet`] handles.
pub struct BookmarkStore<S> {
    inner: Arc<StoreInner<S>>,
}

struct StoreInner<S> {
    kv: S,
    scheme: KeyScheme,
    locks: Mutex<HashMap<BookmarkKey, Arc<AsyncMutex<()>>>>,
    index: watch::Sender<BookmarkIndex>,
}

impl<S> Clone for BookmarkStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> fmt::Debug for BookmarkStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookmarkStore")
            .field("scheme", &self.inner.scheme)
            .field("bookmarks", &self.inner.index.borrow().len())
            .finish()
    }
}

impl<S: KeyValueStore> BookmarkStore<S> {
    /// Open a store, loading the current bookmark membership from `kv`.
    #[instrument(skip(kv))]
    pub async fn open(kv: S, scheme: KeyScheme) -> Result<Self> {
        let mut index = BookmarkIndex::default();
        for (key, entry) in scan(&kv).await? {
            let id = entry.ok().and_then(|snapshot| snapshot.id);
            index.insert(key, id);
        }
        debug!(bookmarks = index.len(), "Opened bookmark store");

        let (index, _) = watch::channel(index);
        Ok(Self {
            inner: Arc::new(StoreInner {
                kv,
                scheme,
                locks: Mutex::new(HashMap::new()),
                index,
            }),
        })
    }

    pub fn scheme(&self) -> KeyScheme {
        self.inner.scheme
    }

    /// The key this store uses for a listing.
    pub fn key_for(&self, listing: &Listing) -> Result<BookmarkKey> {
        self.inner.scheme.key_for(listing)
    }

    /// Returns true if the listing is bookmarked. Answers from memory.
    pub fn is_bookmarked(&self, listing: &Listing) -> bool {
        self.key_for(listing)
            .is_ok_and(|key| self.inner.index.borrow().contains(&key))
    }

    /// A live view of bookmark membership.
    pub fn subscribe(&self) -> BookmarkSet<S> {
        BookmarkSet::new(self.clone(), self.inner.index.subscribe())
    }

    /// Store a snapshot under `key`, replacing any previous one.
    #[instrument(skip(self, snapshot), fields(%key))]
    pub async fn set(&self, key: &BookmarkKey, snapshot: &BookmarkSnapshot) -> Result<()> {
        let lock = self.key_lock(key);
        let _guard = lock.lock().await;
        self.write(key, snapshot).await
    }

    /// Delete the bookmark under `key`, if any.
    #[instrument(skip(self), fields(%key))]
    pub async fn remove(&self, key: &BookmarkKey) -> Result<()> {
        let lock = self.key_lock(key);
        let _guard = lock.lock().await;
        self.inner.kv.remove(key.as_str()).await?;
        self.unindex(key);
        debug!("Removed bookmark");
        Ok(())
    }

    /// Read one snapshot. A corrupt value is an error here.
    pub async fn get(&self, key: &BookmarkKey) -> Result<Option<BookmarkSnapshot>> {
        match self.inner.kv.get(key.as_str()).await? {
            Some(value) => BookmarkSnapshot::decode(key.as_str(), &value).map(Some),
            None => Ok(None),
        }
    }

    /// Bookmark the listing if it is not bookmarked, otherwise remove it.
    #[instrument(skip(self, listing), fields(listing = %listing.id))]
    pub async fn toggle(&self, listing: &Listing) -> Result<BookmarkState> {
        let key = self.key_for(listing)?;
        let lock = self.key_lock(&key);
        let _guard = lock.lock().await;

        let present = match self.inner.kv.get(key.as_str()).await {
            Ok(value) => value.is_some(),
            Err(e) if e.is_corruption() => {
                warn!(%key, error = %e, "Removing unreadable bookmark");
                true
            }
            Err(e) => return Err(e),
        };

        if present {
            self.inner.kv.remove(key.as_str()).await?;
            self.unindex(&key);
            debug!(%key, "Bookmark removed");
            Ok(BookmarkState::Removed)
        } else {
            self.write(&key, &BookmarkSnapshot::from_listing(listing))
                .await?;
            debug!(%key, "Bookmark added");
            Ok(BookmarkState::Added)
        }
    }

    /// Every readable bookmark by key. Unreadable entries are logged and skipped.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<BTreeMap<BookmarkKey, BookmarkSnapshot>> {
        let mut all = BTreeMap::new();
        for (key, entry) in scan(&self.inner.kv).await? {
            match entry {
                Ok(snapshot) => {
                    all.insert(key, snapshot);
                }
                Err(e) => warn!(%key, error = %e, "Skipping unreadable bookmark"),
            }
        }
        Ok(all)
    }

    /// Every readable bookmark snapshot, ordered by key.
    pub async fn list_all(&self) -> Result<Vec<BookmarkSnapshot>> {
        Ok(self.get_all().await?.into_values().collect())
    }

    /// Delete every bookmark. Returns how many entries were removed.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<usize> {
        let keys: Vec<BookmarkKey> = scan_keys(&self.inner.kv).await?;

        // Sorted acquisition order, so two clears cannot deadlock.
        let locks: Vec<_> = keys.iter().map(|k| self.key_lock(k)).collect();
        let mut guards = Vec::with_capacity(locks.len());
        for lock in &locks {
            guards.push(lock.lock().await);
        }

        let raw: Vec<String> = keys.iter().map(|k| k.as_str().to_string()).collect();
        self.inner.kv.multi_remove(&raw).await?;

        self.inner.index.send_if_modified(|index| {
            let mut changed = false;
            for key in &keys {
                changed |= index.remove(key);
            }
            changed
        });

        debug!(removed = keys.len(), "Cleared bookmarks");
        Ok(keys.len())
    }

    async fn write(&self, key: &BookmarkKey, snapshot: &BookmarkSnapshot) -> Result<()> {
        let value = snapshot.encode(key.as_str())?;
        self.inner.kv.set(key.as_str(), &value).await?;
        self.inner
            .index
            .send_if_modified(|index| index.insert(key.clone(), snapshot.id.clone()));
        Ok(())
    }

    fn unindex(&self, key: &BookmarkKey) {
        self.inner.index.send_if_modified(|index| index.remove(key));
    }

    fn key_lock(&self, key: &BookmarkKey) -> Arc<AsyncMutex<()>> {
        let mut locks = self
            .inner
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // Entries only the map refers to are idle.
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        Arc::clone(locks.entry(key.clone()).or_default())
    }
}

/// All bookmark keys in the store, sorted.
async fn scan_keys<S: KeyValueStore>(kv: &S) -> Result<Vec<BookmarkKey>> {
    let mut keys: Vec<BookmarkKey> = kv
        .all_keys()
        .await?
        .into_iter()
        .filter(|k| BookmarkKey::is_bookmark_key(k))
        .filter_map(|k| BookmarkKey::new(k).ok())
        .collect();
    keys.sort();
    Ok(keys)
}

/// Read every bookmark entry, decoding each one independently.
async fn scan<S: KeyValueStore>(kv: &S) -> Result<Vec<(BookmarkKey, Result<BookmarkSnapshot>)>> {
    let keys = scan_keys(kv).await?;
    let raw: Vec<String> = keys.iter().map(|k| k.as_str().to_string()).collect();
    let values = kv.multi_get(&raw).await?;

    Ok(keys
        .into_iter()
        .zip(values)
        .filter_map(|(key, (_, value))| {
            let entry = match value {
                Ok(Some(value)) => BookmarkSnapshot::decode(key.as_str(), &value),
                // Removed between listing the keys and reading them.
                Ok(None) => return None,
                Err(e) => Err(e),
            };
            Some((key, entry))
        })
        .collect())
}
