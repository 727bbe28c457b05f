//! estate-file - Filesystem-backed key-value store.
//!
//! Persists bookmarks (and any other key-value entries) across restarts.

mod store;

pub use store::FileStore;
