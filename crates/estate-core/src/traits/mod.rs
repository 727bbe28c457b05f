//! Traits at the boundary between the core logic and its backends.

mod catalog;
mod kv_store;

pub use catalog::Catalog;
pub use kv_store::{KeyValueStore, KeyedValue};
