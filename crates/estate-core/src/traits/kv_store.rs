//! Persistent key-value store trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::Result;

/// One entry of a [`KeyValueStore::multi_get`] batch.
pub type KeyedValue = (String, Result<Option<String>>);

/// A string-keyed store of string values that survives restarts.
///
/// Implementations only need to make single-key operations atomic;
/// read-modify-write sequences are serialised by the caller.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Deleting a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;

    /// List every key in the store.
    async fn all_keys(&self) -> Result<Vec<String>>;

    /// Read several keys at once.
    ///
    /// A value that cannot be read fails its own entry, not the batch.
    async fn multi_get(&self, keys: &[String]) -> Result<Vec<KeyedValue>> {
        let mut values = Vec::with_capacity(keys.len());
        for key in keys {
            values.push((key.clone(), self.get(key).await));
        }
        Ok(values)
    }

    /// Delete several keys at once.
    async fn multi_remove(&self, keys: &[String]) -> Result<()> {
        for key in keys {
            self.remove(key).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key).await
    }

    async fn all_keys(&self) -> Result<Vec<String>> {
        (**self).all_keys().await
    }

    async fn multi_get(&self, keys: &[String]) -> Result<Vec<KeyedValue>> {
        (**self).multi_get(keys).await
    }

    async fn multi_remove(&self, keys: &[String]) -> Result<()> {
        (**self).multi_remove(keys).await
    }
}
