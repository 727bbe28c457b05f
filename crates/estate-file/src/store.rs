//! Filesystem storage for the key-value store.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use fs2::FileExt;
use tracing::{debug, instrument, trace};
use uuid::Uuid;

use estate_core::error::{Error, StorageError};
use estate_core::{KeyValueStore, KeyedValue, Result};

fn map_io(err: std::io::Error) -> Error {
    Error::Storage(StorageError::Io {
        message: err.to_string(),
    })
}

/// Filesystem-backed key-value store.
///
/// Each key is one file under `<root>/kv/`, named by the URL-safe base64
/// encoding of the key. Values are written to a temporary file and renamed
/// into place while holding an exclusive lock on `<root>/kv.lock`, so
/// concurrent writers (in this process or others) never interleave and
/// readers never see a partial value.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a new file store at the given root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn kv_dir(&self) -> PathBuf {
        self.root.join("kv")
    }

    fn lock_path(&self) -> PathBuf {
        self.root.join("kv.lock")
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.kv_dir().join(URL_SAFE_NO_PAD.encode(key))
    }

    /// Decode an entry file name back to its key.
    fn key_from_file_name(name: &str) -> Option<String> {
        let bytes = URL_SAFE_NO_PAD.decode(name).ok()?;
        String::from_utf8(bytes).ok()
    }

    /// Run `f` while holding the exclusive store lock.
    fn with_lock<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        fs::create_dir_all(self.kv_dir()).map_err(map_io)?;

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())
            .map_err(map_io)?;

        lock_file.lock_exclusive().map_err(map_io)?;
        let result = f();
        lock_file.unlock().map_err(map_io)?;

        result
    }

    fn read_entry(&self, key: &str) -> Result<Option<String>> {
        let bytes = match fs::read(self.entry_path(key)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(map_io(e)),
        };

        String::from_utf8(bytes).map(Some).map_err(|e| {
            Error::Storage(StorageError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            })
        })
    }

    fn write_entry(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key);
        // A leading dot keeps temp files out of the key alphabet.
        let temp_path = self.kv_dir().join(format!(".{}.tmp", Uuid::new_v4()));

        let mut file = File::create(&temp_path).map_err(map_io)?;
        file.write_all(value.as_bytes()).map_err(map_io)?;
        file.sync_all().map_err(map_io)?;
        drop(file);

        if let Err(e) = fs::rename(&temp_path, &path) {
            let _ = fs::remove_file(&temp_path);
            return Err(map_io(e));
        }

        trace!(key, path = %path.display(), "Wrote entry");
        Ok(())
    }

    fn remove_entry(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io(e)),
        }
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        let dir = self.kv_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in fs::read_dir(&dir).map_err(map_io)? {
            let entry = entry.map_err(map_io)?;
            if !entry.file_type().map_err(map_io)?.is_file() {
                continue;
            }
            let name = entry.file_name();
            match name.to_str().and_then(Self::key_from_file_name) {
                Some(key) => keys.push(key),
                None => trace!(file = ?name, "Ignoring foreign file"),
            }
        }

        keys.sort();
        Ok(keys)
    }

    /// Run blocking filesystem work off the async executor.
    async fn blocking<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&FileStore) -> Result<T> + Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || f(&store))
            .await
            .map_err(|e| {
                Error::Storage(StorageError::Io {
                    message: format!("storage task failed: {}", e),
                })
            })?
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let key = key.to_string();
        self.blocking(move |store| store.read_entry(&key)).await
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let (key, value) = (key.to_string(), value.to_string());
        self.blocking(move |store| store.with_lock(|| store.write_entry(&key, &value)))
            .await?;
        debug!("Stored entry");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        self.blocking(move |store| store.with_lock(|| store.remove_entry(&key)))
            .await
    }

    async fn all_keys(&self) -> Result<Vec<String>> {
        self.blocking(|store| store.list_keys()).await
    }

    async fn multi_get(&self, keys: &[String]) -> Result<Vec<KeyedValue>> {
        let keys = keys.to_vec();
        self.blocking(move |store| {
            Ok(keys
                .into_iter()
                .map(|key| {
                    let value = store.read_entry(&key);
                    (key, value)
                })
                .collect())
        })
        .await
    }

    /// Removes every key under a single hold of the store lock.
    #[instrument(skip(self, keys), fields(count = keys.len()))]
    async fn multi_remove(&self, keys: &[String]) -> Result<()> {
        let keys = keys.to_vec();
        self.blocking(move |store| {
            store.with_lock(|| keys.iter().try_for_each(|key| store.remove_entry(key)))
        })
        .await
    }
}
