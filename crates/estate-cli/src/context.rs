//! Backends shared by every command.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use tracing::debug;

use estate_core::{ApiUrl, BookmarkStore, KeyScheme};
use estate_file::FileStore;
use estate_http::{CatalogConfig, HttpCatalog};

use crate::cli::GlobalArgs;

/// Resolved global settings.
#[derive(Debug)]
pub struct Context {
    config: CatalogConfig,
    data_dir: PathBuf,
    key_scheme: KeyScheme,
}

impl Context {
    pub fn from_args(args: &GlobalArgs) -> Result<Self> {
        let api = ApiUrl::new(&args.api).context("Invalid API URL")?;
        let config = CatalogConfig::new(api).with_timeout(Duration::from_secs(args.timeout_secs));

        let data_dir = match &args.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };
        debug!(data_dir = %data_dir.display(), api = %config.api, "Resolved settings");

        Ok(Self {
            config,
            data_dir,
            key_scheme: args.key_scheme,
        })
    }

    pub fn catalog(&self) -> Result<Arc<HttpCatalog>> {
        let catalog =
            HttpCatalog::with_config(self.config.clone()).context("Failed to create catalog client")?;
        Ok(Arc::new(catalog))
    }

    pub async fn bookmarks(&self) -> Result<BookmarkStore<FileStore>> {
        BookmarkStore::open(FileStore::new(&self.data_dir), self.key_scheme)
            .await
            .context("Failed to open bookmarks")
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "estate").context("Could not determine data directory")?;
    Ok(dirs.data_dir().to_path_buf())
}
