//! Remote catalog trait.

use async_trait::async_trait;

use crate::Result;
use crate::types::{FilterKey, Listing, ListingDetail, ListingId, PageNumber, PageSize, PropertyType};

/// Read access to the remote property catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch one page of listings for a filter.
    ///
    /// Preserves the remote ordering. An empty page is a successful
    /// result that signals the end of the data, never an error.
    async fn fetch_page(
        &self,
        filter: &FilterKey,
        page: PageNumber,
        per_page: PageSize,
    ) -> Result<Vec<Listing>>;

    /// List the property types that can be used as filters.
    async fn property_types(&self) -> Result<Vec<PropertyType>>;

    /// Fetch a single listing with its detail fields.
    async fn listing(&self, id: &ListingId) -> Result<ListingDetail>;
}
