//! REST-backed catalog implementation.

use async_trait::async_trait;
use tracing::{debug, instrument};

use estate_core::error::InvalidInputError;
use estate_core::{
    ApiUrl, Catalog, FilterKey, Listing, ListingDetail, ListingId, PageNumber, PageSize,
    PropertyType, Result, extract_features,
};

use crate::config::CatalogConfig;
use crate::rest::client::RestClient;
use crate::rest::wire::{
    EmbedQuery, ListQuery, PROPERTIES, PROPERTY_TYPES, RawProperty, RawPropertyType, TypesQuery,
};

/// Largest page of taxonomy terms the API serves.
const TYPES_PER_PAGE: u32 = 100;

/// A [`Catalog`] served by the WordPress REST API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: RestClient,
}

impl HttpCatalog {
    /// Create a catalog client with default settings.
    pub fn new(api: ApiUrl) -> Result<Self> {
        Self::with_config(CatalogConfig::new(api))
    }

    pub fn with_config(config: CatalogConfig) -> Result<Self> {
        Ok(Self {
            client: RestClient::new(&config)?,
        })
    }

    /// Returns the API base URL for this catalog.
    pub fn api(&self) -> &ApiUrl {
        self.client.api()
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    #[instrument(skip(self), fields(%filter, %page, %per_page))]
    async fn fetch_page(
        &self,
        filter: &FilterKey,
        page: PageNumber,
        per_page: PageSize,
    ) -> Result<Vec<Listing>> {
        let query = ListQuery {
            embed: "",
            per_page: per_page.get(),
            page: page.get(),
            property_type: filter.type_id(),
        };

        let raw: Vec<RawProperty> = self.client.get(PROPERTIES, &query).await?;
        debug!(count = raw.len(), "Fetched page");
        Ok(raw.into_iter().map(RawProperty::into_listing).collect())
    }

    #[instrument(skip(self))]
    async fn property_types(&self) -> Result<Vec<PropertyType>> {
        let query = TypesQuery {
            per_page: TYPES_PER_PAGE,
        };
        let raw: Vec<RawPropertyType> = self.client.get(PROPERTY_TYPES, &query).await?;
        debug!(count = raw.len(), "Fetched property types");
        Ok(raw.into_iter().map(PropertyType::from).collect())
    }

    #[instrument(skip(self), fields(%id))]
    async fn listing(&self, id: &ListingId) -> Result<ListingDetail> {
        // The id becomes a path segment; the API only issues numeric ids.
        if !id.as_str().bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidInputError::ListingId {
                value: id.to_string(),
                reason: "must be numeric".to_string(),
            }
            .into());
        }

        let path = format!("{}/{}", PROPERTIES, id);
        let raw: RawProperty = self.client.get(&path, &EmbedQuery { embed: "" }).await?;

        let features = extract_features(&raw.content.rendered);
        Ok(ListingDetail {
            listing: raw.into_listing(),
            features,
        })
    }
}
