//! Persisted bookmark snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, StorageError};
use crate::types::{Listing, ListingId};

/// The display fields of a listing, stored with its bookmark so the
/// bookmarks list renders without another catalog fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkSnapshot {
    /// Absent in records written by clients that keyed bookmarks by title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ListingId>,
    pub title: String,
    #[serde(
        default,
        deserialize_with = "image_source",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub location: String,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl BookmarkSnapshot {
    /// Snapshot the display fields of a listing, stamped with the current time.
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            id: Some(listing.id.clone()),
            title: listing.title.clone(),
            image: listing.featured_image_url.clone(),
            category: listing.property_type.clone(),
            price: listing.price.clone(),
            location: listing.city.clone(),
            rating: listing.rating.clone(),
            saved_at: Some(Utc::now()),
        }
    }

    /// Parse a stored value, reporting failures as storage corruption of `key`.
    pub fn decode(key: &str, value: &str) -> Result<Self, Error> {
        serde_json::from_str(value).map_err(|e| {
            Error::Storage(StorageError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            })
        })
    }

    /// Serialise for storage under `key`.
    pub fn encode(&self, key: &str) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|e| {
            Error::Storage(StorageError::Encode {
                key: key.to_string(),
                reason: e.to_string(),
            })
        })
    }
}

/// Image fields were written either as a URL string or as an image source
/// object `{ "uri": "..." }`; bundled placeholder images were stored as
/// numbers and carry no URL.
fn image_source<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let url = match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Object(map)) => map
            .get("uri")
            .and_then(|u| u.as_str())
            .map(str::to_string),
        _ => None,
    };
    Ok(url.filter(|u| !u.is_empty()))
}

/// Accepts a string or a number.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
