//! Property listing types and field normalisation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Display value for a missing category or city.
pub const UNKNOWN: &str = "Unknown";

/// Display value for a missing price.
pub const PRICE_NOT_AVAILABLE: &str = "Not Available";

/// Opaque, stable identifier of a listing in the remote catalog.
///
/// The content API sends numeric ids; they are kept as their decimal
/// string so the rest of the crate never depends on the numeric form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ListingId(String);

impl ListingId {
    /// Create a listing id, rejecting empty or whitespace-bearing values.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        if s.is_empty() {
            return Err(InvalidInputError::ListingId {
                value: s,
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        if s.chars().any(char::is_whitespace) {
            return Err(InvalidInputError::ListingId {
                value: s,
                reason: "cannot contain whitespace".to_string(),
            }
            .into());
        }
        Ok(Self(s))
    }

    /// Returns the id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for ListingId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ListingId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ListingId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ListingId> for String {
    fn from(id: ListingId) -> Self {
        id.0
    }
}

/// One property record, normalised from the remote catalog.
///
/// Built fresh on every fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    /// Category tag, [`UNKNOWN`] when the record has none.
    pub property_type: String,
    /// Display-cased city, [`UNKNOWN`] when the record has none.
    pub city: String,
    /// First element of the price array, [`PRICE_NOT_AVAILABLE`] when absent.
    pub price: String,
    pub featured_image_url: Option<String>,
    pub rating: Option<String>,
}

/// A listing together with the details shown on its own page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDetail {
    pub listing: Listing,
    /// Feature bullet points extracted from the description.
    pub features: Vec<String>,
}

/// Capitalise the first character and lowercase the rest.
///
/// Empty or missing input becomes [`UNKNOWN`].
pub fn normalize_city(city: Option<&str>) -> String {
    let Some(city) = city.map(str::trim).filter(|c| !c.is_empty()) else {
        return UNKNOWN.to_string();
    };

    let mut chars = city.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => UNKNOWN.to_string(),
    }
}

/// Category tag or [`UNKNOWN`].
pub fn normalize_category(category: Option<&str>) -> String {
    non_empty(category).unwrap_or_else(|| UNKNOWN.to_string())
}

/// Price text or [`PRICE_NOT_AVAILABLE`].
pub fn normalize_price(price: Option<&str>) -> String {
    non_empty(price).unwrap_or_else(|| PRICE_NOT_AVAILABLE.to_string())
}

/// Image URL, treating an empty string as no image.
pub fn normalize_image(url: Option<&str>) -> Option<String> {
    non_empty(url)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
