//! Resource paths and wire types of the WordPress REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use estate_core::types::{normalize_category, normalize_city, normalize_image, normalize_price};
use estate_core::{Listing, ListingId, PropertyType};

/// Property records.
pub const PROPERTIES: &str = "properties";

/// Property type taxonomy terms.
pub const PROPERTY_TYPES: &str = "property_type";

/// Query of one page of the property list.
#[derive(Debug, Serialize)]
pub struct ListQuery<'a> {
    /// Present so the featured media is embedded; the value is ignored.
    #[serde(rename = "_embed")]
    pub embed: &'a str,
    pub per_page: u32,
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<&'a str>,
}

/// Query of a single embedded property.
#[derive(Debug, Serialize)]
pub struct EmbedQuery<'a> {
    #[serde(rename = "_embed")]
    pub embed: &'a str,
}

/// Query of the type list.
#[derive(Debug, Serialize)]
pub struct TypesQuery {
    pub per_page: u32,
}

/// Error body returned by WordPress, `{ code, message, data: { status } }`.
#[derive(Debug, Deserialize)]
pub struct WpErrorResponse {
    pub code: Option<String>,
    pub message: Option<String>,
}

/// A `{ "rendered": "..." }` field.
#[derive(Debug, Default, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

/// One property record as the API sends it.
///
/// Theme fields are loosely typed: `property_meta` is `[]` when empty and
/// taxonomy fields may be strings, numbers or arrays, so they are read
/// from raw JSON values.
#[derive(Debug, Deserialize)]
pub struct RawProperty {
    pub id: u64,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub content: Rendered,
    #[serde(default)]
    pub property_type: Value,
    #[serde(default)]
    pub property_city: Value,
    #[serde(default)]
    pub property_meta: Value,
    #[serde(default, rename = "_embedded")]
    pub embedded: Value,
}

impl RawProperty {
    /// Normalise into a display listing.
    pub fn into_listing(self) -> Listing {
        let meta = |field: &str| self.property_meta.get(field).and_then(first_text);
        let image = self
            .embedded
            .get("wp:featuredmedia")
            .and_then(|media| media.get(0))
            .and_then(|media| media.get("source_url"))
            .and_then(Value::as_str);

        Listing {
            id: ListingId::from(self.id),
            title: self.title.rendered.trim().to_string(),
            property_type: normalize_category(first_text(&self.property_type).as_deref()),
            city: normalize_city(first_text(&self.property_city).as_deref()),
            price: normalize_price(meta("fave_property_price").as_deref()),
            featured_image_url: normalize_image(image),
            rating: meta("fave_property_rating").filter(|r| !r.trim().is_empty()),
        }
    }
}

/// One term of the property type taxonomy.
#[derive(Debug, Deserialize)]
pub struct RawPropertyType {
    pub id: u64,
    pub name: String,
}

impl From<RawPropertyType> for PropertyType {
    fn from(raw: RawPropertyType) -> Self {
        PropertyType {
            id: raw.id.to_string(),
            name: raw.name,
        }
    }
}

/// The text of a scalar, or of the first element of an array.
fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => items.first().and_then(first_text),
        _ => None,
    }
}
