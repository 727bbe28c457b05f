//! Bookmark storage keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};
use crate::types::{Listing, ListingId};

/// Prefix shared by every bookmark entry in the key-value store.
pub const BOOKMARK_PREFIX: &str = "bookmark_";

/// A key of a persisted bookmark record, `bookmark_<suffix>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookmarkKey(String);

impl BookmarkKey {
    /// Parse a full storage key, which must carry the bookmark prefix.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        match s.strip_prefix(BOOKMARK_PREFIX) {
            Some(suffix) if !suffix.is_empty() => Ok(Self(s)),
            Some(_) => Err(InvalidInputError::BookmarkKey {
                value: s,
                reason: "missing suffix after prefix".to_string(),
            }
            .into()),
            None => Err(InvalidInputError::BookmarkKey {
                value: s,
                reason: format!("must start with '{}'", BOOKMARK_PREFIX),
            }
            .into()),
        }
    }

    /// Key of a listing under the id scheme.
    pub fn for_id(id: &ListingId) -> Self {
        Self(format!("{}{}", BOOKMARK_PREFIX, id))
    }

    /// Key of a listing under the legacy title scheme.
    pub fn for_title(title: &str) -> Result<Self, Error> {
        Self::new(format!("{}{}", BOOKMARK_PREFIX, title))
    }

    /// Returns true if a raw store key belongs to a bookmark.
    pub fn is_bookmark_key(key: &str) -> bool {
        key.strip_prefix(BOOKMARK_PREFIX)
            .is_some_and(|suffix| !suffix.is_empty())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part after the prefix: a listing id or a title.
    pub fn suffix(&self) -> &str {
        &self.0[BOOKMARK_PREFIX.len()..]
    }
}

impl fmt::Display for BookmarkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BookmarkKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BookmarkKey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BookmarkKey> for String {
    fn from(key: BookmarkKey) -> Self {
        key.0
    }
}

impl AsRef<str> for BookmarkKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How a listing is mapped to its bookmark key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyScheme {
    /// `bookmark_<listing id>`: stable across title edits, no collisions.
    #[default]
    #[serde(rename = "id")]
    ListingId,
    /// `bookmark_<title>`: compatible with stores written by older clients.
    Title,
}

impl KeyScheme {
    /// Derive the bookmark key of a listing.
    pub fn key_for(self, listing: &Listing) -> Result<BookmarkKey, Error> {
        match self {
            KeyScheme::ListingId => Ok(BookmarkKey::for_id(&listing.id)),
            KeyScheme::Title => BookmarkKey::for_title(&listing.title),
        }
    }
}

impl FromStr for KeyScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(KeyScheme::ListingId),
            "title" => Ok(KeyScheme::Title),
            other => Err(InvalidInputError::Other {
                message: format!("unknown key scheme '{}' (expected 'id' or 'title')", other),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: u64, title: &str) -> Listing {
        Listing {
            id: ListingId::from(id),
            title: title.to_string(),
            property_type: "Duplex".to_string(),
            city: "Ikoyi".to_string(),
            price: "1".to_string(),
            featured_image_url: None,
            rating: None,
        }
    }

    #[test]
    fn id_scheme_keys_by_id() {
        let key = KeyScheme::ListingId
            .key_for(&listing(12, "Ocean View"))
            .unwrap();
        assert_eq!(key.as_str(), "bookmark_12");
        assert_eq!(key.suffix(), "12");
    }

    #[test]
    fn title_scheme_keys_by_title() {
        let key = KeyScheme::Title.key_for(&listing(12, "Ocean View")).unwrap();
        assert_eq!(key.as_str(), "bookmark_Ocean View");
    }

    #[test]
    fn title_scheme_collides_on_shared_titles() {
        let a = KeyScheme::Title.key_for(&listing(1, "Plot")).unwrap();
        let b = KeyScheme::Title.key_for(&listing(2, "Plot")).unwrap();
        assert_eq!(a, b);

        let a = KeyScheme::ListingId.key_for(&listing(1, "Plot")).unwrap();
        let b = KeyScheme::ListingId.key_for(&listing(2, "Plot")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn empty_title_has_no_key() {
        assert!(KeyScheme::Title.key_for(&listing(3, "")).is_err());
    }

    #[test]
    fn prefix_is_required() {
        assert!(BookmarkKey::new("userToken").is_err());
        assert!(BookmarkKey::new("bookmark_").is_err());
        assert!(BookmarkKey::is_bookmark_key("bookmark_9"));
        assert!(!BookmarkKey::is_bookmark_key("faceIDEnabled"));
    }

    #[test]
    fn scheme_parses_from_cli_values() {
        assert_eq!("id".parse::<KeyScheme>().unwrap(), KeyScheme::ListingId);
        assert_eq!("title".parse::<KeyScheme>().unwrap(), KeyScheme::Title);
        assert!("slug".parse::<KeyScheme>().is_err());
    }
}
