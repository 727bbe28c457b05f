//! Catalog filter types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// The active property-type scope for pagination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilterKey {
    /// Every listing, unfiltered.
    #[default]
    All,
    /// Listings of one property type, by type id.
    Type(String),
}

impl FilterKey {
    /// Parse a filter key: `all` (any case) or a property type id.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref().trim();

        if s.eq_ignore_ascii_case("all") {
            return Ok(FilterKey::All);
        }

        if s.is_empty() {
            return Err(InvalidInputError::Filter {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(InvalidInputError::Filter {
                value: s.to_string(),
                reason: "type ids may only contain letters, digits, '-' and '_'".to_string(),
            }
            .into());
        }

        Ok(FilterKey::Type(s.to_string()))
    }

    /// Returns the type id for a type filter, `None` for [`FilterKey::All`].
    pub fn type_id(&self) -> Option<&str> {
        match self {
            FilterKey::All => None,
            FilterKey::Type(id) => Some(id),
        }
    }

    /// Returns true for the unfiltered scope.
    pub fn is_all(&self) -> bool {
        matches!(self, FilterKey::All)
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKey::All => f.write_str("all"),
            FilterKey::Type(id) => f.write_str(id),
        }
    }
}

impl FromStr for FilterKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FilterKey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<FilterKey> for String {
    fn from(filter: FilterKey) -> Self {
        filter.to_string()
    }
}

/// A property type as listed by the remote type-list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyType {
    pub id: String,
    pub name: String,
}

/// A selectable filter with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChip {
    pub filter: FilterKey,
    pub label: String,
}

impl FilterChip {
    /// Label of the synthetic unfiltered chip.
    pub const ALL_LABEL: &'static str = "All";

    /// The synthetic chip that selects every listing.
    pub fn all() -> Self {
        Self {
            filter: FilterKey::All,
            label: Self::ALL_LABEL.to_string(),
        }
    }

    /// Build the chip row: the `All` chip followed by one chip per type.
    ///
    /// Types whose id is not a valid filter key are skipped.
    pub fn row(types: &[PropertyType]) -> Vec<FilterChip> {
        std::iter::once(FilterChip::all())
            .chain(types.iter().filter_map(|t| {
                let filter = FilterKey::new(&t.id).ok().filter(|f| !f.is_all())?;
                Some(FilterChip {
                    filter,
                    label: t.name.clone(),
                })
            }))
            .collect()
    }
}
