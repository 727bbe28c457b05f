//! Page cursor and page size types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, InvalidInputError};

/// Page size used by browsing screens.
pub const HOME_PAGE_SIZE: PageSize = PageSize(10);

/// Page size used by search, large enough to be effectively unpaginated.
pub const SEARCH_PAGE_SIZE: PageSize = PageSize(100);

/// A 1-based page number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page.
    pub const FIRST: PageNumber = PageNumber(1);

    /// Create a page number, rejecting zero.
    pub fn new(n: u32) -> Result<Self, Error> {
        if n == 0 {
            return Err(InvalidInputError::Page {
                value: n.to_string(),
                reason: "pages are numbered from 1".to_string(),
            }
            .into());
        }
        Ok(Self(n))
    }

    /// Returns the following page.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageNumber {
    type Error = Error;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<PageNumber> for u32 {
    fn from(page: PageNumber) -> Self {
        page.0
    }
}

/// Number of listings requested per page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageSize(u32);

impl PageSize {
    /// Largest page the content API serves.
    pub const MAX: u32 = 100;

    pub fn new(n: u32) -> Result<Self, Error> {
        if n == 0 || n > Self::MAX {
            return Err(InvalidInputError::PageSize {
                value: n.to_string(),
                reason: format!("must be between 1 and {}", Self::MAX),
            }
            .into());
        }
        Ok(Self(n))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageSize {
    type Error = Error;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.0
    }
}
