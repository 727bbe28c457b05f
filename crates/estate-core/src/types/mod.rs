//! Core catalog types.
//!
//! These types enforce their invariants at construction time,
//! so an invalid page, filter or URL never reaches a backend.

mod api_url;
mod filter;
mod listing;
mod page;

pub use api_url::ApiUrl;
pub use filter::{FilterChip, FilterKey, PropertyType};
pub use listing::{
    Listing, ListingDetail, ListingId, PRICE_NOT_AVAILABLE, UNKNOWN, normalize_category,
    normalize_city, normalize_image, normalize_price,
};
pub use page::{HOME_PAGE_SIZE, PageNumber, PageSize, SEARCH_PAGE_SIZE};
