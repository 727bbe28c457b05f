//! Filtered, paginated browsing of the catalog.

mod controller;
mod state;

pub use controller::PaginationController;
pub use state::{LoadOutcome, PageStatus, PaginationState};
