//! Pagination state types.

use serde::Serialize;

use crate::types::{FilterKey, Listing, PageNumber};

/// Where the controller is in its fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageStatus {
    /// Nothing requested for this filter yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// At least one page applied; more may follow.
    Loaded,
    /// A fetch returned no rows; nothing more to load.
    Exhausted,
    /// The last fetch failed. Already loaded items are kept.
    Failed { reason: String },
}

/// The working set of the active filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub filter: FilterKey,
    /// Number of pages applied to `items`; 0 until the first page lands.
    pub page: u32,
    pub has_more: bool,
    /// Pages `1..=page` of `filter`, in remote order.
    pub items: Vec<Listing>,
    pub status: PageStatus,
}

impl PaginationState {
    pub(crate) fn fresh(filter: FilterKey) -> Self {
        Self {
            filter,
            page: 0,
            has_more: true,
            items: Vec::new(),
            status: PageStatus::Idle,
        }
    }

    /// The page a `load_more` would request.
    pub fn next_page(&self) -> PageNumber {
        PageNumber::new(self.page.saturating_add(1)).unwrap_or(PageNumber::FIRST)
    }

    pub fn is_loading(&self) -> bool {
        self.status == PageStatus::Loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.status == PageStatus::Exhausted
    }

    /// True when the first page of the filter failed and nothing is shown.
    pub fn first_page_failed(&self) -> bool {
        self.page == 0 && matches!(self.status, PageStatus::Failed { .. })
    }
}

/// Result of a `select_filter` or `load_more` call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was applied; `added` new listings joined the working set.
    Loaded { added: usize },
    /// The page was empty; the filter has no more data.
    Exhausted,
    /// Nothing was requested (already loading, exhausted, or same filter).
    Skipped,
    /// The result arrived after the filter changed and was discarded.
    Superseded,
}
