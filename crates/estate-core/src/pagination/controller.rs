//! The pagination controller.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, instrument, warn};

use crate::Result;
use crate::traits::Catalog;
use crate::types::{FilterKey, PageNumber, PageSize};

use super::state::{LoadOutcome, PageStatus, PaginationState};

/// Owns the working set of the active filter and decides when to reset
/// and when to append.
///
/// Every filter reset bumps a generation counter. A fetch remembers the
/// generation it was issued under and its result is dropped if the
/// generation moved on while it was in flight, so pages of one filter
/// never land in another filter's working set.
///
/// The lock is never held across a fetch; methods take `&self` and can be
/// driven from several tasks at once.
#[derive(Debug)]
pub struct PaginationController<C> {
    catalog: Arc<C>,
    per_page: PageSize,
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    state: PaginationState,
    generation: u64,
}

/// What an issued fetch was for.
#[derive(Debug)]
struct Ticket {
    generation: u64,
    filter: FilterKey,
    page: PageNumber,
}

impl<C: Catalog> PaginationController<C> {
    /// Create an idle controller on the unfiltered scope.
    pub fn new(catalog: Arc<C>, per_page: PageSize) -> Self {
        Self {
            catalog,
            per_page,
            inner: Mutex::new(Inner {
                state: PaginationState::fresh(FilterKey::All),
                generation: 0,
            }),
        }
    }

    pub fn catalog(&self) -> &Arc<C> {
        &self.catalog
    }

    pub fn per_page(&self) -> PageSize {
        self.per_page
    }

    /// A copy of the current state.
    pub fn state(&self) -> PaginationState {
        self.lock().state.clone()
    }

    pub fn filter(&self) -> FilterKey {
        self.lock().state.filter.clone()
    }

    /// Switch to `filter` and load its first page.
    ///
    /// The working set is cleared before the fetch is issued. Selecting the
    /// current filter does nothing unless it never loaded or its first page
    /// failed, in which case the first page is requested again.
    #[instrument(skip(self), fields(%filter))]
    pub async fn select_filter(&self, filter: FilterKey) -> Result<LoadOutcome> {
        let ticket = {
            let mut inner = self.lock();
            let state = &inner.state;
            let reload = state.status == PageStatus::Idle || state.first_page_failed();
            if state.filter == filter && !reload {
                debug!("Filter already active");
                return Ok(LoadOutcome::Skipped);
            }

            inner.generation += 1;
            inner.state = PaginationState::fresh(filter.clone());
            inner.state.status = PageStatus::Loading;
            info!(generation = inner.generation, "Filter selected");

            Ticket {
                generation: inner.generation,
                filter,
                page: PageNumber::FIRST,
            }
        };

        self.fetch(ticket).await
    }

    /// Load the page after the last applied one and append it.
    ///
    /// Does nothing while a fetch is in flight or once the filter is
    /// exhausted. After a failure the same page is requested again.
    #[instrument(skip(self))]
    pub async fn load_more(&self) -> Result<LoadOutcome> {
        let ticket = {
            let mut inner = self.lock();
            match inner.state.status {
                PageStatus::Loading | PageStatus::Exhausted => {
                    return Ok(LoadOutcome::Skipped);
                }
                _ => {}
            }

            inner.state.status = PageStatus::Loading;
            Ticket {
                generation: inner.generation,
                filter: inner.state.filter.clone(),
                page: inner.state.next_page(),
            }
        };

        self.fetch(ticket).await
    }

    async fn fetch(&self, ticket: Ticket) -> Result<LoadOutcome> {
        debug!(filter = %ticket.filter, page = %ticket.page, "Fetching page");
        let result = self
            .catalog
            .fetch_page(&ticket.filter, ticket.page, self.per_page)
            .await;

        let mut inner = self.lock();
        if inner.generation != ticket.generation {
            debug!(
                filter = %ticket.filter,
                page = %ticket.page,
                "Discarding page for a superseded filter"
            );
            return Ok(LoadOutcome::Superseded);
        }

        let state = &mut inner.state;
        match result {
            Err(e) => {
                warn!(filter = %ticket.filter, page = %ticket.page, error = %e, "Page fetch failed");
                state.status = PageStatus::Failed {
                    reason: e.to_string(),
                };
                Err(e)
            }
            Ok(listings) if listings.is_empty() => {
                state.has_more = false;
                state.status = PageStatus::Exhausted;
                debug!(pages = state.page, items = state.items.len(), "Filter exhausted");
                Ok(LoadOutcome::Exhausted)
            }
            Ok(listings) => {
                let mut seen: HashSet<_> = state.items.iter().map(|l| l.id.clone()).collect();
                let before = state.items.len();
                for listing in listings {
                    if seen.insert(listing.id.clone()) {
                        state.items.push(listing);
                    } else {
                        debug!(id = %listing.id, "Dropping repeated listing");
                    }
                }

                state.page = ticket.page.get();
                state.status = PageStatus::Loaded;
                Ok(LoadOutcome::Loaded {
                    added: state.items.len() - before,
                })
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
