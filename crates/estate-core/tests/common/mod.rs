#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use estate_core::error::NetworkError;
use estate_core::{
    Catalog, FilterKey, Listing, ListingDetail, ListingId, PageNumber, PageSize, PropertyType,
    Result,
};

/// Build a listing with predictable display fields.
pub fn listing(id: u64, title: &str) -> Listing {
    Listing {
        id: ListingId::from(id),
        title: title.to_string(),
        property_type: "Duplex".to_string(),
        city: "Ikoyi".to_string(),
        price: format!("{},000,000", id),
        featured_image_url: Some(format!("https://cdn.example/{}.jpg", id)),
        rating: None,
    }
}

/// `count` listings with ids starting at `first`.
pub fn listings(first: u64, count: u64, prefix: &str) -> Vec<Listing> {
    (first..first + count)
        .map(|id| listing(id, &format!("{} {}", prefix, id)))
        .collect()
}

/// Holds a filter's fetches until released.
#[derive(Default)]
pub struct Gate {
    entered: Notify,
    release: Notify,
}

impl Gate {
    /// Wait until a fetch is parked at this gate.
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    /// Let one parked fetch continue.
    pub fn release(&self) {
        self.release.notify_one();
    }
}

/// A catalog that serves pre-scripted pages.
#[derive(Default)]
pub struct ScriptedCatalog {
    pages: Mutex<HashMap<(FilterKey, u32), Vec<Listing>>>,
    fail_once: Mutex<HashSet<(FilterKey, u32)>>,
    gates: Mutex<HashMap<FilterKey, Arc<Gate>>>,
    calls: Mutex<Vec<(FilterKey, u32, u32)>>,
    types: Mutex<Option<Vec<PropertyType>>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(self, filter: &FilterKey, page: u32, listings: Vec<Listing>) -> Self {
        self.pages
            .lock()
            .unwrap()
            .insert((filter.clone(), page), listings);
        self
    }

    pub fn types(self, types: &[(&str, &str)]) -> Self {
        *self.types.lock().unwrap() = Some(
            types
                .iter()
                .map(|(id, name)| PropertyType {
                    id: id.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        );
        self
    }

    /// The next fetch of this page fails with a network error.
    pub fn fail_once(&self, filter: &FilterKey, page: u32) {
        self.fail_once
            .lock()
            .unwrap()
            .insert((filter.clone(), page));
    }

    /// Park every fetch of `filter` until released.
    pub fn hold(&self, filter: &FilterKey) -> Arc<Gate> {
        let gate = Arc::new(Gate::default());
        self.gates
            .lock()
            .unwrap()
            .insert(filter.clone(), Arc::clone(&gate));
        gate
    }

    pub fn calls(&self) -> Vec<(FilterKey, u32, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

fn unavailable() -> estate_core::Error {
    NetworkError::Connection {
        message: "connection reset".to_string(),
    }
    .into()
}

#[async_trait]
impl Catalog for ScriptedCatalog {
    async fn fetch_page(
        &self,
        filter: &FilterKey,
        page: PageNumber,
        per_page: PageSize,
    ) -> Result<Vec<Listing>> {
        self.calls
            .lock()
            .unwrap()
            .push((filter.clone(), page.get(), per_page.get()));

        let gate = self.gates.lock().unwrap().get(filter).cloned();
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }

        if self
            .fail_once
            .lock()
            .unwrap()
            .remove(&(filter.clone(), page.get()))
        {
            return Err(unavailable());
        }

        Ok(self
            .pages
            .lock()
            .unwrap()
            .get(&(filter.clone(), page.get()))
            .cloned()
            .unwrap_or_default())
    }

    async fn property_types(&self) -> Result<Vec<PropertyType>> {
        self.types.lock().unwrap().clone().ok_or_else(unavailable)
    }

    async fn listing(&self, id: &ListingId) -> Result<ListingDetail> {
        self.pages
            .lock()
            .unwrap()
            .values()
            .flatten()
            .find(|l| &l.id == id)
            .map(|l| ListingDetail {
                listing: l.clone(),
                features: Vec::new(),
            })
            .ok_or_else(|| {
                NetworkError::Status {
                    status: 404,
                    code: Some("rest_post_invalid_id".to_string()),
                    message: None,
                }
                .into()
            })
    }
}
