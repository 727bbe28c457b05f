//! estate-http - Listing catalog over the WordPress REST API.

mod catalog;
mod config;
mod rest;

pub use catalog::HttpCatalog;
pub use config::{CatalogConfig, DEFAULT_USER_AGENT};
