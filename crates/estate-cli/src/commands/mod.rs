//! Command implementations.

pub mod bookmark;
pub mod catalog;
