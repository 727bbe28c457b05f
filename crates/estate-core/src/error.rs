//! Error types for the estate crates.
//!
//! One error type with explicit variants for remote catalog failures,
//! local storage failures and input validation, so callers can tell a
//! failed request apart from a corrupt bookmark or a bad argument.

use thiserror::Error;

/// The unified error type for estate operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Remote catalog failures (transport, HTTP status, decoding, timeout).
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// Local key-value store failures.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Input validation errors (page numbers, filters, URLs, keys).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true for failures of a remote catalog call.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }

    /// Returns true if a persisted value could not be parsed.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Error::Storage(StorageError::Corrupt { .. }))
    }
}

/// Failures talking to the remote content API.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// The server answered with a non-success status.
    #[error("{}", describe_status(.status, .code, .message))]
    Status {
        status: u16,
        code: Option<String>,
        message: Option<String>,
    },

    /// The response body did not have the expected shape.
    #[error("failed to decode response: {message}")]
    Decode { message: String },
}

fn describe_status(status: &u16, code: &Option<String>, message: &Option<String>) -> String {
    let mut out = format!("HTTP {}", status);
    if let Some(code) = code {
        out.push_str(&format!(" [{}]", code));
    }
    if let Some(message) = message {
        out.push_str(&format!(": {}", message));
    }
    out
}

/// Failures of the local key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem or other I/O failure.
    #[error("IO error: {message}")]
    Io { message: String },

    /// A persisted value exists but cannot be parsed.
    #[error("corrupt entry '{key}': {reason}")]
    Corrupt { key: String, reason: String },

    /// A value could not be serialized for storage.
    #[error("failed to encode value for '{key}': {reason}")]
    Encode { key: String, reason: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid page number.
    #[error("invalid page '{value}': {reason}")]
    Page { value: String, reason: String },

    /// Invalid page size.
    #[error("invalid page size '{value}': {reason}")]
    PageSize { value: String, reason: String },

    /// Invalid filter key.
    #[error("invalid filter '{value}': {reason}")]
    Filter { value: String, reason: String },

    /// Invalid listing identifier.
    #[error("invalid listing id '{value}': {reason}")]
    ListingId { value: String, reason: String },

    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid bookmark key.
    #[error("invalid bookmark key '{value}': {reason}")]
    BookmarkKey { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
