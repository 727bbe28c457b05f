//! Catalog client configuration.

use std::time::Duration;

use estate_core::ApiUrl;

/// Default user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("estate/", env!("CARGO_PKG_VERSION"));

/// How to reach the remote catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub api: ApiUrl,
    /// Per-request timeout. Expiry is reported as a timeout error.
    pub timeout: Duration,
    pub user_agent: String,
}

impl CatalogConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

    pub fn new(api: ApiUrl) -> Self {
        Self {
            api,
            timeout: Self::DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
