//! REST HTTP client implementation.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use estate_core::error::NetworkError;
use estate_core::{ApiUrl, Result};

use crate::config::CatalogConfig;

use super::wire::WpErrorResponse;

/// HTTP client for the content API.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    api: ApiUrl,
    timeout_ms: u64,
}

impl RestClient {
    /// Create a client from the catalog configuration.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| NetworkError::Http {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            api: config.api.clone(),
            timeout_ms: u64::try_from(config.timeout.as_millis()).unwrap_or(u64::MAX),
        })
    }

    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// GET a REST resource and decode its JSON body.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn get<Q, R>(&self, path: &str, params: &Q) -> Result<R>
    where
        Q: Serialize + std::fmt::Debug + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(%url, "REST query");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_reqwest(e))?;

        self.handle_response(response).await
    }

    /// Decode a successful body, or turn an error body into a status error.
    async fn handle_response<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "REST response");

        if !status.is_success() {
            return Err(self.parse_error_response(response).await.into());
        }

        let body = response.text().await.map_err(|e| self.map_reqwest(e))?;
        serde_json::from_str(&body).map_err(|e| {
            NetworkError::Decode {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Parse a WordPress error body, keeping just the status if it has none.
    async fn parse_error_response(&self, response: reqwest::Response) -> NetworkError {
        let status = response.status().as_u16();

        match response.json::<WpErrorResponse>().await {
            Ok(body) => NetworkError::Status {
                status,
                code: body.code,
                message: body.message,
            },
            Err(_) => NetworkError::Status {
                status,
                code: None,
                message: None,
            },
        }
    }

    fn map_reqwest(&self, err: reqwest::Error) -> NetworkError {
        if err.is_timeout() {
            NetworkError::Timeout {
                duration_ms: self.timeout_ms,
            }
        } else if err.is_connect() {
            NetworkError::Connection {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            NetworkError::Decode {
                message: err.to_string(),
            }
        } else {
            NetworkError::Http {
                message: err.to_string(),
            }
        }
    }
}
