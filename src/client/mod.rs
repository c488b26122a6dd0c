//! Resilient client for the upstream movies service.
//!
//! # Data Flow
//! ```text
//! retrieve_all() / retrieve_by_id()
//!     → build request URL from the configured base
//!     → single GET attempt under the aggregate timeout budget
//!     → classify.rs (transport failures)
//!     → 2xx: decode body | 4xx/5xx: remote error with body text
//! ```
//!
//! # Design Decisions
//! - Exactly one outbound attempt per call; no retries, no caching
//! - Connect and read budgets are enforced by the HTTP client; the write
//!   budget is covered by the aggregate deadline wrapping the whole call
//! - Each call opens a fresh connection; the client keeps no idle pool

mod classify;

use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::time;

use crate::client::classify::classify;
use crate::config::loader::ConfigError;
use crate::config::schema::ClientConfig;
use crate::config::validation::validate_config;
use crate::error::{TransportKind, UpstreamError};
use crate::model::Movie;

/// HTTP client for the movies service.
///
/// Holds only immutable state; clones share the underlying connection
/// machinery and may be used concurrently.
#[derive(Debug, Clone)]
pub struct MoviesClient {
    base_url: String,
    http: reqwest::Client,
    budget: Duration,
}

impl MoviesClient {
    /// Create a client from a validated configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        validate_config(config).map_err(ConfigError::Validation)?;

        let http = reqwest::Client::builder()
            .connect_timeout(config.timeouts.connect())
            .read_timeout(config.timeouts.read())
            .pool_max_idle_per_host(0)
            .build()
            .map_err(ConfigError::Client)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            budget: config.timeouts.aggregate(),
        })
    }

    /// Retrieve every movie known to the upstream service.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] classifying the failure as transport,
    /// remote, or decode. Exactly one attempt is made.
    pub async fn retrieve_all(&self) -> Result<Vec<Movie>, UpstreamError> {
        self.get_json(format!("{}/movies", self.base_url)).await
    }

    /// Retrieve a single movie by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] under the same classification rules as
    /// [`retrieve_all`](Self::retrieve_all); an unknown id surfaces as a
    /// remote error carrying the upstream 404.
    pub async fn retrieve_by_id(&self, id: i64) -> Result<Movie, UpstreamError> {
        self.get_json(format!("{}/movies/{}", self.base_url, id)).await
    }

    /// Issue one GET under the aggregate budget and decode the response.
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, UpstreamError> {
        tracing::debug!(url = %url, "issuing upstream request");

        let result = match time::timeout(self.budget, self.execute(&url)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(UpstreamError::transport(
                TransportKind::Timeout,
                format!(
                    "call exceeded the aggregate timeout budget of {}ms",
                    self.budget.as_millis()
                ),
            )),
        };

        if let Err(err) = &result {
            tracing::warn!(url = %url, status = ?err.status(), error = %err, "upstream call failed");
        }
        result
    }

    async fn execute<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| classify(&e))?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await.map_err(|e| classify(&e))?;
            serde_json::from_slice(&body).map_err(UpstreamError::decode)
        } else {
            // Body read failures on an error response lose nothing: the
            // status-derived fallback message still applies.
            let body = response.text().await.unwrap_or_default();
            Err(UpstreamError::remote(status, &body))
        }
    }
}
