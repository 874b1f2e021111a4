//! HTTP credits-store provider client.
//!
//! One shipped implementation of [`CreditsStorePort`]: asks the monetization
//! provider's API for the current store URL. The CTA resolver treats every
//! failure here as "try the next source", so this client reports errors
//! instead of inventing URLs.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::infrastructure::ports::{CreditsStoreError, CreditsStorePort};

/// Default provider base URL.
pub const DEFAULT_PROVIDER_BASE_URL: &str = "http://localhost:9321";

/// Default request timeout. Kept tight: a slow provider must not stall a
/// denied premium action.
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 2;

/// Client for the credits-store provider API.
#[derive(Clone)]
pub struct HttpCreditsStoreClient {
    client: Client,
    base_url: String,
}

impl HttpCreditsStoreClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_PROVIDER_TIMEOUT_SECS)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from environment variables.
    ///
    /// Uses `GANGFORGE_PROVIDER_BASE_URL` and
    /// `GANGFORGE_PROVIDER_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var("GANGFORGE_PROVIDER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_PROVIDER_BASE_URL.to_string());
        let timeout_secs = std::env::var("GANGFORGE_PROVIDER_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECS);
        Self::with_timeout(&base_url, timeout_secs)
    }
}

impl Default for HttpCreditsStoreClient {
    fn default() -> Self {
        Self::new(DEFAULT_PROVIDER_BASE_URL)
    }
}

#[derive(Debug, Deserialize)]
struct StoreUrlResponse {
    url: String,
}

#[async_trait]
impl CreditsStorePort for HttpCreditsStoreClient {
    async fn credits_store_url(&self) -> Result<String, CreditsStoreError> {
        let response = self
            .client
            .get(format!("{}/api/store-url", self.base_url))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CreditsStoreError::Timeout
                } else {
                    CreditsStoreError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(CreditsStoreError::RequestFailed(format!(
                "provider returned {}",
                response.status()
            )));
        }

        let payload: StoreUrlResponse = response
            .json()
            .await
            .map_err(|e| CreditsStoreError::RequestFailed(e.to_string()))?;

        let url = payload.url.trim().to_string();
        if url.is_empty() {
            return Err(CreditsStoreError::InvalidUrl("empty url".to_string()));
        }
        Ok(url)
    }
}
