//! Progression engine settings.
//!
//! Operational knobs for the monetization chain and gang founding; loaded
//! once at startup from the environment (dotenv-compatible) and treated as
//! immutable afterwards.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default CTA destination when neither the override nor the provider
/// yields a URL. Carried over from the long-running production deployment.
pub const DEFAULT_CREDITS_STORE_URL: &str = "https://smgrpdonate.shop/";

/// Default bound on the provider lookup.
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionSettings {
    /// Operator override: when set and non-empty it wins the CTA resolution
    /// outright, before the provider is even consulted.
    pub store_url_override: Option<String>,
    /// Terminal fallback of the CTA resolution chain; must always be a
    /// usable URL.
    pub default_store_url: String,
    /// Premium balance a freshly founded gang starts with.
    pub starting_premium_credits: u64,
    /// Upper bound on the credits-store provider lookup.
    pub provider_timeout: Duration,
}

impl Default for ProgressionSettings {
    fn default() -> Self {
        Self {
            store_url_override: None,
            default_store_url: DEFAULT_CREDITS_STORE_URL.to_string(),
            starting_premium_credits: 0,
            provider_timeout: Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
        }
    }
}

impl ProgressionSettings {
    /// Load settings from environment variables, falling back to defaults.
    ///
    /// Reads `GANGFORGE_STORE_URL_OVERRIDE`, `GANGFORGE_DEFAULT_STORE_URL`,
    /// `GANGFORGE_STARTING_PREMIUM_CREDITS`, and
    /// `GANGFORGE_PROVIDER_TIMEOUT_SECS`. A `.env` file participates when
    /// present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        let store_url_override = std::env::var("GANGFORGE_STORE_URL_OVERRIDE")
            .ok()
            .filter(|url| !url.trim().is_empty());
        let default_store_url = std::env::var("GANGFORGE_DEFAULT_STORE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.default_store_url);
        let starting_premium_credits = std::env::var("GANGFORGE_STARTING_PREMIUM_CREDITS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.starting_premium_credits);
        let provider_timeout = std::env::var("GANGFORGE_PROVIDER_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.provider_timeout);

        Self {
            store_url_override,
            default_store_url,
            starting_premium_credits,
            provider_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ProgressionSettings::default();
        assert_eq!(settings.store_url_override, None);
        assert_eq!(settings.default_store_url, DEFAULT_CREDITS_STORE_URL);
        assert_eq!(settings.starting_premium_credits, 0);
        assert_eq!(settings.provider_timeout, Duration::from_secs(2));
    }
}
