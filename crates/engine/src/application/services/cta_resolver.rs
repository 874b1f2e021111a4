//! Credits-store call-to-action URL resolution.
//!
//! An explicit ordered fallback chain: operator override, then the provider
//! lookup (bounded by a timeout), then the configured default. The terminal
//! source cannot fail, so resolution is infallible: callers never observe an
//! unresolved URL, and a flaky provider never fails a premium action.

use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::ports::{CreditsStoreError, CreditsStorePort};
use crate::infrastructure::settings::ProgressionSettings;

/// One source in the resolution chain.
pub enum StoreUrlSource {
    /// Explicit configured override; wins outright when present.
    Override(String),
    /// External provider lookup, bounded by the given timeout.
    Provider {
        port: Arc<dyn CreditsStorePort>,
        timeout: Duration,
    },
    /// Hardcoded-default terminal source; never fails.
    Fallback(String),
}

impl StoreUrlSource {
    async fn try_resolve(&self) -> Result<String, CreditsStoreError> {
        match self {
            Self::Override(url) => Ok(url.clone()),
            Self::Provider { port, timeout } => {
                match tokio::time::timeout(*timeout, port.credits_store_url()).await {
                    Ok(result) => result,
                    Err(_) => Err(CreditsStoreError::Timeout),
                }
            }
            Self::Fallback(url) => Ok(url.clone()),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Override(_) => "override",
            Self::Provider { .. } => "provider",
            Self::Fallback(_) => "fallback",
        }
    }
}

/// Ordered store-URL resolution chain.
pub struct StoreUrlResolver {
    sources: Vec<StoreUrlSource>,
}

impl StoreUrlResolver {
    /// Build the chain from settings and an optional provider.
    ///
    /// Blank overrides are treated as absent. The chain always terminates in
    /// the settings' default URL.
    pub fn from_settings(
        settings: &ProgressionSettings,
        provider: Option<Arc<dyn CreditsStorePort>>,
    ) -> Self {
        let mut sources = Vec::new();
        if let Some(url) = settings
            .store_url_override
            .as_ref()
            .filter(|url| !url.trim().is_empty())
        {
            sources.push(StoreUrlSource::Override(url.clone()));
        }
        if let Some(port) = provider {
            sources.push(StoreUrlSource::Provider {
                port,
                timeout: settings.provider_timeout,
            });
        }
        sources.push(StoreUrlSource::Fallback(settings.default_store_url.clone()));
        Self { sources }
    }

    /// Resolve the CTA URL: first source to succeed wins.
    pub async fn resolve(&self) -> String {
        for source in &self.sources {
            match source.try_resolve().await {
                Ok(url) => return url,
                Err(err) => {
                    tracing::warn!(
                        source = source.label(),
                        error = %err,
                        "store URL source failed, trying next"
                    );
                }
            }
        }
        // the chain is built with a terminal Fallback source
        unreachable!("store URL chain exhausted without a fallback")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockCreditsStorePort;
    use crate::infrastructure::settings::DEFAULT_CREDITS_STORE_URL;

    fn settings() -> ProgressionSettings {
        ProgressionSettings::default()
    }

    #[tokio::test]
    async fn test_override_wins_over_provider() {
        let mut provider = MockCreditsStorePort::new();
        provider.expect_credits_store_url().times(0);

        let settings = ProgressionSettings {
            store_url_override: Some("https://override.example/".to_string()),
            ..settings()
        };

        let resolver = StoreUrlResolver::from_settings(&settings, Some(Arc::new(provider)));
        assert_eq!(resolver.resolve().await, "https://override.example/");
    }

    #[tokio::test]
    async fn test_provider_used_without_override() {
        let mut provider = MockCreditsStorePort::new();
        provider
            .expect_credits_store_url()
            .returning(|| Ok("https://provider.example/store".to_string()));

        let resolver = StoreUrlResolver::from_settings(&settings(), Some(Arc::new(provider)));
        assert_eq!(resolver.resolve().await, "https://provider.example/store");
    }

    #[tokio::test]
    async fn test_provider_failure_falls_through_to_default() {
        let mut provider = MockCreditsStorePort::new();
        provider
            .expect_credits_store_url()
            .returning(|| Err(CreditsStoreError::RequestFailed("boom".to_string())));

        let resolver = StoreUrlResolver::from_settings(&settings(), Some(Arc::new(provider)));
        assert_eq!(resolver.resolve().await, DEFAULT_CREDITS_STORE_URL);
    }

    /// Provider that never answers within any sane timeout.
    struct StalledProvider;

    #[async_trait::async_trait]
    impl CreditsStorePort for StalledProvider {
        async fn credits_store_url(&self) -> Result<String, CreditsStoreError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("https://too.slow/".to_string())
        }
    }

    #[tokio::test]
    async fn test_provider_timeout_falls_through_to_default() {
        let settings = ProgressionSettings {
            provider_timeout: Duration::from_millis(20),
            ..settings()
        };

        let resolver = StoreUrlResolver::from_settings(&settings, Some(Arc::new(StalledProvider)));
        assert_eq!(resolver.resolve().await, DEFAULT_CREDITS_STORE_URL);
    }

    #[tokio::test]
    async fn test_no_provider_resolves_default() {
        let resolver = StoreUrlResolver::from_settings(&settings(), None);
        assert_eq!(resolver.resolve().await, DEFAULT_CREDITS_STORE_URL);
    }

    #[tokio::test]
    async fn test_blank_override_is_ignored() {
        let settings = ProgressionSettings {
            store_url_override: Some("   ".to_string()),
            ..settings()
        };
        let resolver = StoreUrlResolver::from_settings(&settings, None);
        assert_eq!(resolver.resolve().await, DEFAULT_CREDITS_STORE_URL);
    }
}
