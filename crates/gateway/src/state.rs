//! Application state shared across handlers.

use std::sync::Arc;

use secrecy::ExposeSecret;

use crate::config::GatewayConfig;
use crate::shopify::{AdminClient, ShopifyError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and holds only immutable
/// configuration and the upstream client; no locking is needed across
/// concurrent requests.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: GatewayConfig,
    shopify: AdminClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the Shopify client cannot be built from the
    /// configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, ShopifyError> {
        let shopify = AdminClient::new(&config.shopify)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, shopify }),
        })
    }

    /// Get a reference to the gateway configuration.
    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.inner.config
    }

    /// Get a reference to the Shopify Admin API client.
    #[must_use]
    pub fn shopify(&self) -> &AdminClient {
        &self.inner.shopify
    }

    /// The shared secret used as the webhook HMAC key.
    #[must_use]
    pub fn webhook_secret(&self) -> &str {
        self.inner.config.shopify.webhook_secret.expose_secret()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    use secrecy::SecretString;

    use super::*;
    use crate::config::ShopifyConfig;

    /// Build an `AppState` with fixed test configuration.
    pub fn test_state() -> AppState {
        let config = GatewayConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            cors_origin: None,
            shopify: ShopifyConfig {
                store_url: "test.myshopify.com".to_string(),
                api_version: "2026-01".to_string(),
                access_token: SecretString::from("shpat_aB3xY9mK2nL5pQ7rT0uW4zC6"),
                webhook_secret: SecretString::from("shhh"),
                timeout_secs: 30,
            },
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        };

        AppState::new(config).unwrap()
    }

    #[test]
    fn test_state_exposes_webhook_secret() {
        let state = test_state();
        assert_eq!(state.webhook_secret(), "shhh");
    }
}
