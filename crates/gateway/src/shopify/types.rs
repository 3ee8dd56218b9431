//! Request types for the Admin API client.

use serde::{Deserialize, Serialize};

/// A webhook subscription to register with Shopify.
///
/// Shopify delivers matching events to `address` with the topic and shop
/// domain in headers and an HMAC signature over the raw body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookSubscription {
    /// Event topic (e.g., `orders/create`).
    pub topic: String,
    /// Delivery URL for matching events.
    pub address: String,
    /// Delivery format.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "json".to_string()
}
