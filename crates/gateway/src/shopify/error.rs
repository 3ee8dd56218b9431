//! Shopify client errors.

use thiserror::Error;

/// Errors that can occur when interacting with the Shopify Admin API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// The upstream call failed: a non-2xx response, or a transport error
    /// (connect, timeout). Carries the upstream HTTP status when one was
    /// received, else 500.
    #[error("Shopify API error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// A local fault (header construction, client build, response decode).
    /// Signals a programming or configuration error, not an upstream failure.
    #[error("Shopify client error: {0}")]
    Internal(String),
}
