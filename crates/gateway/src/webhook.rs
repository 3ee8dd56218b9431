//! Webhook signature verification and topic dispatch.
//!
//! Shopify signs every webhook delivery with HMAC-SHA256 over the raw request
//! body, base64-encoded into the `X-Shopify-Hmac-Sha256` header:
//! <https://shopify.dev/docs/apps/build/webhooks/subscribe/https#verify-the-webhook>
//!
//! The signature is computed over the exact bytes received. Parsing and
//! re-serializing the payload before verification would break it, so the
//! envelope carries the untouched body.
//!
//! A single delivery moves through three gates:
//!
//! 1. All three `X-Shopify-*` headers present, else rejected (missing headers)
//! 2. Signature matches, else rejected (bad signature)
//! 3. Topic dispatched to its handler; unknown topics are a no-op but are
//!    still acknowledged

use axum::body::Bytes;
use axum::http::HeaderMap;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;
use tracing::{debug, info};

type HmacSha256 = Hmac<Sha256>;

// Lowercase so the consts are usable as static header names.

/// Header carrying the base64 HMAC-SHA256 signature (`X-Shopify-Hmac-Sha256`).
pub const HMAC_HEADER: &str = "x-shopify-hmac-sha256";
/// Header carrying the event topic (`X-Shopify-Topic`, e.g. `orders/create`).
pub const TOPIC_HEADER: &str = "x-shopify-topic";
/// Header carrying the originating shop domain (`X-Shopify-Shop-Domain`).
pub const SHOP_DOMAIN_HEADER: &str = "x-shopify-shop-domain";

/// Why an inbound webhook was rejected.
///
/// Both causes surface as the same 401 externally; they are distinguished
/// here so logs can tell a misconfigured sender from a forged delivery.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WebhookError {
    /// One of the three required `X-Shopify-*` headers is absent.
    #[error("missing required webhook headers")]
    MissingHeaders,

    /// The claimed signature does not match the body HMAC.
    #[error("invalid webhook signature")]
    InvalidSignature,
}

/// An inbound webhook delivery, pre-verification.
#[derive(Debug, Clone)]
pub struct WebhookEnvelope {
    /// Event topic from `X-Shopify-Topic`.
    pub topic: String,
    /// Originating shop from `X-Shopify-Shop-Domain`.
    pub shop_domain: String,
    /// Claimed base64 signature from `X-Shopify-Hmac-Sha256`.
    pub hmac: String,
    /// The exact, unparsed body bytes as received.
    pub raw_body: Bytes,
}

impl WebhookEnvelope {
    /// Build an envelope from request headers and the raw body.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::MissingHeaders` if any of the three required
    /// headers is absent or not valid UTF-8. This check runs before any HMAC
    /// work.
    pub fn from_request(headers: &HeaderMap, raw_body: Bytes) -> Result<Self, WebhookError> {
        let header = |name: &str| -> Result<String, WebhookError> {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
                .ok_or(WebhookError::MissingHeaders)
        };

        Ok(Self {
            hmac: header(HMAC_HEADER)?,
            topic: header(TOPIC_HEADER)?,
            shop_domain: header(SHOP_DOMAIN_HEADER)?,
            raw_body,
        })
    }

    /// Verify the claimed signature against the raw body.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::InvalidSignature` on mismatch.
    pub fn verify(&self, secret: &str) -> Result<(), WebhookError> {
        if verify_signature(&self.raw_body, &self.hmac, secret) {
            Ok(())
        } else {
            Err(WebhookError::InvalidSignature)
        }
    }
}

/// Check a claimed base64 HMAC-SHA256 signature over the raw body bytes.
///
/// Returns true iff the base64 digest of `HMAC-SHA256(secret, raw_body)`
/// equals `claimed_base64`.
#[must_use]
pub fn verify_signature(raw_body: &[u8], claimed_base64: &str, secret: &str) -> bool {
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(raw_body);

    let computed = BASE64.encode(mac.finalize().into_bytes());

    constant_time_compare(&computed, claimed_base64)
}

/// Dispatch a verified webhook to its topic handler.
///
/// Unrecognized topics fall through with no handling; the delivery is still
/// acknowledged by the caller. New topics are added here, never in the
/// verification gate.
pub fn dispatch(envelope: &WebhookEnvelope) {
    let payload: serde_json::Value =
        serde_json::from_slice(&envelope.raw_body).unwrap_or(serde_json::Value::Null);

    match envelope.topic.as_str() {
        "products/create" => on_product_created(&envelope.shop_domain, &payload),
        "orders/create" => on_order_created(&envelope.shop_domain, &payload),
        topic => debug!(topic, shop = %envelope.shop_domain, "No handler for webhook topic"),
    }
}

fn on_product_created(shop: &str, payload: &serde_json::Value) {
    let product_id = payload.get("id").and_then(serde_json::Value::as_u64);
    info!(shop, product_id, "Product created");
}

fn on_order_created(shop: &str, payload: &serde_json::Value) {
    let order_id = payload.get("id").and_then(serde_json::Value::as_u64);
    info!(shop, order_id, "Order created");
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result: u8 = 0;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }

    result == 0
}
