//! Webhook route handlers.
//!
//! `receive` is the endpoint Shopify delivers events to. The verification
//! gate runs before any handling: required headers first, then the HMAC
//! check over the raw body bytes. The body is taken as [`Bytes`] rather than
//! `Json` so the signature is computed over exactly what was received.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use serde_json::{Value, json};
use tracing::{info, instrument};

use crate::error::Result;
use crate::shopify::WebhookSubscription;
use crate::state::AppState;
use crate::webhook::{self, WebhookEnvelope};

/// Receive, verify, and acknowledge a webhook delivery.
///
/// POST /api/webhooks
///
/// Rejects with 401 before any handling when headers are missing or the
/// signature does not match. Verified deliveries are dispatched by topic;
/// unrecognized topics are still acknowledged.
#[instrument(skip(state, headers, body))]
pub async fn receive(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>> {
    let envelope = WebhookEnvelope::from_request(&headers, body)?;
    envelope.verify(state.webhook_secret())?;

    info!(topic = %envelope.topic, shop = %envelope.shop_domain, "Webhook received");
    webhook::dispatch(&envelope);

    Ok(Json(json!({
        "success": true,
        "message": format!("Webhook {} processed", envelope.topic),
    })))
}

/// List webhook subscriptions registered upstream.
///
/// GET /api/webhooks
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Value>> {
    let webhooks = state.shopify().get_webhooks().await?;
    Ok(Json(webhooks))
}

/// Register a webhook subscription upstream.
///
/// POST /api/webhooks/subscriptions
#[instrument(skip(state, subscription), fields(topic = %subscription.topic))]
pub async fn subscribe(
    State(state): State<AppState>,
    Json(subscription): Json<WebhookSubscription>,
) -> Result<(StatusCode, Json<Value>)> {
    let created = state.shopify().create_webhook(&subscription).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Delete a webhook subscription upstream.
///
/// DELETE /api/webhooks/subscriptions/{id}
#[instrument(skip(state))]
pub async fn unsubscribe(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>> {
    let deleted = state.shopify().delete_webhook(id).await?;
    Ok(Json(deleted))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::HeaderValue;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    use super::*;
    use crate::error::AppError;
    use crate::state::test_support::test_state;
    use crate::webhook::{HMAC_HEADER, SHOP_DOMAIN_HEADER, TOPIC_HEADER, WebhookError};

    /// Compute the base64 signature the way Shopify does.
    fn sign(secret: &str, body: &[u8]) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(body);
        BASE64.encode(mac.finalize().into_bytes())
    }

    fn delivery_headers(signature: &str, topic: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(HMAC_HEADER, HeaderValue::from_str(signature).unwrap());
        headers.insert(TOPIC_HEADER, HeaderValue::from_str(topic).unwrap());
        headers.insert(
            SHOP_DOMAIN_HEADER,
            HeaderValue::from_static("test.myshopify.com"),
        );
        headers
    }

    #[tokio::test]
    async fn test_receive_acknowledges_valid_delivery() {
        // Test state configures the webhook secret as "shhh".
        let state = test_state();
        let body = Bytes::from_static(br#"{"id":1}"#);
        let headers = delivery_headers(&sign("shhh", &body), "orders/create");

        let Json(response) = receive(State(state), headers, body).await.unwrap();

        assert_eq!(response["success"], json!(true));
        assert_eq!(response["message"], json!("Webhook orders/create processed"));
    }

    #[tokio::test]
    async fn test_receive_acknowledges_unknown_topic() {
        let state = test_state();
        let body = Bytes::from_static(br#"{"id":7}"#);
        let headers = delivery_headers(&sign("shhh", &body), "themes/publish");

        let Json(response) = receive(State(state), headers, body).await.unwrap();

        assert_eq!(response["message"], json!("Webhook themes/publish processed"));
    }

    #[tokio::test]
    async fn test_receive_rejects_missing_headers() {
        let state = test_state();
        let body = Bytes::from_static(br#"{"id":1}"#);
        let mut headers = delivery_headers(&sign("shhh", &body), "orders/create");
        headers.remove(TOPIC_HEADER);

        let error = receive(State(state), headers, body).await.unwrap_err();

        assert!(matches!(
            error,
            AppError::Webhook(WebhookError::MissingHeaders)
        ));
    }

    #[tokio::test]
    async fn test_receive_rejects_bad_signature() {
        let state = test_state();
        let body = Bytes::from_static(br#"{"id":1}"#);
        // Signature computed over a different body.
        let headers = delivery_headers(&sign("shhh", br#"{"id":2}"#), "orders/create");

        let error = receive(State(state), headers, body).await.unwrap_err();

        assert!(matches!(
            error,
            AppError::Webhook(WebhookError::InvalidSignature)
        ));
    }
}
