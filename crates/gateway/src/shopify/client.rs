//! Shopify Admin API REST client.
//!
//! Thin forwarding client: every operation is a composition of [`AdminClient::send`],
//! which attaches the access token and content-type headers and normalizes
//! upstream failures into [`ShopifyError::Upstream`].

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use secrecy::ExposeSecret;
use serde_json::{Value, json};
use tracing::{debug, instrument};

use crate::config::ShopifyConfig;

use super::error::ShopifyError;
use super::types::WebhookSubscription;

/// Header carrying the Admin API access token.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Shopify Admin API client.
///
/// Holds only immutable configuration (endpoint, default headers) and is
/// cheaply cloneable; safe to share read-only across concurrent requests.
#[derive(Clone)]
pub struct AdminClient {
    /// HTTP client with default headers and timeout applied.
    client: Client,
    /// Endpoint base, e.g. `https://store.myshopify.com/admin/api/2026-01`.
    endpoint: String,
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl AdminClient {
    /// Create a new Admin API client.
    ///
    /// The access token and content-type headers are installed as reqwest
    /// default headers so that every request carries them.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::Internal` if the access token is not a valid
    /// header value or the HTTP client fails to build.
    pub fn new(config: &ShopifyConfig) -> Result<Self, ShopifyError> {
        let mut headers = HeaderMap::new();

        let mut token = HeaderValue::from_str(config.access_token.expose_secret())
            .map_err(|e| ShopifyError::Internal(format!("invalid access token: {e}")))?;
        token.set_sensitive(true);
        headers.insert(ACCESS_TOKEN_HEADER, token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ShopifyError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
        })
    }

    /// Send a request to the Admin API and decode the JSON response.
    ///
    /// Transport errors and non-2xx responses are normalized to
    /// [`ShopifyError::Upstream`]; the status is the upstream's when one was
    /// received, else 500.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::Upstream` when the upstream call fails and
    /// `ShopifyError::Internal` when a 2xx body cannot be decoded as JSON.
    #[instrument(skip(self, body), fields(method = %method, path = %path))]
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ShopifyError> {
        let url = format!("{}{path}", self.endpoint);

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| ShopifyError::Upstream {
            status: 500,
            message: e.to_string(),
        })?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(ShopifyError::Upstream {
                status: status.as_u16(),
                message: upstream_error_message(status, &text),
            });
        }

        debug!(status = status.as_u16(), "Shopify request succeeded");

        if text.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| ShopifyError::Internal(e.to_string()))
    }

    // Products

    /// List products.
    ///
    /// # Errors
    ///
    /// Returns error if the upstream call fails.
    pub async fn get_products(&self) -> Result<Value, ShopifyError> {
        self.send(Method::GET, "/products.json", None).await
    }

    /// Get a single product by id.
    ///
    /// # Errors
    ///
    /// Returns error if the upstream call fails.
    pub async fn get_product(&self, product_id: u64) -> Result<Value, ShopifyError> {
        self.send(Method::GET, &format!("/products/{product_id}.json"), None)
            .await
    }

    /// Create a product. The fields are wrapped under a `product` key upstream.
    ///
    /// # Errors
    ///
    /// Returns error if the upstream call fails.
    pub async fn create_product(&self, product: &Value) -> Result<Value, ShopifyError> {
        self.send(
            Method::POST,
            "/products.json",
            Some(&json!({ "product": product })),
        )
        .await
    }

    // Orders

    /// List orders.
    ///
    /// # Errors
    ///
    /// Returns error if the upstream call fails.
    pub async fn get_orders(&self) -> Result<Value, ShopifyError> {
        self.send(Method::GET, "/orders.json", None).await
    }

    /// Get a single order by id.
    ///
    /// # Errors
    ///
    /// Returns error if the upstream call fails.
    pub async fn get_order(&self, order_id: u64) -> Result<Value, ShopifyError> {
        self.send(Method::GET, &format!("/orders/{order_id}.json"), None)
            .await
    }

    // Customers

    /// List customers.
    ///
    /// # Errors
    ///
    /// Returns error if the upstream call fails.
    pub async fn get_customers(&self) -> Result<Value, ShopifyError> {
        self.send(Method::GET, "/customers.json", None).await
    }

    /// Get a single customer by id.
    ///
    /// # Errors
    ///
    /// Returns error if the upstream call fails.
    pub async fn get_customer(&self, customer_id: u64) -> Result<Value, ShopifyError> {
        self.send(Method::GET, &format!("/customers/{customer_id}.json"), None)
            .await
    }

    // Webhooks

    /// Register a webhook subscription. Wrapped under a `webhook` key upstream.
    ///
    /// # Errors
    ///
    /// Returns error if the upstream call fails.
    pub async fn create_webhook(
        &self,
        subscription: &WebhookSubscription,
    ) -> Result<Value, ShopifyError> {
        self.send(
            Method::POST,
            "/webhooks.json",
            Some(&json!({ "webhook": subscription })),
        )
        .await
    }

    /// List registered webhook subscriptions.
    ///
    /// # Errors
    ///
    /// Returns error if the upstream call fails.
    pub async fn get_webhooks(&self) -> Result<Value, ShopifyError> {
        self.send(Method::GET, "/webhooks.json", None).await
    }

    /// Delete a webhook subscription by id.
    ///
    /// # Errors
    ///
    /// Returns error if the upstream call fails.
    pub async fn delete_webhook(&self, webhook_id: u64) -> Result<Value, ShopifyError> {
        self.send(Method::DELETE, &format!("/webhooks/{webhook_id}.json"), None)
            .await
    }
}

/// Extract a human-readable message from an upstream error response.
///
/// Prefers the structured `errors` field Shopify puts in failure bodies,
/// falls back to the raw body text, then to the status' canonical reason.
fn upstream_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        match value.get("errors") {
            Some(Value::String(message)) => return message.clone(),
            Some(errors) if !errors.is_null() => return errors.to_string(),
            _ => {}
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("upstream request failed")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn test_config() -> ShopifyConfig {
        ShopifyConfig {
            store_url: "test.myshopify.com".to_string(),
            api_version: "2026-01".to_string(),
            access_token: SecretString::from("shpat_aB3xY9mK2nL5pQ7rT0uW4zC6"),
            webhook_secret: SecretString::from("wk9!Jd2#Lp5@Qz8$Tv1&Xb4*"),
            timeout_secs: 30,
        }
    }

    #[test]
    fn test_new_builds_client() {
        let client = AdminClient::new(&test_config()).unwrap();
        assert_eq!(client.endpoint, "https://test.myshopify.com/admin/api/2026-01");
    }

    #[test]
    fn test_new_rejects_invalid_token() {
        let mut config = test_config();
        config.access_token = SecretString::from("token\nwith\nnewlines");

        let result = AdminClient::new(&config);
        assert!(matches!(result, Err(ShopifyError::Internal(_))));
    }

    #[test]
    fn test_upstream_error_message_structured_string() {
        let message = upstream_error_message(StatusCode::NOT_FOUND, r#"{"errors":"Not found"}"#);
        assert_eq!(message, "Not found");
    }

    #[test]
    fn test_upstream_error_message_structured_object() {
        let message = upstream_error_message(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"errors":{"title":["can't be blank"]}}"#,
        );
        assert_eq!(message, r#"{"title":["can't be blank"]}"#);
    }

    #[test]
    fn test_upstream_error_message_raw_body_fallback() {
        let message = upstream_error_message(StatusCode::BAD_GATEWAY, "upstream exploded");
        assert_eq!(message, "upstream exploded");
    }

    #[test]
    fn test_upstream_error_message_empty_body_fallback() {
        let message = upstream_error_message(StatusCode::NOT_FOUND, "");
        assert_eq!(message, "Not Found");
    }

    #[test]
    fn test_debug_hides_client_internals() {
        let client = AdminClient::new(&test_config()).unwrap();
        let debug_output = format!("{client:?}");
        assert!(debug_output.contains("test.myshopify.com"));
        assert!(!debug_output.contains("shpat_"));
    }
}
