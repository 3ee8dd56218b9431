//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures internal errors to Sentry
//! before responding to the client. All route handlers return
//! `Result<T, AppError>`.
//!
//! Failure taxonomy:
//! - webhook authentication failures surface as 401 with the rejection cause
//!   kept generic
//! - upstream failures surface with the status and message the upstream
//!   reported
//! - everything else is a 500 with a generic message; details stay in logs
//!   and Sentry

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::shopify::ShopifyError;
use crate::webhook::WebhookError;

/// Application-level error type for the gateway.
#[derive(Debug, Error)]
pub enum AppError {
    /// Inbound webhook failed the verification gate.
    #[error("Webhook rejected: {0}")]
    Webhook(#[from] WebhookError),

    /// Shopify API operation failed.
    #[error("Shopify error: {0}")]
    Shopify(#[from] ShopifyError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The HTTP status and client-facing message for this error.
    ///
    /// Upstream failures pass their status and message through; internal
    /// failures collapse to a generic 500 so no internals leak.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Webhook(WebhookError::MissingHeaders) => (
                StatusCode::UNAUTHORIZED,
                "Missing required headers".to_string(),
            ),
            Self::Webhook(WebhookError::InvalidSignature) => (
                StatusCode::UNAUTHORIZED,
                "Invalid webhook signature".to_string(),
            ),
            Self::Shopify(ShopifyError::Upstream { status, message }) => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                message.clone(),
            ),
            Self::Shopify(ShopifyError::Internal(_)) | Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture internal faults to Sentry; upstream and auth rejections are
        // part of normal proxy traffic and only logged.
        if matches!(
            self,
            Self::Shopify(ShopifyError::Internal(_)) | Self::Internal(_)
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        let (status, message) = self.status_and_message();
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
