//! Shopify Admin API client.
//!
//! This module provides:
//! - [`AdminClient`] for authenticated REST calls against the configured store
//! - [`ShopifyError`] separating upstream failures from local client faults
//! - [`WebhookSubscription`] for registering webhook endpoints
//!
//! The client forwards JSON payloads as-is (`serde_json::Value`); it does not
//! model Shopify resources. Every call is a fresh round trip with no retries
//! and no caching.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopgate_gateway::shopify::AdminClient;
//!
//! let client = AdminClient::new(&config.shopify)?;
//!
//! // Get products
//! let products = client.get_products().await?;
//!
//! // Get a specific order
//! let order = client.get_order(450789469).await?;
//! ```

mod client;
mod error;
mod types;

pub use client::AdminClient;
pub use error::ShopifyError;
pub use types::WebhookSubscription;
