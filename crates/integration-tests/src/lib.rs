//! Integration tests for Shopgate.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the gateway
//! cargo run -p shopgate-gateway
//!
//! # Run integration tests against it
//! cargo test -p shopgate-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `gateway_api` - Proxy route tests (require Shopify credentials)
//! - `gateway_webhooks` - Webhook receiver tests (the success case requires
//!   `SHOPIFY_WEBHOOK_SECRET` matching the running server's)
//!
//! # Environment
//!
//! - `GATEWAY_BASE_URL` - Where the gateway listens (default:
//!   `http://localhost:3000`)
