//! HTTP route handlers for the gateway.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                                 - Greeting (liveness)
//! GET    /health                           - Health check
//!
//! # Products
//! GET    /api/products                     - List products
//! GET    /api/products/{id}                - Product detail
//! POST   /api/products                     - Create product (201)
//!
//! # Orders
//! GET    /api/orders                       - List orders
//! GET    /api/orders/{id}                  - Order detail
//!
//! # Customers
//! GET    /api/customers                    - List customers
//! GET    /api/customers/{id}               - Customer detail
//!
//! # Webhooks
//! POST   /api/webhooks                     - Receive + verify + acknowledge
//! GET    /api/webhooks                     - List registered subscriptions
//! POST   /api/webhooks/subscriptions       - Register a subscription (201)
//! DELETE /api/webhooks/subscriptions/{id}  - Delete a subscription
//! ```

pub mod customers;
pub mod orders;
pub mod products;
pub mod webhooks;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/{id}", get(products::show))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/{id}", get(orders::show))
}

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(customers::index))
        .route("/{id}", get(customers::show))
}

/// Create the webhook routes router.
///
/// `POST /` is the receiver Shopify delivers to; the subscription routes
/// manage registrations upstream.
pub fn webhook_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(webhooks::receive).get(webhooks::index))
        .route("/subscriptions", post(webhooks::subscribe))
        .route("/subscriptions/{id}", delete(webhooks::unsubscribe))
}

/// Create all routes for the gateway.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/products", product_routes())
        .nest("/api/orders", order_routes())
        .nest("/api/customers", customer_routes())
        .nest("/api/webhooks", webhook_routes())
}
