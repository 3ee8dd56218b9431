//! Order proxy route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// List orders.
///
/// GET /api/orders
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Value>> {
    let orders = state.shopify().get_orders().await?;
    Ok(Json(orders))
}

/// Get a single order.
///
/// GET /api/orders/{id}
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Value>> {
    let order = state.shopify().get_order(id).await?;
    Ok(Json(order))
}
