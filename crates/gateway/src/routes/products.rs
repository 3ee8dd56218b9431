//! Product proxy route handlers.
//!
//! Payloads pass through untouched; the upstream response is the response.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// List products.
///
/// GET /api/products
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Value>> {
    let products = state.shopify().get_products().await?;
    Ok(Json(products))
}

/// Get a single product.
///
/// GET /api/products/{id}
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Value>> {
    let product = state.shopify().get_product(id).await?;
    Ok(Json(product))
}

/// Create a product.
///
/// POST /api/products
///
/// The request body is the bare product fields; the client wraps them under
/// a `product` key for the upstream call.
#[instrument(skip(state, product))]
pub async fn create(
    State(state): State<AppState>,
    Json(product): Json<Value>,
) -> Result<(StatusCode, Json<Value>)> {
    let created = state.shopify().create_product(&product).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
