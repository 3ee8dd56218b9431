//! Customer proxy route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// List customers.
///
/// GET /api/customers
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Value>> {
    let customers = state.shopify().get_customers().await?;
    Ok(Json(customers))
}

/// Get a single customer.
///
/// GET /api/customers/{id}
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Value>> {
    let customer = state.shopify().get_customer(id).await?;
    Ok(Json(customer))
}
