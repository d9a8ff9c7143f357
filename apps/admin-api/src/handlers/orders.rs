//! Order handlers: filtered listing, item lookup, status update.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use atelier_core::{validation, OrderFilter, OrderItemDetail, OrderStatus, OrderSummary};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /admin/orders/page/{method}/{offset}`
///
/// `method` must be one of the fixed filter tokens (`prepared`, `sent`,
/// `processed`, `finished`, `paid`, `unpaid`, `all`); anything else is a
/// 400 before any query executes, as is a non-integer offset.
pub async fn list(
    State(state): State<AppState>,
    Path((method, offset)): Path<(String, String)>,
) -> Result<Json<Vec<OrderSummary>>, ApiError> {
    let filter: OrderFilter = method.parse()?;
    let offset = validation::parse_offset(&offset)?;

    let page = state.db.orders().list(filter, offset).await?;
    Ok(Json(page))
}

/// `GET /admin/orders/{order_id}/items`
pub async fn items(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Vec<OrderItemDetail>>, ApiError> {
    let items = state.db.orders().items(&order_id).await?;
    Ok(Json(items))
}

/// Payload for a status update.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    /// One of `prepared`, `sent`, `processed`, `finished`.
    pub status: String,
}

/// `PUT /admin/orders/{order_id}/status`
pub async fn update_status(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Json(payload): Json<StatusUpdate>,
) -> Result<StatusCode, ApiError> {
    let status: OrderStatus = payload.status.parse()?;

    state.db.orders().update_status(&order_id, status).await?;
    Ok(StatusCode::NO_CONTENT)
}
