//! Product handlers: listing, create, soft delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use atelier_core::{validation, NewProduct, ProductDraft, ProductListing};

use super::Created;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /admin/products/page/{offset}`
///
/// One page of the in-stock listing. A non-integer offset is rejected
/// before any query executes.
pub async fn list(
    State(state): State<AppState>,
    Path(offset): Path<String>,
) -> Result<Json<Vec<ProductListing>>, ApiError> {
    let offset = validation::parse_offset(&offset)?;
    let page = state.db.products().list_in_stock(offset).await?;
    Ok(Json(page))
}

/// `POST /admin/products`
///
/// Parses the submitted strings into typed values, then inserts the
/// product row and its initial size row in one transaction. A bad price
/// or stock fails the whole submission with 400 and writes nothing.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewProduct>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let draft = ProductDraft::from_input(payload)?;
    let id = state.db.products().insert(&draft).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

/// `DELETE /admin/products/{product_id}`
///
/// Soft delete: zeroes the stock of every size row; the product row and
/// its order history stay intact.
pub async fn remove(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.db.products().soft_delete(&product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
