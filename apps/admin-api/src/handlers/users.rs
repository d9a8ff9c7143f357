//! User handlers: account creation and the customer listing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use atelier_core::{validation, CustomerSummary, NewUser};

use super::Created;
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /admin/users`
///
/// Creates an account with the default `customer` role. The password
/// arrives pre-hashed from the authentication service; this surface
/// never sees plaintext credentials.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    validation::validate_email(&payload.email)?;
    validation::validate_required("password", &payload.password)?;

    let id = state.db.users().insert(&payload).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

/// `GET /admin/customers/page/{offset}`
pub async fn list_customers(
    State(state): State<AppState>,
    Path(offset): Path<String>,
) -> Result<Json<Vec<CustomerSummary>>, ApiError> {
    let offset = validation::parse_offset(&offset)?;
    let page = state.db.users().list_customers(offset).await?;
    Ok(Json(page))
}
