//! Category handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use atelier_core::{validation, NewCategory};

use super::Created;
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /admin/categories`
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewCategory>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    validation::validate_name(&payload.name)?;

    let id = state.db.categories().insert(&payload).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}
