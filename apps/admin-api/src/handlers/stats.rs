//! Dashboard statistics handler.

use axum::extract::State;
use axum::Json;

use atelier_core::StatSummary;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /admin/stats`
///
/// The aggregate is assembled from independent queries; see
/// `StatsRepository::summary` for the consistency model.
pub async fn summary(State(state): State<AppState>) -> Result<Json<StatSummary>, ApiError> {
    let summary = state.db.stats().summary().await?;
    Ok(Json(summary))
}
