//! Route table for the admin surface.
//!
//! All paths live under `/admin`; the reverse proxy in front of the
//! deployment routes that prefix here and handles authentication.

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the admin router.
///
/// Kept separate from server startup so tests can drive the router
/// directly with `tower::ServiceExt::oneshot`.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Read/report surface
        .route(
            "/admin/products/page/{offset}",
            get(handlers::products::list),
        )
        .route(
            "/admin/orders/page/{method}/{offset}",
            get(handlers::orders::list),
        )
        .route(
            "/admin/orders/{order_id}/items",
            get(handlers::orders::items),
        )
        .route(
            "/admin/customers/page/{offset}",
            get(handlers::users::list_customers),
        )
        .route("/admin/stats", get(handlers::stats::summary))
        // Mutation surface
        .route("/admin/products", post(handlers::products::create))
        .route(
            "/admin/products/{product_id}",
            delete(handlers::products::remove),
        )
        .route("/admin/categories", post(handlers::categories::create))
        .route("/admin/users", post(handlers::users::create))
        .route(
            "/admin/orders/{order_id}/status",
            put(handlers::orders::update_status),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
