//! Shared application state.
//!
//! The state is a cheap clone: the database handle wraps a pooled
//! connection set, so every handler invocation can take its own copy.

use atelier_db::Database;

/// Shared application state handed to every handler via axum's `State`.
#[derive(Clone)]
pub struct AppState {
    /// Database handle providing repository access.
    pub db: Database,
}

impl AppState {
    /// Creates application state around a connected database.
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}
