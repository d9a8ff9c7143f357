//! # Identifier Generation
//!
//! Collision-checked unique identifier generation for primary keys.
//!
//! ## How It Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                Identifier Generation Loop                               │
//! │                                                                         │
//! │  generate UUID v4 ──► probe table with bound COUNT query               │
//! │       ▲                        │                                        │
//! │       │                        ▼                                        │
//! │       └──── collision ◄── count != 0 ?                                 │
//! │                                │                                        │
//! │                                ▼ count == 0                             │
//! │                         return identifier                               │
//! │                                                                         │
//! │  With 122 bits of randomness a collision is effectively impossible;    │
//! │  the loop exists so an insert never races an identifier that is        │
//! │  already present.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Bound Parameters Only
//! The probe binds the candidate identifier as a parameter. Identifiers are
//! never interpolated into the SQL text; the table is named by a constant
//! query string owned by the calling repository.

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;

/// Generates a fresh identifier guaranteed absent from the probed table
/// at generation time.
///
/// ## Arguments
/// * `pool` - Connection pool
/// * `probe_sql` - A constant `SELECT COUNT(1) ... WHERE <pk> = ?1` query
///   owned by the calling repository
///
/// ## Note
/// The check-then-insert window is not closed here; the PRIMARY KEY
/// constraint still backstops a racing insert with the same identifier.
pub async fn fresh_id(pool: &SqlitePool, probe_sql: &'static str) -> DbResult<String> {
    loop {
        let candidate = Uuid::new_v4().to_string();

        let hits: i64 = sqlx::query_scalar(probe_sql)
            .bind(&candidate)
            .fetch_one(pool)
            .await?;

        if hits == 0 {
            return Ok(candidate);
        }

        debug!(id = %candidate, "Identifier collision, regenerating");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    const PROBE: &str = "SELECT COUNT(1) FROM categories WHERE id = ?1";

    #[tokio::test]
    async fn test_fresh_id_returns_uuid_shaped_string() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let id = fresh_id(db.pool(), PROBE).await.unwrap();
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[tokio::test]
    async fn test_fresh_id_skips_occupied_identifier() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        // Occupy one identifier, then confirm generation never returns it.
        let taken = fresh_id(db.pool(), PROBE).await.unwrap();
        sqlx::query("INSERT INTO categories (id, name) VALUES (?1, ?2)")
            .bind(&taken)
            .bind("Outerwear")
            .execute(db.pool())
            .await
            .unwrap();

        for _ in 0..16 {
            let id = fresh_id(db.pool(), PROBE).await.unwrap();
            assert_ne!(id, taken);
        }
    }
}
