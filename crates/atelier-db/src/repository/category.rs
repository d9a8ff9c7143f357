//! # Category Repository
//!
//! Database operations for product categories.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::ident;
use atelier_core::NewCategory;

/// Bound-parameter existence probe for generated category identifiers.
const ID_PROBE: &str = "SELECT COUNT(1) FROM categories WHERE id = ?1";

/// Repository for category database operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Inserts a new category with a fresh collision-checked identifier.
    ///
    /// The payload is validated by the caller (see the admin-api handlers);
    /// this method only owns the identifier and the bound insert.
    ///
    /// ## Returns
    /// The generated category identifier.
    pub async fn insert(&self, category: &NewCategory) -> DbResult<String> {
        let id = ident::fresh_id(&self.pool, ID_PROBE).await?;

        debug!(id = %id, name = %category.name, "Inserting category");

        sqlx::query("INSERT INTO categories (id, name, description) VALUES (?1, ?2, ?3)")
            .bind(&id)
            .bind(category.name.trim())
            .bind(&category.description)
            .execute(&self.pool)
            .await?;

        Ok(id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_insert_category() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let id = db
            .categories()
            .insert(&NewCategory {
                name: "Knitwear".to_string(),
                description: "Sweaters and cardigans".to_string(),
            })
            .await
            .unwrap();

        let name: String = sqlx::query_scalar("SELECT name FROM categories WHERE id = ?1")
            .bind(&id)
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(name, "Knitwear");
    }

    #[tokio::test]
    async fn test_generated_ids_are_distinct() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.categories();

        let mut ids = std::collections::HashSet::new();
        for i in 0..8 {
            let id = repo
                .insert(&NewCategory {
                    name: format!("Category {i}"),
                    description: String::new(),
                })
                .await
                .unwrap();
            assert!(ids.insert(id), "identifier reused");
        }
    }
}
