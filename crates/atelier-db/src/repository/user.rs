//! # User Repository
//!
//! Database operations for users and the customer listing.
//!
//! ## Roles
//! Accounts carry a `role` column; the admin surface only ever lists
//! `customer` rows. Staff accounts live in the same table but never appear
//! in the paginated listing.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::ident;
use atelier_core::{CustomerSummary, NewUser, CUSTOMER_PAGE_SIZE};

/// Bound-parameter existence probe for generated user identifiers.
const ID_PROBE: &str = "SELECT COUNT(1) FROM users WHERE id = ?1";

/// Repository for user database operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Inserts a new user with a fresh collision-checked identifier.
    ///
    /// The payload is validated by the caller; the default role is
    /// `customer` (schema default).
    ///
    /// ## Returns
    /// The generated user identifier.
    ///
    /// ## Errors
    /// * `DbError::UniqueViolation` - email already registered
    pub async fn insert(&self, user: &NewUser) -> DbResult<String> {
        let id = ident::fresh_id(&self.pool, ID_PROBE).await?;

        debug!(id = %id, email = %user.email, "Inserting user");

        sqlx::query("INSERT INTO users (id, email, password) VALUES (?1, ?2, ?3)")
            .bind(&id)
            .bind(user.email.trim())
            .bind(&user.password)
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    /// Lists customers (role = 'customer') joined with their detail rows,
    /// one page at a time.
    ///
    /// ## Contract
    /// Page size is [`CUSTOMER_PAGE_SIZE`]; `offset` is a page number and
    /// the query binds `offset * CUSTOMER_PAGE_SIZE`.
    pub async fn list_customers(&self, offset: u32) -> DbResult<Vec<CustomerSummary>> {
        debug!(offset, "Listing customers");

        let rows = sqlx::query_as::<_, CustomerSummary>(
            r#"
            SELECT
                u.email         AS email,
                d.full_name     AS full_name,
                d.phone_number  AS phone_number,
                d.dob           AS dob,
                d.member_since  AS member_since
            FROM users u
            JOIN user_details d ON u.id = d.user_id
            WHERE u.role = 'customer'
            ORDER BY d.member_since DESC, u.email
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(CUSTOMER_PAGE_SIZE as i64)
        .bind((offset * CUSTOMER_PAGE_SIZE) as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use std::collections::HashSet;

    fn user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password: "hunter2".to_string(),
        }
    }

    async fn attach_detail(db: &Database, user_id: &str, full_name: &str) {
        sqlx::query(
            "INSERT INTO user_details (user_id, full_name, phone_number, dob, member_since)
             VALUES (?1, ?2, NULL, '1990-04-01', '2025-11-02T10:00:00Z')",
        )
        .bind(user_id)
        .bind(full_name)
        .execute(db.pool())
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_inserted_identifiers_are_never_reused() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.users();

        // Property: across N inserts every generated identifier is unique
        // and present exactly once in the table.
        let mut seen = HashSet::new();
        for i in 0..32 {
            let id = repo.insert(&user(&format!("u{i}@example.com"))).await.unwrap();
            assert!(seen.insert(id), "identifier reused");
        }

        let distinct: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT id) FROM users")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(distinct, 32);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.users();

        repo.insert(&user("ada@example.com")).await.unwrap();
        let err = repo.insert(&user("ada@example.com")).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_customer_listing_pages_and_filters_role() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.users();

        for i in 0..CUSTOMER_PAGE_SIZE + 2 {
            let id = repo.insert(&user(&format!("c{i}@example.com"))).await.unwrap();
            attach_detail(&db, &id, &format!("Customer {i}")).await;
        }

        // A staff account with detail must never show up.
        let staff = repo.insert(&user("staff@example.com")).await.unwrap();
        attach_detail(&db, &staff, "Back Office").await;
        sqlx::query("UPDATE users SET role = 'admin' WHERE id = ?1")
            .bind(&staff)
            .execute(db.pool())
            .await
            .unwrap();

        let first = repo.list_customers(0).await.unwrap();
        assert_eq!(first.len(), CUSTOMER_PAGE_SIZE as usize);

        let second = repo.list_customers(1).await.unwrap();
        assert_eq!(second.len(), 2);

        assert!(first
            .iter()
            .chain(second.iter())
            .all(|c| c.email != "staff@example.com"));
    }

    #[tokio::test]
    async fn test_missing_optional_detail_fields_come_back_null() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.users();

        let id = repo.insert(&user("bare@example.com")).await.unwrap();
        sqlx::query("INSERT INTO user_details (user_id, full_name) VALUES (?1, 'Bare Minimum')")
            .bind(&id)
            .execute(db.pool())
            .await
            .unwrap();

        let page = repo.list_customers(0).await.unwrap();
        let row = page.iter().find(|c| c.email == "bare@example.com").unwrap();
        assert!(row.phone_number.is_none());
        assert!(row.dob.is_none());
        assert!(row.member_since.is_none());
    }
}
