//! # Product Repository
//!
//! Database operations for products and their size variants.
//!
//! ## Key Operations
//! - Paginated in-stock listing (size granularity)
//! - Insert (product row + initial size row, one transaction)
//! - Soft delete (zero every size's stock, keep the product row)
//!
//! ## Soft Delete
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Why Zero Stock Instead of DELETE                     │
//! │                                                                         │
//! │  products:       id=p1  "Linen Shirt"          ← row stays             │
//! │  product_sizes:  (p1, S, stock 12 → 0)                                 │
//! │                  (p1, M, stock 30 → 0)                                 │
//! │                  (p1, L, stock  4 → 0)                                 │
//! │                                                                         │
//! │  • Historical order items still join to the product name               │
//! │  • The listing query hides it (stock > 0)                              │
//! │  • Restocking a size brings it back without resurrection logic         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::ident;
use atelier_core::{ProductDraft, ProductListing, PRODUCT_PAGE_SIZE};

/// Bound-parameter existence probe for generated product identifiers.
const ID_PROBE: &str = "SELECT COUNT(1) FROM products WHERE id = ?1";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// // First page of the in-stock listing
/// let page = repo.list_in_stock(0).await?;
///
/// // Insert a validated submission
/// let id = repo.insert(&draft).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists in-stock product/size rows, one page at a time.
    ///
    /// ## Contract
    /// - Page size is [`PRODUCT_PAGE_SIZE`]; `offset` is a page number and
    ///   the query binds `offset * PRODUCT_PAGE_SIZE`
    /// - Size rows with zero stock are hidden (soft-deleted products
    ///   disappear here)
    pub async fn list_in_stock(&self, offset: u32) -> DbResult<Vec<ProductListing>> {
        debug!(offset, "Listing in-stock products");

        let rows = sqlx::query_as::<_, ProductListing>(
            r#"
            SELECT
                s.product_id   AS product_id,
                p.name         AS product_name,
                s.size         AS size,
                s.stock        AS stock,
                s.price_cents  AS price_cents
            FROM product_sizes s
            JOIN products p ON s.product_id = p.id
            WHERE s.stock > 0
            ORDER BY p.name, s.size
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(PRODUCT_PAGE_SIZE as i64)
        .bind((offset * PRODUCT_PAGE_SIZE) as i64)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Product listing page fetched");
        Ok(rows)
    }

    /// Inserts a validated product submission.
    ///
    /// ## What This Does
    /// 1. Generates a fresh collision-checked identifier
    /// 2. Opens a transaction
    /// 3. Inserts the product row, then the initial size row
    /// 4. Commits; any failure rolls the whole submission back
    ///
    /// ## Returns
    /// The generated product identifier.
    pub async fn insert(&self, draft: &ProductDraft) -> DbResult<String> {
        let id = ident::fresh_id(&self.pool, ID_PROBE).await?;

        debug!(id = %id, name = %draft.name, "Inserting product");

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO products (id, category_id, name, description, brand, date_added)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&id)
        .bind(&draft.category_id)
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(&draft.brand)
        .bind(draft.date_added)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO product_sizes (product_id, size, stock, price_cents)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&id)
        .bind(&draft.size)
        .bind(draft.stock)
        .bind(draft.price.cents())
        .execute(&mut *tx)
        .await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(id)
    }

    /// Soft-deletes a product by zeroing the stock of every size row.
    ///
    /// The product row itself is untouched so historical order items keep
    /// resolving to a name.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - the product has no size rows at all
    pub async fn soft_delete(&self, product_id: &str) -> DbResult<()> {
        debug!(id = %product_id, "Soft-deleting product");

        let result = sqlx::query("UPDATE product_sizes SET stock = 0 WHERE product_id = ?1")
            .bind(product_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", product_id));
        }

        Ok(())
    }

    /// Counts product rows (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use atelier_core::NewProduct;

    async fn test_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        sqlx::query("INSERT INTO categories (id, name) VALUES ('cat-1', 'Shirts')")
            .execute(db.pool())
            .await
            .unwrap();
        db
    }

    fn draft(name: &str, price: &str, stock: &str, size: &str) -> ProductDraft {
        ProductDraft::from_input(NewProduct {
            category_id: "cat-1".to_string(),
            name: name.to_string(),
            description: String::new(),
            brand: "Atelier".to_string(),
            price: price.to_string(),
            stock: stock.to_string(),
            date_added: "2026-03-01T09:30:00Z".to_string(),
            size: size.to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_insert_writes_product_and_size_rows() {
        let db = test_db().await;
        let repo = db.products();

        let id = repo.insert(&draft("Linen Shirt", "24.99", "12", "M")).await.unwrap();

        let name: String = sqlx::query_scalar("SELECT name FROM products WHERE id = ?1")
            .bind(&id)
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(name, "Linen Shirt");

        let (stock, price_cents): (i64, i64) = sqlx::query_as(
            "SELECT stock, price_cents FROM product_sizes WHERE product_id = ?1 AND size = 'M'",
        )
        .bind(&id)
        .fetch_one(db.pool())
        .await
        .unwrap();
        assert_eq!(stock, 12);
        assert_eq!(price_cents, 2499);
    }

    #[tokio::test]
    async fn test_failed_insert_leaves_no_partial_record() {
        let db = test_db().await;
        let repo = db.products();

        let before = repo.count().await.unwrap();

        // Unknown category fails the first statement inside the transaction.
        let mut bad = draft("Wool Coat", "89.00", "4", "L");
        bad.category_id = "missing-category".to_string();
        assert!(repo.insert(&bad).await.is_err());

        let after = repo.count().await.unwrap();
        assert_eq!(before, after, "failed insert must leave no product row");

        let orphan_sizes: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM product_sizes WHERE size = 'L'",
        )
        .fetch_one(db.pool())
        .await
        .unwrap();
        assert_eq!(orphan_sizes, 0);
    }

    #[tokio::test]
    async fn test_soft_delete_zeroes_every_size_and_keeps_product() {
        let db = test_db().await;
        let repo = db.products();

        let id = repo.insert(&draft("Linen Shirt", "24.99", "12", "M")).await.unwrap();
        sqlx::query("INSERT INTO product_sizes (product_id, size, stock, price_cents) VALUES (?1, 'L', 7, 2499)")
            .bind(&id)
            .execute(db.pool())
            .await
            .unwrap();

        repo.soft_delete(&id).await.unwrap();

        let stocks: Vec<i64> =
            sqlx::query_scalar("SELECT stock FROM product_sizes WHERE product_id = ?1")
                .bind(&id)
                .fetch_all(db.pool())
                .await
                .unwrap();
        assert_eq!(stocks.len(), 2);
        assert!(stocks.iter().all(|s| *s == 0));

        let product_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE id = ?1")
            .bind(&id)
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(product_rows, 1, "soft delete must keep the product row");
    }

    #[tokio::test]
    async fn test_soft_delete_unknown_product_is_not_found() {
        let db = test_db().await;
        let err = db.products().soft_delete("nope").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_listing_respects_page_size_and_hides_zero_stock() {
        let db = test_db().await;
        let repo = db.products();

        for i in 0..PRODUCT_PAGE_SIZE + 3 {
            repo.insert(&draft(&format!("Shirt {i:02}"), "10.00", "5", "M"))
                .await
                .unwrap();
        }
        let retired = repo.insert(&draft("Zero Stock Coat", "50.00", "9", "L")).await.unwrap();
        repo.soft_delete(&retired).await.unwrap();

        let first = repo.list_in_stock(0).await.unwrap();
        assert_eq!(first.len(), PRODUCT_PAGE_SIZE as usize);

        let second = repo.list_in_stock(1).await.unwrap();
        assert_eq!(second.len(), 3);
        assert!(second.iter().all(|row| row.stock > 0));
        assert!(first
            .iter()
            .chain(second.iter())
            .all(|row| row.product_name != "Zero Stock Coat"));
    }
}
