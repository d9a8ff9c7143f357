//! # Statistics Repository
//!
//! Dashboard statistics for the admin landing page.
//!
//! ## Consistency Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Statistics Are Eventually Consistent                   │
//! │                                                                         │
//! │  summary() runs its queries sequentially on pooled connections:        │
//! │                                                                         │
//! │    count orders ──► count products ──► ... ──► top product             │
//! │                                                                         │
//! │  A write landing between two queries can make the aggregate            │
//! │  internally inconsistent for that one response. The dashboard          │
//! │  refreshes constantly, so no snapshot transaction is taken.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use atelier_core::{StatSummary, TopProduct};

/// Repository for dashboard statistics.
#[derive(Debug, Clone)]
pub struct StatsRepository {
    pool: SqlitePool,
}

impl StatsRepository {
    /// Creates a new StatsRepository.
    pub fn new(pool: SqlitePool) -> Self {
        StatsRepository { pool }
    }

    /// Assembles the dashboard aggregate from independent queries.
    ///
    /// ## Fields
    /// - Order counts: total, finished, unfinished (status != 'finished')
    /// - Product and customer counts
    /// - Revenue: current calendar month and all-time, in cents
    /// - Top product by total quantity sold (`None` with no order items)
    pub async fn summary(&self) -> DbResult<StatSummary> {
        debug!("Assembling dashboard statistics");

        let total_order: i64 = sqlx::query_scalar("SELECT COUNT(id) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        let total_product: i64 = sqlx::query_scalar("SELECT COUNT(id) FROM products")
            .fetch_one(&self.pool)
            .await?;

        let unfinished_order: i64 =
            sqlx::query_scalar("SELECT COUNT(id) FROM orders WHERE status != 'finished'")
                .fetch_one(&self.pool)
                .await?;

        let finished_order: i64 =
            sqlx::query_scalar("SELECT COUNT(id) FROM orders WHERE status = 'finished'")
                .fetch_one(&self.pool)
                .await?;

        // Order dates are RFC 3339 text, so SQLite's strftime can bucket
        // them by calendar month directly.
        let month_revenue_cents: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(total_cents), 0) FROM orders
            WHERE strftime('%Y-%m', date) = strftime('%Y-%m', 'now')
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        let total_revenue_cents: i64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(total_cents), 0) FROM orders")
                .fetch_one(&self.pool)
                .await?;

        let total_customer: i64 =
            sqlx::query_scalar("SELECT COUNT(id) FROM users WHERE role = 'customer'")
                .fetch_one(&self.pool)
                .await?;

        let top_product = sqlx::query_as::<_, TopProduct>(
            r#"
            SELECT
                p.name                            AS product_name,
                SUM(i.quantity)                   AS total_quantity,
                SUM(i.quantity * i.price_cents)   AS total_cents
            FROM order_items i
            JOIN products p ON i.product_id = p.id
            GROUP BY p.name
            ORDER BY total_quantity DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(StatSummary {
            total_order,
            total_product,
            unfinished_order,
            finished_order,
            month_revenue_cents,
            total_revenue_cents,
            total_customer,
            top_product,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::{TimeZone, Utc};

    async fn test_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        sqlx::query("INSERT INTO users (id, email, password) VALUES ('u1', 'ada@example.com', 'pw')")
            .execute(db.pool())
            .await
            .unwrap();

        db
    }

    async fn insert_order(db: &Database, id: &str, status: &str, cents: i64, in_month: bool) {
        let date = if in_month {
            Utc::now()
        } else {
            Utc.with_ymd_and_hms(2020, 1, 15, 12, 0, 0).unwrap()
        };
        sqlx::query(
            "INSERT INTO orders (id, user_id, date, total_cents, status, pay_status)
             VALUES (?1, 'u1', ?2, ?3, ?4, 'paid')",
        )
        .bind(id)
        .bind(date)
        .bind(cents)
        .bind(status)
        .execute(db.pool())
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_empty_database_summary() {
        let db = test_db().await;
        let summary = db.stats().summary().await.unwrap();

        assert_eq!(summary.total_order, 0);
        assert_eq!(summary.total_product, 0);
        assert_eq!(summary.total_revenue_cents, 0);
        assert_eq!(summary.total_customer, 1);
        assert!(summary.top_product.is_none());
    }

    #[tokio::test]
    async fn test_order_counts_are_internally_consistent() {
        let db = test_db().await;
        insert_order(&db, "o1", "finished", 3000, true).await;
        insert_order(&db, "o2", "prepared", 2000, true).await;
        insert_order(&db, "o3", "sent", 4000, false).await;

        let summary = db.stats().summary().await.unwrap();

        assert_eq!(summary.total_order, 3);
        assert_eq!(summary.finished_order, 1);
        assert_eq!(summary.unfinished_order, 2);
        assert_eq!(summary.total_order, summary.finished_order + summary.unfinished_order);
    }

    #[tokio::test]
    async fn test_month_revenue_excludes_old_orders() {
        let db = test_db().await;
        insert_order(&db, "o1", "finished", 3000, true).await;
        insert_order(&db, "o2", "prepared", 2000, true).await;
        insert_order(&db, "o3", "sent", 4000, false).await;

        let summary = db.stats().summary().await.unwrap();

        assert_eq!(summary.total_revenue_cents, 9000);
        assert_eq!(summary.month_revenue_cents, 5000);
    }

    #[tokio::test]
    async fn test_top_product_ranks_by_quantity() {
        let db = test_db().await;
        insert_order(&db, "o1", "finished", 3000, true).await;

        sqlx::query("INSERT INTO categories (id, name) VALUES ('c1', 'Shirts')")
            .execute(db.pool())
            .await
            .unwrap();
        for (id, name) in [("p1", "Linen Shirt"), ("p2", "Wool Coat")] {
            sqlx::query(
                "INSERT INTO products (id, category_id, name, date_added)
                 VALUES (?1, 'c1', ?2, '2026-01-01T00:00:00Z')",
            )
            .bind(id)
            .bind(name)
            .execute(db.pool())
            .await
            .unwrap();
        }

        // 5 shirts at $10, 2 coats at $80: shirt wins on quantity even
        // though the coat out-earns it.
        sqlx::query(
            "INSERT INTO order_items (order_id, product_id, size, quantity, price_cents)
             VALUES ('o1', 'p1', 'M', 5, 1000), ('o1', 'p2', 'L', 2, 8000)",
        )
        .execute(db.pool())
        .await
        .unwrap();

        let summary = db.stats().summary().await.unwrap();
        let top = summary.top_product.unwrap();
        assert_eq!(top.product_name, "Linen Shirt");
        assert_eq!(top.total_quantity, 5);
        assert_eq!(top.total_cents, 5000);
    }
}
