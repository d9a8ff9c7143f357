//! # Order Repository
//!
//! Database operations for orders and order items.
//!
//! ## Listing Filters
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Listing Filters                                │
//! │                                                                         │
//! │  /admin/orders/{method}/{offset}                                       │
//! │                                                                         │
//! │  method ∈ {prepared, sent, processed, finished} ──► WHERE status = ?   │
//! │  method ∈ {paid, unpaid}                        ──► WHERE pay_status=? │
//! │  method = all                                   ──► no WHERE clause    │
//! │  anything else                                  ──► 400 before SQL     │
//! │                                                                         │
//! │  All three shapes share ORDER BY date DESC LIMIT 5 OFFSET ?            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use atelier_core::{OrderFilter, OrderItemDetail, OrderStatus, OrderSummary, ORDER_PAGE_SIZE};

/// Shared column list for the order listing, joined with customer detail.
const LIST_COLUMNS: &str = r#"
    SELECT
        o.id               AS order_id,
        o.user_id          AS user_id,
        o.date             AS date,
        o.shipping_address AS shipping_address,
        o.billing_address  AS billing_address,
        o.total_cents      AS total_cents,
        o.status           AS status,
        o.pay_status       AS pay_status,
        o.method           AS method,
        d.full_name        AS full_name,
        d.phone_number     AS phone_number
    FROM orders o
    JOIN user_details d ON o.user_id = d.user_id
"#;

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Lists orders newest-first, one page at a time, optionally filtered
    /// by fulfillment or payment status.
    ///
    /// ## Contract
    /// - Page size is [`ORDER_PAGE_SIZE`]; `offset` is a page number and
    ///   the query binds `offset * ORDER_PAGE_SIZE`
    /// - The filter token was validated upstream; this method only ever
    ///   sees one of the three fixed query shapes
    pub async fn list(&self, filter: OrderFilter, offset: u32) -> DbResult<Vec<OrderSummary>> {
        debug!(?filter, offset, "Listing orders");

        let limit = ORDER_PAGE_SIZE as i64;
        let offset = (offset * ORDER_PAGE_SIZE) as i64;

        let rows = match filter {
            OrderFilter::Status(status) => {
                let sql = format!(
                    "{LIST_COLUMNS} WHERE o.status = ?1 ORDER BY o.date DESC LIMIT ?2 OFFSET ?3"
                );
                sqlx::query_as::<_, OrderSummary>(&sql)
                    .bind(status.as_str())
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await?
            }
            OrderFilter::Payment(pay) => {
                let sql = format!(
                    "{LIST_COLUMNS} WHERE o.pay_status = ?1 ORDER BY o.date DESC LIMIT ?2 OFFSET ?3"
                );
                sqlx::query_as::<_, OrderSummary>(&sql)
                    .bind(pay.as_str())
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await?
            }
            OrderFilter::All => {
                let sql = format!("{LIST_COLUMNS} ORDER BY o.date DESC LIMIT ?1 OFFSET ?2");
                sqlx::query_as::<_, OrderSummary>(&sql)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        debug!(count = rows.len(), "Order listing page fetched");
        Ok(rows)
    }

    /// Lists the items of one order, joined with the product name.
    pub async fn items(&self, order_id: &str) -> DbResult<Vec<OrderItemDetail>> {
        let rows = sqlx::query_as::<_, OrderItemDetail>(
            r#"
            SELECT
                i.order_id    AS order_id,
                i.product_id  AS product_id,
                p.name        AS product_name,
                i.size        AS size,
                i.quantity    AS quantity,
                i.price_cents AS price_cents
            FROM order_items i
            JOIN products p ON i.product_id = p.id
            WHERE i.order_id = ?1
            ORDER BY p.name, i.size
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Updates the fulfillment status of one order.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no order with that identifier
    pub async fn update_status(&self, order_id: &str, status: OrderStatus) -> DbResult<()> {
        debug!(id = %order_id, status = status.as_str(), "Updating order status");

        let result = sqlx::query("UPDATE orders SET status = ?1 WHERE id = ?2")
            .bind(status.as_str())
            .bind(order_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", order_id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use atelier_core::PayStatus;
    use chrono::{TimeZone, Utc};

    async fn test_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        sqlx::query("INSERT INTO users (id, email, password) VALUES ('u1', 'ada@example.com', 'pw')")
            .execute(db.pool())
            .await
            .unwrap();
        sqlx::query(
            "INSERT INTO user_details (user_id, full_name, phone_number) VALUES ('u1', 'Ada Bell', '555-0101')",
        )
        .execute(db.pool())
        .await
        .unwrap();

        db
    }

    async fn insert_order(db: &Database, id: &str, day: u32, status: &str, pay: &str) {
        let date = Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap();
        sqlx::query(
            "INSERT INTO orders (id, user_id, date, total_cents, status, pay_status)
             VALUES (?1, 'u1', ?2, 5000, ?3, ?4)",
        )
        .bind(id)
        .bind(date)
        .bind(status)
        .bind(pay)
        .execute(db.pool())
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_status_filter_matches_only_that_status() {
        let db = test_db().await;
        insert_order(&db, "o1", 1, "prepared", "unpaid").await;
        insert_order(&db, "o2", 2, "finished", "paid").await;
        insert_order(&db, "o3", 3, "prepared", "paid").await;

        let page = db
            .orders()
            .list(OrderFilter::Status(OrderStatus::Prepared), 0)
            .await
            .unwrap();

        assert_eq!(page.len(), 2);
        assert!(page.iter().all(|o| o.status == OrderStatus::Prepared));
    }

    #[tokio::test]
    async fn test_payment_filter_and_join_fields() {
        let db = test_db().await;
        insert_order(&db, "o1", 1, "sent", "paid").await;
        insert_order(&db, "o2", 2, "sent", "unpaid").await;

        let page = db
            .orders()
            .list(OrderFilter::Payment(PayStatus::Paid), 0)
            .await
            .unwrap();

        assert_eq!(page.len(), 1);
        assert_eq!(page[0].order_id, "o1");
        assert_eq!(page[0].full_name, "Ada Bell");
        assert_eq!(page[0].phone_number.as_deref(), Some("555-0101"));
    }

    #[tokio::test]
    async fn test_all_filter_pages_newest_first() {
        let db = test_db().await;
        for day in 1..=ORDER_PAGE_SIZE + 2 {
            insert_order(&db, &format!("o{day}"), day, "prepared", "unpaid").await;
        }

        let first = db.orders().list(OrderFilter::All, 0).await.unwrap();
        assert_eq!(first.len(), ORDER_PAGE_SIZE as usize);
        // Newest order (highest day) leads the first page.
        assert_eq!(first[0].order_id, format!("o{}", ORDER_PAGE_SIZE + 2));
        assert!(first.windows(2).all(|w| w[0].date >= w[1].date));

        let second = db.orders().list(OrderFilter::All, 1).await.unwrap();
        assert_eq!(second.len(), 2);
    }

    #[tokio::test]
    async fn test_items_join_product_names() {
        let db = test_db().await;
        insert_order(&db, "o1", 1, "prepared", "unpaid").await;

        sqlx::query("INSERT INTO categories (id, name) VALUES ('c1', 'Shirts')")
            .execute(db.pool())
            .await
            .unwrap();
        sqlx::query(
            "INSERT INTO products (id, category_id, name, date_added)
             VALUES ('p1', 'c1', 'Linen Shirt', '2026-01-01T00:00:00Z')",
        )
        .execute(db.pool())
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO order_items (order_id, product_id, size, quantity, price_cents)
             VALUES ('o1', 'p1', 'M', 2, 2499)",
        )
        .execute(db.pool())
        .await
        .unwrap();

        let items = db.orders().items("o1").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_name, "Linen Shirt");
        assert_eq!(items[0].quantity, 2);

        let empty = db.orders().items("missing").await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_update_status() {
        let db = test_db().await;
        insert_order(&db, "o1", 1, "prepared", "unpaid").await;

        db.orders()
            .update_status("o1", OrderStatus::Sent)
            .await
            .unwrap();

        let status: String = sqlx::query_scalar("SELECT status FROM orders WHERE id = 'o1'")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(status, "sent");

        let err = db
            .orders()
            .update_status("missing", OrderStatus::Sent)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
