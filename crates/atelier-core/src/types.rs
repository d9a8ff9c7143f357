//! # Domain Types
//!
//! Core domain types used throughout the Atelier admin backend.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ProductListing  │   │  OrderSummary   │   │ CustomerSummary │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  product_id     │   │  order_id       │   │  email          │       │
//! │  │  size / stock   │   │  status         │   │  full_name      │       │
//! │  │  price_cents    │   │  pay_status     │   │  member_since   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   OrderFilter   │   │   OrderStatus   │   │    PayStatus    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Status(_)      │   │  Prepared/Sent  │   │  Paid           │       │
//! │  │  Payment(_)     │   │  Processed      │   │  Unpaid         │       │
//! │  │  All            │   │  Finished       │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Every response type serializes with camelCase field names; the admin
//! frontend consumes the rows exactly as the queries alias them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation;

// =============================================================================
// Order Status
// =============================================================================

/// Fulfillment status of an order.
///
/// Stored as lowercase text in the database; the same tokens are accepted
/// as order-listing filters and as the target of a status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
pub enum OrderStatus {
    Prepared,
    Sent,
    Processed,
    Finished,
}

impl OrderStatus {
    /// All accepted status tokens, in lifecycle order.
    pub const ALL: [&'static str; 4] = ["prepared", "sent", "processed", "finished"];

    /// Returns the lowercase token stored in the database.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Prepared => "prepared",
            OrderStatus::Sent => "sent",
            OrderStatus::Processed => "processed",
            OrderStatus::Finished => "finished",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prepared" => Ok(OrderStatus::Prepared),
            "sent" => Ok(OrderStatus::Sent),
            "processed" => Ok(OrderStatus::Processed),
            "finished" => Ok(OrderStatus::Finished),
            _ => Err(ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: OrderStatus::ALL.to_vec(),
            }),
        }
    }
}

// =============================================================================
// Payment Status
// =============================================================================

/// Payment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
pub enum PayStatus {
    Paid,
    Unpaid,
}

impl PayStatus {
    /// Returns the lowercase token stored in the database.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PayStatus::Paid => "paid",
            PayStatus::Unpaid => "unpaid",
        }
    }
}

// =============================================================================
// Order Filter
// =============================================================================

/// Filter applied to the paginated order listing.
///
/// ## Accepted Tokens
/// The route accepts exactly `prepared`, `sent`, `processed`, `finished`
/// (fulfillment status), `paid`, `unpaid` (payment status), or `all`.
/// Anything else is a client error before any query runs.
///
/// ## Example
/// ```rust
/// use atelier_core::types::OrderFilter;
///
/// assert!(matches!("all".parse(), Ok(OrderFilter::All)));
/// assert!(matches!("paid".parse(), Ok(OrderFilter::Payment(_))));
/// assert!("express".parse::<OrderFilter>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderFilter {
    /// Filter on fulfillment status.
    Status(OrderStatus),
    /// Filter on payment status.
    Payment(PayStatus),
    /// No filter; every order, newest first.
    All,
}

impl OrderFilter {
    /// All accepted filter tokens.
    pub const ALL: [&'static str; 7] = [
        "prepared",
        "sent",
        "processed",
        "finished",
        "paid",
        "unpaid",
        "all",
    ];
}

impl FromStr for OrderFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(OrderFilter::Payment(PayStatus::Paid)),
            "unpaid" => Ok(OrderFilter::Payment(PayStatus::Unpaid)),
            "all" => Ok(OrderFilter::All),
            other => other.parse::<OrderStatus>().map(OrderFilter::Status).map_err(|_| {
                ValidationError::NotAllowed {
                    field: "method".to_string(),
                    allowed: OrderFilter::ALL.to_vec(),
                }
            }),
        }
    }
}

// =============================================================================
// Listing Rows
// =============================================================================
// One struct per report query. Field names match the column aliases in the
// repository SQL so sqlx can map rows without per-column plumbing.

/// One row of the paginated product listing (size-level granularity).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProductListing {
    pub product_id: String,
    pub product_name: String,
    pub size: String,
    pub stock: i64,
    pub price_cents: i64,
}

/// One row of the paginated order listing, joined with customer detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderSummary {
    pub order_id: String,
    pub user_id: String,
    pub date: DateTime<Utc>,
    pub shipping_address: String,
    pub billing_address: String,
    pub total_cents: i64,
    pub status: OrderStatus,
    pub pay_status: PayStatus,
    /// Shipping method chosen at checkout (free-form, e.g. "standard").
    pub method: String,
    pub full_name: String,
    pub phone_number: Option<String>,
}

/// One item of an order, joined with the product name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderItemDetail {
    pub order_id: String,
    pub product_id: String,
    pub product_name: String,
    pub size: String,
    pub quantity: i64,
    pub price_cents: i64,
}

/// One row of the paginated customer listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CustomerSummary {
    pub email: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub dob: Option<NaiveDate>,
    pub member_since: Option<DateTime<Utc>>,
}

// =============================================================================
// Statistics
// =============================================================================

/// Best-selling product by total quantity sold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TopProduct {
    pub product_name: String,
    pub total_quantity: i64,
    pub total_cents: i64,
}

/// Dashboard statistics aggregate.
///
/// Assembled from independent scalar queries; the values may reflect
/// slightly different points in time (no snapshot transaction).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSummary {
    pub total_order: i64,
    pub total_product: i64,
    pub unfinished_order: i64,
    pub finished_order: i64,
    /// Revenue of orders dated in the current calendar month.
    pub month_revenue_cents: i64,
    pub total_revenue_cents: i64,
    pub total_customer: i64,
    /// `None` until at least one order item exists.
    pub top_product: Option<TopProduct>,
}

// =============================================================================
// Mutation Payloads
// =============================================================================

/// Raw product submission as it arrives from the admin form.
///
/// Every field is a string; [`ProductDraft::from_input`] parses and
/// validates before anything touches the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub brand: String,
    /// Decimal price string, e.g. "24.99".
    pub price: String,
    /// Integer stock string, e.g. "120".
    pub stock: String,
    /// RFC 3339 timestamp, e.g. "2026-03-01T09:30:00Z".
    pub date_added: String,
    /// Size label for the initial size row, e.g. "M".
    pub size: String,
}

/// Raw category submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

/// Raw user submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

/// A fully validated product ready for insertion.
///
/// ## Parse, Don't Validate
/// String inputs are converted into typed values exactly once, here. A
/// failure anywhere rejects the whole submission before any write runs,
/// so a bad price can never leave a half-inserted product behind.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub brand: String,
    pub price: Money,
    pub stock: i64,
    pub date_added: DateTime<Utc>,
    pub size: String,
}

impl ProductDraft {
    /// Parses and validates a raw submission.
    ///
    /// ## Errors
    /// - [`ValidationError::Required`] for empty name/category/size
    /// - [`ValidationError::InvalidFormat`] for unparsable price, stock,
    ///   or date
    /// - [`ValidationError::Negative`] for negative stock
    pub fn from_input(input: NewProduct) -> Result<Self, ValidationError> {
        validation::validate_required("categoryId", &input.category_id)?;
        validation::validate_name(&input.name)?;
        validation::validate_required("size", &input.size)?;

        let price = Money::parse(&input.price)?;
        let stock = validation::parse_stock(&input.stock)?;

        let date_added = DateTime::parse_from_rfc3339(input.date_added.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| ValidationError::invalid_format("dateAdded", e.to_string()))?;

        Ok(ProductDraft {
            category_id: input.category_id.trim().to_string(),
            name: input.name.trim().to_string(),
            description: input.description,
            brand: input.brand,
            price,
            stock,
            date_added,
            size: input.size.trim().to_string(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> NewProduct {
        NewProduct {
            category_id: "cat-1".to_string(),
            name: "Linen Shirt".to_string(),
            description: "Relaxed fit".to_string(),
            brand: "Atelier".to_string(),
            price: "24.99".to_string(),
            stock: "120".to_string(),
            date_added: "2026-03-01T09:30:00Z".to_string(),
            size: "M".to_string(),
        }
    }

    #[test]
    fn test_order_filter_accepts_fixed_set() {
        for token in OrderFilter::ALL {
            assert!(token.parse::<OrderFilter>().is_ok(), "rejected {token}");
        }
    }

    #[test]
    fn test_order_filter_rejects_unknown() {
        assert!("express".parse::<OrderFilter>().is_err());
        assert!("".parse::<OrderFilter>().is_err());
        assert!("PAID".parse::<OrderFilter>().is_err());
    }

    #[test]
    fn test_order_status_round_trip() {
        for token in OrderStatus::ALL {
            let status: OrderStatus = token.parse().unwrap();
            assert_eq!(status.as_str(), token);
        }
    }

    #[test]
    fn test_product_draft_parses_typed_fields() {
        let draft = ProductDraft::from_input(sample_input()).unwrap();
        assert_eq!(draft.price.cents(), 2499);
        assert_eq!(draft.stock, 120);
        assert_eq!(draft.date_added.to_rfc3339(), "2026-03-01T09:30:00+00:00");
    }

    #[test]
    fn test_product_draft_rejects_bad_price() {
        let mut input = sample_input();
        input.price = "twenty".to_string();
        assert!(ProductDraft::from_input(input).is_err());
    }

    #[test]
    fn test_product_draft_rejects_bad_stock() {
        let mut input = sample_input();
        input.stock = "12.5".to_string();
        assert!(ProductDraft::from_input(input).is_err());
    }

    #[test]
    fn test_product_draft_rejects_bad_date() {
        let mut input = sample_input();
        input.date_added = "yesterday".to_string();
        assert!(ProductDraft::from_input(input).is_err());
    }

    #[test]
    fn test_stat_summary_serializes_camel_case() {
        let summary = StatSummary {
            total_order: 3,
            total_product: 2,
            unfinished_order: 2,
            finished_order: 1,
            month_revenue_cents: 5000,
            total_revenue_cents: 9000,
            total_customer: 4,
            top_product: None,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalOrder"], 3);
        assert_eq!(json["monthRevenueCents"], 5000);
        assert!(json["topProduct"].is_null());
    }
}
