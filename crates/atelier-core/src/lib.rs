//! # atelier-core: Pure Domain Logic for the Atelier Admin Backend
//!
//! This crate is the **heart** of the Atelier admin backend. It contains all
//! domain logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Atelier Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Admin Frontend                               │   │
//! │  │    Product Table ──► Order Board ──► Customer List ──► Stats   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP / JSON                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/admin-api                               │   │
//! │  │    list_products, list_orders, create_product, stats, etc.     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ atelier-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  filters  │  │ validation│  │   │
//! │  │   │  rows &   │  │   Money   │  │OrderFilter│  │   rules   │  │   │
//! │  │   │  payloads │  │  parsing  │  │ statuses  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    atelier-db (Database Layer)                  │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (row shapes, payloads, order filters)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for mutation payloads
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use atelier_core::money::Money;
//! use atelier_core::types::OrderFilter;
//!
//! // Parse a decimal price string the way the admin form submits it
//! let price = Money::parse("12.99").unwrap();
//! assert_eq!(price.cents(), 1299);
//!
//! // Order listing filters come in as path segments
//! let filter: OrderFilter = "finished".parse().unwrap();
//! assert!(matches!(filter, OrderFilter::Status(_)));
//! assert!("express".parse::<OrderFilter>().is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use atelier_core::Money` instead of
// `use atelier_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Page size for the paginated product listing.
///
/// ## Why a constant?
/// The admin frontend renders fixed-height tables; the route takes a page
/// number and the listing query binds `offset * PRODUCT_PAGE_SIZE`.
pub const PRODUCT_PAGE_SIZE: u32 = 10;

/// Page size for the paginated order listing.
pub const ORDER_PAGE_SIZE: u32 = 5;

/// Page size for the paginated customer listing.
pub const CUSTOMER_PAGE_SIZE: u32 = 5;
