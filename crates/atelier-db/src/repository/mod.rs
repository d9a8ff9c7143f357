//! # Repository Module
//!
//! Database repository implementations for the Atelier admin backend.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  HTTP Handler                                                          │
//! │       │                                                                 │
//! │       │  db.orders().list(filter, offset)                              │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  OrderRepository                                                       │
//! │  ├── list(&self, filter, offset)                                       │
//! │  ├── items(&self, order_id)                                            │
//! │  └── update_status(&self, order_id, status)                            │
//! │       │                                                                 │
//! │       │  SQL Query (bound parameters)                                  │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • SQL is isolated in one place                                        │
//! │  • Each repository is independently testable                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product listing, insert, soft delete
//! - [`category::CategoryRepository`] - Category insert
//! - [`user::UserRepository`] - User insert, customer listing
//! - [`order::OrderRepository`] - Order listing, items, status update
//! - [`stats::StatsRepository`] - Dashboard statistics aggregate

pub mod category;
pub mod order;
pub mod product;
pub mod stats;
pub mod user;
