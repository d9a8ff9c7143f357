//! # Atelier Admin API
//!
//! HTTP server for the Atelier admin surface.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Admin API Routes                                │
//! │                                                                         │
//! │  Read/Report                                                           │
//! │  ├── GET  /admin/products/page/{offset}        in-stock listing        │
//! │  ├── GET  /admin/orders/page/{method}/{offset} filtered order listing  │
//! │  ├── GET  /admin/orders/{order_id}/items       items of one order      │
//! │  ├── GET  /admin/customers/page/{offset}       customer listing        │
//! │  └── GET  /admin/stats                         dashboard aggregate     │
//! │                                                                         │
//! │  Mutations                                                             │
//! │  ├── POST   /admin/products                    insert product + size   │
//! │  ├── DELETE /admin/products/{product_id}       soft delete (stock → 0) │
//! │  ├── POST   /admin/categories                  insert category         │
//! │  ├── POST   /admin/users                       insert user             │
//! │  └── PUT    /admin/orders/{order_id}/status    update order status     │
//! │                                                                         │
//! │  Every response body is application/json.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `DATABASE_PATH` - SQLite database file path (default: ./atelier.db)
//! - `HTTP_PORT` - HTTP server port (default: 8080)
//! - `RUST_LOG` - tracing filter (default: info)

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-exports
pub use config::AdminConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
