//! HTTP handlers for the admin surface.
//!
//! Each module maps one resource family to its repository:
//!
//! - [`products`] - listing, create (product + size row), soft delete
//! - [`categories`] - create
//! - [`users`] - create, customer listing
//! - [`orders`] - filtered listing, items, status update
//! - [`stats`] - dashboard aggregate
//!
//! Handlers do three things and nothing else: parse/validate route and
//! payload input, call a repository, and let [`crate::error::ApiError`]
//! translate failures into status codes.

pub mod categories;
pub mod orders;
pub mod products;
pub mod stats;
pub mod users;

use serde::Serialize;

/// Response body for mutations that create a row.
#[derive(Debug, Serialize)]
pub struct Created {
    /// The generated identifier of the new row.
    pub id: String,
}
