//! # Validation Module
//!
//! Input validation utilities for mutation payloads.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP (axum)                                                  │
//! │  ├── Type validation (JSON deserialization)                            │
//! │  └── Route parameter shape                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields, lengths                                          │
//! │  └── String → typed value parsing (price, stock, date)                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── UNIQUE constraints                                                │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a field is present and non-blank.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

/// Validates a product or category name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use atelier_core::validation::validate_name;
///
/// assert!(validate_name("Linen Shirt").is_ok());
/// assert!(validate_name("").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// Minimal structural check; real verification happens out of band.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::required("email"));
    }

    if email.len() > 254 {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: 254,
        });
    }

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ValidationError::invalid_format(
            "email",
            "expected local@domain form",
        )),
    }
}

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses a stock quantity string into a non-negative integer.
///
/// ## Example
/// ```rust
/// use atelier_core::validation::parse_stock;
///
/// assert_eq!(parse_stock("120").unwrap(), 120);
/// assert!(parse_stock("12.5").is_err());
/// assert!(parse_stock("-3").is_err());
/// ```
pub fn parse_stock(input: &str) -> ValidationResult<i64> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::required("stock"));
    }

    let stock: i64 = input
        .parse()
        .map_err(|_| ValidationError::invalid_format("stock", "must be an integer"))?;

    if stock < 0 {
        return Err(ValidationError::Negative {
            field: "stock".to_string(),
        });
    }

    Ok(stock)
}

/// Parses a page offset string into a non-negative page number.
///
/// The listing routes take the offset as a path segment; a non-integer
/// value must be rejected before any query executes.
pub fn parse_offset(input: &str) -> ValidationResult<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| ValidationError::invalid_format("offset", "must be a non-negative integer"))
}

// =============================================================================
// Unit Tests
// =============================================================================
