//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Revenue reports built on floats drift by cents over thousands of      │
//! │  orders, and no two re-runs agree.                                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Prices arrive as decimal strings ("12.99") from the admin form,     │
//! │    are parsed ONCE at the boundary into cents (1299), and stay         │
//! │    integers through the database and every aggregate after that.      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use atelier_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Parse from a submitted decimal string
//! let parsed = Money::parse("10.99").unwrap();
//! assert_eq!(parsed, price);
//!
//! // NEVER from a float:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values in aggregates (refund rows)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use atelier_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal string (as submitted by the admin form) into Money.
    ///
    /// ## Rules
    /// - Digits with an optional single `.` separator
    /// - At most two fraction digits (`"9.999"` is rejected, not rounded)
    /// - No sign: product prices are never negative
    ///
    /// ## Example
    /// ```rust
    /// use atelier_core::money::Money;
    ///
    /// assert_eq!(Money::parse("12.99").unwrap().cents(), 1299);
    /// assert_eq!(Money::parse("5").unwrap().cents(), 500);
    /// assert_eq!(Money::parse("5.5").unwrap().cents(), 550);
    /// assert!(Money::parse("-1.00").is_err());
    /// assert!(Money::parse("abc").is_err());
    /// ```
    ///
    /// ## Errors
    /// Returns [`ValidationError::InvalidFormat`] with the offending reason.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(ValidationError::required("price"));
        }

        let (major, minor) = match input.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (input, ""),
        };

        if minor.len() > 2 {
            return Err(ValidationError::invalid_format(
                "price",
                "at most two fraction digits",
            ));
        }

        if major.is_empty() && minor.is_empty() {
            return Err(ValidationError::invalid_format("price", "no digits"));
        }

        if !major.chars().all(|c| c.is_ascii_digit())
            || !minor.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ValidationError::invalid_format(
                "price",
                "must contain only digits and a decimal point",
            ));
        }

        let major: i64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| {
                ValidationError::invalid_format("price", "integer part out of range")
            })?
        };

        // "5.5" means 50 cents, not 5
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => {
                minor
                    .parse::<i64>()
                    .map_err(|_| ValidationError::invalid_format("price", "bad fraction"))?
                    * 10
            }
            _ => minor
                .parse()
                .map_err(|_| ValidationError::invalid_format("price", "bad fraction"))?,
        };

        major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .map(Money)
            .ok_or_else(|| ValidationError::invalid_format("price", "out of range"))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Display
// =============================================================================

impl fmt::Display for Money {
    /// Formats as a decimal currency string, e.g. `$10.99`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl Add for Money {
    type Output = Money;

    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
