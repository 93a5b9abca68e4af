//! # Money Module
//!
//! Provides the `Money` type for product prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  As floats:   0.1 + 0.2 = 0.30000000000000004  ❌                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    The form text "15.25" becomes 1525 cents once, at the boundary.     │
//! │    The store keeps a REAL column; conversion happens in gazie-db.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gazie_core::money::Money;
//!
//! let price = Money::parse_decimal("25.50").unwrap();
//! assert_eq!(price.cents(), 2550);
//! assert_eq!(price.to_string(), "€25.50");
//!
//! assert!(Money::parse_decimal("notanumber").is_none());
//! ```

use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: parsing may produce a negative value, which
///   validation then rejects with a dedicated message
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use gazie_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // €10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole euro portion.
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parses user-typed decimal text into cents.
    ///
    /// Accepts anything the standard float parser accepts (`15`, `15.5`,
    /// `1e2`, `-3.10`) and rounds half away from zero to the cent.
    ///
    /// ## Returns
    /// * `Some(Money)` - finite number within range
    /// * `None` - not a number, NaN, infinity, or too large for i64 cents
    ///
    /// ## Example
    /// ```rust
    /// use gazie_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("15.25").map(|m| m.cents()), Some(1525));
    /// assert_eq!(Money::parse_decimal(" 3 ").map(|m| m.cents()), Some(300));
    /// assert!(Money::parse_decimal("inf").is_none());
    /// assert!(Money::parse_decimal("").is_none());
    /// ```
    pub fn parse_decimal(text: &str) -> Option<Money> {
        let value: f64 = text.trim().parse().ok()?;
        Money::checked_from_decimal(value)
    }

    /// Converts a decimal amount (as stored in the database) to cents.
    ///
    /// Non-finite or out-of-range values become zero; the store never
    /// holds them unless edited by hand.
    pub fn from_decimal(value: f64) -> Money {
        Money::checked_from_decimal(value).unwrap_or_default()
    }

    /// Returns the amount as a decimal for the database REAL column.
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    fn checked_from_decimal(value: f64) -> Option<Money> {
        if !value.is_finite() {
            return None;
        }

        let cents = (value * 100.0).round();
        if cents.abs() >= i64::MAX as f64 {
            return None;
        }

        Some(Money(cents as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way the product table prints prices: `€25.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}€{}.{:02}", sign, self.euros().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.euros(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "€10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "€5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-€5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "€0.00");
    }

    #[test]
    fn test_parse_decimal_accepts_numbers() {
        assert_eq!(Money::parse_decimal("25.50"), Some(Money::from_cents(2550)));
        assert_eq!(Money::parse_decimal("99.99"), Some(Money::from_cents(9999)));
        assert_eq!(Money::parse_decimal("7"), Some(Money::from_cents(700)));
        assert_eq!(Money::parse_decimal("1e2"), Some(Money::from_cents(10000)));
        assert_eq!(Money::parse_decimal("-3.1"), Some(Money::from_cents(-310)));
    }

    #[test]
    fn test_parse_decimal_rounds_to_cent() {
        assert_eq!(Money::parse_decimal("0.125"), Some(Money::from_cents(13)));
        assert_eq!(Money::parse_decimal("15.254"), Some(Money::from_cents(1525)));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert!(Money::parse_decimal("notanumber").is_none());
        assert!(Money::parse_decimal("").is_none());
        assert!(Money::parse_decimal("12,50").is_none());
        assert!(Money::parse_decimal("NaN").is_none());
        assert!(Money::parse_decimal("infinity").is_none());
        assert!(Money::parse_decimal("1e300").is_none());
    }

    #[test]
    fn test_decimal_round_trip_for_storage() {
        let price = Money::from_cents(1525);
        assert_eq!(Money::from_decimal(price.to_decimal()), price);
        assert_eq!(Money::from_decimal(f64::NAN), Money::zero());
    }
}
