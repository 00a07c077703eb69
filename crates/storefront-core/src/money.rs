//! # Money Module
//!
//! Provides the `Money` type for prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floating point prices:                                            │
//! │    2 × 9.99 + 19.99 = 39.970000000000006  ❌                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    2 × 999 + 1999 = 3997 cents → "$39.97"  ✅                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(999); // $9.99
//! let line_total = price.multiply_quantity(2);
//! assert_eq!(line_total.to_string(), "$19.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

/// Symbol used by the `Display` impl.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money is Used
/// ```text
/// CatalogItem.price ──► CartLine.price ──► CartLine::line_total()
///                                               │
///                                               ▼
///                                  CartState::total_price() ──► "$39.97"
/// ```
///
/// Serializes as a bare integer of cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1999); // $19.99
    /// assert_eq!(price.cents(), 1999);
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

    /// Returns the major unit (dollars) portion, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Creates a Money value from a wide intermediate, saturating at the
    /// `i64` bounds.
    #[inline]
    pub fn from_wide_cents(cents: i128) -> Self {
        Money(saturate_i64(cents))
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// Computed in `i128`; a product outside the `i64` range saturates.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(999);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 2997);
    /// assert_eq!(unit_price.multiply_quantity(i64::MAX), Money::from_cents(i64::MAX));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money::from_wide_cents(self.0 as i128 * qty as i128)
    }

    /// Formats the value as currency text with the given symbol.
    ///
    /// Whole units are grouped in thousands with `,` and the minor unit is
    /// always two digits. Negative values put the sign before the symbol.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(3997).format_with_symbol("$"), "$39.97");
    /// assert_eq!(Money::from_cents(123456789).format_with_symbol("€"), "€1,234,567.89");
    /// assert_eq!(Money::from_cents(-550).format_with_symbol("$"), "-$5.50");
    /// ```
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let whole = self.dollars().unsigned_abs().to_string();

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        format!("{}{}{}.{:02}", sign, symbol, grouped, self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money with the default `$` symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Accumulates in `i128` so intermediate overflow cannot change the result;
/// only the final total saturates.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Money::from_wide_cents(iter.map(|m| m.0 as i128).sum())
    }
}

/// Clamps a wide value into `i64`.
pub(crate) fn saturate_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1999);
        assert_eq!(money.cents(), 1999);
        assert_eq!(money.dollars(), 19);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(3997)), "$39.97");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(7)), "$0.07");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(Money::from_cents(100_000).to_string(), "$1,000.00");
        assert_eq!(Money::from_cents(99_999).to_string(), "$999.99");
        assert_eq!(Money::from_cents(123_456_789).to_string(), "$1,234,567.89");
        assert_eq!(Money::from_cents(-10_000_000).to_string(), "-$100,000.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(999);
        let b = Money::from_cents(1999);

        assert_eq!((a + b).cents(), 2998);
        assert_eq!((a * 2).cents(), 1998);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 2998);
    }

    #[test]
    fn test_sum() {
        let total: Money = [999, 999, 1999].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 3997);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_overflow_saturates() {
        let big = Money::from_cents(i64::MAX);

        assert_eq!(Money::from_cents(999).multiply_quantity(i64::MAX), big);
        assert_eq!(Money::from_cents(999).multiply_quantity(i64::MIN).cents(), i64::MIN);
        assert_eq!(big + Money::from_cents(1), big);
        assert_eq!((big * 2).cents(), i64::MAX);

        // Only the final total is clamped.
        let total: Money = [big, big, Money::from_cents(-i64::MAX)].into_iter().sum();
        assert_eq!(total, big);

        assert_eq!(big.to_string(), "$92,233,720,368,547,758.07");
        assert_eq!(Money::from_cents(i64::MIN).to_string(), "-$92,233,720,368,547,758.08");
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(999)).unwrap();
        assert_eq!(json, "999");

        let parsed: Money = serde_json::from_str("1999").unwrap();
        assert_eq!(parsed, Money::from_cents(1999));
    }
}
