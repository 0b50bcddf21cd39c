//! # Money Module
//!
//! Provides the `Money` type for handling menu prices and order totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    7.50 × 0.85 = 6.374999999999999  ❌ rounds to 6.37                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    750 × 8500 / 10000 = 637.5 exactly → 638 (half to even)             │
//! │    The half-cent is visible and rounded by an explicit rule            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use goodburger_core::money::Money;
//! use goodburger_core::types::DiscountRate;
//!
//! let burger = Money::from_cents(500); // $5.00
//! let fries = Money::from_cents(200);  // $2.00
//!
//! let subtotal = burger + fries;
//! let total = subtotal.apply_discount(DiscountRate::FRIES_COMBO);
//! assert_eq!(total.cents(), 630); // $6.30
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::types::DiscountRate;

/// Basis points in 100%.
const FULL_BPS: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price_cents ──► subtotal ──► apply_discount() ──► Order.total_cents
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use goodburger_core::money::Money;
    ///
    /// let price = Money::from_cents(450); // Represents $4.50
    /// assert_eq!(price.cents(), 450);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Applies a percentage discount and returns the amount left to pay.
    ///
    /// ## Formula
    /// `total = amount × (10000 − bps) / 10000`, rounded to whole cents.
    ///
    /// ## Rounding: Bankers Rounding (round half to even)
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  Exact half-cents go to the nearest EVEN cent:                      │
    /// │    637.5 → 638      636.5 → 636      637.4 → 637      637.6 → 638  │
    /// │                                                                     │
    /// │  Anything that is not exactly half rounds to the nearest cent.     │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use goodburger_core::money::Money;
    /// use goodburger_core::types::DiscountRate;
    ///
    /// // $7.50 with 15% off = $6.375 → $6.38
    /// let total = Money::from_cents(750).apply_discount(DiscountRate::DRINK_COMBO);
    /// assert_eq!(total.cents(), 638);
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        // i128 keeps large amounts from overflowing the intermediate product
        let numerator = self.0 as i128 * (FULL_BPS - rate.bps() as i128);
        Money::from_cents(div_round_half_even(numerator, FULL_BPS) as i64)
    }
}

/// Divides `numerator` by a positive `denominator`, rounding half to even.
fn div_round_half_even(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator.div_euclid(denominator);
    let remainder = numerator.rem_euclid(denominator);
    let twice = remainder * 2;

    if twice > denominator || (twice == denominator && quotient % 2 != 0) {
        quotient + 1
    } else {
        quotient
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
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
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(760)), "$7.60");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_cents(500), Money::from_cents(200), Money::from_cents(250)];
        let subtotal: Money = prices.iter().copied().sum();
        assert_eq!(subtotal.cents(), 950);

        let empty: Money = std::iter::empty().sum();
        assert_eq!(empty, Money::zero());
    }

    #[test]
    fn test_apply_discount_exact() {
        assert_eq!(Money::from_cents(700).apply_discount(DiscountRate::FRIES_COMBO).cents(), 630);
        assert_eq!(Money::from_cents(950).apply_discount(DiscountRate::FULL_COMBO).cents(), 760);
        assert_eq!(Money::from_cents(500).apply_discount(DiscountRate::NONE).cents(), 500);
    }

    #[test]
    fn test_apply_discount_half_rounds_to_even() {
        // 637.5 → 638 (638 is even)
        assert_eq!(Money::from_cents(750).apply_discount(DiscountRate::DRINK_COMBO).cents(), 638);
        // 5 cents × 0.9 = 4.5 → 4 (4 is even)
        assert_eq!(Money::from_cents(5).apply_discount(DiscountRate::FRIES_COMBO).cents(), 4);
        // 15 cents × 0.9 = 13.5 → 14
        assert_eq!(Money::from_cents(15).apply_discount(DiscountRate::FRIES_COMBO).cents(), 14);
    }

    #[test]
    fn test_apply_discount_non_half_rounds_to_nearest() {
        // 11 × 0.85 = 9.35 → 9
        assert_eq!(Money::from_cents(11).apply_discount(DiscountRate::DRINK_COMBO).cents(), 9);
        // 13 × 0.85 = 11.05 → 11
        assert_eq!(Money::from_cents(13).apply_discount(DiscountRate::DRINK_COMBO).cents(), 11);
        // 19 × 0.85 = 16.15 → 16
        assert_eq!(Money::from_cents(19).apply_discount(DiscountRate::DRINK_COMBO).cents(), 16);
        // 3 × 0.85 = 2.55 → 3
        assert_eq!(Money::from_cents(3).apply_discount(DiscountRate::DRINK_COMBO).cents(), 3);
    }

    #[test]
    fn test_apply_discount_is_deterministic() {
        let amount = Money::from_cents(750);
        let first = amount.apply_discount(DiscountRate::DRINK_COMBO);
        for _ in 0..10 {
            assert_eq!(amount.apply_discount(DiscountRate::DRINK_COMBO), first);
        }
    }

    #[test]
    fn test_div_round_half_even_negative() {
        // -2.5 → -2, -3.5 → -4
        assert_eq!(div_round_half_even(-25, 10), -2);
        assert_eq!(div_round_half_even(-35, 10), -4);
    }
}
