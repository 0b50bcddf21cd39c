//! # Pricing Module
//!
//! Combo discount pricing for validated orders.
//!
//! ## Discount Table
//! ```text
//! ┌──────────────────────────┬──────────┐
//! │ Extras present           │ Discount │
//! ├──────────────────────────┼──────────┤
//! │ fries + drink            │   20%    │
//! │ drink only               │   15%    │
//! │ fries only               │   10%    │
//! │ none                     │    0%    │
//! └──────────────────────────┴──────────┘
//! ```
//! The rate depends only on which extra categories are present. Rates
//! do not stack: fries + drink is 20%, not 10% + 15%.

use crate::money::Money;
use crate::types::{Category, DiscountRate, MenuItem};

/// Result of pricing an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBreakdown {
    /// Sandwich price plus every extra.
    pub subtotal: Money,
    pub discount_rate: DiscountRate,
    /// `subtotal` after the discount, rounded half to even.
    pub total: Money,
}

impl PriceBreakdown {
    /// Amount taken off the subtotal.
    pub fn discount(&self) -> Money {
        Money::from_cents(self.subtotal.cents() - self.total.cents())
    }
}

/// Picks the combo rate for a set of extras.
pub fn discount_rate_for(extras: &[&MenuItem]) -> DiscountRate {
    let has_fries = extras.iter().any(|e| e.category == Category::Fries);
    let has_drink = extras.iter().any(|e| e.category == Category::Drink);

    match (has_fries, has_drink) {
        (true, true) => DiscountRate::FULL_COMBO,
        (false, true) => DiscountRate::DRINK_COMBO,
        (true, false) => DiscountRate::FRIES_COMBO,
        (false, false) => DiscountRate::NONE,
    }
}

/// Prices a validated selection from current catalog prices.
///
/// ## Example
/// ```rust
/// use goodburger_core::pricing::price;
/// use goodburger_core::types::{Category, MenuItem};
///
/// let burger = MenuItem::new(1, "X Burger", 500, Category::Sandwich);
/// let drink = MenuItem::new(5, "Soft drink", 250, Category::Drink);
///
/// let breakdown = price(&burger, &[&drink]);
/// assert_eq!(breakdown.subtotal.cents(), 750);
/// assert_eq!(breakdown.discount_rate.bps(), 1500);
/// assert_eq!(breakdown.total.cents(), 638); // $6.375 → $6.38
/// ```
pub fn price(sandwich: &MenuItem, extras: &[&MenuItem]) -> PriceBreakdown {
    let subtotal = sandwich.price() + extras.iter().map(|e| e.price()).sum::<Money>();
    let discount_rate = discount_rate_for(extras);

    PriceBreakdown {
        subtotal,
        discount_rate,
        total: subtotal.apply_discount(discount_rate),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn burger() -> MenuItem {
        MenuItem::new(1, "X Burger", 500, Category::Sandwich)
    }

    fn fries() -> MenuItem {
        MenuItem::new(4, "Fries", 200, Category::Fries)
    }

    fn drink() -> MenuItem {
        MenuItem::new(5, "Soft drink", 250, Category::Drink)
    }

    #[test]
    fn test_sandwich_alone() {
        let b = price(&burger(), &[]);
        assert_eq!(b.subtotal.cents(), 500);
        assert_eq!(b.discount_rate, DiscountRate::NONE);
        assert_eq!(b.total.cents(), 500);
        assert_eq!(b.discount(), Money::zero());
    }

    #[test]
    fn test_sandwich_with_fries() {
        let b = price(&burger(), &[&fries()]);
        assert_eq!(b.subtotal.cents(), 700);
        assert_eq!(b.discount_rate, DiscountRate::FRIES_COMBO);
        assert_eq!(b.total.cents(), 630);
        assert_eq!(b.discount().cents(), 70);
    }

    #[test]
    fn test_sandwich_with_drink() {
        let b = price(&burger(), &[&drink()]);
        assert_eq!(b.subtotal.cents(), 750);
        assert_eq!(b.discount_rate, DiscountRate::DRINK_COMBO);
        // 637.5 cents rounds half to even
        assert_eq!(b.total.cents(), 638);
    }

    #[test]
    fn test_full_combo() {
        let b = price(&burger(), &[&fries(), &drink()]);
        assert_eq!(b.subtotal.cents(), 950);
        assert_eq!(b.discount_rate, DiscountRate::FULL_COMBO);
        assert_eq!(b.total.cents(), 760);
    }

    #[test]
    fn test_extra_order_does_not_matter() {
        let (f, d) = (fries(), drink());
        assert_eq!(price(&burger(), &[&f, &d]), price(&burger(), &[&d, &f]));
    }

    #[test]
    fn test_rate_is_always_a_combo_rate() {
        let (f, d) = (fries(), drink());
        let selections: [&[&MenuItem]; 4] = [&[], &[&f], &[&d], &[&f, &d]];
        let allowed = [0, 1000, 1500, 2000];

        for extras in selections {
            let b = price(&burger(), extras);
            assert!(allowed.contains(&b.discount_rate.bps()));
            assert_eq!(b.total, b.subtotal.apply_discount(b.discount_rate));
        }
    }

    #[test]
    fn test_free_sandwich() {
        let free = MenuItem::new(8, "Kids burger", 0, Category::Sandwich);
        let b = price(&free, &[&fries()]);
        assert_eq!(b.subtotal.cents(), 200);
        assert_eq!(b.total.cents(), 180);
    }
}
