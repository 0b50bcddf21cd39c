//! # Domain Types
//!
//! Core domain types used throughout GoodBurger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │  OrderRequest   │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  sandwich_id    │   │  id (store)     │       │
//! │  │  name           │──►│  extra_ids      │──►│  subtotal_cents │       │
//! │  │  price_cents    │   │  (raw input)    │   │  discount bps   │       │
//! │  │  category       │   └─────────────────┘   │  total_cents    │       │
//! │  └─────────────────┘                         │  created_at     │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Category     │   │  DiscountRate   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Sandwich       │   │  bps (u32)      │                             │
//! │  │  Fries  (extra) │   │  1500 = 15%     │                             │
//! │  │  Drink  (extra) │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::pricing::PriceBreakdown;
use crate::validation::ValidatedOrder;

/// Identifier of a menu item.
///
/// Signed so that any integer a client sends reaches the validator; ids that
/// are zero or negative are simply not on the menu.
pub type MenuItemId = i64;

/// Identifier of an order, assigned by the order store.
pub type OrderId = u32;

// =============================================================================
// Discount Rate
// =============================================================================

/// Combo discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so every combo rate is an exact integer
/// and discount math never touches floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Sandwich alone.
    pub const NONE: DiscountRate = DiscountRate(0);
    /// Sandwich + fries.
    pub const FRIES_COMBO: DiscountRate = DiscountRate(1000);
    /// Sandwich + drink.
    pub const DRINK_COMBO: DiscountRate = DiscountRate(1500);
    /// Sandwich + fries + drink.
    pub const FULL_COMBO: DiscountRate = DiscountRate(2000);

    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// Category
// =============================================================================

/// The menu section an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Main item; every order has exactly one.
    Sandwich,
    /// Side of fries (an extra).
    Fries,
    /// Soft drink (an extra).
    Drink,
}

impl Category {
    /// Whether items of this category can be attached to a sandwich.
    #[inline]
    pub const fn is_extra(&self) -> bool {
        matches!(self, Category::Fries | Category::Drink)
    }

    /// Lowercase name used in messages and query strings.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Sandwich => "sandwich",
            Category::Fries => "fries",
            Category::Drink => "drink",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// An entry of the fixed menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique positive identifier.
    pub id: MenuItemId,

    /// Display name shown on the menu.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Menu section.
    pub category: Category,
}

impl MenuItem {
    /// Creates a menu item.
    pub fn new(id: MenuItemId, name: impl Into<String>, price_cents: i64, category: Category) -> Self {
        MenuItem {
            id,
            name: name.into(),
            price_cents,
            category,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Order Request
// =============================================================================

/// A customer's proposed selection, as received from a client.
///
/// `extra_ids` is kept as the raw list so that duplicates can be detected
/// and reported instead of silently collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Missing in the body means 0, which no menu item uses.
    #[serde(default)]
    pub sandwich_id: MenuItemId,

    #[serde(default, alias = "extrasIds")]
    pub extra_ids: Vec<MenuItemId>,
}

impl OrderRequest {
    pub fn new(sandwich_id: MenuItemId, extra_ids: Vec<MenuItemId>) -> Self {
        OrderRequest {
            sandwich_id,
            extra_ids,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A priced, accepted order.
///
/// ## Invariants
/// - `sandwich_id` resolves to a Sandwich item
/// - `extra_ids` holds at most one Fries and one Drink, without duplicates
/// - `total_cents` is `subtotal_cents` minus the combo discount, rounded half to even
/// - `id` and `created_at` never change after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub sandwich_id: MenuItemId,
    pub extra_ids: Vec<MenuItemId>,
    /// Sum of item prices before discount.
    pub subtotal_cents: i64,
    /// Combo discount applied, in basis points.
    pub discount_rate_bps: u32,
    /// Amount to pay.
    pub total_cents: i64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Builds a new order from a validated selection and its price.
    pub fn new(
        id: OrderId,
        validated: &ValidatedOrder<'_>,
        breakdown: &PriceBreakdown,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut order = Order {
            id,
            sandwich_id: validated.sandwich.id,
            extra_ids: Vec::new(),
            subtotal_cents: 0,
            discount_rate_bps: 0,
            total_cents: 0,
            created_at,
        };
        order.reprice(validated, breakdown);
        order
    }

    /// Replaces every derived field from a freshly validated selection.
    ///
    /// `id` and `created_at` are left untouched.
    pub fn reprice(&mut self, validated: &ValidatedOrder<'_>, breakdown: &PriceBreakdown) {
        self.sandwich_id = validated.sandwich.id;
        self.extra_ids = validated.extra_ids();
        self.subtotal_cents = breakdown.subtotal.cents();
        self.discount_rate_bps = breakdown.discount_rate.bps();
        self.total_cents = breakdown.total.cents();
    }

    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    #[inline]
    pub fn discount_rate(&self) -> DiscountRate {
        DiscountRate::from_bps(self.discount_rate_bps)
    }

    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
