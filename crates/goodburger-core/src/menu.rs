//! # Menu Catalog
//!
//! The fixed set of purchasable items, indexed by id.
//!
//! The catalog is built once at startup and never mutated afterwards, so it
//! can be shared freely between threads behind an `Arc` or a plain reference.
//!
//! ## Seed Menu
//! ```text
//! ┌────┬────────────┬────────┬──────────┐
//! │ id │ name       │ price  │ category │
//! ├────┼────────────┼────────┼──────────┤
//! │ 1  │ X Burger   │ $5.00  │ sandwich │
//! │ 2  │ X Egg      │ $4.50  │ sandwich │
//! │ 3  │ X Bacon    │ $7.00  │ sandwich │
//! │ 4  │ Fries      │ $2.00  │ fries    │
//! │ 5  │ Soft drink │ $2.50  │ drink    │
//! └────┴────────────┴────────┴──────────┘
//! ```

use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::types::{Category, MenuItem, MenuItemId};

/// Read-only menu lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: BTreeMap<MenuItemId, MenuItem>,
}

impl Catalog {
    /// Builds a catalog from a list of items.
    ///
    /// ## Rules
    /// - ids must be positive and unique
    /// - names must not be blank
    /// - prices must be non-negative
    pub fn new(items: impl IntoIterator<Item = MenuItem>) -> Result<Self, ValidationError> {
        let mut indexed = BTreeMap::new();

        for item in items {
            if item.id <= 0 {
                return Err(ValidationError::MustBePositive {
                    field: "menu item id".to_string(),
                });
            }
            if item.name.trim().is_empty() {
                return Err(ValidationError::Required {
                    field: "menu item name".to_string(),
                });
            }
            if item.price_cents < 0 {
                return Err(ValidationError::OutOfRange {
                    field: "menu item price".to_string(),
                    min: 0,
                    max: i64::MAX,
                });
            }
            if indexed.contains_key(&item.id) {
                return Err(ValidationError::Duplicate {
                    field: "menu item id".to_string(),
                    value: item.id.to_string(),
                });
            }
            indexed.insert(item.id, item);
        }

        Ok(Catalog { items: indexed })
    }

    /// The fixed menu served by GoodBurger.
    pub fn seeded() -> Self {
        let items = [
            MenuItem::new(1, "X Burger", 500, Category::Sandwich),
            MenuItem::new(2, "X Egg", 450, Category::Sandwich),
            MenuItem::new(3, "X Bacon", 700, Category::Sandwich),
            MenuItem::new(4, "Fries", 200, Category::Fries),
            MenuItem::new(5, "Soft drink", 250, Category::Drink),
        ];

        Catalog {
            items: items.into_iter().map(|item| (item.id, item)).collect(),
        }
    }

    /// Looks up an item by id. Absence is not an error.
    #[inline]
    pub fn find_by_id(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.get(&id)
    }

    /// Items of one category, in id order.
    pub fn by_category(&self, category: Category) -> Vec<&MenuItem> {
        self.items
            .values()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Fries and drinks, in id order.
    pub fn extras(&self) -> Vec<&MenuItem> {
        self.items
            .values()
            .filter(|item| item.category.is_extra())
            .collect()
    }

    /// Every item, in id order.
    pub fn items(&self) -> Vec<&MenuItem> {
        self.items.values().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
