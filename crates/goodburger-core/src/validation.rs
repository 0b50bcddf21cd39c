//! # Validation Module
//!
//! Checks a proposed order against the menu before anything is priced.
//!
//! ## Validation Steps
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      validate_order(request, catalog)                   │
//! │                                                                         │
//! │  Step 1: Sandwich                                                       │
//! │  └── sandwich_id on menu AND category = Sandwich   else InvalidSandwich │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Step 2: Duplicates (raw list, before any lookup)                       │
//! │  └── no id appears twice                           else DuplicateExtras │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Step 3: Each extra, in request order                                   │
//! │  └── id on menu AND category ∈ {Fries, Drink}     else InvalidExtra(id) │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Step 4: Cardinality                                                    │
//! │  └── ≤ 1 Fries AND ≤ 1 Drink                 else TooManyPerCategory    │
//! │                                                                         │
//! │  The first failing step wins; later steps never run.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use goodburger_core::menu::Catalog;
//! use goodburger_core::types::OrderRequest;
//! use goodburger_core::validation::validate_order;
//! use goodburger_core::OrderError;
//!
//! let catalog = Catalog::seeded();
//!
//! let ok = validate_order(&OrderRequest::new(1, vec![5]), &catalog).unwrap();
//! assert_eq!(ok.extra_ids(), vec![5]);
//!
//! let err = validate_order(&OrderRequest::new(4, vec![]), &catalog).unwrap_err();
//! assert_eq!(err, OrderError::InvalidSandwich { id: 4 });
//! ```

use std::collections::HashSet;

use crate::error::{OrderError, OrderResult};
use crate::menu::Catalog;
use crate::types::{Category, MenuItem, MenuItemId, OrderRequest};

/// A request whose items all resolved and passed the ordering rules.
///
/// Borrows from the [`Catalog`] it was validated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOrder<'a> {
    pub sandwich: &'a MenuItem,
    /// Extras in request order; never contains the same item twice.
    pub extras: Vec<&'a MenuItem>,
}

impl ValidatedOrder<'_> {
    /// Ids of the accepted extras, in request order.
    pub fn extra_ids(&self) -> Vec<MenuItemId> {
        self.extras.iter().map(|item| item.id).collect()
    }
}

/// Validates an order request against the catalog.
///
/// No side effects; the same input always yields the same result.
pub fn validate_order<'a>(
    request: &OrderRequest,
    catalog: &'a Catalog,
) -> OrderResult<ValidatedOrder<'a>> {
    let sandwich = resolve_sandwich(request.sandwich_id, catalog)?;
    reject_duplicates(&request.extra_ids)?;

    let extras = request
        .extra_ids
        .iter()
        .map(|&id| resolve_extra(id, catalog))
        .collect::<OrderResult<Vec<_>>>()?;

    check_one_per_category(&extras)?;

    Ok(ValidatedOrder { sandwich, extras })
}

fn resolve_sandwich(id: MenuItemId, catalog: &Catalog) -> OrderResult<&MenuItem> {
    catalog
        .find_by_id(id)
        .filter(|item| item.category == Category::Sandwich)
        .ok_or(OrderError::InvalidSandwich { id })
}

fn reject_duplicates(extra_ids: &[MenuItemId]) -> OrderResult<()> {
    let mut seen = HashSet::with_capacity(extra_ids.len());

    match extra_ids.iter().find(|id| !seen.insert(**id)) {
        Some(&id) => Err(OrderError::DuplicateExtras { id }),
        None => Ok(()),
    }
}

fn resolve_extra(id: MenuItemId, catalog: &Catalog) -> OrderResult<&MenuItem> {
    catalog
        .find_by_id(id)
        .filter(|item| item.category.is_extra())
        .ok_or(OrderError::InvalidExtra(id))
}

fn check_one_per_category(extras: &[&MenuItem]) -> OrderResult<()> {
    for category in [Category::Fries, Category::Drink] {
        let count = extras.iter().filter(|item| item.category == category).count();
        if count > 1 {
            return Err(OrderError::TooManyPerCategory { category });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
