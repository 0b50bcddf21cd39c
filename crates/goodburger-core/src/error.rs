//! # Error Types
//!
//! Domain-specific error types for goodburger-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  goodburger-core errors (this file)                                     │
//! │  ├── OrderError       - Order rule violations and lookup failures      │
//! │  └── ValidationError  - Malformed catalog entries                      │
//! │                                                                         │
//! │  goodburger-orders errors                                               │
//! │  └── StoreError       - Store mutations (mapped into OrderError)       │
//! │                                                                         │
//! │  HTTP errors (in app)                                                   │
//! │  └── ApiError         - problem+json rendered from OrderError          │
//! │                                                                         │
//! │  Flow: StoreError → OrderError → ApiError → Client                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending id in the variant
//! 3. Every variant has a stable machine-readable [`OrderError::code`]
//! 4. The core never decides transport status codes, only the [`ErrorKind`]

use thiserror::Error;

use crate::types::{Category, MenuItemId, OrderId};

// =============================================================================
// Error Kind
// =============================================================================

/// Broad classification of an [`OrderError`].
///
/// The HTTP layer maps each kind to a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request broke an ordering rule (client error).
    Validation,
    /// The referenced order does not exist (client error).
    NotFound,
    /// A defect inside the service.
    Internal,
}

// =============================================================================
// Order Error
// =============================================================================

/// Failures of the order validator and order service.
///
/// ## Validation Order
/// ```text
/// sandwich ──► duplicate extras ──► each extra resolves ──► one per category
///    │               │                     │                       │
///    ▼               ▼                     ▼                       ▼
/// InvalidSandwich DuplicateExtras   InvalidExtra(id)      TooManyPerCategory
/// ```
/// The first failing check wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Sandwich id is not on the menu or is not a sandwich.
    #[error("Invalid sandwich ID {id}.")]
    InvalidSandwich { id: MenuItemId },

    /// The same extra id was requested more than once.
    #[error("Duplicated extras are not allowed (extra ID {id} repeated).")]
    DuplicateExtras { id: MenuItemId },

    /// An extra id is not on the menu or is not fries/drink.
    #[error("Extra item ID {0} is invalid.")]
    InvalidExtra(MenuItemId),

    /// More than one item of an extra category.
    #[error("You can only include one extra item per type ({category} requested more than once).")]
    TooManyPerCategory { category: Category },

    /// Referenced order id does not exist in the store.
    #[error("Order with ID {0} not found.")]
    OrderNotFound(OrderId),

    /// A store mutation that was expected to succeed failed.
    #[error("Order store inconsistency: {0}")]
    InternalInconsistency(String),
}

impl OrderError {
    /// Stable identifier for clients (also the last segment of the problem type URI).
    pub const fn code(&self) -> &'static str {
        match self {
            OrderError::InvalidSandwich { .. } => "invalid-sandwich-id",
            OrderError::DuplicateExtras { .. } => "duplicated-extras",
            OrderError::InvalidExtra(_) => "invalid-extra-id",
            OrderError::TooManyPerCategory { .. } => "extras-inclusion",
            OrderError::OrderNotFound(_) => "order-not-found",
            OrderError::InternalInconsistency(_) => "order-update-failed",
        }
    }

    /// Short human-readable summary of the error category.
    pub const fn title(&self) -> &'static str {
        match self {
            OrderError::InvalidSandwich { .. } => "Invalid sandwich",
            OrderError::DuplicateExtras { .. } => "Duplicated extras",
            OrderError::InvalidExtra(_) => "Invalid extra",
            OrderError::TooManyPerCategory { .. } => "Too many extras of one type",
            OrderError::OrderNotFound(_) => "Order not found",
            OrderError::InternalInconsistency(_) => "Order update failed",
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            OrderError::InvalidSandwich { .. }
            | OrderError::DuplicateExtras { .. }
            | OrderError::InvalidExtra(_)
            | OrderError::TooManyPerCategory { .. } => ErrorKind::Validation,
            OrderError::OrderNotFound(_) => ErrorKind::NotFound,
            OrderError::InternalInconsistency(_) => ErrorKind::Internal,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level errors raised while building the menu catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Duplicate value (e.g., duplicate menu item id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with OrderError.
pub type OrderResult<T> = Result<T, OrderError>;

// =============================================================================
// Unit Tests
// =============================================================================
