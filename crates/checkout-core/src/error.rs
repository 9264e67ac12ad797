//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                       │
//! │  ├── CartError        - Cart operation failures                         │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  Flow: ValidationError → CartError → Caller                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field name in error messages
//! 3. Errors are enum variants, never String
//! 4. Errors surface synchronously at the call site; state is untouched on failure

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart operation errors.
///
/// The only failing operation is [`Cart::add_item`](crate::Cart::add_item);
/// every other operation on the cart is total. An `InvalidArgument` is raised
/// before any state change, so a failed call leaves the cart exactly as it was.
#[derive(Debug, Error)]
pub enum CartError {
    /// An argument was outside its allowed range.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a supplied value doesn't meet the cart's range rules.
/// Used for early validation before any mutation happens.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
