//! # Validation Module
//!
//! Input validation for cart mutations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart::add_item(name, price, quantity)                                  │
//! │       │                                                                 │
//! │       ├── validate_unit_price(price)  ── price < 0?  → InvalidArgument  │
//! │       │                                                                 │
//! │       ├── validate_quantity(quantity) ── qty <= 0?   → InvalidArgument  │
//! │       │                                                                 │
//! │       └── OK → mutate the item store                                    │
//! │                                                                         │
//! │  Price is checked before quantity; when both are invalid, the price     │
//! │  violation is the one reported. Nothing is stored on failure.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_unit_price;
/// use rust_decimal_macros::dec;
///
/// assert!(validate_unit_price(dec!(10.99)).is_ok());
/// assert!(validate_unit_price(dec!(0)).is_ok());
/// assert!(validate_unit_price(dec!(-1.50)).is_err());
/// ```
pub fn validate_unit_price(price: Decimal) -> ValidationResult<()> {
    if price < Decimal::ZERO {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Fractional quantities are allowed (weighed goods)
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_quantity;
/// use rust_decimal_macros::dec;
///
/// assert!(validate_quantity(dec!(3)).is_ok());
/// assert!(validate_quantity(dec!(2.5)).is_ok());
/// assert!(validate_quantity(dec!(0)).is_err());
/// assert!(validate_quantity(dec!(-1)).is_err());
/// ```
pub fn validate_quantity(quantity: Decimal) -> ValidationResult<()> {
    if quantity <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
