//! # checkout-core: Pure Pricing Logic for Checkout
//!
//! This crate is the **heart** of Checkout. It computes what a shopper owes
//! for a collection of line items, after an optional single discount and a
//! fixed tax rate, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Embedding layer (UI / API / test harness)          │   │
//! │  │        supplies items and discounts, renders totals             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │   money   │  │   types   │  │ validation│  │   │
//! │  │   │   Cart    │  │   Money   │  │  Discount │  │   rules   │  │   │
//! │  │   │ LineItem  │  │  rounding │  │  TaxRate  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The cart: item store, discount slot, pricing reads
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`types`] - Domain types (Discount, TaxRate, AppliedDiscount)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every read is deterministic - same state = same total
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Exact Decimals**: All monetary math is `rust_decimal`, rounded once,
//!    half-up, at currency precision
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{Cart, Discount};
//! use rust_decimal_macros::dec;
//!
//! let mut cart = Cart::new();
//! cart.add_item("Laptop", dec!(999.99), dec!(1)).unwrap();
//! cart.add_item("Mouse", dec!(29.99), dec!(2)).unwrap();
//!
//! // Last write wins: only the 15% discount is active
//! cart.apply_discount("SAVE10", Discount::Percentage(dec!(10)));
//! cart.apply_discount("TECH15", Discount::Percentage(dec!(15)));
//!
//! assert_eq!(cart.subtotal().to_string(), "$1059.97");
//! // 1059.97 × 0.85 = 900.9745, × 1.085 = 977.5573325 → $977.56
//! assert_eq!(cart.total().to_string(), "$977.56");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Cart` instead of
// `use checkout_core::cart::Cart`

pub use cart::{Cart, CartTotals, LineItem};
pub use error::{CartError, CartResult, ValidationError};
pub use money::Money;
pub use types::{AppliedDiscount, Discount, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The sales tax rate applied by [`Cart::total`]: 850 basis points (8.5%).
///
/// Fixed for the whole engine; per-cart or per-item tax rates are out of
/// scope. The rate multiplies the discounted, zero-floored amount.
pub const TAX_RATE: TaxRate = TaxRate::from_bps(850);

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tax_rate_constant() {
        assert_eq!(TAX_RATE.bps(), 850);
        assert_eq!(TAX_RATE.multiplier(), dec!(1.085));
    }
}
