//! # Domain Types
//!
//! Core domain types used throughout checkout-core.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │    Discount     │   │ AppliedDiscount │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Percentage(v)  │   │  code           │       │
//! │  │  850 = 8.5%     │   │  Fixed(v)       │   │  discount       │       │
//! │  └─────────────────┘   └─────────────────┘   │  applied_at     │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01% = 1/10000, so 850 bps = 8.5%. Basis points convert
/// to an exact decimal factor, keeping the tax step free of binary floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact decimal fraction (850 bps → 0.085).
    #[inline]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(self.0 as i64, 4)
    }

    /// Returns the tax-inclusive multiplier (850 bps → 1.085).
    #[inline]
    pub fn multiplier(&self) -> Decimal {
        Decimal::ONE + self.as_decimal()
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Discount
// =============================================================================

/// A reduction applied to the cart's subtotal before tax.
///
/// At most one discount is active on a cart at any time; applying a new one
/// replaces the previous one entirely (last write wins, no stacking).
///
/// The serialized form tags the kind in snake_case:
/// `{"type": "percentage", "value": "20"}`. Deserializing an unknown kind
/// tag is an error, so a malformed discount can never reach the pricing
/// pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum Discount {
    /// Reduce the subtotal by a percentage of itself (20 = 20% off).
    Percentage(Decimal),
    /// Reduce the subtotal by a fixed amount of money.
    Fixed(Decimal),
}

impl Discount {
    /// Applies the discount to an amount, returning the reduced amount.
    ///
    /// The result may be negative (a fixed discount larger than the amount);
    /// the pricing pipeline clamps at zero afterwards.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{Discount, Money};
    /// use rust_decimal_macros::dec;
    ///
    /// let subtotal = Money::new(dec!(100.00));
    /// assert_eq!(
    ///     Discount::Percentage(dec!(20)).reduce(subtotal),
    ///     Money::new(dec!(80.00))
    /// );
    /// assert_eq!(
    ///     Discount::Fixed(dec!(5.00)).reduce(subtotal),
    ///     Money::new(dec!(95.00))
    /// );
    /// ```
    pub fn reduce(&self, amount: Money) -> Money {
        match self {
            Discount::Percentage(percent) => amount.percentage_off(*percent),
            Discount::Fixed(value) => amount - Money::new(*value),
        }
    }
}

// =============================================================================
// Applied Discount
// =============================================================================

/// The discount currently occupying the cart's single discount slot.
///
/// `code` is an opaque label kept for traceability only; it has no effect on
/// any calculation. `applied_at` records when the slot was last overwritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppliedDiscount {
    /// Opaque code supplied by the caller (e.g. "SAVE20").
    pub code: String,

    /// The discount itself.
    pub discount: Discount,

    /// When this discount was applied (frozen).
    pub applied_at: DateTime<Utc>,
}

impl AppliedDiscount {
    /// Creates an applied-discount record stamped with the current time.
    pub fn new(code: impl Into<String>, discount: Discount) -> Self {
        AppliedDiscount {
            code: code.into(),
            discount,
            applied_at: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(850);
        assert_eq!(rate.bps(), 850);
        assert_eq!(rate.as_decimal(), dec!(0.085));
        assert_eq!(rate.multiplier(), dec!(1.085));
    }

    #[test]
    fn test_tax_rate_zero() {
        let rate = TaxRate::default();
        assert!(rate.is_zero());
        assert_eq!(rate.multiplier(), Decimal::ONE);
    }

    #[test]
    fn test_percentage_reduce() {
        let subtotal = Money::new(dec!(100.00));
        let reduced = Discount::Percentage(dec!(20)).reduce(subtotal);
        assert_eq!(reduced, Money::new(dec!(80.00)));
    }

    #[test]
    fn test_fixed_reduce_can_go_negative() {
        let subtotal = Money::new(dec!(10.00));
        let reduced = Discount::Fixed(dec!(50.00)).reduce(subtotal);
        assert!(reduced.is_negative());
    }

    #[test]
    fn test_discount_serde_round_trip() {
        let discount = Discount::Percentage(dec!(20));
        let json = serde_json::to_string(&discount).unwrap();
        assert_eq!(json, r#"{"type":"percentage","value":"20"}"#);

        let back: Discount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, discount);

        let fixed: Discount = serde_json::from_str(r#"{"type":"fixed","value":"5.00"}"#).unwrap();
        assert_eq!(fixed, Discount::Fixed(dec!(5.00)));
    }

    #[test]
    fn test_unknown_discount_kind_is_rejected() {
        // Unknown kinds fail at the deserialization boundary, before they
        // could ever occupy a cart's discount slot.
        let result = serde_json::from_str::<Discount>(r#"{"type":"loyalty","value":"5"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_applied_discount_keeps_code() {
        let applied = AppliedDiscount::new("SAVE20", Discount::Percentage(dec!(20)));
        assert_eq!(applied.code, "SAVE20");
        assert_eq!(applied.discount, Discount::Percentage(dec!(20)));
    }
}
