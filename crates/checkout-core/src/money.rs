//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## The Floating Point Problem
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  In binary floating point:                                              │
//! │    0.1 + 0.1 + 0.1 = 0.30000000000000004  ❌ WRONG!                     │
//! │                                                                         │
//! │  In this crate:                                                         │
//! │    Money is an exact decimal; 3 × $0.10 is exactly $0.30               │
//! │                                                                         │
//! │  Rounding happens ONCE, at currency precision, half-up                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::Money;
//! use rust_decimal_macros::dec;
//!
//! let price = Money::new(dec!(10.99));
//!
//! // Arithmetic operations stay exact
//! let line = price * dec!(2.5);
//! assert_eq!(line, Money::new(dec!(27.475)));
//!
//! // Rounding is explicit and half-up
//! assert_eq!(line.rounded(), Money::new(dec!(27.48)));
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::TaxRate;

/// Number of decimal places in a displayable currency amount.
pub const CURRENCY_SCALE: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value backed by exact decimal arithmetic.
///
/// Intermediate results (raw subtotals, discounted amounts) keep full
/// precision; [`Money::rounded`] collapses to currency precision with the
/// half-up rule. `Money` can go negative mid-computation (a fixed discount
/// larger than the subtotal); [`Money::clamp_non_negative`] restores the
/// never-negative invariant before tax is applied.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero money value.
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Creates a Money value from a decimal amount.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let price = Money::new(dec!(10.99));
    /// assert_eq!(price.amount(), dec!(10.99));
    /// ```
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Rounds to currency precision (2 decimal places) using the half-up rule:
    /// a value exactly at the midpoint rounds away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Money::new(dec!(48.825)).rounded(), Money::new(dec!(48.83)));
    /// assert_eq!(Money::new(dec!(0.005)).rounded(), Money::new(dec!(0.01)));
    /// assert_eq!(Money::new(dec!(7.474)).rounded(), Money::new(dec!(7.47)));
    /// ```
    #[inline]
    pub fn rounded(self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Floors the value at zero: negative amounts become [`Money::ZERO`].
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let overdrawn = Money::new(dec!(10.00)) - Money::new(dec!(50.00));
    /// assert_eq!(overdrawn.clamp_non_negative(), Money::ZERO);
    /// ```
    #[inline]
    pub fn clamp_non_negative(self) -> Money {
        if self.is_negative() {
            Money::ZERO
        } else {
            self
        }
    }

    /// Applies tax, returning the tax-inclusive amount (self × (1 + rate)).
    ///
    /// The multiplier is built from basis points, so the computation stays
    /// exact; no rounding happens here.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{Money, TaxRate};
    /// use rust_decimal_macros::dec;
    ///
    /// let amount = Money::new(dec!(100.00));
    /// let rate = TaxRate::from_bps(850); // 8.5%
    /// assert_eq!(amount.with_tax(rate), Money::new(dec!(108.50)));
    /// ```
    pub fn with_tax(self, rate: TaxRate) -> Money {
        Money(self.0 * rate.multiplier())
    }

    /// Reduces the amount by a percentage (self − self × pct/100).
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let subtotal = Money::new(dec!(100.00));
    /// assert_eq!(subtotal.percentage_off(dec!(15)), Money::new(dec!(85.00)));
    /// ```
    pub fn percentage_off(self, percent: Decimal) -> Money {
        Money(self.0 - self.0 * percent / Decimal::ONE_HUNDRED)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format, rounded to
/// currency precision.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded().0;
        let sign = if rounded < Decimal::ZERO { "-" } else { "" };
        write!(f, "{}${:.2}", sign, rounded.abs())
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a decimal quantity (for line totals; quantities may be
/// fractional for weighed goods).
impl Mul<Decimal> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, quantity: Decimal) -> Self {
        Money(self.0 * quantity)
    }
}

/// Summing an iterator of Money values.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
