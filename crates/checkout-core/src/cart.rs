//! # Cart
//!
//! The cart: an item store, a single discount slot, and the pricing reads.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart::total()                                        │
//! │                                                                         │
//! │  raw subtotal (exact Σ price × quantity)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply active discount, if any (percentage or fixed)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  clamp at zero (never negative)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply tax (× 1.085)                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  round to 2 decimal places, half-up                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding happens once, at the end of each read; every intermediate value
//! is exact decimal arithmetic.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CartResult;
use crate::money::Money;
use crate::types::{AppliedDiscount, Discount};
use crate::validation::{validate_quantity, validate_unit_price};
use crate::TAX_RATE;

// =============================================================================
// Line Item
// =============================================================================

/// A line in the cart, unique by name.
///
/// ## Price Freezing
/// The unit price is captured when the line is first created. Later
/// `add_item` calls with the same name only accumulate quantity; to restock
/// at a different price, remove the line and add it again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name; the unique key within a cart.
    pub name: String,

    /// Price per unit, frozen at first insertion.
    pub unit_price: Money,

    /// Units on this line; fractional for weighed goods (2.5 kg of apples).
    pub quantity: Decimal,

    /// When this line was first created (frozen).
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a new line item stamped with the current time.
    pub fn new(name: impl Into<String>, unit_price: Money, quantity: Decimal) -> Self {
        LineItem {
            name: name.into(),
            unit_price,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Exact line total (unit price × quantity), unrounded.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// An in-memory cart with exact-decimal pricing.
///
/// ## Invariants
/// - Lines are unique by `name`; adding the same name accumulates quantity
/// - Every stored line has `unit_price >= 0` and `quantity > 0`
/// - At most one discount is active; applying another replaces it
/// - `subtotal()` and `total()` are pure reads and never return a negative
///
/// The cart is single-threaded state: mutations take `&mut self`, reads take
/// `&self`, and nothing blocks. An embedder that shares a cart across
/// threads wraps it in its own lock.
///
/// ## Example
/// ```rust
/// use checkout_core::{Cart, Discount};
/// use rust_decimal_macros::dec;
///
/// let mut cart = Cart::new();
/// cart.add_item("Espresso", dec!(3.50), dec!(2)).unwrap();
/// cart.apply_discount("WELCOME10", Discount::Percentage(dec!(10)));
///
/// assert_eq!(cart.subtotal().to_string(), "$7.00");
/// assert_eq!(cart.total().to_string(), "$6.84"); // 6.30 × 1.085 = 6.8355
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in the cart, unique by name.
    items: Vec<LineItem>,

    /// The single discount slot; `None` until a discount is applied.
    discount: Option<AppliedDiscount>,
}

impl Cart {
    /// Creates a new empty cart with no discount.
    pub fn new() -> Self {
        Cart::default()
    }

    // -------------------------------------------------------------------------
    // Item store
    // -------------------------------------------------------------------------

    /// Adds units of a named item to the cart.
    ///
    /// ## Behavior
    /// - If the name is already present: quantity accumulates; the stored
    ///   unit price is untouched (frozen at first insertion)
    /// - If the name is new: a line is created with the given price
    ///
    /// ## Errors
    /// Returns [`CartError::InvalidArgument`](crate::CartError::InvalidArgument)
    /// if `unit_price < 0` or `quantity <= 0`. Price is validated before
    /// quantity, and validation runs before any mutation, so a failed call
    /// leaves the cart unchanged.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: Decimal,
    ) -> CartResult<()> {
        validate_unit_price(unit_price)?;
        validate_quantity(quantity)?;

        let name = name.into();

        // Accumulate onto an existing line; the frozen price wins
        if let Some(item) = self.items.iter_mut().find(|i| i.name == name) {
            item.quantity += quantity;
            debug!(name = %item.name, quantity = %item.quantity, "accumulated quantity on existing line");
            return Ok(());
        }

        debug!(name = %name, unit_price = %unit_price, quantity = %quantity, "added line item");
        self.items
            .push(LineItem::new(name, Money::new(unit_price), quantity));
        Ok(())
    }

    /// Removes a line from the cart by name.
    ///
    /// Silently does nothing if no such line exists.
    pub fn remove_item(&mut self, name: &str) {
        let before = self.items.len();
        self.items.retain(|i| i.name != name);
        if self.items.len() != before {
            debug!(name, "removed line item");
        }
    }

    /// Returns the number of distinct item names in the cart (not total units).
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total units across all lines.
    pub fn total_quantity(&self) -> Decimal {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checks if the cart has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the lines currently in the cart.
    #[inline]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Clears all lines and the discount slot.
    pub fn clear(&mut self) {
        debug!("cleared cart");
        self.items.clear();
        self.discount = None;
    }

    // -------------------------------------------------------------------------
    // Discount slot
    // -------------------------------------------------------------------------

    /// Applies a discount, replacing any previously active one.
    ///
    /// Last write wins: the slot holds at most one discount and there is no
    /// stacking or merging. `code` is an opaque label kept for traceability;
    /// it does not affect any calculation. Never fails.
    pub fn apply_discount(&mut self, code: impl Into<String>, discount: Discount) {
        let applied = AppliedDiscount::new(code, discount);
        debug!(code = %applied.code, discount = ?applied.discount, "applied discount");
        self.discount = Some(applied);
    }

    /// Empties the discount slot.
    pub fn clear_discount(&mut self) {
        self.discount = None;
    }

    /// Returns the currently active discount, if any.
    #[inline]
    pub fn discount(&self) -> Option<&AppliedDiscount> {
        self.discount.as_ref()
    }

    // -------------------------------------------------------------------------
    // Pricing reads
    // -------------------------------------------------------------------------

    /// Exact sum of price × quantity over all lines, unrounded.
    pub fn raw_subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// The subtotal: raw subtotal rounded to currency precision, half-up.
    ///
    /// Before discount and tax. Pure read; an empty cart yields $0.00.
    pub fn subtotal(&self) -> Money {
        self.raw_subtotal().rounded()
    }

    /// The tax-inclusive total after the active discount.
    ///
    /// Computed as: raw subtotal → discount (if any) → clamp at zero →
    /// × (1 + tax rate) → round half-up to currency precision. Pure read;
    /// never negative; an empty cart yields $0.00.
    pub fn total(&self) -> Money {
        let subtotal = self.raw_subtotal();

        let discounted = match &self.discount {
            Some(applied) => applied.discount.reduce(subtotal),
            None => subtotal,
        };

        discounted
            .clamp_non_negative()
            .with_tax(TAX_RATE)
            .rounded()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// One-read snapshot of the cart's derived values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: Decimal,
    pub subtotal: Money,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
            total: cart.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================


// =============================================================================
// Property Tests
// =============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    /// Builds a cart from (price-in-cents, whole-unit quantity) pairs.
    fn cart_from(lines: &[(u32, u32)]) -> Cart {
        let mut cart = Cart::new();
        for (i, &(price_cents, qty)) in lines.iter().enumerate() {
            cart.add_item(
                format!("item-{i}"),
                Decimal::new(price_cents as i64, 2),
                Decimal::from(qty),
            )
            .unwrap();
        }
        cart
    }

    proptest! {
        /// The total is never negative, whatever fixed discount is applied.
        #[test]
        fn prop_total_never_negative(
            lines in prop::collection::vec((0u32..=100_00, 1u32..=100), 1..8),
            discount_cents in 0u32..=1_000_00,
        ) {
            let mut cart = cart_from(&lines);
            cart.apply_discount("FIXED", Discount::Fixed(Decimal::new(discount_cents as i64, 2)));

            prop_assert!(cart.total() >= Money::ZERO);
            prop_assert!(cart.subtotal() >= Money::ZERO);
        }

        /// Distinct names added and not removed is exactly the item count.
        #[test]
        fn prop_item_count_tracks_distinct_names(
            lines in prop::collection::vec((1u32..=10_00, 1u32..=10), 1..10),
            remove_index in 0usize..10,
        ) {
            let mut cart = cart_from(&lines);
            prop_assert_eq!(cart.item_count(), lines.len());

            cart.remove_item(&format!("item-{remove_index}"));
            let expected = if remove_index < lines.len() {
                lines.len() - 1
            } else {
                lines.len()
            };
            prop_assert_eq!(cart.item_count(), expected);
        }

        /// Applying two discounts in sequence prices the same as applying
        /// only the second one.
        #[test]
        fn prop_last_discount_wins(
            lines in prop::collection::vec((1u32..=100_00, 1u32..=20), 1..6),
            first_pct in 0u32..=100,
            second_pct in 0u32..=100,
        ) {
            let mut twice = cart_from(&lines);
            twice.apply_discount("FIRST", Discount::Percentage(Decimal::from(first_pct)));
            twice.apply_discount("SECOND", Discount::Percentage(Decimal::from(second_pct)));

            let mut once = cart_from(&lines);
            once.apply_discount("SECOND", Discount::Percentage(Decimal::from(second_pct)));

            prop_assert_eq!(twice.total(), once.total());
        }
    }
}
