//! Cart pricing and free-shipping progress.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Cart;

/// Subtotal at which shipping becomes free.
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(5000, 0, 0, false, 2);

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Free-shipping rule applied when deriving totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    free_shipping_threshold: Decimal,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: DEFAULT_FREE_SHIPPING_THRESHOLD,
        }
    }
}

impl ShippingPolicy {
    /// Create a policy with the given threshold.
    #[must_use]
    pub const fn new(free_shipping_threshold: Decimal) -> Self {
        Self {
            free_shipping_threshold,
        }
    }

    /// The configured threshold.
    #[must_use]
    pub const fn free_shipping_threshold(&self) -> Decimal {
        self.free_shipping_threshold
    }

    /// Derive totals for a cart.
    ///
    /// Pure and total: no rounding is applied here, only at display time.
    #[must_use]
    pub fn totals(&self, cart: &Cart) -> CartTotals {
        let subtotal = cart.subtotal();
        let threshold = self.free_shipping_threshold;

        let shipping_remainder = threshold.saturating_sub(subtotal).max(Decimal::ZERO);

        let progress_percent = if threshold <= Decimal::ZERO || subtotal >= threshold {
            ONE_HUNDRED
        } else if subtotal <= Decimal::ZERO {
            Decimal::ZERO
        } else {
            (subtotal / threshold * ONE_HUNDRED).clamp(Decimal::ZERO, ONE_HUNDRED)
        };

        CartTotals {
            subtotal,
            shipping_remainder,
            progress_percent,
            item_count: cart.item_count(),
            free_shipping_unlocked: shipping_remainder.is_zero(),
        }
    }
}

/// Derived totals for the cart drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of all line totals.
    pub subtotal: Decimal,
    /// Amount still needed for free shipping, never negative.
    pub shipping_remainder: Decimal,
    /// Progress towards free shipping, in `[0, 100]`.
    pub progress_percent: Decimal,
    /// Total number of units.
    pub item_count: u64,
    /// Whether the threshold has been reached.
    pub free_shipping_unlocked: bool,
}
