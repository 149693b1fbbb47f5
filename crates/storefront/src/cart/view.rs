//! Cart drawer display data.
//!
//! Everything here is formatted for presentation; amounts are rounded to
//! two decimals only at this point.

use rust_decimal::Decimal;
use serde::Serialize;
use snusidea_core::{CurrencyCode, Price};

use super::{Cart, CartTotals, LineItem, ShippingPolicy};

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub variant: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart drawer display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    /// Rows in display order.
    pub items: Vec<CartItemView>,
    /// Units across all rows, shown on the header badge.
    pub item_count: u64,
    /// Formatted subtotal.
    pub subtotal: String,
    /// Formatted total; equals the subtotal until shipping is known.
    pub total: String,
    /// Free-shipping banner text.
    pub shipping_message: String,
    /// Shipping row in the summary.
    pub shipping_label: String,
    /// Width of the progress bar, rounded to two decimals.
    pub progress_percent: Decimal,
    /// Whether the subtotal reached the threshold.
    pub free_shipping_unlocked: bool,
    /// Whether the empty-cart message replaces the item list.
    pub is_empty: bool,
}

impl CartView {
    /// Build the drawer view for a cart.
    #[must_use]
    pub fn new(cart: &Cart, policy: &ShippingPolicy, currency: CurrencyCode) -> Self {
        let totals = policy.totals(cart);
        Self::from_totals(cart, &totals, currency)
    }

    /// Build the drawer view from precomputed totals.
    #[must_use]
    pub fn from_totals(cart: &Cart, totals: &CartTotals, currency: CurrencyCode) -> Self {
        let format = |amount: Decimal| Price::new(amount, currency).display();

        let shipping_message = if totals.free_shipping_unlocked {
            "You've unlocked free shipping!".to_string()
        } else {
            format!(
                "Add {} for free shipping",
                format(totals.shipping_remainder)
            )
        };
        let shipping_label = if totals.free_shipping_unlocked {
            "Free"
        } else {
            "Calculated at checkout"
        };

        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartItemView::new(item, currency))
                .collect(),
            item_count: totals.item_count,
            subtotal: format(totals.subtotal),
            total: format(totals.subtotal),
            shipping_message,
            shipping_label: shipping_label.to_string(),
            progress_percent: totals.progress_percent.round_dp(2),
            free_shipping_unlocked: totals.free_shipping_unlocked,
            is_empty: cart.is_empty(),
        }
    }
}

impl CartItemView {
    fn new(item: &LineItem, currency: CurrencyCode) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            variant: item.variant.clone(),
            quantity: item.quantity,
            price: Price::new(item.unit_price, currency).display(),
            line_price: Price::new(item.line_total(), currency).display(),
        }
    }
}
