//! Integration tests for the SnusIdea storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p snusidea-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_cart` - Cart transitions, totals and drawer view together
//! - `storefront_navigation` - Theme detection over the home page layout
//! - `storefront_interactions` - Overlays, carousel and search driven by event streams
//!
//! The helpers below build common fixtures shared by those files.

use rust_decimal::Decimal;
use snusidea_storefront::cart::LineItem;

/// A line item priced in cents.
#[must_use]
pub fn line_item(id: &str, cents: i64, quantity: u32) -> LineItem {
    LineItem::new(id, Decimal::new(cents, 2), quantity)
}

/// Parse a decimal literal used in assertions.
///
/// # Panics
///
/// Panics if `value` is not a valid decimal literal.
#[must_use]
#[allow(clippy::expect_used)]
pub fn dec(value: &str) -> Decimal {
    value.parse().expect("valid decimal literal")
}
