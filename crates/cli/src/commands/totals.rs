//! Cart drawer totals.
//!
//! The cart file is a YAML list of line items:
//!
//! ```yaml
//! - id: "1"
//!   name: Ice Cool
//!   unit_price: "9.99"
//!   quantity: 2
//! ```
//!
//! The events file is a YAML list of tagged drawer events:
//!
//! ```yaml
//! - type: increment
//!   id: "1"
//! - type: set_quantity
//!   id: "2"
//!   quantity: 0
//! ```

use std::path::Path;

use serde::Serialize;
use snusidea_storefront::StorefrontError;
use snusidea_storefront::cart::{Cart, CartEvent, CartTotals, CartView, LineItem, ShippingPolicy};
use snusidea_storefront::catalog;
use snusidea_storefront::config::StorefrontConfig;
use tracing::{info, warn};

use super::{emit, read_yaml};

#[derive(Serialize)]
struct TotalsOutput {
    totals: CartTotals,
    view: CartView,
}

/// Load a cart, replay events and print totals with the drawer view.
///
/// # Errors
///
/// Returns an error if a file cannot be read or parsed, or if an event
/// references a line item that is not in the cart.
pub fn run(
    config: &StorefrontConfig,
    cart_path: Option<&Path>,
    events_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = match cart_path {
        Some(path) => {
            let items: Vec<LineItem> = read_yaml(path)?;
            info!(items = items.len(), path = %path.display(), "Loaded cart");
            Cart::from_items(items)
        }
        None => catalog::cart_seed(),
    };

    if let Some(path) = events_path {
        let events: Vec<CartEvent> = read_yaml(path)?;
        info!(events = events.len(), "Replaying drawer events");
        cart = replay(&cart, events)?;
    }

    let policy = ShippingPolicy::new(config.free_shipping_threshold);
    let totals = policy.totals(&cart);
    let view = CartView::from_totals(&cart, &totals, config.currency);

    emit(&TotalsOutput { totals, view })?;
    Ok(())
}

/// Apply events in order, stopping at the first failure.
fn replay(cart: &Cart, events: Vec<CartEvent>) -> Result<Cart, StorefrontError> {
    events.into_iter().try_fold(cart.clone(), |cart, event| {
        cart.apply(event).map_err(|e| {
            warn!(error = %e, "Drawer event rejected");
            StorefrontError::from(e)
        })
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_replay_events_from_yaml() {
        let events: Vec<CartEvent> = serde_yaml::from_str(
            r#"
- type: increment
  id: "1"
- type: set_quantity
  id: "2"
  quantity: 0
"#,
        )
        .unwrap();

        let cart = replay(&catalog::cart_seed(), events).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.subtotal(), Decimal::new(2997, 2));
    }

    #[test]
    fn test_replay_stops_on_missing_item() {
        let events = vec![CartEvent::Decrement { id: "99".into() }];
        let err = replay(&catalog::cart_seed(), events).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_cart_file_shape() {
        let items: Vec<LineItem> = serde_yaml::from_str(
            r#"
- id: "1"
  name: Ice Cool
  unit_price: "9.99"
  quantity: 2
"#,
        )
        .unwrap();
        let totals = Cart::from_items(items).compute_totals();
        assert_eq!(totals.shipping_remainder, Decimal::new(3002, 2));
    }
}
