//! Cart state and transitions.
//!
//! A [`Cart`] is an ordered list of [`LineItem`]s owned by the current view.
//! Every transition borrows the current cart and returns a new one, so a
//! failed transition always leaves the caller's cart untouched.

mod pricing;
mod view;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use snusidea_core::LineItemId;
use thiserror::Error;
use tracing::{debug, instrument};

pub use pricing::{CartTotals, DEFAULT_FREE_SHIPPING_THRESHOLD, ShippingPolicy};
pub use view::{CartItemView, CartView};

/// Errors returned by cart transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The transition referenced a line item that is not in the cart.
    #[error("line item not found: {0}")]
    NotFound(LineItemId),
}

/// One product/variant/quantity entry in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Stable identifier of this cart entry.
    pub id: LineItemId,
    /// Product name shown in the drawer.
    #[serde(default)]
    pub name: String,
    /// Variant description (flavour, strength).
    #[serde(default)]
    pub variant: String,
    /// Price of a single unit.
    pub unit_price: Decimal,
    /// Number of units, at least 1 once the item is in a cart.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item with an empty name and variant.
    #[must_use]
    pub fn new(id: impl Into<LineItemId>, unit_price: Decimal, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            variant: String::new(),
            unit_price,
            quantity,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the variant description.
    #[must_use]
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    /// `unit_price * quantity`, computed exactly.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// A cart transition, as produced by the drawer controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    /// Add an item, merging with an existing entry of the same id.
    Add { item: LineItem },
    /// Replace the quantity of an entry; non-positive removes it.
    SetQuantity { id: LineItemId, quantity: i64 },
    /// The "+" button.
    Increment { id: LineItemId },
    /// The "-" button; going below 1 removes the entry.
    Decrement { id: LineItemId },
    /// The trash button.
    Remove { id: LineItemId },
    /// Empty the cart.
    Clear,
}

/// An ordered, session-local shopping cart.
///
/// Deserialized carts are rebuilt through [`Cart::from_items`], so duplicate
/// ids merge and zero quantities become 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CartRepr")]
pub struct Cart {
    items: Vec<LineItem>,
}

#[derive(Deserialize)]
struct CartRepr {
    #[serde(default)]
    items: Vec<LineItem>,
}

impl From<CartRepr> for Cart {
    fn from(repr: CartRepr) -> Self {
        Self::from_items(repr.items)
    }
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart by adding each item in order.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        items
            .into_iter()
            .fold(Self::new(), |cart, item| cart.add_item(item))
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Check if cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total number of units across all entries.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |sum, item| sum.saturating_add(item.line_total()))
    }

    /// Totals against the default free-shipping threshold.
    #[must_use]
    pub fn compute_totals(&self) -> CartTotals {
        ShippingPolicy::default().totals(self)
    }

    /// Add an item.
    ///
    /// If an entry with the same id exists its quantity grows by
    /// `item.quantity`; otherwise the item is appended. A zero quantity is
    /// treated as 1.
    #[must_use]
    pub fn add_item(&self, mut item: LineItem) -> Self {
        item.quantity = item.quantity.max(1);
        let mut next = self.clone();

        if let Some(existing) = next.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
            debug!(id = %existing.id, quantity = existing.quantity, "Merged cart item");
        } else {
            debug!(id = %item.id, quantity = item.quantity, "Appended cart item");
            next.items.push(item);
        }
        next
    }

    /// Replace the quantity of an entry.
    ///
    /// A quantity of zero or less removes the entry.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if no entry has this id.
    pub fn set_quantity(&self, id: &LineItemId, quantity: i64) -> Result<Self, CartError> {
        let index = self.position(id)?;

        if quantity <= 0 {
            return Ok(self.remove_item(id));
        }

        let mut next = self.clone();
        if let Some(item) = next.items.get_mut(index) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            debug!(%id, quantity = item.quantity, "Set cart item quantity");
        }
        Ok(next)
    }

    /// Increase an entry's quantity by one.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if no entry has this id.
    pub fn increment(&self, id: &LineItemId) -> Result<Self, CartError> {
        let current = self.get(id).ok_or_else(|| CartError::NotFound(id.clone()))?;
        self.set_quantity(id, i64::from(current.quantity) + 1)
    }

    /// Decrease an entry's quantity by one, removing it below 1.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if no entry has this id.
    pub fn decrement(&self, id: &LineItemId) -> Result<Self, CartError> {
        let current = self.get(id).ok_or_else(|| CartError::NotFound(id.clone()))?;
        self.set_quantity(id, i64::from(current.quantity) - 1)
    }

    /// Remove an entry. Removing an absent id is a no-op.
    #[must_use]
    pub fn remove_item(&self, id: &LineItemId) -> Self {
        let mut next = self.clone();
        next.items.retain(|item| &item.id != id);
        if next.items.len() < self.items.len() {
            debug!(%id, "Removed cart item");
        }
        next
    }

    /// Remove every entry.
    #[must_use]
    pub const fn clear(&self) -> Self {
        Self::new()
    }

    /// Apply a drawer event and return the resulting cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] for quantity changes on absent ids.
    #[instrument(skip(self), fields(items = self.items.len()))]
    pub fn apply(&self, event: CartEvent) -> Result<Self, CartError> {
        match event {
            CartEvent::Add { item } => Ok(self.add_item(item)),
            CartEvent::SetQuantity { id, quantity } => self.set_quantity(&id, quantity),
            CartEvent::Increment { id } => self.increment(&id),
            CartEvent::Decrement { id } => self.decrement(&id),
            CartEvent::Remove { id } => Ok(self.remove_item(&id)),
            CartEvent::Clear => Ok(self.clear()),
        }
    }

    fn position(&self, id: &LineItemId) -> Result<usize, CartError> {
        self.items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| CartError::NotFound(id.clone()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(id: &str, cents: i64, quantity: u32) -> LineItem {
        LineItem::new(id, Decimal::new(cents, 2), quantity)
    }

    #[test]
    fn test_add_appends_in_order() {
        let cart = Cart::new().add_item(item("a", 999, 1)).add_item(item("b", 1199, 1));
        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_add_existing_merges_quantity() {
        let cart = Cart::new()
            .add_item(item("a", 999, 2))
            .add_item(item("b", 1199, 1))
            .add_item(item("a", 999, 3));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get(&"a".into()).unwrap().quantity, 5);
        assert_eq!(cart.items()[0].id.as_str(), "a");
    }

    #[test]
    fn test_add_zero_quantity_is_normalized() {
        let cart = Cart::new().add_item(item("a", 999, 0));
        assert_eq!(cart.get(&"a".into()).unwrap().quantity, 1);
    }

    #[test]
    fn test_add_does_not_touch_original() {
        let original = Cart::new().add_item(item("a", 999, 1));
        let _next = original.add_item(item("a", 999, 1));
        assert_eq!(original.get(&"a".into()).unwrap().quantity, 1);
    }

    #[test]
    fn test_set_quantity_replaces() {
        let cart = Cart::new().add_item(item("a", 999, 2));
        let cart = cart.set_quantity(&"a".into(), 7).unwrap();
        assert_eq!(cart.get(&"a".into()).unwrap().quantity, 7);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let cart = Cart::new().add_item(item("a", 999, 2)).add_item(item("b", 500, 1));
        let cart = cart.set_quantity(&"a".into(), 0).unwrap();
        assert!(cart.get(&"a".into()).is_none());
        assert_eq!(cart.subtotal(), Decimal::new(500, 2));
    }

    #[test]
    fn test_set_quantity_negative_removes() {
        let cart = Cart::new().add_item(item("a", 999, 2));
        let cart = cart.set_quantity(&"a".into(), -3).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_absent_is_not_found() {
        let cart = Cart::new().add_item(item("a", 999, 2));
        let err = cart.set_quantity(&"missing".into(), 3).unwrap_err();
        assert_eq!(err, CartError::NotFound("missing".into()));
        assert_eq!(cart.get(&"a".into()).unwrap().quantity, 2);
    }

    #[test]
    fn test_set_quantity_saturates() {
        let cart = Cart::new().add_item(item("a", 1, 1));
        let cart = cart.set_quantity(&"a".into(), i64::MAX).unwrap();
        assert_eq!(cart.get(&"a".into()).unwrap().quantity, u32::MAX);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let cart = Cart::new().add_item(item("a", 999, 2));
        let next = cart.remove_item(&"zzz".into());
        assert_eq!(next, cart);
    }

    #[test]
    fn test_increment_and_decrement() {
        let cart = Cart::new().add_item(item("a", 999, 1));
        let cart = cart.increment(&"a".into()).unwrap();
        assert_eq!(cart.get(&"a".into()).unwrap().quantity, 2);

        let cart = cart.decrement(&"a".into()).unwrap();
        assert_eq!(cart.get(&"a".into()).unwrap().quantity, 1);

        let cart = cart.decrement(&"a".into()).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increment_absent_is_not_found() {
        let cart = Cart::new();
        assert!(matches!(
            cart.increment(&"a".into()),
            Err(CartError::NotFound(_))
        ));
        assert!(matches!(
            cart.decrement(&"a".into()),
            Err(CartError::NotFound(_))
        ));
    }

    #[test]
    fn test_apply_events() {
        let cart = Cart::new()
            .apply(CartEvent::Add { item: item("a", 999, 1) })
            .unwrap()
            .apply(CartEvent::Increment { id: "a".into() })
            .unwrap()
            .apply(CartEvent::Add { item: item("b", 1099, 1) })
            .unwrap()
            .apply(CartEvent::Remove { id: "b".into() })
            .unwrap();
        assert_eq!(cart.item_count(), 2);

        let cleared = cart.apply(CartEvent::Clear).unwrap();
        assert!(cleared.is_empty());
    }

    #[test]
    fn test_event_serde_tagged() {
        let json = r#"{"type":"set_quantity","id":"1","quantity":0}"#;
        let event: CartEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            CartEvent::SetQuantity {
                id: "1".into(),
                quantity: 0
            }
        );
    }

    #[test]
    fn test_line_total() {
        assert_eq!(item("a", 999, 2).line_total(), Decimal::new(1998, 2));
    }

    #[test]
    fn test_subtotal_exact_over_many_items() {
        let cart = Cart::from_items((0..150).map(|i| item(&format!("sku-{i}"), 10, 1)));
        assert_eq!(cart.len(), 150);
        assert_eq!(cart.subtotal(), Decimal::new(1500, 2));
    }

    #[test]
    fn test_deserialize_merges_duplicates_and_zero_quantity() {
        let cart: Cart = serde_json::from_str(
            r#"{"items":[
                {"id":"a","unit_price":"9.99","quantity":1},
                {"id":"a","unit_price":"9.99","quantity":0},
                {"id":"b","unit_price":"11.99","quantity":0}
            ]}"#,
        )
        .unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get(&"a".into()).unwrap().quantity, 2);
        assert_eq!(cart.get(&"b".into()).unwrap().quantity, 1);

        let cart = cart.set_quantity(&"a".into(), 5).unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get(&"a".into()).unwrap().quantity, 5);
    }

    #[test]
    fn test_serde_shape_survives_reload() {
        let cart = Cart::new().add_item(item("a", 999, 2));
        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }
}
