//! Static storefront data.
//!
//! The storefront has no backend: products, the cart seed and the home page
//! section order are fixed literals consumed by the engines as plain input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use snusidea_core::{ProductId, SectionId, Theme};

use crate::cart::{Cart, LineItem};
use crate::theme::ThemeSection;

/// A product as listed on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Strength or flavour family, e.g. `Strong`.
    pub category: String,
    /// One-line pitch shown on carousel cards.
    pub tagline: Option<String>,
    /// Longer copy for the collection grid; `None` for carousel-only items.
    pub description: Option<String>,
    /// Unit price in the store currency.
    pub price: Decimal,
}

impl Product {
    fn new(id: &str, name: &str, category: &str, cents: i64) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            tagline: None,
            description: None,
            price: Decimal::new(cents, 2),
        }
    }

    fn described(mut self, tagline: &str, description: &str) -> Self {
        self.tagline = Some(tagline.to_string());
        self.description = Some(description.to_string());
        self
    }
}

/// Every product, in carousel order.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product::new("1", "Ice Cool", "Essentials", 999).described(
            "Arctic Freshness",
            "A piercing wave of mint that cools instantly.",
        ),
        Product::new("2", "Freeze Edition", "Strong", 1199).described(
            "Maximum Strength",
            "For those who demand the strongest kick.",
        ),
        Product::new("3", "Berry Frost", "Fruity", 1099)
            .described("Sweet & Sharp", "Wild berries with a hint of menthol."),
        Product::new("4", "Citrus Burst", "Citrus", 999).described(
            "Zesty Energy",
            "Sun-ripened lemons with a lime twist.",
        ),
        Product::new("5", "Mint Breeze", "Fresh", 999),
    ]
}

/// Products shown in the collection grid.
#[must_use]
pub fn collection() -> Vec<Product> {
    products()
        .into_iter()
        .filter(|product| product.description.is_some())
        .collect()
}

/// The cart the drawer opens with.
#[must_use]
pub fn cart_seed() -> Cart {
    Cart::from_items([
        LineItem::new("1", Decimal::new(999, 2), 2)
            .with_name("Ice Cool")
            .with_variant("Arctic Freshness • 12mg"),
        LineItem::new("2", Decimal::new(999, 2), 1)
            .with_name("Citrus Burst")
            .with_variant("Zesty Energy • 8mg"),
    ])
}

/// Home page sections in document order with their themes.
#[must_use]
pub fn home_sections() -> Vec<(SectionId, Theme)> {
    [
        ("hero", Theme::Light),
        ("latest-arrivals", Theme::Light),
        ("features", Theme::Dark),
        ("collection", Theme::Light),
        ("how-to-use", Theme::Dark),
        ("cta", Theme::Dark),
    ]
    .into_iter()
    .map(|(id, theme)| (SectionId::new(id), theme))
    .collect()
}

/// Stack the home sections using measured heights.
///
/// Sections are laid out back to back from the top of the document. A
/// section without a corresponding height is treated as unmeasured.
#[must_use]
pub fn home_layout(heights: &[f64]) -> Vec<ThemeSection> {
    let mut top = 0.0;
    home_sections()
        .into_iter()
        .enumerate()
        .map(|(index, (id, theme))| match heights.get(index) {
            Some(&height) => {
                let section = ThemeSection::new(id, theme, top, height);
                top += height;
                section
            }
            None => ThemeSection::unmeasured(id, theme),
        })
        .collect()
}
