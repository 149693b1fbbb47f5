//! Search overlay suggestions and results.
//!
//! With an empty query the overlay shows a fixed list of trending
//! suggestions. Once the user types, products are matched case-insensitively
//! on name, category and tagline.

use serde::Serialize;
use tracing::instrument;

use crate::catalog::Product;

/// Trending searches shown before the user types.
pub const SUGGESTIONS: &[&str] = &[
    "Ice Cool",
    "Citrus Burst",
    "Mint",
    "Strong",
    "Berry",
    "Limited Edition",
];

/// Maximum number of result rows the overlay shows.
pub const MAX_RESULTS: usize = 3;

/// Field a result matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    Name,
    Category,
    Tagline,
}

impl MatchField {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Tagline => "tagline",
        }
    }
}

impl std::fmt::Display for MatchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A search result item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub product: Product,
    pub matched_on: MatchField,
}

/// What the overlay body displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum SearchState {
    Suggestions(Vec<&'static str>),
    Results(Vec<SearchResult>),
}

/// Evaluate a query against the catalog.
#[must_use]
#[instrument(skip(products), fields(products = products.len()))]
pub fn search(query: &str, products: &[Product]) -> SearchState {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchState::Suggestions(SUGGESTIONS.to_vec());
    }

    let results = products
        .iter()
        .filter_map(|product| {
            match_field(product, &needle).map(|matched_on| SearchResult {
                product: product.clone(),
                matched_on,
            })
        })
        .take(MAX_RESULTS)
        .collect();

    SearchState::Results(results)
}

fn match_field(product: &Product, needle: &str) -> Option<MatchField> {
    if product.name.to_lowercase().contains(needle) {
        Some(MatchField::Name)
    } else if product.category.to_lowercase().contains(needle) {
        Some(MatchField::Category)
    } else if product
        .tagline
        .as_deref()
        .is_some_and(|tagline| tagline.to_lowercase().contains(needle))
    {
        Some(MatchField::Tagline)
    } else {
        None
    }
}
