//! Search overlay query.

use snusidea_storefront::catalog;
use snusidea_storefront::search::{SearchState, search};
use tracing::info;

use super::emit;

/// Print suggestions or matching products for a query.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn run(query: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = search(query, &catalog::products());
    if let SearchState::Results(results) = &state {
        for result in results {
            info!(product = %result.product.name, matched_on = %result.matched_on, "Match");
        }
    }
    emit(&state)?;
    Ok(())
}
