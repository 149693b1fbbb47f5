//! Carousel drag range.

use serde::Serialize;
use snusidea_storefront::carousel::DragBounds;
use snusidea_storefront::config::StorefrontConfig;

use super::emit;

#[derive(Serialize)]
struct CarouselOutput {
    bounds: DragBounds,
    padding: f64,
    elasticity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    resisted_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    settled_offset: Option<f64>,
}

/// Print the drag bounds, and where a given offset lands while dragging and
/// after release.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn run(
    config: &StorefrontConfig,
    content_width: f64,
    viewport_width: f64,
    offset: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let bounds = DragBounds::compute(content_width, viewport_width, config.carousel_padding);

    emit(&CarouselOutput {
        bounds,
        padding: config.carousel_padding,
        elasticity: config.carousel_elasticity,
        resisted_offset: offset.map(|x| bounds.resist(x, config.carousel_elasticity)),
        settled_offset: offset.map(|x| bounds.clamp(x)),
    })?;
    Ok(())
}
