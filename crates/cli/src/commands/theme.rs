//! Navigation theme at a scroll position.
//!
//! The layout file is a YAML list of sections in document order:
//!
//! ```yaml
//! - id: hero
//!   theme: light
//!   geometry: { top_offset: 0, height: 900 }
//! - id: features
//!   theme: dark
//!   geometry: { top_offset: 900, height: 1200 }
//! ```

use std::path::Path;

use serde::Serialize;
use snusidea_core::Theme;
use snusidea_storefront::catalog;
use snusidea_storefront::config::StorefrontConfig;
use snusidea_storefront::theme::{NavAppearance, ThemeSection, ThemeZoneDetector, ViewportEvent};
use tracing::info;

use super::{emit, read_yaml};

#[derive(Serialize)]
struct ThemeOutput {
    scroll_y: f64,
    probe_y: f64,
    theme: Theme,
    appearance: NavAppearance,
}

/// Evaluate the navigation theme and print it with the bar appearance.
///
/// # Errors
///
/// Returns an error if the layout file cannot be read or parsed.
pub fn run(
    config: &StorefrontConfig,
    scroll_y: f64,
    layout_path: Option<&Path>,
    heights: &[f64],
) -> Result<(), Box<dyn std::error::Error>> {
    let sections: Vec<ThemeSection> = match layout_path {
        Some(path) => read_yaml(path)?,
        None => catalog::home_layout(heights),
    };
    info!(sections = sections.len(), "Evaluating navigation theme");

    let detector = ThemeZoneDetector::new(config.nav_probe_y, sections)
        .handle(ViewportEvent::Mount { scroll_y });

    emit(&ThemeOutput {
        scroll_y: detector.scroll_y(),
        probe_y: config.nav_probe_y,
        theme: detector.theme(),
        appearance: detector.appearance(),
    })?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use snusidea_storefront::theme::{DEFAULT_PROBE_Y, detect_theme};

    use super::*;

    #[test]
    fn test_layout_file_shape() {
        let sections: Vec<ThemeSection> = serde_yaml::from_str(
            r"
- id: hero
  theme: light
  geometry: { top_offset: 0, height: 900 }
- id: features
  theme: dark
  geometry: { top_offset: 900, height: 1200 }
- id: detached
  theme: light
",
        )
        .unwrap();
        assert_eq!(sections.len(), 3);
        assert!(sections[2].geometry.is_none());
        assert_eq!(detect_theme(&sections, 1000.0, DEFAULT_PROBE_Y), Theme::Dark);
    }
}
