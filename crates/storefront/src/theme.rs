//! Scroll-driven navigation theme detection.
//!
//! The navigation bar floats over the page. To stay legible it samples a
//! fixed probe point (the vertical centre of the bar) and adopts the theme of
//! whichever page section currently sits behind that point.
//!
//! Section geometry is supplied as document offsets; on every event the
//! detector converts them to viewport coordinates using the scroll position
//! and runs a linear scan in document order. The last section containing the
//! probe wins, and the theme falls back to [`Theme::Light`] when nothing
//! matches.

use serde::{Deserialize, Serialize};
use snusidea_core::{SectionId, Theme};
use tracing::{debug, instrument, trace};

/// Probe offset from the top of the viewport: 24 px header inset plus half
/// of the 72 px bar.
pub const DEFAULT_PROBE_Y: f64 = 60.0;

/// Position of a section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// Distance from the top of the document to the top of the section.
    pub top_offset: f64,
    /// Rendered height of the section.
    pub height: f64,
}

/// Top and bottom edges of a section relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    pub top: f64,
    pub bottom: f64,
}

impl ViewportBounds {
    /// Inclusive containment on both edges.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && y <= self.bottom
    }
}

impl SectionGeometry {
    /// Project the section into the viewport for a given scroll position.
    ///
    /// Returns `None` when the geometry cannot be used (non-finite values or
    /// a negative height).
    #[must_use]
    pub fn viewport_bounds(&self, scroll_y: f64) -> Option<ViewportBounds> {
        if !self.top_offset.is_finite() || !self.height.is_finite() || self.height < 0.0 {
            return None;
        }
        let top = self.top_offset - scroll_y;
        Some(ViewportBounds {
            top,
            bottom: top + self.height,
        })
    }
}

/// A page section tagged with a theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSection {
    /// Section anchor, e.g. `features`.
    pub id: SectionId,
    /// Theme of the section background.
    pub theme: Theme,
    /// `None` when the section could not be measured (e.g. detached).
    #[serde(default)]
    pub geometry: Option<SectionGeometry>,
}

impl ThemeSection {
    /// A measured section.
    #[must_use]
    pub fn new(id: impl Into<SectionId>, theme: Theme, top_offset: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            theme,
            geometry: Some(SectionGeometry { top_offset, height }),
        }
    }

    /// A section whose geometry is currently unavailable.
    #[must_use]
    pub fn unmeasured(id: impl Into<SectionId>, theme: Theme) -> Self {
        Self {
            id: id.into(),
            theme,
            geometry: None,
        }
    }
}

/// Determine the theme governing the probe point.
///
/// Sections without usable geometry are skipped for this evaluation.
#[must_use]
pub fn detect_theme(sections: &[ThemeSection], scroll_y: f64, probe_y: f64) -> Theme {
    let mut current = Theme::Light;

    for section in sections {
        let Some(bounds) = section
            .geometry
            .and_then(|geometry| geometry.viewport_bounds(scroll_y))
        else {
            trace!(section = %section.id, "Skipping section without geometry");
            continue;
        };

        if bounds.contains(probe_y) {
            current = section.theme;
        }
    }

    current
}

/// Events that trigger a re-evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewportEvent {
    /// Initial check when the bar is mounted.
    Mount { scroll_y: f64 },
    /// The page scrolled.
    Scroll { scroll_y: f64 },
    /// Layout changed; sections were re-measured.
    Resize {
        sections: Vec<ThemeSection>,
        scroll_y: f64,
    },
}

/// Navigation theme state.
///
/// Holds the registered sections and the last evaluated theme. Transitions
/// happen only through [`ThemeZoneDetector::handle`].
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeZoneDetector {
    probe_y: f64,
    sections: Vec<ThemeSection>,
    scroll_y: f64,
    theme: Theme,
}

impl ThemeZoneDetector {
    /// Create a detector for sections in document order.
    ///
    /// The theme is [`Theme::Light`] until the first event.
    #[must_use]
    pub const fn new(probe_y: f64, sections: Vec<ThemeSection>) -> Self {
        Self {
            probe_y,
            sections,
            scroll_y: 0.0,
            theme: Theme::Light,
        }
    }

    /// The theme from the last evaluation.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Scroll position of the last evaluation.
    #[must_use]
    pub const fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Registered sections.
    #[must_use]
    pub fn sections(&self) -> &[ThemeSection] {
        &self.sections
    }

    /// Appearance of the navigation bar for the current theme.
    #[must_use]
    pub const fn appearance(&self) -> NavAppearance {
        NavAppearance::for_zone(self.theme)
    }

    /// Apply an event and return the re-evaluated state.
    #[must_use]
    #[instrument(skip(self), fields(probe_y = self.probe_y))]
    pub fn handle(&self, event: ViewportEvent) -> Self {
        let mut next = self.clone();
        match event {
            ViewportEvent::Mount { scroll_y } | ViewportEvent::Scroll { scroll_y } => {
                next.scroll_y = scroll_y;
            }
            ViewportEvent::Resize { sections, scroll_y } => {
                next.sections = sections;
                next.scroll_y = scroll_y;
            }
        }

        next.theme = detect_theme(&next.sections, next.scroll_y, next.probe_y);
        if next.theme != self.theme {
            debug!(from = %self.theme, to = %next.theme, "Navigation theme changed");
        }
        next
    }
}

/// How the navigation island renders over a given zone.
///
/// A dark zone behind the bar gets a light island with dark text, and a
/// light zone gets a dark island with light text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavAppearance {
    /// Theme of the island itself.
    pub island: Theme,
    /// Translucent island fill as a CSS colour.
    pub background: &'static str,
    /// Link and logo text colour.
    pub text_color: &'static str,
    /// Colour for secondary labels such as the cart count.
    pub muted_text_color: &'static str,
    /// Whether the logo is colour-inverted to white.
    pub invert_logo: bool,
}

impl NavAppearance {
    /// Appearance over a zone of the given theme.
    #[must_use]
    pub const fn for_zone(zone: Theme) -> Self {
        match zone {
            Theme::Dark => Self {
                island: zone.inverted(),
                background: "rgba(255, 255, 255, 0.65)",
                text_color: "#000",
                muted_text_color: "rgba(0,0,0,0.7)",
                invert_logo: false,
            },
            Theme::Light => Self {
                island: zone.inverted(),
                background: "rgba(0, 0, 0, 0.65)",
                text_color: "#fff",
                muted_text_color: "rgba(255,255,255,0.7)",
                invert_logo: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<ThemeSection> {
        vec![
            ThemeSection::new("hero", Theme::Light, 0.0, 800.0),
            ThemeSection::new("feature", Theme::Dark, 800.0, 600.0),
            ThemeSection::new("grid", Theme::Light, 1400.0, 700.0),
        ]
    }

    #[test]
    fn test_top_of_page_is_light() {
        assert_eq!(detect_theme(&page(), 0.0, DEFAULT_PROBE_Y), Theme::Light);
    }

    #[test]
    fn test_dark_section_under_probe() {
        assert_eq!(detect_theme(&page(), 900.0, DEFAULT_PROBE_Y), Theme::Dark);
    }

    #[test]
    fn test_edges_are_inclusive() {
        // feature top lands exactly on the probe
        assert_eq!(detect_theme(&page(), 740.0, DEFAULT_PROBE_Y), Theme::Dark);

        let only_dark = vec![ThemeSection::new("cta", Theme::Dark, 0.0, 60.0)];
        // bottom edge exactly on the probe
        assert_eq!(detect_theme(&only_dark, 0.0, DEFAULT_PROBE_Y), Theme::Dark);
        assert_eq!(detect_theme(&only_dark, 0.5, DEFAULT_PROBE_Y), Theme::Light);
    }

    #[test]
    fn test_overlapping_zones_last_declared_wins() {
        let sections = vec![
            ThemeSection::new("a", Theme::Light, 0.0, 500.0),
            ThemeSection::new("b", Theme::Dark, 0.0, 500.0),
        ];
        assert_eq!(detect_theme(&sections, 0.0, DEFAULT_PROBE_Y), Theme::Dark);

        let reversed = vec![
            ThemeSection::new("b", Theme::Dark, 0.0, 500.0),
            ThemeSection::new("a", Theme::Light, 0.0, 500.0),
        ];
        assert_eq!(detect_theme(&reversed, 0.0, DEFAULT_PROBE_Y), Theme::Light);
    }

    #[test]
    fn test_no_match_defaults_to_light() {
        let sections = vec![ThemeSection::new("footer", Theme::Dark, 5000.0, 300.0)];
        assert_eq!(detect_theme(&sections, 0.0, DEFAULT_PROBE_Y), Theme::Light);
        assert_eq!(detect_theme(&[], 0.0, DEFAULT_PROBE_Y), Theme::Light);
    }

    #[test]
    fn test_unmeasured_section_is_excluded() {
        let sections = vec![
            ThemeSection::new("hero", Theme::Dark, 0.0, 800.0),
            ThemeSection::unmeasured("detached", Theme::Light),
        ];
        assert_eq!(detect_theme(&sections, 0.0, DEFAULT_PROBE_Y), Theme::Dark);
    }

    #[test]
    fn test_invalid_geometry_is_excluded() {
        let sections = vec![
            ThemeSection::new("hero", Theme::Dark, 0.0, 800.0),
            ThemeSection::new("nan", Theme::Light, f64::NAN, 800.0),
            ThemeSection::new("negative", Theme::Light, 0.0, -10.0),
        ];
        assert_eq!(detect_theme(&sections, 0.0, DEFAULT_PROBE_Y), Theme::Dark);
    }

    #[test]
    fn test_detector_transitions() {
        let detector = ThemeZoneDetector::new(DEFAULT_PROBE_Y, page());
        let mounted = detector.handle(ViewportEvent::Mount { scroll_y: 0.0 });
        assert_eq!(mounted.theme(), Theme::Light);

        let scrolled = mounted.handle(ViewportEvent::Scroll { scroll_y: 1000.0 });
        assert_eq!(scrolled.theme(), Theme::Dark);
        assert_eq!(mounted.theme(), Theme::Light);
    }

    #[test]
    fn test_detector_is_idempotent() {
        let detector = ThemeZoneDetector::new(DEFAULT_PROBE_Y, page())
            .handle(ViewportEvent::Scroll { scroll_y: 1000.0 });
        let again = detector.handle(ViewportEvent::Scroll { scroll_y: 1000.0 });
        assert_eq!(again, detector);
    }

    #[test]
    fn test_resize_replaces_sections() {
        let detector = ThemeZoneDetector::new(DEFAULT_PROBE_Y, page())
            .handle(ViewportEvent::Scroll { scroll_y: 1000.0 });
        assert_eq!(detector.theme(), Theme::Dark);
        assert!((detector.scroll_y() - 1000.0).abs() < f64::EPSILON);

        // Hero grows on a narrow viewport and now covers the probe
        let resized = detector.handle(ViewportEvent::Resize {
            sections: vec![
                ThemeSection::new("hero", Theme::Light, 0.0, 1200.0),
                ThemeSection::new("feature", Theme::Dark, 1200.0, 600.0),
            ],
            scroll_y: 1000.0,
        });
        assert_eq!(resized.theme(), Theme::Light);
        assert_eq!(resized.sections().len(), 2);
    }

    #[test]
    fn test_appearance_inverts_zone() {
        let over_dark = NavAppearance::for_zone(Theme::Dark);
        assert_eq!(over_dark.island, Theme::Light);
        assert!(!over_dark.invert_logo);
        assert_eq!(over_dark.background, "rgba(255, 255, 255, 0.65)");

        let over_light = NavAppearance::for_zone(Theme::Light);
        assert_eq!(over_light.island, Theme::Dark);
        assert!(over_light.invert_logo);
    }
}
