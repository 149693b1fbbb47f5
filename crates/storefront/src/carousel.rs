//! Horizontal carousel drag bounds.
//!
//! The product carousel can be dragged left until its last card (plus a
//! padding buffer) is visible, and never right of its resting position.
//! Dragging past either bound is resisted elastically; on release the track
//! settles back inside the range.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Extra drag room past the last card, in px.
pub const DEFAULT_PADDING: f64 = 32.0;

/// Fraction of overscroll applied while out of bounds.
pub const DEFAULT_ELASTICITY: f64 = 0.1;

/// Permissible horizontal drag offsets, `min <= 0 == max`.
///
/// Only built by [`DragBounds::compute`], which keeps `min` finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DragBounds {
    min: f64,
    max: f64,
}

impl DragBounds {
    /// Compute `[-(content_width - viewport_width + padding), 0]`.
    ///
    /// When the content fits in the viewport the range collapses to `[0, 0]`.
    #[must_use]
    pub fn compute(content_width: f64, viewport_width: f64, padding: f64) -> Self {
        let overflow = content_width - viewport_width + padding;
        let min = if overflow.is_finite() && overflow > 0.0 {
            -overflow
        } else {
            0.0
        };
        Self { min, max: 0.0 }
    }

    /// Leftmost offset the track may rest at.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Rightmost offset the track may rest at (always 0).
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Hard clamp into the range.
    #[must_use]
    pub fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return self.max;
        }
        offset.max(self.min).min(self.max)
    }

    /// Whether `offset` lies inside the range (inclusive).
    #[must_use]
    pub fn contains(&self, offset: f64) -> bool {
        self.min <= offset && offset <= self.max
    }

    /// Apply elastic resistance to an offset outside the range.
    ///
    /// Inside the range the offset is returned unchanged; outside it moves
    /// `elasticity` times as far as the pointer past the nearest bound.
    #[must_use]
    pub fn resist(&self, offset: f64, elasticity: f64) -> f64 {
        if offset > self.max {
            self.max + (offset - self.max) * elasticity
        } else if offset < self.min {
            self.min + (offset - self.min) * elasticity
        } else {
            offset
        }
    }

    /// Width of the draggable range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Pointer and layout events for the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CarouselEvent {
    /// Content or viewport size changed.
    Resize {
        content_width: f64,
        viewport_width: f64,
    },
    /// Pointer pressed at `x`.
    DragStart { x: f64 },
    /// Pointer moved to `x` while pressed.
    DragMove { x: f64 },
    /// Pointer released.
    DragEnd,
}

/// Drag state of the carousel track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarouselState {
    bounds: DragBounds,
    padding: f64,
    elasticity: f64,
    /// Offset currently applied to the track.
    offset: f64,
    /// Pointer x and track offset when the drag began.
    drag_origin: Option<(f64, f64)>,
}

impl CarouselState {
    /// Create a resting carousel for the given sizes.
    #[must_use]
    pub fn new(content_width: f64, viewport_width: f64, padding: f64, elasticity: f64) -> Self {
        Self {
            bounds: DragBounds::compute(content_width, viewport_width, padding),
            padding,
            elasticity,
            offset: 0.0,
            drag_origin: None,
        }
    }

    #[must_use]
    pub const fn bounds(&self) -> DragBounds {
        self.bounds
    }

    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Apply an event and return the new state.
    #[must_use]
    pub fn handle(&self, event: CarouselEvent) -> Self {
        let mut next = *self;
        match event {
            CarouselEvent::Resize {
                content_width,
                viewport_width,
            } => {
                next.bounds = DragBounds::compute(content_width, viewport_width, self.padding);
                if !next.is_dragging() {
                    next.offset = next.bounds.clamp(next.offset);
                }
                debug!(min = next.bounds.min(), "Recomputed carousel drag bounds");
            }
            CarouselEvent::DragStart { x } => {
                next.drag_origin = Some((x, self.offset));
            }
            CarouselEvent::DragMove { x } => {
                if let Some((start_x, start_offset)) = self.drag_origin {
                    let raw = start_offset + (x - start_x);
                    next.offset = next.bounds.resist(raw, self.elasticity);
                }
            }
            CarouselEvent::DragEnd => {
                next.drag_origin = None;
                next.offset = next.bounds.clamp(self.offset);
            }
        }
        next
    }
}
