//! Magnetic hover offsets for header buttons.
//!
//! While the pointer is over a magnetic element, the element is pulled a
//! fraction of the way towards the pointer.

use serde::{Deserialize, Serialize};

/// Fraction of the pointer's distance from centre applied as offset.
pub const DEFAULT_MAGNETIC_STRENGTH: f64 = 0.1;

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of an element in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }
}

/// Translation for a magnetic element given the pointer position.
#[must_use]
pub fn magnetic_offset(pointer: Point, rect: &Rect, strength: f64) -> Point {
    let center = rect.center();
    Point::new(
        (pointer.x - center.x) * strength,
        (pointer.y - center.y) * strength,
    )
}

/// Pointer events over a magnetic element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Move { x: f64, y: f64 },
    Leave,
}

/// Current translation of a magnetic element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MagneticState {
    rect: Rect,
    strength: f64,
    offset: Point,
}

impl MagneticState {
    #[must_use]
    pub fn new(rect: Rect, strength: f64) -> Self {
        Self {
            rect,
            strength,
            offset: Point::default(),
        }
    }

    #[must_use]
    pub const fn offset(&self) -> Point {
        self.offset
    }

    #[must_use]
    pub fn handle(&self, event: PointerEvent) -> Self {
        let offset = match event {
            PointerEvent::Move { x, y } => {
                magnetic_offset(Point::new(x, y), &self.rect, self.strength)
            }
            PointerEvent::Leave => Point::default(),
        };
        Self { offset, ..*self }
    }
}
