//! Overlay open/close state for the header.
//!
//! The header owns three overlays: the cart drawer, the full-screen search
//! overlay and the mobile menu. They stack as search > cart > menu, and
//! Escape closes the topmost open one.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Viewport width below which mobile layouts apply, in px.
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;

/// Keys the header reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Closes the topmost overlay.
    Escape,
    /// Any key the header ignores.
    Other,
}

/// Header interaction events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OverlayEvent {
    /// The cart button was pressed.
    OpenCart,
    /// The drawer close button or backdrop was pressed.
    CloseCart,
    /// The search button was pressed.
    OpenSearch,
    /// The search close button or backdrop was pressed.
    CloseSearch,
    /// The mobile menu button was pressed.
    ToggleMenu,
    /// A link inside the mobile menu was followed.
    MenuLinkSelected,
    /// A key was pressed while the page had focus.
    KeyPressed { key: Key },
}

/// Which overlays are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayState {
    /// Cart drawer is showing.
    pub cart_open: bool,
    /// Search overlay is showing.
    pub search_open: bool,
    /// Mobile menu is expanded.
    pub menu_open: bool,
}

impl OverlayState {
    /// Apply an event and return the new state.
    #[must_use]
    pub fn handle(self, event: OverlayEvent) -> Self {
        let mut next = self;
        match event {
            OverlayEvent::OpenCart => next.cart_open = true,
            OverlayEvent::CloseCart => next.cart_open = false,
            OverlayEvent::OpenSearch => next.search_open = true,
            OverlayEvent::CloseSearch => next.search_open = false,
            OverlayEvent::ToggleMenu => next.menu_open = !self.menu_open,
            OverlayEvent::MenuLinkSelected => next.menu_open = false,
            OverlayEvent::KeyPressed { key: Key::Escape } => {
                if next.search_open {
                    next.search_open = false;
                } else if next.cart_open {
                    next.cart_open = false;
                } else {
                    next.menu_open = false;
                }
            }
            OverlayEvent::KeyPressed { key: Key::Other } => {}
        }
        if next != self {
            debug!(?event, ?next, "Overlay state changed");
        }
        next
    }

    /// Page scrolling is locked while the search overlay is open.
    #[must_use]
    pub const fn scroll_locked(&self) -> bool {
        self.search_open
    }

    /// The header island is blurred behind the open cart drawer.
    #[must_use]
    pub const fn header_blurred(&self) -> bool {
        self.cart_open
    }

    /// Whether any overlay is open.
    #[must_use]
    pub const fn any_open(&self) -> bool {
        self.cart_open || self.search_open || self.menu_open
    }
}

/// Where the cart drawer slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawerPlacement {
    /// Full-width sheet rising from the bottom (mobile).
    BottomSheet,
    /// Floating panel on the right edge (desktop).
    SidePanel,
}

impl DrawerPlacement {
    /// Placement for a viewport width; recomputed on every resize.
    #[must_use]
    pub fn for_viewport(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Self::BottomSheet
        } else {
            Self::SidePanel
        }
    }
}
