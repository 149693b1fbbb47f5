//! Integration tests for header overlays, carousel dragging and search.

use snusidea_storefront::carousel::{CarouselEvent, CarouselState, DragBounds};
use snusidea_storefront::catalog;
use snusidea_storefront::config::StorefrontConfig;
use snusidea_storefront::overlay::{DrawerPlacement, Key, OverlayEvent, OverlayState};
use snusidea_storefront::pointer::{MagneticState, PointerEvent, Rect};
use snusidea_storefront::search::{SearchState, search};

// =============================================================================
// Carousel
// =============================================================================

#[test]
fn test_carousel_drag_range() {
    let bounds = DragBounds::compute(1000.0, 400.0, 32.0);
    assert!((bounds.min() + 632.0).abs() < f64::EPSILON);
    assert!(bounds.max().abs() < f64::EPSILON);
}

#[test]
fn test_carousel_overdrag_is_resisted_then_settles() {
    let config = StorefrontConfig::default();
    let state = CarouselState::new(
        1000.0,
        400.0,
        config.carousel_padding,
        config.carousel_elasticity,
    );

    let dragging = state
        .handle(CarouselEvent::DragStart { x: 800.0 })
        .handle(CarouselEvent::DragMove { x: 68.0 });
    // raw offset -732 is 100 past the bound; only 10% of that applies
    assert!((dragging.offset() + 642.0).abs() < 1e-9);

    let released = dragging.handle(CarouselEvent::DragEnd);
    assert!((released.offset() + 632.0).abs() < 1e-9);
    assert!(released.bounds().contains(released.offset()));
}

// =============================================================================
// Overlays
// =============================================================================

#[test]
fn test_escape_unwinds_overlays() {
    let state = [
        OverlayEvent::OpenCart,
        OverlayEvent::OpenSearch,
        OverlayEvent::KeyPressed { key: Key::Escape },
    ]
    .into_iter()
    .fold(OverlayState::default(), OverlayState::handle);

    assert!(state.cart_open);
    assert!(!state.search_open);
    assert!(!state.scroll_locked());
    assert!(state.header_blurred());
}

#[test]
fn test_drawer_placement_follows_breakpoint() {
    let config = StorefrontConfig::default();
    assert_eq!(
        DrawerPlacement::for_viewport(390.0, config.mobile_breakpoint),
        DrawerPlacement::BottomSheet
    );
    assert_eq!(
        DrawerPlacement::for_viewport(1440.0, config.mobile_breakpoint),
        DrawerPlacement::SidePanel
    );
}

// =============================================================================
// Search and pointer
// =============================================================================

#[test]
fn test_search_typing_sequence() {
    let products = catalog::products();
    assert!(matches!(search("", &products), SearchState::Suggestions(_)));

    let SearchState::Results(results) = search("Mint", &products) else {
        panic!("non-empty query should return results");
    };
    let names: Vec<&str> = results.iter().map(|r| r.product.name.as_str()).collect();
    assert_eq!(names, ["Mint Breeze"]);
}

#[test]
fn test_magnetic_button() {
    let rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 40.0,
        height: 40.0,
    };
    let state = MagneticState::new(rect, 0.1).handle(PointerEvent::Move { x: 40.0, y: 20.0 });
    assert!((state.offset().x - 2.0).abs() < 1e-9);
    assert!(state.offset().y.abs() < 1e-9);
}
