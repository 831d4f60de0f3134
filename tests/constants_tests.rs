// Sanity checks on tuning constants and their relationships.

use untangle_touch::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_positive() {
    assert!(TOUCH_RADIUS_DIVISOR > 0.0);
    assert!(TOUCH_DRAG_MULTIPLIER > 0.0);
    assert!(MOUSE_CIRCLE_RADIUS > 0.0);
    assert!(MOUSE_DRAG_MULTIPLIER > 0.0);
    assert!(PREFERRED_TILE_SIZE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // A drag must start outside the dot, not inside it
    assert!(TOUCH_DRAG_MULTIPLIER > 1.0);
    assert!(MOUSE_DRAG_MULTIPLIER > 1.0);

    // Touch tolerates more finger travel before a tap turns into a drag
    assert!(TOUCH_DRAG_MULTIPLIER > MOUSE_DRAG_MULTIPLIER);

    // At the preferred tile size, touch dots are bigger than mouse dots
    assert!(PREFERRED_TILE_SIZE / TOUCH_RADIUS_DIVISOR > MOUSE_CIRCLE_RADIUS);
}

#[test]
fn touch_factors_combine_to_half_a_tile() {
    assert_eq!(TOUCH_DRAG_MULTIPLIER / TOUCH_RADIUS_DIVISOR, 0.5);
}
