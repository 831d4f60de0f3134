/// Dot sizing and drag tuning constants.
///
/// Touch values are ratios of the layout tile size so they scale with the
/// board. Mouse values are the engine's stock pixel constants.
// Touch: hit radius is tile_size / RADIUS_DIVISOR
pub const TOUCH_RADIUS_DIVISOR: f32 = 8.0;
// Touch: drag threshold is hit_radius * DRAG_MULTIPLIER
pub const TOUCH_DRAG_MULTIPLIER: f32 = 4.0;

// Mouse defaults baked into the engine (pixels, independent of tile size)
pub const MOUSE_CIRCLE_RADIUS: f32 = 6.0;
pub const MOUSE_DRAG_MULTIPLIER: f32 = 2.0;

// Tile size the engine asks for when the host has no preference
pub const PREFERRED_TILE_SIZE: f32 = 64.0;

// Puzzle whose presentation gets the touch override
pub const UNTANGLE_IDENTIFIER: &str = "untangle";
