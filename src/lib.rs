//! Touch-friendly dot sizing for the Untangle puzzle.
//!
//! The engine draws each graph node as a circle and decides between "tap" and
//! "drag" by how far the pointer travels after a press. Its built-in sizes
//! suit a mouse; on a touchscreen both are scaled off the layout tile size
//! instead. Hosts resolve a [`PuzzlePresentation`] and hand its
//! [`DotTuning`] to the engine.

pub mod constants;
pub mod layout;
pub mod presets;
pub mod tuning;

pub use constants::*;
pub use layout::*;
pub use presets::*;
pub use tuning::*;
