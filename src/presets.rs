use crate::constants::UNTANGLE_IDENTIFIER;
use crate::layout::LayoutMetrics;
use crate::tuning::{DotTuning, MouseTuning, TouchTuning};
use std::sync::Arc;

/// Per-puzzle presentation settings handed to the engine at construction.
#[derive(Clone)]
pub struct PuzzlePresentation {
    pub identifier: String,
    // Puzzles that move pieces with one finger need two-finger panning instead
    pub allow_single_finger_panning: bool,
    pub tuning: Arc<dyn DotTuning>,
}

impl PuzzlePresentation {
    pub fn untangle() -> Self {
        Self {
            identifier: UNTANGLE_IDENTIFIER.to_string(),
            allow_single_finger_panning: false,
            tuning: Arc::new(TouchTuning::default()),
        }
    }

    /// Engine defaults for any puzzle without an override.
    pub fn engine_default(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            allow_single_finger_panning: false,
            tuning: Arc::new(MouseTuning),
        }
    }

    pub fn with_single_finger_panning(mut self, allow: bool) -> Self {
        self.allow_single_finger_panning = allow;
        self
    }

    pub fn layout(&self) -> LayoutMetrics {
        LayoutMetrics::new(self.tuning.clone())
    }
}

impl std::fmt::Debug for PuzzlePresentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PuzzlePresentation")
            .field("identifier", &self.identifier)
            .field(
                "allow_single_finger_panning",
                &self.allow_single_finger_panning,
            )
            .finish_non_exhaustive()
    }
}

/// Resolve the presentation for a puzzle identifier (case-insensitive).
pub fn presentation_for(identifier: &str) -> PuzzlePresentation {
    if identifier.eq_ignore_ascii_case(UNTANGLE_IDENTIFIER) {
        log::info!("[presets] {} -> touch tuning", UNTANGLE_IDENTIFIER);
        PuzzlePresentation::untangle()
    } else {
        log::info!("[presets] {} -> engine defaults", identifier);
        PuzzlePresentation::engine_default(identifier)
    }
}
