//! Per-layout-pass dot metrics.
//!
//! Hosts recompute the tile size on resize, rotation and zoom. `LayoutMetrics`
//! keeps the derived values for the last tile size it saw and recomputes them
//! as soon as a different one is passed in.

use crate::tuning::{DotTuning, DotTuningExt};
use std::sync::Arc;

/// Derived dot sizing for one tile size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotMetrics {
    pub tile_size: f32,
    pub hit_radius: f32,
    pub drag_threshold: f32,
}

pub struct LayoutMetrics {
    tuning: Arc<dyn DotTuning>,
    cached: Option<DotMetrics>,
}

impl LayoutMetrics {
    pub fn new(tuning: Arc<dyn DotTuning>) -> Self {
        Self {
            tuning,
            cached: None,
        }
    }

    pub fn tuning(&self) -> &Arc<dyn DotTuning> {
        &self.tuning
    }

    pub fn cached(&self) -> Option<DotMetrics> {
        self.cached
    }

    /// Metrics for `tile_size`, reusing the cache only for the exact same value.
    /// Non-finite tile sizes are computed but never cached.
    pub fn metrics(&mut self, tile_size: f32) -> DotMetrics {
        if !tile_size.is_finite() {
            log::debug!("[layout] non-finite tile {}, skipping cache", tile_size);
            return self.tuning.metrics(tile_size);
        }
        match self.cached {
            Some(m) if m.tile_size.to_bits() == tile_size.to_bits() => m,
            _ => {
                let m = self.tuning.metrics(tile_size);
                log::debug!(
                    "[layout] tile={:.2} hit_radius={:.3} drag_threshold={:.3}",
                    m.tile_size,
                    m.hit_radius,
                    m.drag_threshold
                );
                self.cached = Some(m);
                m
            }
        }
    }

    pub fn invalidate(&mut self) {
        if self.cached.take().is_some() {
            log::debug!("[layout] dot metrics invalidated");
        }
    }
}

impl std::fmt::Debug for LayoutMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutMetrics")
            .field("cached", &self.cached)
            .finish_non_exhaustive()
    }
}
