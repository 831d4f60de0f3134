//! Dot hit-radius and drag-threshold policies.
//!
//! The puzzle engine asks a [`DotTuning`] for both values whenever it draws a
//! dot or classifies a press-and-move gesture. [`TouchTuning`] scales them off
//! the current tile size; [`MouseTuning`] keeps the engine's fixed pixel sizes.

use crate::constants::{
    MOUSE_CIRCLE_RADIUS, MOUSE_DRAG_MULTIPLIER, TOUCH_DRAG_MULTIPLIER, TOUCH_RADIUS_DIVISOR,
};
use crate::layout::DotMetrics;
use thiserror::Error;

/// Hit radius for touch input: `tile_size / 8`.
#[inline]
pub fn hit_radius(tile_size: f32) -> f32 {
    tile_size / TOUCH_RADIUS_DIVISOR
}

/// Drag threshold for touch input: four hit radii, i.e. `tile_size / 2`.
#[inline]
pub fn drag_threshold(tile_size: f32) -> f32 {
    hit_radius(tile_size) * TOUCH_DRAG_MULTIPLIER
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TuningError {
    #[error("parameter '{param}' must be finite")]
    NonFinite { param: &'static str },
    #[error("parameter '{param}' must be positive, got {got}")]
    NotPositive { param: &'static str, got: f32 },
    #[error("parameter '{param}' is subnormal, got {got:e}")]
    Subnormal { param: &'static str, got: f32 },
}

/// Substitution point for the engine's dot sizing.
///
/// Implementors supply only the radius and the multiplier. The threshold and
/// the metrics snapshot come from [`DotTuningExt`], which has a blanket impl
/// and cannot be overridden.
pub trait DotTuning: Send + Sync {
    fn hit_radius(&self, tile_size: f32) -> f32;

    fn drag_multiplier(&self) -> f32;
}

pub trait DotTuningExt {
    fn metrics(&self, tile_size: f32) -> DotMetrics;

    fn drag_threshold(&self, tile_size: f32) -> f32 {
        self.metrics(tile_size).drag_threshold
    }
}

impl<T: DotTuning + ?Sized> DotTuningExt for T {
    fn metrics(&self, tile_size: f32) -> DotMetrics {
        let hit_radius = self.hit_radius(tile_size);
        DotMetrics {
            tile_size,
            hit_radius,
            drag_threshold: hit_radius * self.drag_multiplier(),
        }
    }
}

/// Injected configuration for [`TouchTuning`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TuningParams {
    pub radius_divisor: f32,
    pub drag_multiplier: f32,
}

impl Default for TuningParams {
    fn default() -> Self {
        Self {
            radius_divisor: TOUCH_RADIUS_DIVISOR,
            drag_multiplier: TOUCH_DRAG_MULTIPLIER,
        }
    }
}

impl TuningParams {
    fn validate(&self) -> Result<(), TuningError> {
        check_factor("radius_divisor", self.radius_divisor)?;
        check_factor("drag_multiplier", self.drag_multiplier)
    }
}

#[inline]
fn check_factor(param: &'static str, got: f32) -> Result<(), TuningError> {
    if !got.is_finite() {
        return Err(TuningError::NonFinite { param });
    }
    if got <= 0.0 {
        return Err(TuningError::NotPositive { param, got });
    }
    // Subnormal divisors overflow to infinity for ordinary tile sizes
    if !got.is_normal() {
        return Err(TuningError::Subnormal { param, got });
    }
    Ok(())
}

/// Tile-relative sizing for finger input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchTuning {
    params: TuningParams,
}

impl TouchTuning {
    pub fn new(params: TuningParams) -> Result<Self, TuningError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> TuningParams {
        self.params
    }
}

impl DotTuning for TouchTuning {
    #[inline]
    fn hit_radius(&self, tile_size: f32) -> f32 {
        tile_size / self.params.radius_divisor
    }

    #[inline]
    fn drag_multiplier(&self) -> f32 {
        self.params.drag_multiplier
    }
}

/// The engine's stock sizing, tuned for a mouse pointer. Ignores tile size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseTuning;

impl DotTuning for MouseTuning {
    #[inline]
    fn hit_radius(&self, _tile_size: f32) -> f32 {
        MOUSE_CIRCLE_RADIUS
    }

    #[inline]
    fn drag_multiplier(&self) -> f32 {
        MOUSE_DRAG_MULTIPLIER
    }
}

