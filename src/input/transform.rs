//! Viewport transformations - pan and zoom with scale clamping.
//!
//! The viewport follows a translate-then-scale model:
//!
//! ```text
//! screen = origin + offset + map * scale
//! map    = (screen - origin - offset) / scale
//! ```
//!
//! `origin` is the on-screen top-left of the map container and is supplied by
//! the caller for every conversion (see `coords`). `offset` is unbounded,
//! `scale` is always kept within `[min_scale, max_scale]`.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_STEP, ZOOM_STEP};
use crate::store::PlantState;
use crate::types::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    offset: Point,
    scale: f64,
    min_scale: f64,
    max_scale: f64,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new(Point::ZERO, DEFAULT_ZOOM)
    }
}

impl ViewportTransform {
    /// Create a viewport with the default `[0.2, 3.0]` scale bounds. An
    /// out-of-range or invalid scale is clamped/replaced.
    pub fn new(offset: Point, scale: f64) -> Self {
        Self::with_bounds(offset, scale, MIN_ZOOM, MAX_ZOOM)
    }

    /// Create a viewport with explicit scale bounds. Invalid bounds fall back
    /// to the defaults.
    pub fn with_bounds(offset: Point, scale: f64, min_scale: f64, max_scale: f64) -> Self {
        let (min_scale, max_scale) = if valid_bounds(min_scale, max_scale) {
            (min_scale, max_scale)
        } else {
            (MIN_ZOOM, MAX_ZOOM)
        };
        let scale = if scale.is_finite() && scale > 0.0 {
            scale.clamp(min_scale, max_scale)
        } else {
            DEFAULT_ZOOM.clamp(min_scale, max_scale)
        };
        let offset = if offset.is_finite() { offset } else { Point::ZERO };
        Self {
            offset,
            scale,
            min_scale,
            max_scale,
        }
    }

    /// Viewport currently stored in the plant slice
    pub fn from_plant(plant: &PlantState, min_scale: f64, max_scale: f64) -> Self {
        Self::with_bounds(plant.position, plant.scale, min_scale, max_scale)
    }

    #[inline]
    pub fn offset(&self) -> Point {
        self.offset
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn bounds(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    /// Set the pan offset. Unclamped; non-finite offsets are rejected.
    pub fn pan(&mut self, new_offset: Point) -> bool {
        if !new_offset.is_finite() {
            return false;
        }
        self.offset = new_offset;
        true
    }

    /// Pan by a screen-space delta.
    pub fn pan_by(&mut self, delta: Point) -> bool {
        self.pan(self.offset + delta)
    }

    /// Multiply the scale by `factor`, clamped to the bounds.
    ///
    /// Returns false (and leaves the scale untouched) for non-finite or
    /// non-positive factors.
    pub fn zoom_by(&mut self, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        self.scale = (self.scale * factor).clamp(self.min_scale, self.max_scale);
        true
    }

    /// Set the scale directly, clamped to the bounds.
    pub fn set_scale(&mut self, scale: f64) -> bool {
        if !scale.is_finite() || scale <= 0.0 {
            return false;
        }
        self.scale = scale.clamp(self.min_scale, self.max_scale);
        true
    }

    /// One zoom-in button step
    pub fn zoom_in(&mut self) -> bool {
        self.zoom_by(ZOOM_STEP)
    }

    /// One zoom-out button step
    pub fn zoom_out(&mut self) -> bool {
        self.zoom_by(1.0 / ZOOM_STEP)
    }

    /// Zoom for one wheel event: scrolling down (positive delta) zooms out.
    pub fn wheel_zoom(&mut self, delta_y: f64) -> bool {
        self.wheel_zoom_by(delta_y, WHEEL_ZOOM_STEP)
    }

    /// Wheel zoom with a custom per-notch factor
    pub fn wheel_zoom_by(&mut self, delta_y: f64, step: f64) -> bool {
        if !delta_y.is_finite() || delta_y == 0.0 {
            return false;
        }
        let factor = if delta_y > 0.0 { 1.0 / step } else { step };
        self.zoom_by(factor)
    }

    /// Zoom by `factor` keeping the map point under `anchor` (screen space)
    /// fixed on screen.
    pub fn zoom_around(&mut self, factor: f64, anchor: Point, origin: Point) -> bool {
        if !anchor.is_finite() || !origin.is_finite() {
            return false;
        }
        let map_anchor = self.screen_to_map(anchor, origin);
        if !self.zoom_by(factor) {
            return false;
        }
        self.offset = anchor - origin - map_anchor * self.scale;
        true
    }
}

fn valid_bounds(min_scale: f64, max_scale: f64) -> bool {
    min_scale.is_finite() && max_scale.is_finite() && min_scale > 0.0 && min_scale <= max_scale
}
