//! Coordinate conversion between screen space and map space.
//!
//! Every pointer coordinate must pass through `screen_to_map` before it is
//! compared against or written into area geometry.

use crate::input::ViewportTransform;
use crate::types::Point;

impl ViewportTransform {
    /// Convert a screen position to map space. `origin` is the on-screen
    /// top-left of the map container.
    #[inline]
    pub fn screen_to_map(&self, screen: Point, origin: Point) -> Point {
        (screen - origin - self.offset()) / self.scale()
    }

    /// Convert a map position to screen space
    #[inline]
    pub fn map_to_screen(&self, map: Point, origin: Point) -> Point {
        origin + self.offset() + map * self.scale()
    }

    /// Convert a screen-space delta to map units
    #[inline]
    pub fn delta_screen_to_map(&self, delta: Point) -> Point {
        delta / self.scale()
    }

    /// Convert a map-space delta to screen pixels
    #[inline]
    pub fn delta_map_to_screen(&self, delta: Point) -> Point {
        delta * self.scale()
    }
}
