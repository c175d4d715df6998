//! Core types for the floorplan editor.
//!
//! This module defines the geometry primitives shared by the viewport and the
//! interaction controller, and the area/tool enums stored in the state tree.

use crate::constants::{
    DESK_CAPACITY, DESK_COLOR, DESK_NAME, DESK_SIZE, ROOM_CAPACITY, ROOM_COLOR, ROOM_NAME,
    ROOM_SIZE,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Geometry
// ============================================================================

/// A 2D point or vector. Used for both screen and map space; the name of the
/// binding says which one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise minimum (top-left corner of two points)
    #[inline]
    pub fn min(self, other: Point) -> Point {
        Point::new(self.x.min(other.x), self.y.min(other.y))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Width and height of an area in map units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Floors each axis independently at `min`.
    #[inline]
    pub fn at_least(self, min: f64) -> Size {
        Size::new(self.width.max(min), self.height.max(min))
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Size::new(width, height)
    }
}

// ============================================================================
// Areas
// ============================================================================

/// Identifier of an area, e.g. `area-6f1c…`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaId(String);

impl AreaId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh unique id with the `area-` prefix
    pub fn generate() -> Self {
        Self(format!("area-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AreaId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaKind {
    #[default]
    Room,
    Desk,
}

impl AreaKind {
    pub fn label(&self) -> &'static str {
        match self {
            AreaKind::Room => "Room",
            AreaKind::Desk => "Desk",
        }
    }
}

/// A room or desk placed on the floorplan. Position is the top-left corner in
/// map space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    #[serde(rename = "type")]
    pub kind: AreaKind,
    pub name: String,
    #[serde(default = "min_capacity", deserialize_with = "deserialize_capacity")]
    pub capacity: u32,
    pub position: Point,
    pub size: Size,
    pub color: String,
}

impl Area {
    /// Create an area of `kind` with the built-in defaults for name, capacity
    /// and color.
    pub fn new(kind: AreaKind, position: Point, size: Size) -> Self {
        let (name, capacity, color) = match kind {
            AreaKind::Room => (ROOM_NAME, ROOM_CAPACITY, ROOM_COLOR),
            AreaKind::Desk => (DESK_NAME, DESK_CAPACITY, DESK_COLOR),
        };
        Self {
            id: AreaId::generate(),
            kind,
            name: name.to_string(),
            capacity,
            position,
            size,
            color: color.to_string(),
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.position.x + self.size.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.height
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.position.x
            && point.x <= self.right()
            && point.y >= self.position.y
            && point.y <= self.bottom()
    }

    /// True when `point` lies on the bottom-right resize handle of side
    /// `handle_size`.
    pub fn resize_handle_contains(&self, point: Point, handle_size: f64) -> bool {
        self.contains(point)
            && point.x >= self.right() - handle_size
            && point.y >= self.bottom() - handle_size
    }
}

/// Built-in template size for a kind
pub fn default_size(kind: AreaKind) -> Size {
    match kind {
        AreaKind::Room => ROOM_SIZE.into(),
        AreaKind::Desk => DESK_SIZE.into(),
    }
}

fn min_capacity() -> u32 {
    1
}

/// Capacity as saved by older builds, which did not reject values below one
/// or non-numeric text. Coerced to at least one seat.
fn deserialize_capacity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(match raw {
        Some(c) if c.is_finite() => c.trunc().clamp(1.0, f64::from(u32::MAX)) as u32,
        _ => min_capacity(),
    })
}

// ============================================================================
// Tools & Modes
// ============================================================================

/// Editor tool selected in the sidebar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    #[default]
    Select,
    Room,
    Desk,
    Pan,
    None,
}

impl ToolType {
    /// The area kind a creation tool produces, if it is one
    pub fn creates(&self) -> Option<AreaKind> {
        match self {
            ToolType::Room => Some(AreaKind::Room),
            ToolType::Desk => Some(AreaKind::Desk),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "select" => Some(ToolType::Select),
            "room" => Some(ToolType::Room),
            "desk" => Some(ToolType::Desk),
            "pan" => Some(ToolType::Pan),
            "none" => Some(ToolType::None),
            _ => None,
        }
    }
}

/// Whether the map is shown in the read-only viewer or the editor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiMode {
    #[default]
    View,
    Edit,
}

/// Pointer button that produced an event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

impl PointerButton {
    /// Map a DOM-style button index (0 primary, 1 middle, 2 secondary)
    pub fn from_index(index: u16) -> Option<Self> {
        match index {
            0 => Some(PointerButton::Primary),
            1 => Some(PointerButton::Middle),
            2 => Some(PointerButton::Secondary),
            _ => None,
        }
    }
}

/// A pointer event in screen space, as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn new(position: impl Into<Point>, button: PointerButton) -> Self {
        Self {
            position: position.into(),
            button,
        }
    }

    pub fn primary(position: impl Into<Point>) -> Self {
        Self::new(position, PointerButton::Primary)
    }
}
