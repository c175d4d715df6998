//! Interaction state machine - one explicit state for every pointer gesture.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning    (pan tool / middle button, or empty map in the viewer)
//! Idle -> Dragging   (primary press on the selected area, off its handle)
//! Idle -> Resizing   (primary press on the selected area's resize handle)
//! Idle -> Drawing    (primary press on empty map with a drag-to-size tool)
//!
//! Any -> Idle        (pointer up, pointer leave, teardown)
//! ```
//!
//! At most one session exists at a time.

use crate::types::{AreaId, AreaKind, Point, Size};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    /// No active gesture
    #[default]
    Idle,

    /// Viewport panning
    Panning {
        /// Pointer minus viewport offset at press time (screen space)
        grab: Point,
        /// Pointer position at press time (screen space)
        press: Point,
        /// Whether any move changed the offset
        moved: bool,
    },

    /// Moving one area
    Dragging(DragSession),

    /// Resizing one area from its bottom-right handle
    Resizing(ResizeSession),

    /// Sizing a new area with a creation tool
    Drawing {
        kind: AreaKind,
        /// Press position (map space)
        start: Point,
        /// Latest pointer position (map space)
        current: Point,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub area_id: AreaId,
    /// Pointer position at press time (screen space)
    pub press: Point,
    /// Pointer minus area position at press time (map space)
    pub grab_offset: Point,
    /// Last position committed for the area
    pub last_position: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub area_id: AreaId,
    /// Pointer position at press time (screen space)
    pub press: Point,
    /// Area size at press time
    pub initial_size: Size,
    /// Last size committed for the area
    pub last_size: Size,
}

impl InteractionState {
    /// Returns true if any session is active
    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing(_))
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    /// Area targeted by a drag or resize session
    pub fn target_area(&self) -> Option<&AreaId> {
        match self {
            Self::Dragging(session) => Some(&session.area_id),
            Self::Resizing(session) => Some(&session.area_id),
            _ => None,
        }
    }

    /// Map-space rectangle being drawn, as (start, current)
    pub fn drawing_rect(&self) -> Option<(Point, Point)> {
        match self {
            Self::Drawing { start, current, .. } => Some((*start, *current)),
            _ => None,
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Panning { .. } => "panning",
            Self::Dragging(_) => "dragging",
            Self::Resizing(_) => "resizing",
            Self::Drawing { .. } => "drawing",
        }
    }
}
