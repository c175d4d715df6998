//! Pointer and wheel input handling for the floorplan map.
//!
//! This module implements the pan/zoom viewport and every pointer gesture on
//! areas: selection, dragging, resizing and the room/desk creation tools.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InteractionState`) to
//! track the current gesture. The controller reads the store, never writes
//! it: every handler returns `UpdateIntent`s for the caller to apply.
//!
//! ## Modules
//!
//! - `state` - Interaction state machine enum and helper methods
//! - `controller` - Controller struct, session lifecycle, wheel and zoom buttons
//! - `mouse_down` - Pointer down handling (selection, session start, placement)
//! - `drag` - Pointer move handling (pan, drag, resize, drawing)
//! - `mouse_up` - Pointer up/leave handling (finalize sessions, drawn areas)
//! - `transform` - Viewport pan and zoom with scale clamping
//! - `coords` - Screen/map coordinate conversion
//! - `capture` - Pointer capture seam for the host

pub mod capture;
mod controller;
pub mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod state;
mod transform;

pub use capture::{NoopCapture, PointerCapture};
pub use controller::InteractionController;
pub use state::{DragSession, InteractionState, ResizeSession};
pub use transform::ViewportTransform;
