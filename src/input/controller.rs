//! Interaction controller - owns the gesture state machine and input capture.
//!
//! The controller never mutates the store. Each handler reads the current
//! store and returns the update intents the caller should apply, in order.

use crate::input::capture::{NoopCapture, PointerCapture};
use crate::input::state::InteractionState;
use crate::intents::UpdateIntent;
use crate::settings::EditorSettings;
use crate::store::Store;
use crate::types::Point;
use tracing::debug;

pub struct InteractionController {
    pub(super) state: InteractionState,
    /// On-screen top-left of the map container
    pub(super) origin: Point,
    capture: Box<dyn PointerCapture>,
    captured: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self::with_capture(Box::new(NoopCapture))
    }

    pub fn with_capture(capture: Box<dyn PointerCapture>) -> Self {
        Self {
            state: InteractionState::Idle,
            origin: Point::ZERO,
            capture,
            captured: false,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn has_capture(&self) -> bool {
        self.captured
    }

    pub fn viewport_origin(&self) -> Point {
        self.origin
    }

    /// Set the on-screen top-left of the map container. Non-finite values are
    /// ignored.
    pub fn set_viewport_origin(&mut self, origin: Point) {
        if origin.is_finite() {
            self.origin = origin;
        }
    }

    /// Start a session, acquiring pointer capture if not already held
    pub(super) fn begin(&mut self, state: InteractionState) {
        if !self.captured {
            self.capture.acquire();
            self.captured = true;
        }
        debug!(from = self.state.name(), to = state.name(), "session started");
        self.state = state;
    }

    /// End the current session and release capture. Returns the ended state.
    pub(super) fn end(&mut self) -> InteractionState {
        let ended = std::mem::take(&mut self.state);
        if self.captured {
            self.capture.release();
            self.captured = false;
        }
        if ended.is_active() {
            debug!(state = ended.name(), "session ended");
        }
        ended
    }

    /// Abandon any session without emitting intents (tool or mode change,
    /// component teardown).
    pub fn cancel(&mut self) {
        self.end();
    }

    /// Release everything held by the controller
    pub fn teardown(&mut self) {
        self.end();
    }

    /// Wheel zoom. Scrolling down (positive delta) zooms out.
    pub fn handle_wheel(
        &mut self,
        delta_y: f64,
        store: &Store,
        settings: &EditorSettings,
    ) -> Vec<UpdateIntent> {
        let mut viewport = store.viewport();
        let before = viewport.scale();
        if !viewport.wheel_zoom_by(delta_y, settings.wheel_zoom_step) || viewport.scale() == before {
            return Vec::new();
        }
        vec![UpdateIntent::ZoomViewport {
            scale: viewport.scale(),
        }]
    }

    /// Zoom toolbar buttons: in multiplies by the zoom step, out by its
    /// reciprocal.
    pub fn handle_zoom_button(
        &mut self,
        zoom_in: bool,
        store: &Store,
        settings: &EditorSettings,
    ) -> Vec<UpdateIntent> {
        let mut viewport = store.viewport();
        let before = viewport.scale();
        let factor = if zoom_in {
            settings.zoom_step
        } else {
            1.0 / settings.zoom_step
        };
        if !viewport.zoom_by(factor) || viewport.scale() == before {
            return Vec::new();
        }
        vec![UpdateIntent::ZoomViewport {
            scale: viewport.scale(),
        }]
    }
}

impl Drop for InteractionController {
    fn drop(&mut self) {
        if self.captured {
            self.capture.release();
            self.captured = false;
        }
    }
}
