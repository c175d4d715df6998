//! Pointer capture - global move/up tracking for the lifetime of a session.
//!
//! While a drag, resize, pan or draw session is active the host must route
//! every pointer move/up to the controller, even when the pointer leaves the
//! shape (window-level listeners in a browser, pointer grab in a native
//! toolkit). The controller acquires capture when a session starts and
//! releases it exactly once when the session ends.

/// Host hook for acquiring and releasing global pointer tracking
pub trait PointerCapture: Send {
    fn acquire(&mut self);
    fn release(&mut self);
}

/// Capture for hosts that already deliver every event to the controller
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCapture;

impl PointerCapture for NoopCapture {
    fn acquire(&mut self) {}
    fn release(&mut self) {}
}
