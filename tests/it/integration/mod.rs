//! Integration tests for the floorplan core.
//!
//! These drive the interaction controller with pointer sequences against a
//! real store, and the application context against real storage.

mod creation_tests;
mod drag_resize_tests;
mod viewer_tests;
