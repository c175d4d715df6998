//! Application-wide constants.
//!
//! Centralizes magic numbers for the viewport, area templates and input
//! handling so the settings defaults and the tests agree on them.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f64 = 0.2;

/// Maximum zoom level
pub const MAX_ZOOM: f64 = 3.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Zoom factor for one zoom-in button step (zoom-out uses the reciprocal)
pub const ZOOM_STEP: f64 = 1.2;

/// Zoom factor for one scroll wheel notch (zoom-out uses the reciprocal)
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

// ============================================================================
// Area Defaults
// ============================================================================

/// Default room size in map units (width, height)
pub const ROOM_SIZE: (f64, f64) = (120.0, 120.0);

/// Default desk size in map units (width, height)
pub const DESK_SIZE: (f64, f64) = (40.0, 40.0);

/// Default room fill (translucent purple)
pub const ROOM_COLOR: &str = "rgba(168, 85, 247, 0.4)";

/// Default desk fill (translucent purple)
pub const DESK_COLOR: &str = "rgba(168, 85, 247, 0.4)";

/// Default seats for a new room
pub const ROOM_CAPACITY: u32 = 8;

/// Default seats for a new desk
pub const DESK_CAPACITY: u32 = 1;

/// Name given to freshly placed rooms
pub const ROOM_NAME: &str = "New Room";

/// Name given to freshly placed desks
pub const DESK_NAME: &str = "New Desk";

/// Viewer fill for areas with at least one booking
pub const RESERVED_COLOR: &str = "rgba(239, 68, 68, 0.4)";

/// Viewer fill for areas without bookings
pub const AVAILABLE_COLOR: &str = "rgba(34, 197, 94, 0.4)";

// ============================================================================
// Plant Defaults
// ============================================================================

pub const DEFAULT_PLANT_ID: &str = "plant-001";

pub const DEFAULT_PLANT_NAME: &str = "Main Office";

/// Floorplan size used until an image is uploaded
pub const DEFAULT_PLANT_SIZE: (f64, f64) = (1200.0, 800.0);

// ============================================================================
// Input Handling
// ============================================================================

/// Minimum width/height an area may be resized or drawn to. Kept below the
/// desk template so freshly placed desks already satisfy it.
pub const MIN_AREA_DIMENSION: f64 = 5.0;

/// Minimum drag distance (map units, both axes) to create a drawn area
pub const MIN_DRAW_GESTURE: f64 = 5.0;

/// Side of the square resize handle in the bottom-right corner (map units)
pub const RESIZE_HANDLE_SIZE: f64 = 16.0;

// ============================================================================
// Storage
// ============================================================================

/// Key the full state snapshot is stored under
pub const STORAGE_KEY: &str = "office-space-mapper-data";

/// Directory name under the platform config/data dirs
pub const APP_DIR_NAME: &str = "floorplan";

/// Settings file name inside the config dir
pub const SETTINGS_FILE_NAME: &str = "settings.json";
