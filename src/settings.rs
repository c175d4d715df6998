//! Editor settings - zoom bounds, interaction thresholds and area templates.
//!
//! Settings are read from `<config_dir>/floorplan/settings.json`. Every field
//! has a default, so a partial file only overrides what it names; a missing
//! or unreadable file yields the defaults.

use crate::constants::{
    APP_DIR_NAME, DESK_CAPACITY, DESK_COLOR, DESK_NAME, DESK_SIZE, MAX_ZOOM, MIN_AREA_DIMENSION,
    MIN_DRAW_GESTURE, MIN_ZOOM, RESIZE_HANDLE_SIZE, ROOM_CAPACITY, ROOM_COLOR, ROOM_NAME,
    ROOM_SIZE, SETTINGS_FILE_NAME, WHEEL_ZOOM_STEP, ZOOM_STEP,
};
use crate::error::FloorplanResult;
use crate::types::{Area, AreaId, AreaKind, Point, Size};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// How a creation tool turns pointer input into a new area
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    /// Press places a template-sized area centred on the pointer
    #[default]
    Click,
    /// Press-drag-release draws the area's rectangle
    DragToSize,
}

/// Space the resize delta is measured in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeSpace {
    /// Raw screen pixels; resize speed relative to the shape varies with zoom
    #[default]
    Screen,
    /// Screen delta divided by the viewport scale
    Map,
}

/// Defaults for areas placed with a creation tool
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaTemplate {
    pub name: String,
    pub size: Size,
    pub capacity: u32,
    pub color: String,
}

impl AreaTemplate {
    pub fn room() -> Self {
        Self {
            name: ROOM_NAME.to_string(),
            size: ROOM_SIZE.into(),
            capacity: ROOM_CAPACITY,
            color: ROOM_COLOR.to_string(),
        }
    }

    pub fn desk() -> Self {
        Self {
            name: DESK_NAME.to_string(),
            size: DESK_SIZE.into(),
            capacity: DESK_CAPACITY,
            color: DESK_COLOR.to_string(),
        }
    }

    /// Instantiate an area of `kind` at `position` with `size`
    pub fn instantiate(&self, kind: AreaKind, position: Point, size: Size) -> Area {
        Area {
            id: AreaId::generate(),
            kind,
            name: self.name.clone(),
            capacity: self.capacity.max(1),
            position,
            size,
            color: self.color.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom button factor
    pub zoom_step: f64,
    /// Wheel notch factor
    pub wheel_zoom_step: f64,
    pub min_area_dimension: f64,
    pub min_draw_gesture: f64,
    pub resize_handle_size: f64,
    pub placement: PlacementMode,
    pub resize_space: ResizeSpace,
    pub room: AreaTemplate,
    pub desk: AreaTemplate,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
            wheel_zoom_step: WHEEL_ZOOM_STEP,
            min_area_dimension: MIN_AREA_DIMENSION,
            min_draw_gesture: MIN_DRAW_GESTURE,
            resize_handle_size: RESIZE_HANDLE_SIZE,
            placement: PlacementMode::default(),
            resize_space: ResizeSpace::default(),
            room: AreaTemplate::room(),
            desk: AreaTemplate::desk(),
        }
    }
}

impl EditorSettings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`, falling back to defaults if missing or corrupt.
    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!("Could not read settings from {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match serde_json::from_str::<Self>(&content) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                warn!("Invalid settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> FloorplanResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Replace out-of-range values with their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.min_zoom.is_finite()
            && self.max_zoom.is_finite()
            && self.min_zoom > 0.0
            && self.min_zoom <= self.max_zoom)
        {
            warn!(
                min_zoom = self.min_zoom,
                max_zoom = self.max_zoom,
                "Invalid zoom bounds, using defaults"
            );
            self.min_zoom = defaults.min_zoom;
            self.max_zoom = defaults.max_zoom;
        }
        if !valid_factor(self.zoom_step) {
            self.zoom_step = defaults.zoom_step;
        }
        if !valid_factor(self.wheel_zoom_step) {
            self.wheel_zoom_step = defaults.wheel_zoom_step;
        }
        if !non_negative(self.min_area_dimension) {
            self.min_area_dimension = defaults.min_area_dimension;
        }
        if !non_negative(self.min_draw_gesture) {
            self.min_draw_gesture = defaults.min_draw_gesture;
        }
        if !non_negative(self.resize_handle_size) {
            self.resize_handle_size = defaults.resize_handle_size;
        }
        self
    }

    pub fn template(&self, kind: AreaKind) -> &AreaTemplate {
        match kind {
            AreaKind::Room => &self.room,
            AreaKind::Desk => &self.desk,
        }
    }
}

fn valid_factor(value: f64) -> bool {
    value.is_finite() && value > 1.0
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// `<config_dir>/floorplan/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}
