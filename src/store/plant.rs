//! Plant slice - the floorplan image and the viewport (position/scale).

use crate::constants::{DEFAULT_PLANT_ID, DEFAULT_PLANT_NAME, DEFAULT_PLANT_SIZE, DEFAULT_ZOOM};
use crate::types::Point;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlantState {
    pub id: String,
    pub name: String,
    /// Floorplan image as a data URL
    pub image_url: Option<String>,
    pub width: f64,
    pub height: f64,
    /// Viewport pan offset
    pub position: Point,
    /// Viewport zoom scale
    pub scale: f64,
}

impl Default for PlantState {
    fn default() -> Self {
        Self {
            id: DEFAULT_PLANT_ID.to_string(),
            name: DEFAULT_PLANT_NAME.to_string(),
            image_url: None,
            width: DEFAULT_PLANT_SIZE.0,
            height: DEFAULT_PLANT_SIZE.1,
            position: Point::ZERO,
            scale: DEFAULT_ZOOM,
        }
    }
}

impl PlantState {
    pub fn set_image(&mut self, image_url: String, width: f64, height: f64) {
        self.image_url = Some(image_url);
        self.width = width;
        self.height = height;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
