//! Floorplan image import - file bytes to a base64 data URL plus pixel size.

use crate::error::FloorplanResult;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::Path;
use tracing::info;

/// An uploaded floorplan image, ready to store in the plant slice
#[derive(Clone, Debug, PartialEq)]
pub struct PlantImage {
    pub data_url: String,
    pub width: u32,
    pub height: u32,
}

impl PlantImage {
    /// Decode `bytes` to validate them and read the pixel size.
    pub fn from_bytes(bytes: &[u8]) -> FloorplanResult<Self> {
        let format = image::guess_format(bytes)?;
        let decoded = image::load_from_memory_with_format(bytes, format)?;
        let data_url = format!(
            "data:{};base64,{}",
            format.to_mime_type(),
            STANDARD.encode(bytes)
        );
        Ok(Self {
            data_url,
            width: decoded.width(),
            height: decoded.height(),
        })
    }

    pub fn from_path(path: &Path) -> FloorplanResult<Self> {
        let bytes = fs::read(path)?;
        let image = Self::from_bytes(&bytes)?;
        info!(
            width = image.width,
            height = image.height,
            "Loaded floorplan image {}",
            path.display()
        );
        Ok(image)
    }
}
