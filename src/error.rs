//! Error types for storage, import and configuration operations
//!
//! Interaction handling never fails; only operations that touch the
//! filesystem or decode external data return `FloorplanResult<T>`.

use thiserror::Error;

/// Errors that can occur outside the pointer-event path
#[derive(Error, Debug)]
pub enum FloorplanError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image decoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// File watcher error
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    /// Atomic write could not replace the target file
    #[error("Persist error: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// The platform has no data/config directory
    #[error("No storage location available")]
    NoStorageLocation,

    /// Snapshot parsed but does not describe a usable state
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Result type alias for fallible floorplan operations
pub type FloorplanResult<T> = Result<T, FloorplanError>;
