//! Snapshot persistence - the whole `AppState` as one JSON blob.
//!
//! Storage is keyed by a single identifier (`office-space-mapper-data`). A
//! snapshot that cannot be read or parsed is logged and treated as "no saved
//! state"; only explicit export/import surface errors to the caller.

use crate::constants::{APP_DIR_NAME, STORAGE_KEY};
use crate::error::{FloorplanError, FloorplanResult};
use crate::perf::{SLOW_SAVE_MS, measure_and_log};
use crate::store::AppState;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Backend holding the serialized snapshot
pub trait SnapshotStorage: Send {
    /// Raw snapshot text, `None` if nothing has been saved
    fn read(&self) -> FloorplanResult<Option<String>>;

    fn write(&mut self, data: &str) -> FloorplanResult<()>;

    fn clear(&mut self) -> FloorplanResult<()>;
}

// ============================================================================
// File Storage
// ============================================================================

/// Snapshot stored as `<dir>/<key>.json`, replaced atomically on write
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage under the platform data directory
    pub fn default_location() -> FloorplanResult<Self> {
        default_snapshot_path()
            .map(Self::new)
            .ok_or(FloorplanError::NoStorageLocation)
    }

    /// Storage inside `dir`, named after the storage key
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(format!("{STORAGE_KEY}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStorage for FileStorage {
    fn read(&self) -> FloorplanResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, data: &str) -> FloorplanResult<()> {
        write_atomic(&self.path, data)
    }

    fn clear(&mut self) -> FloorplanResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ============================================================================
// Memory Storage
// ============================================================================

/// In-process storage for hosts without a filesystem and for tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    data: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
        }
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn read(&self) -> FloorplanResult<Option<String>> {
        Ok(self.data.clone())
    }

    fn write(&mut self, data: &str) -> FloorplanResult<()> {
        self.data = Some(data.to_string());
        Ok(())
    }

    fn clear(&mut self) -> FloorplanResult<()> {
        self.data = None;
        Ok(())
    }
}

// ============================================================================
// Load / Save
// ============================================================================

/// Load the saved state. Missing, unreadable or corrupt snapshots yield
/// `None` so the caller starts from defaults.
pub fn load_state(storage: &dyn SnapshotStorage) -> Option<AppState> {
    let content = match storage.read() {
        Ok(Some(content)) => content,
        Ok(None) => return None,
        Err(e) => {
            warn!("Could not read saved state: {}", e);
            return None;
        }
    };
    match parse_snapshot(&content) {
        Ok(state) => {
            info!(areas = state.areas.areas.len(), "Loaded saved state");
            Some(state)
        }
        Err(e) => {
            warn!("Ignoring corrupt saved state: {}", e);
            None
        }
    }
}

pub fn save_state(storage: &mut dyn SnapshotStorage, state: &AppState) -> FloorplanResult<()> {
    let json = serde_json::to_string(state)?;
    measure_and_log("save_state", SLOW_SAVE_MS, || storage.write(&json))
}

/// Write the state as pretty JSON to `path`
pub fn export_to(path: &Path, state: &AppState) -> FloorplanResult<()> {
    write_atomic(path, &serde_json::to_string_pretty(state)?)?;
    info!("Exported state to {}", path.display());
    Ok(())
}

/// Read a previously exported state from `path`
pub fn import_from(path: &Path) -> FloorplanResult<AppState> {
    let content = fs::read_to_string(path)?;
    let state = parse_snapshot(&content)?;
    info!(
        areas = state.areas.areas.len(),
        bookings = state.bookings.bookings.len(),
        "Imported state from {}",
        path.display()
    );
    Ok(state)
}

/// Parse snapshot text. The top level must be a JSON object; missing slices
/// take their defaults.
pub fn parse_snapshot(content: &str) -> FloorplanResult<AppState> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if !value.is_object() {
        return Err(FloorplanError::InvalidSnapshot(
            "top level is not an object".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

/// `<data_dir>/floorplan/office-space-mapper-data.json`
pub fn default_snapshot_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME).join(format!("{STORAGE_KEY}.json")))
}

fn write_atomic(path: &Path, data: &str) -> FloorplanResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(data.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path)?;
    Ok(())
}
