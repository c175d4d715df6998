//! # Floorplan
//!
//! Headless core of an office floorplan editor and viewer:
//! - Pan/zoom viewport with screen/map coordinate conversion
//! - Pointer interaction on rooms and desks (select, drag, resize, place)
//! - State store for the plant, areas, bookings and UI mode
//! - JSON snapshot persistence, export/import and floorplan image import
//!
//! A host feeds pointer events into an [`AppContext`] and renders from the
//! state it exposes.

pub mod constants;
pub mod context;
pub mod error;
pub mod input;
pub mod intents;
pub mod perf;
pub mod persistence;
pub mod plant_image;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;
pub mod store;
pub mod types;

pub use context::AppContext;
pub use error::{FloorplanError, FloorplanResult};
pub use input::{InteractionController, InteractionState, ViewportTransform};
pub use intents::{AreaEdit, UpdateIntent};
pub use settings::EditorSettings;
pub use store::{AppState, SharedStore, Store};
pub use types::{Area, AreaId, AreaKind, Point, PointerButton, PointerEvent, Size, ToolType, UiMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging
///
/// Human-readable output on stderr, filtered by `RUST_LOG` (default
/// `floorplan=info`).
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("floorplan=info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}
