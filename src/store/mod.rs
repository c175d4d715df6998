//! State store - the full application state tree and the intent reducer.
//!
//! The state is split into four slices that serialize to one JSON snapshot:
//! - `plant` - floorplan image and viewport (position/scale)
//! - `areas` - rooms and desks, plus the selected area
//! - `bookings` - reservations of areas
//! - `ui` - mode, current tool, sidebar
//!
//! `Store` wraps the tree with an R-tree of area bounds for hit testing and a
//! dirty flag for persistence. It is shared between threads as `SharedStore`;
//! every mutation goes through the one mutex so position/size updates never
//! interleave.

mod areas;
mod bookings;
mod plant;
mod ui;

pub use areas::AreasState;
pub use bookings::{Booking, BookingsState};
pub use plant::PlantState;
pub use ui::UiState;

use crate::constants::{MAX_ZOOM, MIN_ZOOM};
use crate::input::ViewportTransform;
use crate::intents::UpdateIntent;
use crate::spatial_index::SpatialIndex;
use crate::types::{Area, AreaId, Point, ToolType, UiMode};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Serializable state tree (the persisted snapshot)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub plant: PlantState,
    pub areas: AreasState,
    pub bookings: BookingsState,
    pub ui: UiState,
}

/// Store shared between the UI thread and background workers
pub type SharedStore = Arc<Mutex<Store>>;

pub struct Store {
    state: AppState,
    index: SpatialIndex,
    zoom_bounds: (f64, f64),
    dirty: bool,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::from_state(AppState::default())
    }

    /// Build a store around a loaded snapshot. The viewport scale is clamped
    /// back into the default bounds.
    pub fn from_state(state: AppState) -> Self {
        Self::from_state_with_bounds(state, MIN_ZOOM, MAX_ZOOM)
    }

    /// Like `from_state`, but the first normalization already uses the
    /// configured zoom bounds.
    pub fn from_state_with_bounds(state: AppState, min_scale: f64, max_scale: f64) -> Self {
        let index = SpatialIndex::from_areas(&state.areas.areas);
        let mut store = Self {
            state,
            index,
            zoom_bounds: (min_scale, max_scale),
            dirty: false,
        };
        store.normalize_viewport();
        store
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Clone of the full tree for persistence
    pub fn snapshot(&self) -> AppState {
        self.state.clone()
    }

    /// Replace the whole tree (import, reset)
    pub fn replace_state(&mut self, state: AppState) {
        self.state = state;
        self.index.rebuild(&self.state.areas.areas);
        self.normalize_viewport();
        self.dirty = true;
    }

    pub fn reset(&mut self) {
        self.replace_state(AppState::default());
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    // ==================== Viewport ====================

    pub fn set_zoom_bounds(&mut self, min_scale: f64, max_scale: f64) {
        self.zoom_bounds = (min_scale, max_scale);
        self.normalize_viewport();
    }

    /// Viewport built from the plant's position/scale
    pub fn viewport(&self) -> ViewportTransform {
        ViewportTransform::from_plant(&self.state.plant, self.zoom_bounds.0, self.zoom_bounds.1)
    }

    fn normalize_viewport(&mut self) {
        let viewport = self.viewport();
        if self.state.plant.position != viewport.offset() || self.state.plant.scale != viewport.scale() {
            self.state.plant.position = viewport.offset();
            self.state.plant.scale = viewport.scale();
            self.dirty = true;
        }
    }

    // ==================== Areas ====================

    pub fn areas(&self) -> &[Area] {
        &self.state.areas.areas
    }

    pub fn area(&self, id: &AreaId) -> Option<&Area> {
        self.state.areas.get(id)
    }

    pub fn selected_area_id(&self) -> Option<&AreaId> {
        self.state.areas.selected_area_id.as_ref()
    }

    pub fn selected_area(&self) -> Option<&Area> {
        self.state.areas.selected()
    }

    /// Topmost area under a map point. The selected area is drawn above the
    /// others, so it wins; otherwise the last area in list order does.
    pub fn area_at(&self, point: Point) -> Option<&Area> {
        let candidates = self.index.query_point(point);
        if candidates.is_empty() {
            return None;
        }
        if let Some(selected) = self.selected_area_id() {
            if candidates.contains(selected) {
                return self.area(selected);
            }
        }
        self.state
            .areas
            .areas
            .iter()
            .rev()
            .find(|area| candidates.contains(&area.id))
    }

    /// Areas intersecting a map-space rectangle, in list order
    pub fn areas_in_rect(&self, min: Point, max: Point) -> Vec<&Area> {
        let ids = self.index.query_rect(min, max);
        self.state
            .areas
            .areas
            .iter()
            .filter(|area| ids.contains(&area.id))
            .collect()
    }

    // ==================== UI ====================

    pub fn mode(&self) -> UiMode {
        self.state.ui.mode
    }

    pub fn current_tool(&self) -> ToolType {
        self.state.ui.current_tool
    }

    pub fn set_mode(&mut self, mode: UiMode) {
        if self.state.ui.mode != mode {
            self.state.ui.mode = mode;
            self.dirty = true;
        }
    }

    pub fn set_tool(&mut self, tool: ToolType) {
        if self.state.ui.current_tool != tool {
            self.state.ui.current_tool = tool;
            self.dirty = true;
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.state.ui.toggle_sidebar();
        self.dirty = true;
    }

    // ==================== Plant & Bookings ====================

    pub fn plant_mut(&mut self) -> &mut PlantState {
        self.dirty = true;
        &mut self.state.plant
    }

    pub fn bookings(&self) -> &BookingsState {
        &self.state.bookings
    }

    pub fn bookings_mut(&mut self) -> &mut BookingsState {
        self.dirty = true;
        &mut self.state.bookings
    }

    // ==================== Intents ====================

    /// Apply one intent. Returns true if the state changed.
    pub fn apply(&mut self, intent: &UpdateIntent) -> bool {
        let changed = match intent {
            UpdateIntent::MoveArea { area_id, position } => {
                position.is_finite() && self.state.areas.set_position(area_id, *position)
            }
            UpdateIntent::ResizeArea { area_id, size } => {
                size.is_finite() && self.state.areas.set_size(area_id, *size)
            }
            UpdateIntent::CreateArea { area } => {
                if self.area(&area.id).is_some() {
                    false
                } else {
                    self.state.areas.add(area.clone());
                    true
                }
            }
            UpdateIntent::SelectArea { area_id } => match area_id {
                Some(id) if self.area(id).is_none() => false,
                _ => self.state.areas.set_selected(area_id.clone()),
            },
            UpdateIntent::EditArea { area_id, edit } => self
                .state
                .areas
                .get_mut(area_id)
                .is_some_and(|area| edit.apply_to(area)),
            UpdateIntent::DeleteArea { area_id } => {
                let removed = self.state.areas.remove(area_id);
                if removed {
                    self.index.remove(area_id);
                }
                removed
            }
            UpdateIntent::PanViewport { offset } => {
                let mut viewport = self.viewport();
                viewport.pan(*offset) && self.write_viewport(viewport)
            }
            UpdateIntent::ZoomViewport { scale } => {
                let mut viewport = self.viewport();
                viewport.set_scale(*scale) && self.write_viewport(viewport)
            }
        };

        if changed {
            if let Some(area) = intent.area_id().and_then(|id| self.state.areas.get(id)) {
                self.index.insert(area);
            }
            self.dirty = true;
        } else {
            debug!(?intent, "intent had no effect");
        }
        changed
    }

    /// Apply intents in arrival order. Returns how many changed the state.
    pub fn apply_all<'a, I>(&mut self, intents: I) -> usize
    where
        I: IntoIterator<Item = &'a UpdateIntent>,
    {
        intents.into_iter().filter(|intent| self.apply(intent)).count()
    }

    fn write_viewport(&mut self, viewport: ViewportTransform) -> bool {
        let plant = &mut self.state.plant;
        if plant.position == viewport.offset() && plant.scale == viewport.scale() {
            return false;
        }
        plant.position = viewport.offset();
        plant.scale = viewport.scale();
        true
    }
}
