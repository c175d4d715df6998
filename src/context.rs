//! Application context - the one object a host constructs at startup.
//!
//! Owns the shared store, the interaction controller, the editor settings,
//! the snapshot storage and the settings watcher. Pointer events go in,
//! intents are applied to the store under its lock, and the snapshot is
//! saved whenever the store is dirty and no gesture is in progress.

use crate::error::FloorplanResult;
use crate::input::{InteractionController, PointerCapture};
use crate::intents::{AreaEdit, UpdateIntent};
use crate::persistence::{self, FileStorage, SnapshotStorage};
use crate::plant_image::PlantImage;
use crate::settings::{EditorSettings, default_settings_path};
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use crate::store::{AppState, Booking, SharedStore, Store};
use crate::types::{AreaId, Point, PointerEvent, ToolType, UiMode};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub struct AppContext {
    store: SharedStore,
    controller: InteractionController,
    settings: EditorSettings,
    storage: Box<dyn SnapshotStorage>,
    settings_path: Option<PathBuf>,
    settings_watcher: Option<SettingsWatcher>,
}

impl AppContext {
    /// Build a context around `storage`, restoring any saved state.
    pub fn new(storage: Box<dyn SnapshotStorage>, settings: EditorSettings) -> Self {
        let settings = settings.sanitized();
        let state = persistence::load_state(storage.as_ref()).unwrap_or_default();
        let mut store = Store::from_state_with_bounds(state, settings.min_zoom, settings.max_zoom);
        store.mark_clean();

        Self {
            store: store.into_shared(),
            controller: InteractionController::new(),
            settings,
            storage,
            settings_path: None,
            settings_watcher: None,
        }
    }

    /// Context backed by the platform data dir, with settings loaded and
    /// watched from the platform config dir.
    pub fn startup() -> FloorplanResult<Self> {
        let storage = FileStorage::default_location()?;
        info!("Using snapshot storage at {}", storage.path().display());

        let context = match default_settings_path() {
            Some(path) => {
                let settings = EditorSettings::load_from(&path);
                let mut context = Self::new(Box::new(storage), settings);
                if let Err(e) = context.watch_settings(path) {
                    warn!("Settings hot reload unavailable: {}", e);
                }
                context
            }
            None => Self::new(Box::new(storage), EditorSettings::default()),
        };
        Ok(context)
    }

    /// Replace the pointer capture backend
    pub fn with_capture(mut self, capture: Box<dyn PointerCapture>) -> Self {
        self.controller.teardown();
        let origin = self.controller.viewport_origin();
        self.controller = InteractionController::with_capture(capture);
        self.controller.set_viewport_origin(origin);
        self
    }

    /// Reload settings from `path` now and whenever the file changes
    pub fn watch_settings(&mut self, path: PathBuf) -> FloorplanResult<()> {
        self.settings_watcher = Some(SettingsWatcher::new(path.clone())?);
        self.settings_path = Some(path);
        Ok(())
    }

    pub fn store(&self) -> SharedStore {
        self.store.clone()
    }

    /// Clone of the current state tree
    pub fn snapshot(&self) -> AppState {
        self.store.lock().snapshot()
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn set_viewport_origin(&mut self, origin: Point) {
        self.controller.set_viewport_origin(origin);
    }

    // ==================== Pointer & Wheel ====================

    pub fn pointer_down(&mut self, event: PointerEvent) -> Vec<UpdateIntent> {
        self.dispatch(|controller, store, settings| {
            controller.handle_pointer_down(&event, store, settings)
        })
    }

    pub fn pointer_move(&mut self, position: Point) -> Vec<UpdateIntent> {
        self.dispatch(|controller, store, settings| {
            controller.handle_pointer_move(position, store, settings)
        })
    }

    pub fn pointer_up(&mut self, position: Point) -> Vec<UpdateIntent> {
        self.dispatch(|controller, store, settings| {
            controller.handle_pointer_up(position, store, settings)
        })
    }

    pub fn pointer_leave(&mut self) -> Vec<UpdateIntent> {
        self.dispatch(|controller, _, _| controller.handle_pointer_leave())
    }

    pub fn wheel(&mut self, delta_y: f64) -> Vec<UpdateIntent> {
        self.dispatch(|controller, store, settings| {
            controller.handle_wheel(delta_y, store, settings)
        })
    }

    pub fn zoom_in(&mut self) -> Vec<UpdateIntent> {
        self.dispatch(|controller, store, settings| {
            controller.handle_zoom_button(true, store, settings)
        })
    }

    pub fn zoom_out(&mut self) -> Vec<UpdateIntent> {
        self.dispatch(|controller, store, settings| {
            controller.handle_zoom_button(false, store, settings)
        })
    }

    /// Apply intents produced outside the controller (sidebar forms,
    /// scripted edits).
    pub fn apply(&mut self, intents: Vec<UpdateIntent>) -> Vec<UpdateIntent> {
        self.dispatch(move |_, _, _| intents)
    }

    pub fn pan_to(&mut self, offset: Point) -> bool {
        !self.apply(vec![UpdateIntent::PanViewport { offset }]).is_empty()
    }

    fn dispatch<F>(&mut self, handler: F) -> Vec<UpdateIntent>
    where
        F: FnOnce(&mut InteractionController, &Store, &EditorSettings) -> Vec<UpdateIntent>,
    {
        let applied = {
            let mut store = self.store.lock();
            let intents = handler(&mut self.controller, &*store, &self.settings);
            let applied: Vec<UpdateIntent> = intents
                .into_iter()
                .filter(|intent| store.apply(intent))
                .collect();
            applied
        };
        self.autosave();
        applied
    }

    // ==================== Tools & Mode ====================

    /// Switching tools abandons any gesture in progress
    pub fn set_tool(&mut self, tool: ToolType) {
        self.controller.cancel();
        self.store.lock().set_tool(tool);
        self.autosave();
    }

    pub fn set_mode(&mut self, mode: UiMode) {
        self.controller.cancel();
        self.store.lock().set_mode(mode);
        self.autosave();
    }

    pub fn toggle_sidebar(&mut self) {
        self.store.lock().toggle_sidebar();
        self.autosave();
    }

    // ==================== Areas ====================

    pub fn edit_area(&mut self, area_id: AreaId, edit: AreaEdit) -> bool {
        if edit.is_empty() {
            return false;
        }
        !self.apply(vec![UpdateIntent::EditArea { area_id, edit }]).is_empty()
    }

    pub fn delete_area(&mut self, area_id: AreaId) -> bool {
        !self.apply(vec![UpdateIntent::DeleteArea { area_id }]).is_empty()
    }

    // ==================== Bookings ====================

    /// Add a booking for an existing area. Returns false for unknown areas.
    pub fn add_booking(&mut self, booking: Booking) -> bool {
        {
            let mut store = self.store.lock();
            if store.area(&booking.area_id).is_none() {
                warn!(area_id = %booking.area_id, "Booking for unknown area ignored");
                return false;
            }
            store.bookings_mut().add(booking);
        }
        self.autosave();
        true
    }

    /// Replace the booking with the same id. The area must still exist.
    pub fn update_booking(&mut self, booking: Booking) -> bool {
        let updated = {
            let mut store = self.store.lock();
            if store.area(&booking.area_id).is_none() {
                warn!(area_id = %booking.area_id, "Booking for unknown area ignored");
                return false;
            }
            if store.bookings().get(&booking.id) == Some(&booking) {
                return false;
            }
            store.bookings_mut().replace(booking)
        };
        self.autosave();
        updated
    }

    pub fn remove_booking(&mut self, booking_id: &str) -> bool {
        let removed = self.store.lock().bookings_mut().remove(booking_id);
        self.autosave();
        removed
    }

    pub fn select_booking(&mut self, booking_id: Option<String>) -> bool {
        let changed = self.store.lock().bookings_mut().set_selected(booking_id);
        self.autosave();
        changed
    }

    // ==================== Plant ====================

    pub fn set_plant_image(&mut self, path: &Path) -> FloorplanResult<()> {
        let image = PlantImage::from_path(path)?;
        self.store.lock().plant_mut().set_image(
            image.data_url,
            f64::from(image.width),
            f64::from(image.height),
        );
        self.flush()?;
        Ok(())
    }

    pub fn set_plant_name(&mut self, name: &str) -> bool {
        let name = name.trim();
        {
            let mut store = self.store.lock();
            if name.is_empty() || store.state().plant.name == name {
                return false;
            }
            store.plant_mut().set_name(name);
        }
        self.autosave();
        true
    }

    // ==================== Settings ====================

    /// Check for settings file changes and reload if needed.
    pub fn check_settings_reload(&mut self) -> bool {
        let Some(event) = self.settings_watcher.as_mut().and_then(|w| w.poll()) else {
            return false;
        };
        match event {
            SettingsEvent::Modified | SettingsEvent::Created => {
                let Some(path) = self.settings_path.as_deref() else {
                    return false;
                };
                info!("Settings file changed, reloading...");
                let settings = EditorSettings::load_from(path);
                self.reload_settings(settings);
                true
            }
            SettingsEvent::Deleted => {
                warn!("Settings file deleted, keeping current settings");
                false
            }
            SettingsEvent::Error(e) => {
                error!("Settings watch error: {}", e);
                false
            }
        }
    }

    /// Install new settings. Zoom bounds apply to the stored viewport
    /// immediately.
    pub fn reload_settings(&mut self, settings: EditorSettings) {
        self.settings = settings.sanitized();
        self.store
            .lock()
            .set_zoom_bounds(self.settings.min_zoom, self.settings.max_zoom);
        self.autosave();
    }

    // ==================== Persistence ====================

    /// Save the snapshot if the store changed. Returns whether it wrote.
    pub fn flush(&mut self) -> FloorplanResult<bool> {
        let state = {
            let store = self.store.lock();
            if !store.is_dirty() {
                return Ok(false);
            }
            store.snapshot()
        };
        persistence::save_state(self.storage.as_mut(), &state)?;
        self.store.lock().mark_clean();
        Ok(true)
    }

    pub fn export_to(&self, path: &Path) -> FloorplanResult<()> {
        persistence::export_to(path, &self.snapshot())
    }

    /// Replace the whole state with an exported snapshot
    pub fn import_from(&mut self, path: &Path) -> FloorplanResult<()> {
        let state = persistence::import_from(path)?;
        self.controller.cancel();
        self.store.lock().replace_state(state);
        self.flush()?;
        Ok(())
    }

    /// Clear the state and the saved snapshot
    pub fn reset(&mut self) -> FloorplanResult<()> {
        self.controller.cancel();
        {
            let mut store = self.store.lock();
            store.reset();
            store.mark_clean();
        }
        self.storage.clear()?;
        info!("State reset");
        Ok(())
    }

    /// End any gesture and write pending changes
    pub fn teardown(&mut self) {
        self.controller.teardown();
        self.flush_quietly();
        self.settings_watcher = None;
    }

    fn autosave(&mut self) {
        if !self.controller.is_active() {
            self.flush_quietly();
        }
    }

    fn flush_quietly(&mut self) {
        if let Err(e) = self.flush() {
            error!("Failed to save state: {}", e);
        }
    }
}
