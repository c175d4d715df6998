//! Pointer up / leave handling - finalize sessions and create drawn areas.

use crate::input::InteractionController;
use crate::input::state::InteractionState;
use crate::intents::UpdateIntent;
use crate::profile_scope;
use crate::settings::EditorSettings;
use crate::store::Store;
use crate::types::{AreaKind, Point, Size, UiMode};
use tracing::debug;

impl InteractionController {
    /// End the active session. Any button ends it. A drawing session turns
    /// into a new area; an unmoved pan in the viewer clears the selection.
    pub fn handle_pointer_up(
        &mut self,
        position: Point,
        store: &Store,
        settings: &EditorSettings,
    ) -> Vec<UpdateIntent> {
        profile_scope!("handle_pointer_up");

        match self.end() {
            InteractionState::Drawing {
                kind,
                start,
                current,
            } => {
                let end = if position.is_finite() {
                    store.viewport().screen_to_map(position, self.origin)
                } else {
                    current
                };
                finish_drawing(kind, start, end, settings)
            }
            InteractionState::Panning { moved: false, .. }
                if store.mode() == UiMode::View && store.selected_area_id().is_some() =>
            {
                vec![UpdateIntent::SelectArea { area_id: None }]
            }
            _ => Vec::new(),
        }
    }

    /// Pointer left the map container: end the session, emit nothing.
    pub fn handle_pointer_leave(&mut self) -> Vec<UpdateIntent> {
        let ended = self.end();
        if ended.is_active() {
            debug!(state = ended.name(), "pointer left during session");
        }
        Vec::new()
    }
}

fn finish_drawing(
    kind: AreaKind,
    start: Point,
    end: Point,
    settings: &EditorSettings,
) -> Vec<UpdateIntent> {
    let width = (end.x - start.x).abs();
    let height = (end.y - start.y).abs();

    if width < settings.min_draw_gesture && height < settings.min_draw_gesture {
        debug!(width, height, "drawn rectangle too small, nothing created");
        return Vec::new();
    }

    let size = Size::new(width, height).at_least(settings.min_area_dimension);
    let area = settings
        .template(kind)
        .instantiate(kind, start.min(end), size);
    let area_id = area.id.clone();

    debug!(%area_id, ?size, "drew {}", kind.label());
    vec![
        UpdateIntent::CreateArea { area },
        UpdateIntent::SelectArea {
            area_id: Some(area_id),
        },
    ]
}
