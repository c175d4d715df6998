//! Pointer move handling - pan, drag, resize and drawing updates.

use crate::input::InteractionController;
use crate::input::state::InteractionState;
use crate::intents::UpdateIntent;
use crate::profile_scope;
use crate::settings::{EditorSettings, ResizeSpace};
use crate::store::Store;
use crate::types::{Point, Size};

impl InteractionController {
    /// Handle a pointer move (screen space). Only active sessions produce
    /// intents; moves while idle are ignored.
    pub fn handle_pointer_move(
        &mut self,
        position: Point,
        store: &Store,
        settings: &EditorSettings,
    ) -> Vec<UpdateIntent> {
        profile_scope!("handle_pointer_move");

        if !position.is_finite() || self.state.is_idle() {
            return Vec::new();
        }

        let viewport = store.viewport();
        let origin = self.origin;

        match &mut self.state {
            InteractionState::Idle => Vec::new(),

            InteractionState::Panning { grab, moved, .. } => {
                let offset = position - *grab;
                if offset == viewport.offset() {
                    return Vec::new();
                }
                *moved = true;
                vec![UpdateIntent::PanViewport { offset }]
            }

            InteractionState::Dragging(session) => {
                let map_pos = viewport.screen_to_map(position, origin);
                let new_position = map_pos - session.grab_offset;
                if new_position == session.last_position {
                    return Vec::new();
                }
                session.last_position = new_position;
                vec![UpdateIntent::MoveArea {
                    area_id: session.area_id.clone(),
                    position: new_position,
                }]
            }

            InteractionState::Resizing(session) => {
                let screen_delta = position - session.press;
                let delta = match settings.resize_space {
                    ResizeSpace::Screen => screen_delta,
                    ResizeSpace::Map => viewport.delta_screen_to_map(screen_delta),
                };
                let new_size = Size::new(
                    session.initial_size.width + delta.x,
                    session.initial_size.height + delta.y,
                )
                .at_least(settings.min_area_dimension);
                if new_size == session.last_size {
                    return Vec::new();
                }
                session.last_size = new_size;
                vec![UpdateIntent::ResizeArea {
                    area_id: session.area_id.clone(),
                    size: new_size,
                }]
            }

            InteractionState::Drawing { current, .. } => {
                *current = viewport.screen_to_map(position, origin);
                Vec::new()
            }
        }
    }
}
