//! Pointer down handling - selection, session start, click-to-place.

use crate::input::InteractionController;
use crate::input::state::{DragSession, InteractionState, ResizeSession};
use crate::input::ViewportTransform;
use crate::intents::UpdateIntent;
use crate::profile_scope;
use crate::settings::{EditorSettings, PlacementMode};
use crate::store::Store;
use crate::types::{AreaKind, Point, PointerButton, PointerEvent, ToolType, UiMode};
use tracing::debug;

impl InteractionController {
    pub fn handle_pointer_down(
        &mut self,
        event: &PointerEvent,
        store: &Store,
        settings: &EditorSettings,
    ) -> Vec<UpdateIntent> {
        profile_scope!("handle_pointer_down");

        if !event.position.is_finite() {
            debug!(?event, "ignoring pointer down with non-finite position");
            return Vec::new();
        }
        if self.state.is_active() {
            debug!(state = self.state.name(), "ignoring pointer down during active session");
            return Vec::new();
        }

        let viewport = store.viewport();
        let map_pos = viewport.screen_to_map(event.position, self.origin);

        match store.mode() {
            UiMode::View => self.viewer_pointer_down(event, map_pos, &viewport, store),
            UiMode::Edit => self.editor_pointer_down(event, map_pos, &viewport, store, settings),
        }
    }

    /// Viewer: areas toggle selection, empty map pans.
    fn viewer_pointer_down(
        &mut self,
        event: &PointerEvent,
        map_pos: Point,
        viewport: &ViewportTransform,
        store: &Store,
    ) -> Vec<UpdateIntent> {
        if event.button == PointerButton::Primary {
            if let Some(area) = store.area_at(map_pos) {
                let next = if store.selected_area_id() == Some(&area.id) {
                    None
                } else {
                    Some(area.id.clone())
                };
                return vec![UpdateIntent::SelectArea { area_id: next }];
            }
        }

        if matches!(event.button, PointerButton::Primary | PointerButton::Middle) {
            self.start_panning(event.position, viewport);
        }
        Vec::new()
    }

    fn editor_pointer_down(
        &mut self,
        event: &PointerEvent,
        map_pos: Point,
        viewport: &ViewportTransform,
        store: &Store,
        settings: &EditorSettings,
    ) -> Vec<UpdateIntent> {
        let tool = store.current_tool();

        if tool == ToolType::Pan || event.button == PointerButton::Middle {
            self.start_panning(event.position, viewport);
            return Vec::new();
        }
        if event.button != PointerButton::Primary {
            return Vec::new();
        }

        let hit = store.area_at(map_pos);

        // Creation tools only act on empty map
        if let Some(kind) = tool.creates() {
            if hit.is_some() {
                return Vec::new();
            }
            return match settings.placement {
                PlacementMode::Click => place_area(kind, map_pos, settings),
                PlacementMode::DragToSize => {
                    self.begin(InteractionState::Drawing {
                        kind,
                        start: map_pos,
                        current: map_pos,
                    });
                    Vec::new()
                }
            };
        }

        if tool != ToolType::Select {
            return Vec::new();
        }

        let Some(area) = hit else {
            // Clicked on empty map
            return if store.selected_area_id().is_some() {
                vec![UpdateIntent::SelectArea { area_id: None }]
            } else {
                Vec::new()
            };
        };

        if store.selected_area_id() != Some(&area.id) {
            return vec![UpdateIntent::SelectArea {
                area_id: Some(area.id.clone()),
            }];
        }

        if area.resize_handle_contains(map_pos, settings.resize_handle_size) {
            self.begin(InteractionState::Resizing(ResizeSession {
                area_id: area.id.clone(),
                press: event.position,
                initial_size: area.size,
                last_size: area.size,
            }));
        } else {
            self.begin(InteractionState::Dragging(DragSession {
                area_id: area.id.clone(),
                press: event.position,
                grab_offset: map_pos - area.position,
                last_position: area.position,
            }));
        }
        Vec::new()
    }

    fn start_panning(&mut self, position: Point, viewport: &ViewportTransform) {
        self.begin(InteractionState::Panning {
            grab: position - viewport.offset(),
            press: position,
            moved: false,
        });
    }
}

/// Template-sized area centred on `anchor`, then select it.
fn place_area(kind: AreaKind, anchor: Point, settings: &EditorSettings) -> Vec<UpdateIntent> {
    let template = settings.template(kind);
    let size = template.size.at_least(settings.min_area_dimension);
    let position = anchor - Point::new(size.width / 2.0, size.height / 2.0);
    let area = template.instantiate(kind, position, size);
    let area_id = area.id.clone();

    debug!(%area_id, ?position, "placing {}", kind.label());
    vec![
        UpdateIntent::CreateArea { area },
        UpdateIntent::SelectArea {
            area_id: Some(area_id),
        },
    ]
}
