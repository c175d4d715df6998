//! Room and desk creation tools

use crate::helpers::{TestStoreBuilder, area, press, pt, size};
use floorplan::input::InteractionController;
use floorplan::intents::UpdateIntent;
use floorplan::settings::{EditorSettings, PlacementMode};
use floorplan::types::{AreaKind, ToolType};

fn drag_to_size() -> EditorSettings {
    EditorSettings {
        placement: PlacementMode::DragToSize,
        ..EditorSettings::default()
    }
}

#[test]
fn test_room_click_centres_template_on_anchor() {
    let mut store = TestStoreBuilder::new()
        .with_tool(ToolType::Room)
        .with_offset(50.0, 50.0)
        .with_zoom(2.0)
        .build();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    let intents = controller.handle_pointer_down(&press(300.0, 200.0), &store, &settings);
    assert_eq!(intents.len(), 2);
    assert!(controller.state().is_idle());

    let UpdateIntent::CreateArea { area: created } = &intents[0] else {
        panic!("expected CreateArea, got {:?}", intents[0]);
    };
    assert_eq!(created.kind, AreaKind::Room);
    assert_eq!(created.position, pt(65.0, 15.0));
    assert_eq!(created.size, size(120.0, 120.0));
    assert_eq!(created.capacity, 8);
    assert_eq!(
        intents[1],
        UpdateIntent::SelectArea {
            area_id: Some(created.id.clone()),
        }
    );

    assert_eq!(store.apply_all(&intents), 2);
    assert_eq!(store.areas().len(), 1);
    assert_eq!(store.selected_area_id(), Some(&created.id));
}

#[test]
fn test_desk_click_uses_desk_template() {
    let store = TestStoreBuilder::new().with_tool(ToolType::Desk).build();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    let intents = controller.handle_pointer_down(&press(100.0, 100.0), &store, &settings);
    let UpdateIntent::CreateArea { area: created } = &intents[0] else {
        panic!("expected CreateArea");
    };
    assert_eq!(created.kind, AreaKind::Desk);
    assert_eq!(created.position, pt(80.0, 80.0));
    assert_eq!(created.size, size(40.0, 40.0));
    assert_eq!(created.capacity, 1);
}

#[test]
fn test_creation_tool_over_existing_area_is_noop() {
    let store = TestStoreBuilder::new()
        .with_area(area("room-1", AreaKind::Room, (0.0, 0.0), (120.0, 120.0)))
        .with_tool(ToolType::Desk)
        .build();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    assert!(controller.handle_pointer_down(&press(60.0, 60.0), &store, &settings).is_empty());
    assert!(controller.state().is_idle());
}

#[test]
fn test_custom_template_from_settings() {
    let store = TestStoreBuilder::new().with_tool(ToolType::Room).build();
    let mut settings = EditorSettings::default();
    settings.room.name = "Huddle".to_string();
    settings.room.size = size(60.0, 30.0);
    settings.room.capacity = 4;
    let mut controller = InteractionController::new();

    let intents = controller.handle_pointer_down(&press(100.0, 100.0), &store, &settings);
    let UpdateIntent::CreateArea { area: created } = &intents[0] else {
        panic!("expected CreateArea");
    };
    assert_eq!(created.name, "Huddle");
    assert_eq!(created.capacity, 4);
    assert_eq!(created.position, pt(70.0, 85.0));
}

#[test]
fn test_drag_to_size_creates_at_min_corner() {
    let mut store = TestStoreBuilder::new().with_tool(ToolType::Room).build();
    let settings = drag_to_size();
    let mut controller = InteractionController::new();

    // Drawn right-to-left and bottom-to-top
    assert!(controller.handle_pointer_down(&press(300.0, 250.0), &store, &settings).is_empty());
    assert!(controller.state().is_drawing());
    assert!(controller.handle_pointer_move(pt(200.0, 180.0), &store, &settings).is_empty());

    let intents = controller.handle_pointer_up(pt(180.0, 170.0), &store, &settings);
    assert!(controller.state().is_idle());
    let UpdateIntent::CreateArea { area: created } = &intents[0] else {
        panic!("expected CreateArea");
    };
    assert_eq!(created.position, pt(180.0, 170.0));
    assert_eq!(created.size, size(120.0, 80.0));

    store.apply_all(&intents);
    assert_eq!(store.selected_area_id(), Some(&created.id));
}

#[test]
fn test_drag_to_size_ignores_tiny_gesture() {
    let store = TestStoreBuilder::new().with_tool(ToolType::Desk).build();
    let settings = drag_to_size();
    let mut controller = InteractionController::new();

    controller.handle_pointer_down(&press(100.0, 100.0), &store, &settings);
    assert!(controller.handle_pointer_up(pt(103.0, 102.0), &store, &settings).is_empty());
}

#[test]
fn test_drag_to_size_floors_thin_side() {
    let store = TestStoreBuilder::new().with_tool(ToolType::Desk).build();
    let settings = drag_to_size();
    let mut controller = InteractionController::new();

    controller.handle_pointer_down(&press(100.0, 100.0), &store, &settings);
    let intents = controller.handle_pointer_up(pt(160.0, 101.0), &store, &settings);
    let UpdateIntent::CreateArea { area: created } = &intents[0] else {
        panic!("expected CreateArea");
    };
    assert_eq!(created.size, size(60.0, settings.min_area_dimension));
}

#[test]
fn test_drag_to_size_leave_creates_nothing() {
    let store = TestStoreBuilder::new().with_tool(ToolType::Room).build();
    let settings = drag_to_size();
    let mut controller = InteractionController::new();

    controller.handle_pointer_down(&press(100.0, 100.0), &store, &settings);
    controller.handle_pointer_move(pt(400.0, 400.0), &store, &settings);
    assert!(controller.handle_pointer_leave().is_empty());
    assert!(controller.state().is_idle());
}

#[test]
fn test_pan_tool_pans_viewport() {
    let mut store = TestStoreBuilder::new()
        .with_tool(ToolType::Pan)
        .with_offset(10.0, 10.0)
        .build();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    controller.handle_pointer_down(&press(100.0, 100.0), &store, &settings);
    assert!(controller.state().is_panning());

    let intents = controller.handle_pointer_move(pt(130.0, 80.0), &store, &settings);
    assert_eq!(intents, vec![UpdateIntent::PanViewport { offset: pt(40.0, -10.0) }]);
    store.apply_all(&intents);
    assert_eq!(store.viewport().offset(), pt(40.0, -10.0));

    assert!(controller.handle_pointer_up(pt(130.0, 80.0), &store, &settings).is_empty());
}

#[test]
fn test_wheel_and_buttons_zoom_within_bounds() {
    let mut store = TestStoreBuilder::new().build();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    for _ in 0..40 {
        let intents = controller.handle_zoom_button(true, &store, &settings);
        store.apply_all(&intents);
    }
    assert_eq!(store.viewport().scale(), settings.max_zoom);
    assert!(controller.handle_zoom_button(true, &store, &settings).is_empty());

    for _ in 0..80 {
        let intents = controller.handle_wheel(120.0, &store, &settings);
        store.apply_all(&intents);
    }
    assert_eq!(store.viewport().scale(), settings.min_zoom);
    assert!(controller.handle_wheel(0.0, &store, &settings).is_empty());
}
