//! Viewer mode: selection toggling and background panning

use crate::helpers::{TestStoreBuilder, area, middle_press, press, pt};
use floorplan::input::InteractionController;
use floorplan::intents::UpdateIntent;
use floorplan::settings::EditorSettings;
use floorplan::types::{AreaId, AreaKind, PointerButton, PointerEvent};

fn viewer_with_room() -> TestStoreBuilder {
    TestStoreBuilder::new()
        .viewer()
        .with_area(area("room-1", AreaKind::Room, (100.0, 100.0), (120.0, 120.0)))
}

#[test]
fn test_click_toggles_selection() {
    let mut store = viewer_with_room().build();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    let intents = controller.handle_pointer_down(&press(150.0, 150.0), &store, &settings);
    assert_eq!(
        intents,
        vec![UpdateIntent::SelectArea {
            area_id: Some(AreaId::from("room-1")),
        }]
    );
    store.apply_all(&intents);
    controller.handle_pointer_up(pt(150.0, 150.0), &store, &settings);

    let intents = controller.handle_pointer_down(&press(150.0, 150.0), &store, &settings);
    assert_eq!(intents, vec![UpdateIntent::SelectArea { area_id: None }]);
}

#[test]
fn test_viewer_never_drags_areas() {
    let store = viewer_with_room().selected("room-1").build();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    controller.handle_pointer_down(&press(150.0, 150.0), &store, &settings);
    assert!(!controller.state().is_dragging());
    assert!(controller.handle_pointer_move(pt(300.0, 300.0), &store, &settings).is_empty());
}

#[test]
fn test_background_drag_pans() {
    let mut store = viewer_with_room().build();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    controller.handle_pointer_down(&press(20.0, 20.0), &store, &settings);
    assert!(controller.state().is_panning());

    let intents = controller.handle_pointer_move(pt(50.0, 60.0), &store, &settings);
    store.apply_all(&intents);
    assert_eq!(store.viewport().offset(), pt(30.0, 40.0));
}

#[test]
fn test_middle_button_pans() {
    let store = viewer_with_room().build();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    controller.handle_pointer_down(&middle_press(150.0, 150.0), &store, &settings);
    assert!(controller.state().is_panning());
}

#[test]
fn test_secondary_button_does_nothing() {
    let store = viewer_with_room().build();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    let event = PointerEvent::new((20.0, 20.0), PointerButton::Secondary);
    assert!(controller.handle_pointer_down(&event, &store, &settings).is_empty());
    assert!(controller.state().is_idle());
}

#[test]
fn test_background_click_without_move_deselects() {
    let store = viewer_with_room().selected("room-1").build();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    controller.handle_pointer_down(&press(20.0, 20.0), &store, &settings);
    let intents = controller.handle_pointer_up(pt(20.0, 20.0), &store, &settings);
    assert_eq!(intents, vec![UpdateIntent::SelectArea { area_id: None }]);
}

#[test]
fn test_background_drag_keeps_selection() {
    let store = viewer_with_room().selected("room-1").build();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    controller.handle_pointer_down(&press(20.0, 20.0), &store, &settings);
    controller.handle_pointer_move(pt(60.0, 20.0), &store, &settings);
    assert!(controller.handle_pointer_up(pt(60.0, 20.0), &store, &settings).is_empty());
}
