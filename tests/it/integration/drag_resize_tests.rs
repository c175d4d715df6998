//! Drag and resize gestures in the editor

use crate::helpers::{TestStoreBuilder, area, press, pt, size};
use floorplan::input::InteractionController;
use floorplan::intents::UpdateIntent;
use floorplan::settings::{EditorSettings, ResizeSpace};
use floorplan::store::Store;
use floorplan::types::{AreaId, AreaKind, Point, Size};

fn selected_desk_store() -> Store {
    TestStoreBuilder::new()
        .with_area(area("desk-1", AreaKind::Desk, (100.0, 100.0), (40.0, 40.0)))
        .selected("desk-1")
        .build()
}

/// Run one move through the controller and apply what it emits
fn move_and_apply(
    controller: &mut InteractionController,
    store: &mut Store,
    settings: &EditorSettings,
    to: Point,
) -> Vec<UpdateIntent> {
    let intents = controller.handle_pointer_move(to, store, settings);
    store.apply_all(&intents);
    intents
}

#[test]
fn test_drag_preserves_press_offset() {
    let mut store = selected_desk_store();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    let intents = controller.handle_pointer_down(&press(120.0, 120.0), &store, &settings);
    assert!(intents.is_empty());
    assert!(controller.state().is_dragging());

    let intents = move_and_apply(&mut controller, &mut store, &settings, pt(200.0, 150.0));
    assert_eq!(
        intents,
        vec![UpdateIntent::MoveArea {
            area_id: AreaId::from("desk-1"),
            position: pt(180.0, 130.0),
        }]
    );

    controller.handle_pointer_up(pt(200.0, 150.0), &store, &settings);
    assert!(controller.state().is_idle());
    assert_eq!(store.area(&AreaId::from("desk-1")).unwrap().position, pt(180.0, 130.0));
}

#[test]
fn test_drag_is_exact_at_any_zoom() {
    let settings = EditorSettings::default();

    for (zoom, offset) in [(1.0, (0.0, 0.0)), (2.0, (50.0, -30.0)), (0.5, (-10.0, 25.0))] {
        let mut store = TestStoreBuilder::new()
            .with_area(area("room-1", AreaKind::Room, (10.0, 20.0), (120.0, 120.0)))
            .selected("room-1")
            .with_zoom(zoom)
            .with_offset(offset.0, offset.1)
            .build();
        let mut controller = InteractionController::new();
        let viewport = store.viewport();

        // Press in the middle of the room, then move by a known map delta
        let press_map = pt(40.0, 50.0);
        let press_screen = viewport.map_to_screen(press_map, Point::ZERO);
        let delta = pt(37.0, -12.0);
        let target = viewport.map_to_screen(press_map + delta, Point::ZERO);

        controller.handle_pointer_down(&press(press_screen.x, press_screen.y), &store, &settings);
        move_and_apply(&mut controller, &mut store, &settings, target);

        let position = store.area(&AreaId::from("room-1")).unwrap().position;
        assert!((position.x - 47.0).abs() < 1e-9, "zoom {zoom}: x = {}", position.x);
        assert!((position.y - 8.0).abs() < 1e-9, "zoom {zoom}: y = {}", position.y);
    }
}

#[test]
fn test_click_on_selected_area_emits_no_move() {
    let store = selected_desk_store();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    assert!(controller.handle_pointer_down(&press(120.0, 120.0), &store, &settings).is_empty());
    assert!(controller.handle_pointer_move(pt(120.0, 120.0), &store, &settings).is_empty());
    assert!(controller.handle_pointer_up(pt(120.0, 120.0), &store, &settings).is_empty());
}

#[test]
fn test_repeated_move_to_same_point_emits_once() {
    let mut store = selected_desk_store();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    controller.handle_pointer_down(&press(120.0, 120.0), &store, &settings);
    assert_eq!(move_and_apply(&mut controller, &mut store, &settings, pt(130.0, 130.0)).len(), 1);
    assert!(move_and_apply(&mut controller, &mut store, &settings, pt(130.0, 130.0)).is_empty());
}

#[test]
fn test_press_on_unselected_area_only_selects() {
    let store = TestStoreBuilder::new()
        .with_area(area("desk-1", AreaKind::Desk, (100.0, 100.0), (40.0, 40.0)))
        .build();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    let intents = controller.handle_pointer_down(&press(120.0, 120.0), &store, &settings);
    assert_eq!(
        intents,
        vec![UpdateIntent::SelectArea {
            area_id: Some(AreaId::from("desk-1")),
        }]
    );
    assert!(controller.state().is_idle());
}

#[test]
fn test_press_on_empty_map_clears_selection() {
    let store = selected_desk_store();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    let intents = controller.handle_pointer_down(&press(500.0, 500.0), &store, &settings);
    assert_eq!(intents, vec![UpdateIntent::SelectArea { area_id: None }]);

    let unselected = TestStoreBuilder::new().build();
    assert!(controller.handle_pointer_down(&press(500.0, 500.0), &unselected, &settings).is_empty());
}

#[test]
fn test_resize_from_handle() {
    let mut store = selected_desk_store();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    // Bottom-right corner of the desk is (140, 140)
    controller.handle_pointer_down(&press(135.0, 135.0), &store, &settings);
    assert!(controller.state().is_resizing());

    let intents = move_and_apply(&mut controller, &mut store, &settings, pt(195.0, 155.0));
    assert_eq!(
        intents,
        vec![UpdateIntent::ResizeArea {
            area_id: AreaId::from("desk-1"),
            size: size(100.0, 60.0),
        }]
    );

    controller.handle_pointer_up(pt(195.0, 155.0), &store, &settings);
    let desk = store.area(&AreaId::from("desk-1")).unwrap();
    assert_eq!(desk.size, size(100.0, 60.0));
    assert_eq!(desk.position, pt(100.0, 100.0));
}

#[test]
fn test_resize_never_below_minimum() {
    let mut store = selected_desk_store();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    controller.handle_pointer_down(&press(138.0, 138.0), &store, &settings);
    for target in [pt(0.0, 0.0), pt(-500.0, 138.0), pt(138.0, -9000.0)] {
        move_and_apply(&mut controller, &mut store, &settings, target);
        let desk = store.area(&AreaId::from("desk-1")).unwrap();
        assert!(desk.size.width >= settings.min_area_dimension);
        assert!(desk.size.height >= settings.min_area_dimension);
    }
}

#[test]
fn test_resize_delta_space() {
    let build = || {
        TestStoreBuilder::new()
            .with_area(area("room-1", AreaKind::Room, (0.0, 0.0), (100.0, 100.0)))
            .selected("room-1")
            .with_zoom(2.0)
            .build()
    };

    // Handle at map (95, 95) is screen (190, 190) at scale 2
    let mut screen = EditorSettings::default();
    screen.resize_space = ResizeSpace::Screen;
    let store = build();
    let mut controller = InteractionController::new();
    controller.handle_pointer_down(&press(190.0, 190.0), &store, &screen);
    let intents = controller.handle_pointer_move(pt(210.0, 230.0), &store, &screen);
    assert_eq!(
        intents,
        vec![UpdateIntent::ResizeArea {
            area_id: AreaId::from("room-1"),
            size: Size::new(120.0, 140.0),
        }]
    );

    let mut map = EditorSettings::default();
    map.resize_space = ResizeSpace::Map;
    let store = build();
    let mut controller = InteractionController::new();
    controller.handle_pointer_down(&press(190.0, 190.0), &store, &map);
    let intents = controller.handle_pointer_move(pt(210.0, 230.0), &store, &map);
    assert_eq!(
        intents,
        vec![UpdateIntent::ResizeArea {
            area_id: AreaId::from("room-1"),
            size: Size::new(110.0, 120.0),
        }]
    );
}

#[test]
fn test_pointer_leave_ends_session_without_intents() {
    let store = selected_desk_store();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    controller.handle_pointer_down(&press(120.0, 120.0), &store, &settings);
    assert!(controller.is_active());
    assert!(controller.handle_pointer_leave().is_empty());
    assert!(controller.state().is_idle());

    // Moves after the session ended do nothing
    assert!(controller.handle_pointer_move(pt(300.0, 300.0), &store, &settings).is_empty());
}

#[test]
fn test_second_press_during_session_is_ignored() {
    let store = selected_desk_store();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    controller.handle_pointer_down(&press(120.0, 120.0), &store, &settings);
    let before = controller.state().clone();
    assert!(controller.handle_pointer_down(&press(500.0, 500.0), &store, &settings).is_empty());
    assert_eq!(controller.state(), &before);
}

#[test]
fn test_non_finite_input_is_ignored() {
    let store = selected_desk_store();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    assert!(controller.handle_pointer_down(&press(f64::NAN, 120.0), &store, &settings).is_empty());
    assert!(controller.state().is_idle());

    controller.handle_pointer_down(&press(120.0, 120.0), &store, &settings);
    assert!(controller.handle_pointer_move(pt(f64::INFINITY, 0.0), &store, &settings).is_empty());
    assert!(controller.is_active());
}

#[test]
fn test_move_for_deleted_area_is_noop() {
    let mut store = selected_desk_store();
    let settings = EditorSettings::default();
    let mut controller = InteractionController::new();

    controller.handle_pointer_down(&press(120.0, 120.0), &store, &settings);
    store.apply(&UpdateIntent::DeleteArea {
        area_id: AreaId::from("desk-1"),
    });

    let intents = controller.handle_pointer_move(pt(200.0, 200.0), &store, &settings);
    assert_eq!(intents.len(), 1);
    assert_eq!(store.apply_all(&intents), 0);
    assert!(store.areas().is_empty());
}
