#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::ZOOM_STEP;

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn core() -> EngineCore {
    EngineCore::with_seed(42)
}

fn cursor_core() -> EngineCore {
    let mut core = core();
    core.toggle_mode();
    core
}

fn wheel(dy: f64) -> WheelDelta {
    WheelDelta { dx: 0.0, dy }
}

fn has_action<F>(actions: &[Action], pred: F) -> bool
where
    F: Fn(&Action) -> bool,
{
    actions.iter().any(pred)
}

fn has_render_needed(actions: &[Action]) -> bool {
    has_action(actions, |a| matches!(a, Action::RenderNeeded))
}

fn has_shape_moved(actions: &[Action]) -> bool {
    has_action(actions, |a| matches!(a, Action::ShapeMoved { .. }))
}

fn has_camera_changed(actions: &[Action]) -> bool {
    has_action(actions, |a| matches!(a, Action::CameraChanged(_)))
}

fn cursor_of(actions: &[Action]) -> Option<&'static str> {
    actions.iter().rev().find_map(|a| match a {
        Action::SetCursor(c) => Some(*c),
        _ => None,
    })
}

fn assert_modes_exclusive(core: &EngineCore) {
    let mode = core.mode();
    assert_ne!(mode.background_draggable(), mode.shapes_draggable());
}

// =============================================================
// EngineCore: construction and defaults
// =============================================================

#[test]
fn core_default_camera_is_identity() {
    let cam = core().camera();
    assert_eq!(cam.pan_x, 0.0);
    assert_eq!(cam.pan_y, 0.0);
    assert_eq!(cam.zoom, 1.0);
}

#[test]
fn core_starts_in_draw_mode() {
    assert_eq!(core().mode(), Mode::Draw);
}

#[test]
fn core_starts_empty_and_idle() {
    let core = core();
    assert_eq!(core.shape_count(), 0);
    assert!(core.pending_kind().is_none());
    assert!(matches!(core.input, InputState::Idle));
}

#[test]
fn core_new_uses_os_seed() {
    let core = EngineCore::new();
    assert_eq!(core.shape_count(), 0);
}

#[test]
fn core_default_viewport_is_zero() {
    let core = core();
    assert_eq!(core.viewport_width, 0.0);
    assert_eq!(core.viewport_height, 0.0);
    assert_eq!(core.dpr, 1.0);
}

// =============================================================
// Toolbar: select / add
// =============================================================

#[test]
fn add_without_selection_is_noop() {
    let mut core = core();
    let actions = core.add_pending();
    assert!(actions.is_empty());
    assert_eq!(core.shape_count(), 0);
}

#[test]
fn select_kind_reports_and_remembers() {
    let mut core = core();
    let actions = core.select_kind(ShapeKind::Triangle);
    assert_eq!(actions, vec![Action::KindSelected(ShapeKind::Triangle)]);
    assert_eq!(core.pending_kind(), Some(ShapeKind::Triangle));
}

#[test]
fn select_circle_then_add_creates_first_circle() {
    let mut core = core();
    core.select_kind(ShapeKind::Circle);
    let actions = core.add_pending();

    assert_eq!(core.shape_count(), 1);
    let shape = *core.shape(ShapeId(1)).unwrap();
    assert_eq!(shape.kind(), ShapeKind::Circle);
    assert!((100.0..400.0).contains(&shape.x));
    assert!((100.0..400.0).contains(&shape.y));
    assert_eq!(actions, vec![Action::ShapeAdded(shape), Action::RenderNeeded]);
}

#[test]
fn selection_persists_after_add() {
    let mut core = core();
    core.select_kind(ShapeKind::Rectangle);
    core.add_pending();
    core.add_pending();
    assert_eq!(core.pending_kind(), Some(ShapeKind::Rectangle));
    assert_eq!(core.shape_count(), 2);
    assert!(core.store.iter().all(|s| s.kind() == ShapeKind::Rectangle));
}

#[test]
fn changing_selection_changes_next_add_only() {
    let mut core = core();
    core.select_kind(ShapeKind::Rectangle);
    core.add_pending();
    core.select_kind(ShapeKind::Triangle);
    core.add_pending();
    let kinds: Vec<ShapeKind> = core.store.iter().map(Shape::kind).collect();
    assert_eq!(kinds, vec![ShapeKind::Rectangle, ShapeKind::Triangle]);
}

#[test]
fn add_n_shapes_yields_ids_one_to_n() {
    let mut core = core();
    for kind in ShapeKind::ALL.iter().cycle().take(9) {
        core.add_shape(*kind);
    }
    let ids: Vec<u32> = core.store.iter().map(|s| s.id().0).collect();
    assert_eq!(ids, (1..=9).collect::<Vec<u32>>());
}

#[test]
fn same_seed_spawns_same_positions() {
    let mut a = EngineCore::with_seed(9);
    let mut b = EngineCore::with_seed(9);
    assert_eq!(a.add_shape(ShapeKind::Circle), b.add_shape(ShapeKind::Circle));
}

#[test]
fn add_works_in_cursor_mode() {
    let mut core = cursor_core();
    core.select_kind(ShapeKind::Circle);
    core.add_pending();
    assert_eq!(core.shape_count(), 1);
}

// =============================================================
// Toolbar: mode toggle
// =============================================================

#[test]
fn toggle_mode_flips_and_reports() {
    let mut core = core();
    let actions = core.toggle_mode();
    assert_eq!(core.mode(), Mode::Cursor);
    assert!(has_action(&actions, |a| *a == Action::ModeChanged(Mode::Cursor)));

    let actions = core.toggle_mode();
    assert_eq!(core.mode(), Mode::Draw);
    assert!(has_action(&actions, |a| *a == Action::ModeChanged(Mode::Draw)));
}

#[test]
fn toggle_mode_cancels_pan_in_flight() {
    let mut core = core();
    core.on_pointer_down(pt(10.0, 10.0), Button::Primary);
    assert!(matches!(core.input, InputState::Panning { .. }));

    core.toggle_mode();
    assert!(matches!(core.input, InputState::Idle));

    // Further movement must not pan: the background is not draggable now.
    core.on_pointer_move(pt(200.0, 200.0));
    assert_eq!(core.camera().pan(), pt(0.0, 0.0));
}

#[test]
fn toggle_mode_cancels_shape_drag_in_flight() {
    let mut core = cursor_core();
    core.store.push(ShapeKind::Circle, 100.0, 100.0);
    core.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    core.toggle_mode();

    core.on_pointer_move(pt(150.0, 150.0));
    assert_eq!(core.shape(ShapeId(1)).unwrap().position(), pt(100.0, 100.0));
}

#[test]
fn modes_stay_exclusive_through_a_session() {
    let mut core = core();
    core.add_shape(ShapeKind::Rectangle);
    assert_modes_exclusive(&core);
    for i in 0..6 {
        core.on_pointer_down(pt(150.0, 150.0), Button::Primary);
        assert_modes_exclusive(&core);
        core.on_pointer_move(pt(160.0 + f64::from(i), 170.0));
        assert_modes_exclusive(&core);
        core.on_pointer_up(pt(160.0 + f64::from(i), 170.0), Button::Primary);
        core.toggle_mode();
        assert_modes_exclusive(&core);
    }
}

// =============================================================
// move_shape
// =============================================================

#[test]
fn move_shape_updates_only_target() {
    let mut core = core();
    core.store.push(ShapeKind::Rectangle, 100.0, 100.0);
    core.store.push(ShapeKind::Circle, 200.0, 200.0);

    let actions = core.move_shape(ShapeId(1), 5.0, 6.0);
    assert_eq!(actions, vec![Action::ShapeMoved { id: ShapeId(1), x: 5.0, y: 6.0 }, Action::RenderNeeded]);
    assert_eq!(core.shape(ShapeId(1)).unwrap().position(), pt(5.0, 6.0));
    assert_eq!(core.shape(ShapeId(2)).unwrap().position(), pt(200.0, 200.0));
}

#[test]
fn move_shape_unknown_id_is_silent() {
    let mut core = core();
    assert!(core.move_shape(ShapeId(3), 0.0, 0.0).is_empty());
    assert_eq!(core.shape_count(), 0);
}

// =============================================================
// set_viewport
// =============================================================

#[test]
fn set_viewport_stores_dimensions() {
    let mut core = core();
    core.set_viewport(1024.0, 768.0, 2.0);
    assert_eq!(core.viewport_width, 1024.0);
    assert_eq!(core.viewport_height, 768.0);
    assert_eq!(core.dpr, 2.0);
}

// =============================================================
// Draw mode: panning
// =============================================================

#[test]
fn draw_mode_drag_pans_background() {
    let mut core = core();
    let down = core.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    assert_eq!(cursor_of(&down), Some("grabbing"));
    assert!(matches!(core.input, InputState::Panning { .. }));

    let actions = core.on_pointer_move(pt(150.0, 130.0));
    assert!(has_camera_changed(&actions));
    assert!(has_render_needed(&actions));
    assert_eq!(core.camera().pan(), pt(50.0, 30.0));

    core.on_pointer_up(pt(150.0, 130.0), Button::Primary);
    assert!(matches!(core.input, InputState::Idle));
    assert_eq!(core.camera().pan(), pt(50.0, 30.0));
}

#[test]
fn draw_mode_pan_is_absolute_from_drag_start() {
    let mut core = core();
    core.camera.pan_to(pt(-20.0, 10.0));
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    core.on_pointer_move(pt(5.0, 5.0));
    core.on_pointer_move(pt(30.0, -40.0));
    assert_eq!(core.camera().pan(), pt(10.0, -30.0));
}

#[test]
fn draw_mode_drag_over_shape_pans_and_leaves_shape() {
    let mut core = core();
    core.store.push(ShapeKind::Rectangle, 100.0, 100.0);
    core.on_pointer_down(pt(150.0, 150.0), Button::Primary);
    core.on_pointer_move(pt(170.0, 190.0));
    core.on_pointer_up(pt(170.0, 190.0), Button::Primary);

    assert_eq!(core.camera().pan(), pt(20.0, 40.0));
    assert_eq!(core.shape(ShapeId(1)).unwrap().position(), pt(100.0, 100.0));
}

#[test]
fn pan_does_not_change_zoom() {
    let mut core = core();
    core.camera.zoom = 2.5;
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    core.on_pointer_move(pt(40.0, 40.0));
    assert_eq!(core.camera().zoom, 2.5);
}

#[test]
fn secondary_button_does_not_start_gesture() {
    let mut core = core();
    assert!(core.on_pointer_down(pt(0.0, 0.0), Button::Secondary).is_empty());
    assert!(matches!(core.input, InputState::Idle));
}

#[test]
fn secondary_release_does_not_end_pan() {
    let mut core = core();
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    core.on_pointer_up(pt(0.0, 0.0), Button::Secondary);
    assert!(matches!(core.input, InputState::Panning { .. }));
}

#[test]
fn idle_move_in_draw_mode_shows_default_cursor() {
    let mut core = core();
    core.store.push(ShapeKind::Circle, 100.0, 100.0);
    let actions = core.on_pointer_move(pt(100.0, 100.0));
    assert_eq!(cursor_of(&actions), Some("default"));
    assert_eq!(core.camera(), Camera::default());
}

// =============================================================
// Cursor mode: shape drag
// =============================================================

#[test]
fn cursor_mode_drag_moves_shape_by_exact_delta() {
    let mut core = cursor_core();
    core.store.push(ShapeKind::Circle, 100.0, 100.0);
    core.store.push(ShapeKind::Rectangle, 300.0, 300.0);

    core.on_pointer_down(pt(110.0, 95.0), Button::Primary);
    assert!(matches!(core.input, InputState::DraggingShape { id: ShapeId(1), .. }));

    let moved = core.on_pointer_move(pt(135.0, 80.0));
    assert!(has_shape_moved(&moved));
    assert!(has_render_needed(&moved));

    core.on_pointer_up(pt(160.0, 135.0), Button::Primary);
    // Dragged by (50, 40) overall.
    assert_eq!(core.shape(ShapeId(1)).unwrap().position(), pt(150.0, 140.0));
    assert_eq!(core.shape(ShapeId(2)).unwrap().position(), pt(300.0, 300.0));
    assert_eq!(core.camera(), Camera::default());
    assert!(matches!(core.input, InputState::Idle));
}

#[test]
fn cursor_mode_drag_reports_intermediate_positions() {
    let mut core = cursor_core();
    core.store.push(ShapeKind::Rectangle, 100.0, 100.0);
    core.on_pointer_down(pt(120.0, 120.0), Button::Primary);
    let actions = core.on_pointer_move(pt(125.0, 130.0));
    assert!(has_action(&actions, |a| *a == Action::ShapeMoved { id: ShapeId(1), x: 105.0, y: 110.0 }));
}

#[test]
fn cursor_mode_drag_grabs_topmost_shape() {
    let mut core = cursor_core();
    core.store.push(ShapeKind::Rectangle, 100.0, 100.0);
    core.store.push(ShapeKind::Circle, 150.0, 150.0);

    core.on_pointer_down(pt(150.0, 150.0), Button::Primary);
    core.on_pointer_up(pt(160.0, 160.0), Button::Primary);

    assert_eq!(core.shape(ShapeId(1)).unwrap().position(), pt(100.0, 100.0));
    assert_eq!(core.shape(ShapeId(2)).unwrap().position(), pt(160.0, 160.0));
}

#[test]
fn cursor_mode_background_drag_does_nothing() {
    let mut core = cursor_core();
    core.store.push(ShapeKind::Circle, 100.0, 100.0);

    let down = core.on_pointer_down(pt(600.0, 600.0), Button::Primary);
    assert!(down.is_empty());
    assert!(matches!(core.input, InputState::Idle));

    core.on_pointer_move(pt(700.0, 650.0));
    core.on_pointer_up(pt(700.0, 650.0), Button::Primary);
    assert_eq!(core.camera(), Camera::default());
    assert_eq!(core.shape(ShapeId(1)).unwrap().position(), pt(100.0, 100.0));
}

#[test]
fn cursor_mode_drag_under_zoom_and_pan_follows_pointer_in_world_units() {
    let mut core = cursor_core();
    core.camera = Camera { pan_x: 50.0, pan_y: -20.0, zoom: 2.0 };
    core.store.push(ShapeKind::Rectangle, 100.0, 100.0);

    // World (110, 110) is at screen (270, 200).
    core.on_pointer_down(pt(270.0, 200.0), Button::Primary);
    core.on_pointer_up(pt(290.0, 240.0), Button::Primary);

    // Screen delta (20, 40) is world delta (10, 20) at zoom 2.
    assert_eq!(core.shape(ShapeId(1)).unwrap().position(), pt(110.0, 120.0));
}

#[test]
fn cursor_mode_triangle_can_be_dragged() {
    let mut core = cursor_core();
    core.store.push(ShapeKind::Triangle, 200.0, 200.0);
    core.on_pointer_down(pt(200.0, 200.0), Button::Primary);
    core.on_pointer_up(pt(180.0, 230.0), Button::Primary);
    assert_eq!(core.shape(ShapeId(1)).unwrap().position(), pt(180.0, 230.0));
}

#[test]
fn cursor_mode_hover_shows_grab_over_shape() {
    let mut core = cursor_core();
    core.store.push(ShapeKind::Circle, 100.0, 100.0);
    assert_eq!(cursor_of(&core.on_pointer_move(pt(100.0, 100.0))), Some("grab"));
    assert_eq!(cursor_of(&core.on_pointer_move(pt(400.0, 400.0))), Some("default"));
}

#[test]
fn pointer_up_without_gesture_only_sets_cursor() {
    let mut core = core();
    let actions = core.on_pointer_up(pt(0.0, 0.0), Button::Primary);
    assert_eq!(actions, vec![Action::SetCursor("default")]);
}

// =============================================================
// Wheel: zoom
// =============================================================

#[test]
fn wheel_positive_delta_zooms_in() {
    let mut core = core();
    let actions = core.on_wheel(pt(400.0, 300.0), wheel(100.0));
    assert!((core.camera().zoom - ZOOM_STEP).abs() < 1e-12);
    assert!(has_camera_changed(&actions));
    assert!(has_render_needed(&actions));
}

#[test]
fn wheel_negative_delta_zooms_out() {
    let mut core = core();
    core.on_wheel(pt(400.0, 300.0), wheel(-100.0));
    assert!((core.camera().zoom - 1.0 / ZOOM_STEP).abs() < 1e-12);
}

#[test]
fn wheel_zoom_preserves_world_point_under_cursor() {
    let mut core = core();
    core.camera = Camera { pan_x: -120.0, pan_y: 45.0, zoom: 0.8 };
    let screen = pt(333.0, 222.0);
    let before = core.camera().screen_to_world(screen);

    core.on_wheel(screen, wheel(10.0));
    let after = core.camera().screen_to_world(screen);

    assert!((before.x - after.x).abs() < 1e-9);
    assert!((before.y - after.y).abs() < 1e-9);
}

#[test]
fn wheel_n_steps_each_way_is_geometric() {
    let mut core = core();
    for _ in 0..8 {
        core.on_wheel(pt(10.0, 10.0), wheel(1.0));
    }
    assert!((core.camera().zoom - ZOOM_STEP.powi(8)).abs() < 1e-9);

    let mut core = EngineCore::with_seed(1);
    for _ in 0..8 {
        core.on_wheel(pt(10.0, 10.0), wheel(-1.0));
    }
    assert!((core.camera().zoom - 1.0 / ZOOM_STEP.powi(8)).abs() < 1e-9);
}

#[test]
fn wheel_ignores_horizontal_delta() {
    let mut core = core();
    core.on_wheel(pt(0.0, 0.0), WheelDelta { dx: 500.0, dy: 1.0 });
    assert!((core.camera().zoom - ZOOM_STEP).abs() < 1e-12);
}

#[test]
fn wheel_zoom_does_not_move_shapes() {
    let mut core = core();
    core.store.push(ShapeKind::Rectangle, 120.0, 130.0);
    core.on_wheel(pt(200.0, 200.0), wheel(1.0));
    assert_eq!(core.shape(ShapeId(1)).unwrap().position(), pt(120.0, 130.0));
}

#[test]
fn wheel_during_pan_keeps_zoomed_view_under_pointer() {
    let mut core = core();
    core.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    core.on_pointer_move(pt(120.0, 100.0));
    core.on_wheel(pt(120.0, 100.0), wheel(1.0));
    let after_zoom = core.camera();

    core.on_pointer_move(pt(130.0, 110.0));
    assert!((core.camera().pan_x - (after_zoom.pan_x + 10.0)).abs() < 1e-9);
    assert!((core.camera().pan_y - (after_zoom.pan_y + 10.0)).abs() < 1e-9);
    assert_eq!(core.camera().zoom, after_zoom.zoom);
}

// =============================================================
// Gesture cancellation and extra pointers
// =============================================================

#[test]
fn cancel_gesture_ends_pan_without_moving_camera() {
    let mut core = core();
    core.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    let actions = core.cancel_gesture();
    assert_eq!(cursor_of(&actions), Some("default"));
    assert!(matches!(core.input, InputState::Idle));

    // A hover after the cancel is not a drag.
    core.on_pointer_move(pt(300.0, 250.0));
    assert_eq!(core.camera(), Camera::default());
}

#[test]
fn cancel_gesture_ends_shape_drag_without_moving_shape() {
    let mut core = cursor_core();
    core.store.push(ShapeKind::Rectangle, 100.0, 100.0);
    core.on_pointer_down(pt(150.0, 150.0), Button::Primary);
    core.on_pointer_move(pt(160.0, 150.0));
    core.cancel_gesture();

    let actions = core.on_pointer_move(pt(400.0, 400.0));
    assert!(!has_shape_moved(&actions));
    assert_eq!(core.shape(ShapeId(1)).unwrap().position(), pt(110.0, 100.0));
}

#[test]
fn cancel_gesture_when_idle_is_silent() {
    let mut core = core();
    assert!(core.cancel_gesture().is_empty());
}

#[test]
fn second_pointer_down_does_not_restart_pan() {
    let mut core = core();
    core.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    core.on_pointer_move(pt(120.0, 100.0));
    assert!(core.on_pointer_down(pt(500.0, 500.0), Button::Primary).is_empty());

    core.on_pointer_move(pt(130.0, 110.0));
    assert_eq!(core.camera().pan(), pt(30.0, 10.0));
}

#[test]
fn second_pointer_down_does_not_steal_shape_drag() {
    let mut core = cursor_core();
    core.store.push(ShapeKind::Circle, 100.0, 100.0);
    core.store.push(ShapeKind::Circle, 300.0, 300.0);
    core.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    core.on_pointer_down(pt(300.0, 300.0), Button::Primary);

    core.on_pointer_move(pt(110.0, 100.0));
    assert_eq!(core.shape(ShapeId(1)).unwrap().position(), pt(110.0, 100.0));
    assert_eq!(core.shape(ShapeId(2)).unwrap().position(), pt(300.0, 300.0));
}
