//! Drives the turn systems through a headless Bevy app.
use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use color_cube::config::CubeConfig;
use color_cube::utils::objects::{CubeBody, TurnScheduler};
use color_cube::utils::systems_logic::TurnLogicPlugin;

const TICKS_PER_TURN: usize = 13;

fn app(start_engaged: bool) -> (App, Entity) {
    let mut config = CubeConfig::default();
    config.rotation.start_engaged = start_engaged;

    let mut app = App::new();
    app.insert_resource(config)
        .init_resource::<ButtonInput<KeyCode>>()
        .add_plugins(TurnLogicPlugin);
    let cube = app
        .world_mut()
        .spawn((Transform::from_xyz(0.0, 0.0, -200.0), CubeBody))
        .id();
    (app, cube)
}

// Presses a key for exactly one frame.
fn tap(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keyboard.release(key);
    keyboard.clear();
}

fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

fn rotation(app: &App, cube: Entity) -> Quat {
    app.world().get::<Transform>(cube).unwrap().rotation
}

#[test]
fn test_turn_up_completes_in_thirteen_frames() {
    let (mut app, cube) = app(true);
    tap(&mut app, KeyCode::ArrowUp);
    assert_eq!(rotation(&app, cube), Quat::IDENTITY);

    run_frames(&mut app, TICKS_PER_TURN - 1);
    assert!(!app.world().resource::<TurnScheduler>().is_idle());

    run_frames(&mut app, 1);
    assert!(app.world().resource::<TurnScheduler>().is_idle());
    let expected = Quat::from_rotation_x(FRAC_PI_2);
    assert!(rotation(&app, cube).abs_diff_eq(expected, 1e-4));

    run_frames(&mut app, 10);
    assert!(rotation(&app, cube).abs_diff_eq(expected, 1e-4));
    assert_eq!(
        app.world().get::<Transform>(cube).unwrap().translation,
        Vec3::new(0.0, 0.0, -200.0)
    );
}

#[test]
fn test_turn_right_is_negative_y() {
    let (mut app, cube) = app(true);
    tap(&mut app, KeyCode::ArrowRight);
    run_frames(&mut app, TICKS_PER_TURN);

    let expected = Quat::from_rotation_y(-FRAC_PI_2);
    assert!(rotation(&app, cube).abs_diff_eq(expected, 1e-4));
}

#[test]
fn test_disengaged_ignores_arrows_until_space() {
    let (mut app, cube) = app(false);
    tap(&mut app, KeyCode::ArrowLeft);
    run_frames(&mut app, TICKS_PER_TURN);
    assert_eq!(rotation(&app, cube), Quat::IDENTITY);

    tap(&mut app, KeyCode::Space);
    assert!(app.world().resource::<TurnScheduler>().is_engaged());

    tap(&mut app, KeyCode::ArrowLeft);
    run_frames(&mut app, TICKS_PER_TURN);
    let expected = Quat::from_rotation_y(FRAC_PI_2);
    assert!(rotation(&app, cube).abs_diff_eq(expected, 1e-4));
}

#[test]
fn test_turn_requested_mid_turn_is_dropped() {
    let (mut app, cube) = app(true);
    tap(&mut app, KeyCode::ArrowUp);
    run_frames(&mut app, 3);
    tap(&mut app, KeyCode::ArrowLeft);
    run_frames(&mut app, 2 * TICKS_PER_TURN);

    let expected = Quat::from_rotation_x(FRAC_PI_2);
    assert!(rotation(&app, cube).abs_diff_eq(expected, 1e-4));
}

#[test]
fn test_turns_compose_in_world_space() {
    let (mut app, cube) = app(true);
    tap(&mut app, KeyCode::ArrowLeft);
    run_frames(&mut app, TICKS_PER_TURN);
    tap(&mut app, KeyCode::ArrowUp);
    run_frames(&mut app, TICKS_PER_TURN);

    let expected = Quat::from_rotation_x(FRAC_PI_2) * Quat::from_rotation_y(FRAC_PI_2);
    assert!(rotation(&app, cube).abs_diff_eq(expected, 1e-4));
}

#[test]
fn test_two_arrows_in_one_frame_start_one_turn() {
    let (mut app, cube) = app(true);
    {
        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.press(KeyCode::ArrowUp);
        keyboard.press(KeyCode::ArrowLeft);
    }
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .reset_all();
    run_frames(&mut app, 2 * TICKS_PER_TURN);

    let about_x = Quat::from_rotation_x(FRAC_PI_2);
    let about_y = Quat::from_rotation_y(FRAC_PI_2);
    let turned = rotation(&app, cube);
    assert!(turned.abs_diff_eq(about_x, 1e-4) || turned.abs_diff_eq(about_y, 1e-4));
}
