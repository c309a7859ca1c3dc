//! Keyboard controls for the cube.
use bevy::prelude::*;

use shared::constants::rotation_constants::QUARTER_TURN;
use shared::{Axis, RequestOutcome, RotationScheduler};

use crate::utils::objects::TurnScheduler;

/// Player actions on the cube
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CubeAction {
    ToggleEngaged,
    TurnLeft,
    TurnRight,
    TurnUp,
    TurnDown,
}

impl CubeAction {
    /// Axis and signed angle of a turn action, `None` for the toggle.
    pub fn turn(self) -> Option<(Axis, f32)> {
        match self {
            CubeAction::ToggleEngaged => None,
            CubeAction::TurnLeft => Some((Axis::Y, QUARTER_TURN)),
            CubeAction::TurnRight => Some((Axis::Y, -QUARTER_TURN)),
            CubeAction::TurnUp => Some((Axis::X, QUARTER_TURN)),
            CubeAction::TurnDown => Some((Axis::X, -QUARTER_TURN)),
        }
    }

    pub fn apply(self, scheduler: &mut RotationScheduler) {
        match self.turn() {
            Some((axis, angle)) => {
                if scheduler.request_turn(axis, angle) == RequestOutcome::Accepted {
                    debug!("{:?}: turning {:?} by {:+.3} rad", self, axis, angle);
                }
            }
            None => {
                let engaged = scheduler.toggle_engaged();
                info!("Rotation {}", if engaged { "engaged" } else { "disengaged" });
            }
        }
    }
}

/// Map a key to a cube action.
pub fn action_for_key(key: KeyCode) -> Option<CubeAction> {
    match key {
        KeyCode::Space => Some(CubeAction::ToggleEngaged),
        KeyCode::ArrowLeft => Some(CubeAction::TurnLeft),
        KeyCode::ArrowRight => Some(CubeAction::TurnRight),
        KeyCode::ArrowUp => Some(CubeAction::TurnUp),
        KeyCode::ArrowDown => Some(CubeAction::TurnDown),
        _ => None,
    }
}

/// Handle keyboard inputs, one action per key pressed this frame
pub fn handle_keyboard_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut scheduler: ResMut<TurnScheduler>,
) {
    for action in keyboard.get_just_pressed().copied().filter_map(action_for_key) {
        action.apply(&mut scheduler);
    }
}
