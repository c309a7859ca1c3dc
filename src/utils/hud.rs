//! On-screen status line.
use bevy::prelude::*;

use shared::{RotationScheduler, SchedulerState};

use crate::utils::objects::{StatusText, TurnScheduler};

/// Text shown for the current scheduler state.
pub fn status_line(scheduler: &RotationScheduler) -> String {
    let mode = if scheduler.is_engaged() {
        "ENGAGED"
    } else {
        "DISENGAGED"
    };
    let motion = match scheduler.state() {
        SchedulerState::Idle => "idle",
        SchedulerState::TurningX => "turning X",
        SchedulerState::TurningY => "turning Y",
    };
    format!("Rotation {mode} (SPACE) | Arrow Keys: Turn | {motion}")
}

/// Rewrites the status line only when its text changes.
pub fn update_status_text(
    scheduler: Res<TurnScheduler>,
    mut texts: Query<&mut Text, With<StatusText>>,
) {
    let line = status_line(&scheduler);
    for mut text in texts.iter_mut() {
        if text.0 != line {
            text.0 = line.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Axis;

    #[test]
    fn test_status_line() {
        let mut scheduler = RotationScheduler::new();
        assert_eq!(
            status_line(&scheduler),
            "Rotation DISENGAGED (SPACE) | Arrow Keys: Turn | idle"
        );

        scheduler.set_engaged(true);
        scheduler.request_turn(Axis::Y, 1.0);
        assert_eq!(
            status_line(&scheduler),
            "Rotation ENGAGED (SPACE) | Arrow Keys: Turn | turning Y"
        );
    }
}
