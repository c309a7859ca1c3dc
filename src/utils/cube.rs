//! Applies scheduled turns to the cube transform.

use bevy::prelude::*;
use shared::{FaceId, TurnIncrement};

use crate::utils::objects::{CubeBody, TurnScheduler};

/// Rotate a transform by a turn increment in world space.
/// X is applied first, then Y, each pre-multiplied onto the current rotation
/// so repeated small steps never drift relative to the camera. Translation is untouched.
pub fn apply_turn_increment(transform: &mut Transform, increment: TurnIncrement) {
    transform.rotate(Quat::from_rotation_x(increment.dx));
    transform.rotate(Quat::from_rotation_y(increment.dy));
}

/// Face of a cube with the given rotation whose outward normal points most along `direction`.
pub fn face_toward(rotation: Quat, direction: Vec3) -> FaceId {
    let alignment = |face: &FaceId| (rotation * Vec3::from_array(face.normal())).dot(direction);
    FaceId::ALL
        .into_iter()
        .max_by(|a, b| alignment(a).total_cmp(&alignment(b)))
        .unwrap_or(FaceId::Forward)
}

/// System that drains one step of the pending turn and applies it to the cube.
/// Runs in `First`, after the previous frame has been rendered.
pub fn tick_cube_rotation(
    mut scheduler: ResMut<TurnScheduler>,
    mut cubes: Query<&mut Transform, With<CubeBody>>,
) {
    // Skip the mutable deref while idle so change detection stays quiet.
    if scheduler.is_idle() {
        return;
    }

    let increment = scheduler.tick();
    for mut transform in cubes.iter_mut() {
        apply_turn_increment(&mut transform, increment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_increment_is_world_space() {
        // Start rotated a quarter turn about Y, then turn about world X.
        let mut transform = Transform::from_rotation(Quat::from_rotation_y(FRAC_PI_2));
        apply_turn_increment(&mut transform, TurnIncrement { dx: FRAC_PI_2, dy: 0.0 });

        let expected = Quat::from_rotation_x(FRAC_PI_2) * Quat::from_rotation_y(FRAC_PI_2);
        assert!(transform.rotation.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn test_translation_untouched() {
        let mut transform = Transform::from_xyz(0.0, 0.0, -200.0);
        apply_turn_increment(&mut transform, TurnIncrement { dx: 0.3, dy: -0.2 });
        assert_eq!(transform.translation, Vec3::new(0.0, 0.0, -200.0));
    }

    #[test]
    fn test_face_toward_after_turns() {
        assert_eq!(face_toward(Quat::IDENTITY, Vec3::Z), FaceId::Forward);
        assert_eq!(face_toward(Quat::IDENTITY, Vec3::Y), FaceId::North);
        // Up arrow brings the north face to the front.
        assert_eq!(face_toward(Quat::from_rotation_x(FRAC_PI_2), Vec3::Z), FaceId::North);
        // Left arrow brings the west face to the front.
        assert_eq!(face_toward(Quat::from_rotation_y(FRAC_PI_2), Vec3::Z), FaceId::West);
    }

    #[test]
    fn test_zero_increment_keeps_rotation() {
        let start = Quat::from_rotation_z(0.4);
        let mut transform = Transform::from_rotation(start);
        apply_turn_increment(&mut transform, TurnIncrement::ZERO);
        assert!(transform.rotation.abs_diff_eq(start, 1e-6));
    }
}
