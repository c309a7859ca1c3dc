//! Debug functions for the cube.
use bevy::prelude::*;

use shared::FaceGraph;

use crate::utils::cube::face_toward;
use crate::utils::objects::{CubeBody, CubeModel};

pub struct DebugFunctionsPlugin;

impl Plugin for DebugFunctionsPlugin {
    /// Plugin adding the `log_cube_transform` system to the app.
    fn build(&self, app: &mut App) {
        app.add_systems(Update, log_cube_transform);
    }
}

/// Which faces point at the camera and up for a given cube rotation.
pub fn orientation_report(rotation: Quat, graph: &FaceGraph) -> String {
    let front = face_toward(rotation, Vec3::Z);
    let top = face_toward(rotation, Vec3::Y);
    format!(
        "Front: {:?} (back {:?}), top: {:?} (bottom {:?})",
        front,
        graph.opposite(front),
        top,
        graph.opposite(top)
    )
}

/// Logs the cube world matrix and orientation whenever a key goes down.
/// Logged at info level so the default log filter shows it.
fn log_cube_transform(
    keyboard: Res<ButtonInput<KeyCode>>,
    model: Res<CubeModel>,
    query: Query<&GlobalTransform, With<CubeBody>>,
) {
    if keyboard.get_just_pressed().len() == 0 {
        return;
    }

    for transform in &query {
        info!("Cube world matrix: {:?}", transform.affine());
        info!("{}", orientation_report(transform.rotation(), model.graph()));
    }
}
