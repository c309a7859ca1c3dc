//! Setup logic for the color cube: camera, lights, the cube with its six colored faces, and the status line.
use bevy::prelude::*;

use shared::{FaceColor, FaceId};

use crate::config::CubeConfig;
use crate::utils::objects::{CubeBody, CubeModel, StatusText};

/// Convert a 0xRRGGBB value to a Bevy color.
pub fn color_from_hex(hex: u32) -> Color {
    let [r, g, b] = FaceColor(hex).rgb_u8();
    Color::srgb_u8(r, g, b)
}

/// Placement of a face quad relative to the cube center.
/// The quad is built in the XY plane facing +Z, so it is turned onto the face normal.
pub fn face_transform(face: FaceId, side: f32) -> Transform {
    let normal = Vec3::from_array(face.normal());
    Transform::from_translation(normal * side / 2.0)
        .with_rotation(Quat::from_rotation_arc(Vec3::Z, normal))
}

/// Camera and lights, which never move.
pub fn setup_environment(mut commands: Commands, config: Res<CubeConfig>) {
    info!("Config: {:?}", *config);

    let camera = &config.camera;
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            near: camera.near,
            far: camera.far,
            ..default()
        }),
        // At the origin, looking down -Z at the cube
        Transform::default(),
    ));

    let lighting = &config.lighting;
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: lighting.ambient_brightness,
        affects_lightmapped_meshes: true,
    });

    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: lighting.point_light_intensity,
            range: lighting.point_light_range,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(lighting.point_light_position)),
    ));

    info!("🌍 Environment Setup Complete");
}

/// Spawn the cube: a parent entity carrying the rotation, with one colored quad per face.
pub fn setup_cube(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<CubeConfig>,
    model: Res<CubeModel>,
) {
    let side = config.scene.side;
    let face_mesh = meshes.add(Rectangle::new(side, side));

    commands
        .spawn((
            Transform::from_xyz(0.0, 0.0, -config.scene.cube_distance),
            Visibility::default(),
            CubeBody,
        ))
        .with_children(|parent| {
            for face in model.graph().faces() {
                parent.spawn((
                    Mesh3d(face_mesh.clone()),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: color_from_hex(face.color.0),
                        perceptual_roughness: 1.0,
                        ..default()
                    })),
                    face_transform(face.id, side),
                ));
            }
        });

    info!("🎲 Cube Setup Complete");
    info!("⌨️  SPACE: engage/disengage rotation");
    info!("⌨️  Arrow Keys: turn the cube a quarter turn");
}

/// Status line in the top left corner, filled in by the HUD system.
pub fn setup_status_text(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::BLACK),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        StatusText,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(color_from_hex(0xFF0000), Color::srgb_u8(255, 0, 0));
        assert_eq!(color_from_hex(0x20B2AA), Color::srgb_u8(0x20, 0xB2, 0xAA));
    }

    #[test]
    fn test_face_quads_sit_on_the_faces() {
        let side = 50.0;
        for face in FaceId::ALL {
            let transform = face_transform(face, side);
            let normal = Vec3::from_array(face.normal());
            assert!(transform.translation.abs_diff_eq(normal * 25.0, 1e-4));
            // The quad's front (+Z) must point outwards.
            let facing = transform.rotation * Vec3::Z;
            assert!(facing.abs_diff_eq(normal, 1e-4), "{face:?} faces {facing}");
        }
    }
}
