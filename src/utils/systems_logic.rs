//! Systems logic: schedules for setup, input, turning and the status line.
//!
//! Turn increments are applied in `First`, after the previous frame was
//! rendered, so a step computed after a render shows up on the next frame.

use bevy::prelude::*;

use crate::config::CubeConfig;
use crate::utils::cube::tick_cube_rotation;
use crate::utils::hud::update_status_text;
use crate::utils::inputs::handle_keyboard_input;
use crate::utils::objects::{CubeModel, TurnScheduler};
use crate::utils::setup::{color_from_hex, setup_cube, setup_environment, setup_status_text};

/// Input and turn systems. Needs no rendering, so it also runs in headless apps.
pub struct TurnLogicPlugin;

impl Plugin for TurnLogicPlugin {
    fn build(&self, app: &mut App) {
        let config = cube_config(app);
        app.insert_resource(TurnScheduler::from_config(&config))
            .add_systems(First, tick_cube_rotation)
            .add_systems(Update, handle_keyboard_input);
    }
}

// Plugin for managing all the cube systems.
pub struct SystemsLogicPlugin;

impl Plugin for SystemsLogicPlugin {
    /// Builds the plugin by adding the scene, the turn logic and the status line.
    fn build(&self, app: &mut App) {
        let config = cube_config(app);
        app.insert_resource(ClearColor(color_from_hex(config.scene.clear_color)))
            .insert_resource(config)
            .init_resource::<CubeModel>()
            .add_plugins(TurnLogicPlugin)
            .add_systems(
                Startup,
                (setup_environment, setup_cube, setup_status_text),
            )
            .add_systems(Update, update_status_text.after(handle_keyboard_input));
    }
}

// Config inserted by the caller, or the defaults.
fn cube_config(app: &App) -> CubeConfig {
    app.world()
        .get_resource::<CubeConfig>()
        .cloned()
        .unwrap_or_default()
}
