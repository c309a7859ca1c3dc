//! Start-up for the color cube, with window, plugins, and resources.

use bevy::prelude::*;

use color_cube::{
    config::{ConfigError, CubeConfig},
    utils::{debug_functions::DebugFunctionsPlugin, systems_logic::SystemsLogicPlugin},
};

/// Entry point for the application
fn main() -> Result<(), ConfigError> {
    let config = CubeConfig::load()?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Color Cube".into(),
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(config)
        .add_plugins((SystemsLogicPlugin, DebugFunctionsPlugin))
        .run();

    Ok(())
}
