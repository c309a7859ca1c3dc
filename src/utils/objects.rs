// This file defines the components and resources used by the cube scene.
use bevy::prelude::*;

use shared::{Cube, RotationScheduler};

use crate::config::CubeConfig;

/// Turn scheduler driving the cube, shared by the input and tick systems
#[derive(Resource, Default, Deref, DerefMut)]
pub struct TurnScheduler(pub RotationScheduler);

impl TurnScheduler {
    pub fn from_config(config: &CubeConfig) -> Self {
        let mut scheduler = RotationScheduler::with_max_step(config.rotation.max_step);
        scheduler.set_engaged(config.rotation.start_engaged);
        Self(scheduler)
    }
}

/// Logical cube model (faces, colors, adjacency)
#[derive(Resource, Default, Deref)]
pub struct CubeModel(pub Cube);

/// Cube component, the entity whose transform the turns rotate
#[derive(Component)]
pub struct CubeBody;

/// Status line at the top of the screen
#[derive(Component)]
pub struct StatusText;
