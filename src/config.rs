//! Runtime configuration, read from a TOML file with built-in defaults.
//!
//! The file is looked up at `$COLOR_CUBE_CONFIG`, falling back to `cube.toml`
//! in the working directory. A missing file means "use the defaults"; a file
//! that exists but does not parse or validate is an error.
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use bevy::prelude::Resource;
use serde::Deserialize;
use thiserror::Error;

use shared::constants::{
    camera_3d_constants::{CAMERA_3D_FAR, CAMERA_3D_FOV_DEGREES, CAMERA_3D_NEAR},
    lighting_constants::{
        GLOBAL_AMBIENT_LIGHT_INTENSITY, POINT_LIGHT_INTENSITY, POINT_LIGHT_POSITION,
        POINT_LIGHT_RANGE,
    },
    rotation_constants::{MAX_STEP, START_ENGAGED},
    scene_constants::{CLEAR_COLOR, CUBE_DISTANCE, CUBE_SIDE},
};

pub const CONFIG_PATH_ENV: &str = "COLOR_CUBE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "cube.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Resource)]
#[serde(default, deny_unknown_fields)]
pub struct CubeConfig {
    pub scene: SceneConfig,
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
    pub rotation: RotationConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub side: f32,
    /// The cube sits this far in front of the camera, on -Z.
    pub cube_distance: f32,
    /// 0xRRGGBB
    pub clear_color: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            side: CUBE_SIDE,
            cube_distance: CUBE_DISTANCE,
            clear_color: CLEAR_COLOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_3D_FOV_DEGREES,
            near: CAMERA_3D_NEAR,
            far: CAMERA_3D_FAR,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightingConfig {
    pub ambient_brightness: f32,
    pub point_light_intensity: f32,
    pub point_light_position: [f32; 3],
    pub point_light_range: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_brightness: GLOBAL_AMBIENT_LIGHT_INTENSITY,
            point_light_intensity: POINT_LIGHT_INTENSITY,
            point_light_position: POINT_LIGHT_POSITION,
            point_light_range: POINT_LIGHT_RANGE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RotationConfig {
    /// Largest rotation applied in a single frame, in radians.
    pub max_step: f32,
    pub start_engaged: bool,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            max_step: MAX_STEP,
            start_engaged: START_ENGAGED,
        }
    }
}

impl CubeConfig {
    /// Loads the config from `$COLOR_CUBE_CONFIG` or `cube.toml`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load_from(&path)
    }

    /// Loads the config at `path`, or the defaults when no file exists there.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::from_toml(&raw, path)
    }

    /// Parses and validates TOML text; `path` only names the source in errors.
    pub fn from_toml(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: CubeConfig = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |name: &str, value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
            }
        };

        positive("scene.side", self.scene.side)?;
        positive("scene.cube_distance", self.scene.cube_distance)?;
        positive("camera.near", self.camera.near)?;
        positive("rotation.max_step", self.rotation.max_step)?;

        if !(self.camera.far > self.camera.near) {
            return Err(ConfigError::Invalid(format!(
                "camera.far ({}) must be greater than camera.near ({})",
                self.camera.far, self.camera.near
            )));
        }
        if !(self.camera.fov_degrees > 0.0 && self.camera.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "camera.fov_degrees must be within (0, 180), got {}",
                self.camera.fov_degrees
            )));
        }
        if self.scene.clear_color > 0xFF_FFFF {
            return Err(ConfigError::Invalid(format!(
                "scene.clear_color {:#x} is not a 0xRRGGBB value",
                self.scene.clear_color
            )));
        }
        Ok(())
    }
}
