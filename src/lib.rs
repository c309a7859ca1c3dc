//! Declaration of the modules for color_cube.

/// Runtime configuration loaded from TOML
pub mod config;

/// Various utility functions, systems, and objects
pub mod utils {
    pub mod cube;
    pub mod debug_functions;
    pub mod hud;
    pub mod inputs;
    pub mod objects;
    pub mod setup;
    pub mod systems_logic;
}
