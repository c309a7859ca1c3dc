// Constants used by the cube game and shared with the core logic.

/// Turn and animation constants
pub mod rotation_constants {
    use std::f32::consts::PI;

    // A single turn is a quarter revolution.
    pub const QUARTER_TURN: f32 = PI / 2.0;

    // Maximum rotation applied per tick, a quarter turn takes 13 ticks (12 full + 1 partial).
    pub const MAX_STEP: f32 = PI / 25.0;

    // Whether the cube accepts turn requests right after startup.
    pub const START_ENGAGED: bool = false;
}

/// Face palette
pub mod face_constants {
    // Face colors by index (0xRRGGBB).
    //              EAST      WEST      NORTH     SOUTH     FORWARD   REVERSE
    //              RED       GREEN     BLUE      YELLOW    VIOLET    CYAN
    pub const FACE_COLORS: [u32; 6] = [0xFF0000, 0x00FF00, 0x0000FF, 0xFFFF00, 0xEE82EE, 0x20B2AA];

    pub const FACE_COUNT: usize = 6;
}

/// Scene layout
pub mod scene_constants {
    // Edge length of the cube.
    pub const CUBE_SIDE: f32 = 50.0;

    // Distance of the cube in front of the camera (along -Z).
    pub const CUBE_DISTANCE: f32 = 200.0;

    pub const CLEAR_COLOR: u32 = 0xAAAAAA;
}

/// 3D camera
pub mod camera_3d_constants {
    pub const CAMERA_3D_FOV_DEGREES: f32 = 45.0;
    pub const CAMERA_3D_NEAR: f32 = 0.1;
    pub const CAMERA_3D_FAR: f32 = 10_000.0;
}

/// Lighting constants
pub mod lighting_constants {
    pub const GLOBAL_AMBIENT_LIGHT_INTENSITY: f32 = 400.0;

    pub const POINT_LIGHT_INTENSITY: f32 = 400_000_000.0;
    pub const POINT_LIGHT_POSITION: [f32; 3] = [10.0, 50.0, 0.0];
    // Must reach past the cube, which sits CUBE_DISTANCE away.
    pub const POINT_LIGHT_RANGE: f32 = 1_000.0;
}
