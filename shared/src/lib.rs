//! Engine-independent core of the color cube.
//!
//! - [`face_graph`]: the six faces, their palette and fixed adjacency.
//! - [`scheduler`]: turns requested by the player, drained one capped step per frame.
//!
//! Nothing here depends on the renderer; the game crate wraps these types as
//! Bevy resources and applies the increments to the cube transform.
pub mod constants;
pub mod face_graph;
pub mod scheduler;

pub use face_graph::{build_cube, Cube, Direction, Face, FaceColor, FaceGraph, FaceId, Neighbors};
pub use scheduler::{
    Axis, PendingRotation, RequestOutcome, RotationScheduler, SchedulerState, TurnIncrement,
};
