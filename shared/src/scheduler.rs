//! Turn scheduling.
//!
//! A [`RotationScheduler`] holds at most one pending quarter turn and hands it
//! out in capped increments, one per [`RotationScheduler::tick`]. The driver
//! applies each increment to the cube transform.

use crate::constants::rotation_constants::{MAX_STEP, START_ENGAGED};

/// World axis a turn rotates around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Rotation to apply this tick, in radians about world X and world Y.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TurnIncrement {
    pub dx: f32,
    pub dy: f32,
}

impl TurnIncrement {
    pub const ZERO: TurnIncrement = TurnIncrement { dx: 0.0, dy: 0.0 };

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Angle still owed on each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PendingRotation {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    TurningX,
    TurningY,
}

/// What happened to a turn request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestOutcome {
    Accepted,
    DroppedDisengaged,
    DroppedBusy,
    /// Zero, NaN or infinite angle.
    DroppedInvalid,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RotationScheduler {
    engaged: bool,
    pending: PendingRotation,
    max_step: f32,
}

impl RotationScheduler {
    pub fn new() -> Self {
        Self::with_max_step(MAX_STEP)
    }

    /// Scheduler with a custom per-tick cap.
    /// A cap that is not a positive finite number falls back to [`MAX_STEP`].
    pub fn with_max_step(max_step: f32) -> Self {
        let max_step = if max_step.is_finite() && max_step > 0.0 {
            max_step
        } else {
            log::warn!("per-tick cap {} is not positive, using {}", max_step, MAX_STEP);
            MAX_STEP
        };
        Self {
            engaged: START_ENGAGED,
            pending: PendingRotation::default(),
            max_step,
        }
    }

    pub fn set_engaged(&mut self, engaged: bool) {
        self.engaged = engaged;
    }

    /// Flips the engaged flag and returns the new value.
    pub fn toggle_engaged(&mut self) -> bool {
        self.engaged = !self.engaged;
        self.engaged
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn max_step(&self) -> f32 {
        self.max_step
    }

    pub fn pending(&self) -> PendingRotation {
        self.pending
    }

    pub fn state(&self) -> SchedulerState {
        if self.pending.x != 0.0 {
            SchedulerState::TurningX
        } else if self.pending.y != 0.0 {
            SchedulerState::TurningY
        } else {
            SchedulerState::Idle
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state() == SchedulerState::Idle
    }

    /// Queues a turn of `angle` radians about `axis`.
    ///
    /// The request is dropped while disengaged or while any turn is still
    /// draining, whatever axis either of them targets, and when `angle` is
    /// zero or not finite. A dropped request leaves the scheduler untouched.
    pub fn request_turn(&mut self, axis: Axis, angle: f32) -> RequestOutcome {
        if !angle.is_finite() || angle == 0.0 {
            log::debug!("turn {:?} {} dropped: not a usable angle", axis, angle);
            return RequestOutcome::DroppedInvalid;
        }
        if !self.engaged {
            log::debug!("turn {:?} {:+.4} dropped: rotation disengaged", axis, angle);
            return RequestOutcome::DroppedDisengaged;
        }
        if !self.is_idle() {
            log::debug!("turn {:?} {:+.4} dropped: {:?}", axis, angle, self.state());
            return RequestOutcome::DroppedBusy;
        }

        match axis {
            Axis::X => self.pending.x = angle,
            Axis::Y => self.pending.y = angle,
        }
        log::debug!("turn {:?} {:+.4} accepted", axis, angle);
        RequestOutcome::Accepted
    }

    /// Drains one capped step from the pending turn.
    ///
    /// Returns zero on both axes when idle.
    pub fn tick(&mut self) -> TurnIncrement {
        let increment = if self.pending.x != 0.0 {
            TurnIncrement {
                dx: drain(&mut self.pending.x, self.max_step),
                dy: 0.0,
            }
        } else if self.pending.y != 0.0 {
            TurnIncrement {
                dx: 0.0,
                dy: drain(&mut self.pending.y, self.max_step),
            }
        } else {
            return TurnIncrement::ZERO;
        };

        log::trace!("tick {:?}, pending {:?}", increment, self.pending);
        if self.is_idle() {
            log::debug!("turn complete");
        }
        increment
    }
}

impl Default for RotationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

// Moves `residual` toward zero by at most `max_step` and returns the signed step taken.
// The final step equals the remaining magnitude, so the residual lands on exactly zero.
fn drain(residual: &mut f32, max_step: f32) -> f32 {
    let step = max_step.min(residual.abs());
    if *residual > 0.0 {
        *residual -= step;
        step
    } else {
        *residual += step;
        -step
    }
}
