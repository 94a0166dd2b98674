//! Fundamental geometric and simulation types.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::{LaunchMode, Side};

/// Rigid-body state mirrored from the external simulator.
/// y is up; the net plane is x = 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Whether the simulator applies gravity to this body.
    pub gravity: bool,
}

impl Body {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            gravity: true,
        }
    }

    /// Euclidean distance to another body.
    pub fn distance_to(&self, other: &Body) -> f32 {
        self.position.distance(other.position)
    }

    /// Whether the body is moving downward.
    pub fn is_descending(&self) -> bool {
        self.velocity.y < 0.0
    }
}

/// Landing/aim point of a hit. Height is optional; flat hits fall back to the
/// ball's current height when it is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AimPoint {
    pub x: f32,
    pub z: f32,
    pub height: Option<f32>,
}

impl AimPoint {
    /// Point on the court plane with no explicit height.
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z, height: None }
    }

    /// Point on the floor (height 0).
    pub fn on_floor(x: f32, z: f32) -> Self {
        Self {
            x,
            z,
            height: Some(0.0),
        }
    }

    /// Resolve to a 3D point, using `default_height` when no height is set.
    pub fn resolve(&self, default_height: f32) -> Vec3 {
        Vec3::new(self.x, self.height.unwrap_or(default_height), self.z)
    }

    /// Shift along the depth axis (z) by a discretized direction input.
    pub fn biased(self, direction: Vec2, deadzone: f32, shift: f32) -> Self {
        let dz = if direction.y < -deadzone {
            -shift
        } else if direction.y > deadzone {
            shift
        } else {
            0.0
        };
        Self {
            z: self.z + dz,
            ..self
        }
    }
}

/// Result of a ballistic solve, ready to be applied to the ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub mode: LaunchMode,
    pub velocity: Vec3,
    /// Gravity flag the ball must carry after the hit.
    pub gravity: bool,
    /// Total implied airtime for lofted launches.
    pub airtime: Option<f32>,
}

impl Launch {
    /// Fallback when a flat direction is undefined: straight up at `speed`,
    /// gravity off.
    pub fn vertical_escape(speed: f32) -> Self {
        Self {
            mode: LaunchMode::Flat,
            velocity: Vec3::new(0.0, speed, 0.0),
            gravity: false,
            airtime: None,
        }
    }
}

/// Match score, one counter per side. Side 1 is Left, side 2 is Right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }

    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Add one point for `side`.
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// Side that has reached `points_to_win` with at least `margin` lead.
    pub fn winner(&self, points_to_win: u32, margin: u32) -> Option<Side> {
        [Side::Left, Side::Right].into_iter().find(|&side| {
            let own = self.of(side);
            let other = self.of(side.opposite());
            own >= points_to_win && own >= other + margin
        })
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Frame ticks processed.
    pub frame: u64,
    /// Physics ticks processed.
    pub physics_tick: u64,
    /// Simulated seconds accumulated by physics ticks.
    pub elapsed_secs: f32,
}

impl SimTime {
    pub fn advance_frame(&mut self) {
        self.frame += 1;
    }

    pub fn advance_physics(&mut self, dt: f32) {
        self.physics_tick += 1;
        self.elapsed_secs += dt;
    }
}
