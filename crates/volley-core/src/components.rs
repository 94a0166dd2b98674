//! Components attached to the ball and agent entities.
//!
//! Plain data; rally logic lives in the sim systems.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Marks the ball. `going_to` is the aim point of the most recent hit.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Ball {
    pub going_to: Option<Vec3>,
}

/// A roster member.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Agent {
    pub slot: AgentSlot,
    pub side: Side,
    pub controller: Controller,
}

/// Whether the agent is touching the ground layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grounded(pub bool);

/// Position the body returns to on every point reset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnPoint(pub Vec3);

/// Private state of an AI agent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AiBrain {
    pub phase: AiPhase,
    /// Where this agent's last bump was sent; the set reuses it.
    pub bump_target: Vec3,
}

/// Latest input sample for a human agent.
///
/// Hit flags are "performed this frame" edges and are cleared once the frame
/// tick has seen them. `jump` is a held state read by the physics tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    pub bump: bool,
    pub set: bool,
    pub spike: bool,
    pub serve: bool,
    pub block: bool,
    pub jump: bool,
    /// Lateral movement axis (x, z).
    pub movement: Vec2,
    /// Aim bias axis; only y is read.
    pub direction: Vec2,
}

impl ControlInput {
    /// Hit kinds pressed this frame, in dispatch order.
    pub fn pressed_hits(&self) -> impl Iterator<Item = HitKind> + '_ {
        [
            (self.serve, HitKind::Serve),
            (self.bump, HitKind::Bump),
            (self.set, HitKind::Set),
            (self.spike, HitKind::Spike),
            (self.block, HitKind::Block),
        ]
        .into_iter()
        .filter_map(|(pressed, kind)| pressed.then_some(kind))
    }

    pub fn clear_edges(&mut self) {
        self.bump = false;
        self.set = false;
        self.spike = false;
        self.serve = false;
        self.block = false;
    }
}
