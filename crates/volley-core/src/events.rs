//! Events emitted by the simulation for UI and audio feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Score;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RallyEvent {
    /// A human hit was accepted and applied.
    Hit {
        slot: AgentSlot,
        kind: HitKind,
        target: Vec3,
        mode: LaunchMode,
    },
    /// An AI agent struck the ball on its private cycle.
    AiStrike {
        slot: AgentSlot,
        phase: AiPhase,
        target: Vec3,
        mode: LaunchMode,
    },
    /// An agent jumped.
    Jump { slot: AgentSlot },
    /// The ball landed on a scoring floor.
    PointScored { scorer: Side, score: Score },
    ServerRotated { server: AgentSlot, attacking: Side },
    /// Bodies and rally state were reset for a new point.
    PointStarted { server: AgentSlot },
    MatchWon { winner: Side, score: Score },
    MatchReset,
}
