//! Rally snapshot: the complete visible state handed to the host each frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::RallyEvent;
use crate::types::{Score, SimTime};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RallySnapshot {
    pub time: SimTime,
    pub phase: RallyPhase,
    pub attacking_side: Side,
    pub server: Option<AgentSlot>,
    pub last_hitter: Option<AgentSlot>,
    pub score: Score,
    pub winner: Option<Side>,
    pub ball: BallView,
    pub agents: Vec<AgentView>,
    pub events: Vec<RallyEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BallView {
    pub position: Vec3,
    pub velocity: Vec3,
    pub gravity: bool,
    pub going_to: Option<Vec3>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub slot: AgentSlot,
    pub controller: Controller,
    pub position: Vec3,
    pub velocity: Vec3,
    pub grounded: bool,
    /// Private cycle phase, AI agents only.
    pub ai_phase: Option<AiPhase>,
}
