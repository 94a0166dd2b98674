//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Court half. Left is negative x, Right is positive x; the net sits at x = 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    #[default]
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Sign of x for points on this half of the court.
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    /// Side that owns the half containing `x`. The net line counts as Right.
    pub fn of_x(x: f32) -> Side {
        if x < 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Fixed roster slot. Slots are the identity of an agent for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgentSlot {
    LeftPlayer1,
    LeftPlayer2,
    RightPlayer1,
    RightPlayer2,
}

impl AgentSlot {
    pub const ALL: [AgentSlot; 4] = [
        AgentSlot::LeftPlayer1,
        AgentSlot::LeftPlayer2,
        AgentSlot::RightPlayer1,
        AgentSlot::RightPlayer2,
    ];

    pub fn side(self) -> Side {
        match self {
            AgentSlot::LeftPlayer1 | AgentSlot::LeftPlayer2 => Side::Left,
            AgentSlot::RightPlayer1 | AgentSlot::RightPlayer2 => Side::Right,
        }
    }

    /// Next server in the fixed rotation RP1 -> LP1 -> RP2 -> LP2 -> RP1.
    pub fn next_server(self) -> AgentSlot {
        match self {
            AgentSlot::RightPlayer1 => AgentSlot::LeftPlayer1,
            AgentSlot::LeftPlayer1 => AgentSlot::RightPlayer2,
            AgentSlot::RightPlayer2 => AgentSlot::LeftPlayer2,
            AgentSlot::LeftPlayer2 => AgentSlot::RightPlayer1,
        }
    }
}

/// Who drives an agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    #[default]
    Human,
    Ai,
}

/// Shared rally phase. Only human hits and the point reset move it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RallyPhase {
    /// Ball is parked at the serve point waiting for the server.
    #[default]
    PointStart,
    Served,
    Bumped,
    Set,
    Spiked,
    Blocked,
}

/// Private cycle of an AI agent. Unrelated to `RallyPhase`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiPhase {
    #[default]
    Waiting,
    Bumping,
    Setting,
    Spiking,
}

/// Discrete hit actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitKind {
    Bump,
    Set,
    Spike,
    Serve,
    Block,
}

impl HitKind {
    /// Phase the rally enters after this hit lands.
    pub fn resulting_phase(self) -> RallyPhase {
        match self {
            HitKind::Bump => RallyPhase::Bumped,
            HitKind::Set => RallyPhase::Set,
            HitKind::Spike => RallyPhase::Spiked,
            HitKind::Serve => RallyPhase::Served,
            HitKind::Block => RallyPhase::Blocked,
        }
    }

    /// Whether this hit hands the attack to the hitter's side.
    pub fn takes_attack(self) -> bool {
        matches!(self, HitKind::Bump | HitKind::Serve)
    }
}

/// Collision surface identity reported by the external simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    /// Walkable court layer; gates the grounded flag.
    Ground,
    /// Scoring floor area of the left half ("Side1").
    Side1,
    /// Scoring floor area of the right half ("Side2").
    Side2,
    /// Anything else: net, players, walls.
    Other,
}

impl Surface {
    /// Court half a scoring floor belongs to, if any.
    pub fn floor_side(self) -> Option<Side> {
        match self {
            Surface::Side1 => Some(Side::Left),
            Surface::Side2 => Some(Side::Right),
            Surface::Ground | Surface::Other => None,
        }
    }
}

/// Targeting mode picked by the ballistic solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchMode {
    /// Gravity-affected arc with a chosen apex.
    Lofted,
    /// Constant-speed straight line, gravity off.
    Flat,
}
