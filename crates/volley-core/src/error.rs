//! Error types.
//!
//! Nothing here is fatal: setup errors disable the engine, hit rejections are
//! ordinary game flow.

use thiserror::Error;

use crate::enums::{HitKind, RallyPhase};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RallyError {
    /// A required collaborator (ball, agent slot, body) is absent.
    #[error("missing collaborator: {0}")]
    MissingCollaborator(String),

    /// Flat launch with a zero-length direction.
    #[error("degenerate geometry: zero-length launch direction")]
    DegenerateGeometry,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),
}

impl From<serde_json::Error> for RallyError {
    fn from(err: serde_json::Error) -> Self {
        RallyError::ConfigParse(err.to_string())
    }
}

/// Why a hit attempt was dropped.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum HitRejected {
    #[error("ball out of reach ({distance:.2} > {radius:.2})")]
    OutOfReach { distance: f32, radius: f32 },

    #[error("agent may not touch the ball now")]
    NotEligible,

    #[error("only the server may serve")]
    NotServer,

    #[error("{kind:?} is not a legal hit during {phase:?}")]
    WrongPhase { kind: HitKind, phase: RallyPhase },
}
