//! Commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the start of the next frame tick.

use serde::{Deserialize, Serialize};

use crate::components::ControlInput;
use crate::enums::AgentSlot;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Replace the input sample of a human slot. Hit flags are OR-ed with any
    /// not-yet-consumed presses so a fast tap is never lost.
    Input { slot: AgentSlot, input: ControlInput },
    /// Zero the score, hand the serve back to RightPlayer1 and start a point.
    ResetMatch,
}
