//! Score and rotation policy.

use tracing::debug;

use volley_core::config::RallyConfig;
use volley_core::enums::{RallyPhase, Side, Surface};
use volley_core::types::Score;

use crate::rally::RallyState;

/// What a scoring floor contact decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointOutcome {
    pub scorer: Side,
    pub score: Score,
    pub winner: Option<Side>,
    /// The serve must move on before the next point.
    pub rotate: bool,
}

/// The ball landing on one half scores for the other.
pub fn scorer_for(surface: Surface) -> Option<Side> {
    surface.floor_side().map(Side::opposite)
}

/// Apply a ball contact with `surface`. Returns `None` when the contact does
/// not count: not a scoring floor, the point has not been served, or the
/// match is already decided.
pub fn on_floor_contact(
    surface: Surface,
    rally: &RallyState,
    score: &mut Score,
    winner: Option<Side>,
    config: &RallyConfig,
) -> Option<PointOutcome> {
    let scorer = scorer_for(surface)?;
    if rally.phase == RallyPhase::PointStart || winner.is_some() {
        debug!(?surface, phase = ?rally.phase, "floor contact ignored");
        return None;
    }

    score.award(scorer);
    let winner = score.winner(config.points_to_win, config.win_margin);
    Some(PointOutcome {
        scorer,
        score: *score,
        winner,
        rotate: winner.is_none() && scorer != rally.server.side(),
    })
}
