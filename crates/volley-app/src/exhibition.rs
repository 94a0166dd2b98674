//! Exhibition loop: drives the engine the way a host engine would.
//!
//! Each frame runs one fixed physics step through the stand-in integrator,
//! feeds scripted input, then takes a frame tick. The loop stops when the
//! match is decided or the frame budget runs out.

use tracing::{debug, info};

use volley_core::config::{CourtLayout, RallyConfig};
use volley_core::enums::{Controller, Side};
use volley_core::error::RallyError;
use volley_core::events::RallyEvent;
use volley_core::state::RallySnapshot;
use volley_core::types::Score;
use volley_sim::RallyEngine;

use crate::integrator::Integrator;
use crate::script::{Script, ScriptedPlayer};

#[derive(Debug, Clone)]
pub struct ExhibitionConfig {
    pub seed: u64,
    /// Frame ticks before giving up on a decision.
    pub max_frames: u64,
}

impl Default for ExhibitionConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            max_frames: 50 * 60 * 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExhibitionResult {
    pub frames: u64,
    pub score: Score,
    pub winner: Option<Side>,
    pub hits: usize,
    pub ai_strikes: usize,
}

/// Play one match. Every human slot in `layout` is driven by the script.
pub fn run(
    config: RallyConfig,
    layout: &CourtLayout,
    exhibition: &ExhibitionConfig,
) -> Result<ExhibitionResult, RallyError> {
    let dt = config.fixed_dt;
    let players = layout
        .agents
        .iter()
        .filter(|spawn| spawn.controller == Controller::Human)
        .map(|spawn| ScriptedPlayer {
            slot: spawn.slot,
            home: spawn.position,
        })
        .collect();
    let mut script = Script::new(players, config.interaction_radius, exhibition.seed);
    let mut integrator = Integrator::new(config.gravity);

    let mut engine = RallyEngine::new(config, layout);
    if let Some(fault) = engine.fault() {
        return Err(fault.clone());
    }
    info!(
        scripted = script.players().len(),
        seed = exhibition.seed,
        "exhibition started"
    );

    let mut result = ExhibitionResult {
        frames: 0,
        score: Score::default(),
        winner: None,
        hits: 0,
        ai_strikes: 0,
    };

    while result.frames < exhibition.max_frames {
        integrator.step(&mut engine, dt);
        engine.physics_tick(dt);

        if let Some(ball) = engine.ball_entity().and_then(|e| engine.body(e)) {
            let commands = script.commands(&ball, |slot| {
                engine.agent_entity(slot).and_then(|e| engine.body(e))
            });
            engine.queue_commands(commands);
        }

        let snapshot = engine.frame_tick();
        result.frames += 1;
        tally(&mut result, &snapshot);

        if snapshot.winner.is_some() {
            break;
        }
    }

    result.score = engine.score();
    result.winner = engine.winner();
    info!(
        frames = result.frames,
        left = result.score.left,
        right = result.score.right,
        winner = ?result.winner,
        "exhibition finished"
    );
    Ok(result)
}

fn tally(result: &mut ExhibitionResult, snapshot: &RallySnapshot) {
    for event in &snapshot.events {
        match event {
            RallyEvent::Hit { .. } => result.hits += 1,
            RallyEvent::AiStrike { .. } => result.ai_strikes += 1,
            RallyEvent::PointScored { scorer, score } => {
                debug!(?scorer, left = score.left, right = score.right, "point");
            }
            _ => {}
        }
    }
}
