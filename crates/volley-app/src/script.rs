//! Scripted human players.
//!
//! Each scripted slot chases the ball on its own half, drifts home otherwise,
//! and presses every hit while the ball is in reach. The engine decides which
//! press, if any, is legal. Aim bias and jumps come from a seeded RNG so runs
//! are repeatable.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use volley_core::commands::PlayerCommand;
use volley_core::components::ControlInput;
use volley_core::enums::{AgentSlot, Side};
use volley_core::kinematics::horizontal_offset;
use volley_core::types::Body;

/// Chance per frame that an in-reach player also jumps.
const JUMP_CHANCE: f64 = 0.05;

#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    pub slot: AgentSlot,
    pub home: Vec3,
}

pub struct Script {
    players: Vec<ScriptedPlayer>,
    reach: f32,
    rng: ChaCha8Rng,
}

impl Script {
    pub fn new(players: Vec<ScriptedPlayer>, reach: f32, seed: u64) -> Self {
        Self {
            players,
            reach,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn players(&self) -> &[ScriptedPlayer] {
        &self.players
    }

    /// Commands for this frame. `body_of` returns the current body of a slot.
    pub fn commands(
        &mut self,
        ball: &Body,
        mut body_of: impl FnMut(AgentSlot) -> Option<Body>,
    ) -> Vec<PlayerCommand> {
        let mut commands = Vec::with_capacity(self.players.len());
        for player in &self.players {
            let Some(body) = body_of(player.slot) else {
                continue;
            };
            let input = decide(player, &body, ball, self.reach, &mut self.rng);
            commands.push(PlayerCommand::Input {
                slot: player.slot,
                input,
            });
        }
        commands
    }
}

fn decide(
    player: &ScriptedPlayer,
    body: &Body,
    ball: &Body,
    reach: f32,
    rng: &mut ChaCha8Rng,
) -> ControlInput {
    let own_half = Side::of_x(ball.position.x) == player.slot.side();
    let goal = if own_half { ball.position } else { player.home };
    let movement = horizontal_offset(body.position, goal).clamp_length_max(1.0);

    let in_reach = body.distance_to(ball) <= reach;
    ControlInput {
        bump: in_reach,
        set: in_reach,
        spike: in_reach,
        serve: in_reach,
        block: in_reach,
        jump: in_reach && rng.gen_bool(JUMP_CHANCE),
        movement,
        direction: Vec2::new(0.0, rng.gen_range(-1.0..=1.0)),
    }
}
