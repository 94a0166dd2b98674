//! AI system: runs the per-agent FSM from volley-ai and applies its action.
//!
//! Each agent is evaluated and applied before the next one reads the ball.
//! The rally state is not an input here.

use hecs::World;
use tracing::debug;

use volley_core::components::{AiBrain, Ball, Grounded};
use volley_core::events::RallyEvent;
use volley_core::types::Body;

use volley_ai::fsm::{evaluate, AiAction, AiContext};
use volley_ai::profiles::AiProfile;

use crate::targeting::launch_ball;
use crate::world_setup::Court;

pub fn run(world: &mut World, court: &Court, profile: &AiProfile, events: &mut Vec<RallyEvent>) {
    for &(slot, entity) in &court.agents {
        let Ok(ball_body) = world.get::<&Body>(court.ball).map(|body| *body) else {
            return;
        };

        let ctx = {
            let Ok(mut query) = world.query_one::<(&AiBrain, &Body, &Grounded)>(entity) else {
                continue;
            };
            let Some((brain, body, grounded)) = query.get() else {
                continue;
            };
            AiContext {
                phase: brain.phase,
                position: body.position,
                velocity: body.velocity,
                grounded: grounded.0,
                ball_position: ball_body.position,
                ball_velocity: ball_body.velocity,
                bump_target: brain.bump_target,
            }
        };

        let update = evaluate(&ctx, profile);

        if let Ok(mut brain) = world.get::<&mut AiBrain>(entity) {
            if update.phase_changed {
                debug!(?slot, from = ?brain.phase, to = ?update.new_phase, "AI phase");
            }
            brain.phase = update.new_phase;
            brain.bump_target = update.bump_target;
        }

        match update.action {
            AiAction::Idle => {}
            AiAction::Approach { velocity } => {
                if let Ok(mut body) = world.get::<&mut Body>(entity) {
                    body.velocity = velocity;
                }
            }
            AiAction::Jump { velocity } => {
                if let Ok((body, grounded)) =
                    world.query_one_mut::<(&mut Body, &mut Grounded)>(entity)
                {
                    body.velocity = velocity;
                    grounded.0 = false;
                }
                events.push(RallyEvent::Jump { slot });
            }
            AiAction::Strike { launch, target } => {
                if let Ok((body, ball)) = world.query_one_mut::<(&mut Body, &mut Ball)>(court.ball)
                {
                    launch_ball(body, ball, &launch, target);
                }
                debug!(?slot, phase = ?ctx.phase, ?target, mode = ?launch.mode, "AI strike");
                events.push(RallyEvent::AiStrike {
                    slot,
                    phase: ctx.phase,
                    target,
                    mode: launch.mode,
                });
            }
        }
    }
}
