//! Human hit system, run on the frame tick.
//!
//! Humans are evaluated in slot order and each accepted hit is applied to the
//! ball and the rally before the next agent looks at them. Presses are
//! consumed whether or not they land.

use hecs::World;
use tracing::debug;

use volley_core::components::{Ball, ControlInput};
use volley_core::config::RallyConfig;
use volley_core::enums::HitKind;
use volley_core::events::RallyEvent;
use volley_core::types::Body;

use crate::hit::{attempt_hit, HitRequest};
use crate::rally::RallyState;
use crate::targeting::TargetingEngine;
use crate::world_setup::Court;

pub fn run(
    world: &mut World,
    court: &Court,
    rally: &mut RallyState,
    targeting: &TargetingEngine,
    config: &RallyConfig,
    events: &mut Vec<RallyEvent>,
) {
    for &(slot, entity) in &court.agents {
        let Ok(input) = world.get::<&ControlInput>(entity).map(|input| *input) else {
            continue;
        };
        let pressed: Vec<HitKind> = input.pressed_hits().collect();
        if pressed.is_empty() {
            continue;
        }
        let Ok(agent_body) = world.get::<&Body>(entity).map(|body| *body) else {
            continue;
        };
        let Ok((ball_body, ball)) = world.query_one_mut::<(&mut Body, &mut Ball)>(court.ball)
        else {
            continue;
        };

        for kind in pressed {
            let request = HitRequest {
                slot,
                kind,
                direction: input.direction,
            };
            match attempt_hit(&request, &agent_body, ball_body, ball, rally, targeting, config) {
                Ok(outcome) => {
                    debug!(?slot, ?kind, target = ?outcome.target, mode = ?outcome.launch.mode, "hit");
                    events.push(RallyEvent::Hit {
                        slot,
                        kind,
                        target: outcome.target,
                        mode: outcome.launch.mode,
                    });
                }
                Err(rejected) => debug!(?slot, ?kind, %rejected, "hit rejected"),
            }
        }
    }

    for (_entity, input) in world.query_mut::<&mut ControlInput>() {
        input.clear_edges();
    }
}
