//! Human movement, run on the physics tick.
//!
//! Steers each human body along its Move axis under the ground or air cap
//! and applies the jump impulse while grounded.

use hecs::World;

use volley_core::components::{Agent, ControlInput, Grounded};
use volley_core::config::RallyConfig;
use volley_core::events::RallyEvent;
use volley_core::kinematics::steer_horizontal;
use volley_core::types::Body;

pub fn run(world: &mut World, config: &RallyConfig, dt: f32, events: &mut Vec<RallyEvent>) {
    for (_entity, (agent, body, grounded, input)) in
        world.query_mut::<(&Agent, &mut Body, &mut Grounded, &ControlInput)>()
    {
        let cap = if grounded.0 {
            config.max_ground_speed
        } else {
            config.max_air_speed
        };
        body.velocity = steer_horizontal(
            body.velocity,
            input.movement,
            dt,
            config.direction_change_rate,
            cap,
        );

        if input.jump && grounded.0 {
            body.velocity.y += config.jump_force;
            grounded.0 = false;
            events.push(RallyEvent::Jump { slot: agent.slot });
        }
    }
}
