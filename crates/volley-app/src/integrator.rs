//! Minimal rigid-body stand-in.
//!
//! Explicit Euler with a flat court: the ball scores on y = 0, agents stand
//! on y = `AGENT_STANDING_HEIGHT`, and leaving the court box counts as a wall
//! contact. No net and no body-to-body contact.

use std::collections::HashSet;

use hecs::Entity;

use volley_core::enums::{AgentSlot, Side, Surface};
use volley_core::types::Body;
use volley_sim::RallyEngine;

/// Height of an agent's centre while standing.
pub const AGENT_STANDING_HEIGHT: f32 = 1.0;

/// Half extents of the walled court box on x and z.
pub const COURT_HALF_LENGTH: f32 = 12.0;
pub const COURT_HALF_WIDTH: f32 = 8.0;

#[derive(Debug, Default)]
pub struct Integrator {
    gravity: f32,
    ball_on_floor: bool,
    ball_outside: bool,
    on_ground: HashSet<Entity>,
}

impl Integrator {
    pub fn new(gravity: f32) -> Self {
        Self {
            gravity: gravity.abs(),
            ..Default::default()
        }
    }

    /// Advance every body by `dt`, push the result into the engine and report
    /// contacts that started or ended.
    pub fn step(&mut self, engine: &mut RallyEngine, dt: f32) {
        for slot in AgentSlot::ALL {
            if let Some(entity) = engine.agent_entity(slot) {
                self.step_agent(engine, entity, dt);
            }
        }
        if let Some(ball) = engine.ball_entity() {
            self.step_ball(engine, ball, dt);
        }
    }

    fn integrate(&self, body: &mut Body, dt: f32) {
        if body.gravity {
            body.velocity.y -= self.gravity * dt;
        }
        body.position += body.velocity * dt;
    }

    fn step_agent(&mut self, engine: &mut RallyEngine, entity: Entity, dt: f32) {
        let Some(mut body) = engine.body(entity) else {
            return;
        };
        self.integrate(&mut body, dt);

        let touching = body.position.y <= AGENT_STANDING_HEIGHT && body.velocity.y <= 0.0;
        if touching {
            body.position.y = AGENT_STANDING_HEIGHT;
            body.velocity.y = 0.0;
        }
        engine.sync_body(entity, body.position, body.velocity);

        if touching && self.on_ground.insert(entity) {
            engine.on_collision_enter(entity, Surface::Ground);
        } else if !touching && self.on_ground.remove(&entity) {
            engine.on_collision_exit(entity, Surface::Ground);
        }
    }

    fn step_ball(&mut self, engine: &mut RallyEngine, ball: Entity, dt: f32) {
        let Some(mut body) = engine.body(ball) else {
            return;
        };
        self.integrate(&mut body, dt);

        let landed = body.position.y <= 0.0;
        if landed {
            body.position.y = 0.0;
            body.velocity = glam::Vec3::ZERO;
        }
        engine.sync_body(ball, body.position, body.velocity);

        if landed && !self.ball_on_floor {
            let surface = match Side::of_x(body.position.x) {
                Side::Left => Surface::Side1,
                Side::Right => Surface::Side2,
            };
            engine.on_collision_enter(ball, surface);
            engine.on_collision_exit(ball, surface);
        }
        self.ball_on_floor = landed;

        let outside = body.position.x.abs() > COURT_HALF_LENGTH
            || body.position.z.abs() > COURT_HALF_WIDTH;
        if outside && !self.ball_outside {
            engine.on_collision_enter(ball, Surface::Other);
        }
        self.ball_outside = outside;
    }
}
