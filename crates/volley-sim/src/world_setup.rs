//! Entity spawn factories and point resets.
//!
//! Spawns the ball and the four roster slots from a `CourtLayout`, and moves
//! bodies back into serve position between points.

use glam::Vec3;
use hecs::{Entity, World};

use volley_core::components::*;
use volley_core::config::{AgentSpawn, CourtLayout, RallyConfig};
use volley_core::enums::{AgentSlot, Controller, Side};
use volley_core::error::RallyError;
use volley_core::types::Body;

/// Entity handles for everything on the court.
#[derive(Debug, Clone)]
pub struct Court {
    pub ball: Entity,
    /// One entry per slot, in `AgentSlot::ALL` order.
    pub agents: Vec<(AgentSlot, Entity)>,
}

impl Court {
    pub fn agent(&self, slot: AgentSlot) -> Option<Entity> {
        self.agents
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, entity)| *entity)
    }
}

/// Spawn the ball and all four agents. Every collaborator is checked before
/// anything is spawned, so a failed setup leaves the world empty.
pub fn setup_court(world: &mut World, layout: &CourtLayout) -> Result<Court, RallyError> {
    let ball_position = layout
        .ball
        .ok_or_else(|| RallyError::MissingCollaborator("ball".to_string()))?;

    let mut spawns = Vec::with_capacity(AgentSlot::ALL.len());
    for slot in AgentSlot::ALL {
        let spawn = layout
            .spawn(slot)
            .ok_or_else(|| RallyError::MissingCollaborator(format!("agent {slot:?}")))?;
        spawns.push(*spawn);
    }

    let ball = spawn_ball(world, ball_position);
    let agents = spawns
        .iter()
        .map(|spawn| (spawn.slot, spawn_agent(world, spawn)))
        .collect();

    Ok(Court { ball, agents })
}

/// Spawn the ball, parked with gravity off.
pub fn spawn_ball(world: &mut World, position: Vec3) -> Entity {
    let mut body = Body::at(position);
    body.gravity = false;
    world.spawn((Ball::default(), body))
}

/// Spawn one roster slot with the components its controller needs.
pub fn spawn_agent(world: &mut World, spawn: &AgentSpawn) -> Entity {
    let agent = Agent {
        slot: spawn.slot,
        side: spawn.slot.side(),
        controller: spawn.controller,
    };
    let body = Body::at(spawn.position);
    let home = SpawnPoint(spawn.position);
    match spawn.controller {
        Controller::Human => world.spawn((agent, body, Grounded(false), home, ControlInput::default())),
        Controller::Ai => world.spawn((agent, body, Grounded(false), home, AiBrain::default())),
    }
}

/// Put every body back for a new point: agents on their spawn points, the
/// server on the serve spot for `serving_side`, the ball parked next to the
/// server with gravity off and no velocity.
pub fn reset_bodies(
    world: &mut World,
    court: &Court,
    server: AgentSlot,
    serving_side: Side,
    config: &RallyConfig,
) {
    for (_entity, (agent, body, spawn)) in
        world.query_mut::<(&Agent, &mut Body, &SpawnPoint)>()
    {
        body.position = if agent.slot == server {
            config.serve_location(serving_side)
        } else {
            spawn.0
        };
        body.velocity = Vec3::ZERO;
    }

    for (_entity, brain) in world.query_mut::<&mut AiBrain>() {
        brain.phase = Default::default();
    }

    if let Ok((body, ball)) = world.query_one_mut::<(&mut Body, &mut Ball)>(court.ball) {
        body.position = config.serve_ball_location(serving_side);
        body.velocity = Vec3::ZERO;
        body.gravity = false;
        ball.going_to = None;
    }
}
