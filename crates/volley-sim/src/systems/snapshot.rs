//! Snapshot system: queries the world and builds a complete RallySnapshot.
//!
//! Read-only; never modifies the world.

use hecs::World;

use volley_core::components::*;
use volley_core::enums::Side;
use volley_core::events::RallyEvent;
use volley_core::state::*;
use volley_core::types::{Body, Score, SimTime};

use crate::rally::RallyState;
use crate::world_setup::Court;

pub fn build_snapshot(
    world: &World,
    court: &Court,
    time: &SimTime,
    rally: &RallyState,
    score: Score,
    winner: Option<Side>,
    events: Vec<RallyEvent>,
) -> RallySnapshot {
    RallySnapshot {
        time: *time,
        phase: rally.phase,
        attacking_side: rally.attacking_side,
        server: Some(rally.server),
        last_hitter: rally.last_hitter,
        score,
        winner,
        ball: build_ball(world, court),
        agents: build_agents(world),
        events,
    }
}

fn build_ball(world: &World, court: &Court) -> BallView {
    let Ok(mut query) = world.query_one::<(&Body, &Ball)>(court.ball) else {
        return BallView::default();
    };
    query
        .get()
        .map(|(body, ball)| BallView {
            position: body.position,
            velocity: body.velocity,
            gravity: body.gravity,
            going_to: ball.going_to,
        })
        .unwrap_or_default()
}

/// One view per agent, sorted by slot.
fn build_agents(world: &World) -> Vec<AgentView> {
    let mut agents: Vec<AgentView> = world
        .query::<(&Agent, &Body, &Grounded, Option<&AiBrain>)>()
        .iter()
        .map(|(_, (agent, body, grounded, brain))| AgentView {
            slot: agent.slot,
            controller: agent.controller,
            position: body.position,
            velocity: body.velocity,
            grounded: grounded.0,
            ai_phase: brain.map(|b| b.phase),
        })
        .collect();

    agents.sort_by_key(|a| a.slot);
    agents
}
