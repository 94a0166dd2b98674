//! Rally engine, the core of the simulation.
//!
//! `RallyEngine` owns the hecs world, the rally state and the score. The host
//! mirrors rigid bodies in with `sync_body`, forwards collisions, calls
//! `physics_tick` at the fixed rate and `frame_tick` once per rendered frame,
//! then reads velocities and gravity flags back with `body`.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::{Entity, World};
use tracing::{debug, error, info};

use volley_core::commands::PlayerCommand;
use volley_core::components::{Agent, ControlInput, Grounded};
use volley_core::config::{CourtLayout, RallyConfig};
use volley_core::enums::{AgentSlot, Controller, RallyPhase, Side, Surface};
use volley_core::error::RallyError;
use volley_core::events::RallyEvent;
use volley_core::state::RallySnapshot;
use volley_core::types::{Body, Score, SimTime};

use volley_ai::profiles::AiProfile;

use crate::rally::RallyState;
use crate::scoring;
use crate::systems;
use crate::targeting::TargetingEngine;
use crate::world_setup::{self, Court};

pub struct RallyEngine {
    world: World,
    /// `None` when setup failed; the engine then ignores every call.
    court: Option<Court>,
    fault: Option<RallyError>,
    config: RallyConfig,
    targeting: TargetingEngine,
    ai_profile: AiProfile,
    rally: RallyState,
    score: Score,
    winner: Option<Side>,
    time: SimTime,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<RallyEvent>,
}

impl RallyEngine {
    /// Spawn the court and open the first point. An invalid config or a layout
    /// missing the ball or a slot is logged once and leaves the engine inert.
    pub fn new(config: RallyConfig, layout: &CourtLayout) -> Self {
        let mut world = World::new();
        let setup = config
            .validate()
            .and_then(|()| world_setup::setup_court(&mut world, layout));
        let (court, fault) = match setup {
            Ok(court) => (Some(court), None),
            Err(err) => {
                error!(%err, "rally setup failed; engine disabled");
                (None, Some(err))
            }
        };

        let mut engine = Self {
            world,
            court,
            fault,
            targeting: TargetingEngine::new(config.gravity),
            ai_profile: AiProfile::from_config(&config),
            config,
            rally: RallyState::default(),
            score: Score::default(),
            winner: None,
            time: SimTime::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        };
        engine.next_point();
        engine
    }

    /// Queue a command for the next frame tick.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Mirror the simulator's position and velocity for one body.
    pub fn sync_body(&mut self, entity: Entity, position: Vec3, velocity: Vec3) {
        if let Ok(mut body) = self.world.get::<&mut Body>(entity) {
            body.position = position;
            body.velocity = velocity;
        }
    }

    /// Current body state, as the simulator should apply it.
    pub fn body(&self, entity: Entity) -> Option<Body> {
        self.world.get::<&Body>(entity).ok().map(|body| *body)
    }

    pub fn ball_entity(&self) -> Option<Entity> {
        self.court.as_ref().map(|court| court.ball)
    }

    pub fn agent_entity(&self, slot: AgentSlot) -> Option<Entity> {
        self.court.as_ref().and_then(|court| court.agent(slot))
    }

    pub fn controller(&self, slot: AgentSlot) -> Option<Controller> {
        let entity = self.agent_entity(slot)?;
        self.world
            .get::<&Agent>(entity)
            .ok()
            .map(|agent| agent.controller)
    }

    pub fn on_collision_enter(&mut self, entity: Entity, surface: Surface) {
        let Some(court) = self.court.as_ref() else {
            return;
        };

        if entity == court.ball {
            self.on_ball_contact(surface);
            return;
        }
        if surface == Surface::Ground {
            if let Ok(mut grounded) = self.world.get::<&mut Grounded>(entity) {
                grounded.0 = true;
            }
        }
    }

    pub fn on_collision_exit(&mut self, entity: Entity, surface: Surface) {
        if self.court.is_none() || surface != Surface::Ground {
            return;
        }
        if let Ok(mut grounded) = self.world.get::<&mut Grounded>(entity) {
            grounded.0 = false;
        }
    }

    /// Fixed-rate step: human steering and jumps.
    pub fn physics_tick(&mut self, dt: f32) {
        if self.court.is_none() {
            return;
        }
        systems::movement::run(&mut self.world, &self.config, dt, &mut self.events);
        self.time.advance_physics(dt);
    }

    /// Per-frame step: commands, human hits, AI. Returns the resulting snapshot.
    pub fn frame_tick(&mut self) -> RallySnapshot {
        let Some(court) = self.court.clone() else {
            self.command_queue.clear();
            return RallySnapshot {
                time: self.time,
                ..Default::default()
            };
        };

        self.process_commands();

        if self.winner.is_none() {
            systems::human::run(
                &mut self.world,
                &court,
                &mut self.rally,
                &self.targeting,
                &self.config,
                &mut self.events,
            );
            systems::ai::run(&mut self.world, &court, &self.ai_profile, &mut self.events);
        }
        self.time.advance_frame();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &court,
            &self.time,
            &self.rally,
            self.score,
            self.winner,
            events,
        )
    }

    /// Put every body back for a new point with the current server.
    pub fn next_point(&mut self) {
        let Some(court) = self.court.as_ref() else {
            return;
        };
        self.rally.begin_point();
        world_setup::reset_bodies(
            &mut self.world,
            court,
            self.rally.server,
            self.rally.attacking_side,
            &self.config,
        );
        info!(server = ?self.rally.server, side = ?self.rally.attacking_side, "point started");
        self.events.push(RallyEvent::PointStarted {
            server: self.rally.server,
        });
    }

    pub fn rally(&self) -> &RallyState {
        &self.rally
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &RallyConfig {
        &self.config
    }

    /// Setup error that disabled the engine, if any.
    pub fn fault(&self) -> Option<&RallyError> {
        self.fault.as_ref()
    }

    /// Read-only access to the entity store.
    pub fn world(&self) -> &World {
        &self.world
    }

    fn on_ball_contact(&mut self, surface: Surface) {
        let Some(ball) = self.ball_entity() else {
            return;
        };
        // Flat balls drop as soon as they touch anything.
        if self.rally.phase != RallyPhase::PointStart {
            if let Ok(mut body) = self.world.get::<&mut Body>(ball) {
                body.gravity = true;
            }
        }

        let Some(outcome) = scoring::on_floor_contact(
            surface,
            &self.rally,
            &mut self.score,
            self.winner,
            &self.config,
        ) else {
            return;
        };

        info!(scorer = ?outcome.scorer, left = outcome.score.left, right = outcome.score.right, "point scored");
        self.events.push(RallyEvent::PointScored {
            scorer: outcome.scorer,
            score: outcome.score,
        });

        if let Some(winner) = outcome.winner {
            info!(?winner, left = outcome.score.left, right = outcome.score.right, "match won");
            self.winner = Some(winner);
            self.events.push(RallyEvent::MatchWon {
                winner,
                score: outcome.score,
            });
            return;
        }

        if outcome.rotate {
            let server = self.rally.rotate_server();
            info!(?server, attacking = ?self.rally.attacking_side, "serve rotated");
            self.events.push(RallyEvent::ServerRotated {
                server,
                attacking: self.rally.attacking_side,
            });
        }
        self.next_point();
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Input { slot, input } => {
                let Some(entity) = self.agent_entity(slot) else {
                    return;
                };
                match self.world.get::<&mut ControlInput>(entity) {
                    Ok(mut current) => {
                        let merged = ControlInput {
                            bump: input.bump || current.bump,
                            set: input.set || current.set,
                            spike: input.spike || current.spike,
                            serve: input.serve || current.serve,
                            block: input.block || current.block,
                            ..input
                        };
                        *current = merged;
                    }
                    Err(_) => debug!(?slot, "input for a non-human slot ignored"),
                }
            }
            PlayerCommand::ResetMatch => {
                info!("match reset");
                self.rally.reset_match();
                self.score = Score::default();
                self.winner = None;
                self.events.push(RallyEvent::MatchReset);
                self.next_point();
            }
        }
    }
}
