//! Tuning surface and court layout.
//!
//! Both load from JSON; missing fields fall back to the defaults in
//! `constants.rs`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{AgentSlot, Controller};
use crate::error::RallyError;

/// Every numeric constant the rally reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RallyConfig {
    /// World gravity magnitude.
    pub gravity: f32,
    /// Fixed physics step used for steering.
    pub fixed_dt: f32,

    pub interaction_radius: f32,
    pub max_ground_speed: f32,
    pub max_air_speed: f32,
    pub direction_change_rate: f32,
    pub jump_force: f32,

    pub bump_apex: f32,
    pub set_apex: f32,
    pub serve_apex: f32,
    /// Apex passed for flat hits; must stay below any reachable ball height.
    pub flat_apex: f32,
    pub spike_speed: f32,
    pub block_speed: f32,

    pub human_bump_target_x: f32,
    pub ai_bump_target_x: f32,
    pub attack_target_x: f32,
    pub depth_shift: f32,
    pub direction_deadzone: f32,

    pub serve_location_x: f32,
    pub serve_location_y: f32,
    pub serve_ball_offset: f32,

    pub points_to_win: u32,
    pub win_margin: u32,
}

impl Default for RallyConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            fixed_dt: FIXED_DT,
            interaction_radius: INTERACTION_RADIUS,
            max_ground_speed: MAX_GROUND_SPEED,
            max_air_speed: MAX_AIR_SPEED,
            direction_change_rate: DIRECTION_CHANGE_RATE,
            jump_force: JUMP_FORCE,
            bump_apex: BUMP_APEX,
            set_apex: SET_APEX,
            serve_apex: SERVE_APEX,
            flat_apex: FLAT_APEX,
            spike_speed: SPIKE_SPEED,
            block_speed: BLOCK_SPEED,
            human_bump_target_x: HUMAN_BUMP_TARGET_X,
            ai_bump_target_x: AI_BUMP_TARGET_X,
            attack_target_x: ATTACK_TARGET_X,
            depth_shift: DEPTH_SHIFT,
            direction_deadzone: DIRECTION_DEADZONE,
            serve_location_x: SERVE_LOCATION_X,
            serve_location_y: SERVE_LOCATION_Y,
            serve_ball_offset: SERVE_BALL_OFFSET,
            points_to_win: POINTS_TO_WIN,
            win_margin: WIN_MARGIN,
        }
    }
}

impl RallyConfig {
    /// Parse from JSON and validate.
    pub fn from_json_str(json: &str) -> Result<Self, RallyError> {
        let config: RallyConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RallyError> {
        let positive = [
            ("gravity", self.gravity),
            ("fixed_dt", self.fixed_dt),
            ("interaction_radius", self.interaction_radius),
            ("max_ground_speed", self.max_ground_speed),
            ("max_air_speed", self.max_air_speed),
            ("direction_change_rate", self.direction_change_rate),
            ("spike_speed", self.spike_speed),
            ("block_speed", self.block_speed),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(RallyError::InvalidConfig(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !self.jump_force.is_finite() || self.jump_force < 0.0 {
            return Err(RallyError::InvalidConfig(
                "jump_force must be finite and >= 0".to_string(),
            ));
        }
        for (name, apex) in [
            ("bump_apex", self.bump_apex),
            ("set_apex", self.set_apex),
            ("serve_apex", self.serve_apex),
        ] {
            if !apex.is_finite() || apex <= self.flat_apex {
                return Err(RallyError::InvalidConfig(format!(
                    "{name} must be finite and above flat_apex"
                )));
            }
        }
        if !(0.0..1.0).contains(&self.direction_deadzone) {
            return Err(RallyError::InvalidConfig(
                "direction_deadzone must be in [0, 1)".to_string(),
            ));
        }
        if self.points_to_win == 0 {
            return Err(RallyError::InvalidConfig(
                "points_to_win must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Serve location for a side: just outside the baseline.
    pub fn serve_location(&self, side: crate::enums::Side) -> Vec3 {
        Vec3::new(
            side.sign() * self.serve_location_x,
            self.serve_location_y,
            0.0,
        )
    }

    /// Parked ball position for a serve from `side`, offset toward the net.
    pub fn serve_ball_location(&self, side: crate::enums::Side) -> Vec3 {
        self.serve_location(side) - Vec3::new(side.sign() * self.serve_ball_offset, 0.0, 0.0)
    }
}

/// One roster entry: a slot, who drives it, and where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentSpawn {
    pub slot: AgentSlot,
    pub controller: Controller,
    pub position: Vec3,
}

/// Session-start placement of the ball and the four roster slots.
///
/// Entries are optional so a hand-written layout with a gap is reported as a
/// missing collaborator instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtLayout {
    pub ball: Option<Vec3>,
    pub agents: Vec<AgentSpawn>,
}

impl Default for CourtLayout {
    /// Four humans. Every slot serves in turn and the AI never serves, so a
    /// playable roster keeps every slot human.
    fn default() -> Self {
        Self::with_controllers([Controller::Human; 4])
    }
}

impl CourtLayout {
    /// Standard spawn points with controllers in `AgentSlot::ALL` order.
    pub fn with_controllers(controllers: [Controller; 4]) -> Self {
        let positions = [
            Vec3::new(-6.0, 1.0, -2.5),
            Vec3::new(-3.0, 1.0, 2.5),
            Vec3::new(6.0, 1.0, 2.5),
            Vec3::new(3.0, 1.0, -2.5),
        ];
        let agents = AgentSlot::ALL
            .into_iter()
            .zip(controllers)
            .zip(positions)
            .map(|((slot, controller), position)| AgentSpawn {
                slot,
                controller,
                position,
            })
            .collect();
        Self {
            ball: Some(Vec3::new(9.0, 1.0, 0.0)),
            agents,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, RallyError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn spawn(&self, slot: AgentSlot) -> Option<&AgentSpawn> {
        self.agents.iter().find(|a| a.slot == slot)
    }
}
