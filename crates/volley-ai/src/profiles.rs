//! Tuning profile for AI agents.
//!
//! Consolidates the config values the AI cycle reads so the FSM never sees
//! the full `RallyConfig`.

use volley_core::config::RallyConfig;

/// Behavioral profile for an AI agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiProfile {
    /// Reach for bump, set and spike (m).
    pub interaction_radius: f32,
    /// Horizontal speed cap on the ground (m/s).
    pub max_ground_speed: f32,
    /// Horizontal speed cap in the air (m/s).
    pub max_air_speed: f32,
    pub direction_change_rate: f32,
    /// Vertical velocity added by a jump (m/s).
    pub jump_force: f32,
    /// Step used to scale steering.
    pub dt: f32,
    pub gravity: f32,
    pub bump_apex: f32,
    pub set_apex: f32,
    /// Below any ball height, forcing a flat spike.
    pub spike_apex: f32,
    pub spike_speed: f32,
    /// |x| of the net-adjacent bump point.
    pub bump_target_x: f32,
    /// |x| of the mid-back spike point.
    pub spike_target_x: f32,
}

impl AiProfile {
    pub fn from_config(config: &RallyConfig) -> Self {
        Self {
            interaction_radius: config.interaction_radius,
            max_ground_speed: config.max_ground_speed,
            max_air_speed: config.max_air_speed,
            direction_change_rate: config.direction_change_rate,
            jump_force: config.jump_force,
            dt: config.fixed_dt,
            gravity: config.gravity,
            bump_apex: config.bump_apex,
            set_apex: config.set_apex,
            spike_apex: config.flat_apex,
            spike_speed: config.spike_speed,
            bump_target_x: config.ai_bump_target_x,
            spike_target_x: config.attack_target_x,
        }
    }

    /// Speed cap for the current contact state.
    pub fn speed_cap(&self, grounded: bool) -> f32 {
        if grounded {
            self.max_ground_speed
        } else {
            self.max_air_speed
        }
    }
}

impl Default for AiProfile {
    fn default() -> Self {
        Self::from_config(&RallyConfig::default())
    }
}
