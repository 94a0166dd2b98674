//! Simulation constants and tuning defaults.
//!
//! Every value here seeds a field of `RallyConfig`; the engine itself only
//! reads the config.

/// Physics tick rate (Hz).
pub const PHYSICS_TICK_RATE: u32 = 50;

/// Seconds per physics tick.
pub const FIXED_DT: f32 = 1.0 / PHYSICS_TICK_RATE as f32;

/// World gravity magnitude (m/s²).
pub const GRAVITY: f32 = 9.81;

// --- Targeting ---

/// Height the canonical descent is measured from. `v_down = sqrt(2 g h)`.
pub const DESCENT_REFERENCE_HEIGHT: f32 = 5.0;

/// Apex for a bump.
pub const BUMP_APEX: f32 = 5.0;

/// Apex for a set.
pub const SET_APEX: f32 = 6.0;

/// Apex for a serve.
pub const SERVE_APEX: f32 = 6.0;

/// Apex sentinel that always selects the flat mode.
pub const FLAT_APEX: f32 = -1.0;

/// Speed of a spike.
pub const SPIKE_SPEED: f32 = 10.0;

/// Speed of a block.
pub const BLOCK_SPEED: f32 = 10.0;

// --- Court targets ---

/// |x| of the net-adjacent point a human bump or set lands on.
pub const HUMAN_BUMP_TARGET_X: f32 = 2.0;

/// |x| of the net-adjacent point an AI bump or set lands on.
pub const AI_BUMP_TARGET_X: f32 = 1.0;

/// |x| of the mid-back court point spikes, serves and blocks aim at.
pub const ATTACK_TARGET_X: f32 = 8.0;

/// Depth shift (z) applied by the direction axis.
pub const DEPTH_SHIFT: f32 = 4.0;

/// Direction axis magnitude beyond which the depth shift applies.
pub const DIRECTION_DEADZONE: f32 = 0.64;

// --- Serve ---

/// |x| of the serve location, just outside the court.
pub const SERVE_LOCATION_X: f32 = 10.0;

/// Height of the serve location.
pub const SERVE_LOCATION_Y: f32 = 1.0;

/// Distance from the server to the parked ball, toward the net.
pub const SERVE_BALL_OFFSET: f32 = 1.0;

// --- Agents ---

/// Reach of an agent for any hit (m).
pub const INTERACTION_RADIUS: f32 = 5.0;

/// Horizontal speed cap while grounded (m/s).
pub const MAX_GROUND_SPEED: f32 = 6.0;

/// Horizontal speed cap while airborne (m/s).
pub const MAX_AIR_SPEED: f32 = 4.0;

/// Gain on steering input per second.
pub const DIRECTION_CHANGE_RATE: f32 = 15.0;

/// Vertical velocity added by a jump (m/s).
pub const JUMP_FORCE: f32 = 7.0;

// --- Scoring ---

/// Minimum points to take the match.
pub const POINTS_TO_WIN: u32 = 3;

/// Required lead over the opponent.
pub const WIN_MARGIN: u32 = 2;
