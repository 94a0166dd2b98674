//! AI behavior finite state machine.
//!
//! Pure functions that compute phase transitions, steering and strikes for
//! one AI agent from its own position and the ball. The shared rally phase is
//! never consulted: this agent plays on its private Waiting → Bumping →
//! Setting → Spiking cycle. No ECS dependency; operates on plain data.

use glam::Vec3;
use tracing::warn;

use volley_core::enums::AiPhase;
use volley_core::kinematics::{horizontal_offset, steer_horizontal};
use volley_core::trajectory;
use volley_core::types::{AimPoint, Launch};

use crate::profiles::AiProfile;

/// Input to the AI FSM for a single agent.
#[derive(Debug, Clone, Copy)]
pub struct AiContext {
    pub phase: AiPhase,
    pub position: Vec3,
    pub velocity: Vec3,
    pub grounded: bool,
    pub ball_position: Vec3,
    pub ball_velocity: Vec3,
    /// Target of this agent's last bump.
    pub bump_target: Vec3,
}

/// What the agent does this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AiAction {
    Idle,
    /// Replace the agent velocity while chasing the ball.
    Approach { velocity: Vec3 },
    /// Replace the agent velocity with a jump; the agent leaves the ground.
    Jump { velocity: Vec3 },
    /// Launch the ball.
    Strike { launch: Launch, target: Vec3 },
}

/// Output from the AI FSM.
#[derive(Debug, Clone, Copy)]
pub struct AiUpdate {
    pub new_phase: AiPhase,
    pub action: AiAction,
    pub phase_changed: bool,
    pub bump_target: Vec3,
}

/// Evaluate the FSM for one agent.
pub fn evaluate(ctx: &AiContext, profile: &AiProfile) -> AiUpdate {
    match ctx.phase {
        AiPhase::Waiting => evaluate_waiting(ctx),
        AiPhase::Bumping => evaluate_bumping(ctx, profile),
        AiPhase::Setting => evaluate_setting(ctx, profile),
        AiPhase::Spiking => evaluate_spiking(ctx, profile),
    }
}

fn stay(ctx: &AiContext, action: AiAction) -> AiUpdate {
    AiUpdate {
        new_phase: ctx.phase,
        action,
        phase_changed: false,
        bump_target: ctx.bump_target,
    }
}

fn advance(ctx: &AiContext, phase: AiPhase, action: AiAction, bump_target: Vec3) -> AiUpdate {
    AiUpdate {
        new_phase: phase,
        action,
        phase_changed: phase != ctx.phase,
        bump_target,
    }
}

fn evaluate_waiting(ctx: &AiContext) -> AiUpdate {
    // Ball on this agent's half (same sign of x), feet on the ground.
    if ctx.ball_position.x * ctx.position.x >= 0.0 && ctx.grounded {
        return advance(ctx, AiPhase::Bumping, AiAction::Idle, ctx.bump_target);
    }
    stay(ctx, AiAction::Idle)
}

fn evaluate_bumping(ctx: &AiContext, profile: &AiProfile) -> AiUpdate {
    if can_play(ctx, profile) {
        let target = bump_target(ctx.ball_position, profile);
        let launch = strike(
            ctx.ball_position,
            AimPoint::new(target.x, target.z),
            profile.bump_apex,
            profile,
        );
        return advance(
            ctx,
            AiPhase::Setting,
            AiAction::Strike { launch, target },
            target,
        );
    }
    stay(ctx, approach(ctx, profile))
}

fn evaluate_setting(ctx: &AiContext, profile: &AiProfile) -> AiUpdate {
    if can_play(ctx, profile) {
        let target = ctx.bump_target;
        let launch = strike(
            ctx.ball_position,
            AimPoint::new(target.x, target.z),
            profile.set_apex,
            profile,
        );
        return advance(
            ctx,
            AiPhase::Spiking,
            AiAction::Strike { launch, target },
            ctx.bump_target,
        );
    }
    stay(ctx, approach(ctx, profile))
}

fn evaluate_spiking(ctx: &AiContext, profile: &AiProfile) -> AiUpdate {
    if ctx.ball_velocity.y >= 0.0 {
        return stay(ctx, AiAction::Idle);
    }
    if ctx.grounded {
        let velocity = ctx.velocity + Vec3::new(0.0, profile.jump_force, 0.0);
        return stay(ctx, AiAction::Jump { velocity });
    }
    if in_reach(ctx, profile) {
        let aim = spike_target(ctx.ball_position, profile);
        let launch = strike(ctx.ball_position, aim, profile.spike_apex, profile);
        let target = aim.resolve(ctx.ball_position.y);
        return advance(
            ctx,
            AiPhase::Waiting,
            AiAction::Strike { launch, target },
            ctx.bump_target,
        );
    }
    stay(ctx, AiAction::Idle)
}

fn in_reach(ctx: &AiContext, profile: &AiProfile) -> bool {
    ctx.position.distance(ctx.ball_position) <= profile.interaction_radius
}

/// In reach and the ball is on its way down.
fn can_play(ctx: &AiContext, profile: &AiProfile) -> bool {
    in_reach(ctx, profile) && ctx.ball_velocity.y < 0.0
}

/// Net-adjacent point on the ball's half.
pub fn bump_target(ball_position: Vec3, profile: &AiProfile) -> Vec3 {
    let x = if ball_position.x < 0.0 {
        -profile.bump_target_x
    } else {
        profile.bump_target_x
    };
    Vec3::new(x, 0.0, 0.0)
}

/// Mid-back floor point on the half opposite the ball.
pub fn spike_target(ball_position: Vec3, profile: &AiProfile) -> AimPoint {
    let x = if ball_position.x > 0.0 {
        -profile.spike_target_x
    } else {
        profile.spike_target_x
    };
    AimPoint::on_floor(x, 0.0)
}

/// Chase the ball on the horizontal plane under the contact-dependent cap.
pub fn approach(ctx: &AiContext, profile: &AiProfile) -> AiAction {
    let direction = horizontal_offset(ctx.position, ctx.ball_position);
    let velocity = steer_horizontal(
        ctx.velocity,
        direction,
        profile.dt,
        profile.direction_change_rate,
        profile.speed_cap(ctx.grounded),
    );
    AiAction::Approach { velocity }
}

/// Ballistic solve for an AI hit.
fn strike(ball_position: Vec3, aim: AimPoint, apex: f32, profile: &AiProfile) -> Launch {
    match trajectory::solve(
        ball_position,
        aim,
        apex,
        profile.spike_speed,
        profile.gravity,
    ) {
        Ok(launch) => launch,
        Err(err) => {
            warn!(%err, ?ball_position, "AI strike escaping upward");
            Launch::vertical_escape(profile.spike_speed)
        }
    }
}
