//! Human hit controller.
//!
//! Maps a pressed hit to a legality check, an aim point and a launch. A
//! rejected hit leaves the ball and the rally untouched.

use glam::{Vec2, Vec3};

use volley_core::components::Ball;
use volley_core::config::RallyConfig;
use volley_core::enums::{AgentSlot, HitKind, RallyPhase, Side};
use volley_core::error::HitRejected;
use volley_core::types::{AimPoint, Body, Launch};

use crate::rally::RallyState;
use crate::targeting::{TargetSpec, TargetingEngine};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRequest {
    pub slot: AgentSlot,
    pub kind: HitKind,
    /// Direction axis sampled with the press.
    pub direction: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitOutcome {
    pub kind: HitKind,
    pub launch: Launch,
    pub target: Vec3,
}

/// Rally phases in which `kind` is a legal touch.
pub fn legal_in(kind: HitKind, phase: RallyPhase) -> bool {
    match kind {
        HitKind::Bump => matches!(
            phase,
            RallyPhase::Served | RallyPhase::Spiked | RallyPhase::Blocked
        ),
        HitKind::Set => phase == RallyPhase::Bumped,
        HitKind::Spike => phase == RallyPhase::Set,
        HitKind::Serve => phase == RallyPhase::PointStart,
        HitKind::Block => matches!(phase, RallyPhase::Set | RallyPhase::Spiked),
    }
}

/// Aim and launch parameters for a hit by an agent on `side`.
pub fn target_for(
    kind: HitKind,
    side: Side,
    attacking_side: Side,
    direction: Vec2,
    config: &RallyConfig,
) -> TargetSpec {
    let own = side.sign();
    let bias = |aim: AimPoint| aim.biased(direction, config.direction_deadzone, config.depth_shift);
    match kind {
        HitKind::Bump => TargetSpec::new(
            AimPoint::new(own * config.human_bump_target_x, 0.0),
            config.bump_apex,
            config.spike_speed,
        ),
        HitKind::Set => TargetSpec::new(
            bias(AimPoint::new(own * config.human_bump_target_x, 0.0)),
            config.set_apex,
            config.spike_speed,
        ),
        HitKind::Spike => TargetSpec::new(
            bias(AimPoint::on_floor(-own * config.attack_target_x, 0.0)),
            config.flat_apex,
            config.spike_speed,
        ),
        HitKind::Serve => TargetSpec::new(
            bias(AimPoint::new(-own * config.attack_target_x, 0.0)),
            config.serve_apex,
            config.spike_speed,
        ),
        HitKind::Block => TargetSpec::new(
            AimPoint::on_floor(attacking_side.sign() * config.attack_target_x, 0.0),
            config.flat_apex,
            config.block_speed,
        ),
    }
}

/// Legality only; never touches state.
pub fn check_hit(
    request: &HitRequest,
    agent: &Body,
    ball: &Body,
    rally: &RallyState,
    config: &RallyConfig,
) -> Result<(), HitRejected> {
    if !legal_in(request.kind, rally.phase) {
        return Err(HitRejected::WrongPhase {
            kind: request.kind,
            phase: rally.phase,
        });
    }
    if request.kind == HitKind::Serve && request.slot != rally.server {
        return Err(HitRejected::NotServer);
    }
    if !rally.can_hit(request.slot) {
        return Err(HitRejected::NotEligible);
    }
    // Blocks come from the defending side only.
    if request.kind == HitKind::Block && request.slot.side() == rally.attacking_side {
        return Err(HitRejected::NotEligible);
    }
    let distance = agent.distance_to(ball);
    if distance > config.interaction_radius {
        return Err(HitRejected::OutOfReach {
            distance,
            radius: config.interaction_radius,
        });
    }
    Ok(())
}

/// Check, aim, launch, then advance the rally.
pub fn attempt_hit(
    request: &HitRequest,
    agent: &Body,
    ball_body: &mut Body,
    ball: &mut Ball,
    rally: &mut RallyState,
    targeting: &TargetingEngine,
    config: &RallyConfig,
) -> Result<HitOutcome, HitRejected> {
    check_hit(request, agent, ball_body, rally, config)?;

    let spec = target_for(
        request.kind,
        request.slot.side(),
        rally.attacking_side,
        request.direction,
        config,
    );
    let (launch, target) = targeting.apply(ball_body, ball, &spec);
    rally.record_hit(request.slot, request.kind);

    Ok(HitOutcome {
        kind: request.kind,
        launch,
        target,
    })
}
