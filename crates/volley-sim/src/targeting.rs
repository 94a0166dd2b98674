//! Ballistic targeting engine.
//!
//! Turns a hit request into a launch and writes it onto the ball in one call:
//! velocity, gravity flag and aim point always change together.

use glam::Vec3;
use tracing::warn;

use volley_core::components::Ball;
use volley_core::enums::LaunchMode;
use volley_core::error::RallyError;
use volley_core::trajectory;
use volley_core::types::{AimPoint, Body, Launch};

/// A hit request, consumed once. The mode follows from `apex`: an apex above
/// the ball lofts, anything else drives flat at `flat_speed`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSpec {
    pub end: AimPoint,
    pub apex: f32,
    pub flat_speed: f32,
}

impl TargetSpec {
    pub fn new(end: AimPoint, apex: f32, flat_speed: f32) -> Self {
        Self {
            end,
            apex,
            flat_speed,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TargetingEngine {
    /// Magnitude of world gravity.
    pub gravity: f32,
}

impl TargetingEngine {
    pub fn new(gravity: f32) -> Self {
        Self {
            gravity: gravity.abs(),
        }
    }

    /// Launch for the ball at `ball_position`. Fails only on a zero-length
    /// flat direction.
    pub fn compute(&self, ball_position: Vec3, spec: &TargetSpec) -> Result<Launch, RallyError> {
        trajectory::solve(
            ball_position,
            spec.end,
            spec.apex,
            spec.flat_speed,
            self.gravity,
        )
    }

    /// Compute and apply. Degenerate geometry falls back to the vertical
    /// escape. Returns the launch and the resolved aim point.
    pub fn apply(&self, body: &mut Body, ball: &mut Ball, spec: &TargetSpec) -> (Launch, Vec3) {
        let launch = match self.compute(body.position, spec) {
            Ok(launch) => launch,
            Err(err) => {
                warn!(%err, position = ?body.position, "flat hit has no direction, escaping upward");
                Launch::vertical_escape(spec.flat_speed)
            }
        };
        let target = aim_target(spec.end, launch.mode, body.position.y);
        launch_ball(body, ball, &launch, target);
        (launch, target)
    }
}

/// Where a launch is headed: lofted arcs land on the floor, flat drives keep
/// the ball's height unless the aim names one.
pub fn aim_target(end: AimPoint, mode: LaunchMode, ball_y: f32) -> Vec3 {
    match mode {
        LaunchMode::Lofted => end.resolve(0.0),
        LaunchMode::Flat => end.resolve(ball_y),
    }
}

/// Write a precomputed launch onto the ball.
pub fn launch_ball(body: &mut Body, ball: &mut Ball, launch: &Launch, target: Vec3) {
    body.velocity = launch.velocity;
    body.gravity = launch.gravity;
    ball.going_to = Some(target);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(position: Vec3) -> (Body, Ball) {
        let mut body = Body::at(position);
        body.gravity = false;
        (body, Ball::default())
    }

    #[test]
    fn test_apply_lofted_sets_everything() {
        let engine = TargetingEngine::new(-10.0);
        let (mut body, mut ball) = ball_at(Vec3::ZERO);
        let spec = TargetSpec::new(AimPoint::new(8.0, 0.0), 6.0, 10.0);
        let (launch, target) = engine.apply(&mut body, &mut ball, &spec);

        assert_eq!(launch.mode, LaunchMode::Lofted);
        assert!(body.gravity);
        assert_eq!(body.velocity, launch.velocity);
        assert!((body.velocity.x - 3.818).abs() < 1e-2);
        assert_eq!(target, Vec3::new(8.0, 0.0, 0.0));
        assert_eq!(ball.going_to, Some(target));
    }

    #[test]
    fn test_apply_flat_keeps_ball_height() {
        let engine = TargetingEngine::new(9.81);
        let (mut body, mut ball) = ball_at(Vec3::new(-2.0, 3.0, 0.0));
        body.gravity = true;
        let spec = TargetSpec::new(AimPoint::new(8.0, 0.0), -1.0, 10.0);
        let (launch, target) = engine.apply(&mut body, &mut ball, &spec);

        assert_eq!(launch.mode, LaunchMode::Flat);
        assert!(!body.gravity);
        assert_eq!(target, Vec3::new(8.0, 3.0, 0.0));
        assert!((body.velocity - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_apply_degenerate_escapes_upward() {
        let engine = TargetingEngine::new(9.81);
        let (mut body, mut ball) = ball_at(Vec3::new(4.0, 2.0, 1.0));
        let spec = TargetSpec::new(AimPoint::new(4.0, 1.0), -1.0, 10.0);
        let (launch, _) = engine.apply(&mut body, &mut ball, &spec);

        assert_eq!(launch.velocity, Vec3::new(0.0, 10.0, 0.0));
        assert!(!body.velocity.is_nan());
        assert!(!body.gravity);
    }
}
