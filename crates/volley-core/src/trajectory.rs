//! Ballistic solve for hits.
//!
//! Lofted launches split the flight into a climb to the apex and a fixed
//! canonical descent, so airtime depends only on the apex height above the
//! ball and never on horizontal distance. Flat launches travel in a straight
//! line at constant speed with gravity off.

use glam::Vec3;

use crate::constants::DESCENT_REFERENCE_HEIGHT;
use crate::enums::LaunchMode;
use crate::error::RallyError;
use crate::types::{AimPoint, Launch};

/// Pick the launch mode: an apex above the ball means a lofted arc.
pub fn select_mode(ball_y: f32, apex: f32) -> LaunchMode {
    if apex > ball_y {
        LaunchMode::Lofted
    } else {
        LaunchMode::Flat
    }
}

/// Vertical launch speed needed to climb `rise` meters.
pub fn ascent_speed(gravity: f32, rise: f32) -> f32 {
    (2.0 * gravity * rise.max(0.0)).sqrt()
}

/// Speed of the canonical descent from `DESCENT_REFERENCE_HEIGHT` to the floor.
pub fn descent_speed(gravity: f32) -> f32 {
    (2.0 * gravity * DESCENT_REFERENCE_HEIGHT).sqrt()
}

/// Total airtime of a lofted launch with vertical speed `v_up`.
pub fn lofted_airtime(gravity: f32, v_up: f32) -> f32 {
    v_up / gravity + descent_speed(gravity) / gravity
}

/// Lofted launch velocity from `from` toward `(end_x, end_z)`.
/// Returns the velocity and the implied airtime.
pub fn lofted_velocity(from: Vec3, end_x: f32, end_z: f32, apex: f32, gravity: f32) -> (Vec3, f32) {
    let v_up = ascent_speed(gravity, apex - from.y);
    let t = lofted_airtime(gravity, v_up);
    let vx = (end_x - from.x) / t;
    let vz = (end_z - from.z) / t;
    (Vec3::new(vx, v_up, vz), t)
}

/// Unit direction from `from` to `to`.
pub fn flat_direction(from: Vec3, to: Vec3) -> Result<Vec3, RallyError> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec3::ZERO {
        return Err(RallyError::DegenerateGeometry);
    }
    Ok(dir)
}

/// Flat launch velocity at `speed` toward `target`.
pub fn flat_velocity(from: Vec3, target: Vec3, speed: f32) -> Result<Vec3, RallyError> {
    flat_direction(from, target).map(|dir| dir * speed)
}

/// Full solve: choose the mode from `apex` and compute the launch.
///
/// A degenerate flat direction is returned as an error so callers can log it
/// and fall back to `Launch::vertical_escape`.
pub fn solve(
    ball_position: Vec3,
    end: AimPoint,
    apex: f32,
    flat_speed: f32,
    gravity: f32,
) -> Result<Launch, RallyError> {
    match select_mode(ball_position.y, apex) {
        LaunchMode::Lofted => {
            let (velocity, t) = lofted_velocity(ball_position, end.x, end.z, apex, gravity);
            Ok(Launch {
                mode: LaunchMode::Lofted,
                velocity,
                gravity: true,
                airtime: Some(t),
            })
        }
        LaunchMode::Flat => {
            let target = end.resolve(ball_position.y);
            let velocity = flat_velocity(ball_position, target, flat_speed)?;
            Ok(Launch {
                mode: LaunchMode::Flat,
                velocity,
                gravity: false,
                airtime: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lofted_reference_scenario() {
        // Ball on the floor, target 8 m away, apex 6, g = 10.
        let (vel, t) = lofted_velocity(Vec3::ZERO, 8.0, 0.0, 6.0, 10.0);
        assert!((vel.y - 120.0_f32.sqrt()).abs() < 1e-4, "v_up = {}", vel.y);
        assert!((vel.y - 10.954).abs() < 1e-2);
        assert!((t - 2.0954).abs() < 1e-3, "t = {t}");
        assert!((vel.x - 3.818).abs() < 1e-2, "vx = {}", vel.x);
        assert_eq!(vel.z, 0.0);
    }

    #[test]
    fn test_mode_selection() {
        assert_eq!(select_mode(1.0, 5.0), LaunchMode::Lofted);
        assert_eq!(select_mode(1.0, -1.0), LaunchMode::Flat);
        // Equal heights cannot climb, so the hit goes flat.
        assert_eq!(select_mode(5.0, 5.0), LaunchMode::Flat);
    }

    #[test]
    fn test_flat_uses_ball_height_when_unset() {
        let from = Vec3::new(0.0, 3.0, 0.0);
        let launch = solve(from, AimPoint::new(8.0, 0.0), -1.0, 10.0, 9.81).unwrap();
        assert_eq!(launch.mode, LaunchMode::Flat);
        assert!(!launch.gravity);
        assert!((launch.velocity - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_flat_aims_down_at_floor() {
        let from = Vec3::new(0.0, 3.0, 0.0);
        let launch = solve(from, AimPoint::on_floor(4.0, 0.0), -1.0, 10.0, 9.81).unwrap();
        assert!(launch.velocity.y < 0.0, "spike at the floor must descend");
        assert!((launch.velocity.length() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_flat_degenerate_direction() {
        let from = Vec3::new(2.0, 3.0, 1.0);
        let result = solve(from, AimPoint::new(2.0, 1.0), -1.0, 10.0, 9.81);
        assert_eq!(result, Err(RallyError::DegenerateGeometry));

        let escape = Launch::vertical_escape(10.0);
        assert_eq!(escape.mode, LaunchMode::Flat);
        assert_eq!(escape.velocity, Vec3::new(0.0, 10.0, 0.0));
        assert!(!escape.gravity);
        assert!(escape.velocity.is_finite());
    }

    proptest! {
        #[test]
        fn prop_lofted_vertical_speed_law(
            y in 0.0f32..4.0,
            rise in 0.1f32..6.0,
            end_x in -12.0f32..12.0,
            end_z in -6.0f32..6.0,
            g in 1.0f32..20.0,
        ) {
            let from = Vec3::new(0.5, y, -0.5);
            let apex = y + rise;
            let launch = solve(from, AimPoint::new(end_x, end_z), apex, 10.0, g).unwrap();
            prop_assert_eq!(launch.mode, LaunchMode::Lofted);
            prop_assert!(launch.gravity);
            let expected = (2.0 * g * rise).sqrt();
            prop_assert!((launch.velocity.y - expected).abs() <= 1e-3 * expected.max(1.0));
            let t = launch.airtime.unwrap();
            prop_assert!(t > 0.0);
        }

        #[test]
        fn prop_lofted_airtime_ignores_distance(
            rise in 0.1f32..6.0,
            near in 0.0f32..3.0,
            far in 5.0f32..15.0,
        ) {
            let from = Vec3::new(0.0, 1.0, 0.0);
            let (_, t_near) = lofted_velocity(from, near, 0.0, 1.0 + rise, 9.81);
            let (_, t_far) = lofted_velocity(from, far, 4.0, 1.0 + rise, 9.81);
            prop_assert!((t_near - t_far).abs() < 1e-6);
        }

        #[test]
        fn prop_flat_speed_is_exact(
            bx in -10.0f32..10.0,
            by in 0.0f32..5.0,
            tx in -10.0f32..10.0,
            tz in -6.0f32..6.0,
            speed in 1.0f32..30.0,
        ) {
            let from = Vec3::new(bx, by, 0.0);
            prop_assume!((Vec3::new(tx, 0.0, tz) - from).length() > 1e-2);
            let launch = solve(from, AimPoint::on_floor(tx, tz), -1.0, speed, 9.81).unwrap();
            prop_assert_eq!(launch.mode, LaunchMode::Flat);
            prop_assert!((launch.velocity.length() - speed).abs() <= 1e-4 * speed);
        }
    }
}
