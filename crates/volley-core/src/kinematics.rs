//! Horizontal steering under a speed cap.

use glam::{Vec2, Vec3};

/// Accumulate a steering direction into the horizontal part of `velocity`.
///
/// `direction` is on the (x, z) plane and is not normalized: a longer vector
/// steers harder. The horizontal result is clamped to `cap`; the vertical
/// component passes through untouched. A zero direction leaves the velocity
/// as it is.
pub fn steer_horizontal(velocity: Vec3, direction: Vec2, dt: f32, rate: f32, cap: f32) -> Vec3 {
    if direction == Vec2::ZERO {
        return velocity;
    }
    let horizontal = Vec2::new(velocity.x, velocity.z) + direction * dt * rate;
    let horizontal = horizontal.clamp_length_max(cap);
    Vec3::new(horizontal.x, velocity.y, horizontal.y)
}

/// Horizontal (x, z) offset from `from` to `to`.
pub fn horizontal_offset(from: Vec3, to: Vec3) -> Vec2 {
    Vec2::new(to.x - from.x, to.z - from.z)
}
