//! Rally engine for the volley simulation.
//!
//! Owns the hecs world with the ball and the four agents, judges human hits
//! against the rally state, runs the AI opponents and applies the score and
//! rotation policy. Body integration and collision detection belong to the
//! host, which mirrors bodies in and reads velocities back out.

pub mod engine;
pub mod hit;
pub mod rally;
pub mod scoring;
pub mod systems;
pub mod targeting;
pub mod world_setup;

pub use engine::RallyEngine;
pub use volley_core as core;
