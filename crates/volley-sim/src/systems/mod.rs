//! ECS systems that operate on the rally world.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; rally bookkeeping is passed in by the engine.

pub mod ai;
pub mod human;
pub mod movement;
pub mod snapshot;
