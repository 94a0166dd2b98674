//! Headless exhibition runner for the volley rally engine.
//!
//! Stands in for the host the engine expects: a tiny body integrator that
//! reports floor and ground contacts, and scripted players that feed input.

pub mod exhibition;
pub mod integrator;
pub mod script;

pub use volley_core as core;
