//! AI opponents for the volley rally.
//!
//! Implements the per-agent approach/strike state machine and the tuning
//! profile it reads. The AI keeps its own phase and never consults the shared
//! rally state.

pub mod fsm;
pub mod profiles;

pub use volley_core as core;

#[cfg(test)]
mod tests;
