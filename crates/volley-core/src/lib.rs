//! Core types and definitions for the volley rally simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, config, snapshots, events, and the ballistic math.
//! It has no dependency on the entity store or any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod kinematics;
pub mod state;
pub mod trajectory;
pub mod types;

#[cfg(test)]
mod tests;
