//! Entity simulation engine for PHOTON.
//!
//! Owns the hecs ECS world, advances income, units, bases and combat once
//! per host frame, and produces `ArenaSnapshot`s for the frontend.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use photon_core as core;

#[cfg(test)]
mod tests;
