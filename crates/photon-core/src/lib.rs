//! Core types and definitions for the PHOTON arena simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! vector and color math, components, commands, effect events, unit and
//! color-scheme tables, configuration, snapshots and constants.
//! It has no dependency on any ECS runtime or renderer.

pub mod color;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod math;
pub mod schemes;
pub mod state;
pub mod types;
pub mod units;
