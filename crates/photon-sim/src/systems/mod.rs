//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only). They do not own state; all state lives in components or
//! is passed in by the engine.

pub mod abilities;
pub mod bases;
pub mod cleanup;
pub mod combat;
pub mod income;
pub mod snapshot;
pub mod targeting;
pub mod units;
pub mod victory;
