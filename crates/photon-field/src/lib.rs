//! Field particle engine for PHOTON.
//!
//! Ambient point masses pushed around by everything in the arena and tinted
//! by influence zones. Reads the simulation world, never writes it.

pub mod blend;
pub mod engine;
pub mod forces;
pub mod view;

pub use engine::{FieldParticle, FieldParticleEngine};
pub use view::FieldView;
