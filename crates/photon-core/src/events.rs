//! Effect events emitted by the simulation for the visual-effects layer.
//!
//! The simulation decides when an effect happens; rendering and animation
//! are the host's concern.

use serde::{Deserialize, Serialize};

use crate::enums::{AbilityKind, UnitKind};
use crate::types::{Owner, UnitId, Vector2};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EffectEvent {
    /// Spawn burst at a new unit.
    UnitSpawned {
        unit: UnitId,
        kind: UnitKind,
        owner: Owner,
        position: Vector2,
    },
    /// An ability fired (energy pulse / particle burst).
    AbilityUsed {
        unit: UnitId,
        ability: AbilityKind,
        owner: Owner,
        position: Vector2,
    },
    /// A telegraphed line jump resolved.
    LineJumpLanded {
        unit: UnitId,
        from: Vector2,
        to: Vector2,
        hits: u32,
    },
    /// A unit was removed after dropping to zero hp.
    UnitDestroyed {
        unit: UnitId,
        owner: Owner,
        position: Vector2,
    },
    /// A base turret fired at a unit.
    BaseLaserFired {
        owner: Owner,
        from: Vector2,
        to: Vector2,
    },
    /// A base fell; the match is over.
    MatchEnded { winner: Owner },
}
