//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::commands::CommandNode;
use crate::enums::UnitKind;
use crate::types::{BaseId, Owner, UnitId, Vector2};

/// Identity of a combat unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub kind: UnitKind,
    pub owner: Owner,
}

/// Hit points. `hp` may dip below zero within a tick; the cleanup pass
/// removes any unit at or below zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: f64,
    pub max_hp: f64,
}

impl Health {
    pub fn full(max_hp: f64) -> Self {
        Self { hp: max_hp, max_hp }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }
}

/// FIFO of pending orders. The front node is the current objective.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandQueue(pub VecDeque<CommandNode>);

impl CommandQueue {
    /// Number of `Move` nodes still queued, the current one included.
    pub fn pending_moves(&self) -> usize {
        self.0
            .iter()
            .filter(|node| matches!(node, CommandNode::Move { .. }))
            .count()
    }
}

/// Distance-based promotion progress. `damage_multiplier` only grows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Promotion {
    pub damage_multiplier: f64,
    pub distance_traveled: f64,
    pub distance_credit: f64,
}

impl Default for Promotion {
    fn default() -> Self {
        Self {
            damage_multiplier: 1.0,
            distance_traveled: 0.0,
            distance_credit: 0.0,
        }
    }
}

/// An activated ability waiting to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PendingAbility {
    /// Telegraphed line jump. Suppresses queue processing until it lands.
    LineJump {
        remaining_secs: f64,
        end: Vector2,
        direction: Vector2,
    },
}

/// Ability timers for a unit.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AbilityState {
    pub cooldown_secs: f64,
    pub pending: Option<PendingAbility>,
    /// Animation-only flag timer raised by an execute dash.
    pub dash_flash_secs: f64,
}

impl AbilityState {
    pub fn dash_executing(&self) -> bool {
        self.dash_flash_secs > 0.0
    }
}

/// Identity of a base.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Base {
    pub id: BaseId,
    pub owner: Owner,
    pub is_selected: bool,
}

/// Optional relocation order for a base.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BaseMotion {
    pub movement_target: Option<Vector2>,
}

/// Base auto-turret bookkeeping.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BaseTurret {
    pub laser_cooldown_secs: f64,
}

// --- Scene entities owned by the host; the sim and field only read them ---

/// A building placed in the arena.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Structure;

/// A resource mining depot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MiningDepot;

/// An attack projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// A spent shell casing left behind by an attack.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShellCasing {
    /// Seconds until the casing is swept away.
    pub remaining_secs: f64,
}

/// A warp gate currently being summoned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WarpGate;

/// Circular territory-control region tinting field particles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InfluenceZone {
    pub position: Vector2,
    pub radius: f64,
    pub owner: Owner,
}
