//! Orders and host commands.
//!
//! `CommandNode`s live in a unit's queue. `ArenaCommand`s are queued on the
//! engine and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::UnitKind;
use crate::types::{Owner, UnitId, Vector2};

/// One queued unit order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CommandNode {
    /// Walk to a point.
    Move { position: Vector2 },
    /// Walk to a point, then use the unit's ability aimed along `direction`.
    Ability {
        position: Vector2,
        direction: Vector2,
    },
}

impl CommandNode {
    pub fn position(&self) -> Vector2 {
        match *self {
            CommandNode::Move { position } | CommandNode::Ability { position, .. } => position,
        }
    }
}

/// Host-side actions (from input handling or AI).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArenaCommand {
    /// Buy and spawn a unit heading for a rally point.
    Spawn {
        owner: Owner,
        kind: UnitKind,
        spawn: Vector2,
        rally: Vector2,
    },
    /// Append orders to a unit's queue.
    QueueOrders { unit: UnitId, orders: Vec<CommandNode> },
    /// Replace a unit's queue.
    ReplaceOrders { unit: UnitId, orders: Vec<CommandNode> },
    /// Drop every pending order of a unit.
    ClearOrders { unit: UnitId },
    /// Relocate a side's base.
    MoveBase { owner: Owner, target: Vector2 },
    /// Mark a side's base as selected or not.
    SelectBase { owner: Owner, selected: bool },
}
