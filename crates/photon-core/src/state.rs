//! Arena state snapshot: the visible state handed to the host after each tick.

use serde::{Deserialize, Serialize};

use crate::commands::CommandNode;
use crate::enums::{MatchMode, UnitKind};
use crate::events::EffectEvent;
use crate::types::{BaseId, Owner, SimTime, UnitId, Vector2};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub time: SimTime,
    pub mode: MatchMode,
    pub winner: Option<Owner>,
    pub players: Vec<PlayerView>,
    /// Sorted by unit id.
    pub units: Vec<UnitView>,
    /// Sorted by base id.
    pub bases: Vec<BaseView>,
    /// Effects that occurred during this tick.
    pub events: Vec<EffectEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub owner: Owner,
    pub photons: u32,
    pub income_rate: u32,
    /// sRGB CSS string for the renderer.
    pub color: String,
    pub secondary_resource: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub id: UnitId,
    pub kind: UnitKind,
    pub owner: Owner,
    pub position: Vector2,
    pub hp: f64,
    pub max_hp: f64,
    pub damage_multiplier: f64,
    pub distance_traveled: f64,
    pub ability_cooldown: f64,
    /// Pending orders, for waypoint rendering.
    pub orders: Vec<CommandNode>,
    /// Landing point of a telegraphed jump, if one is pending.
    pub telegraph_end: Option<Vector2>,
    pub dash_executing: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseView {
    pub id: BaseId,
    pub owner: Owner,
    pub position: Vector2,
    pub hp: f64,
    pub max_hp: f64,
    pub movement_target: Option<Vector2>,
    pub is_selected: bool,
    pub laser_cooldown: f64,
}
