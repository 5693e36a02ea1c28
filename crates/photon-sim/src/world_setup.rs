//! Entity spawn factories for setting up the simulation world.
//!
//! Creates bases, units and the host-owned scene entities with the
//! appropriate component bundles.

use std::collections::VecDeque;

use hecs::World;
use tracing::debug;

use photon_core::commands::CommandNode;
use photon_core::components::*;
use photon_core::config::ArenaSettings;
use photon_core::constants::{BASE_SIZE_METERS, SHELL_LIFETIME_SECS};
use photon_core::enums::UnitKind;
use photon_core::types::{BaseId, Owner, Position, UnitId, Vector2};
use photon_core::units::UnitDefinition;

/// Set up the initial match world: one base per side, facing each other
/// across the arena's horizontal midline.
pub fn setup_match(world: &mut World, arena: ArenaSettings, base_hp: f64) {
    let mid_y = arena.height / 2.0;
    spawn_base(
        world,
        BaseId(0),
        Owner::Player,
        Vector2::new(BASE_SIZE_METERS * 2.0, mid_y),
        base_hp,
    );
    spawn_base(
        world,
        BaseId(1),
        Owner::Opponent,
        Vector2::new(arena.width - BASE_SIZE_METERS * 2.0, mid_y),
        base_hp,
    );
}

/// Spawn a base with full health and an idle turret.
pub fn spawn_base(
    world: &mut World,
    id: BaseId,
    owner: Owner,
    position: Vector2,
    hp: f64,
) -> hecs::Entity {
    world.spawn((
        Base {
            id,
            owner,
            is_selected: false,
        },
        Position(position),
        Health::full(hp),
        BaseMotion::default(),
        BaseTurret::default(),
    ))
}

/// Spawn a unit at `spawn` with a single move order toward `rally`.
pub fn spawn_unit(
    world: &mut World,
    id: UnitId,
    kind: UnitKind,
    owner: Owner,
    definition: &UnitDefinition,
    spawn: Vector2,
    rally: Vector2,
) -> hecs::Entity {
    debug!(unit = id.0, %kind, ?owner, "unit spawned");
    world.spawn((
        Unit { id, kind, owner },
        Position(spawn),
        Health::full(definition.hp),
        CommandQueue(VecDeque::from(vec![CommandNode::Move { position: rally }])),
        Promotion::default(),
        AbilityState::default(),
    ))
}

/// Place a building.
pub fn spawn_structure(world: &mut World, position: Vector2) -> hecs::Entity {
    world.spawn((Structure, Position(position)))
}

/// Place a mining depot.
pub fn spawn_mining_depot(world: &mut World, position: Vector2) -> hecs::Entity {
    world.spawn((MiningDepot, Position(position)))
}

/// Add a projectile in flight; the host moves and removes it.
pub fn spawn_projectile(world: &mut World, position: Vector2) -> hecs::Entity {
    world.spawn((Projectile, Position(position)))
}

/// Drop a shell casing; it expires after `SHELL_LIFETIME_SECS`.
pub fn spawn_shell(world: &mut World, position: Vector2) -> hecs::Entity {
    let shell = ShellCasing {
        remaining_secs: SHELL_LIFETIME_SECS,
    };
    world.spawn((shell, Position(position)))
}

/// Mark a warp gate being summoned.
pub fn spawn_warp_gate(world: &mut World, position: Vector2) -> hecs::Entity {
    world.spawn((WarpGate, Position(position)))
}

/// Add an influence zone.
pub fn spawn_influence_zone(
    world: &mut World,
    position: Vector2,
    radius: f64,
    owner: Owner,
) -> hecs::Entity {
    world.spawn((InfluenceZone {
        position,
        radius,
        owner,
    },))
}
