//! Snapshot system: queries the ECS world and builds a complete ArenaSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use photon_core::components::*;
use photon_core::enums::MatchMode;
use photon_core::events::EffectEvent;
use photon_core::state::*;
use photon_core::types::{Owner, Player, Position, SimTime};

/// Build a complete ArenaSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    mode: MatchMode,
    winner: Option<Owner>,
    players: &[Player; 2],
    events: Vec<EffectEvent>,
) -> ArenaSnapshot {
    ArenaSnapshot {
        time: *time,
        mode,
        winner,
        players: build_players(players),
        units: build_units(world),
        bases: build_bases(world),
        events,
    }
}

fn build_players(players: &[Player; 2]) -> Vec<PlayerView> {
    Owner::BOTH
        .iter()
        .map(|&owner| {
            let player = &players[owner.index()];
            PlayerView {
                owner,
                photons: player.photons,
                income_rate: player.income_rate,
                color: player.color.to_css(),
                secondary_resource: player.secondary_resource,
            }
        })
        .collect()
}

fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(
            &Unit,
            &Position,
            &Health,
            &CommandQueue,
            &Promotion,
            &AbilityState,
        )>()
        .iter()
        .map(|(_entity, (unit, pos, health, queue, promotion, ability))| UnitView {
            id: unit.id,
            kind: unit.kind,
            owner: unit.owner,
            position: pos.0,
            hp: health.hp,
            max_hp: health.max_hp,
            damage_multiplier: promotion.damage_multiplier,
            distance_traveled: promotion.distance_traveled,
            ability_cooldown: ability.cooldown_secs,
            orders: queue.0.iter().copied().collect(),
            telegraph_end: match ability.pending {
                Some(PendingAbility::LineJump { end, .. }) => Some(end),
                None => None,
            },
            dash_executing: ability.dash_executing(),
        })
        .collect();
    units.sort_by_key(|view| view.id);
    units
}

fn build_bases(world: &World) -> Vec<BaseView> {
    let mut bases: Vec<BaseView> = world
        .query::<(&Base, &Position, &Health, &BaseMotion, &BaseTurret)>()
        .iter()
        .map(|(_entity, (base, pos, health, motion, turret))| BaseView {
            id: base.id,
            owner: base.owner,
            position: pos.0,
            hp: health.hp,
            max_hp: health.max_hp,
            movement_target: motion.movement_target,
            is_selected: base.is_selected,
            laser_cooldown: turret.laser_cooldown_secs,
        })
        .collect();
    bases.sort_by_key(|view| view.id);
    bases
}
