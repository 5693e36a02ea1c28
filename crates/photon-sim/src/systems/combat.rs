//! Continuous auto-attack.
//!
//! Every living unit with an attack damages one target per tick:
//! the nearest living enemy unit in range, or failing that an enemy base
//! (if the unit may damage structures). Damage scales with `dt`.

use hecs::World;

use photon_core::components::Promotion;
use photon_core::constants::BASE_SIZE_METERS;
use photon_core::types::Position;
use photon_core::units::UnitTable;

use super::{targeting, units};

pub fn run(world: &mut World, table: &UnitTable, dt: f64) {
    for (entity, unit) in units::units_in_id_order(world) {
        if !targeting::is_alive(world, entity) {
            continue;
        }
        let definition = table.get(unit.kind);
        if !definition.has_attack() {
            continue;
        }
        let Ok(origin) = world.get::<&Position>(entity).map(|pos| pos.0) else {
            continue;
        };

        let enemies = targeting::living_enemy_units(world, unit.owner);
        let mut target = targeting::nearest_within(origin, &enemies, definition.attack_range);
        if target.is_none() && definition.can_damage_structures {
            // Base footprint counts toward reach.
            let bases = targeting::enemy_bases(world, unit.owner);
            target = targeting::nearest_within(
                origin,
                &bases,
                definition.attack_range + BASE_SIZE_METERS / 2.0,
            );
        }
        let Some(target) = target else {
            continue;
        };

        let multiplier = world
            .get::<&Promotion>(entity)
            .map(|promotion| promotion.damage_multiplier)
            .unwrap_or(1.0);
        targeting::apply_damage(
            world,
            target.entity,
            definition.damage_per_second() * dt * multiplier,
        );
    }
}
