//! Target lookup shared by abilities, combat and base turrets.

use hecs::{Entity, World};

use photon_core::components::{Base, Health, Unit};
use photon_core::types::{Owner, Position, Vector2};

/// A candidate target captured at lookup time.
#[derive(Debug, Clone, Copy)]
pub struct Target {
    pub entity: Entity,
    pub position: Vector2,
}

/// Living units not owned by `owner`, in unit-id order.
pub fn living_enemy_units(world: &World, owner: Owner) -> Vec<Target> {
    let mut enemies: Vec<(u32, Target)> = world
        .query::<(&Unit, &Position, &Health)>()
        .iter()
        .filter(|(_entity, (unit, _pos, health))| unit.owner != owner && health.is_alive())
        .map(|(entity, (unit, pos, _health))| {
            (
                unit.id.0,
                Target {
                    entity,
                    position: pos.0,
                },
            )
        })
        .collect();
    enemies.sort_by_key(|(id, _)| *id);
    enemies.into_iter().map(|(_, target)| target).collect()
}

/// Bases not owned by `owner`, in base-id order.
pub fn enemy_bases(world: &World, owner: Owner) -> Vec<Target> {
    let mut bases: Vec<(u32, Target)> = world
        .query::<(&Base, &Position)>()
        .iter()
        .filter(|(_entity, (base, _pos))| base.owner != owner)
        .map(|(entity, (base, pos))| {
            (
                base.id.0,
                Target {
                    entity,
                    position: pos.0,
                },
            )
        })
        .collect();
    bases.sort_by_key(|(id, _)| *id);
    bases.into_iter().map(|(_, target)| target).collect()
}

/// Nearest candidate to `from` within `max_range` (inclusive). Ties keep
/// the earlier candidate.
pub fn nearest_within(from: Vector2, candidates: &[Target], max_range: f64) -> Option<Target> {
    let mut best: Option<(f64, Target)> = None;
    for candidate in candidates {
        let dist = from.distance(candidate.position);
        if dist > max_range {
            continue;
        }
        if best.map_or(true, |(best_dist, _)| dist < best_dist) {
            best = Some((dist, *candidate));
        }
    }
    best.map(|(_, target)| target)
}

/// Whether the entity still has hp above zero.
pub fn is_alive(world: &World, entity: Entity) -> bool {
    world
        .get::<&Health>(entity)
        .map(|health| health.is_alive())
        .unwrap_or(false)
}

/// Subtract `amount` hp from an entity, if it has health.
pub fn apply_damage(world: &World, entity: Entity, amount: f64) {
    if let Ok(mut health) = world.get::<&mut Health>(entity) {
        health.hp -= amount;
    }
}
