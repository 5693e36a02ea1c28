//! Cleanup system: removes units whose hp dropped to zero and shell
//! casings that have run out their lifetime.

use hecs::{Entity, World};
use tracing::debug;

use photon_core::components::{Health, ShellCasing, Unit};
use photon_core::constants::TIMER_EPSILON;
use photon_core::events::EffectEvent;
use photon_core::types::Position;

/// Despawn dead units. Bases are never removed; a dead base ends the match.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<EffectEvent>) {
    despawn_buffer.clear();

    let mut destroyed = Vec::new();
    for (entity, (unit, pos, health)) in world.query_mut::<(&Unit, &Position, &Health)>() {
        if !health.is_alive() {
            despawn_buffer.push(entity);
            destroyed.push((unit.id, unit.owner, pos.0));
        }
    }
    destroyed.sort_by_key(|(id, ..)| *id);

    for (unit, owner, position) in destroyed {
        debug!(unit = unit.0, ?owner, "unit destroyed");
        events.push(EffectEvent::UnitDestroyed {
            unit,
            owner,
            position,
        });
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Age shell casings by `dt` and despawn the expired ones.
pub fn expire_shells(world: &mut World, despawn_buffer: &mut Vec<Entity>, dt: f64) {
    despawn_buffer.clear();
    for (entity, shell) in world.query_mut::<&mut ShellCasing>() {
        shell.remaining_secs -= dt;
        if shell.remaining_secs <= TIMER_EPSILON {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
