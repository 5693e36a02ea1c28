//! Base relocation and the optional base turret.

use hecs::{Entity, World};

use photon_core::components::{Base, BaseMotion, BaseTurret, Health};
use photon_core::constants::*;
use photon_core::events::EffectEvent;
use photon_core::math;
use photon_core::types::{Owner, Position, Vector2};

use super::targeting;

/// Move bases toward their targets and, if enabled, fire turrets.
pub fn run(world: &mut World, lasers_enabled: bool, dt: f64, events: &mut Vec<EffectEvent>) {
    for (_entity, (pos, motion)) in world.query_mut::<(&mut Position, &mut BaseMotion)>() {
        let Some(target) = motion.movement_target else {
            continue;
        };
        let (next, _moved) = math::step_toward(pos.0, target, BASE_MOVE_SPEED * dt);
        pos.0 = next;
        if math::distance(next, target) < ARRIVAL_EPSILON {
            motion.movement_target = None;
        }
    }

    if lasers_enabled {
        fire_turrets(world, dt, events);
    }
}

fn fire_turrets(world: &mut World, dt: f64, events: &mut Vec<EffectEvent>) {
    let mut ready: Vec<(u32, Entity, Owner, Vector2)> = Vec::new();
    for (entity, (base, pos, health, turret)) in
        world.query_mut::<(&Base, &Position, &Health, &mut BaseTurret)>()
    {
        turret.laser_cooldown_secs = (turret.laser_cooldown_secs - dt).max(0.0);
        if turret.laser_cooldown_secs <= 0.0 && health.is_alive() {
            ready.push((base.id.0, entity, base.owner, pos.0));
        }
    }
    ready.sort_by_key(|(id, ..)| *id);

    for (_id, entity, owner, from) in ready {
        let enemies = targeting::living_enemy_units(world, owner);
        let Some(victim) = targeting::nearest_within(from, &enemies, BASE_LASER_RANGE) else {
            continue;
        };
        targeting::apply_damage(world, victim.entity, BASE_LASER_DAMAGE);
        if let Ok(turret) = world.query_one_mut::<&mut BaseTurret>(entity) {
            turret.laser_cooldown_secs = BASE_LASER_COOLDOWN_SECS;
        }
        events.push(EffectEvent::BaseLaserFired {
            owner,
            from,
            to: victim.position,
        });
    }
}
