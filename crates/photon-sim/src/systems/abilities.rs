//! Unit abilities.
//!
//! Dispatch is a single match over `AbilityKind`. Burst fire and execute
//! dash resolve immediately; line jump is telegraphed: activation stores a
//! `PendingAbility::LineJump` countdown and `resolve_line_jump` applies the
//! effect once it expires.
//!
//! An ability still cooling down when its order is reached does nothing;
//! the caller discards the order either way.

use std::collections::HashSet;

use hecs::{Entity, World};
use tracing::debug;

use photon_core::components::{AbilityState, PendingAbility, Promotion, Unit};
use photon_core::constants::*;
use photon_core::enums::AbilityKind;
use photon_core::events::EffectEvent;
use photon_core::math;
use photon_core::types::{Owner, Position, Vector2};
use photon_core::units::UnitTable;

use super::targeting::{self, Target};

/// Use the unit's ability at `target`, aimed along `direction`.
pub fn execute(
    world: &mut World,
    entity: Entity,
    unit: Unit,
    table: &UnitTable,
    target: Vector2,
    direction: Vector2,
    events: &mut Vec<EffectEvent>,
) {
    let cooldown = world
        .get::<&AbilityState>(entity)
        .map(|state| state.cooldown_secs)
        .unwrap_or(0.0);
    if cooldown > 0.0 {
        debug!(unit = unit.id.0, cooldown, "ability still cooling down, order dropped");
        return;
    }
    let Some(origin) = position_of(world, entity) else {
        return;
    };

    let definition = table.get(unit.kind);
    let multiplier = damage_multiplier(world, entity);

    let fired = match definition.ability {
        AbilityKind::BurstFire => {
            let hits = burst_fire(
                world,
                unit.owner,
                origin,
                direction,
                definition.attack_range,
                multiplier,
            );
            debug!(unit = unit.id.0, hits, "burst fire");
            true
        }
        AbilityKind::ExecuteDash => execute_dash(
            world,
            entity,
            unit.owner,
            origin,
            target,
            definition.attack_damage * DASH_DAMAGE_FACTOR * multiplier,
        ),
        AbilityKind::LineJump => {
            begin_line_jump(world, entity, origin, direction);
            true
        }
    };

    if let Ok(state) = world.query_one_mut::<&mut AbilityState>(entity) {
        state.cooldown_secs = definition.ability_cooldown;
    }
    if fired {
        events.push(EffectEvent::AbilityUsed {
            unit: unit.id,
            ability: definition.ability,
            owner: unit.owner,
            position: position_of(world, entity).unwrap_or(origin),
        });
    }
}

/// Fire `BURST_SHOT_COUNT` shots along `direction`. Each shot hits the
/// nearest living enemy in range that lies ahead of the shooter and within
/// half a unit of the firing line. Returns the number of shots that hit.
pub fn burst_fire(
    world: &World,
    owner: Owner,
    origin: Vector2,
    direction: Vector2,
    max_range: f64,
    multiplier: f64,
) -> u32 {
    let aim = direction.normalize_or_zero();
    let enemies = targeting::living_enemy_units(world, owner);
    let damage = BURST_SHOT_DAMAGE * multiplier;
    let mut hits = 0;

    for _ in 0..BURST_SHOT_COUNT {
        let mut hit: Option<Entity> = None;
        let mut min_dist = f64::INFINITY;

        for enemy in &enemies {
            if !targeting::is_alive(world, enemy.entity) {
                continue;
            }
            let to_enemy = enemy.position - origin;
            let dist = to_enemy.length();
            if dist > max_range {
                continue;
            }
            let projected = to_enemy.dot(aim);
            let perpendicular = math::cross(to_enemy, aim).abs();
            if projected > 0.0 && perpendicular < UNIT_SIZE_METERS / 2.0 && dist < min_dist {
                min_dist = dist;
                hit = Some(enemy.entity);
            }
        }

        if let Some(victim) = hit {
            targeting::apply_damage(world, victim, damage);
            hits += 1;
        }
    }
    hits
}

/// Teleport onto the living enemy nearest the caster among those within
/// `DASH_SEARCH_RADIUS` of `target` and deal `damage`. Returns false when
/// nothing was in reach.
pub fn execute_dash(
    world: &mut World,
    entity: Entity,
    owner: Owner,
    origin: Vector2,
    target: Vector2,
    damage: f64,
) -> bool {
    let nearby: Vec<Target> = targeting::living_enemy_units(world, owner)
        .into_iter()
        .filter(|enemy| math::distance(enemy.position, target) <= DASH_SEARCH_RADIUS)
        .collect();
    let Some(victim) = targeting::nearest_within(origin, &nearby, f64::INFINITY) else {
        return false;
    };

    targeting::apply_damage(world, victim.entity, damage);
    if let Ok((position, state)) =
        world.query_one_mut::<(&mut Position, &mut AbilityState)>(entity)
    {
        position.0 = victim.position;
        state.dash_flash_secs = DASH_FLASH_SECS;
    }
    true
}

/// Register a line-jump telegraph. The unit stays put until it resolves.
/// The landing point lies along `direction`, as far as its length but no
/// farther than `LINE_JUMP_MAX_RANGE`.
pub fn begin_line_jump(world: &mut World, entity: Entity, origin: Vector2, direction: Vector2) {
    let aim = direction.normalize_or_zero();
    let reach = direction.length().min(LINE_JUMP_MAX_RANGE);
    let end = origin + aim * reach;

    if let Ok(state) = world.query_one_mut::<&mut AbilityState>(entity) {
        state.pending = Some(PendingAbility::LineJump {
            remaining_secs: LINE_JUMP_DELAY_SECS,
            end,
            direction: aim,
        });
    }
}

/// Land a due line jump: damage every living enemy within the hit radius of
/// any sampled point on the path (each at most once), then move the unit to
/// the landing point.
pub fn resolve_line_jump(
    world: &mut World,
    entity: Entity,
    unit: Unit,
    events: &mut Vec<EffectEvent>,
) {
    let pending = match world.query_one_mut::<&mut AbilityState>(entity) {
        Ok(state) => state.pending.take(),
        Err(_) => return,
    };
    let Some(PendingAbility::LineJump { end, .. }) = pending else {
        return;
    };
    let Some(start) = position_of(world, entity) else {
        return;
    };

    let damage = LINE_JUMP_DAMAGE * damage_multiplier(world, entity);
    let enemies = targeting::living_enemy_units(world, unit.owner);
    let mut hit: HashSet<Entity> = HashSet::new();

    let steps = (math::distance(start, end) * LINE_JUMP_SAMPLES_PER_METER).ceil() as usize;
    for i in 0..=steps {
        let t = if steps == 0 {
            0.0
        } else {
            i as f64 / steps as f64
        };
        let sample = start.lerp(end, t);
        for enemy in &enemies {
            if hit.contains(&enemy.entity) {
                continue;
            }
            if math::distance(enemy.position, sample) < LINE_JUMP_HIT_RADIUS {
                targeting::apply_damage(world, enemy.entity, damage);
                hit.insert(enemy.entity);
            }
        }
    }

    if let Ok(position) = world.query_one_mut::<&mut Position>(entity) {
        position.0 = end;
    }
    debug!(unit = unit.id.0, hits = hit.len(), "line jump landed");
    events.push(EffectEvent::LineJumpLanded {
        unit: unit.id,
        from: start,
        to: end,
        hits: hit.len() as u32,
    });
}

fn position_of(world: &World, entity: Entity) -> Option<Vector2> {
    world.get::<&Position>(entity).ok().map(|pos| pos.0)
}

fn damage_multiplier(world: &World, entity: Entity) -> f64 {
    world
        .get::<&Promotion>(entity)
        .map(|promotion| promotion.damage_multiplier)
        .unwrap_or(1.0)
}
