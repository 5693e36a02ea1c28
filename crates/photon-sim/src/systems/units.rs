//! Unit command processing.
//!
//! Each tick, in unit-id order: ability timers decay, a pending telegraph
//! counts down (and blocks the queue until it resolves), otherwise the head
//! of the command queue is advanced. Movement earns promotion credit.

use hecs::{Entity, World};
use tracing::debug;

use photon_core::commands::CommandNode;
use photon_core::components::{AbilityState, CommandQueue, PendingAbility, Promotion, Unit};
use photon_core::constants::*;
use photon_core::events::EffectEvent;
use photon_core::math;
use photon_core::types::{Position, Vector2};
use photon_core::units::UnitTable;

use super::{abilities, targeting};

/// Run movement and abilities for every unit.
pub fn run(world: &mut World, table: &UnitTable, dt: f64, events: &mut Vec<EffectEvent>) {
    for (entity, unit) in units_in_id_order(world) {
        // Units felled earlier this tick wait for cleanup.
        if !targeting::is_alive(world, entity) {
            continue;
        }
        if tick_ability_timers(world, entity, dt) {
            abilities::resolve_line_jump(world, entity, unit, events);
            continue;
        }
        if has_pending(world, entity) {
            continue;
        }

        let head = match world.get::<&CommandQueue>(entity) {
            Ok(queue) => queue.0.front().copied(),
            Err(_) => continue,
        };
        let speed = table.get(unit.kind).move_speed;

        match head {
            None => {}
            Some(CommandNode::Move { position: target }) => {
                if distance_to(world, entity, target) < ARRIVAL_EPSILON {
                    pop_front(world, entity);
                } else {
                    travel(world, entity, target, speed * dt);
                }
            }
            Some(CommandNode::Ability {
                position: target,
                direction,
            }) => {
                if distance_to(world, entity, target) > ARRIVAL_EPSILON {
                    travel(world, entity, target, speed * dt);
                } else {
                    abilities::execute(world, entity, unit, table, target, direction, events);
                    pop_front(world, entity);
                }
            }
        }
    }
}

/// Snapshot of (entity, identity) for every unit, sorted by id.
pub fn units_in_id_order(world: &World) -> Vec<(Entity, Unit)> {
    let mut units: Vec<(Entity, Unit)> = world
        .query::<&Unit>()
        .iter()
        .map(|(entity, unit)| (entity, *unit))
        .collect();
    units.sort_by_key(|(_, unit)| unit.id);
    units
}

/// Decay cooldown, dash flash and telegraph countdown. Returns true when a
/// pending line jump is due this tick.
fn tick_ability_timers(world: &mut World, entity: Entity, dt: f64) -> bool {
    let Ok(state) = world.query_one_mut::<&mut AbilityState>(entity) else {
        return false;
    };
    state.cooldown_secs = (state.cooldown_secs - dt).max(0.0);
    state.dash_flash_secs = (state.dash_flash_secs - dt).max(0.0);

    match &mut state.pending {
        Some(PendingAbility::LineJump { remaining_secs, .. }) => {
            *remaining_secs -= dt;
            *remaining_secs <= TIMER_EPSILON
        }
        None => false,
    }
}

fn has_pending(world: &World, entity: Entity) -> bool {
    world
        .get::<&AbilityState>(entity)
        .map(|state| state.pending.is_some())
        .unwrap_or(false)
}

fn distance_to(world: &World, entity: Entity, target: Vector2) -> f64 {
    world
        .get::<&Position>(entity)
        .map(|pos| math::distance(pos.0, target))
        .unwrap_or(0.0)
}

fn pop_front(world: &mut World, entity: Entity) {
    if let Ok(queue) = world.query_one_mut::<&mut CommandQueue>(entity) {
        queue.0.pop_front();
    }
}

/// Move toward `target` by at most `max_step` and credit the distance
/// toward promotion. A deeper move queue earns proportionally more credit.
fn travel(world: &mut World, entity: Entity, target: Vector2, max_step: f64) {
    let Ok((unit, position, queue, promotion)) = world
        .query_one_mut::<(&Unit, &mut Position, &CommandQueue, &mut Promotion)>(entity)
    else {
        return;
    };

    let (next, moved) = math::step_toward(position.0, target, max_step);
    position.0 = next;

    let credit_multiplier = 1.0 + QUEUE_BONUS_PER_NODE * queue.pending_moves() as f64;
    promotion.distance_traveled += moved;
    promotion.distance_credit += moved * credit_multiplier;

    while promotion.distance_credit >= PROMOTION_DISTANCE_THRESHOLD {
        promotion.distance_credit -= PROMOTION_DISTANCE_THRESHOLD;
        promotion.damage_multiplier *= PROMOTION_MULTIPLIER;
        debug!(
            unit = unit.id.0,
            multiplier = promotion.damage_multiplier,
            "unit promoted"
        );
    }
}
