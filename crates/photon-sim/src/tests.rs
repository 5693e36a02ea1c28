//! Tests for the simulation engine: movement, promotion, income, abilities,
//! combat, bases and victory.

use std::collections::BTreeSet;

use hecs::{Entity, World};

use photon_core::commands::{ArenaCommand, CommandNode};
use photon_core::components::{AbilityState, Health, PendingAbility, Promotion, Unit};
use photon_core::config::ResolvedConfig;
use photon_core::enums::*;
use photon_core::events::EffectEvent;
use photon_core::state::{ArenaSnapshot, UnitView};
use photon_core::types::{BaseId, Owner, Player, Position, UnitId, Vector2};
use photon_core::units::UnitTable;

use crate::engine::SimulationEngine;
use crate::systems::{abilities, income, victory};
use crate::world_setup;

// ---- Helpers ----

fn funded_engine(config: &ResolvedConfig) -> SimulationEngine {
    let mut engine = SimulationEngine::new(config);
    engine.player_mut(Owner::Player).photons = 1000;
    engine.player_mut(Owner::Opponent).photons = 1000;
    engine
}

fn spawn_idle(engine: &mut SimulationEngine, owner: Owner, kind: UnitKind, at: Vector2) -> UnitId {
    engine.spawn_unit(owner, kind, at, at).unwrap()
}

fn view(snapshot: &ArenaSnapshot, id: UnitId) -> Option<&UnitView> {
    snapshot.units.iter().find(|unit| unit.id == id)
}

fn entity_of(engine: &SimulationEngine, id: UnitId) -> Entity {
    let found = engine
        .world()
        .query::<&Unit>()
        .iter()
        .find(|(_, unit)| unit.id == id)
        .map(|(entity, _)| entity);
    found.unwrap()
}

fn raw_unit(world: &mut World, id: u32, kind: UnitKind, owner: Owner, at: Vector2) -> Entity {
    let table = UnitTable::standard();
    world_setup::spawn_unit(world, UnitId(id), kind, owner, table.get(kind), at, at)
}

fn hp(world: &World, entity: Entity) -> f64 {
    world.get::<&Health>(entity).unwrap().hp
}

// ---- Determinism ----

#[test]
fn test_determinism_same_script() {
    let config = ResolvedConfig::standard();
    let mut engine_a = funded_engine(&config);
    let mut engine_b = funded_engine(&config);

    for engine in [&mut engine_a, &mut engine_b] {
        engine.queue_commands([
            ArenaCommand::Spawn {
                owner: Owner::Player,
                kind: UnitKind::Marine,
                spawn: Vector2::new(10.0, 20.0),
                rally: Vector2::new(40.0, 22.0),
            },
            ArenaCommand::Spawn {
                owner: Owner::Opponent,
                kind: UnitKind::Snaker,
                spawn: Vector2::new(70.0, 25.0),
                rally: Vector2::new(38.0, 21.0),
            },
            ArenaCommand::Spawn {
                owner: Owner::Opponent,
                kind: UnitKind::Warrior,
                spawn: Vector2::new(70.0, 18.0),
                rally: Vector2::new(41.0, 22.0),
            },
        ]);
    }

    for _ in 0..200 {
        let json_a = serde_json::to_string(&engine_a.tick(0.05)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(0.05)).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged for identical input");
    }
}

// ---- Movement ----

#[test]
fn test_idle_unit_stays_put() {
    let mut engine = funded_engine(&ResolvedConfig::standard());
    let id = spawn_idle(&mut engine, Owner::Player, UnitKind::Marine, Vector2::new(20.0, 10.0));

    let mut snapshot = engine.tick(0.125);
    assert!(view(&snapshot, id).unwrap().orders.is_empty());
    for _ in 0..20 {
        snapshot = engine.tick(0.125);
    }
    let unit = view(&snapshot, id).unwrap();
    assert_eq!(unit.position, Vector2::new(20.0, 10.0));
    assert_eq!(unit.distance_traveled, 0.0);
}

#[test]
fn test_move_converges_and_pops_once() {
    let mut engine = funded_engine(&ResolvedConfig::standard());
    let id = engine
        .spawn_unit(
            Owner::Player,
            UnitKind::Marine,
            Vector2::new(10.0, 10.0),
            Vector2::new(20.0, 10.0),
        )
        .unwrap();
    engine.push_orders(
        id,
        [CommandNode::Move {
            position: Vector2::new(20.0, 12.5),
        }],
    );

    // Marine speed 5 m/s, 0.25 s ticks: 1.25 m per tick, 8 ticks to cover 10 m.
    let mut snapshot = ArenaSnapshot::default();
    for _ in 0..8 {
        snapshot = engine.tick(0.25);
    }
    let unit = view(&snapshot, id).unwrap();
    assert_eq!(unit.position, Vector2::new(20.0, 10.0));
    assert_eq!(unit.orders.len(), 2, "arrival pops on the following tick");

    snapshot = engine.tick(0.25);
    let unit = view(&snapshot, id).unwrap();
    assert_eq!(unit.position, Vector2::new(20.0, 10.0));
    assert_eq!(
        unit.orders,
        vec![CommandNode::Move {
            position: Vector2::new(20.0, 12.5)
        }]
    );

    // Two more ticks to cover the 2.5 m leg, one more to pop it.
    for _ in 0..3 {
        snapshot = engine.tick(0.25);
    }
    let unit = view(&snapshot, id).unwrap();
    assert_eq!(unit.position, Vector2::new(20.0, 12.5));
    assert!(unit.orders.is_empty());
}

#[test]
fn test_replace_and_clear_orders() {
    let mut engine = funded_engine(&ResolvedConfig::standard());
    let id = engine
        .spawn_unit(
            Owner::Player,
            UnitKind::Warrior,
            Vector2::new(10.0, 10.0),
            Vector2::new(30.0, 10.0),
        )
        .unwrap();

    engine.queue_command(ArenaCommand::ReplaceOrders {
        unit: id,
        orders: vec![CommandNode::Move {
            position: Vector2::new(10.0, 5.0),
        }],
    });
    let snapshot = engine.tick(0.25);
    let unit = view(&snapshot, id).unwrap();
    assert!(unit.position.y < 10.0, "heads for the replacement target");
    assert_eq!(unit.position.x, 10.0);

    engine.queue_command(ArenaCommand::ClearOrders { unit: id });
    let before = view(&snapshot, id).unwrap().position;
    let snapshot = engine.tick(0.25);
    let unit = view(&snapshot, id).unwrap();
    assert!(unit.orders.is_empty());
    assert_eq!(unit.position, before);

    // Unknown unit: logged and ignored.
    engine.queue_command(ArenaCommand::ClearOrders { unit: UnitId(999) });
    engine.tick(0.25);
}

// ---- Promotion ----

#[test]
fn test_promotion_compounds_with_distance() {
    let mut engine = funded_engine(&ResolvedConfig::standard());
    let id = engine
        .spawn_unit(
            Owner::Player,
            UnitKind::Marine,
            Vector2::new(10.0, 5.0),
            Vector2::new(35.0, 5.0),
        )
        .unwrap();

    // 25 m with one queued move: 27.5 m of credit, two promotions.
    let mut snapshot = ArenaSnapshot::default();
    for _ in 0..20 {
        snapshot = engine.tick(0.25);
    }
    let unit = view(&snapshot, id).unwrap();
    assert_eq!(unit.position, Vector2::new(35.0, 5.0));
    assert!((unit.distance_traveled - 25.0).abs() < 1e-9);
    assert!(
        (unit.damage_multiplier - 1.21).abs() < 1e-9,
        "got {}",
        unit.damage_multiplier
    );

    let promotion = *engine
        .world()
        .get::<&Promotion>(entity_of(&engine, id))
        .unwrap();
    assert!((promotion.distance_credit - 7.5).abs() < 1e-9);
}

#[test]
fn test_queue_depth_boosts_promotion_credit() {
    let mut engine = funded_engine(&ResolvedConfig::standard());
    let id = spawn_idle(&mut engine, Owner::Player, UnitKind::Marine, Vector2::new(10.0, 10.0));
    engine.push_orders(
        id,
        [
            CommandNode::Move {
                position: Vector2::new(15.0, 10.0),
            },
            CommandNode::Move {
                position: Vector2::new(15.0, 15.0),
            },
        ],
    );

    engine.tick(0.25); // pops the rally point
    engine.tick(0.25); // 1.25 m with two moves pending

    let promotion = *engine
        .world()
        .get::<&Promotion>(entity_of(&engine, id))
        .unwrap();
    assert!((promotion.distance_traveled - 1.25).abs() < 1e-12);
    assert!((promotion.distance_credit - 1.5).abs() < 1e-12);
    assert_eq!(promotion.damage_multiplier, 1.0);
}

// ---- Income ----

#[test]
fn test_income_rate_steps_every_ten_seconds() {
    assert_eq!(income::income_rate_at(0.0), 1);
    assert_eq!(income::income_rate_at(9.99), 1);
    assert_eq!(income::income_rate_at(10.0), 2);
    assert_eq!(income::income_rate_at(25.0), 3);
}

#[test]
fn test_income_pays_every_accumulated_second() {
    let color = ResolvedConfig::standard().player_colors[0];
    let mut players = [Player::new(color, 0), Player::new(color, 5)];
    let mut accumulator = 0.0;

    income::run(&mut players, &mut accumulator, 0.5, 0.5);
    assert_eq!(players[0].photons, 0);

    // A long frame pays out every whole second it covers.
    income::run(&mut players, &mut accumulator, 3.0, 2.5);
    assert_eq!(players[0].photons, 3);
    assert_eq!(players[1].photons, 8);
    assert!((accumulator - 0.0).abs() < 1e-12);
}

#[test]
fn test_engine_income_over_time() {
    let mut engine = SimulationEngine::new(&ResolvedConfig::standard());
    let mut snapshot = ArenaSnapshot::default();
    for _ in 0..4 {
        snapshot = engine.tick(0.25);
    }
    assert_eq!(snapshot.players[0].photons, 1);
    assert_eq!(snapshot.players[1].photons, 1);
    assert_eq!(snapshot.players[0].income_rate, 1);

    for _ in 0..40 {
        snapshot = engine.tick(0.25);
    }
    assert_eq!(snapshot.players[0].income_rate, 2);
    assert!(snapshot.players[0].photons > 10);
}

#[test]
fn test_income_at_tenth_second_frames() {
    let mut engine = SimulationEngine::new(&ResolvedConfig::standard());
    let mut snapshot = ArenaSnapshot::default();
    for _ in 0..10 {
        snapshot = engine.tick(0.1);
    }
    assert_eq!(snapshot.players[0].photons, 1);

    for _ in 0..90 {
        snapshot = engine.tick(0.1);
    }
    // Nine payouts at rate 1, then the tenth second lands on the rate step.
    assert_eq!(snapshot.players[0].income_rate, 2);
    assert_eq!(snapshot.players[0].photons, 11);
    assert_eq!(snapshot.players[1].photons, 11);
}

// ---- Spawning ----

#[test]
fn test_spawn_deducts_cost_and_assigns_ids() {
    let mut engine = funded_engine(&ResolvedConfig::standard());
    let cost = engine.unit_table().get(UnitKind::Marine).cost;

    let first = spawn_idle(&mut engine, Owner::Player, UnitKind::Marine, Vector2::new(10.0, 5.0));
    let second = spawn_idle(&mut engine, Owner::Opponent, UnitKind::Marine, Vector2::new(70.0, 5.0));
    assert_eq!(first, UnitId(0));
    assert_eq!(second, UnitId(1));
    assert_eq!(engine.players()[0].photons, 1000 - cost);

    let snapshot = engine.tick(0.125);
    let spawned = snapshot
        .events
        .iter()
        .filter(|event| matches!(event, EffectEvent::UnitSpawned { .. }))
        .count();
    assert_eq!(spawned, 2);
    assert_eq!(snapshot.units.len(), 2);
}

#[test]
fn test_spawn_rejected_when_unaffordable() {
    let mut engine = SimulationEngine::new(&ResolvedConfig::standard());
    let result = engine.spawn_unit(
        Owner::Player,
        UnitKind::Snaker,
        Vector2::new(10.0, 5.0),
        Vector2::new(10.0, 5.0),
    );
    assert!(result.is_none());
    assert_eq!(engine.players()[0].photons, 0);
    assert!(engine.tick(0.125).units.is_empty());
}

#[test]
fn test_spawn_rejected_when_disabled() {
    let mut config = ResolvedConfig::standard();
    config.enabled_units = BTreeSet::from([UnitKind::Marine]);
    let mut engine = funded_engine(&config);

    let at = Vector2::new(10.0, 5.0);
    assert!(engine.spawn_unit(Owner::Player, UnitKind::Warrior, at, at).is_none());
    assert_eq!(engine.players()[0].photons, 1000);
    assert!(engine.spawn_unit(Owner::Player, UnitKind::Marine, at, at).is_some());
}

// ---- Abilities ----

#[test]
fn test_line_jump_telegraph_then_lands() {
    let mut engine = funded_engine(&ResolvedConfig::standard());
    let snaker = spawn_idle(&mut engine, Owner::Player, UnitKind::Snaker, Vector2::new(20.0, 5.0));
    let victim = spawn_idle(&mut engine, Owner::Opponent, UnitKind::Warrior, Vector2::new(25.0, 5.0));
    engine.push_orders(
        snaker,
        [
            CommandNode::Ability {
                position: Vector2::new(20.0, 5.0),
                direction: Vector2::new(10.0, 0.0),
            },
            CommandNode::Move {
                position: Vector2::new(30.0, 15.0),
            },
        ],
    );

    engine.tick(0.125); // pops the rally point
    let snapshot = engine.tick(0.125); // activates
    assert!(snapshot
        .events
        .iter()
        .any(|event| matches!(event, EffectEvent::AbilityUsed { ability: AbilityKind::LineJump, .. })));
    assert_eq!(
        view(&snapshot, snaker).unwrap().telegraph_end,
        Some(Vector2::new(30.0, 5.0))
    );

    // Still telegraphing: queue blocked, no damage yet.
    let mut snapshot = snapshot;
    for _ in 0..3 {
        snapshot = engine.tick(0.125);
    }
    let unit = view(&snapshot, snaker).unwrap();
    assert_eq!(unit.position, Vector2::new(20.0, 5.0));
    assert_eq!(unit.orders.len(), 1);
    assert_eq!(view(&snapshot, victim).unwrap().hp, 60.0);

    // 0.5 s after activation the jump lands and hits the warrior once.
    let snapshot = engine.tick(0.125);
    let unit = view(&snapshot, snaker).unwrap();
    assert_eq!(unit.position, Vector2::new(30.0, 5.0));
    assert_eq!(unit.telegraph_end, None);
    assert_eq!(view(&snapshot, victim).unwrap().hp, 40.0);
    assert!(snapshot
        .events
        .iter()
        .any(|event| matches!(event, EffectEvent::LineJumpLanded { hits: 1, .. })));

    // Queue resumes afterwards.
    let snapshot = engine.tick(0.125);
    assert_ne!(view(&snapshot, snaker).unwrap().position, Vector2::new(30.0, 5.0));
}

#[test]
fn test_line_jump_range_is_capped() {
    let mut world = World::new();
    let snaker = raw_unit(&mut world, 0, UnitKind::Snaker, Owner::Player, Vector2::new(5.0, 5.0));
    abilities::begin_line_jump(&mut world, snaker, Vector2::new(5.0, 5.0), Vector2::new(0.0, 40.0));

    let state = *world.get::<&AbilityState>(snaker).unwrap();
    match state.pending {
        Some(PendingAbility::LineJump { end, .. }) => assert_eq!(end, Vector2::new(5.0, 15.0)),
        None => panic!("jump should be pending"),
    }
}

#[test]
fn test_ability_on_cooldown_is_dropped() {
    let mut engine = funded_engine(&ResolvedConfig::standard());
    let marine = spawn_idle(&mut engine, Owner::Player, UnitKind::Marine, Vector2::new(20.0, 5.0));
    let order = CommandNode::Ability {
        position: Vector2::new(20.0, 5.0),
        direction: Vector2::X,
    };
    engine.push_orders(marine, [order, order]);

    engine.tick(0.125);
    let first = engine.tick(0.125);
    let second = engine.tick(0.125);

    let used = |snapshot: &ArenaSnapshot| {
        snapshot
            .events
            .iter()
            .filter(|event| matches!(event, EffectEvent::AbilityUsed { .. }))
            .count()
    };
    assert_eq!(used(&first), 1);
    assert_eq!(used(&second), 0);
    let unit = view(&second, marine).unwrap();
    assert!(unit.orders.is_empty());
    assert_eq!(unit.ability_cooldown, 5.0 - 0.125);
}

#[test]
fn test_burst_fire_hits_first_unit_on_line() {
    let mut world = World::new();
    let ahead = raw_unit(&mut world, 1, UnitKind::Snaker, Owner::Opponent, Vector2::new(5.0, 0.0));
    let off_line = raw_unit(&mut world, 2, UnitKind::Snaker, Owner::Opponent, Vector2::new(3.0, 0.8));
    let behind = raw_unit(&mut world, 3, UnitKind::Snaker, Owner::Opponent, Vector2::new(-3.0, 0.0));

    let hits = abilities::burst_fire(&world, Owner::Player, Vector2::ZERO, Vector2::X, 8.0, 1.0);
    assert_eq!(hits, 10);
    assert_eq!(hp(&world, ahead), 10.0);
    assert_eq!(hp(&world, off_line), 30.0);
    assert_eq!(hp(&world, behind), 30.0);
}

#[test]
fn test_burst_fire_retargets_after_kill() {
    let mut world = World::new();
    let near = raw_unit(&mut world, 1, UnitKind::Snaker, Owner::Opponent, Vector2::new(2.0, 0.0));
    let far = raw_unit(&mut world, 2, UnitKind::Snaker, Owner::Opponent, Vector2::new(5.0, 0.2));
    world.get::<&mut Health>(near).unwrap().hp = 4.0;

    let hits = abilities::burst_fire(&world, Owner::Player, Vector2::ZERO, Vector2::X, 8.0, 1.0);
    assert_eq!(hits, 10);
    assert_eq!(hp(&world, near), 0.0);
    assert_eq!(hp(&world, far), 14.0);
}

#[test]
fn test_execute_dash_picks_nearest_to_caster() {
    let mut world = World::new();
    let warrior = raw_unit(&mut world, 0, UnitKind::Warrior, Owner::Player, Vector2::ZERO);
    let far = raw_unit(&mut world, 1, UnitKind::Marine, Owner::Opponent, Vector2::new(11.0, 0.0));
    let near = raw_unit(&mut world, 2, UnitKind::Warrior, Owner::Opponent, Vector2::new(9.5, 1.0));

    let table = UnitTable::standard();
    let unit = *world.get::<&Unit>(warrior).unwrap();
    let mut events = Vec::new();
    abilities::execute(
        &mut world,
        warrior,
        unit,
        &table,
        Vector2::new(10.0, 0.0),
        Vector2::X,
        &mut events,
    );

    // 15 damage x 5.
    assert_eq!(hp(&world, near), 60.0 - 75.0);
    assert_eq!(hp(&world, far), 40.0);
    assert_eq!(world.get::<&Position>(warrior).unwrap().0, Vector2::new(9.5, 1.0));
    let state = *world.get::<&AbilityState>(warrior).unwrap();
    assert!(state.dash_executing());
    assert_eq!(state.cooldown_secs, 6.0);
    assert_eq!(events.len(), 1);
}

#[test]
fn test_execute_dash_without_target_still_cools_down() {
    let mut world = World::new();
    let warrior = raw_unit(&mut world, 0, UnitKind::Warrior, Owner::Player, Vector2::ZERO);
    raw_unit(&mut world, 1, UnitKind::Marine, Owner::Opponent, Vector2::new(20.0, 0.0));

    let table = UnitTable::standard();
    let unit = *world.get::<&Unit>(warrior).unwrap();
    let mut events = Vec::new();
    abilities::execute(
        &mut world,
        warrior,
        unit,
        &table,
        Vector2::new(10.0, 0.0),
        Vector2::X,
        &mut events,
    );

    assert_eq!(world.get::<&Position>(warrior).unwrap().0, Vector2::ZERO);
    let state = *world.get::<&AbilityState>(warrior).unwrap();
    assert!(!state.dash_executing());
    assert_eq!(state.cooldown_secs, 6.0);
    assert!(events.is_empty());
}

// ---- Combat ----

#[test]
fn test_combat_kills_and_removes_unit() {
    let mut engine = funded_engine(&ResolvedConfig::standard());
    spawn_idle(&mut engine, Owner::Player, UnitKind::Marine, Vector2::new(20.0, 5.0));
    let target = spawn_idle(&mut engine, Owner::Opponent, UnitKind::Snaker, Vector2::new(26.0, 5.0));

    // 10 dps against 30 hp, 2.5 per 0.25 s tick.
    let mut snapshot = ArenaSnapshot::default();
    for _ in 0..11 {
        snapshot = engine.tick(0.25);
    }
    assert_eq!(view(&snapshot, target).unwrap().hp, 2.5);

    let snapshot = engine.tick(0.25);
    assert!(view(&snapshot, target).is_none());
    assert!(snapshot.events.iter().any(
        |event| matches!(event, EffectEvent::UnitDestroyed { unit, .. } if *unit == target)
    ));
}

#[test]
fn test_unit_killed_in_combat_deals_no_damage_that_tick() {
    let mut engine = funded_engine(&ResolvedConfig::standard());
    let attacker = spawn_idle(&mut engine, Owner::Player, UnitKind::Marine, Vector2::new(20.0, 5.0));
    let victim = spawn_idle(&mut engine, Owner::Opponent, UnitKind::Marine, Vector2::new(25.0, 5.0));
    let entity = entity_of(&engine, attacker);
    engine
        .world_mut()
        .get::<&mut Promotion>(entity)
        .unwrap()
        .damage_multiplier = 100.0;

    // The lower id fires first and kills outright; the victim never fires back.
    let snapshot = engine.tick(0.1);
    assert!(view(&snapshot, victim).is_none());
    assert_eq!(view(&snapshot, attacker).unwrap().hp, 40.0);
}

#[test]
fn test_out_of_range_units_do_not_fight() {
    let mut engine = funded_engine(&ResolvedConfig::standard());
    let a = spawn_idle(&mut engine, Owner::Player, UnitKind::Marine, Vector2::new(20.0, 5.0));
    let b = spawn_idle(&mut engine, Owner::Opponent, UnitKind::Marine, Vector2::new(30.0, 5.0));

    let mut snapshot = ArenaSnapshot::default();
    for _ in 0..10 {
        snapshot = engine.tick(0.25);
    }
    assert_eq!(view(&snapshot, a).unwrap().hp, 40.0);
    assert_eq!(view(&snapshot, b).unwrap().hp, 40.0);
}

// ---- Bases ----

#[test]
fn test_base_moves_at_fixed_speed() {
    let mut engine = SimulationEngine::new(&ResolvedConfig::standard());
    engine.queue_commands([
        ArenaCommand::MoveBase {
            owner: Owner::Player,
            target: Vector2::new(10.0, 22.5),
        },
        ArenaCommand::SelectBase {
            owner: Owner::Player,
            selected: true,
        },
    ]);

    let mut snapshot = ArenaSnapshot::default();
    for _ in 0..15 {
        snapshot = engine.tick(0.25);
    }
    let base = &snapshot.bases[0];
    assert_eq!(base.position, Vector2::new(9.75, 22.5));
    assert!(base.movement_target.is_some());
    assert!(base.is_selected);
    assert!(!snapshot.bases[1].is_selected);

    let snapshot = engine.tick(0.25);
    let base = &snapshot.bases[0];
    assert_eq!(base.position, Vector2::new(10.0, 22.5));
    assert_eq!(base.movement_target, None);
}

#[test]
fn test_base_laser_when_enabled() {
    let mut config = ResolvedConfig::standard();
    config.base_lasers = true;
    let mut engine = funded_engine(&config);
    let intruder = spawn_idle(&mut engine, Owner::Opponent, UnitKind::Snaker, Vector2::new(10.0, 22.5));

    let snapshot = engine.tick(0.25);
    assert_eq!(view(&snapshot, intruder).unwrap().hp, 5.0);
    assert!(snapshot
        .events
        .iter()
        .any(|event| matches!(event, EffectEvent::BaseLaserFired { owner: Owner::Player, .. })));
    assert_eq!(snapshot.bases[0].laser_cooldown, 1.5);

    let mut snapshot = snapshot;
    for _ in 0..6 {
        snapshot = engine.tick(0.25);
    }
    assert!(view(&snapshot, intruder).is_none());
}

#[test]
fn test_base_laser_off_by_default() {
    let mut engine = funded_engine(&ResolvedConfig::standard());
    let intruder = spawn_idle(&mut engine, Owner::Opponent, UnitKind::Snaker, Vector2::new(10.0, 22.5));
    let snapshot = engine.tick(0.25);
    assert_eq!(view(&snapshot, intruder).unwrap().hp, 30.0);
}

// ---- Victory ----

#[test]
fn test_destroying_base_wins_match() {
    let mut config = ResolvedConfig::standard();
    let mut siege = config.units.get(UnitKind::Marine).clone();
    siege.attack_damage = 100.0;
    siege.attack_rate = 1.0;
    config.units.set(UnitKind::Marine, siege);
    let mut engine = funded_engine(&config);
    spawn_idle(&mut engine, Owner::Player, UnitKind::Marine, Vector2::new(66.0, 22.5));

    // 1000 hp at 100 dps: 40 ticks of 0.25 s.
    let mut snapshot = ArenaSnapshot::default();
    for _ in 0..39 {
        snapshot = engine.tick(0.25);
    }
    assert_eq!(snapshot.mode, MatchMode::InProgress);
    assert_eq!(snapshot.bases[1].hp, 25.0);

    let snapshot = engine.tick(0.25);
    assert_eq!(snapshot.mode, MatchMode::Victory);
    assert_eq!(snapshot.winner, Some(Owner::Player));
    assert!(snapshot
        .events
        .contains(&EffectEvent::MatchEnded { winner: Owner::Player }));

    // The winner is latched; no second announcement.
    let snapshot = engine.tick(0.25);
    assert_eq!(engine.winner(), Some(Owner::Player));
    assert!(!snapshot
        .events
        .iter()
        .any(|event| matches!(event, EffectEvent::MatchEnded { .. })));
}

#[test]
fn test_simultaneous_base_loss_last_checked_decides() {
    let mut world = World::new();
    let player = world_setup::spawn_base(
        &mut world,
        BaseId(0),
        Owner::Player,
        Vector2::new(6.0, 20.0),
        100.0,
    );
    let opponent = world_setup::spawn_base(
        &mut world,
        BaseId(1),
        Owner::Opponent,
        Vector2::new(74.0, 20.0),
        100.0,
    );
    world.get::<&mut Health>(player).unwrap().hp = 0.0;
    world.get::<&mut Health>(opponent).unwrap().hp = -5.0;

    let mut mode = MatchMode::InProgress;
    let mut winner = None;
    let mut events = Vec::new();
    victory::run(&world, &mut mode, &mut winner, &mut events);
    assert_eq!(winner, Some(Owner::Player));
    assert_eq!(mode, MatchMode::Victory);
    assert_eq!(events.len(), 1);
}

// ---- Scene entities ----

#[test]
fn test_shell_casings_expire() {
    let mut engine = SimulationEngine::new(&ResolvedConfig::standard());
    world_setup::spawn_shell(engine.world_mut(), Vector2::new(30.0, 20.0));
    assert_eq!(engine.world().len(), 3);

    for _ in 0..79 {
        engine.tick(0.125);
    }
    assert_eq!(engine.world().len(), 3);
    engine.tick(0.125);
    assert_eq!(engine.world().len(), 2, "only the bases remain");
}

#[test]
fn test_scene_entities_are_ignored_by_combat() {
    let mut engine = funded_engine(&ResolvedConfig::standard());
    let marine = spawn_idle(&mut engine, Owner::Player, UnitKind::Marine, Vector2::new(20.0, 5.0));
    let at = Vector2::new(22.0, 5.0);
    world_setup::spawn_structure(engine.world_mut(), at);
    world_setup::spawn_mining_depot(engine.world_mut(), at);
    world_setup::spawn_projectile(engine.world_mut(), at);
    world_setup::spawn_shell(engine.world_mut(), at);
    world_setup::spawn_warp_gate(engine.world_mut(), at);
    world_setup::spawn_influence_zone(engine.world_mut(), at, 5.0, Owner::Opponent);

    let snapshot = engine.tick(0.25);
    assert_eq!(snapshot.units.len(), 1);
    assert_eq!(view(&snapshot, marine).unwrap().hp, 40.0);
    assert_eq!(snapshot.bases.len(), 2);
    assert_eq!(engine.world().len(), 9);
}
