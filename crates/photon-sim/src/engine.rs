//! Simulation engine, the core of the arena.
//!
//! `SimulationEngine` owns the hecs ECS world, processes host commands,
//! runs all systems in a fixed order, and produces `ArenaSnapshot`s.
//! Completely headless, so every rule can be exercised from tests.

use std::collections::{BTreeSet, VecDeque};

use hecs::World;
use tracing::{info, warn};

use photon_core::commands::{ArenaCommand, CommandNode};
use photon_core::components::{Base, BaseMotion, CommandQueue, Unit};
use photon_core::config::ResolvedConfig;
use photon_core::enums::{MatchMode, UnitKind};
use photon_core::events::EffectEvent;
use photon_core::state::ArenaSnapshot;
use photon_core::types::{Owner, Player, SimTime, UnitId, Vector2};
use photon_core::units::UnitTable;

use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all match state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    mode: MatchMode,
    winner: Option<Owner>,
    players: [Player; 2],
    income_accumulator: f64,
    units: UnitTable,
    enabled_units: BTreeSet<UnitKind>,
    base_lasers: bool,
    next_unit_id: u32,
    command_queue: VecDeque<ArenaCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<EffectEvent>,
}

impl SimulationEngine {
    /// Create an engine with both bases placed and the match running.
    pub fn new(config: &ResolvedConfig) -> Self {
        let mut world = World::new();
        world_setup::setup_match(&mut world, config.arena, config.base_hp);
        info!(
            width = config.arena.width,
            height = config.arena.height,
            "match started"
        );

        Self {
            world,
            time: SimTime::default(),
            mode: MatchMode::default(),
            winner: None,
            players: [
                Player::new(config.player_colors[0], config.starting_photons),
                Player::new(config.player_colors[1], config.starting_photons),
            ],
            income_accumulator: 0.0,
            units: config.units.clone(),
            enabled_units: config.enabled_units.clone(),
            base_lasers: config.base_lasers,
            next_unit_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: ArenaCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = ArenaCommand>) {
        self.command_queue.extend(commands);
    }

    /// Append orders to a unit's queue immediately, bypassing the command
    /// queue. Unknown ids are ignored.
    pub fn push_orders(&mut self, unit_id: UnitId, orders: impl IntoIterator<Item = CommandNode>) {
        self.edit_orders(unit_id, |queue| queue.0.extend(orders));
    }

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot. `dt` must already be clamped by the host.
    pub fn tick(&mut self, dt: f64) -> ArenaSnapshot {
        self.process_commands();
        self.time.advance(dt);
        self.run_systems(dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.mode,
            self.winner,
            &self.players,
            events,
        )
    }

    /// Buy a unit for `owner` and send it toward `rally`.
    ///
    /// Silently does nothing when the type is disabled or the side cannot
    /// afford it.
    pub fn spawn_unit(
        &mut self,
        owner: Owner,
        kind: UnitKind,
        spawn: Vector2,
        rally: Vector2,
    ) -> Option<UnitId> {
        let definition = self.units.get(kind);
        let player = &mut self.players[owner.index()];
        if player.photons < definition.cost || !self.enabled_units.contains(&kind) {
            return None;
        }
        player.photons -= definition.cost;

        let id = UnitId(self.next_unit_id);
        self.next_unit_id += 1;
        world_setup::spawn_unit(&mut self.world, id, kind, owner, definition, spawn, rally);
        self.events.push(EffectEvent::UnitSpawned {
            unit: id,
            kind,
            owner,
            position: spawn,
        });
        Some(id)
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn winner(&self) -> Option<Owner> {
        self.winner
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player_mut(&mut self, owner: Owner) -> &mut Player {
        &mut self.players[owner.index()]
    }

    pub fn unit_table(&self) -> &UnitTable {
        &self.units
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for host-owned scene entities (structures,
    /// projectiles, influence zones, ...).
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: ArenaCommand) {
        match command {
            ArenaCommand::Spawn {
                owner,
                kind,
                spawn,
                rally,
            } => {
                self.spawn_unit(owner, kind, spawn, rally);
            }
            ArenaCommand::QueueOrders { unit, orders } => {
                self.edit_orders(unit, |queue| queue.0.extend(orders));
            }
            ArenaCommand::ReplaceOrders { unit, orders } => {
                self.edit_orders(unit, |queue| queue.0 = orders.into_iter().collect());
            }
            ArenaCommand::ClearOrders { unit } => {
                self.edit_orders(unit, |queue| queue.0.clear());
            }
            ArenaCommand::MoveBase { owner, target } => {
                for (_entity, (base, motion)) in self.world.query_mut::<(&Base, &mut BaseMotion)>() {
                    if base.owner == owner {
                        motion.movement_target = Some(target);
                    }
                }
            }
            ArenaCommand::SelectBase { owner, selected } => {
                for (_entity, base) in self.world.query_mut::<&mut Base>() {
                    if base.owner == owner {
                        base.is_selected = selected;
                    }
                }
            }
        }
    }

    fn edit_orders(&mut self, unit_id: UnitId, edit: impl FnOnce(&mut CommandQueue)) {
        let found = self
            .world
            .query_mut::<(&Unit, &mut CommandQueue)>()
            .into_iter()
            .find(|(_entity, (unit, _queue))| unit.id == unit_id);
        match found {
            Some((_entity, (_unit, queue))) => edit(queue),
            None => warn!(unit = unit_id.0, "order for unknown unit ignored"),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Income
        systems::income::run(
            &mut self.players,
            &mut self.income_accumulator,
            self.time.elapsed_secs,
            dt,
        );
        // 2. Unit movement, abilities, telegraph resolution
        systems::units::run(&mut self.world, &self.units, dt, &mut self.events);
        // 3. Base movement and turrets
        systems::bases::run(&mut self.world, self.base_lasers, dt, &mut self.events);
        // 4. Combat
        systems::combat::run(&mut self.world, &self.units, dt);
        // 5. Cleanup (dead units, expired shells)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);
        systems::cleanup::expire_shells(&mut self.world, &mut self.despawn_buffer, dt);
        // 6. Victory
        systems::victory::run(
            &self.world,
            &mut self.mode,
            &mut self.winner,
            &mut self.events,
        );
    }
}
