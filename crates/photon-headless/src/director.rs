//! Scripted stand-in for both players.
//!
//! Buys one unit per side every wave, cycling through the enabled roster,
//! and sends it across the arena with an ability order at midfield. Also
//! dresses the arena with the scenery the field engine reacts to.

use hecs::World;
use tracing::debug;

use photon_core::commands::{ArenaCommand, CommandNode};
use photon_core::components::Base;
use photon_core::config::ArenaSettings;
use photon_core::enums::UnitKind;
use photon_core::types::{Owner, Position, Vector2};
use photon_sim::world_setup;
use photon_sim::SimulationEngine;

/// Seconds between purchase attempts.
pub const WAVE_INTERVAL_SECS: f64 = 5.0;
/// Radius of the influence zone placed around each base.
pub const BASE_ZONE_RADIUS: f64 = 12.0;

pub struct Director {
    arena: ArenaSettings,
    roster: Vec<UnitKind>,
    next_wave_secs: f64,
    wave: usize,
}

impl Director {
    pub fn new(arena: ArenaSettings, roster: Vec<UnitKind>) -> Self {
        Self {
            arena,
            roster,
            next_wave_secs: 0.0,
            wave: 0,
        }
    }

    /// Place influence zones, a structure and a mining depot per side.
    pub fn dress_arena(&self, world: &mut World) {
        let mid_y = self.arena.height / 2.0;
        for (owner, home) in base_positions(world) {
            world_setup::spawn_influence_zone(world, home, BASE_ZONE_RADIUS, owner);
            let inward = if home.x < self.arena.width / 2.0 { 1.0 } else { -1.0 };
            world_setup::spawn_structure(world, Vector2::new(home.x + 6.0 * inward, mid_y - 8.0));
            world_setup::spawn_mining_depot(world, Vector2::new(home.x + 4.0 * inward, mid_y + 9.0));
        }
    }

    /// Issue this frame's commands.
    pub fn direct(&mut self, engine: &mut SimulationEngine) {
        let now = engine.time().elapsed_secs;
        if now < self.next_wave_secs || self.roster.is_empty() {
            return;
        }
        self.next_wave_secs = now + WAVE_INTERVAL_SECS;

        let kind = self.roster[self.wave % self.roster.len()];
        self.wave += 1;

        let bases = base_positions(engine.world());
        for (owner, home) in &bases {
            let Some((_, enemy)) = bases.iter().find(|(other, _)| *other != *owner) else {
                continue;
            };
            let heading = (*enemy - *home).normalize_or_zero();
            let spawn = *home + heading * 4.0;
            let midfield = Vector2::new(self.arena.width / 2.0, self.arena.height / 2.0);

            let Some(id) = engine.spawn_unit(*owner, kind, spawn, spawn + heading * 6.0) else {
                debug!(?owner, %kind, "wave skipped, cannot afford");
                continue;
            };
            engine.queue_command(ArenaCommand::QueueOrders {
                unit: id,
                orders: vec![
                    CommandNode::Ability {
                        position: midfield - heading * 3.0,
                        direction: heading * 6.0,
                    },
                    CommandNode::Move { position: *enemy },
                ],
            });
        }
    }
}

fn base_positions(world: &World) -> Vec<(Owner, Vector2)> {
    let mut bases: Vec<(Owner, Vector2)> = world
        .query::<(&Base, &Position)>()
        .iter()
        .map(|(_entity, (base, pos))| (base.owner, pos.0))
        .collect();
    bases.sort_by_key(|(owner, _)| *owner);
    bases
}
