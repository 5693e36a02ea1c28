//! Repulsion sources gathered from the entity world.
//!
//! Each entity category pushes particles away with its own radius and
//! strength. Strength falls off linearly to zero at the radius.

use hecs::World;

use photon_core::components::{
    Base, MiningDepot, Projectile, ShellCasing, Structure, Unit, WarpGate,
};
use photon_core::constants::*;
use photon_core::math;
use photon_core::types::{Position, Vector2};

/// A point that repels particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepulsionSource {
    pub position: Vector2,
    pub radius: f64,
    pub force: f64,
}

impl RepulsionSource {
    /// Force exerted on a particle at `at`. Zero outside the radius and at
    /// (near) zero separation.
    pub fn force_on(&self, at: Vector2) -> Vector2 {
        let offset = at - self.position;
        let dist = offset.length();
        if dist >= self.radius || dist <= MIN_REPULSION_DISTANCE {
            return Vector2::ZERO;
        }
        offset.normalize_or_zero() * self.force * math::linear_falloff(dist, self.radius)
    }
}

/// Collect every repulsion source in the world, category by category.
pub fn collect_sources(world: &World) -> Vec<RepulsionSource> {
    let mut sources = Vec::new();
    push_category::<Unit>(world, &mut sources, UNIT_REPULSION_RADIUS, UNIT_REPULSION_FORCE);
    push_category::<Structure>(
        world,
        &mut sources,
        STRUCTURE_REPULSION_RADIUS,
        STRUCTURE_REPULSION_FORCE,
    );
    push_category::<MiningDepot>(
        world,
        &mut sources,
        MINING_DEPOT_REPULSION_RADIUS,
        MINING_DEPOT_REPULSION_FORCE,
    );
    push_category::<Base>(world, &mut sources, BASE_REPULSION_RADIUS, BASE_REPULSION_FORCE);
    push_category::<Projectile>(
        world,
        &mut sources,
        PROJECTILE_REPULSION_RADIUS,
        PROJECTILE_REPULSION_FORCE,
    );
    push_category::<ShellCasing>(world, &mut sources, SHELL_REPULSION_RADIUS, SHELL_REPULSION_FORCE);
    push_category::<WarpGate>(
        world,
        &mut sources,
        WARP_GATE_REPULSION_RADIUS,
        WARP_GATE_REPULSION_FORCE,
    );
    sources
}

fn push_category<T: hecs::Component>(
    world: &World,
    sources: &mut Vec<RepulsionSource>,
    radius: f64,
    force: f64,
) {
    for (_entity, (pos, _marker)) in world.query::<(&Position, &T)>().iter() {
        sources.push(RepulsionSource {
            position: pos.0,
            radius,
            force,
        });
    }
}

/// Sum of every source's force at `at`.
pub fn total_force(at: Vector2, sources: &[RepulsionSource]) -> Vector2 {
    sources
        .iter()
        .fold(Vector2::ZERO, |acc, source| acc + source.force_on(at))
}
