//! Influence-zone tinting.
//!
//! Overlapping zones contribute their owner's color weighted by a strength
//! that fades linearly from the zone center to its edge. The weighted mean
//! is layered over the particle's neutralized base color with an opacity of
//! the total weight, capped at one.

use hecs::World;

use photon_core::color::Rgb;
use photon_core::components::InfluenceZone;
use photon_core::math;
use photon_core::types::{Player, Vector2};

/// Zones and owner colors captured once per tick.
#[derive(Debug, Clone)]
pub struct InfluenceMap {
    zones: Vec<InfluenceZone>,
    owner_colors: [Rgb; 2],
}

impl InfluenceMap {
    pub fn capture(world: &World, players: &[Player; 2]) -> Self {
        let zones = world
            .query::<&InfluenceZone>()
            .iter()
            .map(|(_entity, zone)| *zone)
            .collect();
        Self::new(zones, [players[0].color, players[1].color])
    }

    pub fn new(zones: Vec<InfluenceZone>, owner_colors: [Rgb; 2]) -> Self {
        Self {
            zones,
            owner_colors,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Weighted mean owner color at `at` and the blend opacity, or `None`
    /// when no zone covers the point.
    pub fn sample(&self, at: Vector2) -> Option<(Rgb, f64)> {
        let mut accumulated = Rgb::BLACK;
        let mut total_weight = 0.0;

        for zone in &self.zones {
            let dist = math::distance(at, zone.position);
            if dist > zone.radius {
                continue;
            }
            let strength = math::linear_falloff(dist, zone.radius);
            accumulated = accumulated.add(self.owner_colors[zone.owner.index()].scale(strength));
            total_weight += strength;
        }

        if total_weight > 0.0 {
            Some((accumulated.scale(1.0 / total_weight), total_weight.min(1.0)))
        } else {
            None
        }
    }

    /// Rendered color for a particle. `neutralized` is its base color
    /// already pre-blended toward the scheme's neutral tone.
    pub fn tint(&self, at: Vector2, base: Rgb, neutralized: Rgb) -> Rgb {
        match self.sample(at) {
            Some((influence, opacity)) => neutralized.blend(influence, opacity),
            None => base,
        }
    }
}
