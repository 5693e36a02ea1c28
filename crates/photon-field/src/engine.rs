//! Field particle engine: seeded initialization and the per-tick
//! force / integrate / contain / tint pass.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use photon_core::color::Rgb;
use photon_core::config::{ArenaSettings, ResolvedConfig};
use photon_core::constants::*;
use photon_core::schemes::ColorScheme;
use photon_core::types::Vector2;

use crate::blend::InfluenceMap;
use crate::forces;
use crate::view::FieldView;

/// A cosmetic, physically simulated point mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldParticle {
    pub id: u32,
    pub position: Vector2,
    pub velocity: Vector2,
    pub mass: f64,
    pub size: f64,
    pub opacity: f64,
    /// Index into the scheme palette; fixed for the particle's lifetime.
    pub palette_index: usize,
    pub base_color: Rgb,
    /// Recomputed every tick.
    pub color: Rgb,
}

/// Inset rectangle particles are confined to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vector2,
    pub max: Vector2,
}

impl Bounds {
    pub fn inset(arena: ArenaSettings, margin: f64) -> Self {
        Self {
            min: Vector2::new(margin, margin),
            max: Vector2::new(arena.width - margin, arena.height - margin),
        }
    }

    pub fn contains(&self, p: Vector2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Clamp each axis independently; a crossed edge reflects that velocity
    /// component inward at reduced speed.
    fn contain(&self, position: &mut Vector2, velocity: &mut Vector2) {
        if position.y < self.min.y {
            position.y = self.min.y;
            velocity.y = velocity.y.abs() * BOUNCE_DAMPING_FACTOR;
        } else if position.y > self.max.y {
            position.y = self.max.y;
            velocity.y = -velocity.y.abs() * BOUNCE_DAMPING_FACTOR;
        }

        if position.x < self.min.x {
            position.x = self.min.x;
            velocity.x = velocity.x.abs() * BOUNCE_DAMPING_FACTOR;
        } else if position.x > self.max.x {
            position.x = self.max.x;
            velocity.x = -velocity.x.abs() * BOUNCE_DAMPING_FACTOR;
        }
    }
}

pub struct FieldParticleEngine {
    particles: Vec<FieldParticle>,
    bounds: Bounds,
    scheme: ColorScheme,
    /// Palette entries pre-blended toward the neutral tone, by palette index.
    neutralized: Vec<Rgb>,
}

impl FieldParticleEngine {
    /// Scatter `count` particles uniformly inside the inset arena. The same
    /// seed always yields the same layout and colors.
    pub fn new(arena: ArenaSettings, scheme: ColorScheme, count: usize, seed: u64) -> Self {
        let bounds = Bounds::inset(arena, BOUNDARY_MARGIN);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let palette_len = scheme.palette.len().max(1);
        let particles = (0..count)
            .map(|i| {
                let x = bounds.min.x + rng.gen::<f64>() * (bounds.max.x - bounds.min.x);
                let y = bounds.min.y + rng.gen::<f64>() * (bounds.max.y - bounds.min.y);
                let palette_index = rng.gen_range(0..palette_len);
                let base_color = scheme
                    .palette
                    .get(palette_index)
                    .copied()
                    .unwrap_or(scheme.neutral);
                FieldParticle {
                    id: i as u32,
                    position: Vector2::new(x, y),
                    velocity: Vector2::ZERO,
                    mass: FIELD_PARTICLE_MASS,
                    size: FIELD_PARTICLE_SIZE,
                    opacity: FIELD_PARTICLE_OPACITY,
                    palette_index,
                    base_color,
                    color: base_color,
                }
            })
            .collect();

        let neutralized = scheme
            .palette
            .iter()
            .map(|color| color.blend(scheme.neutral, NEUTRAL_BLEND_RATIO))
            .collect();

        debug!(count, scheme = %scheme.id, seed, "field particles scattered");
        Self {
            particles,
            bounds,
            scheme,
            neutralized,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            config.arena,
            config.scheme.clone(),
            config.particle_count,
            config.seed,
        )
    }

    /// Advance every particle by `dt` seconds against the given view.
    pub fn tick(&mut self, view: &FieldView<'_>, dt: f64) {
        let sources = forces::collect_sources(view.world);
        let influence = InfluenceMap::capture(view.world, view.players);

        for particle in &mut self.particles {
            let force = forces::total_force(particle.position, &sources);

            particle.velocity += force / particle.mass * dt;
            particle.velocity *= PARTICLE_DAMPING;
            let speed_squared = particle.velocity.length_squared();
            if speed_squared > PARTICLE_MAX_SPEED_SQUARED {
                particle.velocity *= PARTICLE_MAX_SPEED / speed_squared.sqrt();
            }

            particle.position += particle.velocity * dt;
            self.bounds
                .contain(&mut particle.position, &mut particle.velocity);

            particle.color = if influence.is_empty() {
                particle.base_color
            } else {
                let neutralized = self
                    .neutralized
                    .get(particle.palette_index)
                    .copied()
                    .unwrap_or(self.scheme.neutral);
                influence.tint(particle.position, particle.base_color, neutralized)
            };
        }
    }

    pub fn particles(&self) -> &[FieldParticle] {
        &self.particles
    }

    /// Direct access for hosts that kick particles (explosions, bursts).
    pub fn particles_mut(&mut self) -> &mut [FieldParticle] {
        &mut self.particles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }
}
