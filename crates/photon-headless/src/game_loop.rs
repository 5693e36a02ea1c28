//! Frame loop: drives the simulation and the field engine once per frame.
//!
//! The simulation always ticks before the field so particles react to this
//! frame's positions. Frame time is clamped before either engine sees it.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use photon_core::config::ResolvedConfig;
use photon_core::constants::MAX_FRAME_DT;
use photon_core::events::EffectEvent;
use photon_core::state::ArenaSnapshot;
use photon_core::types::Owner;
use photon_field::{FieldParticleEngine, FieldView};
use photon_sim::{world_setup, SimulationEngine};

use crate::director::Director;

/// Seconds of match time between progress log lines.
const PROGRESS_INTERVAL_SECS: f64 = 10.0;

#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    pub fps: f64,
    pub max_seconds: f64,
    /// Sleep between frames to run at wall-clock speed.
    pub realtime: bool,
}

#[derive(Debug)]
pub struct MatchOutcome {
    pub winner: Option<Owner>,
    pub frames: u64,
    pub snapshot: ArenaSnapshot,
}

/// Per-frame step for a target frame rate, capped at `MAX_FRAME_DT`.
pub fn frame_dt(fps: f64) -> f64 {
    if fps > 0.0 {
        (1.0 / fps).min(MAX_FRAME_DT)
    } else {
        MAX_FRAME_DT
    }
}

/// Play one scripted match until a base falls or time runs out.
pub fn run_match(config: &ResolvedConfig, settings: LoopSettings) -> MatchOutcome {
    let mut engine = SimulationEngine::new(config);
    let mut field = FieldParticleEngine::from_config(config);
    let mut director = Director::new(config.arena, config.enabled_units.iter().copied().collect());
    director.dress_arena(engine.world_mut());

    let dt = frame_dt(settings.fps);
    let frame_duration = Duration::from_secs_f64(dt);
    let mut next_frame_time = Instant::now();
    let mut next_report = PROGRESS_INTERVAL_SECS;
    let mut frames = 0;

    let snapshot = loop {
        // 1. Scripted orders
        director.direct(&mut engine);

        // 2. Simulation, then particles against the updated world
        let snapshot = engine.tick(dt);
        field.tick(&FieldView::new(engine.world(), engine.players()), dt);
        frames += 1;

        // 3. Effects: log them and leave wreckage where units fell
        for event in &snapshot.events {
            debug!(?event, "effect");
            if let EffectEvent::UnitDestroyed { position, .. } = event {
                world_setup::spawn_shell(engine.world_mut(), *position);
            }
        }
        if snapshot.time.elapsed_secs >= next_report {
            next_report += PROGRESS_INTERVAL_SECS;
            info!(
                t = snapshot.time.elapsed_secs,
                units = snapshot.units.len(),
                base_hp = ?snapshot.bases.iter().map(|b| b.hp).collect::<Vec<_>>(),
                photons = ?snapshot.players.iter().map(|p| p.photons).collect::<Vec<_>>(),
                "match progress"
            );
        }

        // 4. Stop on victory or timeout; the host gates ticks after a win.
        let ended = snapshot
            .events
            .iter()
            .any(|event| matches!(event, EffectEvent::MatchEnded { .. }));
        if ended || snapshot.time.elapsed_secs >= settings.max_seconds {
            break snapshot;
        }

        // 5. Pace to wall clock if asked
        if settings.realtime {
            next_frame_time += frame_duration;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > frame_duration * 2 {
                // Too far behind; reset to avoid a catch-up spiral
                next_frame_time = now;
            }
        }
    };

    MatchOutcome {
        winner: engine.winner(),
        frames,
        snapshot,
    }
}
