//! Victory check: a base at zero hp hands the match to the other side.

use hecs::World;
use tracing::info;

use photon_core::components::{Base, Health};
use photon_core::enums::MatchMode;
use photon_core::events::EffectEvent;
use photon_core::types::Owner;

/// Declare a winner the first time any base has fallen. Once declared, the
/// winner never changes. If both bases fall in the same tick, the base
/// checked last (highest id) decides.
pub fn run(
    world: &World,
    mode: &mut MatchMode,
    winner: &mut Option<Owner>,
    events: &mut Vec<EffectEvent>,
) {
    if winner.is_some() {
        return;
    }

    let mut fallen: Vec<(u32, Owner)> = world
        .query::<(&Base, &Health)>()
        .iter()
        .filter(|(_entity, (_base, health))| !health.is_alive())
        .map(|(_entity, (base, _health))| (base.id.0, base.owner))
        .collect();
    fallen.sort_by_key(|(id, _)| *id);

    let mut declared = None;
    for (_id, owner) in fallen {
        declared = Some(owner.opponent());
    }

    if let Some(side) = declared {
        *winner = Some(side);
        *mode = MatchMode::Victory;
        info!(winner = ?side, "match ended");
        events.push(EffectEvent::MatchEnded { winner: side });
    }
}
