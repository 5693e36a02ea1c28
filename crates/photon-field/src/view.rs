//! Read-only window onto the simulation state for one field tick.

use hecs::World;

use photon_core::types::Player;

/// Borrowed entity world and player list. The field engine cannot mutate
/// either through this view.
#[derive(Clone, Copy)]
pub struct FieldView<'a> {
    pub world: &'a World,
    pub players: &'a [Player; 2],
}

impl<'a> FieldView<'a> {
    pub fn new(world: &'a World, players: &'a [Player; 2]) -> Self {
        Self { world, players }
    }
}
