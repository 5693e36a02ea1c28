//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// 2D world position or direction in meters.
pub type Vector2 = glam::DVec2;

/// Position component (meters, arena space: x = right, y = down).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vector2);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self(Vector2::new(x, y))
    }

    /// Straight-line distance to another position in meters.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }
}

impl From<Vector2> for Position {
    fn from(v: Vector2) -> Self {
        Self(v)
    }
}

/// Stable identifier of a unit, assigned by the simulation at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub u32);

/// Stable identifier of a base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseId(pub u32);

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// Index 0, the local side.
    Player,
    /// Index 1.
    Opponent,
}

impl Owner {
    pub const BOTH: [Owner; 2] = [Owner::Player, Owner::Opponent];

    pub fn index(self) -> usize {
        match self {
            Owner::Player => 0,
            Owner::Opponent => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Owner> {
        match index {
            0 => Some(Owner::Player),
            1 => Some(Owner::Opponent),
            _ => None,
        }
    }

    /// The other side.
    pub fn opponent(self) -> Owner {
        match self {
            Owner::Player => Owner::Opponent,
            Owner::Opponent => Owner::Player,
        }
    }
}

/// Simulation time tracking. Frame time is variable, so time advances by
/// whatever the host passes to the tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks run so far.
    pub tick: u64,
    /// Elapsed match time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// A side's currency and passive income.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub photons: u32,
    pub income_rate: u32,
    pub color: Rgb,
    pub secondary_resource: Option<f64>,
}

impl Player {
    pub fn new(color: Rgb, photons: u32) -> Self {
        Self {
            photons,
            income_rate: 1,
            color,
            secondary_resource: None,
        }
    }
}
