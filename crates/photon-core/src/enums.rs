//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unit archetypes. Each maps to one definition in the unit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Marine,
    Warrior,
    Snaker,
}

impl UnitKind {
    pub const ALL: [UnitKind; 3] = [UnitKind::Marine, UnitKind::Warrior, UnitKind::Snaker];

    pub fn index(self) -> usize {
        match self {
            UnitKind::Marine => 0,
            UnitKind::Warrior => 1,
            UnitKind::Snaker => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnitKind::Marine => "marine",
            UnitKind::Warrior => "warrior",
            UnitKind::Snaker => "snaker",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Ability a unit type carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityKind {
    /// Instant: ten narrow-cone shots along the aim direction.
    BurstFire,
    /// Instant: teleport onto a nearby enemy and hit it hard.
    ExecuteDash,
    /// Telegraphed: jump along the aim direction after a delay, damaging
    /// everything on the path.
    LineJump,
}

/// How a unit's normal attack is delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackType {
    Melee,
    #[default]
    Ranged,
    None,
}

/// Match lifecycle as seen by the simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    #[default]
    InProgress,
    /// Terminal: a base fell and a winner is declared.
    Victory,
}
