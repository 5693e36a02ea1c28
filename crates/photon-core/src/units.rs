//! Unit definitions: per-type stats and the ability each type carries.

use serde::{Deserialize, Serialize};

use crate::enums::{AbilityKind, AttackType, UnitKind};

/// Stats for one unit type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    pub name: String,
    pub hp: f64,
    /// Shown to players; the continuous damage model does not apply it.
    pub armor: f64,
    /// Meters per second.
    pub move_speed: f64,
    pub attack_damage: f64,
    pub attack_range: f64,
    /// Attacks per second.
    pub attack_rate: f64,
    pub attack_type: AttackType,
    pub can_damage_structures: bool,
    pub cost: u32,
    pub ability: AbilityKind,
    pub ability_name: String,
    pub ability_cooldown: f64,
}

impl UnitDefinition {
    pub fn has_attack(&self) -> bool {
        self.attack_type != AttackType::None && self.attack_damage > 0.0
    }

    /// Continuous damage per second before promotion.
    pub fn damage_per_second(&self) -> f64 {
        self.attack_damage * self.attack_rate
    }
}

/// Complete table of unit definitions, one per [`UnitKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTable {
    definitions: [UnitDefinition; 3],
}

impl UnitTable {
    /// The stock roster.
    pub fn standard() -> Self {
        Self {
            definitions: [
                UnitDefinition {
                    name: "Marine".to_string(),
                    hp: 40.0,
                    armor: 0.0,
                    move_speed: 5.0,
                    attack_damage: 10.0,
                    attack_range: 8.0,
                    attack_rate: 1.0,
                    attack_type: AttackType::Ranged,
                    can_damage_structures: true,
                    cost: 50,
                    ability: AbilityKind::BurstFire,
                    ability_name: "Burst Fire".to_string(),
                    ability_cooldown: 5.0,
                },
                UnitDefinition {
                    name: "Warrior".to_string(),
                    hp: 60.0,
                    armor: 2.0,
                    move_speed: 4.0,
                    attack_damage: 15.0,
                    attack_range: 1.5,
                    attack_rate: 1.0,
                    attack_type: AttackType::Melee,
                    can_damage_structures: true,
                    cost: 60,
                    ability: AbilityKind::ExecuteDash,
                    ability_name: "Execute Dash".to_string(),
                    ability_cooldown: 6.0,
                },
                UnitDefinition {
                    name: "Snaker".to_string(),
                    hp: 30.0,
                    armor: 0.0,
                    move_speed: 6.0,
                    attack_damage: 5.0,
                    attack_range: 4.0,
                    attack_rate: 2.0,
                    attack_type: AttackType::Ranged,
                    can_damage_structures: false,
                    cost: 40,
                    ability: AbilityKind::LineJump,
                    ability_name: "Line Jump".to_string(),
                    ability_cooldown: 4.0,
                },
            ],
        }
    }

    pub fn get(&self, kind: UnitKind) -> &UnitDefinition {
        &self.definitions[kind.index()]
    }

    /// Replace one definition.
    pub fn set(&mut self, kind: UnitKind, definition: UnitDefinition) {
        self.definitions[kind.index()] = definition;
    }

    pub fn iter(&self) -> impl Iterator<Item = (UnitKind, &UnitDefinition)> {
        UnitKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::standard()
    }
}
