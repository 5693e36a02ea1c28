//! Match configuration.
//!
//! `ArenaConfig` is the on-disk (TOML) form with a default for every field.
//! `validate` turns it into a `ResolvedConfig` with colors parsed, unit names
//! checked and the color scheme looked up, so nothing is parsed per tick.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::constants::{
    ARENA_HEIGHT_METERS, ARENA_WIDTH_METERS, BASE_START_HP, BOUNDARY_MARGIN, FIELD_PARTICLE_COUNT,
};
use crate::enums::UnitKind;
use crate::error::ConfigError;
use crate::schemes::{ColorScheme, SchemeDefinition, SchemeTable};
use crate::units::{UnitDefinition, UnitTable};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub arena: ArenaSettings,
    #[serde(rename = "match")]
    pub match_settings: MatchSettings,
    pub field: FieldSettings,
    /// Unit definition overrides keyed by unit type name.
    pub units: BTreeMap<String, UnitDefinition>,
    /// Extra or replacement color schemes keyed by identifier.
    pub schemes: BTreeMap<String, SchemeDefinition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for ArenaSettings {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH_METERS,
            height: ARENA_HEIGHT_METERS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    pub enabled_units: Vec<String>,
    /// Color strings for side 0 and side 1.
    pub player_colors: [String; 2],
    pub starting_photons: u32,
    pub base_hp: f64,
    /// Let bases shoot nearby enemy units.
    pub base_lasers: bool,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            enabled_units: UnitKind::ALL.iter().map(|k| k.as_str().to_string()).collect(),
            player_colors: [
                "oklch(0.65 0.25 240)".to_string(),
                "oklch(0.62 0.28 25)".to_string(),
            ],
            starting_photons: 0,
            base_hp: BASE_START_HP,
            base_lasers: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    pub scheme: String,
    pub particle_count: usize,
    /// RNG seed for particle scattering. Same seed = same layout.
    pub seed: u64,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            scheme: SchemeTable::DEFAULT_SCHEME.to_string(),
            particle_count: FIELD_PARTICLE_COUNT,
            seed: 42,
        }
    }
}

/// Validated configuration consumed by both engines.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub arena: ArenaSettings,
    pub units: UnitTable,
    pub enabled_units: BTreeSet<UnitKind>,
    pub player_colors: [Rgb; 2],
    pub starting_photons: u32,
    pub base_hp: f64,
    pub base_lasers: bool,
    pub scheme: ColorScheme,
    pub particle_count: usize,
    pub seed: u64,
}

impl ArenaConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check every reference and parse every color.
    pub fn validate(&self) -> Result<ResolvedConfig, ConfigError> {
        let ArenaSettings { width, height } = self.arena;
        if !(width > 2.0 * BOUNDARY_MARGIN && height > 2.0 * BOUNDARY_MARGIN) {
            return Err(ConfigError::InvalidArena { width, height });
        }

        let mut units = UnitTable::standard();
        for (name, definition) in &self.units {
            units.set(parse_kind(name)?, definition.clone());
        }

        let enabled_units = self
            .match_settings
            .enabled_units
            .iter()
            .map(|name| parse_kind(name))
            .collect::<Result<BTreeSet<_>, _>>()?;

        let [player, opponent] = &self.match_settings.player_colors;
        let player_colors = [Rgb::parse(player)?, Rgb::parse(opponent)?];

        let mut schemes = SchemeTable::standard();
        for (id, definition) in &self.schemes {
            schemes.insert(id.clone(), definition.clone());
        }
        let scheme = schemes.resolve(&self.field.scheme)?;

        Ok(ResolvedConfig {
            arena: self.arena,
            units,
            enabled_units,
            player_colors,
            starting_photons: self.match_settings.starting_photons,
            base_hp: self.match_settings.base_hp,
            base_lasers: self.match_settings.base_lasers,
            scheme,
            particle_count: self.field.particle_count,
            seed: self.field.seed,
        })
    }
}

impl ResolvedConfig {
    /// Stock configuration; cannot fail.
    pub fn standard() -> Self {
        ArenaConfig::default()
            .validate()
            .unwrap_or_else(|err| unreachable!("stock configuration is valid: {err}"))
    }
}

fn parse_kind(name: &str) -> Result<UnitKind, ConfigError> {
    name.parse::<UnitKind>().map_err(ConfigError::UnknownUnitType)
}
