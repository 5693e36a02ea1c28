//! Field-particle color schemes.
//!
//! A scheme is a dust palette plus the neutral tone particles drift toward
//! before influence tinting. Schemes are configured as strings and resolved
//! into parsed colors once, at load time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::ConfigError;

/// Scheme as written in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeDefinition {
    pub palette: Vec<String>,
    pub neutral: String,
}

/// A scheme with every color parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub id: String,
    pub palette: Vec<Rgb>,
    pub neutral: Rgb,
}

/// Schemes keyed by identifier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeTable {
    schemes: BTreeMap<String, SchemeDefinition>,
}

impl SchemeTable {
    pub const DEFAULT_SCHEME: &'static str = "classic";

    pub fn standard() -> Self {
        let mut schemes = BTreeMap::new();
        schemes.insert(
            "classic".to_string(),
            scheme(
                &[
                    "oklch(0.95 0 0)",
                    "oklch(0.85 0.01 250)",
                    "oklch(0.75 0.02 240)",
                    "oklch(0.90 0.03 200)",
                ],
                "oklch(0.60 0 0)",
            ),
        );
        schemes.insert(
            "ember".to_string(),
            scheme(
                &[
                    "oklch(0.80 0.12 60)",
                    "oklch(0.70 0.16 40)",
                    "oklch(0.88 0.08 85)",
                    "oklch(0.62 0.14 25)",
                ],
                "oklch(0.55 0.03 50)",
            ),
        );
        schemes.insert(
            "aurora".to_string(),
            scheme(
                &[
                    "oklch(0.82 0.14 160)",
                    "oklch(0.75 0.12 200)",
                    "oklch(0.70 0.15 290)",
                    "oklch(0.88 0.10 130)",
                ],
                "oklch(0.58 0.03 220)",
            ),
        );
        Self { schemes }
    }

    pub fn insert(&mut self, id: impl Into<String>, definition: SchemeDefinition) {
        self.schemes.insert(id.into(), definition);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.schemes.contains_key(id)
    }

    /// Parse the colors of one scheme.
    pub fn resolve(&self, id: &str) -> Result<ColorScheme, ConfigError> {
        let definition = self
            .schemes
            .get(id)
            .ok_or_else(|| ConfigError::UnknownColorScheme(id.to_string()))?;
        if definition.palette.is_empty() {
            return Err(ConfigError::EmptyPalette(id.to_string()));
        }
        let palette = definition
            .palette
            .iter()
            .map(|s| Rgb::parse(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ColorScheme {
            id: id.to_string(),
            palette,
            neutral: Rgb::parse(&definition.neutral)?,
        })
    }
}

fn scheme(palette: &[&str], neutral: &str) -> SchemeDefinition {
    SchemeDefinition {
        palette: palette.iter().map(|s| s.to_string()).collect(),
        neutral: neutral.to_string(),
    }
}
