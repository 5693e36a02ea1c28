//! Integration errors raised while loading and validating configuration.
//!
//! Gameplay operations never fail; they silently do nothing. Only a broken
//! setup is reported.

use thiserror::Error;

use crate::color::ColorParseError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("color error: {0}")]
    Color(#[from] ColorParseError),

    #[error("unknown unit type: {0}")]
    UnknownUnitType(String),

    #[error("unknown color scheme: {0}")]
    UnknownColorScheme(String),

    #[error("color scheme {0} has an empty palette")]
    EmptyPalette(String),

    #[error("invalid arena dimensions {width}x{height}")]
    InvalidArena { width: f64, height: f64 },
}
