//! Perceptual color handling.
//!
//! Player and palette colors are configured as CSS-like strings
//! (`oklch(L C H)` or `#rrggbb`) and parsed once into [`Rgb`], a linear-light
//! RGB triple. All blending happens in linear RGB; [`Rgb::to_css`] encodes
//! back to sRGB for the renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while parsing a color string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("unrecognized color format: {0}")]
    UnknownFormat(String),
    #[error("invalid {component} component in {input}")]
    InvalidComponent {
        input: String,
        component: &'static str,
    },
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

/// Linear-light RGB color with channels nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// OKLCH color: perceptual lightness, chroma and hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parse a color string. Accepts `oklch(...)`, `#rgb`, `#rrggbb`, or a
    /// comma-separated list of those where the first parseable entry wins.
    pub fn parse(input: &str) -> Result<Rgb, ColorParseError> {
        let candidates = split_top_level(input);
        if candidates.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let mut first_error = None;
        for candidate in candidates {
            match parse_single(candidate) {
                Ok(rgb) => return Ok(rgb),
                Err(err) => {
                    first_error.get_or_insert(err);
                }
            }
        }
        Err(first_error.unwrap_or(ColorParseError::Empty))
    }

    /// Linear interpolation toward `other` by `t` (clamped to `[0, 1]`).
    pub fn blend(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        self.scale(1.0 - t).add(other.scale(t))
    }

    pub fn scale(self, s: f64) -> Rgb {
        Rgb::new(self.r * s, self.g * s, self.b * s)
    }

    pub fn add(self, other: Rgb) -> Rgb {
        Rgb::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }

    /// Per-channel maximum absolute difference.
    pub fn max_diff(self, other: Rgb) -> f64 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
    }

    /// Encode as an sRGB CSS color, e.g. `rgb(59 130 246)`.
    pub fn to_css(self) -> String {
        let [r, g, b] = self.to_srgb8();
        format!("rgb({r} {g} {b})")
    }

    /// Gamma-encoded 8-bit sRGB channels.
    pub fn to_srgb8(self) -> [u8; 3] {
        let encode = |c: f64| (linear_to_srgb(c.clamp(0.0, 1.0)) * 255.0).round() as u8;
        [encode(self.r), encode(self.g), encode(self.b)]
    }

    pub fn from_srgb8(r: u8, g: u8, b: u8) -> Rgb {
        let decode = |c: u8| srgb_to_linear(c as f64 / 255.0);
        Rgb::new(decode(r), decode(g), decode(b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::parse(s)
    }
}

impl Oklch {
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Convert to linear sRGB via OKLab, clipping out-of-gamut channels.
    pub fn to_rgb(self) -> Rgb {
        let hue = self.h.to_radians();
        let a = self.c * hue.cos();
        let b = self.c * hue.sin();

        let l_ = self.l + 0.396_337_777_4 * a + 0.215_803_757_3 * b;
        let m_ = self.l - 0.105_561_345_8 * a - 0.063_854_172_8 * b;
        let s_ = self.l - 0.089_484_177_5 * a - 1.291_485_548_0 * b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        Rgb::new(
            (4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s).clamp(0.0, 1.0),
            (-1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s).clamp(0.0, 1.0),
            (-0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s).clamp(0.0, 1.0),
        )
    }
}

fn parse_single(input: &str) -> Result<Rgb, ColorParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorParseError::Empty);
    }
    let lower = trimmed.to_ascii_lowercase();
    if let Some(body) = lower
        .strip_prefix("oklch(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_oklch_body(body, trimmed).map(Oklch::to_rgb);
    }
    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex, trimmed);
    }
    Err(ColorParseError::UnknownFormat(trimmed.to_string()))
}

fn parse_oklch_body(body: &str, input: &str) -> Result<Oklch, ColorParseError> {
    // Alpha after '/' is accepted and ignored.
    let channels = body.split('/').next().unwrap_or_default();
    let parts: Vec<&str> = channels.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(ColorParseError::UnknownFormat(input.to_string()));
    }

    let invalid = |component| ColorParseError::InvalidComponent {
        input: input.to_string(),
        component,
    };

    let l = match parts[0].strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().map(|v| v / 100.0),
        None => parts[0].parse::<f64>(),
    }
    .map_err(|_| invalid("lightness"))?;

    // CSS maps 100% chroma to 0.4.
    let c = match parts[1].strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().map(|v| v / 100.0 * 0.4),
        None => parts[1].parse::<f64>(),
    }
    .map_err(|_| invalid("chroma"))?;

    let h = parts[2]
        .strip_suffix("deg")
        .unwrap_or(parts[2])
        .parse::<f64>()
        .map_err(|_| invalid("hue"))?;

    if !(l.is_finite() && c.is_finite() && h.is_finite()) {
        return Err(invalid("lightness"));
    }

    Ok(Oklch::new(l.clamp(0.0, 1.0), c.max(0.0), h))
}

fn parse_hex(hex: &str, input: &str) -> Result<Rgb, ColorParseError> {
    let invalid = || ColorParseError::InvalidHex(input.to_string());
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    match hex.len() {
        3 => {
            let expand = |i: usize| channel(hex[i..i + 1].repeat(2).as_str());
            Ok(Rgb::from_srgb8(expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Ok(Rgb::from_srgb8(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => Err(invalid()),
    }
}

/// Split on commas that are not inside parentheses.
fn split_top_level(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in input.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts.retain(|p| !p.trim().is_empty());
    parts
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
