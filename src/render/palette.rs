//! Plank colors, hex parsing and percentage shading

use crate::io::error::{FloorError, Result};
use std::fmt;
use std::str::FromStr;

/// Opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`, case-insensitive
    ///
    /// # Errors
    ///
    /// Returns [`FloorError::InvalidColor`] if the input is not six hex digits
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(FloorError::InvalidColor {
                value: hex.to_string(),
                reason: format!("expected 6 hex digits, got {}", digits.len()),
            });
        }

        let channel = |range: std::ops::Range<usize>, name: &str| -> Result<u8> {
            digits
                .get(range)
                .and_then(|part| u8::from_str_radix(part, 16).ok())
                .ok_or_else(|| FloorError::InvalidColor {
                    value: hex.to_string(),
                    reason: format!("invalid {name} component"),
                })
        };

        Ok(Self::new(
            channel(0..2, "red")?,
            channel(2..4, "green")?,
            channel(4..6, "blue")?,
        ))
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Lighten (positive) or darken (negative) every channel by `percent`
    ///
    /// Each channel becomes `trunc(c * (100 + percent) / 100)` clamped to `0..=255`.
    pub fn shade(self, percent: i32) -> Self {
        let scale = |c: u8| -> u8 {
            let scaled = i64::from(c) * (100 + i64::from(percent)) / 100;
            scaled.clamp(0, 255) as u8
        };
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Fully opaque RGBA channels
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, u8::MAX]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = FloorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// How the four floor colors are obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    /// Derive every color from a base plank color by successive shading
    Generated {
        /// Default plank color
        base: Color,
        /// Shading percentage applied at each step
        shading: i32,
    },
    /// Use four explicitly chosen colors
    Manual(Palette),
}

impl ColorScheme {
    /// Resolve the scheme into concrete colors
    pub fn palette(&self) -> Palette {
        match *self {
            Self::Generated { base, shading } => Palette::generated(base, shading),
            Self::Manual(palette) => palette,
        }
    }
}

/// The four colors used to draw a floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Most common plank color
    pub plank: Color,
    /// Color of the occasional darker plank
    pub darker_plank: Color,
    /// Horizontal and vertical delimitation lines
    pub outline: Color,
    /// T-marks darkening outline intersections
    pub intersection: Color,
}

impl Palette {
    /// Shade down from `base`: darker plank, then outline, then intersection
    ///
    /// Each step darkens a little more than the previous one.
    pub fn generated(base: Color, shading: i32) -> Self {
        let darker_plank = base.shade(shading);
        let outline = darker_plank.shade(shading.saturating_sub(5));
        let intersection = outline.shade(shading.saturating_sub(2));
        Self {
            plank: base,
            darker_plank,
            outline,
            intersection,
        }
    }
}
