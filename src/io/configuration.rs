//! Generation constants and the validated runtime configuration

use crate::io::error::{Result, invalid_parameter};
use crate::render::mosaic::mosaic_size;
use crate::render::palette::{Color, ColorScheme, Palette};
use tracing::warn;

// Tile defaults
/// Default tile width in pixels
pub const DEFAULT_WIDTH: u32 = 32;
/// Default tile height in pixels
pub const DEFAULT_HEIGHT: u32 = 32;
/// Default number of plank rows per tile
pub const DEFAULT_PLANK_COUNT: u32 = 8;

// Outline and intersection spacing, both expressed as divisors of the tile width
/// Default divisor giving the minimum gap between consecutive vertical outlines
pub const DEFAULT_OUTLINE_DIVISOR: u32 = 6;
/// Default divisor giving the distance under which T-marks connect
pub const DEFAULT_CONNECTION_DIVISOR: u32 = 6;

// Probabilities drawn against the seeded stream
/// Chance that a plank row uses the default plank color
pub const DEFAULT_PLANK_PROBABILITY: f64 = 0.7;
/// Chance that an intersection receives a T-mark
pub const DECORATION_PROBABILITY: f64 = 0.5;

// Variations
/// Default number of variations generated next to the main tile
pub const DEFAULT_VARIATIONS: usize = 1;
/// Upper bound on variations per floor
pub const MAX_VARIATIONS: usize = 10;

// Preview
/// Default number of tiles along each side of the preview mosaic
pub const DEFAULT_PREVIEW_SCALE: u32 = 5;

// Colors
/// Default base color for generated palettes
pub const DEFAULT_BASE_COLOR: Color = Color::new(0x96, 0x70, 0x4a);
/// Default shading percentage for generated palettes
pub const DEFAULT_SHADING: i32 = -2;
/// Default colors when the palette is defined manually
pub const DEFAULT_MANUAL_PALETTE: Palette = Palette {
    plank: Color::new(0x96, 0x70, 0x4a),
    darker_plank: Color::new(0x91, 0x6b, 0x44),
    outline: Color::new(0x81, 0x5d, 0x34),
    intersection: Color::new(0x73, 0x53, 0x2e),
};
/// Accepted shading range in percent
pub const SHADING_RANGE: std::ops::RangeInclusive<i32> = -100..=100;

// Seeds
/// Length of generated seed strings
pub const SEED_LENGTH: usize = 10;
/// Characters generated seeds are drawn from
pub const SEED_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

// Output settings
/// File name prefix of the main tile
pub const RESULT_PREFIX: &str = "result";
/// File name prefix of each variation
pub const VARIATION_PREFIX: &str = "variation";
/// File name prefix of the preview mosaic
pub const PREVIEW_PREFIX: &str = "preview";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Immutable description of one floor, read once per generation
#[derive(Debug, Clone, PartialEq)]
pub struct FloorConfig {
    /// Tile width in pixels
    pub width: u32,
    /// Tile height in pixels
    pub height: u32,
    /// Number of plank rows
    pub plank_count: u32,
    /// Width divisor for the minimum vertical outline gap
    pub outline_divisor: u32,
    /// Whether T-marks are emitted
    pub intersections_enabled: bool,
    /// Width divisor for the T-mark connection distance
    pub connection_divisor: u32,
    /// Number of variations besides the main tile, at most [`MAX_VARIATIONS`]
    pub variations: usize,
    /// Source of the floor colors
    pub colors: ColorScheme,
    /// Tiles along each side of the preview mosaic
    pub preview_scale: u32,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            plank_count: DEFAULT_PLANK_COUNT,
            outline_divisor: DEFAULT_OUTLINE_DIVISOR,
            intersections_enabled: true,
            connection_divisor: DEFAULT_CONNECTION_DIVISOR,
            variations: DEFAULT_VARIATIONS,
            colors: ColorScheme::Generated {
                base: DEFAULT_BASE_COLOR,
                shading: DEFAULT_SHADING,
            },
            preview_scale: DEFAULT_PREVIEW_SCALE,
        }
    }
}

impl FloorConfig {
    /// Set the variation count, clamped to [`MAX_VARIATIONS`]
    #[must_use]
    pub fn with_variations(mut self, variations: usize) -> Self {
        if variations > MAX_VARIATIONS {
            warn!(
                requested = variations,
                max = MAX_VARIATIONS,
                "Variation count clamped"
            );
        }
        self.variations = variations.min(MAX_VARIATIONS);
        self
    }

    /// Vertical distance between plank rows, `height / plank_count`
    pub fn plank_spacing(&self) -> f64 {
        f64::from(self.height) / f64::from(self.plank_count)
    }

    /// Minimum horizontal distance between vertical outlines of consecutive rows
    pub const fn outline_gap(&self) -> u32 {
        self.width / self.outline_divisor
    }

    /// Distance under which T-marks on the same outline are joined
    pub const fn connection_distance(&self) -> u32 {
        self.width / self.connection_divisor
    }

    /// Concrete colors for this configuration
    pub fn palette(&self) -> Palette {
        self.colors.palette()
    }

    /// Reject configurations the generator cannot draw
    ///
    /// # Errors
    ///
    /// Returns [`crate::FloorError::InvalidParameter`] if:
    /// - A dimension, the plank count or a divisor is zero
    /// - There are more planks than pixel rows
    /// - The plank spacing is not positive
    /// - The preview mosaic would not fit in `u32` pixel coordinates
    /// - The tile is too narrow to place vertical outlines at the configured gap
    /// - More than [`MAX_VARIATIONS`] variations are requested
    /// - The shading percentage lies outside [`SHADING_RANGE`]
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("plank_count", self.plank_count),
            ("outline_divisor", self.outline_divisor),
            ("connection_divisor", self.connection_divisor),
            ("preview_scale", self.preview_scale),
        ];
        for (parameter, value) in positive {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
        }

        if self.plank_count > self.height {
            return Err(invalid_parameter(
                "plank_count",
                &self.plank_count,
                &format!("planks must be at least 1px tall in a {}px tile", self.height),
            ));
        }

        let spacing = self.plank_spacing();
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(invalid_parameter(
                "plank_spacing",
                &spacing,
                &"height / plank_count must be positive",
            ));
        }

        let gap = i64::from(self.outline_gap());
        if i64::from(self.width) - 1 - 2 * gap < 0 {
            return Err(invalid_parameter(
                "outline_divisor",
                &self.outline_divisor,
                &format!("gap of {gap}px leaves no room for outlines in a {}px tile", self.width),
            ));
        }

        if mosaic_size(self.width, self.height, self.preview_scale).is_none() {
            return Err(invalid_parameter(
                "preview_scale",
                &self.preview_scale,
                &"preview would exceed u32 pixels on a side",
            ));
        }

        if self.variations > MAX_VARIATIONS {
            return Err(invalid_parameter(
                "variations",
                &self.variations,
                &format!("at most {MAX_VARIATIONS} variations are supported"),
            ));
        }

        if let ColorScheme::Generated { shading, .. } = self.colors {
            if !SHADING_RANGE.contains(&shading) {
                return Err(invalid_parameter(
                    "shading",
                    &shading,
                    &"must lie between -100 and 100",
                ));
            }
        }

        Ok(())
    }
}
