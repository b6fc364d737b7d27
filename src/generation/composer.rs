//! Layer stacking and the full generation pipeline
//!
//! A floor is generated from a single seeded stream in a fixed order: plank
//! bands, horizontal outlines (no randomness), then for the main tile and each
//! variation in turn the vertical outlines followed by their T-marks. Variations
//! share the plank layer and keep drawing from the same stream, so they differ
//! only in outline and mark placement.

use crate::generation::intersections::{SpreadLimits, draw_intersections};
use crate::generation::layer::Layer;
use crate::generation::outlines::{draw_horizontal_outlines, draw_vertical_outlines};
use crate::generation::planks::draw_planks;
use crate::io::configuration::FloorConfig;
use crate::io::error::Result;
use crate::math::random::SeededRandom;
use crate::render::palette::Palette;
use tracing::{debug, info};

/// One complete tile: the shared base plus its own outlines and marks
#[derive(Debug, Clone, PartialEq)]
pub struct TileResult {
    vertical_outlines: Layer,
    intersections: Layer,
    stacked: Layer,
}

impl TileResult {
    /// Vertical outlines specific to this tile
    pub const fn vertical_outlines(&self) -> &Layer {
        &self.vertical_outlines
    }

    /// T-marks specific to this tile
    pub const fn intersections(&self) -> &Layer {
        &self.intersections
    }

    /// Every command of the tile in draw order
    pub const fn layer(&self) -> &Layer {
        &self.stacked
    }
}

/// Stack the layers of one tile bottom to top
///
/// Planks and horizontal outlines come first, then vertical outlines, then
/// T-marks, so marks paint over outlines and outlines over planks.
pub fn compose_tile(base: &[&Layer], vertical_outlines: Layer, intersections: Layer) -> TileResult {
    let stacked = Layer::stack(
        base.iter()
            .copied()
            .chain([&vertical_outlines, &intersections]),
    );
    TileResult {
        vertical_outlines,
        intersections,
        stacked,
    }
}

/// Everything produced for one seed
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    seed: String,
    palette: Palette,
    planks: Layer,
    horizontal_outlines: Layer,
    tiles: Vec<TileResult>,
}

impl GenerationResult {
    /// Seed the floor was generated from
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Colors the floor was drawn with
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Plank bands shared by every tile
    pub const fn planks(&self) -> &Layer {
        &self.planks
    }

    /// Horizontal outlines shared by every tile
    pub const fn horizontal_outlines(&self) -> &Layer {
        &self.horizontal_outlines
    }

    /// Main tile followed by its variations
    pub fn tiles(&self) -> &[TileResult] {
        &self.tiles
    }

    /// The main tile
    pub fn main_tile(&self) -> Option<&TileResult> {
        self.tiles.first()
    }

    /// Tiles generated after the main one
    pub fn variations(&self) -> &[TileResult] {
        self.tiles.get(1..).unwrap_or(&[])
    }
}

/// Builds tiles that share one plank layer and one random stream
pub struct TileComposer<'a> {
    config: &'a FloorConfig,
    seed: String,
    palette: Palette,
    rnd: SeededRandom,
    planks: Layer,
    horizontal_outlines: Layer,
}

impl<'a> TileComposer<'a> {
    /// Validate `config`, seed the stream and draw the shared base layers
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: &'a FloorConfig, seed: &str) -> Result<Self> {
        config.validate()?;

        let palette = config.palette();
        let mut rnd = SeededRandom::new(seed);
        let height = f64::from(config.height);
        let width = f64::from(config.width);
        let spacing = config.plank_spacing();

        let planks = draw_planks(height, width, spacing, &palette, &mut rnd);
        let horizontal_outlines = draw_horizontal_outlines(height, width, spacing, palette.outline);
        debug!(
            bands = planks.len(),
            outlines = horizontal_outlines.len(),
            "Drew shared plank layer"
        );

        Ok(Self {
            config,
            seed: seed.to_string(),
            palette,
            rnd,
            planks,
            horizontal_outlines,
        })
    }

    /// Draw the next tile from the continuing stream
    pub fn next_tile(&mut self) -> TileResult {
        let height = f64::from(self.config.height);
        let width = f64::from(self.config.width);
        let spacing = self.config.plank_spacing();
        let gap = self.config.outline_gap();

        let (vertical_outlines, intersections) = draw_vertical_outlines(
            height,
            width,
            spacing,
            i64::from(gap),
            self.palette.outline,
            &mut self.rnd,
        );

        // The top band has no horizontal outline above it inside the tile
        let decorated = intersections.get(1..).unwrap_or(&[]);
        let marks = draw_intersections(
            decorated,
            f64::from(self.config.connection_distance()),
            &SpreadLimits::new(spacing, f64::from(gap)),
            self.palette.intersection,
            self.config.intersections_enabled,
            &mut self.rnd,
        );
        debug!(
            outlines = vertical_outlines.len(),
            marks = marks.len() / 2,
            draws = self.rnd.draws(),
            "Drew tile"
        );

        compose_tile(
            &[&self.planks, &self.horizontal_outlines],
            vertical_outlines,
            marks,
        )
    }

    /// Draw the main tile and every configured variation
    pub fn finish(mut self) -> GenerationResult {
        let tiles = (0..=self.config.variations)
            .map(|_| self.next_tile())
            .collect();

        GenerationResult {
            seed: self.seed,
            palette: self.palette,
            planks: self.planks,
            horizontal_outlines: self.horizontal_outlines,
            tiles,
        }
    }
}

/// Generate a floor and its variations from `seed`
///
/// Pure: the same configuration and seed always yield the same draw commands.
///
/// # Errors
///
/// Returns an error if the configuration fails validation
pub fn generate(config: &FloorConfig, seed: &str) -> Result<GenerationResult> {
    let result = TileComposer::new(config, seed)?.finish();
    info!(
        seed,
        tiles = result.tiles.len(),
        width = config.width,
        height = config.height,
        "Generated floor"
    );
    Ok(result)
}
