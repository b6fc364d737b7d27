//! Command-line interface for generating and exporting floors

use crate::generation::composer::generate;
use crate::io::configuration::{
    DEFAULT_BASE_COLOR, DEFAULT_CONNECTION_DIVISOR, DEFAULT_HEIGHT, DEFAULT_MANUAL_PALETTE,
    DEFAULT_OUTLINE_DIVISOR, DEFAULT_PLANK_COUNT, DEFAULT_PREVIEW_SCALE, DEFAULT_SHADING,
    DEFAULT_VARIATIONS, DEFAULT_WIDTH, FloorConfig, SEED_LENGTH,
};
use crate::io::error::Result;
use crate::io::image::{ExportOptions, export_floor};
use crate::io::progress::ProgressManager;
use crate::math::random::random_seed;
use crate::render::palette::{Color, ColorScheme, Palette};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "plankfloor")]
#[command(
    author,
    version,
    about = "Generate tileable pixel-art wood plank floors from a seed"
)]
/// Command-line arguments for the floor generator
// Each boolean toggles an independent output or drawing feature
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Seed string; a random 10 character seed is used when omitted
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Number of floors to generate; floors after the first use random seeds
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Directory receiving the exported images
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Tile width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Tile height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Number of plank rows
    #[arg(short, long, default_value_t = DEFAULT_PLANK_COUNT)]
    pub planks: u32,

    /// Minimum vertical outline gap, as a divisor of the width
    #[arg(long, default_value_t = DEFAULT_OUTLINE_DIVISOR)]
    pub outline_divisor: u32,

    /// T-mark connection distance, as a divisor of the width
    #[arg(long, default_value_t = DEFAULT_CONNECTION_DIVISOR)]
    pub connection_divisor: u32,

    /// Do not draw T-marks on intersections
    #[arg(long)]
    pub no_intersections: bool,

    /// Number of variations (at most 10; larger values are clamped)
    #[arg(long, default_value_t = DEFAULT_VARIATIONS)]
    pub variations: usize,

    /// Base plank color for generated palettes
    #[arg(long, default_value_t = DEFAULT_BASE_COLOR)]
    pub base_color: Color,

    /// Shading percentage between successive generated colors
    #[arg(long, default_value_t = DEFAULT_SHADING, allow_negative_numbers = true)]
    pub shading: i32,

    /// Use the four explicit colors below instead of a generated palette
    #[arg(long)]
    pub manual_colors: bool,

    /// Default plank color (manual palette)
    #[arg(long, default_value_t = DEFAULT_MANUAL_PALETTE.plank)]
    pub plank_color: Color,

    /// Darker plank color (manual palette)
    #[arg(long, default_value_t = DEFAULT_MANUAL_PALETTE.darker_plank)]
    pub darker_plank_color: Color,

    /// Outline color (manual palette)
    #[arg(long, default_value_t = DEFAULT_MANUAL_PALETTE.outline)]
    pub outline_color: Color,

    /// Intersection color (manual palette)
    #[arg(long, default_value_t = DEFAULT_MANUAL_PALETTE.intersection)]
    pub intersection_color: Color,

    /// Tiles along each side of the preview mosaic
    #[arg(long, default_value_t = DEFAULT_PREVIEW_SCALE)]
    pub preview_scale: u32,

    /// Skip the preview mosaic
    #[arg(long)]
    pub no_preview: bool,

    /// Skip writing variation images
    #[arg(long)]
    pub no_variations: bool,

    /// Only report warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Floor configuration described by the arguments
    pub fn floor_config(&self) -> FloorConfig {
        let colors = if self.manual_colors {
            ColorScheme::Manual(Palette {
                plank: self.plank_color,
                darker_plank: self.darker_plank_color,
                outline: self.outline_color,
                intersection: self.intersection_color,
            })
        } else {
            ColorScheme::Generated {
                base: self.base_color,
                shading: self.shading,
            }
        };

        FloorConfig {
            width: self.width,
            height: self.height,
            plank_count: self.planks,
            outline_divisor: self.outline_divisor,
            intersections_enabled: !self.no_intersections,
            connection_divisor: self.connection_divisor,
            colors,
            preview_scale: self.preview_scale,
            ..FloorConfig::default()
        }
        .with_variations(self.variations)
    }

    /// Images to write besides the main tile
    pub const fn export_options(&self) -> ExportOptions {
        ExportOptions {
            variations: !self.no_variations,
            preview: !self.no_preview,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter when `RUST_LOG` is not set
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Install a stderr log subscriber honouring `RUST_LOG`, else `default_filter`
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // A subscriber may already be installed, e.g. by a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Generates and exports every floor requested on the command line
pub struct FloorProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FloorProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and export all floors, returning every written path
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or an image cannot be written
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let config = self.cli.floor_config();
        config.validate()?;

        let seeds = self.collect_seeds();
        if seeds.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(seeds.len());
        }

        let options = self.cli.export_options();
        let mut rng = rand::rng();
        let mut written = Vec::new();

        for seed in &seeds {
            let start_time = Instant::now();
            if let Some(ref pm) = self.progress_manager {
                pm.start_floor(seed);
            }

            let result = generate(&config, seed)?;
            written.extend(export_floor(
                &result,
                &config,
                &self.cli.output,
                options,
                &mut rng,
            )?);

            info!(seed = %seed, "Floor ready");
            debug!(elapsed = ?start_time.elapsed(), "Floor timing");

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_floor();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    /// Seeds for this run: the given one first, random ones for the rest
    pub fn collect_seeds(&self) -> Vec<String> {
        let mut rng = rand::rng();
        (0..self.cli.count)
            .map(|index| match (&self.cli.seed, index) {
                (Some(seed), 0) => seed.clone(),
                _ => random_seed(SEED_LENGTH, &mut rng),
            })
            .collect()
    }
}
