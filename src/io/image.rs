//! PNG export of tiles, variations and the preview mosaic

use crate::generation::composer::{GenerationResult, TileResult};
use crate::io::configuration::{FloorConfig, PREVIEW_PREFIX, RESULT_PREFIX, VARIATION_PREFIX};
use crate::io::error::{FloorError, Result};
use crate::render::canvas::render_layers;
use crate::render::mosaic::compose_mosaic;
use image::RgbaImage;
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::info;

/// Which images to write besides the main tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Write one image per variation
    pub variations: bool,
    /// Write the preview mosaic
    pub preview: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            variations: true,
            preview: true,
        }
    }
}

/// `result-<seed>.png`
pub fn result_file_name(seed: &str) -> String {
    format!("{RESULT_PREFIX}-{seed}.png")
}

/// `variation-<index>-<seed>.png`, with `index` counted from zero
pub fn variation_file_name(index: usize, seed: &str) -> String {
    format!("{VARIATION_PREFIX}-{index}-{seed}.png")
}

/// `preview-<seed>.png`
pub fn preview_file_name(seed: &str) -> String {
    format!("{PREVIEW_PREFIX}-{seed}.png")
}

/// Rasterize one tile at the configured size
pub fn render_tile(tile: &TileResult, config: &FloorConfig) -> RgbaImage {
    render_layers([tile.layer()], config.width, config.height)
}

/// Save an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| FloorError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| FloorError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Write the main tile, its variations and the preview into `directory`
///
/// Returns the written paths in the order they were written.
///
/// # Errors
///
/// Returns an error if any image cannot be written
pub fn export_floor<R: Rng + ?Sized>(
    result: &GenerationResult,
    config: &FloorConfig,
    directory: &Path,
    options: ExportOptions,
    rng: &mut R,
) -> Result<Vec<PathBuf>> {
    let seed = result.seed();
    let images: Vec<RgbaImage> = result
        .tiles()
        .iter()
        .map(|tile| render_tile(tile, config))
        .collect();
    let mut written = Vec::new();

    if let Some(main) = images.first() {
        let path = directory.join(result_file_name(seed));
        save_png(main, &path)?;
        written.push(path);
    }

    if options.variations {
        for (index, image) in images.iter().skip(1).enumerate() {
            let path = directory.join(variation_file_name(index, seed));
            save_png(image, &path)?;
            written.push(path);
        }
    }

    if options.preview {
        let preview = compose_mosaic(&images, config.preview_scale, rng)?;
        let path = directory.join(preview_file_name(seed));
        save_png(&preview, &path)?;
        written.push(path);
    }

    for path in &written {
        info!(path = %path.display(), "Exported image");
    }

    Ok(written)
}
