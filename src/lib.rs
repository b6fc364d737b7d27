//! Seeded procedural generation of tileable pixel-art wood plank floors
//!
//! A seed string drives a single deterministic random stream through a layered
//! drawing pipeline: plank bands, horizontal outlines, vertical outlines kept
//! apart from their neighbours, and T-shaped marks darkening a subset of the
//! outline intersections. Variations reuse the plank layer with fresh outlines,
//! and a preview mosaic tiles the results across a larger image.

#![forbid(unsafe_code)]

/// Layer generation and tile composition
pub mod generation;
/// Configuration, errors, command line and image output
pub mod io;
/// Geometry and the seeded random stream
pub mod math;
/// Rasterization, palettes and the preview mosaic
pub mod render;

pub use generation::{GenerationResult, TileResult, generate};
pub use io::configuration::FloorConfig;
pub use io::error::{FloorError, Result};
