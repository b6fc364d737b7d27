/// Tile stacking and the seed-to-floor pipeline
pub mod composer;
/// T-marks on outline intersections
pub mod intersections;
/// Draw command lists
pub mod layer;
/// Horizontal and vertical outlines
pub mod outlines;
/// Plank bands
pub mod planks;

pub use composer::{GenerationResult, TileComposer, TileResult, generate};
pub use layer::{DrawCommand, Layer};
