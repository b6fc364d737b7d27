//! Turning draw commands into pixels

/// Coverage rasterizer for layers
pub mod canvas;
/// Preview mosaic assembly
pub mod mosaic;
/// Colors and color schemes
pub mod palette;
