//! Ordered draw commands making up one layer of a tile

use crate::math::geometry::Point;
use crate::render::palette::Color;

/// A single drawing primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Filled axis-aligned rectangle
    Rect {
        /// Left edge
        x: f64,
        /// Top edge
        y: f64,
        /// Horizontal extent
        width: f64,
        /// Vertical extent
        height: f64,
        /// Fill color
        color: Color,
    },
    /// One pixel wide stroke between two points
    Line {
        /// First endpoint
        start: Point,
        /// Second endpoint
        end: Point,
        /// Stroke color
        color: Color,
    },
}

impl DrawCommand {
    /// Color the command paints with
    pub const fn color(&self) -> Color {
        match *self {
            Self::Rect { color, .. } | Self::Line { color, .. } => color,
        }
    }
}

/// Ordered collection of draw commands; later commands paint over earlier ones
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layer {
    commands: Vec<DrawCommand>,
}

impl Layer {
    /// Create an empty layer
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Append a filled rectangle
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    /// Append a line
    pub fn line(&mut self, start: Point, end: Point, color: Color) {
        self.commands.push(DrawCommand::Line { start, end, color });
    }

    /// Append a "T": the bar from `left` to `right`, then the stem from `center` to `tip`
    pub fn letter_t(&mut self, left: Point, right: Point, center: Point, tip: Point, color: Color) {
        self.line(left, right, color);
        self.line(center, tip, color);
    }

    /// Commands in draw order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the layer draws nothing
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Concatenate layers bottom to top into a single layer
    pub fn stack<'a>(layers: impl IntoIterator<Item = &'a Self>) -> Self {
        let commands = layers
            .into_iter()
            .flat_map(|layer| layer.commands.iter().copied())
            .collect();
        Self { commands }
    }
}
