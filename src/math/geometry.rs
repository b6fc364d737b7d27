//! Canvas coordinates and outline crossings

/// Canvas coordinate in pixels
///
/// Integer pixel edges sit on whole numbers, so a 1-px stroke centered on a
/// `.5` coordinate covers exactly one pixel row or column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point shifted by the given deltas
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Endpoints of one vertical outline segment, ordered top to bottom
///
/// The top endpoint lies on the horizontal outline above the plank row and the
/// bottom endpoint on the one below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Upper endpoint
    pub top: Point,
    /// Lower endpoint
    pub bottom: Point,
}

impl Intersection {
    /// Create an intersection from its two endpoints
    pub const fn new(top: Point, bottom: Point) -> Self {
        Self { top, bottom }
    }
}
