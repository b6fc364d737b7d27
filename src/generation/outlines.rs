//! Horizontal and vertical delimitation lines between planks
//!
//! Horizontal outlines run along the bottom pixel row of every plank band.
//! Vertical outlines cut each band once at a random column, kept at least a
//! minimum gap away from the cut in the band above so two cuts never merge.

use crate::generation::layer::Layer;
use crate::math::geometry::{Intersection, Point};
use crate::math::random::SeededRandom;
use crate::render::palette::Color;

/// Offset centering a 1-px stroke on a pixel row or column
pub const PIXEL_CENTER: f64 = 0.5;

/// Draw one horizontal line along the last pixel row of each plank band
///
/// Consumes no randomness.
pub fn draw_horizontal_outlines(height: f64, width: f64, plank_spacing: f64, color: Color) -> Layer {
    let mut layer = Layer::new();
    let mut y = 0.0;

    while y < height {
        y += plank_spacing - 1.0;
        layer.line(
            Point::new(0.0, y + PIXEL_CENTER),
            Point::new(width, y + PIXEL_CENTER),
            color,
        );
        y += 1.0;
    }

    layer
}

/// Keep `x` at least `gap` away from the previous row's outline
///
/// A pick within `gap` of `previous` is pushed to exactly `gap` on its own side.
/// A pick landing exactly on `previous` has no side, so one extra value is
/// drawn from `rnd` to choose it.
pub fn adjust_outline_x(x: i64, previous: Option<i64>, gap: i64, rnd: &mut SeededRandom) -> i64 {
    let Some(previous) = previous else {
        return x;
    };

    let diff = (previous - x).abs();
    if diff > gap {
        return x;
    }

    let push_left = if diff == 0 {
        (2.0 * rnd.next_f64()).floor() as i64 == 1
    } else {
        x < previous
    };

    if push_left {
        previous - gap
    } else {
        previous + gap
    }
}

/// Draw one vertical outline per plank band and return its intersections
///
/// Each band picks a column in `[gap, width - 1 - gap]` so that adjustment never
/// leaves the tile. The segment starts on the horizontal outline above the band
/// and ends on the one below it; its endpoints are returned in band order.
pub fn draw_vertical_outlines(
    height: f64,
    width: f64,
    plank_spacing: f64,
    gap: i64,
    color: Color,
    rnd: &mut SeededRandom,
) -> (Layer, Vec<Intersection>) {
    let mut layer = Layer::new();
    let mut intersections = Vec::new();
    let mut previous = None;
    let mut y = 0.0;

    let min = gap;
    let max = width as i64 - 1 - gap;

    while y < height {
        let picked = rnd.next_int_inclusive(min, max);
        let x = adjust_outline_x(picked, previous, gap, rnd);
        previous = Some(x);

        let column = x as f64 + PIXEL_CENTER;
        let top = Point::new(column, y - 1.0);
        let bottom = Point::new(column, y + (plank_spacing - 1.0));
        layer.line(top, bottom, color);
        intersections.push(Intersection::new(top, bottom));

        y += plank_spacing;
    }

    (layer, intersections)
}
