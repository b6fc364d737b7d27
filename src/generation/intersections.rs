//! T-shaped darkening marks on outline intersections
//!
//! About half of the intersections receive a "T": a short bar along the
//! horizontal outline and a stem running into the plank. Marks on the same
//! horizontal outline that are close enough are joined into one continuous bar.

use crate::generation::layer::Layer;
use crate::io::configuration::DECORATION_PROBABILITY;
use crate::math::geometry::{Intersection, Point};
use crate::math::random::SeededRandom;
use crate::render::palette::Color;

/// Spread ranges for T-marks, derived from the tile geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadLimits {
    /// Shortest stem
    pub min_vertical: f64,
    /// Upper bound of the stem length
    pub max_vertical: f64,
    /// Shortest bar branch
    pub min_horizontal: f64,
    /// Upper bound of a bar branch
    pub max_horizontal: f64,
}

impl SpreadLimits {
    /// Stems reach at most half a plank, bar branches at most half the outline gap
    pub fn new(plank_spacing: f64, outline_gap: f64) -> Self {
        let max_vertical = (plank_spacing / 2.0).floor();
        let max_horizontal = outline_gap / 2.0;
        Self {
            min_vertical: (max_vertical / 4.0).floor(),
            max_vertical,
            min_horizontal: (max_horizontal / 3.0).floor(),
            max_horizontal,
        }
    }
}

/// Which previously decorated point, if any, the current mark joins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    /// No neighbour on this row within reach
    None,
    /// The previous mark lies to the left
    Left,
    /// The previous mark lies to the right
    Right,
}

/// Decide whether `point` joins the previously decorated point
///
/// Both must sit on the same horizontal outline and be at most
/// `connect_distance` apart.
#[allow(clippy::float_cmp)]
pub fn connection_to(point: Point, previous: Option<Point>, connect_distance: f64) -> Connection {
    let Some(previous) = previous else {
        return Connection::None;
    };

    if previous.y != point.y {
        return Connection::None;
    }

    let diff = point.x - previous.x;
    if diff.abs() > connect_distance {
        Connection::None
    } else if diff > 0.0 {
        Connection::Left
    } else {
        Connection::Right
    }
}

/// Geometry of one T-mark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TMark {
    /// Left end of the bar
    pub left: Point,
    /// Right end of the bar
    pub right: Point,
    /// Intersection endpoint the stem starts from
    pub center: Point,
    /// End of the stem inside the plank
    pub tip: Point,
}

fn vertical_spread(
    intersection: &Intersection,
    limits: &SpreadLimits,
    rnd: &mut SeededRandom,
) -> (Point, Point) {
    let darken_top = rnd.next_f64() > 0.5;
    let direction = if darken_top { 1.0 } else { -1.0 };
    let spread = rnd.next_int(limits.min_vertical, limits.max_vertical) as f64 * direction;
    let center = if darken_top {
        intersection.top
    } else {
        intersection.bottom
    };
    (center, center.offset(0.0, spread))
}

fn horizontal_spread(
    center: Point,
    previous: Option<Point>,
    connect_distance: f64,
    limits: &SpreadLimits,
    rnd: &mut SeededRandom,
) -> (Point, Point) {
    let mut left_spread = rnd.next_int(limits.min_horizontal, limits.max_horizontal) as f64;
    let mut right_spread = rnd.next_int(limits.min_horizontal, limits.max_horizontal) as f64;

    let reach = previous.map_or(0.0, |p| (p.x - center.x).abs());
    match connection_to(center, previous, connect_distance) {
        Connection::Left => left_spread = reach,
        Connection::Right => right_spread = reach,
        Connection::None => {}
    }

    // The bar runs along the pixel row of the horizontal outline
    let bar = center.offset(-0.5, 0.5);
    (bar.offset(-left_spread, 0.0), bar.offset(right_spread, 0.0))
}

/// Pick the T-marks for `intersections`, consuming randomness in a fixed order
///
/// Per intersection: one draw for whether it is decorated, then for decorated
/// ones the endpoint choice, the stem length, and both bar branches.
pub fn plan_marks(
    intersections: &[Intersection],
    connect_distance: f64,
    limits: &SpreadLimits,
    rnd: &mut SeededRandom,
) -> Vec<TMark> {
    let mut marks = Vec::new();
    let mut previous: Option<Point> = None;

    for intersection in intersections {
        if rnd.next_f64() >= DECORATION_PROBABILITY {
            continue;
        }

        let (center, tip) = vertical_spread(intersection, limits, rnd);
        let (left, right) = horizontal_spread(center, previous, connect_distance, limits, rnd);
        previous = Some(center);

        marks.push(TMark {
            left,
            right,
            center,
            tip,
        });
    }

    marks
}

/// Draw T-marks over a subset of `intersections`
///
/// When `enabled` is false nothing is drawn, but the same values are still
/// drawn from `rnd` so that everything generated afterwards is unaffected by
/// the flag.
pub fn draw_intersections(
    intersections: &[Intersection],
    connect_distance: f64,
    limits: &SpreadLimits,
    color: Color,
    enabled: bool,
    rnd: &mut SeededRandom,
) -> Layer {
    let marks = plan_marks(intersections, connect_distance, limits, rnd);
    let mut layer = Layer::new();

    if enabled {
        for mark in marks {
            layer.letter_t(mark.left, mark.right, mark.center, mark.tip, color);
        }
    }

    layer
}
