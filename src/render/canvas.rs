//! Rasterization of draw commands onto an RGBA image
//!
//! Rectangles and axis-aligned strokes are rasterized by exact pixel coverage
//! and composited in draw order. A 1-px stroke centered on a `.5` coordinate
//! therefore covers a single pixel row or column at full opacity, while one on
//! a whole coordinate bleeds half into each neighbour.

use crate::generation::layer::{DrawCommand, Layer};
use crate::math::geometry::Point;
use crate::render::palette::Color;
use image::{Rgba, RgbaImage};

/// Stroke width of every line
pub const LINE_WIDTH: f64 = 1.0;

/// Transparent drawing surface of a fixed size
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Paint a single command over the current contents
    pub fn draw(&mut self, command: &DrawCommand) {
        match *command {
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                color,
            } => self.fill_area(x, y, x + width, y + height, color),
            DrawCommand::Line { start, end, color } => self.stroke(start, end, color),
        }
    }

    /// Paint every command of `layer` in order
    pub fn draw_layer(&mut self, layer: &Layer) {
        for command in layer.commands() {
            self.draw(command);
        }
    }

    /// Rendered pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the canvas, keeping its pixels
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    #[allow(clippy::float_cmp)]
    fn stroke(&mut self, start: Point, end: Point, color: Color) {
        let half = LINE_WIDTH / 2.0;
        if start.y == end.y {
            let (x0, x1) = (start.x.min(end.x), start.x.max(end.x));
            self.fill_area(x0, start.y - half, x1, start.y + half, color);
        } else if start.x == end.x {
            let (y0, y1) = (start.y.min(end.y), start.y.max(end.y));
            self.fill_area(start.x - half, y0, start.x + half, y1, color);
        } else {
            self.stroke_diagonal(start, end, color);
        }
    }

    // Steps along the major axis and paints the pixel under each sample
    #[allow(clippy::suboptimal_flops)]
    fn stroke_diagonal(&mut self, start: Point, end: Point, color: Color) {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let steps = f64::from(dx.abs().max(dy.abs()).ceil().max(1.0) as u32);

        let mut step = 0.0;
        while step <= steps {
            let x = (start.x + dx * step / steps).floor();
            let y = (start.y + dy * step / steps).floor();
            self.fill_area(x, y, x + 1.0, y + 1.0, color);
            step += 1.0;
        }
    }

    // Composites `color` over every pixel intersecting [x0, x1) x [y0, y1),
    // weighted by the covered fraction of the pixel
    fn fill_area(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color) {
        let width = f64::from(self.width());
        let height = f64::from(self.height());
        let left = x0.max(0.0);
        let top = y0.max(0.0);
        let right = x1.min(width);
        let bottom = y1.min(height);

        if left >= right || top >= bottom {
            return;
        }

        for py in (top.floor() as u32)..(bottom.ceil() as u32) {
            let row_cover = overlap(top, bottom, f64::from(py));
            for px in (left.floor() as u32)..(right.ceil() as u32) {
                let coverage = row_cover * overlap(left, right, f64::from(px));
                if coverage > 0.0 {
                    if let Some(pixel) = self.image.get_pixel_mut_checked(px, py) {
                        blend(pixel, color, coverage);
                    }
                }
            }
        }
    }
}

// Length of [start, end) falling inside the unit cell [cell, cell + 1)
fn overlap(start: f64, end: f64, cell: f64) -> f64 {
    (end.min(cell + 1.0) - start.max(cell)).clamp(0.0, 1.0)
}

// Source-over compositing of an opaque color at the given coverage
fn blend(pixel: &mut Rgba<u8>, color: Color, coverage: f64) {
    let src_alpha = coverage.clamp(0.0, 1.0);
    let dst_alpha = f64::from(pixel.0[3]) / 255.0;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);

    if out_alpha <= 0.0 {
        return;
    }

    let mix = |src: u8, dst: u8| -> u8 {
        let value = (f64::from(src) * src_alpha + f64::from(dst) * dst_alpha * (1.0 - src_alpha))
            / out_alpha;
        value.round().clamp(0.0, 255.0) as u8
    };

    let [r, g, b, _] = pixel.0;
    *pixel = Rgba([
        mix(color.r, r),
        mix(color.g, g),
        mix(color.b, b),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ]);
}

/// Render layers bottom to top onto a transparent image of the given size
pub fn render_layers<'a>(
    layers: impl IntoIterator<Item = &'a Layer>,
    width: u32,
    height: u32,
) -> RgbaImage {
    let mut canvas = Canvas::new(width, height);
    for layer in layers {
        canvas.draw_layer(layer);
    }
    canvas.into_image()
}
