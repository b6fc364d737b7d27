//! Full-width plank bands with random default or darker shading

use crate::generation::layer::Layer;
use crate::io::configuration::DEFAULT_PLANK_PROBABILITY;
use crate::math::random::SeededRandom;
use crate::render::palette::Palette;

/// Draw one band per plank row, top to bottom
///
/// Each band draws one value from `rnd`: below [`DEFAULT_PLANK_PROBABILITY`] it
/// takes the default plank color, otherwise the darker one. The last band may
/// extend past `height`; the canvas clips it.
pub fn draw_planks(
    height: f64,
    width: f64,
    plank_spacing: f64,
    palette: &Palette,
    rnd: &mut SeededRandom,
) -> Layer {
    let mut layer = Layer::new();
    let mut y = 0.0;

    while y < height {
        let color = if rnd.next_f64() < DEFAULT_PLANK_PROBABILITY {
            palette.plank
        } else {
            palette.darker_plank
        };
        layer.rect(0.0, y, width, plank_spacing, color);
        y += plank_spacing;
    }

    layer
}
