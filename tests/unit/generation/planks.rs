//! Tests for plank band drawing

#[cfg(test)]
mod tests {
    use plankfloor::generation::layer::DrawCommand;
    use plankfloor::generation::planks::draw_planks;
    use plankfloor::math::random::SeededRandom;
    use plankfloor::render::palette::{Color, Palette};

    fn palette() -> Palette {
        Palette::generated(Color::new(0x96, 0x70, 0x4a), -2)
    }

    fn band_tops(commands: &[DrawCommand]) -> Vec<f64> {
        commands
            .iter()
            .filter_map(|command| match *command {
                DrawCommand::Rect { y, .. } => Some(y),
                DrawCommand::Line { .. } => None,
            })
            .collect()
    }

    // Tests the band colors follow the seeded stream
    // Verified by flipping the probability comparison
    #[test]
    fn test_band_colors_for_seed() {
        let palette = palette();
        let mut rnd = SeededRandom::new("AAAAAAAAAA");
        let layer = draw_planks(32.0, 32.0, 4.0, &palette, &mut rnd);

        let dark = palette.darker_plank;
        let wood = palette.plank;
        let colors: Vec<_> = layer.commands().iter().map(DrawCommand::color).collect();
        assert_eq!(colors, vec![dark, wood, dark, wood, dark, dark, dark, wood]);
        assert_eq!(rnd.draws(), 8);
    }

    // Tests every band spans the full width at the plank spacing
    // Verified by using the width as band height
    #[test]
    fn test_band_geometry() {
        let mut rnd = SeededRandom::new("geometry");
        let layer = draw_planks(32.0, 48.0, 4.0, &palette(), &mut rnd);

        assert_eq!(layer.len(), 8);
        for (index, command) in layer.commands().iter().enumerate() {
            match *command {
                DrawCommand::Rect {
                    x,
                    y,
                    width,
                    height,
                    ..
                } => {
                    assert_eq!(x, 0.0);
                    assert_eq!(y, 4.0 * index as f64);
                    assert_eq!(width, 48.0);
                    assert_eq!(height, 4.0);
                }
                DrawCommand::Line { .. } => unreachable!("planks only draw rectangles"),
            }
        }
    }

    // Tests fractional spacing accumulates row by row
    // Verified by computing rows as index times spacing
    #[test]
    fn test_fractional_spacing() {
        let mut rnd = SeededRandom::new("AAAAAAAAAA");
        let layer = draw_planks(10.0, 10.0, 10.0 / 3.0, &palette(), &mut rnd);

        assert_eq!(
            band_tops(layer.commands()),
            vec![0.0, 3.333_333_333_333_333_5, 6.666_666_666_666_667]
        );
        assert_eq!(rnd.draws(), 3);
    }

    // Tests a spacing taller than the tile still yields one band
    // Verified by requiring the band to fit inside the tile
    #[test]
    fn test_single_oversized_band() {
        let mut rnd = SeededRandom::new("tall");
        let layer = draw_planks(4.0, 4.0, 6.0, &palette(), &mut rnd);
        assert_eq!(layer.len(), 1);
    }
}
