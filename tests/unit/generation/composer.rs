//! Tests for tile stacking and the generation pipeline

#[cfg(test)]
mod tests {
    use plankfloor::generation::composer::{TileComposer, compose_tile, generate};
    use plankfloor::generation::layer::{DrawCommand, Layer};
    use plankfloor::math::geometry::Point;
    use plankfloor::render::palette::Color;
    use plankfloor::{FloorConfig, FloorError};

    const A: Color = Color::new(1, 1, 1);
    const B: Color = Color::new(2, 2, 2);
    const C: Color = Color::new(3, 3, 3);
    const D: Color = Color::new(4, 4, 4);

    fn single(color: Color) -> Layer {
        let mut layer = Layer::new();
        layer.line(Point::new(0.0, 0.5), Point::new(1.0, 0.5), color);
        layer
    }

    // Tests tiles stack base, vertical outlines, then marks
    // Verified by placing marks under the outlines
    #[test]
    fn test_compose_tile_order() {
        let planks = single(A);
        let horizontal = single(B);
        let tile = compose_tile(&[&planks, &horizontal], single(C), single(D));

        let colors: Vec<Color> = tile.layer().commands().iter().map(DrawCommand::color).collect();
        assert_eq!(colors, vec![A, B, C, D]);
        assert_eq!(tile.vertical_outlines(), &single(C));
        assert_eq!(tile.intersections(), &single(D));
    }

    // Tests the composer produces the main tile plus each variation
    // Verified by generating variations only
    #[test]
    fn test_tile_count() {
        let config = FloorConfig::default().with_variations(3);
        let result = generate(&config, "count");

        assert!(result.is_ok());
        if let Ok(result) = result {
            assert_eq!(result.tiles().len(), 4);
            assert_eq!(result.variations().len(), 3);
            assert_eq!(result.main_tile(), result.tiles().first());
            assert_eq!(result.seed(), "count");
        }
    }

    // Tests every tile starts with the shared planks and horizontal outlines
    // Verified by redrawing planks per tile
    #[test]
    fn test_tiles_share_base() {
        let config = FloorConfig::default().with_variations(2);
        let Ok(result) = generate(&config, "share") else {
            unreachable!("default configuration is valid");
        };

        let base = Layer::stack([result.planks(), result.horizontal_outlines()]);
        for tile in result.tiles() {
            assert_eq!(tile.layer().commands().get(..base.len()), Some(base.commands()));
            assert_eq!(tile.vertical_outlines().len(), 8);
        }
    }

    // Tests tiles drawn one at a time match a full run
    // Verified by reseeding the stream per tile
    #[test]
    fn test_manual_tiles_match_finish() {
        let config = FloorConfig::default();
        let Ok(mut composer) = TileComposer::new(&config, "step") else {
            unreachable!("default configuration is valid");
        };
        let first = composer.next_tile();
        let second = composer.next_tile();

        let Ok(result) = generate(&config, "step") else {
            unreachable!("default configuration is valid");
        };
        assert_eq!(result.tiles(), &[first, second]);
    }

    // Tests zero variations still yields the main tile
    // Verified by ranging variations exclusively
    #[test]
    fn test_zero_variations() {
        let config = FloorConfig::default().with_variations(0);
        let Ok(result) = generate(&config, "solo") else {
            unreachable!("configuration is valid");
        };
        assert_eq!(result.tiles().len(), 1);
        assert!(result.variations().is_empty());
    }

    // Tests invalid configurations are rejected before drawing
    // Verified by dividing by the plank count unchecked
    #[test]
    fn test_invalid_config_rejected() {
        let config = FloorConfig {
            plank_count: 0,
            ..FloorConfig::default()
        };
        assert!(matches!(
            generate(&config, "zero"),
            Err(FloorError::InvalidParameter {
                parameter: "plank_count",
                ..
            })
        ));
        assert!(TileComposer::new(&config, "zero").is_err());
    }
}
