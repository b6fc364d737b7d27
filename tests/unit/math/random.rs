//! Tests for the string-seeded random stream and seed generation

#[cfg(test)]
mod tests {
    use plankfloor::io::configuration::{SEED_ALPHABET, SEED_LENGTH};
    use plankfloor::math::random::{SeededRandom, random_seed};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Tests the stream matches published reference values for a known seed
    // Verified by skipping the RC4 warm-up drop
    #[test]
    fn test_reference_values_for_known_seed() {
        let mut rnd = SeededRandom::new("hello.");

        assert_eq!(rnd.next_f64().to_bits(), 0.928_257_879_579_245_4_f64.to_bits());
        assert_eq!(rnd.next_f64().to_bits(), 0.375_256_976_864_678_4_f64.to_bits());
    }

    // Tests the default scenario seed produces its recorded opening values
    // Verified by swapping key mixing order
    #[test]
    fn test_scenario_seed_values() {
        let mut rnd = SeededRandom::new("AAAAAAAAAA");
        let expected = [
            0.795_159_322_735_156_2,
            0.095_946_723_075_951_48,
            0.789_452_911_275_677_8,
            0.036_108_804_364_670_2,
        ];

        for value in expected {
            assert_eq!(rnd.next_f64().to_bits(), f64::to_bits(value));
        }
    }

    // Tests an empty seed still yields a usable stream
    // Verified by removing the empty key fallback
    #[test]
    fn test_empty_seed() {
        let mut rnd = SeededRandom::new("");
        assert_eq!(rnd.next_f64().to_bits(), 0.231_440_082_151_798_81_f64.to_bits());
    }

    // Tests identical seeds give identical streams and different seeds diverge
    // Verified by mixing a constant key
    #[test]
    fn test_determinism() {
        let mut a = SeededRandom::new("oak");
        let mut b = SeededRandom::new("oak");
        let mut c = SeededRandom::new("pine");

        let first: Vec<u64> = (0..500).map(|_| a.next_f64().to_bits()).collect();
        let second: Vec<u64> = (0..500).map(|_| b.next_f64().to_bits()).collect();
        let other: Vec<u64> = (0..500).map(|_| c.next_f64().to_bits()).collect();

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    // Tests values stay in the unit interval
    // Verified by dropping the overflow normalisation loop
    #[test]
    fn test_values_in_unit_interval() {
        let mut rnd = SeededRandom::new("range");
        for _ in 0..10_000 {
            let value = rnd.next_f64();
            assert!((0.0..1.0).contains(&value), "{value} outside [0, 1)");
        }
    }

    // Tests the half-open integer helper never reaches its upper bound
    // Verified by using ceil instead of floor
    #[test]
    fn test_next_int_half_open() {
        let mut rnd = SeededRandom::new("ints");
        for _ in 0..2_000 {
            let value = rnd.next_int(2.0, 7.0);
            assert!((2..7).contains(&value));
        }
    }

    // Tests a fractional upper bound still floors into range
    // Verified by rounding instead of flooring
    #[test]
    fn test_next_int_fractional_bound() {
        let mut rnd = SeededRandom::new("fraction");
        for _ in 0..2_000 {
            let value = rnd.next_int(0.0, 2.5);
            assert!((0..=2).contains(&value));
        }
    }

    // Tests the inclusive helper reaches both ends of its range
    // Verified by removing the +1 span adjustment
    #[test]
    fn test_next_int_inclusive_hits_both_bounds() {
        let mut rnd = SeededRandom::new("inclusive");
        let values: Vec<i64> = (0..2_000).map(|_| rnd.next_int_inclusive(5, 8)).collect();

        assert!(values.iter().all(|v| (5..=8).contains(v)));
        assert!(values.contains(&5));
        assert!(values.contains(&8));
    }

    // Tests every helper counts as exactly one draw
    // Verified by counting draws inside the float assembly loop
    #[test]
    fn test_draw_counter() {
        let mut rnd = SeededRandom::new("count");
        assert_eq!(rnd.draws(), 0);

        rnd.next_f64();
        rnd.next_int(0.0, 4.0);
        rnd.next_int_inclusive(0, 4);

        assert_eq!(rnd.draws(), 3);
    }

    // Tests generated seeds have the expected length and alphabet
    // Verified by truncating the alphabet
    #[test]
    fn test_random_seed_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let seed = random_seed(SEED_LENGTH, &mut rng);

        assert_eq!(seed.len(), SEED_LENGTH);
        assert!(seed.chars().all(|c| SEED_ALPHABET.contains(c)));
        assert!(seed.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    // Tests generated seeds vary between calls
    // Verified by reseeding the generator on every call
    #[test]
    fn test_random_seed_varies() {
        let mut rng = StdRng::seed_from_u64(11);
        let first = random_seed(SEED_LENGTH, &mut rng);
        let second = random_seed(SEED_LENGTH, &mut rng);
        assert_ne!(first, second);
    }
}
