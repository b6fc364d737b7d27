//! Tests for run progress tracking

#[cfg(test)]
mod tests {
    use plankfloor::io::progress::ProgressManager;

    // Tests a single floor run shows no bar
    // Verified by always creating a bar
    #[test]
    fn test_single_floor_hidden() {
        let mut manager = ProgressManager::new();
        manager.initialize(1);

        assert!(!manager.is_visible());
        assert_eq!(manager.total(), 1);
    }

    // Tests completed floors are counted against the total
    // Verified by counting started floors instead
    #[test]
    fn test_counts_completed_floors() {
        let mut manager = ProgressManager::default();
        manager.initialize(3);
        assert!(manager.is_visible());

        for seed in ["a", "b"] {
            manager.start_floor(seed);
            manager.complete_floor();
        }
        manager.finish();

        assert_eq!(manager.completed(), 2);
        assert_eq!(manager.total(), 3);
    }

    // Tests initializing again resets the count
    // Verified by accumulating across runs
    #[test]
    fn test_reinitialize_resets() {
        let mut manager = ProgressManager::new();
        manager.initialize(1);
        manager.complete_floor();
        manager.initialize(2);
        assert_eq!(manager.completed(), 0);
    }
}
