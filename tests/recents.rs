#[cfg(test)]
mod tests {
    use liftlog::libs::recents::{Recents, MAX_RECENTS};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context redirecting the data directory into a tempdir.
    struct RecentsTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for RecentsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            RecentsTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(RecentsTestContext)]
    #[test]
    fn test_missing_history_loads_empty(_ctx: &mut RecentsTestContext) {
        let recents = Recents::load();
        assert!(recents.is_empty());
    }

    #[test_context(RecentsTestContext)]
    #[test]
    fn test_recency_rule(_ctx: &mut RecentsTestContext) {
        let mut recents = Recents::load();
        for duration in [60, 120, 60, 180, 240, 300, 360] {
            recents.record(duration);
        }

        // The second 60 moved the existing entry to the front instead of
        // duplicating, which left 120 as the oldest entry to be evicted.
        assert_eq!(recents.items(), &[360, 300, 240, 180, 60]);
        assert_eq!(recents.items().len(), MAX_RECENTS);
    }

    #[test_context(RecentsTestContext)]
    #[test]
    fn test_duplicate_moves_to_front(_ctx: &mut RecentsTestContext) {
        let mut recents = Recents::load();
        recents.record(60);
        recents.record(120);
        recents.record(60);

        assert_eq!(recents.items(), &[60, 120]);
    }

    #[test_context(RecentsTestContext)]
    #[test]
    fn test_zero_duration_is_skipped(_ctx: &mut RecentsTestContext) {
        let mut recents = Recents::load();
        recents.record(0);

        assert!(recents.is_empty());
    }

    #[test_context(RecentsTestContext)]
    #[test]
    fn test_history_persists_across_loads(_ctx: &mut RecentsTestContext) {
        let mut recents = Recents::load();
        recents.record(90);
        recents.record(180);

        let reloaded = Recents::load();
        assert_eq!(reloaded.items(), &[180, 90]);
    }

    #[test_context(RecentsTestContext)]
    #[test]
    fn test_corrupt_history_degrades_to_empty(_ctx: &mut RecentsTestContext) {
        let path = liftlog::libs::data_storage::DataStorage::new()
            .get_path(liftlog::libs::recents::RECENTS_FILE_NAME)
            .unwrap();
        std::fs::write(&path, "not json at all").unwrap();

        let recents = Recents::load();
        assert!(recents.is_empty());
    }
}
