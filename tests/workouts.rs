#[cfg(test)]
mod tests {
    use liftlog::db::workouts::Workouts;
    use liftlog::libs::workout::Exercise;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context giving each test its own database in a tempdir.
    struct WorkoutsTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for WorkoutsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            WorkoutsTestContext { _temp_dir: temp_dir }
        }
    }

    fn bench_press() -> Exercise {
        Exercise::new("Bench Press", 5, 3, 185.0)
    }

    #[test_context(WorkoutsTestContext)]
    #[test]
    fn test_no_open_workout_initially(_ctx: &mut WorkoutsTestContext) {
        let workouts = Workouts::new().unwrap();
        assert!(workouts.current().unwrap().is_none());
        assert!(workouts.fetch_completed().unwrap().is_empty());
    }

    #[test_context(WorkoutsTestContext)]
    #[test]
    fn test_adding_an_exercise_opens_a_workout(_ctx: &mut WorkoutsTestContext) {
        let workouts = Workouts::new().unwrap();
        workouts.add_exercise(&bench_press()).unwrap();

        let current = workouts.current().unwrap().expect("a workout should be open");
        assert!(current.is_open());
        assert_eq!(current.exercises.len(), 1);
        assert_eq!(current.exercises[0].name, "Bench Press");
        assert_eq!(current.exercises[0].reps, 5);
        assert_eq!(current.exercises[0].weight, 185.0);
    }

    #[test_context(WorkoutsTestContext)]
    #[test]
    fn test_exercises_accumulate_in_one_open_workout(_ctx: &mut WorkoutsTestContext) {
        let workouts = Workouts::new().unwrap();
        let first_id = workouts.add_exercise(&bench_press()).unwrap();
        let second_id = workouts.add_exercise(&Exercise::new("Squat", 5, 5, 225.0)).unwrap();

        assert_eq!(first_id, second_id);
        let current = workouts.current().unwrap().unwrap();
        assert_eq!(current.exercises.len(), 2);
    }

    #[test_context(WorkoutsTestContext)]
    #[test]
    fn test_completing_a_workout_moves_it_to_history(_ctx: &mut WorkoutsTestContext) {
        let workouts = Workouts::new().unwrap();
        workouts.add_exercise(&bench_press()).unwrap();
        workouts.add_exercise(&Exercise::new("Deadlift", 3, 2, 315.0)).unwrap();

        let completed = workouts.complete_current().unwrap();
        assert_eq!(completed, Some(2));

        assert!(workouts.current().unwrap().is_none());
        let history = workouts.fetch_completed().unwrap();
        assert_eq!(history.len(), 1);
        assert!(!history[0].is_open());
        assert_eq!(history[0].exercises.len(), 2);
    }

    #[test_context(WorkoutsTestContext)]
    #[test]
    fn test_completing_without_exercises_is_refused(_ctx: &mut WorkoutsTestContext) {
        let workouts = Workouts::new().unwrap();
        assert_eq!(workouts.complete_current().unwrap(), None);
    }

    #[test_context(WorkoutsTestContext)]
    #[test]
    fn test_sessions_after_completion_are_separate(_ctx: &mut WorkoutsTestContext) {
        let workouts = Workouts::new().unwrap();
        let first = workouts.add_exercise(&bench_press()).unwrap();
        workouts.complete_current().unwrap();

        let second = workouts.add_exercise(&Exercise::new("Row", 8, 4, 135.0)).unwrap();
        assert_ne!(first, second);

        assert_eq!(workouts.fetch_completed().unwrap().len(), 1);
        assert_eq!(workouts.current().unwrap().unwrap().exercises.len(), 1);
    }

    #[test_context(WorkoutsTestContext)]
    #[test]
    fn test_clear_removes_everything(_ctx: &mut WorkoutsTestContext) {
        let workouts = Workouts::new().unwrap();
        workouts.add_exercise(&bench_press()).unwrap();
        workouts.complete_current().unwrap();
        workouts.add_exercise(&Exercise::new("Squat", 5, 5, 225.0)).unwrap();

        let deleted = workouts.clear().unwrap();
        assert_eq!(deleted, 2);
        assert!(workouts.current().unwrap().is_none());
        assert!(workouts.fetch_completed().unwrap().is_empty());
    }
}
