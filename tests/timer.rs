#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use liftlog::libs::recents::Recents;
    use liftlog::libs::timer::{Notifier, RestTimer, TimerEvent, TimerState};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every notifier interaction so tests can assert on scheduling
    /// side effects without a real notification service.
    #[derive(Default)]
    struct NotifierLog {
        scheduled: Vec<u64>,
        cancels: usize,
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier(Rc<RefCell<NotifierLog>>);

    impl Notifier for RecordingNotifier {
        fn schedule(&mut self, delay_secs: u64) {
            self.0.borrow_mut().scheduled.push(delay_secs);
        }

        fn cancel(&mut self) {
            self.0.borrow_mut().cancels += 1;
        }
    }

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 2, 10, 0, 0).unwrap()
    }

    fn test_timer() -> (RestTimer<RecordingNotifier>, RecordingNotifier) {
        let notifier = RecordingNotifier::default();
        let timer = RestTimer::new(notifier.clone(), Recents::ephemeral());
        (timer, notifier)
    }

    #[test]
    fn test_start_with_zero_duration_is_ignored() {
        let (mut timer, notifier) = test_timer();
        timer.configure(0, 0, 0);

        timer.start(base_time());

        assert_eq!(timer.state(), TimerState::Idle);
        assert!(notifier.0.borrow().scheduled.is_empty());
    }

    #[test]
    fn test_countdown_expires_exactly_once() {
        let (mut timer, notifier) = test_timer();
        timer.configure(0, 2, 5); // 125 seconds
        let t0 = base_time();

        timer.start(t0);
        assert_eq!(notifier.0.borrow().scheduled, vec![125]);

        // Ticks before the end instant change nothing.
        assert_eq!(timer.tick(t0 + Duration::seconds(1)), None);
        assert_eq!(timer.tick(t0 + Duration::seconds(124)), None);

        let expiry = timer.tick(t0 + Duration::seconds(125));
        assert_eq!(expiry, Some(TimerEvent::Expired));
        assert_eq!(timer.state(), TimerState::Expired);
        assert_eq!(timer.progress(t0 + Duration::seconds(125)), 1.0);
        assert_eq!(timer.display(t0 + Duration::seconds(125)), "0:00");
        assert_eq!(timer.recents().items().first(), Some(&125));

        // The transition already happened; later ticks stay silent.
        assert_eq!(timer.tick(t0 + Duration::seconds(200)), None);
    }

    #[test]
    fn test_late_first_tick_still_expires_once() {
        // A suspended process may deliver its first tick long after expiry;
        // absolute end instants make that equivalent to an on-time tick.
        let (mut timer, _) = test_timer();
        timer.configure(0, 0, 30);
        let t0 = base_time();

        timer.start(t0);
        let expiry = timer.tick(t0 + Duration::seconds(3600));

        assert_eq!(expiry, Some(TimerEvent::Expired));
        assert_eq!(timer.recents().items(), &[30]);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let (mut timer, notifier) = test_timer();
        timer.configure(0, 2, 5);
        let t0 = base_time();

        timer.start(t0);
        timer.pause(t0 + Duration::seconds(5));
        let paused_state = timer.state();
        assert_eq!(notifier.0.borrow().cancels, 1);

        // A second pause is a no-op: no state change, no double cancel.
        timer.pause(t0 + Duration::seconds(9));
        assert_eq!(timer.state(), paused_state);
        assert_eq!(notifier.0.borrow().cancels, 1);
    }

    #[test]
    fn test_resume_preserves_captured_remaining() {
        let (mut timer, notifier) = test_timer();
        timer.configure(0, 2, 5);
        let t0 = base_time();

        timer.start(t0);
        timer.pause(t0 + Duration::seconds(5));
        assert_eq!(timer.remaining_seconds(t0 + Duration::seconds(5)), 120);

        // The clock keeps moving while paused; the frozen remaining does not.
        let resume_at = t0 + Duration::seconds(60);
        timer.resume(resume_at);

        assert_eq!(timer.remaining_seconds(resume_at), 120);
        assert_eq!(
            timer.state(),
            TimerState::Running {
                ends_at: resume_at + Duration::seconds(120)
            }
        );
        assert_eq!(notifier.0.borrow().scheduled, vec![125, 120]);
    }

    #[test]
    fn test_resume_with_nothing_remaining_is_a_noop() {
        let (mut timer, notifier) = test_timer();
        timer.configure(0, 0, 10);
        let t0 = base_time();

        timer.start(t0);
        // Pausing at (or past) the end instant freezes remaining at zero.
        timer.pause(t0 + Duration::seconds(10));
        assert_eq!(timer.state(), TimerState::Paused { remaining: Duration::zero() });

        let schedules_before = notifier.0.borrow().scheduled.len();
        timer.resume(t0 + Duration::seconds(11));

        assert_eq!(timer.state(), TimerState::Paused { remaining: Duration::zero() });
        assert_eq!(notifier.0.borrow().scheduled.len(), schedules_before);
    }

    #[test]
    fn test_progress_is_monotonic_while_running() {
        let (mut timer, _) = test_timer();
        timer.configure(0, 1, 40); // 100 seconds
        let t0 = base_time();
        timer.start(t0);

        let mut last = 0.0;
        for offset in [0, 10, 25, 50, 75, 99, 100] {
            let now = t0 + Duration::seconds(offset);
            timer.tick(now);
            let progress = timer.progress(now);
            assert!(progress >= last, "progress went backwards at +{}s: {} < {}", offset, progress, last);
            assert!((0.0..=1.0).contains(&progress));
            last = progress;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_reset_always_returns_to_idle() {
        let (mut timer, notifier) = test_timer();
        timer.configure(0, 5, 0);
        let t0 = base_time();

        timer.start(t0);
        timer.reset();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.progress(t0), 0.0);
        assert_eq!(timer.display(t0), "5:00");
        assert!(notifier.0.borrow().cancels >= 1);

        // Reset from idle is harmless too.
        timer.reset();
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn test_configure_is_ignored_while_running() {
        let (mut timer, _) = test_timer();
        timer.configure(0, 2, 0);
        let t0 = base_time();
        timer.start(t0);

        timer.configure(1, 0, 0);

        assert_eq!(timer.total_seconds(), 120);
        assert_eq!(timer.remaining_seconds(t0 + Duration::seconds(30)), 90);
    }

    #[test]
    fn test_expired_timer_can_be_rearmed() {
        let (mut timer, _) = test_timer();
        timer.configure(0, 0, 30);
        let t0 = base_time();

        timer.start(t0);
        assert_eq!(timer.tick(t0 + Duration::seconds(30)), Some(TimerEvent::Expired));

        // Expired behaves like idle for configuration and start.
        timer.configure(0, 1, 0);
        let t1 = t0 + Duration::seconds(100);
        timer.start(t1);
        assert_eq!(timer.tick(t1 + Duration::seconds(59)), None);
        assert_eq!(timer.tick(t1 + Duration::seconds(60)), Some(TimerEvent::Expired));

        // Both runs are in the history, most recent first.
        assert_eq!(timer.recents().items(), &[60, 30]);
    }

    #[test]
    fn test_idle_display_previews_configuration() {
        let (mut timer, _) = test_timer();
        timer.configure(1, 0, 5);

        assert_eq!(timer.display(base_time()), "1:00:05");
        assert_eq!(timer.progress(base_time()), 0.0);
    }

    #[test]
    fn test_picker_components_are_summed_without_carry_assumptions() {
        // 0h 90m 90s is a legal configuration: the core just sums it.
        let (mut timer, _) = test_timer();
        timer.configure(0, 90, 90);

        assert_eq!(timer.total_seconds(), 5490);
        assert_eq!(timer.display(base_time()), "1:31:30");
    }
}
