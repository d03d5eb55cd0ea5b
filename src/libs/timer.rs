//! Rest-interval countdown state machine.
//!
//! The timer is driven entirely by wall-clock timestamps supplied by the
//! caller: a running countdown stores the absolute instant it ends at, and
//! every observation recomputes the remaining time from that instant. A
//! decrementing tick counter would accumulate drift and break whenever the
//! process is suspended; recomputing from `ends_at` is self-correcting no
//! matter how irregular the tick cadence is.
//!
//! All operations are defined as no-ops on invalid preconditions (starting a
//! zero-length timer, pausing while idle, resuming with nothing left) rather
//! than errors. The only externally visible event is expiry, reported
//! edge-triggered from [`RestTimer::tick`] exactly once per run.

use crate::libs::recents::Recents;
use chrono::{DateTime, Duration, Utc};

/// User-selected countdown duration, decomposed the way the picker edits it.
///
/// The components are summed as-is; nothing here assumes minutes or seconds
/// stay below 60, that is the input surface's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimerConfig {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self { hours, minutes, seconds }
    }

    /// Total configured duration in whole seconds.
    pub fn total_seconds(&self) -> u64 {
        self.hours as u64 * 3600 + self.minutes as u64 * 60 + self.seconds as u64
    }
}

impl Default for TimerConfig {
    // Five minutes, the classic between-sets rest.
    fn default() -> Self {
        Self {
            hours: 0,
            minutes: 5,
            seconds: 0,
        }
    }
}

/// Countdown lifecycle. Exactly one variant is active at any instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerState {
    /// Not running; displayed values preview the current configuration.
    Idle,
    /// Counting down toward an absolute point in time.
    Running { ends_at: DateTime<Utc> },
    /// Suspended; the remaining time was frozen when the user paused.
    Paused { remaining: Duration },
    /// The countdown reached zero. Idle-equivalent for everything except
    /// that the display shows a finished run (progress 1.0, clock 0:00).
    Expired,
}

/// Edge-triggered signal raised by [`RestTimer::tick`] on the
/// `Running -> Expired` transition, consumed once by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Expired,
}

/// Schedules and cancels the single rest-over reminder.
///
/// Both operations are fire-and-forget: scheduling must not block, and a
/// failed or denied notification degrades silently; the in-process expiry
/// event from [`RestTimer::tick`] stays authoritative. Cancelling when
/// nothing is pending is a no-op.
pub trait Notifier {
    fn schedule(&mut self, delay_secs: u64);
    fn cancel(&mut self);
}

/// The rest-interval timer: duration selection, countdown state, derived
/// progress/clock values, recent-duration history, and reminder scheduling.
pub struct RestTimer<N: Notifier> {
    state: TimerState,
    config: TimerConfig,
    /// Duration frozen at `start()` for the in-progress (or just finished) run.
    total_secs: u64,
    recents: Recents,
    notifier: N,
}

impl<N: Notifier> RestTimer<N> {
    pub fn new(notifier: N, recents: Recents) -> Self {
        let config = TimerConfig::default();
        Self {
            state: TimerState::Idle,
            total_secs: config.total_seconds(),
            config,
            recents,
            notifier,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_secs
    }

    pub fn recents(&self) -> &Recents {
        &self.recents
    }

    fn is_settable(&self) -> bool {
        matches!(self.state, TimerState::Idle | TimerState::Expired)
    }

    /// Applies a new picker selection. Only honoured while the timer is not
    /// running; the preview total is recomputed from the components.
    pub fn configure(&mut self, hours: u32, minutes: u32, seconds: u32) {
        if !self.is_settable() {
            return;
        }
        self.config = TimerConfig::new(hours, minutes, seconds);
        self.total_secs = self.config.total_seconds();
        self.state = TimerState::Idle;
    }

    /// Starts the countdown. Ignored when the configured duration is zero or
    /// a run is already underway.
    pub fn start(&mut self, now: DateTime<Utc>) {
        if !self.is_settable() {
            return;
        }
        self.total_secs = self.config.total_seconds();
        if self.total_secs == 0 {
            return;
        }
        self.state = TimerState::Running {
            ends_at: now + Duration::seconds(self.total_secs as i64),
        };
        self.notifier.schedule(self.total_secs);
    }

    /// Freezes the remaining time and cancels the pending reminder.
    /// No-op unless running.
    pub fn pause(&mut self, now: DateTime<Utc>) {
        if let TimerState::Running { ends_at } = self.state {
            let remaining = (ends_at - now).max(Duration::zero());
            self.state = TimerState::Paused { remaining };
            self.notifier.cancel();
        }
    }

    /// Resumes a paused countdown against a fresh end instant. No-op unless
    /// paused with time left; a pause captured at exactly zero stays paused
    /// until `reset`.
    pub fn resume(&mut self, now: DateTime<Utc>) {
        if let TimerState::Paused { remaining } = self.state {
            if remaining <= Duration::zero() {
                return;
            }
            self.state = TimerState::Running { ends_at: now + remaining };
            self.notifier.schedule(Self::whole_seconds(remaining));
        }
    }

    /// Stops everything and re-syncs the preview to the current picker
    /// selection. Always succeeds.
    pub fn reset(&mut self) {
        self.notifier.cancel();
        self.state = TimerState::Idle;
        self.total_secs = self.config.total_seconds();
    }

    /// Advances the countdown against the supplied wall clock. This is the
    /// only place the `Running -> Expired` transition happens; the returned
    /// event fires exactly once per run.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<TimerEvent> {
        let TimerState::Running { ends_at } = self.state else {
            return None;
        };
        if ends_at - now > Duration::zero() {
            return None;
        }
        self.state = TimerState::Expired;
        self.recents.record(self.total_secs);
        // The reminder should have fired by now; clearing it is defensive.
        self.notifier.cancel();
        Some(TimerEvent::Expired)
    }

    /// Remaining whole seconds at `now`, rounded to the nearest second.
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> u64 {
        match self.state {
            TimerState::Idle => self.total_secs,
            TimerState::Expired => 0,
            TimerState::Paused { remaining } => Self::whole_seconds(remaining),
            TimerState::Running { ends_at } => Self::whole_seconds(ends_at - now),
        }
    }

    /// Completed fraction of the countdown in `[0.0, 1.0]`, recomputed on
    /// demand. Idle previews report 0.0; a zero-length configuration never
    /// divides.
    pub fn progress(&self, now: DateTime<Utc>) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        let total_ms = self.total_secs as f64 * 1000.0;
        let remaining_ms = match self.state {
            TimerState::Idle => return 0.0,
            TimerState::Expired => 0.0,
            TimerState::Paused { remaining } => remaining.num_milliseconds().max(0) as f64,
            TimerState::Running { ends_at } => (ends_at - now).num_milliseconds().max(0) as f64,
        };
        (1.0 - remaining_ms / total_ms).clamp(0.0, 1.0)
    }

    /// Clock string for the current state at `now`.
    pub fn display(&self, now: DateTime<Utc>) -> String {
        crate::libs::formatter::format_clock(self.remaining_seconds(now))
    }

    fn whole_seconds(duration: Duration) -> u64 {
        let ms = duration.num_milliseconds().max(0);
        ((ms as f64) / 1000.0).round() as u64
    }
}
