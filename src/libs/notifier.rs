//! Desktop reminder for countdown completion.
//!
//! A single rest-over notification is scheduled when the countdown starts
//! and torn down when it is paused, reset, or has expired. Delivery is
//! best-effort: a denied or unavailable notification service only means no
//! desktop banner, the in-terminal countdown is unaffected.

use crate::libs::timer::Notifier;
use notify_rust::Notification;
use tokio::task::JoinHandle;

/// Identifier shared by every rest-over reminder; at most one is pending.
pub const NOTIFICATION_TAG: &str = "liftlog-rest-over";

const NOTIFICATION_SUMMARY: &str = "Rest over";
const NOTIFICATION_BODY: &str = "Your rest interval has ended. Back to the bar!";

/// Schedules the reminder as a delayed background task on the tokio runtime.
///
/// Cancelling aborts the pending task; aborting a task that already showed
/// its notification is a no-op, which is exactly the defensive-cancel
/// behaviour expiry relies on.
#[derive(Default)]
pub struct DesktopNotifier {
    pending: Option<JoinHandle<()>>,
}

impl DesktopNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Notifier for DesktopNotifier {
    fn schedule(&mut self, delay_secs: u64) {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_secs(delay_secs)).await;
            let shown = Notification::new()
                .appname(NOTIFICATION_TAG)
                .summary(NOTIFICATION_SUMMARY)
                .body(NOTIFICATION_BODY)
                .show();
            if let Err(e) = shown {
                tracing::debug!("rest-over notification was not delivered: {e}");
            }
        }));
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for DesktopNotifier {
    fn drop(&mut self) {
        self.cancel();
    }
}
