//! Recently used rest durations.
//!
//! Keeps the last few distinct countdown lengths, most recent first, so the
//! user can re-arm a favourite interval without re-entering it. The list is
//! persisted as a plain JSON array of whole seconds in the application data
//! directory; a missing or unreadable file simply means no history.

use crate::libs::data_storage::DataStorage;
use std::fs;
use std::path::PathBuf;

pub const RECENTS_FILE_NAME: &str = "recents.json";

/// Maximum number of durations retained.
pub const MAX_RECENTS: usize = 5;

/// Ordered recent-duration history, most recently used first.
///
/// Invariants: no duplicate values, length never exceeds [`MAX_RECENTS`],
/// non-positive durations are never recorded.
#[derive(Debug)]
pub struct Recents {
    items: Vec<u64>,
    path: Option<PathBuf>,
}

impl Recents {
    /// Loads the history from disk. Read or decode failures degrade to an
    /// empty list, never an error.
    pub fn load() -> Self {
        let path = DataStorage::new().get_path(RECENTS_FILE_NAME).ok();
        let items = path
            .as_deref()
            .and_then(|p| fs::read_to_string(p).ok())
            .and_then(|raw| serde_json::from_str::<Vec<u64>>(&raw).ok())
            .unwrap_or_default();
        Self { items, path }
    }

    /// An in-memory list that never touches disk.
    pub fn ephemeral() -> Self {
        Self { items: Vec::new(), path: None }
    }

    pub fn items(&self) -> &[u64] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records a finished duration: an existing entry moves to the front
    /// instead of duplicating, the list is truncated to [`MAX_RECENTS`], and
    /// the result is persisted immediately. Non-positive values are skipped.
    pub fn record(&mut self, duration_secs: u64) {
        if duration_secs == 0 {
            return;
        }
        self.items.retain(|&d| d != duration_secs);
        self.items.insert(0, duration_secs);
        self.items.truncate(MAX_RECENTS);
        self.save();
    }

    // Write-through persistence; failures are logged and otherwise ignored
    // so an unwritable data directory cannot break the countdown itself.
    fn save(&self) {
        let Some(path) = &self.path else { return };
        match serde_json::to_string(&self.items) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    tracing::warn!("failed to persist recent durations: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to encode recent durations: {e}"),
        }
    }
}
