//! Shared status record.

use chessbot_core::{BotStatus, StatusPatch};
use chrono::Utc;
use parking_lot::RwLock;

/// Owns the process-wide `BotStatus`.
///
/// All mutations flow through `update`/`merge`, which stamp
/// `last_activity`. Readers only ever get copies.
#[derive(Debug, Default)]
pub struct StatusStore {
    status: RwLock<BotStatus>,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current record.
    pub fn snapshot(&self) -> BotStatus {
        self.status.read().clone()
    }

    /// Current `is_running` without copying the whole record.
    pub fn is_running(&self) -> bool {
        self.status.read().is_running
    }

    /// Mutate the record under the write lock, stamp `last_activity`,
    /// and return the new snapshot.
    pub fn update(&self, f: impl FnOnce(&mut BotStatus)) -> BotStatus {
        let mut status = self.status.write();
        f(&mut status);
        status.last_activity = Utc::now();
        status.clone()
    }

    /// Apply the `Some` fields of `patch`. Always succeeds; always stamps
    /// `last_activity`, even for an empty patch.
    pub fn merge(&self, patch: StatusPatch) -> BotStatus {
        self.update(|status| status.apply(patch))
    }
}
