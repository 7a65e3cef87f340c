//! Transient on-screen notifications.
//!
//! A notification is raised at an instant and stays visible for a fixed
//! display duration, after which the host stops showing it.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// How long a notification stays visible by default.
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(2);

/// What a notification is about.
///
/// Only an undo on empty history raises one. Redo on empty history is
/// silent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    /// Undo was requested with nothing left to undo.
    UndoUnavailable,
}

impl NotificationKind {
    /// Text shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            NotificationKind::UndoUnavailable => "No more undos available!",
        }
    }
}

/// A raised notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub raised_at: Instant,
}

impl Notification {
    #[must_use]
    pub fn new(kind: NotificationKind, raised_at: Instant) -> Self {
        Self { kind, raised_at }
    }

    /// Check whether the notification should still be shown at `now`.
    #[must_use]
    pub fn is_visible(&self, now: Instant, duration: Duration) -> bool {
        now.saturating_duration_since(self.raised_at) < duration
    }
}
