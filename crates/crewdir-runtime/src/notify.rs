//! Transient user-facing feedback.
//!
//! A single slot, last write wins: posting replaces whatever is currently
//! shown, there is no queue. Notifications auto-dismiss after a fixed
//! display window.

use serde::Serialize;
use std::time::{Duration, Instant};

/// How long a notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Neutral,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    posted_at: Instant,
}

impl Notification {
    fn new(message: String, kind: NotificationKind) -> Self {
        Self {
            message,
            kind,
            posted_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.posted_at.elapsed() >= NOTIFICATION_TTL
    }
}

#[derive(Debug, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a new notification, replacing any current one.
    pub fn post(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.current = Some(Notification::new(message.into(), kind));
    }

    /// The currently visible notification, if any is still within its
    /// display window.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().filter(|n| !n.is_expired())
    }

    /// Drop an expired notification. Renderer tick calls this so the slot
    /// does not hold on to dead messages.
    pub fn clear_expired(&mut self) {
        if self.current.as_ref().is_some_and(|n| n.is_expired()) {
            self.current = None;
        }
    }

    #[cfg(test)]
    fn backdate(&mut self, by: Duration) {
        if let Some(notification) = self.current.as_mut() {
            notification.posted_at -= by;
        }
    }
}
