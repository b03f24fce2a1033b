//! Transient, self-dismissing notifications ("toasts").
//!
//! A notification is shown as soon as it is pushed and carries its own
//! deadline. Nothing waits on it; the event loop prunes expired entries and
//! schedules a repaint for the next deadline.

use std::time::{Duration, Instant};

/// How long a notification stays on screen.
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    expires_at: Instant,
}

impl Notification {
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Active notifications, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    active: Vec<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self { active: Vec::new() }
    }

    /// Shows `message` from `now` until `now + NOTIFICATION_DURATION`.
    pub fn push(&mut self, message: impl Into<String>, now: Instant) {
        self.active.push(Notification {
            message: message.into(),
            expires_at: now + NOTIFICATION_DURATION,
        });
    }

    /// Drops every notification whose deadline has passed. Returns how many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.active.len();
        self.active.retain(|n| n.expires_at > now);
        before - self.active.len()
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    /// Earliest pending deadline, if any.
    pub fn next_expiry(&self) -> Option<Instant> {
        self.active.iter().map(|n| n.expires_at).min()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
