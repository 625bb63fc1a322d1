//! Toast-style notifications emitted by the flows.
//!
//! The flows never render anything themselves; they push
//! `{title, description, variant}` records into a [`NotificationSink`]
//! supplied by the frontend. [`RecordingSink`] collects them for headless
//! assertions.

use serde::{Deserialize, Serialize};

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Regular success/progress toast.
    Default,
    /// Validation failure.
    Destructive,
}

/// A single transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn success(title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
            variant: Variant::Default,
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: Variant::Destructive,
        }
    }
}

/// Observer seam between the flow state machines and a view layer.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications in memory. Used by tests and the status display.
#[derive(Debug, Default)]
pub struct RecordingSink {
    notifications: Vec<Notification>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn destructive_count(&self) -> usize {
        self.notifications
            .iter()
            .filter(|n| n.variant == Variant::Destructive)
            .count()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

/// Discards everything. For callers that only care about return values.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&mut self, _notification: Notification) {}
}
