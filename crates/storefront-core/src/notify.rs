//! User notifications (toasts)
//!
//! The controller never draws toasts itself; it hands a [`Notification`] to
//! whatever [`Notifier`] the host page supplied.

use std::fmt;

use tokio::sync::broadcast;
use tracing::{error, info, warn};

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationLevel {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationLevel {
    /// CSS class suffix for the toast host
    pub fn class(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "toast-success",
            NotificationLevel::Error => "toast-error",
            NotificationLevel::Warning => "toast-warning",
            NotificationLevel::Info => "toast-info",
        }
    }

    /// Icon shown next to the message
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "\u{2714}",
            NotificationLevel::Error => "\u{2716}",
            NotificationLevel::Warning => "\u{26A0}",
            NotificationLevel::Info => "\u{2139}",
        }
    }
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "error",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Info => "info",
        };
        f.write_str(label)
    }
}

/// A transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Sink for user notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Publishes notifications on a broadcast channel for a toast host
#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    tx: broadcast::Sender<Notification>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(16)
    }
}

impl Notifier for BroadcastNotifier {
    fn notify(&self, notification: Notification) {
        // No toast host listening is fine
        let _ = self.tx.send(notification);
    }
}

/// Writes notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => error!(message = %notification.message, "Notification"),
            NotificationLevel::Warning => warn!(message = %notification.message, "Notification"),
            _ => info!(message = %notification.message, "Notification"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_classes() {
        assert_eq!(NotificationLevel::Success.class(), "toast-success");
        assert_eq!(NotificationLevel::Error.class(), "toast-error");
        assert_eq!(NotificationLevel::default(), NotificationLevel::Success);
        assert_eq!(NotificationLevel::Warning.to_string(), "warning");
    }

    #[tokio::test]
    async fn test_broadcast_reaches_subscriber() {
        let notifier = BroadcastNotifier::default();
        let mut rx = notifier.subscribe();

        notifier.notify(Notification::error("Connection error"));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.level, NotificationLevel::Error);
        assert_eq!(received.message, "Connection error");
    }

    #[test]
    fn test_broadcast_without_subscribers() {
        BroadcastNotifier::default().notify(Notification::success("ok"));
    }
}
