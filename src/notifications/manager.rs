// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management for the Iced update loop.
//!
//! The `Manager` lives in the application state. Pushing a toast returns a
//! [`Task`] that sleeps for the toast's duration and then reports
//! [`Message::Expired`]; the task is abortable and its handle is kept so an
//! explicit dismissal cancels it.

use super::notification::{Notification, NotificationId, Toast};
use super::registry::Registry;
use iced::task::Handle;
use iced::Task;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The user closed a toast.
    Dismiss(NotificationId),
    /// A toast's timer fired.
    Expired(NotificationId),
}

/// Owns the visible notifications of the application window.
#[derive(Debug)]
pub struct Manager {
    registry: Registry<Handle>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_NOTIFICATION_DURATION_MS))
    }
}

impl Manager {
    /// Creates an empty manager. Toasts without a duration use `default_duration`.
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            registry: Registry::new(default_duration),
        }
    }

    /// Shows a toast and returns the task that will expire it.
    ///
    /// The returned task must be handed back to the runtime, otherwise the
    /// toast stays until dismissed.
    pub fn push(&mut self, toast: Toast) -> Task<Message> {
        let notification = self.registry.insert(toast);
        let id = notification.id();
        let duration = notification.duration();

        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(duration).await },
            move |()| Message::Expired(id),
        )
        .abortable();
        self.registry.attach(id, handle);

        task
    }

    /// Dismisses a notification by its ID, cancelling its timer.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.registry.dismiss(id).is_some()
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.registry.dismiss(id);
            }
            Message::Expired(id) => {
                self.registry.expire(id);
            }
        }
    }

    /// Returns the visible notifications, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.registry.list()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.registry.is_empty()
    }

    /// Clears all notifications and cancels their timers.
    pub fn clear(&mut self) {
        self.registry.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Kind;

    fn ids(manager: &Manager) -> Vec<NotificationId> {
        manager.visible().map(Notification::id).collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::default();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_adds_notification_with_defaults() {
        let mut manager = Manager::new(Duration::from_millis(1200));
        let _task = manager.push(Toast::new("Saved"));

        let notification = manager.visible().next().expect("one notification");
        assert_eq!(notification.title(), "Saved");
        assert_eq!(notification.kind(), Kind::Info);
        assert_eq!(notification.duration(), Duration::from_millis(1200));
    }

    #[test]
    fn expired_message_removes_notification() {
        let mut manager = Manager::default();
        let _task = manager.push(Toast::success("Saved"));
        let id = ids(&manager)[0];

        manager.handle_message(Message::Expired(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn expired_after_dismiss_is_noop() {
        let mut manager = Manager::default();
        let _first = manager.push(Toast::new("first"));
        let _second = manager.push(Toast::new("second"));
        let first = ids(&manager)[0];

        assert!(manager.dismiss(first));
        manager.handle_message(Message::Expired(first));

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.visible().next().map(Notification::title), Some("second"));
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::default();
        let _task = manager.push(Toast::new("temp"));
        let id = ids(&manager)[0];
        manager.clear();

        assert!(!manager.dismiss(id));
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::default();
        let _task = manager.push(Toast::error("Oops"));
        let id = ids(&manager)[0];

        manager.handle_message(Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn visible_keeps_insertion_order_after_removal() {
        let mut manager = Manager::default();
        for title in ["a", "b", "c", "d"] {
            let _task = manager.push(Toast::new(title));
        }
        let all = ids(&manager);

        manager.handle_message(Message::Expired(all[1]));
        manager.handle_message(Message::Dismiss(all[3]));

        let titles: Vec<_> = manager.visible().map(Notification::title).collect();
        assert_eq!(titles, ["a", "c"]);
    }
}
