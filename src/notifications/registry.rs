// SPDX-License-Identifier: MPL-2.0
//! Ordered store of active notifications.
//!
//! The registry owns the id counter and the list, oldest first. It does not
//! schedule anything itself: the owner spawns an expiry timer for each new
//! entry and hands its handle back via [`Registry::attach`] so that an
//! explicit dismissal can cancel it.

use super::notification::{Notification, NotificationId, Toast};
use std::fmt;
use std::time::Duration;

/// Handle to a scheduled expiry that can be cancelled.
pub trait PendingExpiry {
    fn cancel(&self);
}

impl PendingExpiry for iced::task::Handle {
    fn cancel(&self) {
        self.abort();
    }
}

impl PendingExpiry for tokio::task::AbortHandle {
    fn cancel(&self) {
        self.abort();
    }
}

struct Entry<H> {
    notification: Notification,
    pending: Option<H>,
}

pub struct Registry<H> {
    entries: Vec<Entry<H>>,
    next_id: u64,
    default_duration: Duration,
}

impl<H> fmt::Debug for Registry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .field("default_duration", &self.default_duration)
            .finish()
    }
}

impl<H: PendingExpiry> Registry<H> {
    /// Creates an empty registry. Toasts without a duration use `default_duration`.
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            default_duration,
        }
    }

    /// Appends a notification built from `toast` and returns a copy of it.
    pub fn insert(&mut self, toast: Toast) -> Notification {
        if toast.title.trim().is_empty() {
            tracing::warn!("notification enqueued with an empty title");
        }

        let id = NotificationId::new(self.next_id);
        self.next_id += 1;

        let notification = Notification::from_toast(id, toast, self.default_duration);
        tracing::debug!(
            %id,
            kind = %notification.kind(),
            duration_ms = notification.duration().as_millis() as u64,
            "notification enqueued"
        );

        self.entries.push(Entry {
            notification: notification.clone(),
            pending: None,
        });
        notification
    }

    /// Records the expiry timer for `id`.
    ///
    /// If the notification is already gone the timer is cancelled right away
    /// and `false` is returned.
    pub fn attach(&mut self, id: NotificationId, handle: H) -> bool {
        match self.entries.iter_mut().find(|e| e.notification.id() == id) {
            Some(entry) => {
                if let Some(previous) = entry.pending.replace(handle) {
                    previous.cancel();
                }
                true
            }
            None => {
                handle.cancel();
                false
            }
        }
    }

    /// Removes `id` because its timer fired. No-op if already removed.
    pub fn expire(&mut self, id: NotificationId) -> Option<Notification> {
        let entry = self.take(id)?;
        tracing::debug!(%id, "notification expired");
        Some(entry.notification)
    }

    /// Removes `id` on request and cancels its pending timer.
    pub fn dismiss(&mut self, id: NotificationId) -> Option<Notification> {
        let entry = self.take(id)?;
        if let Some(pending) = &entry.pending {
            pending.cancel();
        }
        tracing::debug!(%id, "notification dismissed");
        Some(entry.notification)
    }

    /// Dismisses every notification. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        for entry in self.entries.drain(..) {
            if let Some(pending) = &entry.pending {
                pending.cancel();
            }
        }
        count
    }

    fn take(&mut self, id: NotificationId) -> Option<Entry<H>> {
        let pos = self.entries.iter().position(|e| e.notification.id() == id)?;
        Some(self.entries.remove(pos))
    }
}

impl<H> Registry<H> {
    /// Active notifications, oldest first.
    pub fn list(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|e| &e.notification)
    }

    /// Owned copy of the active notifications, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.list().cloned().collect()
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.entries.iter().any(|e| e.notification.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }
}
