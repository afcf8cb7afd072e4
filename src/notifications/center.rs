// SPDX-License-Identifier: MPL-2.0
//! Thread-safe notification center backed by tokio timers.
//!
//! Use this when notifications are produced outside the Iced update loop
//! (background workers, other threads). The registry sits behind a mutex
//! that is never held across an await point; every mutation publishes a
//! fresh snapshot on a `watch` channel so consumers can observe the list.

use super::notification::{Notification, NotificationId, Toast};
use super::registry::Registry;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;

struct Shared {
    registry: Mutex<Registry<AbortHandle>>,
    snapshots: watch::Sender<Vec<Notification>>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Registry<AbortHandle>> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, registry: &Registry<AbortHandle>) {
        self.snapshots.send_replace(registry.snapshot());
    }

    fn expire(&self, id: NotificationId) {
        let mut registry = self.lock();
        if registry.expire(id).is_some() {
            self.publish(&registry);
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        // Pending timers only hold a weak reference; abort them instead of
        // letting them sleep for nothing.
        self.registry
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Cloneable handle to a shared notification list.
///
/// All clones see the same list. Timers are spawned on the runtime passed to
/// [`NotificationCenter::new`].
#[derive(Clone)]
pub struct NotificationCenter {
    shared: Arc<Shared>,
    runtime: Handle,
}

impl fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("registry", &*self.shared.lock())
            .finish_non_exhaustive()
    }
}

impl NotificationCenter {
    #[must_use]
    pub fn new(runtime: Handle, default_duration: Duration) -> Self {
        let (snapshots, _) = watch::channel(Vec::new());
        Self {
            shared: Arc::new(Shared {
                registry: Mutex::new(Registry::new(default_duration)),
                snapshots,
            }),
            runtime,
        }
    }

    /// Appends a notification and schedules its removal after its duration.
    pub fn enqueue(&self, toast: Toast) -> NotificationId {
        let mut registry = self.shared.lock();
        let notification = registry.insert(toast);
        let id = notification.id();
        let duration = notification.duration();

        let shared: Weak<Shared> = Arc::downgrade(&self.shared);
        let timer = self.runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            if let Some(shared) = shared.upgrade() {
                shared.expire(id);
            }
        });
        registry.attach(id, timer.abort_handle());

        self.shared.publish(&registry);
        id
    }

    /// Removes a notification before its timer fires and cancels the timer.
    ///
    /// Returns `true` if the notification was still present.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let mut registry = self.shared.lock();
        let removed = registry.dismiss(id).is_some();
        if removed {
            self.shared.publish(&registry);
        }
        removed
    }

    /// Dismisses every notification. Returns how many were removed.
    pub fn clear(&self) -> usize {
        let mut registry = self.shared.lock();
        let count = registry.clear();
        if count > 0 {
            self.shared.publish(&registry);
        }
        count
    }

    /// Current notifications, oldest first.
    #[must_use]
    pub fn list(&self) -> Vec<Notification> {
        self.shared.lock().snapshot()
    }

    /// Subscribes to list changes. The receiver starts at the current list.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.shared.snapshots.subscribe()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> NotificationCenter {
        NotificationCenter::new(Handle::current(), Duration::from_millis(3000))
    }

    #[tokio::test(start_paused = true)]
    async fn enqueue_is_visible_immediately() {
        let center = center();
        let id = center.enqueue(Toast::new("Saved").duration(Duration::from_millis(100)));

        let list = center.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id(), id);
        assert_eq!(list[0].title(), "Saved");
    }

    #[tokio::test(start_paused = true)]
    async fn default_duration_applies() {
        let center = center();
        center.enqueue(Toast::new("Hello"));

        tokio::time::sleep(Duration::from_millis(2900)).await;
        assert_eq!(center.len(), 1);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(center.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_cancels_timer_and_is_idempotent() {
        let center = center();
        let id = center.enqueue(Toast::new("bye"));

        assert!(center.dismiss(id));
        assert!(!center.dismiss(id));
        assert!(center.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn clones_share_the_same_list() {
        let center = center();
        let other = center.clone();
        other.enqueue(Toast::info("from clone"));

        assert_eq!(center.list()[0].title(), "from clone");
        assert_eq!(center.clear(), 1);
        assert!(other.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn subscriber_sees_enqueue() {
        let center = center();
        let mut rx = center.subscribe();
        assert!(rx.borrow_and_update().is_empty());

        center.enqueue(Toast::new("watch me"));

        rx.changed().await.expect("sender alive");
        assert_eq!(rx.borrow_and_update().len(), 1);
    }
}
