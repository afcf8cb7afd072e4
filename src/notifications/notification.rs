// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! [`Toast`] is what callers hand to a notification center; [`Notification`]
//! is what the center stores and renders once an id and a duration have been
//! assigned.

use std::fmt;
use std::time::Duration;

/// Unique identifier for a notification.
///
/// Ids come from a counter owned by the registry that issued them, so two
/// notifications created in the same instant never share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of notification, which drives the accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Kind {
    Success,
    Error,
    #[default]
    Info,
}

impl Kind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Info => "info",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to show a toast.
///
/// Only the title is required. Missing fields are filled in by the center:
/// an empty description, [`Kind::Info`], and the configured default duration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: Option<String>,
    pub kind: Option<Kind>,
    pub duration: Option<Duration>,
}

impl Toast {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title).kind(Kind::Success)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title).kind(Kind::Error)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title).kind(Kind::Info)
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets how long the toast stays visible. A zero duration counts as unset.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// A notification currently held by a center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    title: String,
    description: String,
    kind: Kind,
    duration: Duration,
}

impl Notification {
    /// Builds a notification from a toast request, applying defaults.
    pub(crate) fn from_toast(id: NotificationId, toast: Toast, default_duration: Duration) -> Self {
        let duration = toast
            .duration
            .filter(|d| !d.is_zero())
            .unwrap_or(default_duration);

        Self {
            id,
            title: toast.title,
            description: toast.description.unwrap_or_default(),
            kind: toast.kind.unwrap_or_default(),
            duration,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Time between enqueue and automatic removal.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}
