// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily and disappear on their own once their
//! duration has elapsed, or earlier when dismissed.
//!
//! # Components
//!
//! - [`notification`] - `Toast` requests and stored `Notification`s
//! - [`registry`] - ordered store with collision-free ids and cancellable expiries
//! - [`manager`] - `Manager` driving expiry through Iced tasks
//! - [`center`] - `NotificationCenter`, a thread-safe variant driven by tokio timers
//!
//! # Usage
//!
//! ```ignore
//! use crate::notifications::{Manager, Toast};
//!
//! let mut manager = Manager::default();
//!
//! // The returned task expires the toast; hand it to the runtime.
//! let task = manager.push(Toast::success("Link copied")).map(Message::Notification);
//! ```

mod center;
mod manager;
mod notification;
mod registry;

pub use center::NotificationCenter;
pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Kind, Notification, NotificationId, Toast};
pub use registry::{PendingExpiry, Registry};
