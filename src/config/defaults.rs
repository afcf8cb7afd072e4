// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Toast display duration and its bounds
//! - **Navigation**: Start route and history depth

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time a toast stays visible (in milliseconds).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3000;

/// Shortest configurable toast duration (in milliseconds).
pub const MIN_NOTIFICATION_DURATION_MS: u64 = 500;

/// Longest configurable toast duration (in milliseconds).
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 60_000;

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Route shown when no path is given on the command line.
pub const DEFAULT_START_PATH: &str = "/";

/// Default number of entries kept in the navigation history.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Minimum history depth (the current entry only).
pub const MIN_HISTORY_LIMIT: usize = 1;

/// Maximum history depth.
pub const MAX_HISTORY_LIMIT: usize = 1000;

const _: () = {
    assert!(MIN_NOTIFICATION_DURATION_MS <= DEFAULT_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS <= MAX_NOTIFICATION_DURATION_MS);
    assert!(MIN_HISTORY_LIMIT <= DEFAULT_HISTORY_LIMIT);
    assert!(DEFAULT_HISTORY_LIMIT <= MAX_HISTORY_LIMIT);
};
