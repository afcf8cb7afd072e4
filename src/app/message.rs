// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::notifications::NotificationMessage;
use crate::ui::{navbar, pages};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Navbar(navbar::Message),
    Page(pages::Message),
    Notification(NotificationMessage),
    /// Keyboard shortcut for the previous history entry (Alt+Left).
    HistoryBack,
    /// Keyboard shortcut for the next history entry (Alt+Right).
    HistoryForward,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional location to open instead of the configured start path.
    pub start_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
