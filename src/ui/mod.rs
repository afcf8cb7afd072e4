// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each module
//! renders from borrowed state and reports user intent as messages.
//!
//! - [`navbar`] - History buttons, page shortcuts and the address bar
//! - [`pages`] - One view per routed page, including the not-found page
//! - [`toast`] - Toast overlay for the notification manager
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod navbar;
pub mod pages;
pub mod theming;
pub mod toast;
