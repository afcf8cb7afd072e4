// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a small portfolio and blog shell built with the Iced GUI framework.
//!
//! It pairs a declarative route table (home, blog list, blog posts, projects,
//! with a not-found fallback) with a toast notification system whose entries
//! expire on their own.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod notifications;
pub mod routing;
pub mod ui;
