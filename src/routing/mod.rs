// SPDX-License-Identifier: MPL-2.0
//! Client-side routing: path patterns, the route table and history navigation.
//!
//! # Components
//!
//! - [`pattern`] - `PathPattern` parsing, matching and reverse building
//! - [`table`] - `RouteTable` mapping patterns to [`Page`]s, with a not-found fallback
//! - [`history`] - bounded back/forward stack
//! - [`router`] - `Router` tying the table and the history together
//!
//! # Usage
//!
//! ```
//! use iced_folio::routing::{Page, RouteTable};
//!
//! let resolved = RouteTable::standard().resolve("/blogs/hello-world");
//! assert_eq!(resolved.page(), Page::BlogDetail);
//! assert_eq!(resolved.param("slug"), Some("hello-world"));
//! ```

mod history;
mod pattern;
mod router;
mod table;

pub use history::History;
pub use pattern::{Params, PathPattern};
pub use router::Router;
pub use table::{Page, Resolved, Route, RouteTable, NOT_FOUND_PATH_PARAM};
