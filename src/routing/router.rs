// SPDX-License-Identifier: MPL-2.0
//! History-style navigation over a [`RouteTable`].

use super::history::History;
use super::pattern::Params;
use super::table::{Page, Resolved, RouteTable};
use crate::error::RouteError;

/// Keeps the current page in sync with the navigation history.
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    history: History,
    current: Resolved,
}

impl Router {
    /// Creates a router showing `start` with room for `history_limit` entries.
    #[must_use]
    pub fn new(table: RouteTable, start: &str, history_limit: usize) -> Self {
        let current = resolve_logged(&table, start);
        let history = History::new(current.location(), history_limit);
        Self {
            table,
            history,
            current,
        }
    }

    #[must_use]
    pub fn current(&self) -> &Resolved {
        &self.current
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Navigates to `location`, adding a history entry.
    ///
    /// Navigating to the current location is a no-op and returns `false`.
    pub fn navigate(&mut self, location: &str) -> bool {
        let resolved = resolve_logged(&self.table, location);
        if resolved.location() == self.current.location() {
            return false;
        }
        tracing::debug!(from = %self.current.location(), to = %resolved.location(), "navigate");
        self.history.push(resolved.location());
        self.current = resolved;
        true
    }

    /// Navigates to `location` without adding a history entry.
    pub fn replace(&mut self, location: &str) {
        let resolved = resolve_logged(&self.table, location);
        self.history.replace(resolved.location());
        self.current = resolved;
    }

    /// Navigates to a page by identifier, e.g. `BlogDetail` with a `slug`.
    pub fn navigate_to(&mut self, page: Page, params: &Params) -> Result<bool, RouteError> {
        let href = self.table.href(page, params)?;
        Ok(self.navigate(&href))
    }

    /// Goes back one entry. Returns `false` at the start of the history.
    pub fn back(&mut self) -> bool {
        match self.history.back() {
            Some(location) => {
                self.current = self.table.resolve(location);
                true
            }
            None => false,
        }
    }

    /// Goes forward one entry. Returns `false` at the end of the history.
    pub fn forward(&mut self) -> bool {
        match self.history.forward() {
            Some(location) => {
                self.current = self.table.resolve(location);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }
}

fn resolve_logged(table: &RouteTable, location: &str) -> Resolved {
    let resolved = table.resolve(location);
    if resolved.is_not_found() {
        tracing::warn!(path = %resolved.path(), "no route matches, showing not-found page");
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        Router::new(RouteTable::standard(), "/", 10)
    }

    #[test]
    fn starts_on_given_location() {
        let router = Router::new(RouteTable::standard(), "/blogs", 10);
        assert_eq!(router.current().page(), Page::BlogList);
        assert!(!router.can_go_back());
    }

    #[test]
    fn navigate_pushes_and_back_restores() {
        let mut router = router();
        assert!(router.navigate("/blogs/hello-world"));
        assert_eq!(router.current().page(), Page::BlogDetail);
        assert_eq!(router.current().param("slug"), Some("hello-world"));

        assert!(router.back());
        assert_eq!(router.current().page(), Page::Home);
        assert!(router.forward());
        assert_eq!(router.current().page(), Page::BlogDetail);
        assert!(!router.forward());
    }

    #[test]
    fn duplicate_navigation_is_ignored() {
        let mut router = router();
        assert!(router.navigate("/blogs"));
        assert!(!router.navigate("/blogs"));
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn unknown_location_shows_not_found() {
        let mut router = router();
        assert!(router.navigate("/unknown"));
        assert!(router.current().is_not_found());
        assert!(router.can_go_back());
    }

    #[test]
    fn replace_does_not_grow_history() {
        let mut router = router();
        router.navigate("/blogs");
        router.replace("/project/7");

        assert_eq!(router.history().len(), 2);
        assert_eq!(router.current().param("id"), Some("7"));
        assert!(router.back());
        assert_eq!(router.current().page(), Page::Home);
    }

    #[test]
    fn navigate_to_builds_the_path() {
        let mut router = router();
        let params: Params = [("id", "folio")].into_iter().collect();

        assert_eq!(router.navigate_to(Page::ProjectDetail, &params), Ok(true));
        assert_eq!(router.current().path(), "/project/folio");
        assert!(router.navigate_to(Page::NotFound, &Params::new()).is_err());
    }
}
