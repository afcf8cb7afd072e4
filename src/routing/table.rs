// SPDX-License-Identifier: MPL-2.0
//! Declarative mapping from path patterns to pages.

use super::pattern::{Params, PathPattern};
use crate::error::RouteError;
use std::fmt;

/// Pages the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    BlogList,
    BlogDetail,
    ProjectDetail,
    /// Shown for any path no route matches.
    NotFound,
}

impl Page {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::BlogList => "BlogList",
            Page::BlogDetail => "BlogDetail",
            Page::ProjectDetail => "ProjectDetail",
            Page::NotFound => "NotFound",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameter holding the requested path on the not-found page.
pub const NOT_FOUND_PATH_PARAM: &str = "path";

/// Routes of the portfolio, in matching order.
const STANDARD_ROUTES: &[(&str, Page)] = &[
    ("/", Page::Home),
    ("/blogs", Page::BlogList),
    ("/blogs/:slug", Page::BlogDetail),
    ("/project/:id", Page::ProjectDetail),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: PathPattern,
    page: Page,
}

impl Route {
    pub fn new(pattern: &str, page: Page) -> Result<Self, RouteError> {
        Ok(Self {
            pattern: PathPattern::parse(pattern)?,
            page,
        })
    }

    #[must_use]
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }
}

/// Outcome of resolving a location against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    page: Page,
    params: Params,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl Resolved {
    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Normalized path, always starting with `/`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.page == Page::NotFound
    }

    /// Full location: path plus query and fragment when present.
    #[must_use]
    pub fn location(&self) -> String {
        let mut location = self.path.clone();
        if let Some(query) = &self.query {
            location.push('?');
            location.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            location.push('#');
            location.push_str(fragment);
        }
        location
    }
}

/// Ordered list of routes with a not-found fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Creates an empty table; every location resolves to [`Page::NotFound`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The portfolio's routes: home, blog list, blog post and project.
    #[must_use]
    pub fn standard() -> Self {
        let routes = STANDARD_ROUTES
            .iter()
            .map(|(pattern, page)| Route::new(pattern, *page))
            .collect::<Result<Vec<_>, _>>()
            .expect("standard route patterns are valid");
        Self { routes }
    }

    /// Appends a route. Earlier routes win when several match.
    pub fn route(mut self, pattern: &str, page: Page) -> Result<Self, RouteError> {
        self.routes.push(Route::new(pattern, page)?);
        Ok(self)
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolves a location such as `/blogs/intro?ref=home#top`.
    ///
    /// Never fails: unmatched paths resolve to [`Page::NotFound`] with the
    /// requested path in the `path` parameter.
    #[must_use]
    pub fn resolve(&self, location: &str) -> Resolved {
        let (rest, fragment) = split_once_owned(location.trim(), '#');
        let (raw_path, query) = split_once_owned(&rest, '?');
        let path = normalize_path(&raw_path);

        let matched = self
            .routes
            .iter()
            .find_map(|route| route.pattern.matches(&path).map(|params| (route.page, params)));

        let (page, params) = matched.unwrap_or_else(|| {
            let mut params = Params::new();
            params.insert(NOT_FOUND_PATH_PARAM, path.clone());
            (Page::NotFound, params)
        });

        Resolved {
            page,
            params,
            path,
            query,
            fragment,
        }
    }

    /// Builds the path of the first route rendering `page`.
    pub fn href(&self, page: Page, params: &Params) -> Result<String, RouteError> {
        let route = self
            .routes
            .iter()
            .find(|route| route.page == page)
            .ok_or_else(|| RouteError::UnknownPage(page.name().to_string()))?;
        route.pattern.build(params)
    }
}

fn split_once_owned(text: &str, delimiter: char) -> (String, Option<String>) {
    match text.split_once(delimiter) {
        Some((head, tail)) => (head.to_string(), Some(tail.to_string())),
        None => (text.to_string(), None),
    }
}

fn normalize_path(raw: &str) -> String {
    if raw.is_empty() {
        "/".to_string()
    } else if raw.starts_with('/') {
        raw.to_string()
    } else {
        format!("/{raw}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_has_four_routes_in_order() {
        let table = RouteTable::standard();
        let pages: Vec<_> = table.routes().iter().map(Route::page).collect();
        assert_eq!(
            pages,
            [Page::Home, Page::BlogList, Page::BlogDetail, Page::ProjectDetail]
        );
    }

    #[test]
    fn resolves_every_standard_route() {
        let table = RouteTable::standard();

        assert_eq!(table.resolve("/").page(), Page::Home);
        assert_eq!(table.resolve("/blogs").page(), Page::BlogList);

        let post = table.resolve("/blogs/hello-world");
        assert_eq!(post.page(), Page::BlogDetail);
        assert_eq!(post.param("slug"), Some("hello-world"));

        let project = table.resolve("/project/42");
        assert_eq!(project.page(), Page::ProjectDetail);
        assert_eq!(project.param("id"), Some("42"));
    }

    #[test]
    fn unknown_path_falls_back_to_not_found() {
        let resolved = RouteTable::standard().resolve("/unknown");
        assert!(resolved.is_not_found());
        assert_eq!(resolved.param(NOT_FOUND_PATH_PARAM), Some("/unknown"));
    }

    #[test]
    fn extra_segments_do_not_match() {
        let resolved = RouteTable::standard().resolve("/project/42/edit");
        assert!(resolved.is_not_found());
    }

    #[test]
    fn query_and_fragment_are_split_off() {
        let resolved = RouteTable::standard().resolve("/blogs/intro?ref=home#top");
        assert_eq!(resolved.page(), Page::BlogDetail);
        assert_eq!(resolved.param("slug"), Some("intro"));
        assert_eq!(resolved.path(), "/blogs/intro");
        assert_eq!(resolved.query(), Some("ref=home"));
        assert_eq!(resolved.fragment(), Some("top"));
        assert_eq!(resolved.location(), "/blogs/intro?ref=home#top");
    }

    #[test]
    fn relative_and_empty_locations_are_normalized() {
        let table = RouteTable::standard();
        assert_eq!(table.resolve("").page(), Page::Home);
        assert_eq!(table.resolve("blogs").path(), "/blogs");
        assert_eq!(table.resolve("?q=1").path(), "/");
    }

    #[test]
    fn empty_table_resolves_everything_to_not_found() {
        assert!(RouteTable::new().resolve("/").is_not_found());
    }

    #[test]
    fn earlier_route_wins() {
        let table = RouteTable::new()
            .route("/blogs/featured", Page::BlogList)
            .and_then(|t| t.route("/blogs/:slug", Page::BlogDetail))
            .expect("valid routes");
        assert_eq!(table.resolve("/blogs/featured").page(), Page::BlogList);
        assert_eq!(table.resolve("/blogs/other").page(), Page::BlogDetail);
    }

    #[test]
    fn href_builds_paths_that_resolve_back() {
        let table = RouteTable::standard();
        let params: Params = [("slug", "hello-world")].into_iter().collect();

        let href = table.href(Page::BlogDetail, &params).unwrap();
        assert_eq!(href, "/blogs/hello-world");
        assert_eq!(table.resolve(&href).params(), &params);
        assert_eq!(table.href(Page::Home, &Params::new()).unwrap(), "/");
    }

    #[test]
    fn href_for_not_found_is_an_error() {
        let err = RouteTable::standard()
            .href(Page::NotFound, &Params::new())
            .unwrap_err();
        assert_eq!(err, RouteError::UnknownPage("NotFound".into()));
    }
}
