// SPDX-License-Identifier: MPL-2.0
//! Page views for every [`Page`] of the route table.
//!
//! Pages only read the resolved route; links and actions are reported back
//! as [`Message`]s for the application to act on.

use crate::i18n::fluent::I18n;
use crate::routing::{Page, Params, Resolved, RouteTable, NOT_FOUND_PATH_PARAM};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, scrollable, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Posts listed on the blog page.
pub const BLOG_POSTS: &[&str] = &["hello-world", "routing-without-a-browser", "toasts"];

/// Projects linked from the home page.
pub const PROJECTS: &[&str] = &["iced-folio", "notification-center"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Follow an in-app link.
    Navigate(String),
    /// Copy the given location to the clipboard.
    CopyLink(String),
}

/// Render the page for a resolved route.
pub fn view<'a>(resolved: &'a Resolved, table: &RouteTable, i18n: &I18n) -> Element<'a, Message> {
    let content = match resolved.page() {
        Page::Home => home(table, i18n),
        Page::BlogList => blog_list(table, i18n),
        Page::BlogDetail => blog_detail(resolved, i18n),
        Page::ProjectDetail => project_detail(resolved, i18n),
        Page::NotFound => not_found(resolved, i18n),
    };

    let body = Container::new(content)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding(spacing::XL);

    scrollable(
        Container::new(body)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}

fn home<'a>(table: &RouteTable, i18n: &I18n) -> Column<'a, Message> {
    let mut column = page_header(i18n.tr("page-home-title"), i18n.tr("page-home-body")).push(
        link_button(i18n.tr("page-home-open-blogs"), "/blogs".to_string()),
    );

    for id in PROJECTS {
        if let Some(href) = href_for(table, Page::ProjectDetail, "id", id) {
            column = column.push(link_button(
                i18n.tr_with_args("page-project-detail-title", &[("id", id)]),
                href,
            ));
        }
    }
    column
}

fn blog_list<'a>(table: &RouteTable, i18n: &I18n) -> Column<'a, Message> {
    let mut column = page_header(i18n.tr("page-blog-list-title"), i18n.tr("page-blog-list-body"));
    for slug in BLOG_POSTS {
        if let Some(href) = href_for(table, Page::BlogDetail, "slug", slug) {
            column = column.push(link_button((*slug).to_string(), href));
        }
    }
    column
}

fn blog_detail<'a>(resolved: &Resolved, i18n: &I18n) -> Column<'a, Message> {
    let slug = resolved.param("slug").unwrap_or_default();
    page_header(
        i18n.tr_with_args("page-blog-detail-title", &[("slug", slug)]),
        i18n.tr_with_args("page-blog-detail-body", &[("slug", slug)]),
    )
    .push(
        button(Text::new(i18n.tr("page-blog-detail-copy-link")))
            .on_press(Message::CopyLink(resolved.location())),
    )
}

fn project_detail<'a>(resolved: &Resolved, i18n: &I18n) -> Column<'a, Message> {
    let id = resolved.param("id").unwrap_or_default();
    page_header(
        i18n.tr_with_args("page-project-detail-title", &[("id", id)]),
        i18n.tr_with_args("page-project-detail-body", &[("id", id)]),
    )
}

fn not_found<'a>(resolved: &Resolved, i18n: &I18n) -> Column<'a, Message> {
    let path = resolved
        .param(NOT_FOUND_PATH_PARAM)
        .unwrap_or(resolved.path());
    page_header(
        i18n.tr("page-not-found-title"),
        i18n.tr_with_args("page-not-found-body", &[("path", path)]),
    )
    .push(link_button(i18n.tr("page-not-found-home"), "/".to_string()))
}

fn page_header<'a>(title: String, body: String) -> Column<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .push(Text::new(title).size(typography::TITLE_LG))
        .push(Text::new(body).size(typography::BODY))
}

fn link_button<'a>(label: String, href: String) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(Message::Navigate(href))
        .style(button::text)
        .into()
}

fn href_for(table: &RouteTable, page: Page, param: &str, value: &str) -> Option<String> {
    let mut params = Params::new();
    params.insert(param, value);
    match table.href(page, &params) {
        Ok(href) => Some(href),
        Err(err) => {
            tracing::warn!(%page, %err, "cannot build link");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_posts_resolve_to_blog_detail() {
        let table = RouteTable::standard();
        for slug in BLOG_POSTS {
            let href = href_for(&table, Page::BlogDetail, "slug", slug).unwrap();
            let resolved = table.resolve(&href);
            assert_eq!(resolved.page(), Page::BlogDetail);
            assert_eq!(resolved.param("slug"), Some(*slug));
        }
    }

    #[test]
    fn listed_projects_resolve_to_project_detail() {
        let table = RouteTable::standard();
        for id in PROJECTS {
            let href = href_for(&table, Page::ProjectDetail, "id", id).unwrap();
            assert_eq!(table.resolve(&href).param("id"), Some(*id));
        }
    }

    #[test]
    fn missing_route_yields_no_link() {
        assert_eq!(href_for(&RouteTable::new(), Page::BlogDetail, "slug", "a"), None);
    }
}
