// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits above the current page; toasts float over both.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::notifications::Manager;
use crate::routing::Router;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::{pages, toast};
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub router: &'a Router,
    pub notifications: &'a Manager,
    pub address: &'a str,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        address: ctx.address,
        can_go_back: ctx.router.can_go_back(),
        can_go_forward: ctx.router.can_go_forward(),
    })
    .map(Message::Navbar);

    let page = pages::view(ctx.router.current(), ctx.router.table(), ctx.i18n).map(Message::Page);

    let column = Column::new().push(navbar).push(
        Container::new(page)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let toasts = toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(column.width(Length::Fill).height(Length::Fill))
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
