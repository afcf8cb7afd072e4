// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] borrowing the parts of the `App`
//! they may change, and return the follow-up [`Task`].

use super::Message;
use crate::i18n::fluent::I18n;
use crate::notifications::{Manager, Toast};
use crate::routing::Router;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::pages;
use iced::Task;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub router: &'a mut Router,
    pub notifications: &'a mut Manager,
    pub address: &'a mut String,
}

/// Direction for history navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Back,
    Forward,
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.address) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Back => handle_history(ctx, HistoryDirection::Back),
        NavbarEvent::Forward => handle_history(ctx, HistoryDirection::Forward),
        NavbarEvent::Navigate(location) => navigate(ctx, &location),
    }
}

pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: pages::Message) -> Task<Message> {
    match message {
        pages::Message::Navigate(location) => navigate(ctx, &location),
        pages::Message::CopyLink(location) => {
            let toast = Toast::success(ctx.i18n.tr("notification-link-copied")).description(
                ctx.i18n
                    .tr_with_args("notification-link-copied-body", &[("path", location.as_str())]),
            );
            let notify = ctx.notifications.push(toast).map(Message::Notification);
            Task::batch([iced::clipboard::write(location), notify])
        }
    }
}

pub fn handle_history(ctx: &mut UpdateContext<'_>, direction: HistoryDirection) -> Task<Message> {
    let moved = match direction {
        HistoryDirection::Back => ctx.router.back(),
        HistoryDirection::Forward => ctx.router.forward(),
    };
    if moved {
        sync_address(ctx);
    }
    Task::none()
}

fn navigate(ctx: &mut UpdateContext<'_>, location: &str) -> Task<Message> {
    ctx.router.navigate(location);
    sync_address(ctx);
    Task::none()
}

/// Shows the current location in the address bar.
fn sync_address(ctx: &mut UpdateContext<'_>) {
    *ctx.address = ctx.router.current().location();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::routing::{Page, RouteTable};

    struct Fixture {
        i18n: I18n,
        router: Router,
        notifications: Manager,
        address: String,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                i18n: I18n::new(Some("en-US".into()), &Config::default()),
                router: Router::new(RouteTable::standard(), "/", 10),
                notifications: Manager::default(),
                address: "/".to_string(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &self.i18n,
                router: &mut self.router,
                notifications: &mut self.notifications,
                address: &mut self.address,
            }
        }
    }

    #[test]
    fn submitted_address_navigates() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx();
        let _ = handle_navbar_message(
            &mut ctx,
            navbar::Message::AddressChanged("/blogs/hello-world".into()),
        );
        let _ = handle_navbar_message(&mut ctx, navbar::Message::AddressSubmitted);

        assert_eq!(fixture.router.current().page(), Page::BlogDetail);
        assert_eq!(fixture.address, "/blogs/hello-world");
    }

    #[test]
    fn history_moves_update_the_address_bar() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx();
        let _ = handle_page_message(&mut ctx, pages::Message::Navigate("/project/7".into()));
        let _ = handle_history(&mut ctx, HistoryDirection::Back);

        assert_eq!(fixture.router.current().page(), Page::Home);
        assert_eq!(fixture.address, "/");
    }

    #[test]
    fn history_at_the_edge_keeps_address() {
        let mut fixture = Fixture::new();
        fixture.address = "/typed-but-not-submitted".into();
        let mut ctx = fixture.ctx();
        let _ = handle_history(&mut ctx, HistoryDirection::Back);

        assert_eq!(fixture.address, "/typed-but-not-submitted");
    }

    #[test]
    fn copy_link_shows_a_success_toast() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx();
        let _ = handle_page_message(&mut ctx, pages::Message::CopyLink("/blogs/a".into()));

        let toasts: Vec<_> = fixture.notifications.visible().collect();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind(), crate::notifications::Kind::Success);
        assert!(toasts[0].description().contains("/blogs/a"));
    }
}
