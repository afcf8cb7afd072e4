// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! Back/forward buttons, shortcuts to the home and blog pages, and an
//! address bar accepting any path (with optional query and fragment).

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, text_input, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Current contents of the address bar.
    pub address: &'a str,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Back,
    Forward,
    Home,
    Blogs,
    AddressChanged(String),
    AddressSubmitted,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Back,
    Forward,
    Navigate(String),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, address: &mut String) -> Event {
    match message {
        Message::Back => Event::Back,
        Message::Forward => Event::Forward,
        Message::Home => Event::Navigate("/".to_string()),
        Message::Blogs => Event::Navigate("/blogs".to_string()),
        Message::AddressChanged(value) => {
            *address = value;
            Event::None
        }
        Message::AddressSubmitted => {
            let trimmed = address.trim();
            if trimmed.is_empty() {
                Event::None
            } else if trimmed.starts_with('/') {
                Event::Navigate(trimmed.to_string())
            } else {
                Event::Navigate(format!("/{trimmed}"))
            }
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back_button = nav_button(
        ctx.i18n.tr("navbar-back"),
        ctx.can_go_back.then_some(Message::Back),
    );
    let forward_button = nav_button(
        ctx.i18n.tr("navbar-forward"),
        ctx.can_go_forward.then_some(Message::Forward),
    );
    let home_button = nav_button(ctx.i18n.tr("navbar-home"), Some(Message::Home));
    let blogs_button = nav_button(ctx.i18n.tr("navbar-blogs"), Some(Message::Blogs));

    let placeholder = ctx.i18n.tr("navbar-address-placeholder");
    let address = text_input(&placeholder, ctx.address)
        .on_input(Message::AddressChanged)
        .on_submit(Message::AddressSubmitted)
        .size(typography::BODY)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::ADDRESS_BAR_WIDTH));

    let go_button = nav_button(ctx.i18n.tr("navbar-go"), Some(Message::AddressSubmitted));

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(back_button)
        .push(forward_button)
        .push(home_button)
        .push(blogs_button)
        .push(address)
        .push(go_button);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                width: border::WIDTH_SM,
                color: theme.extended_palette().background.strong.color,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// A text button, disabled when `message` is `None`.
fn nav_button<'a>(label: String, message: Option<Message>) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press_maybe(message)
        .padding([spacing::XXS, spacing::XS])
        .into()
}
