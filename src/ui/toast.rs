// SPDX-License-Identifier: MPL-2.0
//! Toast rendering for the notification manager.
//!
//! Each notification is drawn as a small card with a kind-colored border,
//! its title, an optional description and a dismiss button.

use crate::i18n::fluent::I18n;
use crate::notifications::{Kind, Manager, Notification, NotificationMessage};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Accent color for a notification kind.
#[must_use]
pub fn accent(kind: Kind) -> Color {
    match kind {
        Kind::Success => palette::SUCCESS_500,
        Kind::Error => palette::ERROR_500,
        Kind::Info => palette::INFO_500,
    }
}

/// Renders a single toast.
pub fn view<'a>(
    notification: &'a Notification,
    i18n: &I18n,
) -> Element<'a, NotificationMessage> {
    let accent_color = accent(notification.kind());

    let mut body = Column::new().spacing(spacing::XXS).push(
        Text::new(notification.title())
            .size(typography::TITLE_SM)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            }),
    );
    if !notification.description().is_empty() {
        body = body.push(Text::new(notification.description()).size(typography::CAPTION));
    }

    let dismiss_button = button(Text::new(i18n.tr("toast-dismiss")).size(typography::CAPTION))
        .on_press(NotificationMessage::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(body)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color))
        .into()
}

/// Renders every visible toast stacked in the bottom-right corner, oldest first.
pub fn view_overlay<'a>(manager: &'a Manager, i18n: &I18n) -> Element<'a, NotificationMessage> {
    let toasts: Vec<Element<'a, NotificationMessage>> = manager
        .visible()
        .map(|notification| view(notification, i18n))
        .collect();

    if toasts.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let toast_column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(toast_column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| iced::Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let style = toast_container_style(&Theme::Dark, accent(Kind::Success));

        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn each_kind_has_a_distinct_accent() {
        assert_ne!(accent(Kind::Success), accent(Kind::Error));
        assert_ne!(accent(Kind::Error), accent(Kind::Info));
        assert_ne!(accent(Kind::Success), accent(Kind::Info));
    }

    #[test]
    fn dismiss_button_highlights_on_hover_only() {
        let active = dismiss_button_style(&Theme::Light, button::Status::Active);
        let hovered = dismiss_button_style(&Theme::Light, button::Status::Hovered);

        assert!(active.background.is_none());
        assert!(hovered.background.is_some());
    }
}
