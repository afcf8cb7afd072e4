// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts not captured by a widget are mapped to history
//! navigation.

use super::Message;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, Subscription};

/// Listens for Alt+Left / Alt+Right.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                history_shortcut(&key, modifiers)
            }
            _ => None,
        }
    })
}

/// Maps a key press to a history message.
fn history_shortcut(key: &Key, modifiers: Modifiers) -> Option<Message> {
    if !modifiers.alt() {
        return None;
    }
    match key {
        Key::Named(Named::ArrowLeft) => Some(Message::HistoryBack),
        Key::Named(Named::ArrowRight) => Some(Message::HistoryForward),
        _ => None,
    }
}
