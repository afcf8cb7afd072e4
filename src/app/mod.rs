// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the router and the
//! notification manager.
//!
//! The `App` struct owns the localization, the router and the toast manager,
//! and translates messages into navigation and notification changes.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::notifications::{Manager, Toast};
use crate::routing::{RouteTable, Router};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    router: Router,
    notifications: Manager,
    theme_mode: ThemeMode,
    /// Contents of the navbar address bar.
    address: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("location", &self.router.current().location())
            .field("notifications", &self.notifications.visible_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the config, builds the router at the start location and
    /// reports config problems as a toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let start = flags
            .start_path
            .unwrap_or_else(|| config.start_path().to_string());
        let router = Router::new(RouteTable::standard(), &start, config.history_limit());

        let mut app = App {
            i18n,
            address: router.current().location(),
            router,
            notifications: Manager::new(config.notification_duration()),
            theme_mode: config.general.theme_mode,
        };

        let task = match config_warning {
            Some(key) => {
                let toast = Toast::error(app.i18n.tr(&key));
                app.notifications.push(toast).map(Message::Notification)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        format!("{} - {app_name}", self.router.current().path())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            router: &mut self.router,
            notifications: &mut self.notifications,
            address: &mut self.address,
        };

        match message {
            Message::Navbar(msg) => update::handle_navbar_message(&mut ctx, msg),
            Message::Page(msg) => update::handle_page_message(&mut ctx, msg),
            Message::Notification(msg) => {
                ctx.notifications.handle_message(msg);
                Task::none()
            }
            Message::HistoryBack => {
                update::handle_history(&mut ctx, update::HistoryDirection::Back)
            }
            Message::HistoryForward => {
                update::handle_history(&mut ctx, update::HistoryDirection::Forward)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            router: &self.router,
            notifications: &self.notifications,
            address: &self.address,
        })
    }
}
