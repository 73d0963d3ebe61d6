// SPDX-License-Identifier: MPL-2.0
//! Application root state and composition of the cross-cutting providers.
//!
//! The `App` struct is the composition root: it resolves the display mode,
//! builds the provider bundle (theme, query cache, real-time handle, regional
//! convention) in one place, and translates messages into side effects like
//! preference persistence. Policy decisions (resolution order, persistence
//! keys, provider construction order) stay close to the main update loop so
//! user-facing behavior is easy to audit.

pub mod message;
pub mod paths;
pub mod persistence;
mod screen;
pub mod session;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::data::{self, QueryCache};
use crate::i18n::fluent::I18n;
use crate::i18n::regional::{self, RegionalConvention};
use crate::realtime::{self, ConnectionHandle, EventPublisher};
use crate::store::{MemoryStore, PreferenceStore, TomlStore};
use crate::ui::theming::{self, DisplayMode, ThemeDescriptor};
use iced::{window, Element, Subscription, Task, Theme};
use session::SessionState;
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// Backend used when no `--server-url` is given.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Cross-cutting resources built once at startup and handed to the view tree.
///
/// Only the theme is ever replaced (on a display-mode toggle); the other
/// providers live for the whole session.
pub struct Providers {
    pub theme: ThemeDescriptor,
    pub queries: QueryCache,
    pub realtime: ConnectionHandle,
    pub regional: Option<RegionalConvention>,
}

/// Builds every provider in one place.
///
/// The theme is derived before the real-time handle opens so the connection
/// surface never renders unstyled.
pub(crate) fn build_providers(
    store: &dyn PreferenceStore,
    mode: DisplayMode,
    server_url: &str,
) -> (Providers, EventPublisher) {
    let theme = ThemeDescriptor::derive(mode);
    let queries = QueryCache::new(data::DEFAULT_CACHE_ENTRIES);
    let regional = regional::resolve(store);
    let (realtime, publisher) = ConnectionHandle::open(server_url);

    (
        Providers {
            theme,
            queries,
            realtime,
            regional,
        },
        publisher,
    )
}

/// Status endpoint for a backend base URL.
pub(crate) fn status_url(base: &str) -> String {
    format!("{}/api/status", base.trim_end_matches('/'))
}

/// Root Iced application state bridging the UI components, localization, and
/// the persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    store: Box<dyn PreferenceStore>,
    mode: DisplayMode,
    providers: Providers,
    /// Feeding side of the real-time channel, handed to a transport when one
    /// is attached.
    publisher: EventPublisher,
    menu_open: bool,
    server_status: Option<String>,
    recent_events: Vec<realtime::Event>,
    session: SessionState,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("mode", &self.mode)
            .finish()
    }
}

/// Builds the window settings.
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

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let store: Box<dyn PreferenceStore> = Box::new(MemoryStore::default());
        let mode = DisplayMode::Light;
        let (providers, publisher) = build_providers(store.as_ref(), mode, DEFAULT_SERVER_URL);

        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            store,
            mode,
            providers,
            publisher,
            menu_open: false,
            server_status: None,
            recent_events: Vec::new(),
            session: SessionState::default(),
        }
    }
}

impl App {
    /// Initializes application state: resolves the display mode, builds the
    /// provider bundle, and kicks off the startup status fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let store: Box<dyn PreferenceStore> = match TomlStore::open_default() {
            Some(store) => Box::new(store),
            None => {
                eprintln!("No config directory available; preferences are session-only");
                Box::new(MemoryStore::default())
            }
        };

        let i18n = I18n::new(flags.lang.clone(), store.as_ref());

        let mode = DisplayMode::resolve(store.as_ref(), theming::system_prefers_dark());
        // Write the resolution back so the first launch already survives a
        // restart, not just later toggles.
        persistence::persist_display_mode(store.as_ref(), mode);

        let server_url = flags
            .server_url
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let (providers, publisher) = build_providers(store.as_ref(), mode, &server_url);

        let session = SessionState::load();
        let screen = session.last_screen;

        let url = status_url(&server_url);
        let queries = providers.queries.clone();
        let task = Task::perform(
            async move { queries.get_or_fetch(&url).await },
            Message::ServerStatusFetched,
        );

        let app = App {
            i18n,
            screen,
            store,
            mode,
            providers,
            publisher,
            menu_open: false,
            server_status: None,
            recent_events: Vec::new(),
            session,
        };
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.providers.theme.runtime_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let close_sub = subscription::create_close_subscription();
        let poll_sub = subscription::create_realtime_subscription(self.providers.realtime.state());

        Subscription::batch([close_sub, poll_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            store: self.store.as_ref(),
            mode: &mut self.mode,
            providers: &mut self.providers,
            publisher: &self.publisher,
            menu_open: &mut self.menu_open,
            server_status: &mut self.server_status,
            recent_events: &mut self.recent_events,
            session: &mut self.session,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::ToggleDisplayMode => update::handle_toggle_display_mode(&mut ctx),
            Message::ServerStatusFetched(result) => update::handle_server_status(&mut ctx, result),
            Message::RealtimePoll(_instant) => update::handle_realtime_poll(&mut ctx),
            Message::WindowCloseRequested(_id) => update::handle_window_close(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            providers: &self.providers,
            menu_open: self.menu_open,
            server_status: self.server_status.as_deref(),
            recent_events: &self.recent_events,
        })
    }
}
