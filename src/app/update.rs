// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The handlers borrow everything they touch through [`UpdateContext`] so the
//! single `App::update` entrypoint stays a plain dispatch table.

use super::{persistence, status_url, Message, Providers, Screen};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::realtime::{self, ConnectionState, EventPublisher};
use crate::store::PreferenceStore;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::theming::{DisplayMode, ThemeDescriptor};
use iced::Task;

use super::session::SessionState;

/// Upper bound on the activity feed kept for the dashboard.
pub const MAX_RECENT_EVENTS: usize = 20;

/// Mutable borrows of the application state shared by every handler.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub store: &'a dyn PreferenceStore,
    pub mode: &'a mut DisplayMode,
    pub providers: &'a mut Providers,
    pub publisher: &'a EventPublisher,
    pub menu_open: &'a mut bool,
    pub server_status: &'a mut Option<String>,
    pub recent_events: &'a mut Vec<realtime::Event>,
    pub session: &'a mut SessionState,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::OpenScreen(target) => handle_screen_switch(ctx, target),
        NavbarEvent::ToggleDisplayMode => handle_toggle_display_mode(ctx),
    }
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match settings::update(message) {
        SettingsEvent::LanguageSelected(locale) => {
            persistence::apply_language_change(ctx.i18n, ctx.store, locale);
            Task::none()
        }
        SettingsEvent::ToggleDisplayMode => handle_toggle_display_mode(ctx),
    }
}

pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    *ctx.screen = target;
    ctx.session.last_screen = target;

    if target == Screen::Dashboard {
        // Returning to the dashboard re-checks the service.
        let url = status_url(ctx.providers.realtime.server_url());
        ctx.providers.queries.invalidate(&url);
        let queries = ctx.providers.queries.clone();
        return Task::perform(
            async move { queries.get_or_fetch(&url).await },
            Message::ServerStatusFetched,
        );
    }

    Task::none()
}

/// Inverts the display mode, re-derives the theme descriptor, and persists
/// the new choice.
pub fn handle_toggle_display_mode(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.mode = ctx.mode.toggled();
    ctx.providers.theme = ThemeDescriptor::derive(*ctx.mode);
    persistence::persist_display_mode(ctx.store, *ctx.mode);
    Task::none()
}

pub fn handle_server_status(
    ctx: &mut UpdateContext<'_>,
    result: Result<String, Error>,
) -> Task<Message> {
    match result {
        Ok(body) => {
            // A reachable backend counts as an established service session
            // until a transport reports otherwise.
            *ctx.server_status = Some(body.lines().next().unwrap_or_default().to_string());
            ctx.publisher.set_state(ConnectionState::Connected);
        }
        Err(error) => {
            eprintln!("Failed to fetch server status: {:?}", error);
            *ctx.server_status = None;
            ctx.publisher.set_state(ConnectionState::Disconnected);
        }
    }
    Task::none()
}

/// Drains the real-time feed without blocking, newest first.
pub fn handle_realtime_poll(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    while let Some(event) = ctx.providers.realtime.try_next_event() {
        ctx.recent_events.insert(0, event);
    }
    ctx.recent_events.truncate(MAX_RECENT_EVENTS);
    Task::none()
}

pub fn handle_window_close(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Err(error) = ctx.session.save() {
        eprintln!("Failed to save session state: {:?}", error);
    }
    Task::none()
}
