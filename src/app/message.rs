// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Screen;
use crate::error::Error;
use crate::ui::navbar;
use crate::ui::settings;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Settings(settings::Message),
    SwitchScreen(Screen),
    /// Invert the display mode, re-derive the theme, persist the choice.
    ToggleDisplayMode,
    /// Result of the startup server-status fetch.
    ServerStatusFetched(Result<String, Error>),
    /// Periodic drain of the real-time event feed.
    RealtimePoll(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
    /// Optional base URL of the chat service backend.
    pub server_url: Option<String>,
    /// Optional config directory override (for prefs.toml).
    /// Takes precedence over `CHATDESK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional data directory override (for session state).
    /// Takes precedence over `CHATDESK_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
}
