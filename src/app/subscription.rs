// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::realtime::ConnectionState;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Listens for window close requests so session state can be saved before
/// the process exits.
pub fn create_close_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            Some(Message::WindowCloseRequested(window_id))
        } else {
            None
        }
    })
}

/// Periodic drain of the real-time feed while a connection is live.
///
/// Stops ticking once the handle reports `Disconnected`; the feed can only
/// refill after a reconnect flips the state back.
pub fn create_realtime_subscription(state: ConnectionState) -> Subscription<Message> {
    match state {
        ConnectionState::Disconnected => Subscription::none(),
        ConnectionState::Connecting | ConnectionState::Connected => {
            time::every(Duration::from_millis(250)).map(Message::RealtimePoll)
        }
    }
}
