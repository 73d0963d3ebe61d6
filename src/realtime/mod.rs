// SPDX-License-Identifier: MPL-2.0
//! Real-time connection handle.
//!
//! The transport itself lives elsewhere; this module only models what the
//! view tree consumes: a connection state and an ordered, non-blocking event
//! feed. A transport (or a test) feeds the handle through its
//! [`EventPublisher`].

use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

/// Connection lifecycle as reported to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

impl ConnectionState {
    /// The i18n message key for this state.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ConnectionState::Disconnected => "connection-disconnected",
            ConnectionState::Connecting => "connection-connecting",
            ConnectionState::Connected => "connection-connected",
        }
    }
}

/// One event delivered over the real-time channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub kind: String,
    pub payload: String,
    pub received_at: DateTime<Utc>,
}

impl Event {
    #[must_use]
    pub fn new(kind: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: payload.into(),
            received_at: Utc::now(),
        }
    }
}

/// Feeding side of the channel, owned by the transport.
#[derive(Clone)]
pub struct EventPublisher {
    sender: UnboundedSender<Event>,
    state: Arc<Mutex<ConnectionState>>,
}

impl EventPublisher {
    /// Queues an event for the UI. Returns `false` once the handle is gone.
    pub fn publish(&self, event: Event) -> bool {
        self.sender.send(event).is_ok()
    }

    pub fn set_state(&self, state: ConnectionState) {
        if let Ok(mut current) = self.state.lock() {
            *current = state;
        }
    }
}

impl fmt::Debug for EventPublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventPublisher").finish()
    }
}

/// Consuming side handed to the view tree.
pub struct ConnectionHandle {
    server_url: String,
    state: Arc<Mutex<ConnectionState>>,
    events: Mutex<UnboundedReceiver<Event>>,
}

impl fmt::Debug for ConnectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionHandle")
            .field("server_url", &self.server_url)
            .field("state", &self.state())
            .finish()
    }
}

impl ConnectionHandle {
    /// Opens a handle for `server_url` and returns the publisher a transport
    /// uses to feed it. The handle starts out `Connecting`.
    #[must_use]
    pub fn open(server_url: impl Into<String>) -> (Self, EventPublisher) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let state = Arc::new(Mutex::new(ConnectionState::Connecting));

        let handle = Self {
            server_url: server_url.into(),
            state: state.clone(),
            events: Mutex::new(receiver),
        };
        let publisher = EventPublisher { sender, state };
        (handle, publisher)
    }

    #[must_use]
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    #[must_use]
    pub fn state(&self) -> ConnectionState {
        self.state
            .lock()
            .map(|state| *state)
            .unwrap_or(ConnectionState::Disconnected)
    }

    /// Non-blocking: the next pending event, if any. The handle reports
    /// `Disconnected` once every publisher is gone and the feed drained.
    #[must_use]
    pub fn try_next_event(&self) -> Option<Event> {
        let mut events = self.events.lock().ok()?;
        match events.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                drop(events);
                if let Ok(mut state) = self.state.lock() {
                    *state = ConnectionState::Disconnected;
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_starts_connecting() {
        let (handle, _publisher) = ConnectionHandle::open("http://localhost:8080");
        assert_eq!(handle.state(), ConnectionState::Connecting);
        assert_eq!(handle.server_url(), "http://localhost:8080");
    }

    #[test]
    fn events_arrive_in_publish_order() {
        let (handle, publisher) = ConnectionHandle::open("http://localhost:8080");

        assert!(publisher.publish(Event::new("ticket", "opened #1")));
        assert!(publisher.publish(Event::new("message", "hello")));

        assert_eq!(handle.try_next_event().map(|e| e.kind), Some("ticket".to_string()));
        assert_eq!(handle.try_next_event().map(|e| e.kind), Some("message".to_string()));
        assert_eq!(handle.try_next_event(), None);
    }

    #[test]
    fn publisher_updates_shared_state() {
        let (handle, publisher) = ConnectionHandle::open("http://localhost:8080");
        publisher.set_state(ConnectionState::Connected);
        assert_eq!(handle.state(), ConnectionState::Connected);
    }

    #[test]
    fn dropping_every_publisher_disconnects_the_handle() {
        let (handle, publisher) = ConnectionHandle::open("http://localhost:8080");
        publisher.set_state(ConnectionState::Connected);
        drop(publisher);

        assert_eq!(handle.try_next_event(), None);
        assert_eq!(handle.state(), ConnectionState::Disconnected);
    }

    #[test]
    fn publish_fails_once_the_handle_is_gone() {
        let (handle, publisher) = ConnectionHandle::open("http://localhost:8080");
        drop(handle);
        assert!(!publisher.publish(Event::new("ticket", "opened #2")));
    }

    #[test]
    fn state_keys_map_to_messages() {
        assert_eq!(
            ConnectionState::Connected.i18n_key(),
            "connection-connected"
        );
        assert_eq!(
            ConnectionState::Connecting.i18n_key(),
            "connection-connecting"
        );
    }
}
