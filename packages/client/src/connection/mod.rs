//! Connection abstraction used by the chat controller.
//!
//! A connection is opened by a [`Connector`] and reports its lifecycle as
//! [`ConnectionEvent`]s on a channel. Every event is tagged with the
//! [`SessionId`] that opened the connection, so the controller can tell
//! events of the current session from leftovers of a superseded one.
//!
//! ```text
//! Connecting --Opened--> Open --Closed--> Closed
//!      \________________Closed_______________/
//! ```

mod websocket;

use std::fmt;

use tokio::sync::mpsc;

use crate::error::ConnectionError;

pub use websocket::WebSocketConnector;

/// Identifier of one game session, increasing with every reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[cfg(test)]
    fn value(&self) -> u64 {
        self.0
    }

    /// The identifier that follows this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle state of a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Open,
    Closed,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self {
            ConnectionState::Connecting => "connecting",
            ConnectionState::Open => "open",
            ConnectionState::Closed => "closed",
        };
        f.write_str(state)
    }
}

/// Something that happened on a connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionEvent {
    /// Handshake completed
    Opened,
    /// A text frame arrived
    Message(String),
    /// The connection is gone; emitted exactly once, also when connecting fails
    Closed,
}

/// A [`ConnectionEvent`] tagged with the session it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEvent {
    pub session: SessionId,
    pub event: ConnectionEvent,
}

impl SessionEvent {
    pub fn new(session: SessionId, event: ConnectionEvent) -> Self {
        Self { session, event }
    }
}

/// Sending half of the channel that carries [`SessionEvent`]s
pub type EventSender = mpsc::UnboundedSender<SessionEvent>;

/// Receiving half of the channel that carries [`SessionEvent`]s
pub type EventReceiver = mpsc::UnboundedReceiver<SessionEvent>;

/// Handle to one live connection
#[cfg_attr(test, mockall::automock)]
pub trait Connection {
    /// Queue a text frame; `text` is sent verbatim.
    fn send(&mut self, text: &str) -> Result<(), ConnectionError>;

    /// Ask the connection to close. Does not wait for the close to complete.
    fn close(&mut self);
}

/// Opens connections
pub trait Connector {
    /// Start connecting to `endpoint`.
    ///
    /// Returns immediately; the connection starts out `Connecting` and every
    /// later state change is reported on `events` under `session`.
    fn connect(
        &mut self,
        endpoint: &str,
        session: SessionId,
        events: EventSender,
    ) -> Box<dyn Connection>;
}
