//! One game session: a connection plus the form wiring that belongs to it.

use crate::{
    config::ResetPolicy,
    connection::{Connection, ConnectionState, SessionId},
    error::ConnectionError,
};

/// A connection owned by the controller together with its handlers
///
/// The session is the only place that knows whether the connection may send,
/// and whether the form submission is still wired to it.
pub struct Session {
    id: SessionId,
    connection: Box<dyn Connection>,
    state: ConnectionState,
    submit_attached: bool,
}

impl Session {
    /// Wrap a freshly opened connection and attach the submit handler.
    pub fn new(id: SessionId, connection: Box<dyn Connection>) -> Self {
        Self {
            id,
            connection,
            state: ConnectionState::Connecting,
            submit_attached: true,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Whether form submissions are routed to this session
    pub fn accepts_submit(&self) -> bool {
        self.submit_attached
    }

    pub fn mark_open(&mut self) {
        if self.state == ConnectionState::Connecting {
            self.state = ConnectionState::Open;
        }
    }

    /// Record that the connection is gone and detach the submit handler.
    pub fn mark_closed(&mut self) {
        self.state = ConnectionState::Closed;
        self.submit_attached = false;
    }

    /// Send `text` verbatim.
    ///
    /// Fails with [`ConnectionError::NotOpen`] unless the connection is open.
    pub fn send(&mut self, text: &str) -> Result<(), ConnectionError> {
        if self.state != ConnectionState::Open {
            return Err(ConnectionError::NotOpen(self.state));
        }
        self.connection.send(text)
    }

    /// Detach this session before the next one is created.
    ///
    /// Under [`ResetPolicy::Abandon`] the connection is handed back still
    /// open; the caller keeps it until the server closes it.
    pub fn teardown(mut self, policy: ResetPolicy) -> Option<Box<dyn Connection>> {
        self.submit_attached = false;
        match policy {
            ResetPolicy::Close => {
                tracing::debug!("Closing superseded session {}", self.id);
                self.connection.close();
                None
            }
            ResetPolicy::Abandon => {
                tracing::debug!("Abandoning superseded session {}", self.id);
                Some(self.connection)
            }
        }
    }
}
