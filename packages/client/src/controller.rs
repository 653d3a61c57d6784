//! The chat controller: owns the session and mediates between the page and
//! the socket.
//!
//! All methods run on one thread, one event at a time. Handler failures are
//! returned to the caller, which reports them and keeps going.

use std::collections::HashMap;

use guessme_shared::protocol::GameMessage;

use crate::{
    config::ResetPolicy,
    connection::{Connection, ConnectionEvent, Connector, EventSender, SessionEvent, SessionId},
    domain::{HistoryEntry, prepend_fragment},
    error::ClientError,
    session::Session,
    view::{Page, PromptField},
};

pub struct ChatController<C: Connector> {
    page: Page,
    connector: C,
    endpoint: String,
    policy: ResetPolicy,
    events: EventSender,
    session: Option<Session>,
    /// Connections left open by [`ResetPolicy::Abandon`], until they close
    abandoned: HashMap<SessionId, Box<dyn Connection>>,
    last_session: SessionId,
}

impl<C: Connector> ChatController<C> {
    /// Create a controller with no session yet; call [`Self::initialize`]
    /// to start the first one.
    pub fn new(
        page: Page,
        connector: C,
        endpoint: String,
        policy: ResetPolicy,
        events: EventSender,
    ) -> Self {
        Self {
            page,
            connector,
            endpoint,
            policy,
            events,
            session: None,
            abandoned: HashMap::new(),
            last_session: SessionId::new(0),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn prompt_mut(&mut self) -> &mut dyn PromptField {
        self.page.prompt.as_mut()
    }

    /// The session form submissions currently go to
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Page load: start the first session.
    pub fn initialize(&mut self) -> SessionId {
        tracing::debug!("Initializing chat page for {}", self.endpoint);
        self.reset()
    }

    /// The reset control was clicked.
    pub fn click_reset(&mut self) -> SessionId {
        self.page.prompt.set_disabled(true);
        self.reset()
    }

    /// Replace the current session with a new one and clear the page.
    pub fn reset(&mut self) -> SessionId {
        if let Some(previous) = self.session.take() {
            let previous_id = previous.id();
            if let Some(connection) = previous.teardown(self.policy) {
                self.abandoned.insert(previous_id, connection);
            }
        }

        let id = self.last_session.next();
        self.last_session = id;

        let connection = self
            .connector
            .connect(&self.endpoint, id, self.events.clone());
        self.session = Some(Session::new(id, connection));
        tracing::info!("Session {} connecting to {}", id, self.endpoint);

        self.page.history.set_content(String::new());
        self.page.response.set_content(String::new());

        id
    }

    /// The form was submitted: send the prompt text verbatim and clear it.
    ///
    /// The prompt stays disabled until the next message arrives. Nothing is
    /// sent when no session has its submit handler attached.
    pub fn submit(&mut self) -> Result<(), ClientError> {
        let Some(session) = self.session.as_mut().filter(|s| s.accepts_submit()) else {
            tracing::warn!("Form submitted without a connected session; ignoring");
            return Ok(());
        };

        let text = self.page.prompt.value();
        session.send(&text)?;
        tracing::debug!("Session {} sent {:?}", session.id(), text);

        self.page.prompt.set_value("");
        self.page.prompt.set_disabled(true);
        Ok(())
    }

    /// Dispatch one event from any session.
    ///
    /// Messages render whichever session they come from, since the server
    /// may still answer an attempt made before a reset. Open and close only
    /// matter for the current session.
    pub fn handle_event(&mut self, event: SessionEvent) -> Result<(), ClientError> {
        let SessionEvent { session, event } = event;

        match event {
            ConnectionEvent::Opened => match self.current_mut(session) {
                Some(current) => {
                    current.mark_open();
                    tracing::info!("Session {} open", session);
                }
                None => tracing::debug!("Superseded session {} opened", session),
            },
            ConnectionEvent::Message(payload) => {
                if self.current_mut(session).is_none() {
                    tracing::debug!("Message from superseded session {}", session);
                }
                self.render(&payload)?;
            }
            ConnectionEvent::Closed => {
                self.abandoned.remove(&session);
                match self.current_mut(session) {
                    Some(current) => {
                        current.mark_closed();
                        tracing::info!("Session {} closed", session);
                    }
                    None => tracing::debug!("Superseded session {} closed", session),
                }
            }
        }

        Ok(())
    }

    /// Render one inbound frame onto the page.
    ///
    /// Fails on a payload that is not JSON, leaving the page untouched.
    pub fn render(&mut self, payload: &str) -> Result<(), ClientError> {
        let message = GameMessage::parse(payload)?;
        tracing::info!("Received {:?}", message);

        let response = self.page.templates.render_response(&message.message)?;
        self.page.response.set_content(response);

        if let Some(entry) = HistoryEntry::from_message(&message) {
            let fragment = self.page.templates.render_history(&entry)?;
            let history = prepend_fragment(&fragment, &self.page.history.content());
            self.page.history.set_content(history);
        }

        self.page.prompt.set_disabled(false);
        self.page.prompt.focus();
        Ok(())
    }

    fn current_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.session.as_mut().filter(|session| session.id() == id)
    }
}
