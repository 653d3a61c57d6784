//! Test fixtures shared by the controller and runner tests.

use std::{cell::RefCell, rc::Rc};

use tokio::sync::mpsc;

use crate::{
    config::ResetPolicy,
    connection::{
        Connection, ConnectionEvent, Connector, EventReceiver, EventSender, SessionEvent,
        SessionId,
    },
    controller::ChatController,
    error::{ClientError, ConnectionError},
    template::Templates,
    view::{MemoryPrompt, MemoryRegion, Page},
};

pub(crate) const ENDPOINT: &str = "ws://127.0.0.1:8000/chat";

/// What the connections opened by [`RecordingConnector`] saw
#[derive(Debug, Default)]
pub(crate) struct Wire {
    pub(crate) opened: Vec<(String, SessionId)>,
    pub(crate) sent: Vec<(SessionId, String)>,
    pub(crate) closed: Vec<SessionId>,
}

#[derive(Clone, Default)]
pub(crate) struct RecordingConnector {
    wire: Rc<RefCell<Wire>>,
}

struct RecordingConnection {
    session: SessionId,
    wire: Rc<RefCell<Wire>>,
}

impl Connector for RecordingConnector {
    fn connect(
        &mut self,
        endpoint: &str,
        session: SessionId,
        _events: EventSender,
    ) -> Box<dyn Connection> {
        self.wire
            .borrow_mut()
            .opened
            .push((endpoint.to_string(), session));
        Box::new(RecordingConnection {
            session,
            wire: self.wire.clone(),
        })
    }
}

impl Connection for RecordingConnection {
    fn send(&mut self, text: &str) -> Result<(), ConnectionError> {
        self.wire
            .borrow_mut()
            .sent
            .push((self.session, text.to_string()));
        Ok(())
    }

    fn close(&mut self) {
        self.wire.borrow_mut().closed.push(self.session);
    }
}

/// A controller over in-memory elements and a [`RecordingConnector`]
pub(crate) struct Harness {
    pub(crate) controller: ChatController<RecordingConnector>,
    pub(crate) wire: Rc<RefCell<Wire>>,
    pub(crate) prompt: MemoryPrompt,
    pub(crate) response: MemoryRegion,
    pub(crate) history: MemoryRegion,
    _events: EventReceiver,
}

pub(crate) fn harness_with_policy(policy: ResetPolicy) -> Harness {
    let prompt = MemoryPrompt::new();
    let response = MemoryRegion::new();
    let history = MemoryRegion::new();
    let templates =
        Templates::new("<p>{{data}}</p>", "<li>{{type}}|{{input}}|{{response}}</li>").unwrap();
    let page = Page::new(
        Box::new(prompt.clone()),
        Box::new(response.clone()),
        Box::new(history.clone()),
        templates,
    );
    let connector = RecordingConnector::default();
    let wire = connector.wire.clone();
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let controller = ChatController::new(page, connector, ENDPOINT.to_string(), policy, events_tx);

    Harness {
        controller,
        wire,
        prompt,
        response,
        history,
        _events: events_rx,
    }
}

pub(crate) fn harness() -> Harness {
    harness_with_policy(ResetPolicy::Close)
}

pub(crate) fn open(controller: &mut ChatController<RecordingConnector>, session: SessionId) {
    controller
        .handle_event(SessionEvent::new(session, ConnectionEvent::Opened))
        .unwrap();
}

pub(crate) fn deliver(
    controller: &mut ChatController<RecordingConnector>,
    session: SessionId,
    payload: &str,
) -> Result<(), ClientError> {
    controller.handle_event(SessionEvent::new(
        session,
        ConnectionEvent::Message(payload.to_string()),
    ))
}
