//! tokio-tungstenite implementation of [`Connector`].

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use crate::error::ConnectionError;

use super::{Connection, ConnectionEvent, Connector, EventSender, SessionEvent, SessionId};

/// Commands from a [`WebSocketConnection`] handle to its socket task
#[derive(Debug)]
enum Outbound {
    Text(String),
    Close,
}

/// Opens WebSocket connections on the current tokio runtime
#[derive(Debug, Default, Clone, Copy)]
pub struct WebSocketConnector;

impl Connector for WebSocketConnector {
    fn connect(
        &mut self,
        endpoint: &str,
        session: SessionId,
        events: EventSender,
    ) -> Box<dyn Connection> {
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        tokio::spawn(socket_loop(
            endpoint.to_string(),
            session,
            events,
            outbound_rx,
        ));

        Box::new(WebSocketConnection {
            outbound: outbound_tx,
        })
    }
}

/// Handle to a socket driven by [`socket_loop`]
///
/// Dropping the handle closes the socket.
#[derive(Debug)]
pub struct WebSocketConnection {
    outbound: mpsc::UnboundedSender<Outbound>,
}

impl Connection for WebSocketConnection {
    fn send(&mut self, text: &str) -> Result<(), ConnectionError> {
        self.outbound
            .send(Outbound::Text(text.to_string()))
            .map_err(|_| ConnectionError::TaskStopped)
    }

    fn close(&mut self) {
        // The task may already be gone; nothing left to close then.
        let _ = self.outbound.send(Outbound::Close);
    }
}

/// Drive one socket from handshake to close.
///
/// Emits `Opened` after the handshake, `Message` for every text frame and a
/// single `Closed` at the end, whatever the reason.
async fn socket_loop(
    url: String,
    session: SessionId,
    events: EventSender,
    mut outbound_rx: mpsc::UnboundedReceiver<Outbound>,
) {
    let emit = |event: ConnectionEvent| {
        // The controller is gone when this fails; nobody is listening.
        let _ = events.send(SessionEvent::new(session, event));
    };

    let ws_stream = match connect_async(url.as_str()).await {
        Ok((ws_stream, _response)) => ws_stream,
        Err(e) => {
            tracing::warn!("Session {} failed to connect to {}: {}", session, url, e);
            emit(ConnectionEvent::Closed);
            return;
        }
    };

    tracing::info!("Session {} connected to {}", session, url);
    emit(ConnectionEvent::Opened);

    let (mut write, mut read) = ws_stream.split();
    let mut closing = false;

    loop {
        tokio::select! {
            message = read.next() => match message {
                Some(Ok(Message::Text(text))) => {
                    emit(ConnectionEvent::Message(text.as_str().to_string()));
                }
                Some(Ok(Message::Binary(data))) => {
                    tracing::debug!(
                        "Session {} ignored {} bytes of binary data",
                        session,
                        data.len()
                    );
                }
                Some(Ok(Message::Close(frame))) => {
                    tracing::info!("Session {} closed by server: {:?}", session, frame);
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!("Session {} read error: {}", session, e);
                    break;
                }
                None => break,
            },
            command = outbound_rx.recv(), if !closing => match command {
                Some(Outbound::Text(text)) => {
                    if let Err(e) = write.send(Message::Text(text.into())).await {
                        tracing::warn!("Session {} failed to send message: {}", session, e);
                        break;
                    }
                }
                Some(Outbound::Close) | None => {
                    tracing::debug!("Session {} closing", session);
                    closing = true;
                    if let Err(e) = write.send(Message::Close(None)).await {
                        tracing::debug!("Session {} close frame not sent: {}", session, e);
                        break;
                    }
                }
            },
        }
    }

    emit(ConnectionEvent::Closed);
}
