//! WebSocket transport built on tokio-tungstenite.

use futures_util::{SinkExt, StreamExt};
use tokio::sync::{mpsc, oneshot};
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use super::{Connection, Connector};
use crate::event::{ChatEvent, EventSender, Generation};

/// Opens raw-text WebSocket connections to a fixed endpoint.
///
/// Must be used from within a tokio runtime: every connection is driven by
/// its own spawned task.
#[derive(Debug, Clone)]
pub struct WebSocketConnector {
    url: String,
}

impl WebSocketConnector {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Connector for WebSocketConnector {
    fn open(&self, generation: Generation, events: EventSender) -> Connection {
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(run_socket(
            self.url.clone(),
            generation,
            outbound_rx,
            shutdown_rx,
            events,
        ));

        Connection::new(generation, outbound_tx, shutdown_tx)
    }
}

/// Drive one socket until it fails, the peer closes it or the handle is
/// dropped. Nothing is retried.
async fn run_socket(
    url: String,
    generation: Generation,
    mut outbound: mpsc::UnboundedReceiver<String>,
    mut shutdown: oneshot::Receiver<()>,
    events: EventSender,
) {
    tracing::info!("Connecting to {} (connection {})", url, generation);

    let ws_stream = tokio::select! {
        result = connect_async(url.as_str()) => match result {
            Ok((ws_stream, _response)) => ws_stream,
            Err(e) => {
                let _ = events.send(ChatEvent::TransportError {
                    generation,
                    error: e.to_string(),
                });
                return;
            }
        },
        _ = &mut shutdown => {
            tracing::debug!("Connection {} dropped before the handshake finished", generation);
            return;
        }
    };

    tracing::info!("Connected to chat server (connection {})", generation);

    let (mut write, mut read) = ws_stream.split();

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                if let Err(e) = write.send(Message::Close(None)).await {
                    tracing::debug!("Failed to send close frame: {}", e);
                }
                tracing::info!("Connection {} closed", generation);
                break;
            }
            outgoing = outbound.recv() => {
                let Some(text) = outgoing else {
                    break;
                };
                if let Err(e) = write.send(Message::Text(text.into())).await {
                    let _ = events.send(ChatEvent::TransportError {
                        generation,
                        error: e.to_string(),
                    });
                    break;
                }
            }
            incoming = read.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    let _ = events.send(ChatEvent::Frame {
                        generation,
                        text: text.as_str().to_owned(),
                    });
                }
                Some(Ok(Message::Close(_))) | None => {
                    let _ = events.send(ChatEvent::Closed { generation });
                    break;
                }
                Some(Ok(other)) => {
                    tracing::debug!("Ignoring non-text frame ({} bytes)", other.len());
                }
                Some(Err(e)) => {
                    let _ = events.send(ChatEvent::TransportError {
                        generation,
                        error: e.to_string(),
                    });
                    break;
                }
            }
        }
    }
}
