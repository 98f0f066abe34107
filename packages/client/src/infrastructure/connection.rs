//! Socket handle and the connector seam.

use tokio::sync::{mpsc, oneshot};

use crate::{
    error::ClientError,
    event::{EventSender, Generation},
};

/// Opens sockets to the chat backend.
#[cfg_attr(test, mockall::automock)]
pub trait Connector {
    /// Open a socket tagged with `generation`. Inbound frames, errors and
    /// closes are reported on `events`.
    fn open(&self, generation: Generation, events: EventSender) -> Connection;
}

/// Owned handle to one live socket.
///
/// Dropping the handle closes the socket: the socket task is signalled and
/// sends a Close frame before it exits.
#[derive(Debug)]
pub struct Connection {
    generation: Generation,
    outbound: mpsc::UnboundedSender<String>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Connection {
    pub fn new(
        generation: Generation,
        outbound: mpsc::UnboundedSender<String>,
        shutdown: oneshot::Sender<()>,
    ) -> Self {
        Self {
            generation,
            outbound,
            shutdown: Some(shutdown),
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Queue a raw text frame. Frames queued while the socket is still
    /// connecting go out once the handshake completes.
    pub fn send(&self, text: String) -> Result<(), ClientError> {
        self.outbound.send(text).map_err(|_| {
            ClientError::ConnectionError(format!("connection {} is closed", self.generation))
        })
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            tracing::debug!("Closing connection {}", self.generation);
            // the task may already be gone
            let _ = shutdown.send(());
        }
    }
}
