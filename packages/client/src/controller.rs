//! Chat controller: owns the session and the live connection.
//!
//! Every event from the socket task and the input thread goes through
//! `ChatController::dispatch`, one at a time, so session state needs no
//! locking.

use crate::{
    domain::{SessionState, Theme},
    event::{ChatEvent, EventSender, Generation, UserAction},
    infrastructure::{Connection, Connector},
};

/// What the screen has to do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    Unchanged,
    Changed,
    Exit,
}

pub struct ChatController<C: Connector> {
    connector: C,
    events: EventSender,
    session: SessionState,
    connection: Option<Connection>,
    generation: Generation,
}

impl<C: Connector> ChatController<C> {
    pub fn new(connector: C, events: EventSender, theme: Theme) -> Self {
        Self {
            connector,
            events,
            session: SessionState::new(theme),
            connection: None,
            generation: Generation::default(),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Generation of the live connection, if any.
    pub fn connection_generation(&self) -> Option<Generation> {
        self.connection.as_ref().map(Connection::generation)
    }

    /// Open a new socket. Any previous one is dropped, which closes it.
    pub fn connect(&mut self) {
        self.generation = self.generation.next();
        tracing::debug!("Opening connection {}", self.generation);
        self.connection = Some(self.connector.open(self.generation, self.events.clone()));
    }

    /// Send the given draft. Empty or whitespace-only drafts are ignored.
    pub fn send_message(&mut self, draft: String) -> Update {
        self.session.set_draft(draft);
        let Some(text) = self.session.send_message() else {
            return Update::Unchanged;
        };

        match &self.connection {
            Some(connection) => {
                if let Err(e) = connection.send(text) {
                    tracing::error!("WebSocket error: {}", e);
                }
            }
            None => tracing::warn!("No connection, message not sent"),
        }

        Update::Changed
    }

    /// Close the socket, clear the session and reconnect.
    pub fn reset(&mut self) -> Update {
        drop(self.connection.take());
        self.session.reset();
        self.connect();
        Update::Changed
    }

    pub fn toggle_theme(&mut self) -> Update {
        self.session.toggle_theme();
        tracing::debug!("Theme switched to {}", self.session.theme());
        Update::Changed
    }

    /// Close the socket without reconnecting.
    pub fn shutdown(&mut self) {
        drop(self.connection.take());
    }

    pub fn dispatch(&mut self, event: ChatEvent) -> Update {
        match event {
            ChatEvent::Frame { generation, text } => {
                if !self.is_current(generation) {
                    tracing::debug!("Dropping frame from stale connection {}", generation);
                    return Update::Unchanged;
                }
                self.session.receive(&text);
                Update::Changed
            }
            ChatEvent::TransportError { generation, error } => {
                if self.is_current(generation) {
                    tracing::error!("WebSocket error: {}", error);
                } else {
                    tracing::debug!("Error on stale connection {}: {}", generation, error);
                }
                Update::Unchanged
            }
            ChatEvent::Closed { generation } => {
                if self.is_current(generation) {
                    tracing::info!("Server closed the connection");
                }
                Update::Unchanged
            }
            ChatEvent::User(action) => match action {
                UserAction::Submit(draft) => self.send_message(draft),
                UserAction::Reset => self.reset(),
                UserAction::ToggleTheme => self.toggle_theme(),
                UserAction::Quit => Update::Exit,
            },
        }
    }

    fn is_current(&self, generation: Generation) -> bool {
        self.connection_generation() == Some(generation)
    }
}

impl<C: Connector> Drop for ChatController<C> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
