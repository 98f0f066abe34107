//! Events consumed by the single dispatch loop.

use std::fmt;

use tokio::sync::mpsc;

/// Sequence number of a socket connection. Each reset opens the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Generation(u64);

impl Generation {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Something the user asked for at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// A submitted line, to be sent as the draft
    Submit(String),
    Reset,
    ToggleTheme,
    Quit,
}

/// Everything that can change the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// Inbound text frame
    Frame { generation: Generation, text: String },
    /// The transport failed; the connection is gone
    TransportError { generation: Generation, error: String },
    /// The peer closed the connection
    Closed { generation: Generation },
    User(UserAction),
}

impl ChatEvent {
    pub fn is_user(&self) -> bool {
        matches!(self, ChatEvent::User(_))
    }
}

pub type EventSender = mpsc::UnboundedSender<ChatEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<ChatEvent>;
