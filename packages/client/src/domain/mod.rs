//! Domain model for the chat session.
//!
//! Pure data and state transitions with no I/O, so every rule about the
//! transcript, the draft and the typing indicator can be tested directly.

mod message;
mod session;
mod theme;

pub use message::{Message, Sender};
pub use session::SessionState;
pub use theme::{Palette, Rgb, Theme, ThemePreference};
