//! Terminal chat client for a single WebSocket chat backend.
//!
//! The client keeps one live socket, an append-only transcript, a typing
//! indicator and a dark/light theme. Inbound frames are raw text rendered
//! as markdown; outbound frames are the raw lines typed at the prompt.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;

pub mod config;
pub mod controller;
pub mod error;
pub mod event;
mod runner;

pub use config::ClientConfig;
pub use controller::{ChatController, Update};
pub use error::{ClientError, ConfigError};
pub use event::{ChatEvent, Generation, UserAction};
pub use runner::run_client;
