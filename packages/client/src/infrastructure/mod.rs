//! Transport to the chat backend.
//!
//! The controller only sees the `Connector` trait and the `Connection`
//! handle; `websocket` provides the tokio-tungstenite implementation.

mod connection;
pub mod websocket;

pub use connection::{Connection, Connector};
#[cfg(test)]
pub use connection::MockConnector;
pub use websocket::WebSocketConnector;
