//! Terminal chat client for the travel assistant backend.
//!
//! Connects to the backend WebSocket and exchanges raw text frames.
//! Type a message and press Enter to send. `/reset` clears the chat and
//! reconnects, `/theme` switches between dark and light, `/quit` exits.
//! The input is masked while the assistant is asking for a password.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin voyage-client
//! cargo run --bin voyage-client -- --url ws://127.0.0.1:8000/ws --theme light
//! ```

use clap::{Parser, ValueEnum};

use voyage_client::{
    ClientConfig,
    config::{DEFAULT_TITLE, DEFAULT_URL},
    domain::ThemePreference,
};
use voyage_shared::logger::setup_logger;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    /// Follow the terminal's colour scheme
    Auto,
    Dark,
    Light,
}

impl From<ThemeArg> for ThemePreference {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Auto => ThemePreference::Auto,
            ThemeArg::Dark => ThemePreference::Dark,
            ThemeArg::Light => ThemePreference::Light,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "voyage-client")]
#[command(about = "Terminal chat client for the travel assistant", long_about = None)]
struct Args {
    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = DEFAULT_URL)]
    url: String,

    /// Initial colour theme
    #[arg(short = 't', long, value_enum, default_value_t = ThemeArg::Auto)]
    theme: ThemeArg,

    /// Title shown in the header
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(&[env!("CARGO_PKG_NAME"), env!("CARGO_BIN_NAME")], "warn");

    let args = Args::parse();

    let colorfgbg = std::env::var("COLORFGBG").ok();
    let config = match ClientConfig::new(
        args.url,
        args.theme.into(),
        colorfgbg.as_deref(),
        args.title,
    ) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = voyage_client::run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
