//! Client configuration.

use crate::{
    domain::{Theme, ThemePreference},
    error::ConfigError,
};

/// The backend endpoint the original widget talks to.
pub const DEFAULT_URL: &str = "ws://localhost:8000/ws";

pub const DEFAULT_TITLE: &str = "✈️ AI Travel Assistant";

/// Validated client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    url: String,
    theme: Theme,
    title: String,
}

impl ClientConfig {
    /// Build a configuration, resolving the theme preference once against
    /// the terminal's colour scheme (`COLORFGBG`).
    pub fn new(
        url: impl Into<String>,
        preference: ThemePreference,
        colorfgbg: Option<&str>,
        title: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let url = url.into();
        if !(url.starts_with("ws://") || url.starts_with("wss://")) {
            return Err(ConfigError::InvalidUrl(url));
        }

        Ok(Self {
            url,
            theme: preference.resolve(colorfgbg),
            title: title.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_ws_and_wss() {
        // テスト項目: ws:// と wss:// の URL が受け入れられる
        // given (前提条件):

        // when (操作):
        let ws = ClientConfig::new(DEFAULT_URL, ThemePreference::Dark, None, DEFAULT_TITLE);
        let wss = ClientConfig::new("wss://example.com/ws", ThemePreference::Dark, None, "t");

        // then (期待する結果):
        assert_eq!(ws.unwrap().url(), DEFAULT_URL);
        assert_eq!(wss.unwrap().url(), "wss://example.com/ws");
    }

    #[test]
    fn test_new_rejects_http_url() {
        // テスト項目: ws 以外のスキームはエラーになる
        // given (前提条件):
        let url = "http://localhost:8000/ws";

        // when (操作):
        let result = ClientConfig::new(url, ThemePreference::Auto, None, DEFAULT_TITLE);

        // then (期待する結果):
        assert_eq!(result, Err(ConfigError::InvalidUrl(url.to_string())));
    }

    #[test]
    fn test_new_resolves_theme_from_terminal() {
        // テスト項目: auto 指定時は端末の配色からテーマが決まる
        // given (前提条件):
        let colorfgbg = Some("0;15");

        // when (操作):
        let config =
            ClientConfig::new(DEFAULT_URL, ThemePreference::Auto, colorfgbg, DEFAULT_TITLE)
                .unwrap();

        // then (期待する結果):
        assert_eq!(config.theme(), Theme::Light);
    }

    #[test]
    fn test_defaults_without_terminal_hint() {
        // テスト項目: 既定値と配色情報なしの auto 指定ではダークテーマになる
        // given (前提条件):

        // when (操作):
        let config =
            ClientConfig::new(DEFAULT_URL, ThemePreference::Auto, None, DEFAULT_TITLE).unwrap();

        // then (期待する結果):
        assert_eq!(config.url(), "ws://localhost:8000/ws");
        assert_eq!(config.theme(), Theme::Dark);
        assert_eq!(config.title(), DEFAULT_TITLE);
    }
}
