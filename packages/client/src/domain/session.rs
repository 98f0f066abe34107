//! Session state: transcript, draft, typing indicator and theme.

use super::{Message, Theme};

/// Everything the chat screen shows, owned by the controller.
///
/// `typing` is true iff a user message has been sent and no bot message
/// has arrived since.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    messages: Vec<Message>,
    input: String,
    typing: bool,
    theme: Theme,
}

impl SessionState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Replace the draft.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Commit the draft as a user message.
    ///
    /// Returns the raw draft to put on the wire, or `None` (with the state
    /// left untouched) when the draft is empty or whitespace-only.
    pub fn send_message(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }

        let text = std::mem::take(&mut self.input);
        self.messages.push(Message::user(text.clone()));
        self.typing = true;
        Some(text)
    }

    /// Append an inbound frame as a bot message.
    pub fn receive(&mut self, frame: &str) {
        self.messages.push(Message::bot(frame.trim()));
        self.typing = false;
    }

    /// Clear transcript, draft and typing. The theme is kept.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.input.clear();
        self.typing = false;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Whether the most recent message asks for a password.
    pub fn is_password_prompt(&self) -> bool {
        self.messages
            .last()
            .is_some_and(|message| message.mentions_password())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sender;

    #[test]
    fn test_send_message_appends_user_message() {
        // テスト項目: 空でない下書きを送信すると、ユーザーメッセージが1件追加される
        // given (前提条件):
        let mut session = SessionState::new(Theme::Dark);
        session.set_draft("Tokyo");

        // when (操作):
        let outbound = session.send_message();

        // then (期待する結果):
        assert_eq!(outbound.as_deref(), Some("Tokyo"));
        assert_eq!(session.messages(), &[Message::user("Tokyo")]);
        assert_eq!(session.input(), "");
        assert!(session.is_typing());
    }

    #[test]
    fn test_send_message_keeps_raw_draft() {
        // テスト項目: 送信される文字列はトリムされない
        // given (前提条件):
        let mut session = SessionState::default();
        session.set_draft("  3 days  ");

        // when (操作):
        let outbound = session.send_message();

        // then (期待する結果):
        assert_eq!(outbound.as_deref(), Some("  3 days  "));
        assert_eq!(session.messages()[0].text(), "  3 days  ");
    }

    #[test]
    fn test_send_empty_draft_is_noop() {
        // テスト項目: 空の下書きを送信しても状態は変わらない
        // given (前提条件):
        let mut session = SessionState::default();
        let before = session.clone();

        // when (操作):
        let outbound = session.send_message();

        // then (期待する結果):
        assert!(outbound.is_none());
        assert_eq!(session, before);
    }

    #[test]
    fn test_send_whitespace_draft_is_noop() {
        // テスト項目: 空白のみの下書きを送信しても状態は変わらない
        // given (前提条件):
        let mut session = SessionState::default();
        session.receive("Hi there!");
        session.set_draft(" \t ");
        let before = session.clone();

        // when (操作):
        let outbound = session.send_message();

        // then (期待する結果):
        assert!(outbound.is_none());
        assert_eq!(session, before);
        assert_eq!(session.input(), " \t ");
    }

    #[test]
    fn test_receive_appends_bot_message_and_clears_typing() {
        // テスト項目: フレーム受信でボットメッセージが追加され、入力中表示が解除される
        // given (前提条件):
        let mut session = SessionState::default();
        session.set_draft("hi");
        session.send_message();

        // when (操作):
        session.receive("Hello");

        // then (期待する結果):
        assert_eq!(session.messages().last(), Some(&Message::bot("Hello")));
        assert!(!session.is_typing());
    }

    #[test]
    fn test_receive_trims_frame() {
        // テスト項目: 受信フレームの前後の空白が除去される
        // given (前提条件):
        let mut session = SessionState::default();

        // when (操作):
        session.receive("Where do you want to go? \n");

        // then (期待する結果):
        assert_eq!(session.messages()[0].text(), "Where do you want to go?");
        assert_eq!(session.messages()[0].sender(), Sender::Bot);
    }

    #[test]
    fn test_messages_keep_arrival_order() {
        // テスト項目: メッセージは到着順に保持され、重複も除去されない
        // given (前提条件):
        let mut session = SessionState::default();

        // when (操作):
        session.receive("a");
        session.set_draft("b");
        session.send_message();
        session.receive("a");

        // then (期待する結果):
        let texts: Vec<&str> = session.messages().iter().map(Message::text).collect();
        assert_eq!(texts, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_reset_clears_session_but_keeps_theme() {
        // テスト項目: リセットでメッセージ・下書き・入力中表示が消え、テーマは維持される
        // given (前提条件):
        let mut session = SessionState::new(Theme::Light);
        session.receive("Hello");
        session.set_draft("Paris");
        session.send_message();
        session.set_draft("unsent");

        // when (操作):
        session.reset();

        // then (期待する結果):
        assert!(session.messages().is_empty());
        assert_eq!(session.input(), "");
        assert!(!session.is_typing());
        assert_eq!(session.theme(), Theme::Light);
    }

    #[test]
    fn test_password_prompt_detection() {
        // テスト項目: 最新メッセージに "password" が含まれる場合のみパスワード入力と判定される
        // given (前提条件):
        let mut session = SessionState::default();
        assert!(!session.is_password_prompt());

        // when (操作):
        session.receive("Please enter your Password:");

        // then (期待する結果):
        assert!(session.is_password_prompt());

        session.receive("Thanks! Where do you want to go?");
        assert!(!session.is_password_prompt());
    }

    #[test]
    fn test_toggle_theme_twice_is_identity() {
        // テスト項目: テーマを2回切り替えると元に戻る
        // given (前提条件):
        let mut session = SessionState::new(Theme::Dark);

        // when (操作):
        session.toggle_theme();
        let toggled = session.theme();
        session.toggle_theme();

        // then (期待する結果):
        assert_eq!(toggled, Theme::Light);
        assert_eq!(session.theme(), Theme::Dark);
    }
}
