//! View model of the chat screen.
//!
//! `ChatView` is derived from the session on every change and carries every
//! theme-dependent attribute, so rendering is a pure function of state.

use crate::domain::{Message, Palette, Rgb, Sender, SessionState, Theme};

pub const RESET_LABEL: &str = "Reset";
pub const TYPING_LABEL: &str = "Typing...";
pub const PLACEHOLDER: &str = "Type your message...";
pub const SPINNER: char = '⠋';
/// Prompt in front of the input line. It never changes, so a redraw in the
/// middle of a line cannot show stale state.
pub const PROMPT: &str = "you> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// How the input line echoes what is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Text,
    Masked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'t> {
    pub title: &'t str,
    pub reset_label: &'static str,
    pub reset_background: Rgb,
    pub theme_label: &'static str,
    pub theme_background: Rgb,
    pub button_foreground: Rgb,
    pub background: Rgb,
    pub foreground: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble<'a> {
    pub sender: Sender,
    /// Markdown source of the message body
    pub markdown: &'a str,
    pub align: Align,
    pub background: Rgb,
    pub foreground: Rgb,
}

impl<'a> Bubble<'a> {
    pub fn new(message: &'a Message, palette: &Palette) -> Self {
        match message.sender() {
            Sender::User => Self {
                sender: Sender::User,
                markdown: message.text(),
                align: Align::Right,
                background: palette.user_bubble_bg,
                foreground: palette.user_bubble_fg,
            },
            Sender::Bot => Self {
                sender: Sender::Bot,
                markdown: message.text(),
                align: Align::Left,
                background: palette.bot_bubble_bg,
                foreground: palette.bot_bubble_fg,
            },
        }
    }
}

/// Shown in the transcript while a reply is pending. The spinner glyph is
/// drawn once per repaint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingIndicator {
    pub label: &'static str,
    pub spinner: char,
    pub background: Rgb,
    pub foreground: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub mode: InputMode,
    pub background: Rgb,
    pub foreground: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatView<'s, 't> {
    pub theme: Theme,
    pub header: Header<'t>,
    pub bubbles: Vec<Bubble<'s>>,
    pub typing: Option<TypingIndicator>,
    pub input: InputView,
}

impl<'s, 't> ChatView<'s, 't> {
    pub fn build(session: &'s SessionState, title: &'t str) -> Self {
        let theme = session.theme();
        let palette = theme.palette();

        let header = Header {
            title,
            reset_label: RESET_LABEL,
            reset_background: palette.reset_button_bg,
            theme_label: theme.toggle_label(),
            theme_background: palette.toggle_button_bg,
            button_foreground: palette.button_fg,
            background: palette.background,
            foreground: palette.foreground,
        };

        let bubbles = session
            .messages()
            .iter()
            .map(|message| Bubble::new(message, &palette))
            .collect();

        let typing = session.is_typing().then(|| TypingIndicator {
            label: TYPING_LABEL,
            spinner: SPINNER,
            background: palette.bot_bubble_bg,
            foreground: palette.typing_fg,
        });

        let input = InputView {
            mode: if session.is_password_prompt() {
                InputMode::Masked
            } else {
                InputMode::Text
            },
            background: palette.input_bg,
            foreground: palette.input_fg,
        };

        Self {
            theme,
            header,
            bubbles,
            typing,
            input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLE: &str = "Travel";

    #[test]
    fn test_empty_session_view() {
        // テスト項目: 空のセッションではメッセージも入力中表示もない
        // given (前提条件):
        let session = SessionState::new(Theme::Dark);

        // when (操作):
        let view = ChatView::build(&session, TITLE);

        // then (期待する結果):
        assert!(view.bubbles.is_empty());
        assert!(view.typing.is_none());
        assert_eq!(view.input.mode, InputMode::Text);
        assert_eq!(view.header.title, TITLE);
        assert_eq!(view.header.reset_label, RESET_LABEL);
    }

    #[test]
    fn test_bubbles_follow_sender() {
        // テスト項目: ユーザーは右寄せ、ボットは左寄せで表示される
        // given (前提条件):
        let mut session = SessionState::new(Theme::Dark);
        session.receive("Where do you want to go?");
        session.set_draft("**Lisbon**");
        session.send_message();

        // when (操作):
        let view = ChatView::build(&session, TITLE);

        // then (期待する結果):
        assert_eq!(view.bubbles.len(), 2);
        assert_eq!(view.bubbles[0].align, Align::Left);
        assert_eq!(view.bubbles[0].sender, Sender::Bot);
        assert_eq!(view.bubbles[1].align, Align::Right);
        assert_eq!(view.bubbles[1].markdown, "**Lisbon**");
    }

    #[test]
    fn test_typing_shows_placeholder_and_spinner() {
        // テスト項目: 返信待ちの間は入力中表示とスピナーが出る
        // given (前提条件):
        let mut session = SessionState::new(Theme::Dark);
        session.set_draft("hello");
        session.send_message();

        // when (操作):
        let view = ChatView::build(&session, TITLE);

        // then (期待する結果):
        let typing = view.typing.expect("typing indicator");
        assert_eq!(typing.label, TYPING_LABEL);
        assert_eq!(typing.spinner, SPINNER);
    }

    #[test]
    fn test_password_prompt_masks_input() {
        // テスト項目: パスワードを求めるメッセージの後は入力がマスクされる
        // given (前提条件):
        let mut session = SessionState::new(Theme::Dark);
        session.receive("Please enter your Password:");

        // when (操作):
        let masked = ChatView::build(&session, TITLE).input.mode;
        session.receive("Thanks!");
        let unmasked = ChatView::build(&session, TITLE).input.mode;

        // then (期待する結果):
        assert_eq!(masked, InputMode::Masked);
        assert_eq!(unmasked, InputMode::Text);
    }

    #[test]
    fn test_theme_toggle_flips_render_attributes() {
        // テスト項目: テーマ切り替えで描画属性がすべて反転し、2回で元に戻る
        // given (前提条件):
        let mut session = SessionState::new(Theme::Dark);
        session.receive("Hi");
        let original = ChatView::build(&session, TITLE);
        let original_header = original.header.clone();
        let original_bubble = (original.bubbles[0].background, original.bubbles[0].foreground);
        let original_input = original.input.clone();

        // when (操作):
        session.toggle_theme();
        let toggled = ChatView::build(&session, TITLE);

        // then (期待する結果):
        assert_eq!(toggled.theme, Theme::Light);
        assert_ne!(toggled.header.background, original_header.background);
        assert_ne!(toggled.header.foreground, original_header.foreground);
        assert_ne!(toggled.header.theme_label, original_header.theme_label);
        assert_ne!(toggled.bubbles[0].background, original_bubble.0);
        assert_ne!(toggled.bubbles[0].foreground, original_bubble.1);
        assert_ne!(toggled.input.background, original_input.background);
        assert_ne!(toggled.input.foreground, original_input.foreground);

        session.toggle_theme();
        let restored = ChatView::build(&session, TITLE);
        assert_eq!(restored.header, original_header);
        assert_eq!(
            (restored.bubbles[0].background, restored.bubbles[0].foreground),
            original_bubble
        );
        assert_eq!(restored.input, original_input);
    }

    #[test]
    fn test_header_uses_palette_button_colours() {
        // テスト項目: ヘッダーのボタン色はパレットから取られる
        // given (前提条件):
        let session = SessionState::new(Theme::Light);

        // when (操作):
        let header = ChatView::build(&session, TITLE).header;

        // then (期待する結果):
        let palette = Theme::Light.palette();
        assert_eq!(header.reset_background, palette.reset_button_bg);
        assert_eq!(header.theme_background, palette.toggle_button_bg);
        assert_eq!(header.button_foreground, palette.button_fg);
    }
}
