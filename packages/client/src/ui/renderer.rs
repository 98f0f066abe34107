//! Turns a `ChatView` into terminal text.
//!
//! Message bodies go through termimad, which is the only place message
//! text is transformed.

use termimad::{
    Alignment, CompoundStyle, MadSkin,
    crossterm::{
        Command,
        cursor::MoveTo,
        style::Color,
        terminal::{Clear, ClearType},
    },
    rgb,
};

use super::view::{Align, Bubble, ChatView, Header, TypingIndicator};
use crate::domain::{Rgb, Theme};

const MIN_WIDTH: usize = 20;

fn color(value: Rgb) -> Color {
    let Rgb(r, g, b) = value;
    rgb(r, g, b)
}

/// Markdown skin for one theme, with paragraph colours overridden.
fn skin(theme: Theme, foreground: Rgb, background: Rgb, align: Align) -> MadSkin {
    let mut skin = if theme.is_dark() {
        MadSkin::default_dark()
    } else {
        MadSkin::default_light()
    };
    skin.paragraph.set_fg(color(foreground));
    skin.paragraph.set_bg(color(background));
    skin.paragraph.align = match align {
        Align::Left => Alignment::Left,
        Align::Right => Alignment::Right,
    };
    skin
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    width: usize,
    clear_screen: bool,
}

impl Renderer {
    pub fn new(width: usize, clear_screen: bool) -> Self {
        Self {
            width: width.max(MIN_WIDTH),
            clear_screen,
        }
    }

    /// Size the output to the current terminal.
    pub fn from_terminal(clear_screen: bool) -> Self {
        let (width, _height) = termimad::terminal_size();
        Self::new(width as usize, clear_screen)
    }

    /// The whole screen: header, transcript and typing indicator.
    pub fn render(&self, view: &ChatView<'_, '_>) -> String {
        let mut output = String::new();

        if self.clear_screen {
            // writing into a String cannot fail
            let _ = Clear(ClearType::All).write_ansi(&mut output);
            let _ = MoveTo(0, 0).write_ansi(&mut output);
        }

        output.push_str(&self.render_header(view.theme, &view.header));
        for bubble in &view.bubbles {
            output.push_str(&self.render_bubble(view.theme, bubble));
        }
        if let Some(typing) = &view.typing {
            output.push_str(&self.render_typing(typing));
        }

        output
    }

    pub fn render_header(&self, theme: Theme, header: &Header<'_>) -> String {
        let skin = skin(theme, header.foreground, header.background, Align::Left);
        let title = format!("**{}**", header.title);
        let title = skin.text(&title, Some(self.width));
        let button = |background: Rgb, label: &str| {
            CompoundStyle::with_fgbg(color(header.button_foreground), color(background))
                .apply_to(format!(" {} ", label))
        };
        let reset = button(header.reset_background, header.reset_label);
        let theme_toggle = button(header.theme_background, header.theme_label);

        format!(
            "{}{} /reset   {} /theme   /quit\n{}\n",
            title,
            reset,
            theme_toggle,
            "─".repeat(self.width)
        )
    }

    pub fn render_bubble(&self, theme: Theme, bubble: &Bubble<'_>) -> String {
        let skin = skin(theme, bubble.foreground, bubble.background, bubble.align);
        let body = skin.text(bubble.markdown, Some(self.width));
        format!("{}\n", body)
    }

    pub fn render_typing(&self, typing: &TypingIndicator) -> String {
        let styled = CompoundStyle::with_fgbg(color(typing.foreground), color(typing.background))
            .apply_to(format!(" {} {} ", typing.spinner, typing.label));
        format!("{}\n", styled)
    }
}
