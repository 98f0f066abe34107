//! Colour themes and their palettes.

use std::fmt;

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

const WHITE: Rgb = Rgb(255, 255, 255);
const BLACK: Rgb = Rgb(0, 0, 0);
const GRAY_100: Rgb = Rgb(243, 244, 246);
const GRAY_200: Rgb = Rgb(229, 231, 235);
const GRAY_300: Rgb = Rgb(209, 213, 219);
const GRAY_700: Rgb = Rgb(55, 65, 81);
const GRAY_800: Rgb = Rgb(31, 41, 55);
const GRAY_900: Rgb = Rgb(17, 24, 39);
const BLUE_600: Rgb = Rgb(37, 99, 235);
const RED_500: Rgb = Rgb(239, 68, 68);

/// Every theme-dependent render attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub bot_bubble_bg: Rgb,
    pub bot_bubble_fg: Rgb,
    pub user_bubble_bg: Rgb,
    pub user_bubble_fg: Rgb,
    pub input_bg: Rgb,
    pub input_fg: Rgb,
    pub typing_fg: Rgb,
    pub reset_button_bg: Rgb,
    pub toggle_button_bg: Rgb,
    pub button_fg: Rgb,
}

/// Binary palette switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: GRAY_900,
                foreground: WHITE,
                bot_bubble_bg: GRAY_700,
                bot_bubble_fg: WHITE,
                user_bubble_bg: BLUE_600,
                user_bubble_fg: WHITE,
                input_bg: GRAY_800,
                input_fg: WHITE,
                typing_fg: GRAY_300,
                reset_button_bg: RED_500,
                toggle_button_bg: GRAY_700,
                button_fg: WHITE,
            },
            Theme::Light => Palette {
                background: WHITE,
                foreground: BLACK,
                bot_bubble_bg: GRAY_200,
                bot_bubble_fg: BLACK,
                user_bubble_bg: BLUE_600,
                user_bubble_fg: WHITE,
                input_bg: GRAY_100,
                input_fg: BLACK,
                typing_fg: GRAY_300,
                reset_button_bg: RED_500,
                toggle_button_bg: GRAY_700,
                button_fg: WHITE,
            },
        }
    }

    /// Label of the control that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "🌞 Light",
            Theme::Light => "🌙 Dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

/// Initial theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    /// Follow the terminal's colour scheme
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemePreference {
    /// Resolve to a concrete theme. `colorfgbg` is the value of the
    /// `COLORFGBG` environment variable, if any.
    pub fn resolve(self, colorfgbg: Option<&str>) -> Theme {
        match self {
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::Light => Theme::Light,
            ThemePreference::Auto => detect_color_scheme(colorfgbg).unwrap_or_default(),
        }
    }
}

/// Interpret `COLORFGBG` ("fg;bg" or "fg;default;bg"). The last field is the
/// background colour index of the 16-colour terminal palette.
pub(crate) fn detect_color_scheme(colorfgbg: Option<&str>) -> Option<Theme> {
    let background: u8 = colorfgbg?.rsplit(';').next()?.trim().parse().ok()?;
    match background {
        0..=6 | 8 => Some(Theme::Dark),
        7 | 9..=15 => Some(Theme::Light),
        _ => None,
    }
}
