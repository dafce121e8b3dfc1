//! Color palette and glyphs for the Folio TUI.
//!
//! The five theme tokens come from the engine's theme store; everything else
//! (muted text, status colors, syntax accents) is derived here.

use ratatui::style::{Color, Modifier, Style};

use folio_engine::App;
use folio_types::{Rgb, ThemeColors};

/// Fixed accent colors shared by every theme.
mod colors {
    use super::Color;

    pub const GREEN: Color = Color::Rgb(78, 201, 176);
    pub const YELLOW: Color = Color::Rgb(220, 220, 170);
    pub const ORANGE: Color = Color::Rgb(206, 145, 120);
    pub const RED: Color = Color::Rgb(244, 71, 71);
    pub const BLUE: Color = Color::Rgb(86, 156, 214);
    pub const PURPLE: Color = Color::Rgb(197, 134, 192);

    pub const STATUS_FG: Color = Color::Rgb(255, 255, 255);
}

const fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

/// `a` moved a fraction `num / den` of the way towards `b`.
fn mix(a: Rgb, b: Rgb, num: u16, den: u16) -> Color {
    let channel = |x: u8, y: u8| {
        let (x, y) = (u16::from(x), u16::from(y));
        let mixed = (x * (den - num) + y * num) / den;
        u8::try_from(mixed).unwrap_or(u8::MAX)
    };
    Color::Rgb(channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}

/// Resolved palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub bg_sidebar: Color,
    pub bg_highlight: Color,
    pub bg_popup: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub status_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub string: Color,
    pub keyword: Color,
    pub number: Color,
}

impl Palette {
    #[must_use]
    pub fn from_colors(colors: ThemeColors) -> Self {
        Self {
            bg: rgb(colors.background),
            bg_sidebar: rgb(colors.sidebar),
            bg_highlight: mix(colors.sidebar, colors.accent, 1, 4),
            bg_popup: rgb(colors.sidebar),
            border: rgb(colors.border),
            text: rgb(colors.text),
            text_muted: mix(colors.text, colors.background, 2, 5),
            accent: rgb(colors.accent),
            status_fg: colors::STATUS_FG,
            success: colors::GREEN,
            warning: colors::YELLOW,
            error: colors::RED,
            string: colors::ORANGE,
            keyword: colors::PURPLE,
            number: colors::BLUE,
        }
    }
}

#[must_use]
pub fn palette(app: &App) -> Palette {
    Palette::from_colors(app.theme().colors())
}

/// ASCII/Unicode glyphs for tree, tabs and markers.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub folder_open: &'static str,
    pub folder_closed: &'static str,
    pub file: &'static str,
    pub close: &'static str,
    pub selected: &'static str,
    pub bullet: &'static str,
    pub branch: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub separator: &'static str,
    pub check: &'static str,
    pub bar_full: &'static str,
    pub bar_empty: &'static str,
}

#[must_use]
pub fn glyphs(ascii_only: bool) -> Glyphs {
    if ascii_only {
        Glyphs {
            folder_open: "v",
            folder_closed: ">",
            file: "-",
            close: "x",
            selected: ">",
            bullet: "*",
            branch: "git:",
            error: "E",
            warning: "W",
            separator: "/",
            check: "*",
            bar_full: "#",
            bar_empty: ".",
        }
    } else {
        Glyphs {
            folder_open: "▾",
            folder_closed: "▸",
            file: "·",
            close: "×",
            selected: "▸",
            bullet: "•",
            branch: "⎇",
            error: "⊗",
            warning: "⚠",
            separator: "›",
            check: "✓",
            bar_full: "█",
            bar_empty: "░",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn selected_row(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text)
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn status_bar(palette: &Palette) -> Style {
        Style::default().fg(palette.status_fg).bg(palette.accent)
    }

    #[must_use]
    pub fn popup_border(palette: &Palette) -> Style {
        Style::default().fg(palette.accent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::ThemeId;

    #[test]
    fn palette_follows_theme_tokens() {
        let colors = ThemeId::Dracula.colors();
        let palette = Palette::from_colors(colors);
        assert_eq!(palette.bg, rgb(colors.background));
        assert_eq!(palette.accent, rgb(colors.accent));
        assert_eq!(palette.border, rgb(colors.border));
    }

    #[test]
    fn muted_text_sits_between_text_and_background() {
        let colors = ThemeColors {
            background: Rgb(0, 0, 0),
            sidebar: Rgb(0, 0, 0),
            accent: Rgb(0, 0, 0),
            text: Rgb(250, 250, 250),
            border: Rgb(0, 0, 0),
        };
        assert_eq!(
            Palette::from_colors(colors).text_muted,
            Color::Rgb(150, 150, 150)
        );
    }

    #[test]
    fn ascii_glyphs_are_ascii() {
        let g = glyphs(true);
        for glyph in [g.folder_open, g.folder_closed, g.close, g.separator, g.bar_full] {
            assert!(glyph.is_ascii());
        }
    }
}
