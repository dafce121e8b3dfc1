//! Editor color themes.

use std::fmt;

use crate::parse::{EnumKind, EnumParseError};

const THEME_VALUES: &[&str] = &["dark", "light", "monokai", "dracula", "github"];

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb`.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// The five color tokens every theme resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: Rgb,
    pub sidebar: Rgb,
    pub accent: Rgb,
    pub text: Rgb,
    pub border: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeId {
    #[default]
    Dark,
    Light,
    Monokai,
    Dracula,
    Github,
}

impl ThemeId {
    pub const ALL: [ThemeId; 5] = [
        ThemeId::Dark,
        ThemeId::Light,
        ThemeId::Monokai,
        ThemeId::Dracula,
        ThemeId::Github,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeId::Dark => "dark",
            ThemeId::Light => "light",
            ThemeId::Monokai => "monokai",
            ThemeId::Dracula => "dracula",
            ThemeId::Github => "github",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            ThemeId::Dark => "Dark+ (Default)",
            ThemeId::Light => "Light+",
            ThemeId::Monokai => "Monokai",
            ThemeId::Dracula => "Dracula",
            ThemeId::Github => "GitHub Dark",
        }
    }

    #[must_use]
    pub const fn colors(self) -> ThemeColors {
        match self {
            ThemeId::Dark => ThemeColors {
                background: Rgb(0x1e, 0x1e, 0x1e),
                sidebar: Rgb(0x25, 0x25, 0x26),
                accent: Rgb(0x00, 0x7a, 0xcc),
                text: Rgb(0xd4, 0xd4, 0xd4),
                border: Rgb(0x3e, 0x44, 0x51),
            },
            ThemeId::Light => ThemeColors {
                background: Rgb(0xff, 0xff, 0xff),
                sidebar: Rgb(0xf3, 0xf3, 0xf3),
                accent: Rgb(0x00, 0x66, 0xb8),
                text: Rgb(0x33, 0x33, 0x33),
                border: Rgb(0xe0, 0xe0, 0xe0),
            },
            ThemeId::Monokai => ThemeColors {
                background: Rgb(0x27, 0x28, 0x22),
                sidebar: Rgb(0x1e, 0x1f, 0x1c),
                accent: Rgb(0xf9, 0x26, 0x72),
                text: Rgb(0xf8, 0xf8, 0xf2),
                border: Rgb(0x3e, 0x3d, 0x32),
            },
            ThemeId::Dracula => ThemeColors {
                background: Rgb(0x28, 0x2a, 0x36),
                sidebar: Rgb(0x21, 0x22, 0x2c),
                accent: Rgb(0xbd, 0x93, 0xf9),
                text: Rgb(0xf8, 0xf8, 0xf2),
                border: Rgb(0x44, 0x47, 0x5a),
            },
            ThemeId::Github => ThemeColors {
                background: Rgb(0x0d, 0x11, 0x17),
                sidebar: Rgb(0x16, 0x1b, 0x22),
                accent: Rgb(0x58, 0xa6, 0xff),
                text: Rgb(0xc9, 0xd1, 0xd9),
                border: Rgb(0x30, 0x36, 0x3d),
            },
        }
    }

    /// Whether text should be dark on this background.
    #[must_use]
    pub const fn is_light(self) -> bool {
        matches!(self, ThemeId::Light)
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeId::Dark),
            "light" => Ok(ThemeId::Light),
            "monokai" => Ok(ThemeId::Monokai),
            "dracula" => Ok(ThemeId::Dracula),
            "github" => Ok(ThemeId::Github),
            other => Err(EnumParseError::new(EnumKind::Theme, other, THEME_VALUES)),
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_of_theme_table() {
        assert_eq!(ThemeId::Dark.colors().accent.to_hex(), "#007acc");
        assert_eq!(ThemeId::Dracula.colors().border.to_hex(), "#44475a");
        assert_eq!(Rgb::from_hex("#0d1117"), Some(ThemeId::Github.colors().background));
    }

    #[test]
    fn from_hex_rejects_malformed() {
        assert_eq!(Rgb::from_hex("0d1117"), None);
        assert_eq!(Rgb::from_hex("#0d111"), None);
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn parse_every_theme_id() {
        for theme in ThemeId::ALL {
            assert_eq!(ThemeId::parse(theme.as_str()), Ok(theme));
        }
        assert_eq!(ThemeId::parse("DRACULA"), Ok(ThemeId::Dracula));
        assert!(ThemeId::parse("solarized").is_err());
    }

    #[test]
    fn default_theme_is_dark() {
        assert_eq!(ThemeId::default(), ThemeId::Dark);
    }
}
