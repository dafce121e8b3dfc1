//! Global modifier chords.
//!
//! One flat table maps `(modifier, key)` to an [`Action`]. Ctrl and Cmd are
//! both accepted everywhere; [`Platform`] only picks the label shown to the
//! user.

use folio_types::{EnumKind, EnumParseError};

/// Key identity, decoupled from the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    /// Cmd on macOS, Super elsewhere.
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };

    pub const META: Modifiers = Modifiers {
        meta: true,
        ..Modifiers::NONE
    };
}

/// A synthesized or translated key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyInput {
    #[must_use]
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    #[must_use]
    pub const fn ctrl(ch: char) -> Self {
        Self::new(Key::Char(ch), Modifiers::CTRL)
    }

    #[must_use]
    pub const fn cmd(ch: char) -> Self {
        Self::new(Key::Char(ch), Modifiers::META)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenPalette,
    ToggleSidebar,
    OpenShortcuts,
    OpenFind,
}

impl Action {
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Action::OpenPalette => "Command palette",
            Action::ToggleSidebar => "Toggle sidebar",
            Action::OpenShortcuts => "Keyboard shortcuts",
            Action::OpenFind => "Find in page",
        }
    }
}

struct Chord {
    key: char,
    action: Action,
}

const CHORDS: &[Chord] = &[
    Chord {
        key: 'k',
        action: Action::OpenPalette,
    },
    Chord {
        key: 'b',
        action: Action::ToggleSidebar,
    },
    Chord {
        key: '/',
        action: Action::OpenShortcuts,
    },
    // Terminals report Ctrl+/ as Ctrl+7.
    Chord {
        key: '7',
        action: Action::OpenShortcuts,
    },
    Chord {
        key: 'f',
        action: Action::OpenFind,
    },
];

/// First matching chord, if any.
///
/// Requires Ctrl or Cmd and no Alt. Letters match case-insensitively so a
/// held Shift does not break the chord.
#[must_use]
pub fn resolve_chord(input: &KeyInput) -> Option<Action> {
    let mods = input.modifiers;
    if !(mods.ctrl || mods.meta) || mods.alt {
        return None;
    }
    let Key::Char(ch) = input.key else {
        return None;
    };
    let ch = ch.to_ascii_lowercase();
    CHORDS
        .iter()
        .find(|chord| chord.key == ch)
        .map(|chord| chord.action)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Mac,
    Other,
}

impl Platform {
    #[must_use]
    pub const fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Mac
        } else {
            Platform::Other
        }
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "mac" | "macos" => Ok(Platform::Mac),
            "other" | "linux" | "windows" => Ok(Platform::Other),
            _ => Err(EnumParseError::new(
                EnumKind::Platform,
                raw,
                &["mac", "other"],
            )),
        }
    }

    #[must_use]
    pub const fn modifier_label(self) -> &'static str {
        match self {
            Platform::Mac => "Cmd",
            Platform::Other => "Ctrl",
        }
    }
}

/// Rows of the shortcuts overlay, in display order.
#[must_use]
pub fn shortcut_rows(platform: Platform) -> Vec<(String, &'static str)> {
    let label = platform.modifier_label();
    [
        ('K', Action::OpenPalette),
        ('B', Action::ToggleSidebar),
        ('F', Action::OpenFind),
        ('/', Action::OpenShortcuts),
    ]
    .into_iter()
    .map(|(key, action)| (format!("{label}+{key}"), action.description()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_and_cmd_resolve_identically() {
        for ch in ['k', 'b', '/', 'f'] {
            assert_eq!(
                resolve_chord(&KeyInput::ctrl(ch)),
                resolve_chord(&KeyInput::cmd(ch))
            );
            assert!(resolve_chord(&KeyInput::ctrl(ch)).is_some());
        }
    }

    #[test]
    fn chord_table() {
        assert_eq!(
            resolve_chord(&KeyInput::ctrl('k')),
            Some(Action::OpenPalette)
        );
        assert_eq!(
            resolve_chord(&KeyInput::ctrl('b')),
            Some(Action::ToggleSidebar)
        );
        assert_eq!(
            resolve_chord(&KeyInput::ctrl('/')),
            Some(Action::OpenShortcuts)
        );
        assert_eq!(
            resolve_chord(&KeyInput::ctrl('7')),
            Some(Action::OpenShortcuts)
        );
        assert_eq!(resolve_chord(&KeyInput::cmd('f')), Some(Action::OpenFind));
    }

    #[test]
    fn shifted_letter_still_matches() {
        let input = KeyInput::new(
            Key::Char('K'),
            Modifiers {
                ctrl: true,
                shift: true,
                ..Modifiers::NONE
            },
        );
        assert_eq!(resolve_chord(&input), Some(Action::OpenPalette));
    }

    #[test]
    fn unmodified_or_alt_keys_do_not_match() {
        assert_eq!(resolve_chord(&KeyInput::plain(Key::Char('k'))), None);
        let alt = KeyInput::new(
            Key::Char('k'),
            Modifiers {
                ctrl: true,
                alt: true,
                ..Modifiers::NONE
            },
        );
        assert_eq!(resolve_chord(&alt), None);
        assert_eq!(resolve_chord(&KeyInput::ctrl('x')), None);
        assert_eq!(
            resolve_chord(&KeyInput::new(Key::Enter, Modifiers::CTRL)),
            None
        );
    }

    #[test]
    fn platform_only_changes_label() {
        let mac = shortcut_rows(Platform::Mac);
        let other = shortcut_rows(Platform::Other);
        assert_eq!(mac[0].0, "Cmd+K");
        assert_eq!(other[0].0, "Ctrl+K");
        assert_eq!(mac.len(), 4);
        assert_eq!(
            mac.iter().map(|row| row.1).collect::<Vec<_>>(),
            other.iter().map(|row| row.1).collect::<Vec<_>>()
        );
    }

    #[test]
    fn platform_parse() {
        assert_eq!(Platform::parse("Mac").unwrap(), Platform::Mac);
        assert_eq!(Platform::parse("linux").unwrap(), Platform::Other);
        let err = Platform::parse("amiga").unwrap_err();
        assert_eq!(err.raw(), "amiga");
    }
}
