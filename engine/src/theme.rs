//! Active color theme and where it is remembered.

use std::fmt::Debug;
use std::io;
use std::path::PathBuf;

use folio_types::{ThemeColors, ThemeId};

use crate::config::{FolioConfig, persist_theme};

/// Durable storage for the theme id.
pub trait ThemePersistence: Debug + Send {
    /// Stored id, if any. Unparsed.
    fn load(&self) -> Option<String>;
    fn save(&self, theme: ThemeId) -> io::Result<()>;
}

/// `[app] theme` in the config file.
#[derive(Debug, Clone)]
pub struct ConfigFileThemes {
    path: PathBuf,
}

impl ConfigFileThemes {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ThemePersistence for ConfigFileThemes {
    fn load(&self) -> Option<String> {
        match FolioConfig::load_from(&self.path) {
            Ok(config) => config.and_then(|c| c.app).and_then(|app| app.theme),
            Err(err) => {
                tracing::warn!("{err}");
                None
            }
        }
    }

    fn save(&self, theme: ThemeId) -> io::Result<()> {
        persist_theme(&self.path, theme)
    }
}

/// Keeps the theme for this process only.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOnlyThemes;

impl ThemePersistence for SessionOnlyThemes {
    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _theme: ThemeId) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug)]
pub struct ThemeStore {
    active: ThemeId,
    colors: ThemeColors,
    persistence: Box<dyn ThemePersistence>,
}

impl ThemeStore {
    /// Read the stored theme. Unknown or missing ids fall back to dark.
    #[must_use]
    pub fn load(persistence: Box<dyn ThemePersistence>) -> Self {
        let active = match persistence.load() {
            Some(raw) => ThemeId::parse(&raw).unwrap_or_else(|err| {
                tracing::warn!("{err}; using default theme");
                ThemeId::default()
            }),
            None => ThemeId::default(),
        };
        Self {
            active,
            colors: active.colors(),
            persistence,
        }
    }

    #[must_use]
    pub fn session_only() -> Self {
        Self::load(Box::new(SessionOnlyThemes))
    }

    /// Apply `theme` now and store it. The in-memory switch happens even
    /// when storing fails.
    pub fn set(&mut self, theme: ThemeId) -> io::Result<()> {
        self.active = theme;
        self.colors = theme.colors();
        self.persistence.save(theme)
    }

    #[must_use]
    pub fn active(&self) -> ThemeId {
        self.active
    }

    #[must_use]
    pub fn colors(&self) -> ThemeColors {
        self.colors
    }

    /// Re-read the stored id, as a fresh start would.
    #[must_use]
    pub fn reload(self) -> Self {
        Self::load(self.persistence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_only_starts_dark() {
        let store = ThemeStore::session_only();
        assert_eq!(store.active(), ThemeId::Dark);
        assert_eq!(store.colors(), ThemeId::Dark.colors());
    }

    #[test]
    fn set_updates_every_token() {
        let mut store = ThemeStore::session_only();
        store.set(ThemeId::Dracula).unwrap();
        let colors = store.colors();
        let expected = ThemeId::Dracula.colors();
        assert_eq!(colors.background, expected.background);
        assert_eq!(colors.sidebar, expected.sidebar);
        assert_eq!(colors.accent, expected.accent);
        assert_eq!(colors.text, expected.text);
        assert_eq!(colors.border, expected.border);
        assert_ne!(colors, ThemeId::Dark.colors());
    }

    #[test]
    fn config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut store = ThemeStore::load(Box::new(ConfigFileThemes::new(path.clone())));
        assert_eq!(store.active(), ThemeId::Dark);
        store.set(ThemeId::Dracula).unwrap();

        let reloaded = ThemeStore::load(Box::new(ConfigFileThemes::new(path)));
        assert_eq!(reloaded.active(), ThemeId::Dracula);
        assert_eq!(reloaded.colors(), ThemeId::Dracula.colors());
    }

    #[test]
    fn unknown_stored_theme_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[app]\ntheme = \"solarized\"\n").unwrap();
        let store = ThemeStore::load(Box::new(ConfigFileThemes::new(path)));
        assert_eq!(store.active(), ThemeId::Dark);
    }

    #[derive(Debug)]
    struct FailingStore;

    impl ThemePersistence for FailingStore {
        fn load(&self) -> Option<String> {
            Some("light".to_string())
        }

        fn save(&self, _theme: ThemeId) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    #[test]
    fn failed_save_still_switches() {
        let mut store = ThemeStore::load(Box::new(FailingStore));
        assert_eq!(store.active(), ThemeId::Light);
        assert!(store.set(ThemeId::Monokai).is_err());
        assert_eq!(store.active(), ThemeId::Monokai);
    }
}
