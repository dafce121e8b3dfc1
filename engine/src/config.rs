use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};
use thiserror::Error;

use folio_types::ThemeId;

/// Environment variable that overrides `[app] api_base_url`.
pub const API_URL_ENV: &str = "FOLIO_API_URL";

pub(crate) const fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct FolioConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Theme id written by the theme picker.
    pub theme: Option<String>,
    /// Base URL of the portfolio API. Absent means bundled data.
    pub api_base_url: Option<String>,
    /// "mac" or "other"; only changes the shortcut labels.
    pub platform: Option<String>,
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Show splash and terminal output without animation.
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default = "default_true")]
    pub splash: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: None,
            api_base_url: None,
            platform: None,
            ascii_only: false,
            reduced_motion: false,
            splash: true,
        }
    }
}

impl FolioConfig {
    /// Load `~/.folio/config.toml`. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        folio_utils::recover_bak_file(path);
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn app(&self) -> Option<&AppConfig> {
        self.app.as_ref()
    }
}

/// Write `[app] theme` into the config file at `path`.
///
/// Uses `toml_edit` so comments and unrelated keys survive. Creates the file
/// and its directory when missing.
pub fn persist_theme(path: &Path, theme: ThemeId) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        folio_utils::ensure_private_dir(parent)?;
    }

    let content = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let mut doc = content
        .parse::<toml_edit::DocumentMut>()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    if !doc.contains_key("app") {
        doc["app"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    doc["app"]["theme"] = toml_edit::value(theme.as_str());

    folio_utils::atomic_write(path, doc.to_string().as_bytes())?;
    folio_utils::restrict_file_to_owner(path)?;
    tracing::debug!(path = %path.display(), theme = theme.as_str(), "Persisted theme");
    Ok(())
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".folio").join("config.toml"))
}
