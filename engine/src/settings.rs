use crate::config::{API_URL_ENV, AppConfig, FolioConfig};
use crate::keymap::Platform;

/// Runtime settings resolved from the config file and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Settings {
    pub api_base_url: Option<String>,
    pub platform: Platform,
    pub ascii_only: bool,
    pub reduced_motion: bool,
    pub show_splash: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: None,
            platform: Platform::detect(),
            ascii_only: false,
            reduced_motion: false,
            show_splash: true,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn resolve(config: Option<&FolioConfig>) -> Self {
        let env_api = std::env::var(API_URL_ENV).ok();
        Self::resolve_with_env(config, env_api.as_deref())
    }

    /// `env_api` wins over `[app] api_base_url`; blank values count as unset.
    #[must_use]
    pub fn resolve_with_env(config: Option<&FolioConfig>, env_api: Option<&str>) -> Self {
        let defaults = AppConfig::default();
        let app = config.and_then(FolioConfig::app).unwrap_or(&defaults);

        let api_base_url = env_api
            .or(app.api_base_url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        let platform = match app.platform.as_deref() {
            Some(raw) => Platform::parse(raw).unwrap_or_else(|err| {
                tracing::warn!("{err}; detecting platform instead");
                Platform::detect()
            }),
            None => Platform::detect(),
        };

        Self {
            api_base_url,
            platform,
            ascii_only: app.ascii_only,
            reduced_motion: app.reduced_motion,
            show_splash: app.splash,
        }
    }
}
