//! Configuration for SkillScout.
//!
//! Read from `~/.skillscout/config.toml` (or the path in `SKILLSCOUT_CONFIG`).
//! Every section and field is optional; missing values fall back to the
//! defaults below.
//!
//! ```toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//!
//! [timing]
//! search_delay_ms = 1500
//! send_delay_ms = 2200
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs, io};

use serde::Deserialize;
use skillscout_types::ui::UiOptions;
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "SKILLSCOUT_CONFIG";

pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_SEND_DELAY: Duration = Duration::from_millis(2200);

#[derive(Debug, Default, Deserialize)]
pub struct SkillScoutConfig {
    pub app: Option<AppConfig>,
    pub timing: Option<TimingConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Freeze the loading spinner.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Pacing of the simulated operations.
#[derive(Debug, Default, Deserialize)]
pub struct TimingConfig {
    /// Delay between triggering a search and showing results. Default: 1500.
    pub search_delay_ms: Option<u64>,
    /// Delay between a valid submit and the success message. Default: 2200.
    pub send_delay_ms: Option<u64>,
}

/// Resolved delays for the two deferred operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub search_delay: Duration,
    pub send_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            search_delay: DEFAULT_SEARCH_DELAY,
            send_delay: DEFAULT_SEND_DELAY,
        }
    }
}

impl SkillScoutConfig {
    /// Load the config file, if there is one.
    ///
    /// `Ok(None)` means no file exists (or no home directory could be found).
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.to_path_buf(),
            source: err,
        })?;

        let config = Self::parse(&content, path)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(Some(config))
    }

    /// Parse config text. Errors are returned, not logged.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            source: err,
        })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        let defaults = Timings::default();
        let Some(timing) = self.timing.as_ref() else {
            return defaults;
        };
        Timings {
            search_delay: timing
                .search_delay_ms
                .map_or(defaults.search_delay, Duration::from_millis),
            send_delay: timing
                .send_delay_ms
                .map_or(defaults.send_delay, Duration::from_millis),
        }
    }
}

/// `~/.skillscout`, home of the config file and logs.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".skillscout"))
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }
    data_dir().map(|dir| dir.join("config.toml"))
}
