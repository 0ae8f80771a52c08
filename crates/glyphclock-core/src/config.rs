//! Configuration management for glyphclock.
//!
//! Loads configuration from ${GLYPHCLOCK_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::options::{DisplayOptions, Theme, TimeFormat};

pub mod paths {
    //! Path resolution for glyphclock configuration and log directories.
    //!
    //! GLYPHCLOCK_HOME resolution order:
    //! 1. GLYPHCLOCK_HOME environment variable (if set)
    //! 2. ~/.config/glyphclock (default)
    //! 3. ./.glyphclock when no home directory can be determined

    use std::path::PathBuf;

    pub fn glyphclock_home() -> PathBuf {
        if let Ok(home) = std::env::var("GLYPHCLOCK_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".glyphclock"),
            |h| h.join(".config").join("glyphclock"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        glyphclock_home().join("config.toml")
    }

    /// Returns the directory the log file is written to.
    pub fn log_dir() -> PathBuf {
        glyphclock_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme shown at startup
    pub theme: Theme,

    /// Hour format at startup: 12 or 24
    pub time_format: TimeFormat,

    /// Whether seconds are shown at startup
    pub show_seconds: bool,

    /// Filter for the file log (tracing EnvFilter syntax)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        let options = DisplayOptions::default();
        Self {
            theme: options.theme,
            time_format: options.time_format,
            show_seconds: options.show_seconds,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

fn default_config_template() -> &'static str {
    r#"# glyphclock configuration

# Initial theme: neon, classic, matrix, cyberpunk
theme = "neon"

# Initial hour format: 24 or 12
time_format = 24

# Show seconds on the main display
show_seconds = true

# Log filter for ${GLYPHCLOCK_HOME}/logs (tracing EnvFilter syntax)
log_level = "info"
"#
}

impl Config {
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Initial display options.
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            theme: self.theme,
            time_format: self.time_format,
            show_seconds: self.show_seconds,
        }
    }
}
