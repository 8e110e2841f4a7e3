//! Centralized configuration for huelog loggers.
//!
//! `LogConfig` selects a preset, a threshold, a topic, coloring and the output
//! format. It can be built programmatically, read from a TOML file, and
//! layered with environment variables.

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use huelog_core::logging::targets;
use serde::Deserialize;

use crate::detection::ColorChoice;
use crate::error::ConfigError;
use crate::presets::Preset;

/// Topic used when none is configured.
pub const DEFAULT_TOPIC: &str = "app";

/// How messages are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One formatted text line per message
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" | "ndjson" => Ok(Self::Json),
            _ => Err(ConfigError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Configuration for a preset logger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Logger flavor
    pub preset: Preset,
    /// Threshold level name (None = lowest level of the preset)
    pub level: Option<String>,
    /// Topic for the simple and standard presets
    pub topic: String,
    /// When to emit color codes
    pub color: ColorChoice,
    /// Text or JSON lines
    pub format: OutputFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            level: None,
            topic: DEFAULT_TOPIC.to_string(),
            color: ColorChoice::default(),
            format: OutputFormat::default(),
        }
    }
}

/// On-disk shape; every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    preset: Option<String>,
    level: Option<String>,
    topic: Option<String>,
    color: Option<String>,
    format: Option<String>,
}

impl LogConfig {
    /// Create config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config from environment variables
    ///
    /// # Environment Variables
    ///
    /// | Variable | Values | Description |
    /// |----------|--------|-------------|
    /// | `HUELOG_PRESET` | ok/simple/standard | Logger flavor |
    /// | `HUELOG_LEVEL` | level name | Threshold |
    /// | `HUELOG_TOPIC` | text | Topic |
    /// | `HUELOG_COLOR` | auto/always/never | Coloring |
    /// | `HUELOG_FORMAT` | text/json | Output format |
    /// | `HUELOG_FORCE_COLOR` | (set) | Force color |
    /// | `NO_COLOR` | (set) | Disable color (standard, wins over force) |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().merge_env()
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().merge_lookup(lookup)
    }

    /// Layers the process environment over this configuration.
    pub fn merge_env(self) -> Result<Self, ConfigError> {
        self.merge_lookup(|key| env::var(key).ok())
    }

    /// Layers variables from `lookup` over this configuration.
    ///
    /// Unset variables leave the current value alone; set but invalid ones
    /// are errors.
    pub fn merge_lookup<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(preset) = lookup("HUELOG_PRESET") {
            self.preset = preset.parse()?;
        }
        if let Some(level) = lookup("HUELOG_LEVEL") {
            self.level = Some(level);
        }
        if let Some(topic) = lookup("HUELOG_TOPIC") {
            self.topic = topic;
        }
        if let Some(color) = lookup("HUELOG_COLOR") {
            self.color = color.parse()?;
        }
        if let Some(format) = lookup("HUELOG_FORMAT") {
            self.format = format.parse()?;
        }

        // Display mode
        if lookup("HUELOG_FORCE_COLOR").is_some() {
            self.color = ColorChoice::Always;
        }
        if lookup("NO_COLOR").is_some_and(|value| !value.is_empty()) {
            self.color = ColorChoice::Never;
        }

        log::debug!(target: targets::CONFIG, "configuration after environment: {self:?}");
        Ok(self)
    }

    /// Parses a TOML document.
    ///
    /// ```
    /// use huelog_console::{LogConfig, Preset};
    ///
    /// let config = LogConfig::from_toml_str("preset = \"ok\"\nlevel = \"err\"").unwrap();
    /// assert_eq!(config.preset, Preset::Ok);
    /// assert_eq!(config.level.as_deref(), Some("err"));
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(source)?;
        let mut config = Self::default();
        if let Some(preset) = file.preset {
            config.preset = preset.parse()?;
        }
        if let Some(level) = file.level {
            config.level = Some(level);
        }
        if let Some(topic) = file.topic {
            config.topic = topic;
        }
        if let Some(color) = file.color {
            config.color = color.parse()?;
        }
        if let Some(format) = file.format {
            config.format = format.parse()?;
        }
        Ok(config)
    }

    /// Reads a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(target: targets::CONFIG, "loading configuration from {}", path.display());
        Self::from_toml_str(&source)
    }

    /// `<config dir>/huelog/config.toml`, if the platform has a config dir.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("huelog").join("config.toml"))
    }

    // ─────────────────────────────────────────────────
    // Builder Methods
    // ─────────────────────────────────────────────────

    /// Set the preset
    #[must_use]
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }

    /// Set the threshold level by name
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Set the topic
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Set the color choice
    #[must_use]
    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set the output format
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
