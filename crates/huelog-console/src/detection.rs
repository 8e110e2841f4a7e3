//! Color detection
//!
//! Decides whether formatted output should carry ANSI color codes.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// When to colorize output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Color when stderr is a terminal that supports it
    #[default]
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

impl ColorChoice {
    /// Resolve the choice against stderr, where log lines go.
    #[must_use]
    pub fn should_colorize(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => console::colors_enabled_stderr(),
        }
    }

    /// Resolve the choice against stdout.
    #[must_use]
    pub fn should_colorize_stdout(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => console::colors_enabled(),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl FromStr for ColorChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" | "force" | "1" | "true" => Ok(Self::Always),
            "never" | "0" | "false" => Ok(Self::Never),
            _ => Err(ConfigError::UnknownColorChoice {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
