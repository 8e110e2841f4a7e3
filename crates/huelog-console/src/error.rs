//! Configuration errors.

use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while loading configuration or turning it
/// into a logger.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML or has unknown keys.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown preset {name:?} (expected ok, simple or standard)")]
    UnknownPreset { name: String },

    /// A threshold that names no level of the selected preset.
    #[error("unknown level {name:?} for the {preset} preset (expected one of {expected})")]
    UnknownLevel {
        name: String,
        preset: String,
        expected: String,
    },

    #[error("unknown color choice {name:?} (expected auto, always or never)")]
    UnknownColorChoice { name: String },

    #[error("unknown output format {name:?} (expected text or json)")]
    UnknownFormat { name: String },

    /// The core library rejected the resulting logger.
    #[error(transparent)]
    Core(#[from] huelog_core::Error),
}
