//! Error types for huelog.

use std::io;

/// Result alias used throughout huelog.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while configuring or driving a logger.
///
/// Write errors are never swallowed: a handler that fails aborts the
/// remaining deliveries of that `write` and the error reaches the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A color name outside the fixed eight-name palette.
    #[error("unknown color name: {name:?} (expected one of black, red, green, yellow, blue, magenta, cyan, white)")]
    UnknownColorName {
        /// The name that failed to resolve.
        name: String,
    },

    /// The handler's resource rejected a write or a flush.
    #[error("write failure: {0}")]
    WriteFailure(#[from] io::Error),

    /// The handler's resource can no longer be reached.
    #[error("sink unavailable: {reason}")]
    SinkUnavailable {
        /// Why the sink is unusable.
        reason: String,
    },

    /// By-name dispatch for a level the logger was not configured with.
    #[error("unknown level: {name:?}")]
    UnknownLevel {
        /// The method name that was requested.
        name: String,
    },

    /// Construction-time misconfiguration.
    #[error("misconfigured logger: {reason}")]
    Misconfigured {
        /// Description of the offending configuration.
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::Misconfigured`].
    pub fn misconfigured(reason: impl Into<String>) -> Self {
        Self::Misconfigured {
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::SinkUnavailable`].
    pub fn sink_unavailable(reason: impl Into<String>) -> Self {
        Self::SinkUnavailable {
            reason: reason.into(),
        }
    }

    /// Returns true for failures raised by a handler's resource.
    #[must_use]
    pub fn is_write_error(&self) -> bool {
        matches!(self, Self::WriteFailure(_) | Self::SinkUnavailable { .. })
    }
}
