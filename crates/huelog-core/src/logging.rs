//! Internal diagnostics.
//!
//! huelog reports on itself (level table derivation, configuration loading,
//! bridge installation) through the standard [`log`] facade, never through
//! its own handlers. Applications that want these records install any `log`
//! backend; by default they go nowhere.
//!
//! # Log Targets
//!
//! - `huelog`: Root target
//! - `huelog::logger`: Logger construction and level table derivation
//! - `huelog::config`: Configuration loading and environment overrides
//! - `huelog::bridge`: `log` and `tracing` bridges
//!
//! Example filter: `RUST_LOG=huelog::config=debug`

pub use log::{debug, error, info, trace, warn};

/// Log targets used by huelog components.
pub mod targets {
    /// Root target for all huelog diagnostics.
    pub const HUELOG: &str = "huelog";

    /// Logger construction and level table derivation.
    pub const LOGGER: &str = "huelog::logger";

    /// Configuration loading and environment overrides.
    pub const CONFIG: &str = "huelog::config";

    /// The `log` and `tracing` bridges.
    pub const BRIDGE: &str = "huelog::bridge";
}

/// Returns whether huelog diagnostics are enabled at `level` for `target`.
#[inline]
#[must_use]
pub fn is_enabled(level: log::Level, target: &str) -> bool {
    log::log_enabled!(target: target, level)
}
