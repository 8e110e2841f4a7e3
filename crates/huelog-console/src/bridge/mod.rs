//! Bridges from the `log` and `tracing` ecosystems into a huelog [`Logger`].
//!
//! - [`LogBridge`] - a `log` crate logger implementation
//! - [`HueLayer`] - a `tracing_subscriber` layer
//!
//! Both map the foreign severity onto the canonical levels, so the wrapped
//! logger should use them (or a level set with the same ordinals).
//!
//! [`Logger`]: huelog_core::Logger

mod logger;
mod subscriber;

pub use logger::{LogBridge, level_for_log};
pub use subscriber::{HueLayer, level_for_tracing};
