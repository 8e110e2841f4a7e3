//! Batteries for huelog: ready-made logger flavors, configuration, JSON
//! output, bridges from `log` and `tracing`, and test utilities.
//!
//! ```
//! use huelog_console::{ColorChoice, LogConfig, PresetLogger, Preset};
//! use huelog_console::testing::TestSink;
//!
//! let sink = TestSink::new();
//! let config = LogConfig::new()
//!     .with_preset(Preset::Simple)
//!     .with_topic("db")
//!     .with_color(ColorChoice::Never);
//! let logger = PresetLogger::from_config(&config, sink.clone())?;
//! logger.emit("info", "connected".to_string())?;
//! assert_eq!(sink.output(), ["INFO     [db] connected"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub mod bridge;
pub mod config;
pub mod detection;
pub mod error;
pub mod json;
pub mod presets;
pub mod testing;

pub use bridge::{HueLayer, LogBridge};
pub use config::{LogConfig, OutputFormat};
pub use detection::ColorChoice;
pub use error::ConfigError;
pub use json::JsonHandler;
pub use presets::{Preset, PresetLogger};
