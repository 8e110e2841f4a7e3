//! huelog: leveled logging with colored terminal output.
//!
//! A [`Logger`] holds an ordered level set, a list of [`Handler`]s with their
//! own thresholds, and callbacks that fill a message's extra fields. Every
//! write builds one message and hands it, in registration order, to each
//! handler whose threshold it meets.
//!
//! # Quick Start
//!
//! ```
//! use huelog::prelude::*;
//!
//! let sink = TestSink::new();
//! let logger = Logger::builder()
//!     .handler(
//!         StreamHandler::new(WARNING, sink.clone())
//!             .with_format(format_fn(|m: &BaseMessage| format!("{}: {}", m.level, m.content))),
//!     )
//!     .build()?;
//!
//! logger.info("hello".to_string())?;
//! logger.error("hello".to_string())?;
//! assert_eq!(sink.output(), ["ERROR: hello"]);
//! # Ok::<(), huelog::Error>(())
//! ```
//!
//! # Presets
//!
//! - [`presets::ok`]: `Ok`/`Err` levels, green and red
//! - [`presets::simple`]: canonical levels with a topic
//! - [`presets::standard`]: canonical levels with time, host and topic
//!
//! # Custom messages
//!
//! [`define_message!`] declares a message variant together with the
//! callbacks that fill its fields; [`level_methods!`] generates fixed level
//! methods for a level set known at compile time.

#![forbid(unsafe_code)]

pub use huelog_core::{
    ANSI_RESET, BLACK, BLUE, BaseMessage, COLORS, CRITICAL, CYAN, Callbacks, Color, DEBUG, ERROR,
    Error, FnCallbacks, Format, FormatFn, GREEN, Handler, INFO, Identity, LEVEL_COLORS, LEVELS,
    Level, LevelMethod, Logger, LoggerBuilder, MAGENTA, Message, NAMES, NoCallbacks, RED, Result,
    StandardMethods, StreamHandler, WARNING, WHITE, YELLOW, callback_fn, define_message,
    format_fn, identity, level_methods, logging,
};

pub use huelog_console::{
    ColorChoice, ConfigError, HueLayer, JsonHandler, LogBridge, LogConfig, OutputFormat, Preset,
    PresetLogger, bridge, config, presets, testing,
};

/// Prelude module for convenient imports.
///
/// ```
/// use huelog::prelude::*;
/// ```
pub mod prelude {
    pub use crate::presets::ok::OkayMethods;
    pub use crate::presets::simple::{ColorFormat, SimpleFormat, TopicMessage, simple_logger};
    pub use crate::presets::standard::{StandardFormat, StandardMessage, standard_logger};
    pub use crate::testing::TestSink;
    pub use crate::{
        BaseMessage, CRITICAL, Callbacks, Color, DEBUG, ERROR, Error, Format, Handler, INFO,
        JsonHandler, LEVELS, Level, LogConfig, Logger, LoggerBuilder, Message, PresetLogger,
        Result, StandardMethods, StreamHandler, WARNING, define_message, format_fn, level_methods,
    };
}
