//! Two-level `Ok`/`Err` reporting, colored green and red.
//!
//! ```no_run
//! use huelog_console::presets::ok::{OkayMethods, okay_logger};
//!
//! let log = okay_logger()?;
//! log.ok("tests passed".to_string())?;
//! log.err("lint failed".to_string())?;
//! # Ok::<(), huelog_core::Error>(())
//! ```

use std::fmt;

use huelog_core::{
    ANSI_RESET, BaseMessage, Color, Format, GREEN, Level, Logger, LoggerBuilder, RED, Result,
    StreamHandler,
};

pub const OK: Level = Level::new_static("Ok", 0);
pub const ERR: Level = Level::new_static("Err", 1);

pub const LEVELS: [Level; 2] = [OK, ERR];
pub const COLORS: [Color; 2] = [GREEN, RED];

huelog_core::level_methods! {
    /// `ok` and `err` methods for loggers over the `Ok`/`Err` levels.
    pub trait OkayMethods {
        ok => OK,
        err => ERR,
    }
}

/// Renders `{fg}{name:<3}{reset} {content}`.
///
/// Without color, renders `{name:<3} {content}`.
#[derive(Debug, Clone, Copy)]
pub struct OkayFormat {
    colored: bool,
}

impl OkayFormat {
    #[must_use]
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    #[must_use]
    pub fn plain() -> Self {
        Self::new(false)
    }
}

impl Default for OkayFormat {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<C: fmt::Display> Format<BaseMessage<C>> for OkayFormat {
    type Output = String;

    fn format(&self, message: &BaseMessage<C>) -> String {
        let color = message
            .level
            .index()
            .and_then(|i| COLORS.get(i))
            .filter(|_| self.colored);
        match color {
            Some(color) => format!(
                "{}{:<3}{} {}",
                color.foreground(),
                message.level,
                ANSI_RESET,
                message.content
            ),
            None => format!("{:<3} {}", message.level, message.content),
        }
    }
}

/// A builder preconfigured with the `Ok`/`Err` levels and colors, no handlers.
#[must_use]
pub fn builder() -> LoggerBuilder<BaseMessage> {
    Logger::builder().levels(LEVELS.to_vec()).colors(COLORS.to_vec())
}

/// An `Ok`/`Err` logger writing colored lines to stderr.
pub fn okay_logger() -> Result<Logger> {
    builder()
        .handler(StreamHandler::stderr(OK).with_format(OkayFormat::default()))
        .build()
}
