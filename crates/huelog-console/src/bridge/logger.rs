//! A `log` crate logger backed by a huelog [`Logger`].
//!
//! # Usage
//!
//! ```no_run
//! use huelog_console::bridge::LogBridge;
//! use huelog_core::{Logger, StreamHandler, INFO};
//!
//! let logger = Logger::builder().handler(StreamHandler::stderr(INFO)).build()?;
//! LogBridge::new(logger).init().expect("no other logger installed");
//! log::info!("visible through huelog");
//! # Ok::<(), huelog_core::Error>(())
//! ```

use std::fmt;

use log::{LevelFilter, Log, Metadata, Record};

use huelog_core::logging::targets;
use huelog_core::{BaseMessage, DEBUG, ERROR, INFO, Level, Logger, Message, WARNING};

/// Maps a `log` level onto the canonical levels (`Trace` folds into DEBUG).
#[must_use]
pub fn level_for_log(level: log::Level) -> Level {
    match level {
        log::Level::Error => ERROR,
        log::Level::Warn => WARNING,
        log::Level::Info => INFO,
        log::Level::Debug | log::Level::Trace => DEBUG,
    }
}

/// Forwards `log` records to a huelog logger.
///
/// `Log::log` cannot report failures, so write errors are dropped here.
pub struct LogBridge<M: Message = BaseMessage> {
    logger: Logger<M>,
    max_level: LevelFilter,
    show_targets: bool,
}

impl<M> LogBridge<M>
where
    M: Message + 'static,
    M::Content: From<String>,
{
    /// Wraps `logger`, passing every record through.
    pub fn new(logger: Logger<M>) -> Self {
        Self {
            logger,
            max_level: LevelFilter::Trace,
            show_targets: true,
        }
    }

    /// Set the maximum `log` level forwarded.
    #[must_use]
    pub fn with_max_level(mut self, level: LevelFilter) -> Self {
        self.max_level = level;
        self
    }

    /// Set whether the record target prefixes the content.
    #[must_use]
    pub fn with_targets(mut self, show: bool) -> Self {
        self.show_targets = show;
        self
    }

    #[must_use]
    pub fn logger(&self) -> &Logger<M> {
        &self.logger
    }

    /// Install as the global logger.
    ///
    /// Returns an error if a logger has already been set.
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.max_level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        log::debug!(target: targets::BRIDGE, "log bridge installed at {level}");
        Ok(())
    }

    /// Install as the global logger, ignoring errors if already set.
    pub fn try_init(self) {
        let _ = self.init();
    }

    fn content(&self, record: &Record) -> String {
        if self.show_targets {
            format!("{}: {}", record.target(), record.args())
        } else {
            record.args().to_string()
        }
    }
}

impl<M> Log for LogBridge<M>
where
    M: Message + 'static,
    M::Content: From<String>,
{
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level && self.logger.accepts(&level_for_log(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let content = M::Content::from(self.content(record));
        let _ = self.logger.write(&level_for_log(record.level()), content);
    }

    fn flush(&self) {}
}

impl<M: Message> fmt::Debug for LogBridge<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogBridge")
            .field("logger", &self.logger)
            .field("max_level", &self.max_level)
            .field("show_targets", &self.show_targets)
            .finish()
    }
}
