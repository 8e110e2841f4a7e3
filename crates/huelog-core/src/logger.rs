//! The logger: builds messages and dispatches them to handlers.
//!
//! # Dispatch
//!
//! [`Logger::write`] assembles one message per call (evaluating every
//! callback, even when no handler will accept the message) and hands a
//! reference to it to each handler in registration order whose threshold is
//! at or below the message level. The first failing handler aborts the
//! call.
//!
//! # Level methods
//!
//! Each configured level gets a convenience method named after its lowercased
//! name. The table is derived from the level set at construction and again on
//! [`Logger::set_levels`]; resolve it with [`Logger::method`] or
//! [`Logger::emit`]. For level sets known at compile time,
//! [`level_methods!`](crate::level_methods) generates fixed methods instead,
//! as [`StandardMethods`] does for the canonical levels. Writes at a level
//! outside the configured set fail with [`Error::UnknownLevel`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::color::{Color, LEVEL_COLORS};
use crate::error::{Error, Result};
use crate::handler::Handler;
use crate::level::{CRITICAL, DEBUG, ERROR, INFO, LEVELS, Level, WARNING};
use crate::logging::targets;
use crate::message::{BaseMessage, Callbacks, Message, NoCallbacks};

/// Orchestrates levels, handlers and field callbacks.
pub struct Logger<M: Message = BaseMessage> {
    levels: Vec<Level>,
    colors: Vec<Color>,
    handlers: Vec<Arc<dyn Handler<M>>>,
    callbacks: Box<dyn Callbacks<M::Fields>>,
    methods: BTreeMap<String, usize>,
}

impl Logger {
    /// Starts a builder for text messages without extra fields.
    #[must_use]
    pub fn builder() -> LoggerBuilder<BaseMessage> {
        LoggerBuilder::new(NoCallbacks)
    }
}

impl<M: Message> Logger<M> {
    /// Publishes `content` at `level` to every accepting handler.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownLevel`] if `level` is not one of the configured
    /// levels (same name and value); otherwise the first handler error, after
    /// which later handlers are not invoked.
    pub fn write(&self, level: &Level, content: M::Content) -> Result<()> {
        if !self.has_level(level) {
            return Err(Error::UnknownLevel {
                name: level.name().to_string(),
            });
        }
        let message = M::assemble(level.clone(), content, self.callbacks.evaluate());
        self.dispatch(&message)
    }

    /// Publishes an already assembled message.
    pub fn dispatch(&self, message: &M) -> Result<()> {
        for handler in &self.handlers {
            if message.level() >= handler.level() {
                handler.write(message)?;
            }
        }
        Ok(())
    }

    /// Writes through the level method called `method` (e.g. `"info"`).
    ///
    /// # Errors
    ///
    /// [`Error::UnknownLevel`] if no configured level has that method name,
    /// otherwise whatever [`Logger::write`] returns.
    pub fn emit(&self, method: &str, content: M::Content) -> Result<()> {
        let level = self.level(method).ok_or_else(|| Error::UnknownLevel {
            name: method.to_string(),
        })?;
        self.write(level, content)
    }

    /// Resolves a level method by name.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<LevelMethod<'_, M>> {
        self.level(name).map(|level| LevelMethod {
            logger: self,
            level,
        })
    }

    /// Names of the level methods, in alphabetical order.
    pub fn method_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.methods.keys().map(String::as_str)
    }

    /// Whether `level` is one of the configured levels, by name and value.
    #[must_use]
    pub fn has_level(&self, level: &Level) -> bool {
        self.levels
            .iter()
            .any(|l| l.value() == level.value() && l.name() == level.name())
    }

    /// The level bound to a method name.
    #[must_use]
    pub fn level(&self, method: &str) -> Option<&Level> {
        self.methods.get(method).map(|&index| &self.levels[index])
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The display color paired with `level`, if colors are configured.
    #[must_use]
    pub fn color_of(&self, level: &Level) -> Option<Color> {
        let index = self.levels.iter().position(|l| l == level)?;
        self.colors.get(index).copied()
    }

    /// Replaces the level set and re-derives the level methods.
    ///
    /// # Errors
    ///
    /// [`Error::Misconfigured`] if the new set is invalid; the logger is left
    /// unchanged in that case.
    pub fn set_levels(&mut self, levels: Vec<Level>, colors: Vec<Color>) -> Result<()> {
        let methods = derive_methods(&levels, &colors)?;
        self.levels = levels;
        self.colors = colors;
        self.methods = methods;
        Ok(())
    }

    #[must_use]
    pub fn handlers(&self) -> &[Arc<dyn Handler<M>>] {
        &self.handlers
    }

    /// Direct access to the handler list, for removal and reordering.
    pub fn handlers_mut(&mut self) -> &mut Vec<Arc<dyn Handler<M>>> {
        &mut self.handlers
    }

    /// Appends a handler owned by this logger.
    pub fn add_handler(&mut self, handler: impl Handler<M> + 'static) -> &mut Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    /// Appends a handler that may also be registered elsewhere.
    pub fn add_shared_handler(&mut self, handler: Arc<dyn Handler<M>>) -> &mut Self {
        self.handlers.push(handler);
        self
    }

    pub fn clear_handlers(&mut self) {
        self.handlers.clear();
    }

    /// Whether a write at `level` would reach any handler.
    #[must_use]
    pub fn accepts(&self, level: &Level) -> bool {
        self.has_level(level) && self.handlers.iter().any(|handler| handler.accepts(level))
    }

    /// Names of the extra fields filled on every write.
    #[must_use]
    pub fn field_names(&self) -> &'static [&'static str] {
        self.callbacks.names()
    }
}

impl<M: Message> fmt::Debug for Logger<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("levels", &self.levels)
            .field("colors", &self.colors)
            .field("handlers", &self.handlers.len())
            .field("fields", &self.callbacks.names())
            .finish()
    }
}

/// A level method bound to its logger.
pub struct LevelMethod<'a, M: Message> {
    logger: &'a Logger<M>,
    level: &'a Level,
}

impl<M: Message> LevelMethod<'_, M> {
    /// Equivalent to `logger.write(level, content)`.
    pub fn call(&self, content: M::Content) -> Result<()> {
        self.logger.write(self.level, content)
    }

    #[must_use]
    pub fn level(&self) -> &Level {
        self.level
    }
}

impl<M: Message> Clone for LevelMethod<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: Message> Copy for LevelMethod<'_, M> {}

impl<M: Message> fmt::Debug for LevelMethod<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelMethod")
            .field("level", self.level)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Logger`].
///
/// Defaults: the canonical levels with their colors, no handlers.
pub struct LoggerBuilder<M: Message> {
    levels: Option<Vec<Level>>,
    colors: Option<Vec<Color>>,
    handlers: Vec<Arc<dyn Handler<M>>>,
    callbacks: Box<dyn Callbacks<M::Fields>>,
}

impl<M: Message> LoggerBuilder<M> {
    /// Starts a builder whose messages get their extra fields from `callbacks`.
    pub fn new(callbacks: impl Callbacks<M::Fields> + 'static) -> Self {
        Self {
            levels: None,
            colors: None,
            handlers: Vec::new(),
            callbacks: Box::new(callbacks),
        }
    }

    /// Sets the level set. Unless [`colors`](Self::colors) is also called,
    /// a custom level set has no colors.
    #[must_use]
    pub fn levels(mut self, levels: Vec<Level>) -> Self {
        self.levels = Some(levels);
        self
    }

    /// Sets the colors, one per level.
    #[must_use]
    pub fn colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Sets the colors by palette name.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownColorName`] for a name outside the palette.
    pub fn color_names<I, S>(self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self.colors(Color::from_names(names)?))
    }

    /// Appends a handler.
    #[must_use]
    pub fn handler(mut self, handler: impl Handler<M> + 'static) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    /// Appends a handler shared with other loggers.
    #[must_use]
    pub fn shared_handler(mut self, handler: Arc<dyn Handler<M>>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Validates the configuration and builds the logger.
    ///
    /// # Errors
    ///
    /// [`Error::Misconfigured`] for an empty level set, level values that do
    /// not strictly increase, two levels with the same method name, or a
    /// color count that differs from the level count.
    pub fn build(self) -> Result<Logger<M>> {
        let colors = match (&self.levels, self.colors) {
            (_, Some(colors)) => colors,
            (None, None) => LEVEL_COLORS.to_vec(),
            (Some(_), None) => Vec::new(),
        };
        let levels = self.levels.unwrap_or_else(|| LEVELS.to_vec());
        let methods = derive_methods(&levels, &colors)?;
        Ok(Logger {
            levels,
            colors,
            handlers: self.handlers,
            callbacks: self.callbacks,
            methods,
        })
    }
}

impl<M: Message> fmt::Debug for LoggerBuilder<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("levels", &self.levels)
            .field("colors", &self.colors)
            .field("handlers", &self.handlers.len())
            .finish_non_exhaustive()
    }
}

fn derive_methods(levels: &[Level], colors: &[Color]) -> Result<BTreeMap<String, usize>> {
    if levels.is_empty() {
        return Err(Error::misconfigured("the level set is empty"));
    }
    if !colors.is_empty() && colors.len() != levels.len() {
        return Err(Error::misconfigured(format!(
            "{} colors for {} levels",
            colors.len(),
            levels.len()
        )));
    }
    for pair in levels.windows(2) {
        if pair[0].value() >= pair[1].value() {
            return Err(Error::misconfigured(format!(
                "level values must strictly increase ({} = {} is followed by {} = {})",
                pair[0].name(),
                pair[0].value(),
                pair[1].name(),
                pair[1].value()
            )));
        }
    }

    let mut methods = BTreeMap::new();
    for (index, level) in levels.iter().enumerate() {
        let name = level.method_name();
        if methods.insert(name.clone(), index).is_some() {
            return Err(Error::misconfigured(format!(
                "two levels share the method name {name:?}"
            )));
        }
    }
    log::debug!(target: targets::LOGGER, "derived {} level methods", methods.len());
    Ok(methods)
}

crate::level_methods! {
    /// Fixed methods for the canonical level set.
    pub trait StandardMethods {
        debug => DEBUG,
        info => INFO,
        warning => WARNING,
        error => ERROR,
        critical => CRITICAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{GREEN, RED};
    use crate::handler::{StreamHandler, format_fn};
    use std::io::{self, Write};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Records `(sequence, tag, content)` for every delivery.
    struct Recorder {
        tag: &'static str,
        level: Level,
        clock: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<(usize, &'static str, String)>>>,
    }

    impl Handler<BaseMessage> for Recorder {
        fn level(&self) -> &Level {
            &self.level
        }

        fn write(&self, message: &BaseMessage) -> Result<()> {
            let tick = self.clock.fetch_add(1, Ordering::SeqCst);
            self.seen
                .lock()
                .unwrap()
                .push((tick, self.tag, message.content.clone()));
            Ok(())
        }
    }

    fn name_colon(message: &BaseMessage) -> String {
        format!("{}: {}", message.level.name(), message.content)
    }

    fn text_handler(level: Level, buf: &SharedBuf) -> impl Handler<BaseMessage> + 'static {
        StreamHandler::new(level, buf.clone()).with_format(format_fn(name_colon))
    }

    #[test]
    fn default_configuration() {
        let logger = Logger::builder().build().unwrap();
        assert_eq!(logger.levels(), &LEVELS);
        assert_eq!(logger.colors(), &LEVEL_COLORS);
        assert!(logger.handlers().is_empty());
        assert!(logger.field_names().is_empty());
        let names: Vec<_> = logger.method_names().collect();
        assert_eq!(names, ["critical", "debug", "error", "info", "warning"]);
    }

    #[test]
    fn instances_do_not_share_handlers() {
        let buf = SharedBuf::default();
        let mut first = Logger::builder().build().unwrap();
        first.add_handler(text_handler(DEBUG, &buf));
        let second = Logger::builder().build().unwrap();
        assert_eq!(first.handlers().len(), 1);
        assert!(second.handlers().is_empty());
    }

    #[test]
    fn level_filter_matrix() {
        for (i, threshold) in LEVELS.iter().enumerate() {
            let buf = SharedBuf::default();
            let mut logger = Logger::builder().build().unwrap();
            logger.add_handler(text_handler(threshold.clone(), &buf));

            for level in &LEVELS {
                logger
                    .method(&level.method_name())
                    .unwrap()
                    .call("text".to_string())
                    .unwrap();
            }

            let expected: String = LEVELS[i..]
                .iter()
                .map(|l| format!("{}: text\n", l.name()))
                .collect();
            assert_eq!(buf.contents(), expected);
        }
    }

    #[test]
    fn info_is_filtered_error_is_written() {
        let buf = SharedBuf::default();
        let logger = Logger::builder()
            .levels(LEVELS.to_vec())
            .handler(text_handler(WARNING, &buf))
            .build()
            .unwrap();

        logger.info("hello".to_string()).unwrap();
        assert_eq!(buf.contents(), "");

        logger.error("hello".to_string()).unwrap();
        assert_eq!(buf.contents(), "ERROR: hello\n");
    }

    #[test]
    fn debug_reaches_debug_threshold_only() {
        let info_buf = SharedBuf::default();
        let debug_buf = SharedBuf::default();
        let logger = Logger::builder()
            .handler(text_handler(INFO, &info_buf))
            .handler(text_handler(DEBUG, &debug_buf))
            .build()
            .unwrap();

        logger.debug("detail".to_string()).unwrap();
        assert_eq!(info_buf.contents(), "");
        assert_eq!(debug_buf.contents(), "DEBUG: detail\n");
    }

    #[test]
    fn message_at_threshold_is_delivered() {
        let buf = SharedBuf::default();
        let logger = Logger::builder()
            .handler(text_handler(ERROR, &buf))
            .build()
            .unwrap();
        logger.write(&ERROR, "edge".to_string()).unwrap();
        assert_eq!(buf.contents(), "ERROR: edge\n");
    }

    #[test]
    fn handlers_fire_in_registration_order() {
        let clock = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = |tag| Recorder {
            tag,
            level: DEBUG,
            clock: clock.clone(),
            seen: seen.clone(),
        };
        let logger = Logger::builder()
            .handler(recorder("A"))
            .handler(recorder("B"))
            .handler(recorder("C"))
            .build()
            .unwrap();

        logger.warning("one".to_string()).unwrap();
        logger.critical("two".to_string()).unwrap();

        let seen = seen.lock().unwrap();
        let tags: Vec<_> = seen.iter().map(|(tick, tag, _)| (*tick, *tag)).collect();
        assert_eq!(
            tags,
            [(0, "A"), (1, "B"), (2, "C"), (3, "A"), (4, "B"), (5, "C")]
        );
    }

    #[test]
    fn failing_handler_stops_dispatch() {
        let clock = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::builder()
            .handler(Recorder {
                tag: "before",
                level: DEBUG,
                clock: clock.clone(),
                seen: seen.clone(),
            })
            .handler(StreamHandler::new(DEBUG, ClosedSink))
            .handler(Recorder {
                tag: "after",
                level: DEBUG,
                clock,
                seen: seen.clone(),
            })
            .build()
            .unwrap();

        let err = logger.info("x".to_string()).unwrap_err();
        assert!(matches!(err, Error::WriteFailure(_)));
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].1, "before");
    }

    #[test]
    fn filtered_failing_handler_is_not_invoked() {
        let logger = Logger::builder()
            .handler(StreamHandler::new(CRITICAL, ClosedSink))
            .build()
            .unwrap();
        logger.error("fine".to_string()).unwrap();
        assert!(logger.critical("boom".to_string()).is_err());
    }

    #[test]
    fn shared_handler_serves_two_loggers() {
        let buf = SharedBuf::default();
        let shared: Arc<dyn Handler<BaseMessage>> = Arc::new(text_handler(DEBUG, &buf));
        let a = Logger::builder().shared_handler(shared.clone()).build().unwrap();
        let mut b = Logger::builder().build().unwrap();
        b.add_shared_handler(shared);

        a.info("from a".to_string()).unwrap();
        b.info("from b".to_string()).unwrap();
        assert_eq!(buf.contents(), "INFO: from a\nINFO: from b\n");
    }

    #[test]
    fn handlers_can_change_between_writes() {
        let buf = SharedBuf::default();
        let mut logger = Logger::builder().build().unwrap();
        logger.info("dropped".to_string()).unwrap();
        logger.add_handler(text_handler(DEBUG, &buf));
        logger.info("kept".to_string()).unwrap();
        logger.handlers_mut().remove(0);
        logger.info("dropped again".to_string()).unwrap();
        assert_eq!(buf.contents(), "INFO: kept\n");
    }

    #[test]
    fn emit_by_name() {
        let buf = SharedBuf::default();
        let logger = Logger::builder()
            .handler(text_handler(DEBUG, &buf))
            .build()
            .unwrap();
        logger.emit("warning", "careful".to_string()).unwrap();
        assert_eq!(buf.contents(), "WARNING: careful\n");

        let err = logger.emit("fatal", "x".to_string()).unwrap_err();
        assert!(matches!(err, Error::UnknownLevel { name } if name == "fatal"));
    }

    #[test]
    fn custom_levels_get_their_own_methods() {
        let buf = SharedBuf::default();
        let levels = Level::from_names(["Ok", "Err"]);
        let logger = Logger::builder()
            .levels(levels.clone())
            .colors(vec![GREEN, RED])
            .handler(text_handler(levels[0].clone(), &buf))
            .build()
            .unwrap();

        assert_eq!(logger.method_names().collect::<Vec<_>>(), ["err", "ok"]);
        assert!(logger.method("info").is_none());
        logger.method("err").unwrap().call("bad".to_string()).unwrap();
        assert_eq!(buf.contents(), "Err: bad\n");
        assert_eq!(logger.color_of(&levels[1]), Some(RED));
    }

    #[test]
    fn custom_levels_default_to_no_colors() {
        let logger = Logger::builder()
            .levels(Level::from_names(["low", "high"]))
            .build()
            .unwrap();
        assert!(logger.colors().is_empty());
        assert_eq!(logger.color_of(&logger.levels()[0]), None);
    }

    #[test]
    fn set_levels_rederives_methods() {
        let mut logger = Logger::builder().build().unwrap();
        assert!(logger.method("info").is_some());

        logger
            .set_levels(Level::from_names(["Quiet", "Loud"]), Vec::new())
            .unwrap();
        assert!(logger.method("info").is_none());
        assert_eq!(logger.method("loud").unwrap().level().value(), 1);
        assert_eq!(logger.level("quiet").unwrap().name(), "Quiet");
    }

    #[test]
    fn invalid_set_levels_leaves_logger_unchanged() {
        let mut logger = Logger::builder().build().unwrap();
        let err = logger.set_levels(Vec::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Misconfigured { .. }));
        assert_eq!(logger.levels(), &LEVELS);
    }

    #[test]
    fn misconfigurations_are_rejected() {
        let non_increasing = vec![Level::new("a", 1), Level::new("b", 1)];
        assert!(Logger::builder().levels(non_increasing).build().is_err());

        let duplicate_methods = vec![Level::new("Info", 0), Level::new("INFO", 1)];
        assert!(Logger::builder().levels(duplicate_methods).build().is_err());

        let too_few_colors = Logger::builder().colors(vec![GREEN]).build();
        assert!(matches!(too_few_colors, Err(Error::Misconfigured { .. })));

        assert!(Logger::builder().color_names(["green", "teal"]).is_err());
    }

    #[test]
    fn accepts_reports_any_handler() {
        let logger = Logger::builder()
            .handler(text_handler(ERROR, &SharedBuf::default()))
            .build()
            .unwrap();
        assert!(!logger.accepts(&INFO));
        assert!(logger.accepts(&CRITICAL));
    }

    #[test]
    fn unconfigured_levels_are_rejected() {
        let buf = SharedBuf::default();
        let logger = Logger::builder()
            .levels(Level::from_names(["Ok", "Err"]))
            .handler(text_handler(Level::new("Ok", 0), &buf))
            .build()
            .unwrap();

        let err = logger.critical("boom".to_string()).unwrap_err();
        assert!(matches!(err, Error::UnknownLevel { ref name } if name == "CRITICAL"));
        // Same value as `Err`, different name.
        assert!(logger.info("alias".to_string()).is_err());
        assert!(!logger.accepts(&CRITICAL));
        assert!(logger.accepts(&Level::new("Err", 1)));

        logger.emit("err", "kept".to_string()).unwrap();
        assert_eq!(buf.contents(), "Err: kept\n");
    }

    #[test]
    fn negative_ordinals_filter_like_any_other() {
        let buf = SharedBuf::default();
        let trace = Level::new("TRACE", -1);
        let logger = Logger::builder()
            .levels(vec![trace.clone(), DEBUG, INFO])
            .colors(Vec::new())
            .handler(text_handler(DEBUG, &buf))
            .build()
            .unwrap();

        logger.emit("trace", "hidden".to_string()).unwrap();
        logger.write(&trace, "hidden too".to_string()).unwrap();
        logger.debug("shown".to_string()).unwrap();
        assert_eq!(buf.contents(), "DEBUG: shown\n");
    }

    #[test]
    fn set_levels_retires_old_levels() {
        let mut logger = Logger::builder().build().unwrap();
        logger.write(&INFO, "before".to_string()).unwrap();
        logger
            .set_levels(Level::from_names(["Quiet", "Loud"]), Vec::new())
            .unwrap();
        assert!(logger.write(&INFO, "after".to_string()).is_err());
        assert!(logger.write(&Level::new("Loud", 1), "after".to_string()).is_ok());
    }

    #[test]
    fn non_text_content() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        struct Numbers(Level, Arc<Mutex<Vec<i64>>>);
        impl Handler<BaseMessage<i64>> for Numbers {
            fn level(&self) -> &Level {
                &self.0
            }
            fn write(&self, message: &BaseMessage<i64>) -> Result<()> {
                self.1.lock().unwrap().push(message.content);
                Ok(())
            }
        }
        let logger = LoggerBuilder::<BaseMessage<i64>>::new(NoCallbacks)
            .handler(Numbers(DEBUG, seen.clone()))
            .build()
            .unwrap();
        logger.info(7).unwrap();
        logger.write(&ERROR, -1).unwrap();
        assert_eq!(*seen.lock().unwrap(), [7, -1]);
    }
}
