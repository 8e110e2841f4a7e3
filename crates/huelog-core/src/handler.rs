//! Handlers: filtered sinks for messages.
//!
//! A [`Handler`] owns a threshold level and knows how to emit a message.
//! [`StreamHandler`] covers the common case of writing one formatted line per
//! message to an [`io::Write`] resource, with the formatting supplied by a
//! [`Format`] implementation. Handlers that need to do something other than
//! write text implement [`Handler`] directly.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::{Error, Result};
use crate::level::Level;
use crate::message::Message;

/// A sink that accepts messages at or above its threshold.
pub trait Handler<M: Message>: Send + Sync {
    /// The threshold: messages below it are never written.
    fn level(&self) -> &Level;

    /// Emits one message.
    ///
    /// Output must be visible when this returns; there is no buffering
    /// across calls.
    fn write(&self, message: &M) -> Result<()>;

    /// Whether a message at `level` passes this handler's threshold.
    fn accepts(&self, level: &Level) -> bool {
        level >= self.level()
    }
}

impl<M: Message, H: Handler<M> + ?Sized> Handler<M> for Arc<H> {
    fn level(&self) -> &Level {
        (**self).level()
    }

    fn write(&self, message: &M) -> Result<()> {
        (**self).write(message)
    }
}

impl<M: Message, H: Handler<M> + ?Sized> Handler<M> for Box<H> {
    fn level(&self) -> &Level {
        (**self).level()
    }

    fn write(&self, message: &M) -> Result<()> {
        (**self).write(message)
    }
}

/// Turns a message into something a handler can emit.
///
/// Implementations must be free of side effects: formatting the same message
/// twice yields the same output.
pub trait Format<M: Message>: Send + Sync {
    type Output;

    fn format(&self, message: &M) -> Self::Output;
}

/// The default formatting: the message content, untouched.
pub fn identity<M: Message>(message: &M) -> &M::Content {
    message.content()
}

/// Formats a message as its content (see [`identity`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<M> Format<M> for Identity
where
    M: Message,
    M::Content: Clone,
{
    type Output = M::Content;

    fn format(&self, message: &M) -> M::Content {
        identity(message).clone()
    }
}

/// Adapts a closure into a [`Format`].
///
/// ```
/// use huelog_core::{format_fn, BaseMessage, Format, ERROR};
///
/// let format = format_fn(|m: &BaseMessage| format!("{}: {}", m.level, m.content));
/// let message = BaseMessage::new(ERROR, "boom".to_string());
/// assert_eq!(format.format(&message), "ERROR: boom");
/// ```
pub fn format_fn<F>(f: F) -> FormatFn<F> {
    FormatFn(f)
}

/// See [`format_fn`].
#[derive(Clone, Copy)]
pub struct FormatFn<F>(F);

impl<M, F, O> Format<M> for FormatFn<F>
where
    M: Message,
    F: Fn(&M) -> O + Send + Sync,
{
    type Output = O;

    fn format(&self, message: &M) -> O {
        (self.0)(message)
    }
}

impl<F> fmt::Debug for FormatFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatFn").finish_non_exhaustive()
    }
}

/// Writes one formatted line per message to an [`io::Write`] resource.
///
/// The resource sits behind a mutex so each line is written whole; the
/// stream is flushed after every message.
pub struct StreamHandler<W, F = Identity> {
    level: Level,
    resource: Mutex<W>,
    formatter: F,
}

impl<W> StreamHandler<W> {
    /// Creates a handler that writes message content unchanged.
    pub fn new(level: Level, resource: W) -> Self {
        Self {
            level,
            resource: Mutex::new(resource),
            formatter: Identity,
        }
    }
}

impl StreamHandler<io::Stderr> {
    /// Creates a handler writing to standard error.
    #[must_use]
    pub fn stderr(level: Level) -> Self {
        Self::new(level, io::stderr())
    }
}

impl StreamHandler<io::Stdout> {
    /// Creates a handler writing to standard output.
    #[must_use]
    pub fn stdout(level: Level) -> Self {
        Self::new(level, io::stdout())
    }
}

impl<W, F> StreamHandler<W, F> {
    /// Replaces the formatter.
    pub fn with_format<G>(self, formatter: G) -> StreamHandler<W, G> {
        let Self { level, resource, .. } = self;
        StreamHandler {
            level,
            resource,
            formatter,
        }
    }

    /// Formats `message` without writing it.
    pub fn format<M>(&self, message: &M) -> F::Output
    where
        M: Message,
        F: Format<M>,
    {
        self.formatter.format(message)
    }

    #[must_use]
    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Moves the threshold.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Consumes the handler, returning the resource.
    pub fn into_resource(self) -> W {
        self.resource
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<M, W, F> Handler<M> for StreamHandler<W, F>
where
    M: Message,
    W: Write + Send,
    F: Format<M>,
    F::Output: fmt::Display,
{
    fn level(&self) -> &Level {
        &self.level
    }

    fn write(&self, message: &M) -> Result<()> {
        let output = self.formatter.format(message);
        let mut resource = self
            .resource
            .lock()
            .map_err(|_| Error::sink_unavailable("resource lock poisoned by a panicked writer"))?;
        writeln!(resource, "{output}")?;
        resource.flush()?;
        Ok(())
    }
}

impl<W, F> fmt::Debug for StreamHandler<W, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamHandler")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{DEBUG, ERROR, INFO, LEVELS};
    use crate::message::BaseMessage;

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
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn level_colon_content(message: &BaseMessage) -> String {
        format!("{}: {}", message.level.name(), message.content)
    }

    #[test]
    fn init_keeps_level() {
        for level in LEVELS {
            let handler = StreamHandler::new(level.clone(), Vec::<u8>::new());
            assert_eq!(Handler::<BaseMessage>::level(&handler), &level);
        }
    }

    #[test]
    fn identity_format_returns_content() {
        for content in ["", "plain", "with\nnewline", "ünïcödé"] {
            let message = BaseMessage::new(INFO, content.to_string());
            let handler = StreamHandler::new(DEBUG, Vec::<u8>::new());
            assert_eq!(handler.format(&message), message.content);
            // repeatable
            assert_eq!(handler.format(&message), handler.format(&message));
            assert_eq!(identity(&message), &message.content);
        }
    }

    #[test]
    fn identity_works_for_non_text_content() {
        let message = BaseMessage::new(INFO, vec![1_u8, 2, 3]);
        assert_eq!(Identity.format(&message), vec![1, 2, 3]);
    }

    #[test]
    fn write_formats_and_appends_newline() {
        for level in LEVELS {
            let buf = SharedBuf::default();
            let handler =
                StreamHandler::new(level.clone(), buf.clone()).with_format(format_fn(level_colon_content));
            handler
                .write(&BaseMessage::new(level.clone(), "text".to_string()))
                .unwrap();
            assert_eq!(buf.contents(), format!("{}: text\n", level.name()));
        }
    }

    #[test]
    fn write_does_not_filter() {
        // filtering is the logger's job
        let buf = SharedBuf::default();
        let handler = StreamHandler::new(ERROR, buf.clone());
        handler.write(&BaseMessage::new(DEBUG, "low".to_string())).unwrap();
        assert_eq!(buf.contents(), "low\n");
    }

    #[test]
    fn accepts_at_or_above_threshold() {
        let handler = StreamHandler::new(INFO, Vec::<u8>::new());
        let h: &dyn Handler<BaseMessage> = &handler;
        assert!(!h.accepts(&DEBUG));
        assert!(h.accepts(&INFO));
        assert!(h.accepts(&ERROR));
    }

    #[test]
    fn closed_sink_reports_write_failure() {
        let handler = StreamHandler::new(DEBUG, ClosedSink);
        let err = handler
            .write(&BaseMessage::new(INFO, "lost".to_string()))
            .unwrap_err();
        assert!(matches!(err, Error::WriteFailure(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn set_level_moves_threshold() {
        let mut handler = StreamHandler::new(DEBUG, Vec::<u8>::new());
        handler.set_level(ERROR);
        assert!(!Handler::<BaseMessage>::accepts(&handler, &INFO));
    }

    #[test]
    fn into_resource_returns_written_bytes() {
        let handler = StreamHandler::new(DEBUG, Vec::<u8>::new());
        handler.write(&BaseMessage::new(INFO, "a".to_string())).unwrap();
        handler.write(&BaseMessage::new(INFO, "b".to_string())).unwrap();
        assert_eq!(handler.into_resource(), b"a\nb\n");
    }

    #[test]
    fn arc_handler_delegates() {
        let buf = SharedBuf::default();
        let handler = Arc::new(StreamHandler::new(INFO, buf.clone()));
        let shared: Arc<dyn Handler<BaseMessage>> = handler.clone();
        assert_eq!(shared.level(), &INFO);
        Handler::<BaseMessage>::write(&handler, &BaseMessage::new(INFO, "x".to_string())).unwrap();
        assert_eq!(buf.contents(), "x\n");
    }
}
