//! Message shapes and the callbacks that fill their extra fields.
//!
//! Every message has a [`Level`] and a content value. Variants add a fixed,
//! typed set of extra fields, declared as the [`Message::Fields`] record and
//! produced on each log call by a [`Callbacks`] implementation. Declare new
//! variants with [`define_message!`](crate::define_message).

use serde::Serialize;

use crate::level::Level;

/// The capability every message variant provides to the dispatch machinery.
pub trait Message {
    /// What the caller logs (commonly text).
    type Content;

    /// The extra fields, as produced by the logger's callbacks.
    type Fields;

    /// Builds a message from its parts.
    fn assemble(level: Level, content: Self::Content, fields: Self::Fields) -> Self
    where
        Self: Sized;

    fn level(&self) -> &Level;

    fn content(&self) -> &Self::Content;
}

/// The base message: a level and a content value, nothing else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseMessage<C = String> {
    pub level: Level,
    pub content: C,
}

impl<C> BaseMessage<C> {
    #[must_use]
    pub fn new(level: Level, content: C) -> Self {
        Self { level, content }
    }
}

impl<C> Message for BaseMessage<C> {
    type Content = C;
    type Fields = ();

    fn assemble(level: Level, content: C, (): ()) -> Self {
        Self { level, content }
    }

    fn level(&self) -> &Level {
        &self.level
    }

    fn content(&self) -> &C {
        &self.content
    }
}

/// Zero-argument producers for a message's extra fields.
///
/// `evaluate` runs on every log call, so the values are always current.
pub trait Callbacks<F>: Send + Sync {
    /// Produces a fresh set of field values.
    fn evaluate(&self) -> F;

    /// Names of the produced fields, in evaluation order.
    fn names(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Callbacks for variants without extra fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCallbacks;

impl Callbacks<()> for NoCallbacks {
    fn evaluate(&self) {}
}

/// Adapts a single closure producing the whole field record.
///
/// ```
/// use huelog_core::{Callbacks, callback_fn};
///
/// let callbacks = callback_fn(|| (String::from("net"),));
/// assert_eq!(callbacks.evaluate().0, "net");
/// ```
pub fn callback_fn<F, T>(f: F) -> FnCallbacks<F>
where
    F: Fn() -> T + Send + Sync,
{
    FnCallbacks(f)
}

/// See [`callback_fn`].
#[derive(Clone, Copy)]
pub struct FnCallbacks<F>(F);

impl<F, T> Callbacks<T> for FnCallbacks<F>
where
    F: Fn() -> T + Send + Sync,
{
    fn evaluate(&self) -> T {
        (self.0)()
    }
}

impl<F> std::fmt::Debug for FnCallbacks<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCallbacks").finish_non_exhaustive()
    }
}
