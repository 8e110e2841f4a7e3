//! A handler that remembers what it was given.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use huelog_core::{Format, Handler, Identity, Level, Message, Result};

/// A counter shared by several recording handlers, so deliveries can be
/// ordered across them.
#[derive(Debug, Clone, Default)]
pub struct Sequence(Arc<AtomicUsize>);

impl Sequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&self) -> usize {
        self.0.fetch_add(1, Ordering::SeqCst)
    }

    /// How many deliveries have been stamped so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// One message as seen by a [`RecordingHandler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub sequence: usize,
    pub level: Level,
    pub text: String,
}

/// Records the formatted text of every delivered message.
///
/// Clones share the same record, so keep one clone and register the other.
#[derive(Clone)]
pub struct RecordingHandler<F = Identity> {
    level: Level,
    sequence: Sequence,
    formatter: F,
    deliveries: Arc<Mutex<Vec<Delivery>>>,
}

impl RecordingHandler {
    /// A recorder stamping deliveries from `sequence`.
    #[must_use]
    pub fn new(level: Level, sequence: &Sequence) -> Self {
        Self {
            level,
            sequence: sequence.clone(),
            formatter: Identity,
            deliveries: Arc::default(),
        }
    }
}

impl<F> RecordingHandler<F> {
    /// Replaces the formatter; the record stays shared with existing clones.
    pub fn with_format<G>(self, formatter: G) -> RecordingHandler<G> {
        RecordingHandler {
            level: self.level,
            sequence: self.sequence,
            formatter,
            deliveries: self.deliveries,
        }
    }

    #[must_use]
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Just the formatted texts, in delivery order.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.deliveries().into_iter().map(|d| d.text).collect()
    }
}

impl<M, F> Handler<M> for RecordingHandler<F>
where
    M: Message,
    F: Format<M>,
    F::Output: fmt::Display,
{
    fn level(&self) -> &Level {
        &self.level
    }

    fn write(&self, message: &M) -> Result<()> {
        let text = self.formatter.format(message).to_string();
        let mut deliveries = self
            .deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        deliveries.push(Delivery {
            sequence: self.sequence.next(),
            level: message.level().clone(),
            text,
        });
        Ok(())
    }
}

impl<F> fmt::Debug for RecordingHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingHandler")
            .field("level", &self.level)
            .field("deliveries", &self.deliveries().len())
            .finish_non_exhaustive()
    }
}
