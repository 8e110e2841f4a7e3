//! A tracing layer that forwards events to a huelog [`Logger`].

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

use huelog_core::logging::targets;
use huelog_core::{BaseMessage, DEBUG, ERROR, INFO, Level, Logger, Message, WARNING};

/// Maps a tracing level onto the canonical levels (`TRACE` folds into DEBUG).
#[must_use]
pub fn level_for_tracing(level: tracing::Level) -> Level {
    match level {
        tracing::Level::ERROR => ERROR,
        tracing::Level::WARN => WARNING,
        tracing::Level::INFO => INFO,
        _ => DEBUG,
    }
}

/// A tracing layer that writes each event through a huelog logger.
///
/// The content is the event's `message` field, followed by its other fields
/// as `key=value` pairs and the span path when there is one.
pub struct HueLayer<M: Message = BaseMessage> {
    logger: Logger<M>,
    show_targets: bool,
}

impl<M> HueLayer<M>
where
    M: Message + 'static,
    M::Content: From<String>,
{
    pub fn new(logger: Logger<M>) -> Self {
        Self {
            logger,
            show_targets: false,
        }
    }

    /// Toggle the event target as a content prefix.
    #[must_use]
    pub fn with_targets(mut self, show: bool) -> Self {
        self.show_targets = show;
        self
    }

    #[must_use]
    pub fn logger(&self) -> &Logger<M> {
        &self.logger
    }

    /// Install a registry with this layer as the global subscriber.
    pub fn init(self) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
        tracing::subscriber::set_global_default(tracing_subscriber::registry().with(self))?;
        log::debug!(target: targets::BRIDGE, "tracing layer installed");
        Ok(())
    }
}

#[derive(Default)]
struct FieldCollector {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl FieldCollector {
    fn record_value(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            if self.message.is_none() {
                self.message = Some(value);
            }
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_value(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_value(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.record_value(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_value(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record_value(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.record_value(field, value.to_string());
    }
}

impl<S, M> Layer<S> for HueLayer<M>
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
    M: Message + 'static,
    M::Content: From<String>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = level_for_tracing(*metadata.level());
        if !self.logger.accepts(&level) {
            return;
        }

        let mut collector = FieldCollector::default();
        event.record(&mut collector);

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<String> = scope.from_root().map(|span| span.name().to_string()).collect();
            if !spans.is_empty() {
                collector.fields.push(("span".to_string(), spans.join("::")));
            }
        }

        let mut content = String::new();
        if self.show_targets {
            content.push_str(metadata.target());
            content.push_str(": ");
        }
        content.push_str(
            collector
                .message
                .as_deref()
                .unwrap_or_else(|| metadata.name()),
        );
        for (key, value) in &collector.fields {
            content.push(' ');
            content.push_str(key);
            content.push('=');
            content.push_str(value);
        }

        // Layer callbacks cannot report failures.
        let _ = self.logger.write(&level, M::Content::from(content));
    }
}

impl<M: Message> fmt::Debug for HueLayer<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HueLayer")
            .field("logger", &self.logger)
            .field("show_targets", &self.show_targets)
            .finish()
    }
}
