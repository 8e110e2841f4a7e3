//! Timestamped, host-tagged messages over the canonical levels.

use std::sync::OnceLock;

use huelog_core::{DEBUG, Format, LEVEL_COLORS, LEVELS, Logger, LoggerBuilder, Result, StreamHandler};
use time::OffsetDateTime;
use time::macros::format_description;

huelog_core::define_message! {
    /// A text message with the time it was logged, the host and a topic.
    #[derive(serde::Serialize)]
    pub struct StandardMessage<String> with StandardCallbacks {
        #[serde(with = "time::serde::rfc3339")]
        time: OffsetDateTime,
        host: String,
        topic: String,
    }
}

static HOST: OnceLock<String> = OnceLock::new();

/// The local host name, resolved once per process.
pub fn host() -> &'static str {
    HOST.get_or_init(|| {
        hostname::get()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|_| String::from("localhost"))
    })
}

impl StandardCallbacks {
    /// Current UTC time, the process host name and a fixed topic.
    pub fn new(topic: impl Into<String>) -> Self {
        let topic = topic.into();
        Self {
            time: Box::new(OffsetDateTime::now_utc),
            host: Box::new(|| host().to_string()),
            topic: Box::new(move || topic.clone()),
        }
    }
}

/// Renders `{time} {host} {name:<8} [{topic}] {content}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFormat;

impl StandardFormat {
    /// The timestamp as rendered in a line.
    pub fn timestamp(time: OffsetDateTime) -> String {
        time.format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
        ))
        .unwrap_or_else(|_| time.to_string())
    }
}

impl Format<StandardMessage> for StandardFormat {
    type Output = String;

    fn format(&self, message: &StandardMessage) -> String {
        format!(
            "{} {} {:<8} [{}] {}",
            Self::timestamp(message.time),
            message.host,
            message.level,
            message.topic,
            message.content
        )
    }
}

/// A builder over the canonical levels that stamps every message.
pub fn builder(topic: impl Into<String>) -> LoggerBuilder<StandardMessage> {
    LoggerBuilder::new(StandardCallbacks::new(topic))
        .levels(LEVELS.to_vec())
        .colors(LEVEL_COLORS.to_vec())
}

/// A standard logger writing every level to stderr.
pub fn standard_logger(topic: impl Into<String>) -> Result<Logger<StandardMessage>> {
    builder(topic)
        .handler(StreamHandler::stderr(DEBUG).with_format(StandardFormat))
        .build()
}
