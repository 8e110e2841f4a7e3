//! Topic-tagged messages over the canonical levels.

use huelog_core::{
    ANSI_RESET, Color, DEBUG, Format, LEVEL_COLORS, LEVELS, Logger, LoggerBuilder, Result,
    StreamHandler,
};

use crate::detection::ColorChoice;

huelog_core::define_message! {
    /// A text message tagged with the topic it was logged under.
    #[derive(serde::Serialize)]
    pub struct TopicMessage<String> with TopicCallbacks {
        topic: String,
    }
}

impl TopicCallbacks {
    /// Callbacks that always report `topic`.
    pub fn fixed(topic: impl Into<String>) -> Self {
        let topic = topic.into();
        Self {
            topic: Box::new(move || topic.clone()),
        }
    }
}

/// Renders `{name:<8} [{topic}] {content}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleFormat;

impl Format<TopicMessage> for SimpleFormat {
    type Output = String;

    fn format(&self, message: &TopicMessage) -> String {
        format!("{:<8} [{}] {}", message.level, message.topic, message.content)
    }
}

/// Like [`SimpleFormat`], with the level name in its color.
#[derive(Debug, Clone)]
pub struct ColorFormat {
    colors: Vec<Color>,
}

impl ColorFormat {
    /// Colors indexed by level value.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }
}

impl Default for ColorFormat {
    fn default() -> Self {
        Self::new(LEVEL_COLORS.to_vec())
    }
}

impl Format<TopicMessage> for ColorFormat {
    type Output = String;

    fn format(&self, message: &TopicMessage) -> String {
        match message.level.index().and_then(|i| self.colors.get(i)) {
            Some(color) => format!(
                "{}{:<8}{} [{}] {}",
                color.foreground(),
                message.level,
                ANSI_RESET,
                message.topic,
                message.content
            ),
            None => SimpleFormat.format(message),
        }
    }
}

/// A builder over the canonical levels that tags every message with `topic`.
pub fn builder(topic: impl Into<String>) -> LoggerBuilder<TopicMessage> {
    LoggerBuilder::new(TopicCallbacks::fixed(topic))
        .levels(LEVELS.to_vec())
        .colors(LEVEL_COLORS.to_vec())
}

/// A topic logger writing every level to stderr, colored when stderr
/// supports it.
pub fn simple_logger(topic: impl Into<String>) -> Result<Logger<TopicMessage>> {
    let builder = builder(topic);
    if ColorChoice::Auto.should_colorize() {
        builder
            .handler(StreamHandler::stderr(DEBUG).with_format(ColorFormat::default()))
            .build()
    } else {
        builder
            .handler(StreamHandler::stderr(DEBUG).with_format(SimpleFormat))
            .build()
    }
}
