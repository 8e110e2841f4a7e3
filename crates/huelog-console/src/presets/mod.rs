//! Ready-made logger flavors.
//!
//! - [`ok`]: two levels, `Ok` and `Err`, colored green and red
//! - [`simple`]: canonical levels, messages tagged with a topic
//! - [`standard`]: canonical levels, messages stamped with time, host and topic
//!
//! [`PresetLogger`] builds any of them from a [`LogConfig`], which is how the
//! CLI picks a flavor at runtime.

pub mod ok;
pub mod simple;
pub mod standard;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use huelog_core::logging::targets;
use huelog_core::{Color, LEVEL_COLORS, LEVELS, Level, Logger, StreamHandler};

use crate::config::{LogConfig, OutputFormat};
use crate::error::ConfigError;
use crate::json::JsonHandler;
use ok::OkayFormat;
use simple::{ColorFormat, SimpleFormat, TopicMessage};
use standard::{StandardFormat, StandardMessage};

/// The available logger flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    Ok,
    #[default]
    Simple,
    Standard,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Ok, Preset::Simple, Preset::Standard];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Simple => "simple",
            Self::Standard => "standard",
        }
    }

    /// The preset's level set, in rank order.
    #[must_use]
    pub fn levels(self) -> Vec<Level> {
        match self {
            Self::Ok => ok::LEVELS.to_vec(),
            Self::Simple | Self::Standard => LEVELS.to_vec(),
        }
    }

    /// The preset's colors, one per level.
    #[must_use]
    pub fn colors(self) -> Vec<Color> {
        match self {
            Self::Ok => ok::COLORS.to_vec(),
            Self::Simple | Self::Standard => LEVEL_COLORS.to_vec(),
        }
    }

    /// Resolves a threshold by level name, case-insensitively.
    ///
    /// `None` selects the lowest level, so everything is written.
    pub fn threshold(self, name: Option<&str>) -> Result<Level, ConfigError> {
        let levels = self.levels();
        let Some(name) = name else {
            return Ok(levels[0].clone());
        };
        let wanted = name.to_lowercase();
        levels
            .iter()
            .find(|level| level.method_name() == wanted)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownLevel {
                name: name.to_string(),
                preset: self.to_string(),
                expected: levels
                    .iter()
                    .map(Level::method_name)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ok" | "okay" => Ok(Self::Ok),
            "simple" => Ok(Self::Simple),
            "standard" => Ok(Self::Standard),
            _ => Err(ConfigError::UnknownPreset {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logger of whichever flavor a configuration selected.
#[derive(Debug)]
pub enum PresetLogger {
    Okay(Logger),
    Simple(Logger<TopicMessage>),
    Standard(Logger<StandardMessage>),
}

impl PresetLogger {
    /// Builds the configured flavor with a single handler over `sink`.
    ///
    /// The handler threshold, coloring and output format come from `config`.
    pub fn from_config<W>(config: &LogConfig, sink: W) -> Result<Self, ConfigError>
    where
        W: Write + Send + 'static,
    {
        let preset = config.preset;
        let threshold = preset.threshold(config.level.as_deref())?;
        let json = config.format == OutputFormat::Json;
        let colored = !json && config.color.should_colorize();

        let logger = match preset {
            Preset::Ok => {
                let builder = ok::builder();
                let builder = if json {
                    builder.handler(JsonHandler::new(threshold.clone(), sink))
                } else {
                    builder.handler(
                        StreamHandler::new(threshold.clone(), sink)
                            .with_format(OkayFormat::new(colored)),
                    )
                };
                Self::Okay(builder.build()?)
            }
            Preset::Simple => {
                let builder = simple::builder(config.topic.clone());
                let builder = if json {
                    builder.handler(JsonHandler::new(threshold.clone(), sink))
                } else if colored {
                    builder.handler(
                        StreamHandler::new(threshold.clone(), sink)
                            .with_format(ColorFormat::default()),
                    )
                } else {
                    builder.handler(
                        StreamHandler::new(threshold.clone(), sink).with_format(SimpleFormat),
                    )
                };
                Self::Simple(builder.build()?)
            }
            Preset::Standard => {
                let builder = standard::builder(config.topic.clone());
                let builder = if json {
                    builder.handler(JsonHandler::new(threshold.clone(), sink))
                } else {
                    builder.handler(
                        StreamHandler::new(threshold.clone(), sink).with_format(StandardFormat),
                    )
                };
                Self::Standard(builder.build()?)
            }
        };
        log::debug!(
            target: targets::CONFIG,
            "built {} logger (threshold {}, json {}, color {})",
            preset,
            threshold,
            json,
            colored
        );
        Ok(logger)
    }

    /// Writes `content` through the level method called `method`.
    pub fn emit(&self, method: &str, content: String) -> huelog_core::Result<()> {
        match self {
            Self::Okay(logger) => logger.emit(method, content),
            Self::Simple(logger) => logger.emit(method, content),
            Self::Standard(logger) => logger.emit(method, content),
        }
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        match self {
            Self::Okay(logger) => logger.levels(),
            Self::Simple(logger) => logger.levels(),
            Self::Standard(logger) => logger.levels(),
        }
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        match self {
            Self::Okay(logger) => logger.colors(),
            Self::Simple(logger) => logger.colors(),
            Self::Standard(logger) => logger.colors(),
        }
    }

    #[must_use]
    pub fn preset(&self) -> Preset {
        match self {
            Self::Okay(_) => Preset::Ok,
            Self::Simple(_) => Preset::Simple,
            Self::Standard(_) => Preset::Standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::ColorChoice;
    use crate::testing::TestSink;

    #[test]
    fn test_parse_presets() {
        for preset in Preset::ALL {
            assert_eq!(preset.as_str().parse::<Preset>().unwrap(), preset);
        }
        assert_eq!("OKAY".parse::<Preset>().unwrap(), Preset::Ok);
        assert!(matches!(
            "fancy".parse::<Preset>(),
            Err(ConfigError::UnknownPreset { name }) if name == "fancy"
        ));
    }

    #[test]
    fn test_levels_and_colors_pair_up() {
        for preset in Preset::ALL {
            assert_eq!(preset.levels().len(), preset.colors().len());
        }
    }

    #[test]
    fn test_threshold_resolution() {
        assert_eq!(Preset::Simple.threshold(None).unwrap().name(), "DEBUG");
        assert_eq!(Preset::Simple.threshold(Some("Warning")).unwrap().value(), 2);
        assert_eq!(Preset::Ok.threshold(Some("err")).unwrap().name(), "Err");

        let err = Preset::Ok.threshold(Some("info")).unwrap_err();
        assert!(matches!(
            &err,
            ConfigError::UnknownLevel { name, expected, .. } if name == "info" && expected == "ok, err"
        ));
    }

    #[test]
    fn test_builds_each_flavor() {
        for preset in Preset::ALL {
            let config = LogConfig::new().with_preset(preset);
            let logger = PresetLogger::from_config(&config, TestSink::new()).unwrap();
            assert_eq!(logger.preset(), preset);
            assert_eq!(logger.levels(), preset.levels().as_slice());
            assert_eq!(logger.colors(), preset.colors().as_slice());
        }
    }

    #[test]
    fn test_text_output_per_flavor() {
        let cases = [
            (Preset::Ok, "err", "Err failed"),
            (Preset::Simple, "error", "ERROR    [app] failed"),
        ];
        for (preset, method, expected) in cases {
            let sink = TestSink::new();
            let config = LogConfig::new()
                .with_preset(preset)
                .with_color(ColorChoice::Never);
            let logger = PresetLogger::from_config(&config, sink.clone()).unwrap();
            logger.emit(method, "failed".to_string()).unwrap();
            assert_eq!(sink.raw_output(), [expected]);
        }
    }

    #[test]
    fn test_threshold_filters() {
        let sink = TestSink::new();
        let config = LogConfig::new()
            .with_level("warning")
            .with_color(ColorChoice::Never);
        let logger = PresetLogger::from_config(&config, sink.clone()).unwrap();
        logger.emit("info", "quiet".to_string()).unwrap();
        logger.emit("critical", "loud".to_string()).unwrap();
        sink.assert_line_count(1);
        sink.assert_contains("loud");
        sink.assert_not_contains("quiet");
    }

    #[test]
    fn test_forced_color() {
        let sink = TestSink::new();
        let config = LogConfig::new().with_color(ColorChoice::Always);
        let logger = PresetLogger::from_config(&config, sink.clone()).unwrap();
        logger.emit("info", "hi".to_string()).unwrap();
        assert_eq!(sink.raw_output(), ["\x1b[32mINFO    \x1b[0m [app] hi"]);
    }

    #[test]
    fn test_unknown_method_is_reported() {
        let logger = PresetLogger::from_config(&LogConfig::new(), TestSink::new()).unwrap();
        assert!(matches!(
            logger.emit("ok", "x".to_string()),
            Err(huelog_core::Error::UnknownLevel { .. })
        ));
    }
}
