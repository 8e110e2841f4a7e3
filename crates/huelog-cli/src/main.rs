//! huelog CLI - leveled, colored messages from the shell.
//!
//! Commands:
//! - `emit` - Write one message at a level
//! - `pipe` - Write each stdin line as a message at a level
//! - `levels` - List the levels of the selected preset
//! - `palette` - List the color palette

#![forbid(unsafe_code)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use huelog_console::presets::simple::{self, SimpleFormat};
use huelog_console::{
    ColorChoice, ConfigError, LogBridge, LogConfig, OutputFormat, Preset, PresetLogger,
};
use huelog_core::logging::targets;
use huelog_core::{ANSI_RESET, COLORS, DEBUG, StreamHandler};

/// huelog - Leveled, colored log lines from the command line.
#[derive(Parser)]
#[command(name = "huelog")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command.
///
/// Precedence: flags, then environment, then the configuration file.
#[derive(Args)]
struct GlobalArgs {
    /// Logger flavor (ok, simple, standard).
    #[arg(long, short = 'p', global = true)]
    preset: Option<Preset>,

    /// Lowest level written (a level name of the preset).
    #[arg(long, short = 't', global = true)]
    threshold: Option<String>,

    /// Topic for the simple and standard presets.
    #[arg(long, global = true)]
    topic: Option<String>,

    /// When to color output (auto, always, never).
    #[arg(long, global = true)]
    color: Option<ColorChoice>,

    /// Write JSON lines to stdout instead of text to stderr.
    #[arg(long, global = true)]
    json: bool,

    /// Configuration file (default: <config dir>/huelog/config.toml if present).
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Print huelog's own diagnostics to stderr.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one message.
    ///
    /// The words after the level are joined with spaces.
    Emit {
        /// Level name, e.g. info or err.
        level: String,

        /// Message text.
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// Write each line of stdin as a message.
    Pipe {
        /// Level name, e.g. info or err.
        level: String,
    },

    /// List the levels of the selected preset.
    Levels,

    /// List the color palette and its escape codes.
    Palette {
        /// Output format (text, json, yaml).
        #[arg(long, short = 'f', default_value = "text")]
        format: PaletteFormat,
    },
}

/// Output format for the palette command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum PaletteFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for PaletteFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(format!("Unknown format: {s}. Expected: text, json, yaml")),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Log(#[from] huelog_core::Error),

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
}

type CliResult = Result<(), CliError>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.global.verbose {
        install_diagnostics();
    }

    let result = match cli.command {
        Commands::Emit { level, message } => cmd_emit(&cli.global, &level, &message.join(" ")),
        Commands::Pipe { level } => cmd_pipe(&cli.global, &level),
        Commands::Levels => cmd_levels(&cli.global),
        Commands::Palette { format } => cmd_palette(&cli.global, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Routes `log` records from the libraries through a huelog logger on stderr.
fn install_diagnostics() {
    let logger = simple::builder("huelog")
        .handler(StreamHandler::stderr(DEBUG).with_format(SimpleFormat))
        .build();
    match logger {
        Ok(logger) => LogBridge::new(logger)
            .with_max_level(log::LevelFilter::Debug)
            .try_init(),
        Err(e) => eprintln!("Error: cannot set up diagnostics: {e}"),
    }
}

/// Layers defaults, the configuration file, the environment and flags.
fn resolve_config(args: &GlobalArgs) -> Result<LogConfig, ConfigError> {
    let config = match &args.config {
        Some(path) => LogConfig::load(path)?,
        None => match LogConfig::default_path() {
            Some(path) if path.is_file() => LogConfig::load(&path)?,
            _ => LogConfig::default(),
        },
    };
    let mut config = config.merge_env()?;

    if let Some(preset) = args.preset {
        config.preset = preset;
    }
    if let Some(threshold) = &args.threshold {
        config.level = Some(threshold.clone());
    }
    if let Some(topic) = &args.topic {
        config.topic = topic.clone();
    }
    if let Some(color) = args.color {
        config.color = color;
    }
    if args.json {
        config.format = OutputFormat::Json;
    }
    log::debug!(target: targets::CONFIG, "resolved configuration: {config:?}");
    Ok(config)
}

fn build_logger(args: &GlobalArgs) -> Result<PresetLogger, CliError> {
    let config = resolve_config(args)?;
    let logger = match config.format {
        OutputFormat::Json => PresetLogger::from_config(&config, io::stdout())?,
        OutputFormat::Text => PresetLogger::from_config(&config, io::stderr())?,
    };
    Ok(logger)
}

/// Fails before any input is read if `level` is not a level of the logger.
fn method_for(logger: &PresetLogger, level: &str) -> Result<String, CliError> {
    let method = level.to_lowercase();
    if logger.levels().iter().any(|l| l.method_name() == method) {
        Ok(method)
    } else {
        Err(huelog_core::Error::UnknownLevel {
            name: level.to_string(),
        }
        .into())
    }
}

/// Emit command: write one message.
fn cmd_emit(args: &GlobalArgs, level: &str, message: &str) -> CliResult {
    let logger = build_logger(args)?;
    let method = method_for(&logger, level)?;
    logger.emit(&method, message.to_string())?;
    Ok(())
}

/// Pipe command: write each stdin line.
fn cmd_pipe(args: &GlobalArgs, level: &str) -> CliResult {
    let logger = build_logger(args)?;
    let method = method_for(&logger, level)?;
    for line in io::stdin().lock().lines() {
        logger.emit(&method, line?)?;
    }
    Ok(())
}

/// Levels command: one line per level, lowest first.
fn cmd_levels(args: &GlobalArgs) -> CliResult {
    let config = resolve_config(args)?;
    let colored = config.color.should_colorize_stdout();
    let levels = config.preset.levels();
    let colors = config.preset.colors();

    let mut out = io::stdout().lock();
    for (level, color) in levels.iter().zip(&colors) {
        let name = format!("{:<8}", level.name());
        let name = if colored { color.paint(name) } else { name };
        writeln!(
            out,
            "{}  {}  {:<7}  {}",
            level.value(),
            name,
            color.name(),
            level.method_name()
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct PaletteEntry {
    name: &'static str,
    foreground: &'static str,
    background: &'static str,
}

/// Palette command: the eight colors and their codes.
fn cmd_palette(args: &GlobalArgs, format: PaletteFormat) -> CliResult {
    let entries: Vec<PaletteEntry> = COLORS
        .iter()
        .map(|color| PaletteEntry {
            name: color.name(),
            foreground: color.foreground(),
            background: color.background(),
        })
        .collect();

    let mut out = io::stdout().lock();
    match format {
        PaletteFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?,
        PaletteFormat::Yaml => write!(out, "{}", serde_yaml::to_string(&entries)?)?,
        PaletteFormat::Text => {
            let colored = color_for_stdout(args)?;
            for (color, entry) in COLORS.iter().zip(&entries) {
                let swatch = format!("{:<8}", entry.name);
                let swatch = if colored { color.paint(swatch) } else { swatch };
                writeln!(
                    out,
                    "{}  {}  {}  {}",
                    swatch,
                    printable(entry.foreground),
                    printable(entry.background),
                    printable(ANSI_RESET)
                )?;
            }
        }
    }
    Ok(())
}

fn color_for_stdout(args: &GlobalArgs) -> Result<bool, CliError> {
    Ok(resolve_config(args)?.color.should_colorize_stdout())
}

/// `\x1b[31m` as `ESC[31m`.
fn printable(code: &str) -> String {
    code.replace('\x1b', "ESC")
}
