//! Core types and traits for huelog.
//!
//! This crate provides the building blocks:
//! - [`Level`] and the canonical level set
//! - [`Color`] and the eight-name ANSI palette
//! - [`Message`] variants and the [`Callbacks`] that fill their fields
//! - [`Handler`] sinks and [`Format`] functions
//! - [`Logger`], which assembles messages and dispatches them
//!
//! # Design Principles
//!
//! - Message variants are closed records; extra fields are typed
//! - Dispatch is synchronous and in handler registration order
//! - Write errors always reach the caller
//! - All handlers and callbacks are `Send + Sync`

#![forbid(unsafe_code)]

mod color;
mod error;
mod handler;
mod level;
pub mod logging;
mod logger;
mod macros;
mod message;

pub use color::{
    ANSI_RESET, BLACK, BLUE, COLORS, CYAN, Color, GREEN, LEVEL_COLORS, MAGENTA, NAMES, RED, WHITE,
    YELLOW,
};
pub use error::{Error, Result};
pub use handler::{Format, FormatFn, Handler, Identity, StreamHandler, format_fn, identity};
pub use level::{CRITICAL, DEBUG, ERROR, INFO, LEVELS, Level, WARNING};
pub use logger::{LevelMethod, Logger, LoggerBuilder, StandardMethods};
pub use message::{BaseMessage, Callbacks, FnCallbacks, Message, NoCallbacks, callback_fn};
