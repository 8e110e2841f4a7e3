//! Newline-delimited JSON output.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use huelog_core::{Error, Handler, Level, Message, Result};
use serde::Serialize;

/// Writes each accepted message as one JSON object per line.
///
/// Works for any message variant that implements `Serialize`; the record
/// carries `level`, `content` and the variant's extra fields.
pub struct JsonHandler<W> {
    level: Level,
    resource: Mutex<W>,
}

impl<W> JsonHandler<W> {
    pub fn new(level: Level, resource: W) -> Self {
        Self {
            level,
            resource: Mutex::new(resource),
        }
    }

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

impl JsonHandler<io::Stdout> {
    #[must_use]
    pub fn stdout(level: Level) -> Self {
        Self::new(level, io::stdout())
    }
}

impl<M, W> Handler<M> for JsonHandler<W>
where
    M: Message + Serialize,
    W: Write + Send,
{
    fn level(&self) -> &Level {
        &self.level
    }

    fn write(&self, message: &M) -> Result<()> {
        let mut line = serde_json::to_vec(message).map_err(io::Error::from)?;
        line.push(b'\n');
        let mut resource = self
            .resource
            .lock()
            .map_err(|_| Error::sink_unavailable("resource lock poisoned by a panicked writer"))?;
        resource.write_all(&line)?;
        resource.flush()?;
        Ok(())
    }
}

impl<W> fmt::Debug for JsonHandler<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonHandler")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}
