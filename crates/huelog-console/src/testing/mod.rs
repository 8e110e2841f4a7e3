//! Test utilities for huelog output
//!
//! - [`TestSink`]: an in-memory `io::Write` resource for handlers
//! - [`RecordingHandler`]: a handler that records formatted deliveries in order

mod recording;
mod test_sink;

pub use recording::{Delivery, RecordingHandler, Sequence};
pub use test_sink::TestSink;
