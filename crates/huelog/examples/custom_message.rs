//! Example: a custom message variant with computed fields, written as text
//! to stderr and as JSON lines to stdout.
//!
//! Run with:
//! ```bash
//! cargo run --example custom_message
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use huelog::prelude::*;

define_message! {
    /// A message tagged with the request it belongs to.
    #[derive(serde::Serialize)]
    pub struct RequestMessage<String> with RequestCallbacks {
        request: u64,
        service: &'static str,
    }
}

fn main() -> Result<()> {
    let next_request = Arc::new(AtomicU64::new(1));
    let counter = next_request.clone();

    let callbacks = RequestCallbacks {
        request: Box::new(move || counter.load(Ordering::Relaxed)),
        service: Box::new(|| "checkout"),
    };

    let logger = LoggerBuilder::<RequestMessage>::new(callbacks)
        .handler(StreamHandler::stderr(INFO).with_format(format_fn(|m: &RequestMessage| {
            let name = format!("{:<8}", m.level);
            let name = match m.level.index().and_then(|i| huelog::LEVEL_COLORS.get(i)) {
                Some(color) => color.paint(name),
                None => name,
            };
            format!(
                "{} #{} {}: {}",
                name,
                m.request,
                m.service,
                m.content
            )
        })))
        .handler(JsonHandler::stdout(WARNING))
        .build()?;

    logger.info("cart loaded".to_string())?;
    next_request.fetch_add(1, Ordering::Relaxed);
    logger.warning("payment retry".to_string())?;
    logger.debug("not shown".to_string())?;

    Ok(())
}
