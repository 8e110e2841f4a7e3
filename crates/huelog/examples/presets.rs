//! Example: the three preset flavors side by side.
//!
//! Run with:
//! ```bash
//! cargo run --example presets
//! ```

use huelog::prelude::*;
use huelog::presets::ok::okay_logger;

fn main() -> Result<()> {
    let okay = okay_logger()?;
    okay.ok("build finished".to_string())?;
    okay.err("2 tests failed".to_string())?;

    let simple = simple_logger("scheduler")?;
    simple.info("queue drained".to_string())?;
    simple.warning("worker 3 restarted".to_string())?;

    let standard = standard_logger("storage")?;
    standard.error("disk 90% full".to_string())?;

    Ok(())
}
