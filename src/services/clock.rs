// Author: Dustin Pilgrim
// License: MIT

use std::time::Instant;

use once_cell::sync::Lazy;

static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);

/// Monotonic milliseconds since the first call in this process.
pub fn now_ms() -> u64 {
    ORIGIN.elapsed().as_millis() as u64
}
