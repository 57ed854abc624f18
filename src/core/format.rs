// Author: Dustin Pilgrim
// License: MIT

/// Renders a millisecond value the way the session clock shows it:
/// `S` under a minute, `M:SS` under an hour, `H:MM:SS` above.
/// Negative values clamp to zero.
pub fn format_clock(ms: i64) -> String {
    let t = ms.max(0);
    let hours = t / 3_600_000;
    let minutes = (t / 60_000) % 60;
    let seconds = (t / 1000) % 60;

    if hours == 0 && minutes == 0 {
        format!("{seconds}")
    } else if hours == 0 {
        format!("{minutes}:{seconds:02}")
    } else {
        format!("{hours}:{minutes:02}:{seconds:02}")
    }
}

/// `format_clock` for unsigned values; anything past `i64::MAX` shows as `i64::MAX`.
pub fn format_clock_ms(ms: u64) -> String {
    format_clock(i64::try_from(ms).unwrap_or(i64::MAX))
}

/// Human description of a duration in whole seconds, e.g. "1h 30m", "45s".
pub fn format_span(ms: u64) -> String {
    let total = ms / 1000;
    let (h, m, s) = (total / 3600, (total / 60) % 60, total % 60);

    let mut parts = Vec::new();
    if h > 0 {
        parts.push(format!("{h}h"));
    }
    if m > 0 {
        parts.push(format!("{m}m"));
    }
    if s > 0 || parts.is_empty() {
        parts.push(format!("{s}s"));
    }
    parts.join(" ")
}
