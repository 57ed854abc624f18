// Author: Dustin Pilgrim
// License: MIT

use std::time::Duration;

/// Parse a duration string like "5m", "90s", "1h 30m" or "1h30m15s"
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("Duration must be greater than 0".to_string());
    }

    let mut total_secs = 0u64;
    let mut rest = trimmed;

    while !rest.is_empty() {
        rest = rest.trim_start();

        // Find where the number ends and unit begins
        let num_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| format!("Invalid duration format: '{}' (missing unit)", rest))?;
        let (num_str, after) = rest.split_at(num_end);
        let num: u64 = num_str
            .parse()
            .map_err(|_| format!("Invalid number in '{}'", trimmed))?;

        let after = after.trim_start();
        let unit_end = after
            .find(|c: char| c.is_ascii_digit() || c.is_whitespace())
            .unwrap_or(after.len());
        let (unit, tail) = after.split_at(unit_end);

        let multiplier = match unit.to_lowercase().as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => 1,
            "m" | "min" | "mins" | "minute" | "minutes" => 60,
            "h" | "hr" | "hrs" | "hour" | "hours" => 3600,
            _ => return Err(format!("Unknown time unit: '{}' (use s, m, or h)", unit)),
        };

        total_secs = num
            .checked_mul(multiplier)
            .and_then(|secs| total_secs.checked_add(secs))
            .ok_or_else(|| format!("Duration too large: '{}'", trimmed))?;
        rest = tail;
    }

    if total_secs == 0 {
        return Err("Duration must be greater than 0".to_string());
    }

    Ok(Duration::from_secs(total_secs))
}
