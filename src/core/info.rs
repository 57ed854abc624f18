// Author: Dustin Pilgrim
// License: MIT

use serde_json::{Value, json};

use crate::core::format::format_span;
use crate::core::session::Session;

/// Snapshot returned from the session loop for status queries.
///
/// - `json` is the stable machine-readable contract.
/// - `pretty_text` is what the terminal prints.
#[derive(Debug, Clone)]
pub struct InfoSnapshot {
    pub json: Value,
    pub pretty_text: String,
    pub running: bool,
}

impl InfoSnapshot {
    pub fn from_session(session: &Session, now_ms: u64) -> Self {
        let settings = session.settings();
        let cycle = session.cycle();
        let d = cycle.durations();
        let (inhale_color, exhale_color) = cycle.colors();
        let running = session.is_running();
        let clock = session.clock_text(now_ms);

        let json = json!({
            "running": running,
            "phase": running.then(|| cycle.phase().as_str()),
            "just_inhaled": cycle.just_inhaled(),
            "next_phase_in_ms": cycle.deadline_ms().map(|d| d.saturating_sub(now_ms)),
            "cycles": cycle.cycles(),
            "finished": session.timer().is_finished(),
            "clock": clock,
            "mode": session.timer().mode().as_str(),
            "clock_interval_ms": session.timer().interval_ms(),
            "preset": settings.preset().as_str(),
            "style": settings.style.as_str(),
            "durations_ms": {
                "inhale": d.inhale_ms,
                "hold": d.hold_ms,
                "exhale": d.exhale_ms,
                "pause": d.pause_ms,
            },
            "colors": {
                "inhale": inhale_color.to_string(),
                "exhale": exhale_color.to_string(),
            },
        });

        let state = if running {
            format!("{} (cycle {})", cycle.phase().as_str(), cycle.cycles() + 1)
        } else {
            "stopped".to_string()
        };

        let rows = [
            ("State", state),
            ("Clock", format!("{clock} ({})", session.timer().mode().as_str())),
            ("Preset", settings.preset().as_str().to_string()),
            (
                "Rhythm",
                format!(
                    "in {} / hold {} / out {} / pause {}",
                    format_span(d.inhale_ms),
                    format_span(d.hold_ms),
                    format_span(d.exhale_ms),
                    format_span(d.pause_ms)
                ),
            ),
            ("Colors", format!("{inhale_color} -> {exhale_color}")),
            ("Style", settings.style.as_str().to_string()),
        ];

        let width = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        let pretty_text = rows
            .iter()
            .map(|(label, value)| format!("  {label:<width$}  │ {value}"))
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            json,
            pretty_text,
            running,
        }
    }
}
