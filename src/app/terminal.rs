// Author: Dustin Pilgrim
// License: MIT

use std::io::{IsTerminal, Write};

use crate::core::config::AnimationStyle;
use crate::core::cycle::PhaseChange;
use crate::core::format::format_clock_ms;
use crate::core::phase::Phase;
use crate::core::render::Frame;
use crate::daemon::SessionObserver;
use crate::services::input::INPUT_HELP;

const RING_SLOTS: usize = 24;
const BAR_WIDTH: usize = 24;
const RESET: &str = "\x1b[0m";

/// Draws the session as a single self-overwriting terminal line.
pub struct TerminalObserver {
    use_colors: bool,
    interactive: bool,
    phase: Option<Phase>,
    clock: String,
}

impl TerminalObserver {
    pub fn new() -> Self {
        let tty = std::io::stdout().is_terminal();
        Self {
            use_colors: tty,
            interactive: tty,
            phase: None,
            clock: String::new(),
        }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            use_colors: false,
            interactive: false,
            phase: None,
            clock: String::new(),
        }
    }

    pub fn render_line(&self, frame: &Frame) -> String {
        let figure = match frame.style {
            AnimationStyle::Orbit => orbit_ring(frame.angle_degrees),
            AnimationStyle::Grow => grow_bar(frame.size),
        };

        let figure = if self.use_colors {
            format!("{}{}{}", frame.color.ansi_fg(), figure, RESET)
        } else {
            figure
        };

        format!("{:<12} {}  {:>8}", frame.phase.prompt(), figure, self.clock)
    }

    fn emit(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        if self.interactive {
            let _ = write!(out, "\r\x1b[2K{line}");
        } else {
            let _ = writeln!(out, "{line}");
        }
        let _ = out.flush();
    }

    fn emit_message(&self, msg: &str) {
        let mut out = std::io::stdout().lock();
        if self.interactive {
            let _ = write!(out, "\r\x1b[2K");
        }
        let _ = writeln!(out, "{msg}");
        let _ = out.flush();
    }
}

impl Default for TerminalObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionObserver for TerminalObserver {
    fn on_phase_changed(&mut self, change: &PhaseChange) {
        self.phase = Some(change.phase);

        // Without a live line, print one entry per phase instead of frames.
        if !self.interactive {
            self.emit(&format!(
                "{} ({}s)",
                change.phase.prompt(),
                change.duration_ms as f64 / 1000.0
            ));
        }
    }

    fn on_tick(&mut self, text: &str) {
        self.clock = text.to_string();
    }

    fn on_countdown_finished(&mut self) {
        self.emit_message("Session complete.");
    }

    fn on_started(&mut self) {
        if self.interactive {
            self.emit_message(INPUT_HELP);
        }
    }

    fn on_stopped(&mut self, elapsed_ms: u64) {
        self.phase = None;
        self.emit_message(&format!(
            "Stopped after {}. Press Enter to continue.",
            format_clock_ms(elapsed_ms)
        ));
    }

    fn on_frame(&mut self, frame: &Frame) {
        if self.interactive {
            let line = self.render_line(frame);
            self.emit(&line);
        }
    }
}

/// A ring of dots with the ball at `angle_degrees`, 270 being the start.
fn orbit_ring(angle_degrees: f32) -> String {
    let turn = (angle_degrees - 270.0).rem_euclid(360.0) / 360.0;
    let slot = (turn * RING_SLOTS as f32).round() as usize % RING_SLOTS;

    (0..RING_SLOTS)
        .map(|i| if i == slot { '●' } else { '·' })
        .collect()
}

/// A bar filled in proportion to `size`.
fn grow_bar(size: f32) -> String {
    let filled = (size.clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as usize;
    let filled = filled.max(1);
    format!("{}{}", "●".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}
