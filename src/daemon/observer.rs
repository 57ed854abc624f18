// Author: Dustin Pilgrim
// License: MIT

use crate::core::cycle::PhaseChange;
use crate::core::render::Frame;

/// Presentation side of a session. Passed to the daemon at construction;
/// every callback runs on the session loop task, one at a time.
pub trait SessionObserver: Send + 'static {
    fn on_phase_changed(&mut self, change: &PhaseChange);

    /// Formatted clock text: remaining time for the timer, elapsed for the stopwatch.
    fn on_tick(&mut self, text: &str);

    fn on_countdown_finished(&mut self);

    fn on_started(&mut self) {}

    fn on_stopped(&mut self, _elapsed_ms: u64) {}

    fn on_frame(&mut self, _frame: &Frame) {}
}
