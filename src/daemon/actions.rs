// Author: Dustin Pilgrim
// License: MIT

use crate::core::action::Action;
use crate::core::format::format_clock_ms;
use crate::{sdebug, sinfo};

use super::{Daemon, SessionObserver};

impl<O: SessionObserver> Daemon<O> {
    /// Hands one action to the observer. Returns true when the countdown
    /// finished, so the loop can decide whether to exit.
    pub(super) fn exec_action(&mut self, action: Action) -> bool {
        match action {
            Action::Started => {
                sinfo!("Breathe", "session started");
                self.observer.on_started();
            }

            Action::Stopped { elapsed_ms } => {
                sinfo!("Breathe", "session stopped at {}", format_clock_ms(elapsed_ms));
                self.observer.on_stopped(elapsed_ms);
            }

            Action::ShowPhase(change) => {
                sdebug!(
                    "Breathe",
                    "phase {} for {}ms (cycle {})",
                    change.phase.as_str(),
                    change.duration_ms,
                    change.cycle
                );
                self.observer.on_phase_changed(&change);
            }

            Action::ShowClock(text) => self.observer.on_tick(&text),

            Action::Render(frame) => self.observer.on_frame(&frame),

            Action::CountdownFinished => {
                sinfo!("Breathe", "countdown finished");
                self.observer.on_countdown_finished();
                return true;
            }
        }

        false
    }
}
