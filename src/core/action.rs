// Author: Dustin Pilgrim
// License: MIT

use crate::core::cycle::PhaseChange;
use crate::core::render::Frame;

/// Work the session hands back to the runtime after each event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Started,

    /// The session stopped; `elapsed_ms` is the clock value it stopped at.
    Stopped {
        elapsed_ms: u64,
    },

    /// The breathing cycle entered a new phase.
    ShowPhase(PhaseChange),

    /// New clock text (remaining time in timer mode, elapsed otherwise).
    ShowClock(String),

    /// Redraw the animation.
    Render(Frame),

    /// The countdown reached zero. Emitted once per countdown.
    CountdownFinished,
}
