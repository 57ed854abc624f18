// Author: Dustin Pilgrim
// License: MIT

use crate::core::config::SessionSettings;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Periodic wake-up from the ticker; fires due phase transitions and clock ticks.
    Tick {
        now_ms: u64,
    },

    Start {
        now_ms: u64,
    },
    Stop {
        now_ms: u64,
    },

    /// Start when stopped, stop when running.
    Toggle {
        now_ms: u64,
    },

    /// Stop and rewind the clock to the session's starting value.
    Restart {
        now_ms: u64,
    },

    Reconfigure {
        settings: SessionSettings,
        now_ms: u64,
    },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Tick { .. } => "tick",
            Event::Start { .. } => "start",
            Event::Stop { .. } => "stop",
            Event::Toggle { .. } => "toggle",
            Event::Restart { .. } => "restart",
            Event::Reconfigure { .. } => "reconfigure",
        }
    }
}
