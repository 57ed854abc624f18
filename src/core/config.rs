// Author: Dustin Pilgrim
// License: MIT

use crate::core::color::Rgb;
use crate::core::error::{ConfigError, Error};
use crate::core::phase::{PhaseDurations, Preset};
use crate::core::timer::DEFAULT_TICK_INTERVAL_MS;

pub const DEFAULT_SESSION_MS: u64 = 10 * 60 * 1000;
pub const DEFAULT_TICK_MS: u64 = 100;

/// How the breathing guide is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationStyle {
    /// A ball travelling around a circle.
    #[default]
    Orbit,
    /// A ball growing on inhale and shrinking on exhale.
    Grow,
}

impl AnimationStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationStyle::Orbit => "orbit",
            AnimationStyle::Grow => "grow",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_lowercase().as_str() {
            "orbit" | "circle" => Ok(AnimationStyle::Orbit),
            "grow" | "size" => Ok(AnimationStyle::Grow),
            other => Err(ConfigError::UnknownStyle(other.to_string())),
        }
    }
}

/// Everything a session needs; produced by the config loader and the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub durations: PhaseDurations,
    pub inhale_color: Rgb,
    pub exhale_color: Rgb,
    pub style: AnimationStyle,

    /// true: count up from zero. false: count down from `session_ms`.
    pub stopwatch: bool,
    pub session_ms: u64,

    /// How often the session loop polls the state machines.
    pub tick_ms: u64,
    /// How often the clock text refreshes.
    pub clock_interval_ms: u64,

    pub exit_on_finish: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            durations: Preset::Uplifting.durations(),
            inhale_color: Rgb::RED,
            exhale_color: Rgb::BLUE,
            style: AnimationStyle::Orbit,
            stopwatch: true,
            session_ms: DEFAULT_SESSION_MS,
            tick_ms: DEFAULT_TICK_MS,
            clock_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            exit_on_finish: true,
        }
    }
}

impl SessionSettings {
    pub fn preset(&self) -> Preset {
        Preset::detect(&self.durations)
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.durations.validate()?;
        Ok(())
    }

    /// Where the clock starts: zero for the stopwatch, the full length for the timer.
    pub fn starting_budget_ms(&self) -> u64 {
        if self.stopwatch { 0 } else { self.session_ms }
    }

    /// True when switching to `other` invalidates the running clock.
    pub fn clock_changed(&self, other: &SessionSettings) -> bool {
        self.stopwatch != other.stopwatch || self.session_ms != other.session_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_aliases() {
        assert_eq!(AnimationStyle::parse("circle"), Ok(AnimationStyle::Orbit));
        assert_eq!(AnimationStyle::parse("GROW"), Ok(AnimationStyle::Grow));
        assert!(AnimationStyle::parse("spiral").is_err());
    }

    #[test]
    fn starting_budget_follows_mode() {
        let mut s = SessionSettings::default();
        assert_eq!(s.starting_budget_ms(), 0);

        s.stopwatch = false;
        s.session_ms = 90_000;
        assert_eq!(s.starting_budget_ms(), 90_000);
    }

    #[test]
    fn color_change_keeps_clock() {
        let a = SessionSettings::default();
        let mut b = a.clone();
        b.inhale_color = Rgb::GREEN;
        assert!(!a.clock_changed(&b));

        b.stopwatch = false;
        assert!(a.clock_changed(&b));
    }
}
