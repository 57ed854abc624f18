// Author: Dustin Pilgrim
// License: MIT

use crate::core::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Inhale,
    Hold,
    Exhale,
    Pause,
}

impl Phase {
    /// Cyclic successor: Inhale -> Hold -> Exhale -> Pause -> Inhale.
    pub fn next(self) -> Phase {
        match self {
            Phase::Inhale => Phase::Hold,
            Phase::Hold => Phase::Exhale,
            Phase::Exhale => Phase::Pause,
            Phase::Pause => Phase::Inhale,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Inhale => "inhale",
            Phase::Hold => "hold",
            Phase::Exhale => "exhale",
            Phase::Pause => "pause",
        }
    }

    /// Short prompt shown to the user when the phase begins.
    pub fn prompt(self) -> &'static str {
        match self {
            Phase::Inhale => "Breathe in",
            Phase::Hold => "Hold",
            Phase::Exhale => "Breathe out",
            Phase::Pause => "Rest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseDurations {
    pub inhale_ms: u64,
    pub hold_ms: u64,
    pub exhale_ms: u64,
    pub pause_ms: u64,
}

impl PhaseDurations {
    pub const fn from_secs(inhale: u64, hold: u64, exhale: u64, pause: u64) -> Self {
        Self {
            inhale_ms: inhale * 1000,
            hold_ms: hold * 1000,
            exhale_ms: exhale * 1000,
            pause_ms: pause * 1000,
        }
    }

    pub fn of(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Inhale => self.inhale_ms,
            Phase::Hold => self.hold_ms,
            Phase::Exhale => self.exhale_ms,
            Phase::Pause => self.pause_ms,
        }
    }

    pub fn cycle_ms(&self) -> u64 {
        self.inhale_ms
            .saturating_add(self.hold_ms)
            .saturating_add(self.exhale_ms)
            .saturating_add(self.pause_ms)
    }

    /// Rejects the first phase (in cycle order) with a zero duration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let order = [Phase::Inhale, Phase::Hold, Phase::Exhale, Phase::Pause];
        match order.into_iter().find(|p| self.of(*p) == 0) {
            Some(phase) => Err(ConfigError::ZeroDuration(phase)),
            None => Ok(()),
        }
    }
}

impl Default for PhaseDurations {
    fn default() -> Self {
        Preset::Uplifting.durations()
    }
}

// ---------------- presets ----------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Uplifting,
    Relaxing,
    Meditative,
    Custom,
}

impl Preset {
    pub const NAMED: [Preset; 3] = [Preset::Uplifting, Preset::Relaxing, Preset::Meditative];

    /// Durations for a named preset. `Custom` has no durations of its own and
    /// falls back to the uplifting rhythm.
    pub fn durations(self) -> PhaseDurations {
        match self {
            Preset::Uplifting | Preset::Custom => PhaseDurations::from_secs(4, 4, 4, 4),
            Preset::Relaxing => PhaseDurations::from_secs(4, 7, 8, 1),
            Preset::Meditative => PhaseDurations::from_secs(5, 2, 7, 3),
        }
    }

    /// Maps a set of durations back to the named preset it matches, or `Custom`.
    pub fn detect(durations: &PhaseDurations) -> Preset {
        Self::NAMED
            .into_iter()
            .find(|p| p.durations() == *durations)
            .unwrap_or(Preset::Custom)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Uplifting => "uplifting",
            Preset::Relaxing => "relaxing",
            Preset::Meditative => "meditative",
            Preset::Custom => "custom",
        }
    }

    pub fn parse(s: &str) -> Result<Preset, ConfigError> {
        match s.trim().to_lowercase().as_str() {
            "uplifting" => Ok(Preset::Uplifting),
            "relaxing" => Ok(Preset::Relaxing),
            "meditative" => Ok(Preset::Meditative),
            "custom" => Ok(Preset::Custom),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }
}
