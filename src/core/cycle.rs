// Author: Dustin Pilgrim
// License: MIT

use crate::core::color::Rgb;
use crate::core::error::{Error, StateError};
use crate::core::phase::{Phase, PhaseDurations};

/// Emitted every time the cycle enters a phase.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseChange {
    pub phase: Phase,
    pub duration_ms: u64,

    /// Color interpolation endpoints. Hold fades inhale -> exhale color,
    /// Pause fades exhale -> inhale color, breathing phases carry none.
    pub colors: Option<(Rgb, Rgb)>,

    pub just_inhaled: bool,
    pub cycle: u64,
    pub started_ms: u64,
}

impl PhaseChange {
    /// Orbit sweep for the phase: inhale travels clockwise, exhale back.
    pub fn sweep_degrees(&self) -> f32 {
        match self.phase {
            Phase::Inhale => 359.0,
            Phase::Exhale => -359.0,
            Phase::Hold | Phase::Pause => 0.0,
        }
    }

    /// Fraction of the phase elapsed at `now_ms`, in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let into = now_ms.saturating_sub(self.started_ms) as f32;
        (into / self.duration_ms as f32).min(1.0)
    }
}

#[derive(Debug, Clone)]
pub struct BreathCycle {
    // Configuration; read on every phase entry, never mid-phase.
    durations: PhaseDurations,
    inhale_color: Rgb,
    exhale_color: Rgb,

    phase: Phase,
    running: bool,
    just_inhaled: bool,
    cycles: u64,

    // Pending transition (absolute ms). None while stopped.
    phase_started_ms: u64,
    phase_duration_ms: u64,
    deadline_ms: Option<u64>,
}

impl BreathCycle {
    pub fn new(durations: PhaseDurations, inhale_color: Rgb, exhale_color: Rgb) -> Result<Self, Error> {
        durations.validate()?;

        Ok(Self {
            durations,
            inhale_color,
            exhale_color,
            phase: Phase::Inhale,
            running: false,
            just_inhaled: false,
            cycles: 0,
            phase_started_ms: 0,
            phase_duration_ms: 0,
            deadline_ms: None,
        })
    }

    /// Replaces durations and colors. The phase in progress keeps its
    /// scheduled deadline; the new values apply from the next phase entry.
    pub fn configure(
        &mut self,
        durations: PhaseDurations,
        inhale_color: Rgb,
        exhale_color: Rgb,
    ) -> Result<(), Error> {
        durations.validate()?;

        self.durations = durations;
        self.inhale_color = inhale_color;
        self.exhale_color = exhale_color;
        Ok(())
    }

    pub fn start(&mut self, now_ms: u64) -> Result<PhaseChange, Error> {
        if self.running {
            return Err(StateError::AlreadyRunning.into());
        }

        self.running = true;
        self.just_inhaled = false;
        self.cycles = 0;
        Ok(self.enter(Phase::Inhale, now_ms))
    }

    /// Cancels the pending transition. Calling it again changes nothing.
    pub fn stop(&mut self) {
        self.running = false;
        self.deadline_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Fires every transition whose deadline is at or before `now_ms`.
    ///
    /// Each following deadline is chained from the previous one rather than
    /// from `now_ms`, so a late poll never stretches the cycle.
    pub fn poll(&mut self, now_ms: u64) -> Vec<PhaseChange> {
        let mut changes = Vec::new();

        while self.running {
            let Some(deadline) = self.deadline_ms else { break };
            if now_ms < deadline {
                break;
            }

            if matches!(self.phase, Phase::Inhale | Phase::Exhale) {
                self.just_inhaled = !self.just_inhaled;
            }
            if self.phase == Phase::Pause {
                self.cycles += 1;
            }

            let next = self.phase.next();
            changes.push(self.enter(next, deadline));
        }

        changes
    }

    fn enter(&mut self, phase: Phase, at_ms: u64) -> PhaseChange {
        let duration_ms = self.durations.of(phase);

        self.phase = phase;
        self.phase_started_ms = at_ms;
        self.phase_duration_ms = duration_ms;
        self.deadline_ms = Some(at_ms.saturating_add(duration_ms));

        self.current()
    }

    /// Snapshot of the phase in progress.
    pub fn current(&self) -> PhaseChange {
        let colors = match self.phase {
            Phase::Hold => Some((self.inhale_color, self.exhale_color)),
            Phase::Pause => Some((self.exhale_color, self.inhale_color)),
            Phase::Inhale | Phase::Exhale => None,
        };

        PhaseChange {
            phase: self.phase,
            duration_ms: self.phase_duration_ms,
            colors,
            just_inhaled: self.just_inhaled,
            cycle: self.cycles,
            started_ms: self.phase_started_ms,
        }
    }

    // ---------------- accessors ----------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn just_inhaled(&self) -> bool {
        self.just_inhaled
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    pub fn durations(&self) -> PhaseDurations {
        self.durations
    }

    pub fn colors(&self) -> (Rgb, Rgb) {
        (self.inhale_color, self.exhale_color)
    }
}
