// Author: Dustin Pilgrim
// License: MIT

use crate::core::color::Rgb;
use crate::core::config::AnimationStyle;
use crate::core::cycle::PhaseChange;
use crate::core::phase::Phase;

/// Orbit animations start at the top of the circle.
pub const ORBIT_START_DEGREES: f32 = 270.0;

/// What a rendering surface should draw at one instant of a phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub phase: Phase,
    pub style: AnimationStyle,
    pub progress: f32,

    /// Position on the orbit, degrees in `[0, 360)`. Only meaningful for orbit.
    pub angle_degrees: f32,
    /// Relative ball size in `[0, 1]`. Only meaningful for grow.
    pub size: f32,

    pub color: Rgb,
}

impl Frame {
    /// `colors` is `(inhale, exhale)`, used for the breathing phases which
    /// carry no interpolation endpoints of their own.
    pub fn at(change: &PhaseChange, progress: f32, style: AnimationStyle, colors: (Rgb, Rgb)) -> Frame {
        let p = progress.clamp(0.0, 1.0);
        let (inhale, exhale) = colors;

        let color = match (change.phase, change.colors) {
            (_, Some((from, to))) => Rgb::lerp(from, to, p),
            (Phase::Inhale, None) => inhale,
            (Phase::Exhale, None) => exhale,
            // Hold/Pause always carry endpoints; keep a sane fallback.
            (Phase::Hold, None) => exhale,
            (Phase::Pause, None) => inhale,
        };

        let angle = (ORBIT_START_DEGREES + change.sweep_degrees() * p).rem_euclid(360.0);

        let size = match change.phase {
            Phase::Inhale => p,
            Phase::Hold => 1.0,
            Phase::Exhale => 1.0 - p,
            Phase::Pause => 0.0,
        };

        Frame {
            phase: change.phase,
            style,
            progress: p,
            angle_degrees: angle,
            size,
            color,
        }
    }
}
