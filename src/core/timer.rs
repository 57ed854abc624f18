// Author: Dustin Pilgrim
// License: MIT

use crate::core::format::format_clock;

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    CountUp,
    CountDown,
}

impl TimerMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TimerMode::CountUp => "stopwatch",
            TimerMode::CountDown => "timer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Formatted remaining (count-down) or elapsed (count-up) time.
    Tick(String),

    /// Count-down reached zero. Fired once per start.
    Finished,
}

/// Stopwatch / countdown clock.
///
/// The timer never reads a clock itself: every call takes `now_ms` from a
/// monotonic source owned by the caller.
#[derive(Debug, Clone)]
pub struct DualTimer {
    mode: TimerMode,
    count_up_offset_ms: u64,
    count_down_budget_ms: u64,

    // Some(start instant) while running.
    reference_ms: Option<u64>,

    // Frozen by stop() and by the countdown finishing.
    last_elapsed_ms: u64,
    finished: bool,

    interval_ms: u64,
    next_tick_ms: u64,
}

impl Default for DualTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL_MS)
    }
}

impl DualTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            mode: TimerMode::CountUp,
            count_up_offset_ms: 0,
            count_down_budget_ms: 0,
            reference_ms: None,
            last_elapsed_ms: 0,
            finished: false,
            interval_ms: interval_ms.max(1),
            next_tick_ms: 0,
        }
    }

    pub fn set_mode(&mut self, count_down: bool) {
        self.mode = if count_down { TimerMode::CountDown } else { TimerMode::CountUp };
    }

    pub fn set_count_down_start_time(&mut self, ms: u64) {
        self.mode = TimerMode::CountDown;
        self.count_down_budget_ms = ms;
    }

    pub fn set_count_up_start_time(&mut self, ms: u64) {
        self.mode = TimerMode::CountUp;
        self.count_up_offset_ms = ms;
    }

    /// Tick spacing; takes effect from the next `start`.
    pub fn set_interval(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms.max(1);
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Takes `now_ms` as the reference point. The first tick is due
    /// immediately so the display is populated right away.
    pub fn start(&mut self, now_ms: u64) {
        self.reference_ms = Some(now_ms);
        self.finished = false;
        self.next_tick_ms = now_ms;
    }

    pub fn stop(&mut self, now_ms: u64) {
        if self.reference_ms.is_some() {
            self.last_elapsed_ms = self.time_elapsed(now_ms);
            self.reference_ms = None;
        }
    }

    pub fn is_running(&self) -> bool {
        self.reference_ms.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    /// Count-up: time since start plus the starting offset.
    /// Count-down: time since start.
    /// While stopped this is the value frozen by the last stop.
    pub fn time_elapsed(&self, now_ms: u64) -> u64 {
        match self.reference_ms {
            Some(reference) => {
                let since = now_ms.saturating_sub(reference);
                match self.mode {
                    TimerMode::CountUp => since.saturating_add(self.count_up_offset_ms),
                    TimerMode::CountDown => since,
                }
            }
            None => self.last_elapsed_ms,
        }
    }

    /// What the clock face shows at `now_ms`, before clamping.
    pub fn display_ms(&self, now_ms: u64) -> i64 {
        let elapsed = i64::try_from(self.time_elapsed(now_ms)).unwrap_or(i64::MAX);
        match self.mode {
            TimerMode::CountUp => elapsed,
            TimerMode::CountDown => {
                let budget = i64::try_from(self.count_down_budget_ms).unwrap_or(i64::MAX);
                budget.saturating_sub(elapsed)
            }
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> Option<TimerEvent> {
        let reference = self.reference_ms?;
        if self.finished {
            return None;
        }

        let since = now_ms.saturating_sub(reference);

        if self.mode == TimerMode::CountDown && self.display_ms(now_ms) <= 0 {
            self.last_elapsed_ms = since;
            self.reference_ms = None;
            self.finished = true;
            return Some(TimerEvent::Finished);
        }

        if now_ms < self.next_tick_ms {
            return None;
        }

        // Stay aligned to whole intervals after the reference.
        let due = (since / self.interval_ms + 1).saturating_mul(self.interval_ms);
        self.next_tick_ms = reference.saturating_add(due);

        Some(TimerEvent::Tick(format_clock(self.display_ms(now_ms))))
    }
}
