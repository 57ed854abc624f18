// Author: Dustin Pilgrim
// License: MIT

use crate::core::action::Action;
use crate::core::config::SessionSettings;
use crate::core::cycle::BreathCycle;
use crate::core::error::Error;
use crate::core::events::Event;
use crate::core::format::{format_clock, format_clock_ms};
use crate::core::render::Frame;
use crate::core::timer::{DualTimer, TimerEvent, TimerMode};

/// One meditation: a breathing cycle and a clock started and stopped together.
///
/// `budget_ms` carries the clock across stop/start: the accumulated elapsed
/// time for the stopwatch, the remaining time for the timer.
#[derive(Debug, Clone)]
pub struct Session {
    settings: SessionSettings,
    cycle: BreathCycle,
    timer: DualTimer,
    budget_ms: u64,
}

impl Session {
    pub fn new(settings: SessionSettings) -> Result<Self, Error> {
        settings.validate()?;

        let cycle = BreathCycle::new(settings.durations, settings.inhale_color, settings.exhale_color)?;
        let mut timer = DualTimer::new(settings.clock_interval_ms);
        timer.set_mode(!settings.stopwatch);

        Ok(Self {
            budget_ms: settings.starting_budget_ms(),
            settings,
            cycle,
            timer,
        })
    }

    pub fn handle_event(&mut self, event: Event) -> Result<Vec<Action>, Error> {
        match event {
            Event::Tick { now_ms } => Ok(self.tick(now_ms)),
            Event::Start { now_ms } => self.start(now_ms),
            Event::Stop { now_ms } => Ok(self.stop(now_ms)),
            Event::Toggle { now_ms } => {
                if self.is_running() {
                    Ok(self.stop(now_ms))
                } else {
                    self.start(now_ms)
                }
            }
            Event::Restart { now_ms } => Ok(self.restart(now_ms)),
            Event::Reconfigure { settings, now_ms } => self.reconfigure(settings, now_ms),
        }
    }

    fn start(&mut self, now_ms: u64) -> Result<Vec<Action>, Error> {
        // A finished countdown starts over at full length.
        if !self.settings.stopwatch && self.budget_ms == 0 {
            self.budget_ms = self.settings.session_ms;
        }

        let first = self.cycle.start(now_ms)?;

        self.timer.set_interval(self.settings.clock_interval_ms);
        if self.settings.stopwatch {
            self.timer.set_count_up_start_time(self.budget_ms);
        } else {
            self.timer.set_count_down_start_time(self.budget_ms);
        }
        self.timer.start(now_ms);

        let mut actions = vec![Action::Started, Action::ShowPhase(first)];
        actions.extend(self.tick(now_ms));
        Ok(actions)
    }

    fn stop(&mut self, now_ms: u64) -> Vec<Action> {
        if !self.is_running() {
            return Vec::new();
        }

        self.cycle.stop();
        self.timer.stop(now_ms);

        let elapsed_ms = self.timer.time_elapsed(now_ms);
        self.budget_ms = match self.timer.mode() {
            TimerMode::CountUp => elapsed_ms,
            TimerMode::CountDown => self.budget_ms.saturating_sub(elapsed_ms),
        };

        vec![Action::Stopped { elapsed_ms }]
    }

    fn restart(&mut self, now_ms: u64) -> Vec<Action> {
        let mut actions = self.stop(now_ms);
        self.budget_ms = self.settings.starting_budget_ms();
        actions.push(Action::ShowClock(format_clock_ms(self.budget_ms)));
        actions
    }

    fn reconfigure(&mut self, settings: SessionSettings, now_ms: u64) -> Result<Vec<Action>, Error> {
        settings.validate()?;
        self.cycle
            .configure(settings.durations, settings.inhale_color, settings.exhale_color)?;

        let mut actions = Vec::new();

        if self.settings.clock_changed(&settings) {
            actions.extend(self.stop(now_ms));
            self.budget_ms = settings.starting_budget_ms();
            self.timer.set_mode(!settings.stopwatch);
            actions.push(Action::ShowClock(format_clock_ms(self.budget_ms)));
        }

        self.settings = settings;
        Ok(actions)
    }

    fn tick(&mut self, now_ms: u64) -> Vec<Action> {
        if !self.is_running() {
            return Vec::new();
        }

        let mut actions: Vec<Action> = self
            .cycle
            .poll(now_ms)
            .into_iter()
            .map(Action::ShowPhase)
            .collect();

        match self.timer.tick(now_ms) {
            Some(TimerEvent::Tick(text)) => actions.push(Action::ShowClock(text)),
            Some(TimerEvent::Finished) => {
                self.cycle.stop();
                self.budget_ms = 0;
                actions.push(Action::ShowClock(format_clock(0)));
                actions.push(Action::CountdownFinished);
                actions.push(Action::Stopped {
                    elapsed_ms: self.timer.time_elapsed(now_ms),
                });
                return actions;
            }
            None => {}
        }

        actions.push(Action::Render(self.frame(now_ms)));
        actions
    }

    // ---------------- queries ----------------

    pub fn is_running(&self) -> bool {
        self.cycle.is_running()
    }

    pub fn frame(&self, now_ms: u64) -> Frame {
        let current = self.cycle.current();
        Frame::at(
            &current,
            current.progress(now_ms),
            self.settings.style,
            self.cycle.colors(),
        )
    }

    /// Clock text at `now_ms`, whether running or not.
    pub fn clock_text(&self, now_ms: u64) -> String {
        if self.timer.is_running() {
            format_clock(self.timer.display_ms(now_ms))
        } else {
            format_clock_ms(self.budget_ms)
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn cycle(&self) -> &BreathCycle {
        &self.cycle
    }

    pub fn timer(&self) -> &DualTimer {
        &self.timer
    }

    #[cfg(test)]
    pub fn budget_ms(&self) -> u64 {
        self.budget_ms
    }
}
