// Author: Dustin Pilgrim
// License: MIT

use crate::core::action::Action;
use crate::core::color::Rgb;
use crate::core::config::SessionSettings;
use crate::core::error::{Error, StateError};
use crate::core::events::Event;
use crate::core::info::InfoSnapshot;
use crate::core::phase::{Phase, PhaseDurations, Preset};
use crate::core::session::Session;

fn settings(stopwatch: bool, session_ms: u64) -> SessionSettings {
    SessionSettings {
        durations: PhaseDurations {
            inhale_ms: 1000,
            hold_ms: 500,
            exhale_ms: 1000,
            pause_ms: 500,
        },
        stopwatch,
        session_ms,
        ..SessionSettings::default()
    }
}

fn phases(actions: &[Action]) -> Vec<Phase> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::ShowPhase(c) => Some(c.phase),
            _ => None,
        })
        .collect()
}

fn clocks(actions: &[Action]) -> Vec<String> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::ShowClock(t) => Some(t.clone()),
            _ => None,
        })
        .collect()
}

fn count_finished(actions: &[Action]) -> usize {
    actions
        .iter()
        .filter(|a| matches!(a, Action::CountdownFinished))
        .count()
}

#[test]
fn start_shows_inhale_and_clock() {
    let mut s = Session::new(settings(false, 65_000)).unwrap();

    let actions = s.handle_event(Event::Start { now_ms: 0 }).unwrap();

    assert_eq!(actions[0], Action::Started);
    assert_eq!(phases(&actions), vec![Phase::Inhale]);
    assert_eq!(clocks(&actions), vec!["1:05".to_string()]);
    assert!(matches!(actions.last(), Some(Action::Render(_))));
    assert!(s.is_running());
}

#[test]
fn ticks_drive_phases_and_clock() {
    let mut s = Session::new(settings(true, 0)).unwrap();
    s.handle_event(Event::Start { now_ms: 0 }).unwrap();

    let actions = s.handle_event(Event::Tick { now_ms: 1000 }).unwrap();
    assert_eq!(phases(&actions), vec![Phase::Hold]);
    assert_eq!(clocks(&actions), vec!["1".to_string()]);

    let actions = s.handle_event(Event::Tick { now_ms: 3000 }).unwrap();
    assert_eq!(phases(&actions), vec![Phase::Exhale, Phase::Pause, Phase::Inhale]);
    assert_eq!(s.cycle().cycles(), 1);
}

#[test]
fn countdown_finishes_once_and_stops() {
    let mut s = Session::new(settings(false, 2000)).unwrap();
    s.handle_event(Event::Start { now_ms: 0 }).unwrap();

    let mut finished = 0;
    for now in (100..6000).step_by(100) {
        let actions = s.handle_event(Event::Tick { now_ms: now }).unwrap();
        finished += count_finished(&actions);
    }

    assert_eq!(finished, 1);
    assert!(!s.is_running());
    assert_eq!(s.cycle().deadline_ms(), None);
    assert_eq!(s.budget_ms(), 0);
}

#[test]
fn finished_countdown_restarts_at_full_length() {
    let mut s = Session::new(settings(false, 1000)).unwrap();
    s.handle_event(Event::Start { now_ms: 0 }).unwrap();
    s.handle_event(Event::Tick { now_ms: 1000 }).unwrap();
    assert!(!s.is_running());

    let actions = s.handle_event(Event::Start { now_ms: 5000 }).unwrap();
    assert_eq!(clocks(&actions), vec!["1".to_string()]);

    let actions = s.handle_event(Event::Tick { now_ms: 6000 }).unwrap();
    assert_eq!(count_finished(&actions), 1);
}

#[test]
fn stopwatch_never_finishes() {
    let mut s = Session::new(settings(true, 1000)).unwrap();
    s.handle_event(Event::Start { now_ms: 0 }).unwrap();

    for now in (0..4_000_000u64).step_by(10_000) {
        let actions = s.handle_event(Event::Tick { now_ms: now }).unwrap();
        assert_eq!(count_finished(&actions), 0);
    }
    assert!(s.is_running());
}

#[test]
fn timer_resumes_from_remaining_time() {
    let mut s = Session::new(settings(false, 60_000)).unwrap();
    s.handle_event(Event::Start { now_ms: 0 }).unwrap();

    let actions = s.handle_event(Event::Stop { now_ms: 15_000 }).unwrap();
    assert_eq!(actions, vec![Action::Stopped { elapsed_ms: 15_000 }]);
    assert_eq!(s.budget_ms(), 45_000);
    assert_eq!(s.clock_text(99_000), "45");

    let actions = s.handle_event(Event::Start { now_ms: 100_000 }).unwrap();
    assert_eq!(clocks(&actions), vec!["45".to_string()]);
    assert_eq!(phases(&actions), vec![Phase::Inhale]);
}

#[test]
fn stopwatch_accumulates_across_stops() {
    let mut s = Session::new(settings(true, 0)).unwrap();
    s.handle_event(Event::Start { now_ms: 0 }).unwrap();
    s.handle_event(Event::Stop { now_ms: 30_000 }).unwrap();
    s.handle_event(Event::Start { now_ms: 50_000 }).unwrap();

    let actions = s.handle_event(Event::Tick { now_ms: 85_000 }).unwrap();
    assert_eq!(clocks(&actions), vec!["1:05".to_string()]);
}

#[test]
fn stop_is_idempotent() {
    let mut s = Session::new(settings(true, 0)).unwrap();
    s.handle_event(Event::Start { now_ms: 0 }).unwrap();

    let first = s.handle_event(Event::Stop { now_ms: 2000 }).unwrap();
    let second = s.handle_event(Event::Stop { now_ms: 3000 }).unwrap();

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert_eq!(s.budget_ms(), 2000);
}

#[test]
fn toggle_alternates() {
    let mut s = Session::new(settings(true, 0)).unwrap();

    s.handle_event(Event::Toggle { now_ms: 0 }).unwrap();
    assert!(s.is_running());

    s.handle_event(Event::Toggle { now_ms: 1500 }).unwrap();
    assert!(!s.is_running());

    let actions = s.handle_event(Event::Toggle { now_ms: 2000 }).unwrap();
    assert!(s.is_running());
    assert_eq!(phases(&actions), vec![Phase::Inhale]);
}

#[test]
fn start_twice_is_rejected() {
    let mut s = Session::new(settings(true, 0)).unwrap();
    s.handle_event(Event::Start { now_ms: 0 }).unwrap();

    let err = s.handle_event(Event::Start { now_ms: 10 }).unwrap_err();
    assert_eq!(err, Error::InvalidState(StateError::AlreadyRunning));
    assert!(s.is_running());
}

#[test]
fn restart_rewinds_clock() {
    let mut s = Session::new(settings(false, 60_000)).unwrap();
    s.handle_event(Event::Start { now_ms: 0 }).unwrap();

    let actions = s.handle_event(Event::Restart { now_ms: 20_000 }).unwrap();
    assert_eq!(
        actions,
        vec![
            Action::Stopped { elapsed_ms: 20_000 },
            Action::ShowClock("1:00".to_string())
        ]
    );
    assert_eq!(s.budget_ms(), 60_000);
}

#[test]
fn reconfigure_colors_keeps_running() {
    let mut s = Session::new(settings(true, 0)).unwrap();
    s.handle_event(Event::Start { now_ms: 0 }).unwrap();
    s.handle_event(Event::Tick { now_ms: 1000 }).unwrap();

    let mut next = settings(true, 0);
    next.inhale_color = Rgb::GREEN;
    next.durations.inhale_ms = 4000;

    let actions = s
        .handle_event(Event::Reconfigure { settings: next, now_ms: 1200 })
        .unwrap();
    assert!(actions.is_empty());
    assert!(s.is_running());

    // Hold still ends on its original schedule.
    assert_eq!(s.cycle().deadline_ms(), Some(1500));
}

#[test]
fn reconfigure_mode_stops_and_resets() {
    let mut s = Session::new(settings(true, 0)).unwrap();
    s.handle_event(Event::Start { now_ms: 0 }).unwrap();

    let actions = s
        .handle_event(Event::Reconfigure { settings: settings(false, 120_000), now_ms: 5000 })
        .unwrap();

    assert_eq!(
        actions,
        vec![
            Action::Stopped { elapsed_ms: 5000 },
            Action::ShowClock("2:00".to_string())
        ]
    );
    assert!(!s.is_running());
    assert_eq!(s.budget_ms(), 120_000);
}

#[test]
fn clock_interval_applies_on_next_start() {
    let mut s = Session::new(settings(true, 0)).unwrap();
    s.handle_event(Event::Start { now_ms: 0 }).unwrap();

    let mut next = settings(true, 0);
    next.clock_interval_ms = 250;
    let actions = s
        .handle_event(Event::Reconfigure { settings: next, now_ms: 100 })
        .unwrap();
    assert!(actions.is_empty());
    assert!(s.is_running());

    // The running clock keeps its one second grid.
    assert!(clocks(&s.handle_event(Event::Tick { now_ms: 250 }).unwrap()).is_empty());

    s.handle_event(Event::Stop { now_ms: 300 }).unwrap();
    s.handle_event(Event::Start { now_ms: 10_000 }).unwrap();
    assert_eq!(s.timer().interval_ms(), 250);

    let actions = s.handle_event(Event::Tick { now_ms: 10_250 }).unwrap();
    assert_eq!(clocks(&actions).len(), 1);
}

#[test]
fn huge_phase_duration_runs_without_overflow() {
    let mut cfg = settings(false, u64::MAX);
    cfg.durations.inhale_ms = u64::MAX;
    let mut s = Session::new(cfg).unwrap();

    let actions = s.handle_event(Event::Start { now_ms: 5 }).unwrap();
    assert_eq!(phases(&actions), vec![Phase::Inhale]);

    let actions = s.handle_event(Event::Tick { now_ms: 3_600_000 }).unwrap();
    assert!(phases(&actions).is_empty());
    assert_eq!(count_finished(&actions), 0);
    assert_eq!(s.cycle().deadline_ms(), Some(u64::MAX));

    let actions = s.handle_event(Event::Restart { now_ms: 3_600_001 }).unwrap();
    assert_eq!(clocks(&actions).len(), 1);
}

#[test]
fn reconfigure_rejects_zero_duration() {
    let mut s = Session::new(settings(true, 0)).unwrap();
    let mut bad = settings(true, 0);
    bad.durations.pause_ms = 0;

    assert!(s.handle_event(Event::Reconfigure { settings: bad, now_ms: 0 }).is_err());
    assert_eq!(s.settings().durations.pause_ms, 500);
}

#[test]
fn ticks_while_stopped_do_nothing() {
    let mut s = Session::new(settings(false, 1000)).unwrap();
    s.handle_event(Event::Start { now_ms: 0 }).unwrap();
    s.handle_event(Event::Stop { now_ms: 100 }).unwrap();

    for now in [500, 1000, 50_000] {
        assert!(s.handle_event(Event::Tick { now_ms: now }).unwrap().is_empty());
    }
}

#[test]
fn info_reports_state() {
    let mut cfg = settings(true, 0);
    cfg.durations = Preset::Relaxing.durations();
    let mut s = Session::new(cfg).unwrap();

    let info = InfoSnapshot::from_session(&s, 0);
    assert!(!info.running);
    assert_eq!(info.json["preset"], "relaxing");
    assert!(info.json["phase"].is_null());

    s.handle_event(Event::Start { now_ms: 0 }).unwrap();
    let info = InfoSnapshot::from_session(&s, 100);
    assert_eq!(info.json["phase"], "inhale");
    assert_eq!(info.json["next_phase_in_ms"], 3900);
    assert_eq!(info.json["finished"], false);
    assert!(info.pretty_text.contains("relaxing"));
}
