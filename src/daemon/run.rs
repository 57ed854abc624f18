// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::{mpsc, watch};

use crate::core::{events::Event, info::InfoSnapshot, session_msg::SessionMsg};
use crate::services::clock::now_ms;
use crate::sinfo;

use super::{AnyError, Daemon, SessionObserver};

impl<O: SessionObserver> Daemon<O> {
    pub async fn run(
        &mut self,
        mut rx: mpsc::Receiver<SessionMsg>,
        mut shutdown: watch::Receiver<bool>,
        shutdown_tx: watch::Sender<bool>,
    ) -> Result<(), AnyError> {
        sinfo!("Breathe", "session loop starting");

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        sinfo!("Breathe", "session loop stopping (shutdown requested)");
                        break;
                    }
                }

                maybe = rx.recv() => {
                    let Some(msg) = maybe else {
                        sinfo!("Breathe", "session loop stopping (channel closed)");
                        break;
                    };

                    match msg {
                        SessionMsg::Event(event) => {
                            let mut finished = false;
                            for action in self.handle_one_event(event) {
                                finished |= self.exec_action(action);
                            }

                            if finished && self.exit_on_finish {
                                sinfo!("Breathe", "session complete");
                                let _ = shutdown_tx.send(true);
                                break;
                            }
                        }

                        SessionMsg::GetInfo { reply } => {
                            let _ = reply.send(InfoSnapshot::from_session(&self.session, now_ms()));
                        }

                        SessionMsg::Quit => {
                            sinfo!("Breathe", "session loop stopping (quit requested)");
                            let _ = shutdown_tx.send(true);
                            break;
                        }
                    }
                }
            }
        }

        if self.session.is_running() {
            for action in self.handle_one_event(Event::Stop { now_ms: now_ms() }) {
                self.exec_action(action);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tokio::sync::{mpsc, oneshot, watch};

    use crate::core::config::SessionSettings;
    use crate::core::cycle::PhaseChange;
    use crate::core::events::Event;
    use crate::core::phase::PhaseDurations;
    use crate::core::session_msg::SessionMsg;
    use crate::daemon::{Daemon, SessionObserver};

    #[derive(Clone, Default)]
    struct Recorder {
        log: Arc<Mutex<Vec<String>>>,
    }

    impl Recorder {
        fn lines(&self) -> Vec<String> {
            self.log.lock().unwrap().clone()
        }

        fn push(&self, s: String) {
            self.log.lock().unwrap().push(s);
        }
    }

    impl SessionObserver for Recorder {
        fn on_phase_changed(&mut self, change: &PhaseChange) {
            self.push(format!("phase:{}", change.phase.as_str()));
        }

        fn on_tick(&mut self, text: &str) {
            self.push(format!("tick:{text}"));
        }

        fn on_countdown_finished(&mut self) {
            self.push("finished".to_string());
        }

        fn on_stopped(&mut self, elapsed_ms: u64) {
            self.push(format!("stopped:{elapsed_ms}"));
        }
    }

    fn settings(stopwatch: bool, session_ms: u64) -> SessionSettings {
        crate::log::set_file_output(false);
        SessionSettings {
            durations: PhaseDurations { inhale_ms: 1000, hold_ms: 1000, exhale_ms: 1000, pause_ms: 1000 },
            stopwatch,
            session_ms,
            exit_on_finish: true,
            ..SessionSettings::default()
        }
    }

    fn tick(now_ms: u64) -> SessionMsg {
        SessionMsg::Event(Event::Tick { now_ms })
    }

    #[tokio::test]
    async fn countdown_finish_ends_loop() {
        let recorder = Recorder::default();
        let mut daemon = Daemon::new(settings(false, 2000), recorder.clone()).unwrap();

        let (tx, rx) = mpsc::channel(16);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        tx.send(SessionMsg::Event(Event::Start { now_ms: 0 })).await.unwrap();
        tx.send(tick(1000)).await.unwrap();
        tx.send(tick(2000)).await.unwrap();
        tx.send(tick(3000)).await.unwrap();

        daemon.run(rx, shutdown_rx, shutdown_tx.clone()).await.unwrap();

        let lines = recorder.lines();
        assert_eq!(lines.iter().filter(|l| *l == "finished").count(), 1);
        assert!(lines.contains(&"phase:hold".to_string()));
        assert_eq!(lines.last(), Some(&"stopped:2000".to_string()));
        assert!(*shutdown_tx.borrow());
        assert!(!daemon.session().is_running());
    }

    #[tokio::test]
    async fn tick_after_stop_changes_nothing() {
        let recorder = Recorder::default();
        let mut daemon = Daemon::new(settings(true, 0), recorder.clone()).unwrap();

        let (tx, rx) = mpsc::channel(16);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        tx.send(SessionMsg::Event(Event::Start { now_ms: 0 })).await.unwrap();
        tx.send(SessionMsg::Event(Event::Stop { now_ms: 500 })).await.unwrap();
        // The inhale deadline was at 1000; this tick arrives after the stop.
        tx.send(tick(1000)).await.unwrap();
        tx.send(SessionMsg::Quit).await.unwrap();

        daemon.run(rx, shutdown_rx, shutdown_tx).await.unwrap();

        let lines = recorder.lines();
        assert_eq!(
            lines,
            vec!["phase:inhale".to_string(), "tick:0".to_string(), "stopped:500".to_string()]
        );
    }

    #[tokio::test]
    async fn info_and_rejected_start_keep_loop_alive() {
        let recorder = Recorder::default();
        let mut daemon = Daemon::new(settings(true, 0), recorder.clone()).unwrap();

        let (tx, rx) = mpsc::channel(16);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (reply, reply_rx) = oneshot::channel();

        tx.send(SessionMsg::Event(Event::Start { now_ms: 0 })).await.unwrap();
        tx.send(SessionMsg::Event(Event::Start { now_ms: 10 })).await.unwrap();
        tx.send(SessionMsg::GetInfo { reply }).await.unwrap();
        tx.send(SessionMsg::Quit).await.unwrap();

        daemon.run(rx, shutdown_rx, shutdown_tx).await.unwrap();

        let info = reply_rx.await.unwrap();
        assert!(info.running);
        assert_eq!(info.json["phase"], "inhale");

        // The loop stops the session on the way out.
        assert!(!daemon.session().is_running());
        assert!(recorder.lines().iter().any(|l| l.starts_with("stopped:")));
    }
}
