// Author: Dustin Pilgrim
// License: MIT

mod actions;
mod observer;
mod run;

pub use observer::SessionObserver;

use crate::core::{
    action::Action,
    config::SessionSettings,
    error::Error,
    events::Event,
    session::Session,
};
use crate::{sdebug, swarn};

pub type AnyError = Box<dyn std::error::Error + Send + Sync>;

/// Owns the session and its observer. All mutation happens on the task
/// running [`Daemon::run`], so a stop and the cancellation of the pending
/// phase transition are one step relative to tick delivery.
pub struct Daemon<O: SessionObserver> {
    session: Session,
    observer: O,
    exit_on_finish: bool,
}

impl<O: SessionObserver> Daemon<O> {
    pub fn new(settings: SessionSettings, observer: O) -> Result<Self, Error> {
        let exit_on_finish = settings.exit_on_finish;
        Ok(Self {
            session: Session::new(settings)?,
            observer,
            exit_on_finish,
        })
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Rejected events are logged and dropped; they never end the loop.
    fn handle_one_event(&mut self, event: Event) -> Vec<Action> {
        let name = event.name();
        match self.session.handle_event(event) {
            Ok(actions) => actions,
            Err(Error::InvalidState(e)) => {
                sdebug!("Breathe", "{} ignored: {}", name, e);
                Vec::new()
            }
            Err(e) => {
                swarn!("Breathe", "{} rejected: {}", name, e);
                Vec::new()
            }
        }
    }
}
