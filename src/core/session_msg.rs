// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::oneshot;

use crate::core::{events::Event, info::InfoSnapshot};

#[derive(Debug)]
pub enum SessionMsg {
    Event(Event),

    GetInfo { reply: oneshot::Sender<InfoSnapshot> },

    /// End the session loop.
    Quit,
}
