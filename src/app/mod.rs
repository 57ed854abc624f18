// Author: Dustin Pilgrim
// License: MIT

pub mod command;
pub mod session_mode;
pub mod terminal;
