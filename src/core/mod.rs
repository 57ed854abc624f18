// Author: Dustin Pilgrim
// License: MIT

pub mod action;
pub mod color;
pub mod config;
pub mod cycle;
pub mod error;
pub mod events;
pub mod format;
pub mod info;
pub mod phase;
pub mod render;
pub mod session;
pub mod session_msg;
pub mod timer;

#[cfg(test)]
mod session_tests;
