// Author: Dustin Pilgrim
// License: MIT

pub mod clock;
pub mod input;
pub mod ticker;
