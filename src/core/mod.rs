// Author: Dustin Pilgrim
// License: MIT

pub mod calc;
pub mod command;
pub mod error;
