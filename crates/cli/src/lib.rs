//! Replay tool for the wd command dispatcher.
//!
//! Loads a page fixture into the in-memory binding and runs a list of
//! commands against it, one response per command.

pub mod cli;
pub mod error;
pub mod fixture;
pub mod logging;
pub mod replay;
