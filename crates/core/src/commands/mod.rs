//! Element command handlers.
//!
//! Each command is a zero-sized type implementing [`def::CommandHandler`] and
//! registered by name in [`registry`].

pub mod clear;
pub mod def;
pub mod registry;
