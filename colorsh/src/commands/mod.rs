// colorsh/src/commands/mod.rs
//! Command implementations for the colorsh CLI.

pub mod colorize;
