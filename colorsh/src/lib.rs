// colorsh/src/lib.rs
//! # colorsh CLI Application
//!
//! This crate provides the command-line surface for the colorsh coloring
//! engine: option parsing, preset resolution, the stdin/file drivers, and
//! output prefixing. All coloring logic lives in `colorsh-core`.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod options;
pub mod stream;
pub mod ui;
pub mod walker;
