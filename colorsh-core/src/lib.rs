// colorsh-core/src/lib.rs
//! # colorsh Core Library
//!
//! `colorsh-core` provides the fundamental, platform-independent logic for
//! regex-driven text colorization. It defines the data structures a run is
//! configured from, assembles the composite named-group regular expression,
//! and implements the coloring engine that rewrites matched spans with ANSI
//! escape sequences.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of input data, without concerns for I/O or
//! application-specific state management: one engine call processes one
//! buffer or line and returns.
//!
//! ## Modules
//!
//! * `config`: Defines `PatternEntry`/`StyleSpec` and the preset file model.
//! * `style`: The `AnsiColor` model and span rendering, including
//!   line-break-safe reset-and-reopen behavior.
//! * `assembler`: Builds the composite regex from the pattern set and the
//!   regex mode flags.
//! * `engine`: The `Colorizer`, which scans a buffer and rewrites matches.
//! * `errors`: The structured `ColorshError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use colorsh_core::{
//!     assemble, build_style_table, AnsiColor, Colorizer, ModeFlags,
//!     PatternEntry, StyleSpec,
//! };
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let patterns = vec![PatternEntry {
//!         style_name: "red".to_string(),
//!         pattern: "ERROR".to_string(),
//!     }];
//!     let composite = assemble(&patterns, ModeFlags::default())?;
//!     let styles = build_style_table(vec![StyleSpec::new("red", AnsiColor::Red)]);
//!
//!     let colorizer = Colorizer::new(composite, None, styles, false);
//!     let output = colorizer.color_text("an ERROR occurred");
//!
//!     assert_eq!(output.text, "an \x1b[31mERROR\x1b[0m occurred");
//!     assert_eq!(output.distinct_hits, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`ColorshError`] (or `anyhow::Error` at the
//! configuration-loading seam). The engine itself never logs; it reports
//! structured errors and lets the caller decide between aborting the run
//! and skipping the offending input unit.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod assembler;
pub mod config;
pub mod engine;
pub mod errors;
pub mod style;

/// Re-exports the pattern assembly entry points and supporting types.
pub use assembler::{
    assemble, compile_erase, is_valid_style_name, CompositeRegex, ModeFlags, MAX_PATTERN_LENGTH,
};

/// Re-exports configuration and preset types.
pub use config::{
    build_style_table, default_preset_path, load_preset_file, resolve_preset, PatternEntry,
    PatternSet, PresetFile, PresetSection, StyleSpec, DEFAULT_PRESET_FILE,
};

/// Re-exports the coloring engine.
pub use engine::{ColoredOutput, Colorizer};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ColorshError;

/// Re-exports the style model.
pub use style::{AnsiColor, ParseColorError, Style, StyleTable, RESET};
