//! errors.rs - Custom error types for the colorsh-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `colorsh-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ColorshError {
    #[error("Failed to compile pattern '{0}': {1}")]
    PatternCompile(String, regex::Error),

    #[error("Pattern for '{0}': length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("No color patterns were supplied")]
    EmptyPatternSet,

    #[error("'{0}' cannot be used as a style name; names double as regex capture-group identifiers")]
    InvalidStyleName(String),

    #[error("Duplicate style name: '{0}'")]
    DuplicateStyleName(String),

    #[error("Unknown color name: '{0}'")]
    UnknownColor(String),

    #[error("Input is not valid UTF-8 text: {0}")]
    InvalidEncoding(String),

    #[error("Preset '{0}' is not defined in {1}")]
    PresetNotFound(String, String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
