//! assembler.rs - Builds the composite regular expression for one run.
//!
//! Each configured pattern is wrapped in a named capture group whose name is
//! its style name, all groups are joined by alternation, and the whole
//! expression is prefixed with an inline flag group summarizing the regex
//! mode. The result is compiled once per run and immutable thereafter.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashSet;

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::config::PatternSet;
use crate::errors::ColorshError;

/// Maximum allowed length for a single sub-pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

// 10 MB limit for the compiled composite regex.
const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Regex mode flags shared by every sub-pattern in the composite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeFlags {
    /// Case-insensitive matching.
    pub case_insensitive: bool,
    /// Whole-buffer mode: `.` matches line breaks so one match can span
    /// several lines. When unset the input arrives line by line and the
    /// composite uses multi-line anchors instead; the two flags are
    /// complements of each other.
    pub single_line: bool,
}

impl ModeFlags {
    fn inline_prefix(&self) -> String {
        let mut flags = String::new();
        if self.single_line {
            flags.push('s');
        } else {
            flags.push('m');
        }
        if self.case_insensitive {
            flags.push('i');
        }
        format!("(?{})", flags)
    }
}

/// The single compiled alternation of all per-style sub-patterns.
#[derive(Debug)]
pub struct CompositeRegex {
    /// The compiled expression.
    pub regex: Regex,
    /// Named groups present in the expression, in declaration order.
    pub group_names: Vec<String>,
    /// Number of configured sub-patterns (used by AND-mode grep filtering).
    pub pattern_count: usize,
}

/// Returns true when `name` is usable as a capture-group identifier.
pub fn is_valid_style_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Assembles and compiles the composite regex from an ordered pattern set.
///
/// Fails before compilation if the set is empty, a style name is not a valid
/// group identifier or repeats, or a sub-pattern exceeds the length limit.
/// Each sub-pattern is validated on its own first so a compile failure is
/// reported against the pattern the user actually wrote, not the assembled
/// alternation.
pub fn assemble(patterns: &PatternSet, flags: ModeFlags) -> Result<CompositeRegex, ColorshError> {
    if patterns.is_empty() {
        return Err(ColorshError::EmptyPatternSet);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for entry in patterns {
        if !is_valid_style_name(&entry.style_name) {
            return Err(ColorshError::InvalidStyleName(entry.style_name.clone()));
        }
        if !seen.insert(entry.style_name.as_str()) {
            return Err(ColorshError::DuplicateStyleName(entry.style_name.clone()));
        }
        if entry.pattern.len() > MAX_PATTERN_LENGTH {
            return Err(ColorshError::PatternLengthExceeded(
                entry.style_name.clone(),
                entry.pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
        }
        Regex::new(&entry.pattern)
            .map_err(|e| ColorshError::PatternCompile(entry.pattern.clone(), e))?;
    }

    let branches: Vec<String> = patterns
        .iter()
        .map(|entry| format!("(?P<{}>{})", entry.style_name, entry.pattern))
        .collect();
    let pattern = format!("{}{}", flags.inline_prefix(), branches.join("|"));
    debug!("Assembled composite pattern: {}", pattern);

    let regex = RegexBuilder::new(&pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| ColorshError::PatternCompile(pattern.clone(), e))?;

    let group_names = regex
        .capture_names()
        .flatten()
        .map(str::to_string)
        .collect();

    Ok(CompositeRegex {
        regex,
        group_names,
        pattern_count: patterns.len(),
    })
}

/// Compiles the optional erase pattern. The erase expression takes no mode
/// prefix; it is applied verbatim before any coloring.
pub fn compile_erase(pattern: &str) -> Result<Regex, ColorshError> {
    RegexBuilder::new(pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| ColorshError::PatternCompile(pattern.to_string(), e))
}
