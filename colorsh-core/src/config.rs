//! Configuration management for `colorsh-core`.
//!
//! This module defines the data structures a run is configured from: the
//! ordered pattern set, per-style rendering specs, and the preset file that
//! lets users keep named pattern/option bundles in their home directory.
//! Preset handling covers loading, default-section fallback resolution, and
//! validation.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::errors::ColorshError;
use crate::style::{AnsiColor, Style, StyleTable};

/// File name of the preset configuration in the user's home directory.
pub const DEFAULT_PRESET_FILE: &str = ".colorsh.yaml";

/// One configured pattern: a style name bound to a raw regex.
///
/// Style names double as capture-group identifiers in the composite regex,
/// so they must be identifier-shaped and unique within a set. The pattern
/// assembler enforces both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    pub style_name: String,
    pub pattern: String,
}

/// Ordered collection of configured patterns.
pub type PatternSet = Vec<PatternEntry>;

/// A named style entry as assembled by the option layer: rendering rule
/// plus the name that binds it to a pattern. Built once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpec {
    pub name: String,
    pub fg: AnsiColor,
    pub bg: Option<AnsiColor>,
    pub bold: bool,
    pub inverted: bool,
    pub underline: bool,
}

impl StyleSpec {
    pub fn new(name: impl Into<String>, fg: AnsiColor) -> Self {
        Self {
            name: name.into(),
            fg,
            bg: None,
            bold: false,
            inverted: false,
            underline: false,
        }
    }
}

/// Builds the immutable style table the engine is handed for a run.
pub fn build_style_table(specs: Vec<StyleSpec>) -> StyleTable {
    specs
        .into_iter()
        .map(|spec| {
            (
                spec.name,
                Style {
                    fg: spec.fg,
                    bg: spec.bg,
                    bold: spec.bold,
                    inverted: spec.inverted,
                    underline: spec.underline,
                },
            )
        })
        .collect()
}

/// One named section of the preset file.
///
/// Every field is optional; unset fields fall back first to the file's
/// `default` section and then to the built-in defaults. Values given on the
/// command line always win over preset values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PresetSection {
    /// Per-color regex patterns, keyed by canonical color name.
    pub patterns: HashMap<String, String>,
    /// Erase pattern applied before coloring.
    pub erase: Option<String>,
    pub bold: Option<bool>,
    pub inverted: Option<bool>,
    pub underline: Option<bool>,
    pub ignore_case: Option<bool>,
    pub single: Option<bool>,
    pub grep: Option<bool>,
    /// AND-mode grep: require every configured pattern to match.
    pub and: Option<bool>,
}

/// The whole preset file: named sections, one of which may be `default`.
pub type PresetFile = HashMap<String, PresetSection>;

/// Returns the default preset path, `~/.colorsh.yaml`.
pub fn default_preset_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_PRESET_FILE))
}

/// Loads the preset file from disk.
pub fn load_preset_file<P: AsRef<Path>>(path: P) -> Result<PresetFile> {
    let path = path.as_ref();
    info!("Loading presets from: {}", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read preset file {}", path.display()))?;
    let presets: PresetFile = serde_yml::from_str(&text)
        .with_context(|| format!("Failed to parse preset file {}", path.display()))?;
    validate_presets(&presets)?;
    info!("Loaded {} preset section(s).", presets.len());
    Ok(presets)
}

/// Resolves a named preset, filling unset fields from the `default` section.
///
/// Selecting the literal name `default` is a configuration error: the
/// default section only supplies fallbacks and is never run on its own.
pub fn resolve_preset(
    presets: &PresetFile,
    name: &str,
    source: &str,
) -> Result<PresetSection, ColorshError> {
    if name == "default" {
        return Err(ColorshError::Fatal(
            "Cannot select 'default' as a preset; it only provides fallbacks".to_string(),
        ));
    }
    let Some(section) = presets.get(name) else {
        return Err(ColorshError::PresetNotFound(
            name.to_string(),
            source.to_string(),
        ));
    };

    let mut resolved = section.clone();
    if let Some(fallback) = presets.get("default") {
        for (color, pattern) in &fallback.patterns {
            resolved
                .patterns
                .entry(color.clone())
                .or_insert_with(|| pattern.clone());
        }
        resolved.erase = resolved.erase.or_else(|| fallback.erase.clone());
        resolved.bold = resolved.bold.or(fallback.bold);
        resolved.inverted = resolved.inverted.or(fallback.inverted);
        resolved.underline = resolved.underline.or(fallback.underline);
        resolved.ignore_case = resolved.ignore_case.or(fallback.ignore_case);
        resolved.single = resolved.single.or(fallback.single);
        resolved.grep = resolved.grep.or(fallback.grep);
        resolved.and = resolved.and.or(fallback.and);
    }
    debug!("Resolved preset '{}': {} pattern(s)", name, resolved.patterns.len());
    Ok(resolved)
}

/// Validates that every pattern key in every section names a known color.
fn validate_presets(presets: &PresetFile) -> Result<()> {
    let mut errors = Vec::new();
    for (section_name, section) in presets {
        for color in section.patterns.keys() {
            if color.parse::<AnsiColor>().is_err() {
                errors.push(format!(
                    "Section '{}' refers to unknown color '{}'.",
                    section_name, color
                ));
            }
        }
    }
    if !errors.is_empty() {
        anyhow::bail!("Preset validation failed:\n{}", errors.join("\n"));
    }
    Ok(())
}
