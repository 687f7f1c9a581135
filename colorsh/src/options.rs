// colorsh/src/options.rs
//! Resolves the command line and an optional preset into the immutable
//! per-run options the drivers and the engine are handed. CLI values always
//! win over preset values; the `--no-*` flags knock out booleans a preset
//! switched on.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use log::debug;

use colorsh_core::{
    build_style_table, default_preset_path, load_preset_file, resolve_preset, AnsiColor,
    ColorshError, ModeFlags, PatternEntry, PatternSet, PresetSection, StyleSpec, StyleTable,
};

use crate::cli::Cli;

/// Everything one run needs, built once before any scanning begins.
#[derive(Debug)]
pub struct RunOptions {
    pub patterns: PatternSet,
    pub styles: StyleTable,
    pub flags: ModeFlags,
    pub erase: Option<String>,
    pub single: bool,
    pub grep: bool,
    pub and_mode: bool,
    pub force: bool,
    pub recursive: bool,
    pub file_pattern: Option<String>,
    pub include_dot: bool,
    pub include_vcs: bool,
    pub include_ext: bool,
    pub files: Vec<PathBuf>,
    pub from_stdin: bool,
}

impl RunOptions {
    /// Builds run options from parsed arguments, loading and merging a
    /// preset when one was selected. Zero patterns after merging is the
    /// fatal configuration error reported before any input is read.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let preset = load_selected_preset(cli)?;

        let mut patterns = PatternSet::new();
        let mut specs: Vec<StyleSpec> = Vec::new();

        for color in AnsiColor::ALL {
            let from_cli = cli.pattern_for(color);
            let from_preset = preset
                .as_ref()
                .and_then(|section| section.patterns.get(color.name()))
                .map(String::as_str);
            let Some(pattern) = from_cli.or(from_preset) else {
                continue;
            };
            if pattern.is_empty() {
                continue;
            }

            patterns.push(PatternEntry {
                style_name: color.name().to_string(),
                pattern: pattern.to_string(),
            });

            let mut spec = StyleSpec::new(color.name(), color);
            if let Some(bg_name) = cli.background_for(color) {
                let bg = bg_name
                    .parse::<AnsiColor>()
                    .map_err(|_| ColorshError::UnknownColor(bg_name.to_string()))?;
                spec.bg = Some(bg);
            }
            specs.push(spec);
        }

        if patterns.is_empty() {
            return Err(anyhow!(ColorshError::EmptyPatternSet)).context(
                "At least one color pattern (e.g. -r REGEXP) or a preset with patterns is required",
            );
        }

        let preset_bool = |get: fn(&PresetSection) -> Option<bool>| {
            preset.as_ref().and_then(get).unwrap_or(false)
        };

        let bold = !cli.no_bold && (cli.bold || preset_bool(|p| p.bold));
        let inverted = !cli.no_invert && (cli.invert || preset_bool(|p| p.inverted));
        let underline = cli.underline || preset_bool(|p| p.underline);
        for spec in &mut specs {
            spec.bold = bold;
            spec.inverted = inverted;
            spec.underline = underline;
        }

        let single = cli.single || preset_bool(|p| p.single);
        let grep = !cli.no_grep && (cli.grep || preset_bool(|p| p.grep));
        let and_mode = cli.and || preset_bool(|p| p.and);
        let flags = ModeFlags {
            case_insensitive: cli.ignore_case || preset_bool(|p| p.ignore_case),
            single_line: single,
        };

        let erase = cli
            .erase
            .clone()
            .or_else(|| preset.as_ref().and_then(|p| p.erase.clone()))
            .filter(|pattern| !pattern.is_empty());

        let from_stdin =
            cli.files.is_empty() && !cli.recursive && cli.file_pattern.is_none();

        debug!(
            "Resolved {} pattern(s); single={}, grep={}, and={}, stdin={}",
            patterns.len(),
            single,
            grep,
            and_mode,
            from_stdin
        );

        Ok(Self {
            patterns,
            styles: build_style_table(specs),
            flags,
            erase,
            single,
            grep,
            and_mode,
            force: cli.force,
            recursive: cli.recursive,
            file_pattern: cli.file_pattern.clone(),
            include_dot: cli.dot,
            include_vcs: cli.vcs,
            include_ext: cli.ext,
            files: cli.files.clone(),
            from_stdin,
        })
    }
}

/// Loads and resolves the preset named by `--use`, if any.
///
/// The preset file is only consulted when a preset was actually selected; a
/// missing file is then fatal, since the user asked for something that
/// cannot be found.
fn load_selected_preset(cli: &Cli) -> Result<Option<PresetSection>> {
    let Some(name) = cli.use_preset.as_deref() else {
        return Ok(None);
    };

    let path = match cli.config.clone() {
        Some(path) => path,
        None => default_preset_path()
            .ok_or_else(|| anyhow!("Could not determine the home directory for the preset file"))?,
    };

    let presets = load_preset_file(&path)
        .with_context(|| format!("Cannot load preset file for --use {}", name))?;
    let section = resolve_preset(&presets, name, &path.display().to_string())?;
    Ok(Some(section))
}
