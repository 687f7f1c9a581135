// colorsh/src/commands/colorize.rs
//! The colorize operation: drives the engine over stdin or a file list and
//! applies the grep/AND emission rule to each processed unit.
//!
//! Per-unit failures (stat, open, read, encoding) are logged as warnings and
//! skipped so one unreadable file never aborts a whole run; configuration
//! and pattern-compilation problems have already been rejected before any
//! input is read.

use std::fs;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info, warn};

use colorsh_core::{ColoredOutput, Colorizer, ColorshError};

use crate::options::RunOptions;
use crate::stream;
use crate::ui::prefix;
use crate::walker;

/// Decides whether a colored unit is emitted under grep semantics.
struct EmitPolicy {
    grep: bool,
    and_mode: bool,
    total_patterns: usize,
}

impl EmitPolicy {
    fn new(opts: &RunOptions, colorizer: &Colorizer) -> Self {
        Self {
            grep: opts.grep,
            and_mode: opts.and_mode,
            total_patterns: colorizer.pattern_count(),
        }
    }

    /// Without grep everything is emitted. With grep, the unit must have
    /// been changed by coloring; AND-mode additionally requires every
    /// configured pattern to have hit.
    fn should_emit(&self, out: &ColoredOutput, changed: bool) -> bool {
        if !self.grep {
            return true;
        }
        changed && (!self.and_mode || out.distinct_hits == self.total_patterns)
    }
}

/// Runs the colorizer over standard input.
pub async fn run_stdin(colorizer: &Colorizer, opts: &RunOptions) -> Result<()> {
    info!("Reading from stdin ({} mode).", if opts.single { "single" } else { "line" });

    if opts.single {
        let mut whole = Vec::new();
        io::stdin()
            .read_to_end(&mut whole)
            .context("Error on reading stdin")?;
        let out = colorizer
            .color_bytes(&whole)
            .context("Cannot color stdin")?;
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        writeln!(writer, "{}", out.text)?;
        return Ok(());
    }

    let policy = EmitPolicy::new(opts, colorizer);
    let mut rx = stream::spawn_stdin_reader();
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    while let Some(line) = rx.recv().await {
        match colorizer.color_bytes(&line) {
            Ok(out) => {
                let original = String::from_utf8_lossy(&line);
                if policy.should_emit(&out, out.text != original) {
                    writeln!(writer, "{}", out.text)?;
                }
            }
            Err(e @ ColorshError::InvalidEncoding(_)) => {
                warn!("Skipping line: {}", e);
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Runs the colorizer over the collected file list.
pub fn run_files(colorizer: &Colorizer, opts: &RunOptions) -> Result<()> {
    let files = walker::collect_files(opts)?;
    let multiple = files.len() > 1;
    let color_prefixes = io::stdout().is_terminal();
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    for path in &files {
        if opts.single {
            color_whole_file(colorizer, path, multiple, color_prefixes, &mut writer)?;
        } else {
            color_file_lines(colorizer, opts, path, multiple, color_prefixes, &mut writer)?;
        }
    }
    Ok(())
}

/// Single mode: the whole file is one buffer; matches may span lines.
fn color_whole_file(
    colorizer: &Colorizer,
    path: &Path,
    multiple: bool,
    color_prefixes: bool,
    writer: &mut impl Write,
) -> Result<()> {
    let whole = match fs::read(path) {
        Ok(whole) => whole,
        Err(e) => {
            warn!("Error on reading file {}: {}", path.display(), e);
            return Ok(());
        }
    };
    let out = match colorizer.color_bytes(&whole) {
        Ok(out) => out,
        Err(e) => {
            warn!("Skipping {}: {}", path.display(), e);
            return Ok(());
        }
    };

    if multiple {
        let prefix = prefix::file_prefix(&path.display().to_string(), None, color_prefixes);
        writeln!(writer, "{}", prefix::prefix_lines(&out.text, &prefix))?;
    } else {
        writeln!(writer, "{}", out.text)?;
    }
    Ok(())
}

/// Line mode: stream the file, color and filter line by line.
fn color_file_lines(
    colorizer: &Colorizer,
    opts: &RunOptions,
    path: &Path,
    multiple: bool,
    color_prefixes: bool,
    writer: &mut impl Write,
) -> Result<()> {
    let policy = EmitPolicy::new(opts, colorizer);
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!("Cannot open file {}: {}", path.display(), e);
            return Ok(());
        }
    };
    let mut reader = BufReader::with_capacity(4096, file);
    let mut line_number: u64 = 0;

    loop {
        line_number += 1;
        let mut line = Vec::new();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!("Error on reading file content {}: {}", path.display(), e);
                break;
            }
        }
        if line.ends_with(b"\n") {
            line.pop();
            if line.ends_with(b"\r") {
                line.pop();
            }
        }

        let out = match colorizer.color_bytes(&line) {
            Ok(out) => out,
            Err(e) => {
                // The rest of the file will not decode any better.
                warn!("Skipping {}: {}", path.display(), e);
                break;
            }
        };
        let original = String::from_utf8_lossy(&line);
        if !policy.should_emit(&out, out.text != original) {
            continue;
        }

        if multiple {
            let prefix = prefix::file_prefix(
                &path.display().to_string(),
                Some(line_number),
                color_prefixes,
            );
            writeln!(writer, "{}{}", prefix, out.text)?;
        } else {
            writeln!(writer, "{}{}", prefix::line_prefix(line_number, color_prefixes), out.text)?;
        }
    }

    debug!("Processed {} line(s) from {}", line_number - 1, path.display());
    Ok(())
}
