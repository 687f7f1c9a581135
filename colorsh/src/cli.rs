// colorsh/src/cli.rs
//! This file defines the command-line interface (CLI) for the colorsh
//! application: sixteen foreground pattern options, their background-color
//! counterparts, and the mode/filter/traversal flags.
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

use colorsh_core::AnsiColor;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "colorsh",
    author = "Obscura Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Colorize text matching regular expressions",
    long_about = "Colorsh is a command-line utility that wraps every span of its input matching \
one of your regular expressions in ANSI escape sequences. Each pattern is bound to a color \
option; input comes from stdin, files, or a recursive directory walk. Matched substrings can \
also be erased before coloring, and grep-like filtering can suppress units that did not match.",
)]
pub struct Cli {
    /// Pattern to be red.
    #[arg(long, short = 'r', value_name = "REGEXP", help = "Pattern to be red.")]
    pub red: Option<String>,

    /// Pattern to be green.
    #[arg(long, short = 'g', value_name = "REGEXP", help = "Pattern to be green.")]
    pub green: Option<String>,

    /// Pattern to be blue.
    #[arg(long, short = 'b', value_name = "REGEXP", help = "Pattern to be blue.")]
    pub blue: Option<String>,

    /// Pattern to be yellow.
    #[arg(long, short = 'y', value_name = "REGEXP", help = "Pattern to be yellow.")]
    pub yellow: Option<String>,

    /// Pattern to be purple.
    #[arg(long, short = 'p', value_name = "REGEXP", help = "Pattern to be purple.")]
    pub purple: Option<String>,

    /// Pattern to be cyan.
    #[arg(long, short = 'c', value_name = "REGEXP", help = "Pattern to be cyan.")]
    pub cyan: Option<String>,

    /// Pattern to be black.
    #[arg(long, short = 'k', value_name = "REGEXP", help = "Pattern to be black.")]
    pub black: Option<String>,

    /// Pattern to be white.
    #[arg(long, short = 'w', value_name = "REGEXP", help = "Pattern to be white.")]
    pub white: Option<String>,

    /// Pattern to be light red.
    #[arg(long = "light-red", value_name = "REGEXP", help = "Pattern to be light red.")]
    pub light_red: Option<String>,

    /// Pattern to be light green.
    #[arg(long = "light-green", value_name = "REGEXP", help = "Pattern to be light green.")]
    pub light_green: Option<String>,

    /// Pattern to be light blue.
    #[arg(long = "light-blue", value_name = "REGEXP", help = "Pattern to be light blue.")]
    pub light_blue: Option<String>,

    /// Pattern to be light yellow.
    #[arg(long = "light-yellow", value_name = "REGEXP", help = "Pattern to be light yellow.")]
    pub light_yellow: Option<String>,

    /// Pattern to be light purple.
    #[arg(long = "light-purple", value_name = "REGEXP", help = "Pattern to be light purple.")]
    pub light_purple: Option<String>,

    /// Pattern to be light cyan.
    #[arg(long = "light-cyan", value_name = "REGEXP", help = "Pattern to be light cyan.")]
    pub light_cyan: Option<String>,

    /// Pattern to be dark gray.
    #[arg(long = "dark-gray", value_name = "REGEXP", help = "Pattern to be dark gray.")]
    pub dark_gray: Option<String>,

    /// Pattern to be light gray.
    #[arg(long = "light-gray", value_name = "REGEXP", help = "Pattern to be light gray.")]
    pub light_gray: Option<String>,

    /// Background color for the red pattern.
    #[arg(long = "bg-red", value_name = "COLOR", help = "Background color of the red pattern.")]
    pub bg_red: Option<String>,

    #[arg(long = "bg-green", value_name = "COLOR", help = "Background color of the green pattern.")]
    pub bg_green: Option<String>,

    #[arg(long = "bg-blue", value_name = "COLOR", help = "Background color of the blue pattern.")]
    pub bg_blue: Option<String>,

    #[arg(long = "bg-yellow", value_name = "COLOR", help = "Background color of the yellow pattern.")]
    pub bg_yellow: Option<String>,

    #[arg(long = "bg-purple", value_name = "COLOR", help = "Background color of the purple pattern.")]
    pub bg_purple: Option<String>,

    #[arg(long = "bg-cyan", value_name = "COLOR", help = "Background color of the cyan pattern.")]
    pub bg_cyan: Option<String>,

    #[arg(long = "bg-black", value_name = "COLOR", help = "Background color of the black pattern.")]
    pub bg_black: Option<String>,

    #[arg(long = "bg-white", value_name = "COLOR", help = "Background color of the white pattern.")]
    pub bg_white: Option<String>,

    #[arg(long = "bg-light-red", value_name = "COLOR", help = "Background color of the light red pattern.")]
    pub bg_light_red: Option<String>,

    #[arg(long = "bg-light-green", value_name = "COLOR", help = "Background color of the light green pattern.")]
    pub bg_light_green: Option<String>,

    #[arg(long = "bg-light-blue", value_name = "COLOR", help = "Background color of the light blue pattern.")]
    pub bg_light_blue: Option<String>,

    #[arg(long = "bg-light-yellow", value_name = "COLOR", help = "Background color of the light yellow pattern.")]
    pub bg_light_yellow: Option<String>,

    #[arg(long = "bg-light-purple", value_name = "COLOR", help = "Background color of the light purple pattern.")]
    pub bg_light_purple: Option<String>,

    #[arg(long = "bg-light-cyan", value_name = "COLOR", help = "Background color of the light cyan pattern.")]
    pub bg_light_cyan: Option<String>,

    #[arg(long = "bg-dark-gray", value_name = "COLOR", help = "Background color of the dark gray pattern.")]
    pub bg_dark_gray: Option<String>,

    #[arg(long = "bg-light-gray", value_name = "COLOR", help = "Background color of the light gray pattern.")]
    pub bg_light_gray: Option<String>,

    /// Erase matched substrings before any coloring is applied.
    #[arg(long, short = 'e', value_name = "REGEXP", help = "Erase substrings matching this pattern before coloring.")]
    pub erase: Option<String>,

    /// Treat the whole input as a single buffer so matches can span lines.
    #[arg(long, short = 's', help = "Treat input as a single buffer instead of line by line.")]
    pub single: bool,

    /// Case-insensitive pattern matching.
    #[arg(long = "ignore-case", short = 'i', help = "Do case insensitive pattern matching.")]
    pub ignore_case: bool,

    /// Only emit lines (or buffers) that matched, like grep.
    #[arg(long, conflicts_with = "single", help = "Emit only lines that matched, like grep. Cannot be combined with --single.")]
    pub grep: bool,

    /// With --grep, require every configured pattern to match.
    #[arg(long, help = "Change grep behavior: emit a line only when all patterns matched.")]
    pub and: bool,

    /// Ignore a grep option picked up from a preset.
    #[arg(long = "no-grep", help = "Ignore the grep option, overriding a preset.")]
    pub no_grep: bool,

    /// Render matched spans bold.
    #[arg(long, short = 'B', help = "Matched strings are rendered bold.")]
    pub bold: bool,

    /// Ignore a bold option picked up from a preset.
    #[arg(long = "no-bold", help = "Ignore the bold option, overriding a preset.")]
    pub no_bold: bool,

    /// Invert foreground and background of matched spans.
    #[arg(long, short = 'I', help = "Matched string colors are inverted.")]
    pub invert: bool,

    /// Ignore an invert option picked up from a preset.
    #[arg(long = "no-invert", help = "Ignore the invert option, overriding a preset.")]
    pub no_invert: bool,

    /// Underline matched spans.
    #[arg(long, short = 'U', help = "Matched strings are underlined.")]
    pub underline: bool,

    /// Recursively read directories.
    #[arg(long, short = 'R', help = "Recursively read directories.")]
    pub recursive: bool,

    /// File pattern: only read files matching this glob.
    #[arg(long = "file-pattern", short = 'f', value_name = "GLOB", help = "Only read files whose name matches this glob (e.g. \"*.log\").")]
    pub file_pattern: Option<String>,

    /// Include files and directories starting with a dot.
    #[arg(long, help = "Include files and directories starting with '.' in the walk.")]
    pub dot: bool,

    /// Include version-control files and directories.
    #[arg(long, help = "Include version-control files and directories in the walk.")]
    pub vcs: bool,

    /// Include media and archive files usually skipped.
    #[arg(long, help = "Include media and archive file extensions usually skipped.")]
    pub ext: bool,

    /// Read files even when their content is not valid UTF-8.
    #[arg(long, help = "Force reading input even if it is not valid UTF-8 (lossy conversion).")]
    pub force: bool,

    /// Path to the preset configuration file.
    #[arg(long = "config", value_name = "FILE", help = "Path to the preset file (defaults to ~/.colorsh.yaml).")]
    pub config: Option<PathBuf>,

    /// Load a named preset from the configuration file.
    #[arg(long = "use", value_name = "PRESET", help = "Use a named preset from the preset file.")]
    pub use_preset: Option<String>,

    /// Enable debug logging (overrides RUST_LOG for the colorsh crates).
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// Disable informational messages.
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Files (or directories, with -R) to read instead of stdin.
    #[arg(value_name = "FILES", help = "Files to read; directories with -R. Reads stdin when omitted.")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// The foreground pattern supplied for `color`, if any.
    pub fn pattern_for(&self, color: AnsiColor) -> Option<&str> {
        match color {
            AnsiColor::Black => self.black.as_deref(),
            AnsiColor::Red => self.red.as_deref(),
            AnsiColor::Green => self.green.as_deref(),
            AnsiColor::Yellow => self.yellow.as_deref(),
            AnsiColor::Blue => self.blue.as_deref(),
            AnsiColor::Purple => self.purple.as_deref(),
            AnsiColor::Cyan => self.cyan.as_deref(),
            AnsiColor::White => self.white.as_deref(),
            AnsiColor::LightRed => self.light_red.as_deref(),
            AnsiColor::LightGreen => self.light_green.as_deref(),
            AnsiColor::LightBlue => self.light_blue.as_deref(),
            AnsiColor::LightYellow => self.light_yellow.as_deref(),
            AnsiColor::LightPurple => self.light_purple.as_deref(),
            AnsiColor::LightCyan => self.light_cyan.as_deref(),
            AnsiColor::DarkGray => self.dark_gray.as_deref(),
            AnsiColor::LightGray => self.light_gray.as_deref(),
        }
    }

    /// The background color name supplied for `color`'s pattern, if any.
    pub fn background_for(&self, color: AnsiColor) -> Option<&str> {
        match color {
            AnsiColor::Black => self.bg_black.as_deref(),
            AnsiColor::Red => self.bg_red.as_deref(),
            AnsiColor::Green => self.bg_green.as_deref(),
            AnsiColor::Yellow => self.bg_yellow.as_deref(),
            AnsiColor::Blue => self.bg_blue.as_deref(),
            AnsiColor::Purple => self.bg_purple.as_deref(),
            AnsiColor::Cyan => self.bg_cyan.as_deref(),
            AnsiColor::White => self.bg_white.as_deref(),
            AnsiColor::LightRed => self.bg_light_red.as_deref(),
            AnsiColor::LightGreen => self.bg_light_green.as_deref(),
            AnsiColor::LightBlue => self.bg_light_blue.as_deref(),
            AnsiColor::LightYellow => self.bg_light_yellow.as_deref(),
            AnsiColor::LightPurple => self.bg_light_purple.as_deref(),
            AnsiColor::LightCyan => self.bg_light_cyan.as_deref(),
            AnsiColor::DarkGray => self.bg_dark_gray.as_deref(),
            AnsiColor::LightGray => self.bg_light_gray.as_deref(),
        }
    }
}
