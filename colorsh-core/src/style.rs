//! ANSI color model and span rendering for the coloring engine.
//!
//! This module defines the sixteen named terminal colors the CLI exposes,
//! the `Style` descriptor bound to each style name, and the rendering that
//! wraps a matched span in escape sequences. Styled spans containing line
//! breaks are reset before each break and reopened after it, since terminals
//! do not reliably persist color state across raw newlines.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The SGR reset sequence terminating every styled span.
pub const RESET: &str = "\x1b[0m";

lazy_static! {
    // Runs of line breaks inside a styled span. `(?s)` so the engine sees
    // the span exactly as it was captured, embedded newlines included.
    static ref LINE_BREAKS: Regex = Regex::new(r"(?s)([\r\n]+)").unwrap();
}

/// The named ANSI colors a pattern or background can be bound to.
///
/// Variant order matches the order color options are presented in the CLI
/// help and the order patterns are assembled into the composite regex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
    LightRed,
    LightGreen,
    LightBlue,
    LightYellow,
    LightPurple,
    LightCyan,
    DarkGray,
    LightGray,
}

/// Error type for parsing an invalid color name.
#[derive(Debug, Clone)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid color name '{}'; expected one of: black, red, green, yellow, blue, \
            purple, cyan, white, light_red, light_green, light_blue, light_yellow, \
            light_purple, light_cyan, dark_gray, light_gray.",
            self.0
        )
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for AnsiColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "black" => Ok(AnsiColor::Black),
            "red" => Ok(AnsiColor::Red),
            "green" => Ok(AnsiColor::Green),
            "yellow" => Ok(AnsiColor::Yellow),
            "blue" => Ok(AnsiColor::Blue),
            "purple" => Ok(AnsiColor::Purple),
            "cyan" => Ok(AnsiColor::Cyan),
            "white" => Ok(AnsiColor::White),
            "light_red" => Ok(AnsiColor::LightRed),
            "light_green" => Ok(AnsiColor::LightGreen),
            "light_blue" => Ok(AnsiColor::LightBlue),
            "light_yellow" => Ok(AnsiColor::LightYellow),
            "light_purple" => Ok(AnsiColor::LightPurple),
            "light_cyan" => Ok(AnsiColor::LightCyan),
            "dark_gray" => Ok(AnsiColor::DarkGray),
            "light_gray" => Ok(AnsiColor::LightGray),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

impl AnsiColor {
    /// Every color, in CLI presentation order.
    pub const ALL: [AnsiColor; 16] = [
        AnsiColor::Black,
        AnsiColor::Red,
        AnsiColor::Green,
        AnsiColor::Yellow,
        AnsiColor::Blue,
        AnsiColor::Purple,
        AnsiColor::Cyan,
        AnsiColor::White,
        AnsiColor::LightRed,
        AnsiColor::LightGreen,
        AnsiColor::LightBlue,
        AnsiColor::LightYellow,
        AnsiColor::LightPurple,
        AnsiColor::LightCyan,
        AnsiColor::DarkGray,
        AnsiColor::LightGray,
    ];

    /// The canonical snake_case name. This is also the capture-group
    /// identifier the pattern assembler uses for the color's sub-pattern.
    pub fn name(&self) -> &'static str {
        match self {
            AnsiColor::Black => "black",
            AnsiColor::Red => "red",
            AnsiColor::Green => "green",
            AnsiColor::Yellow => "yellow",
            AnsiColor::Blue => "blue",
            AnsiColor::Purple => "purple",
            AnsiColor::Cyan => "cyan",
            AnsiColor::White => "white",
            AnsiColor::LightRed => "light_red",
            AnsiColor::LightGreen => "light_green",
            AnsiColor::LightBlue => "light_blue",
            AnsiColor::LightYellow => "light_yellow",
            AnsiColor::LightPurple => "light_purple",
            AnsiColor::LightCyan => "light_cyan",
            AnsiColor::DarkGray => "dark_gray",
            AnsiColor::LightGray => "light_gray",
        }
    }

    /// SGR foreground parameter for this color.
    pub fn fg_code(&self) -> u8 {
        match self {
            AnsiColor::Black => 30,
            AnsiColor::Red => 31,
            AnsiColor::Green => 32,
            AnsiColor::Yellow => 33,
            AnsiColor::Blue => 34,
            AnsiColor::Purple => 35,
            AnsiColor::Cyan => 36,
            AnsiColor::LightGray => 37,
            AnsiColor::DarkGray => 90,
            AnsiColor::LightRed => 91,
            AnsiColor::LightGreen => 92,
            AnsiColor::LightYellow => 93,
            AnsiColor::LightBlue => 94,
            AnsiColor::LightPurple => 95,
            AnsiColor::LightCyan => 96,
            AnsiColor::White => 97,
        }
    }

    /// SGR background parameter for this color.
    pub fn bg_code(&self) -> u8 {
        self.fg_code() + 10
    }
}

impl fmt::Display for AnsiColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The rendering rule bound to one style name: a foreground color plus
/// optional background and decoration modifiers. Immutable during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: AnsiColor,
    pub bg: Option<AnsiColor>,
    pub bold: bool,
    pub inverted: bool,
    pub underline: bool,
}

/// Type alias for the style table, keyed by style name.
pub type StyleTable = HashMap<String, Style>;

impl Style {
    /// A plain foreground style with no background or decorations.
    pub fn new(fg: AnsiColor) -> Self {
        Self {
            fg,
            bg: None,
            bold: false,
            inverted: false,
            underline: false,
        }
    }

    /// The opening escape sequence: foreground, optional background, then
    /// bold/inverted/underline modifiers, as a single SGR sequence.
    pub fn open(&self) -> String {
        let mut params = vec![self.fg.fg_code().to_string()];
        if let Some(bg) = self.bg {
            params.push(bg.bg_code().to_string());
        }
        if self.bold {
            params.push("1".to_string());
        }
        if self.inverted {
            params.push("7".to_string());
        }
        if self.underline {
            params.push("4".to_string());
        }
        format!("\x1b[{}m", params.join(";"))
    }

    /// Wraps `span` in this style's open sequence and a reset.
    ///
    /// Every run of line breaks inside the span is rewritten as
    /// `reset + breaks + open`, so each physical line closes its own color
    /// state and the next line reopens it. A line start inside a styled
    /// span therefore carries only an open sequence, which keeps it safe
    /// for the printing layer to insert prefixes at line starts.
    pub fn paint(&self, span: &str) -> String {
        let open = self.open();
        let reopened = LINE_BREAKS.replace_all(span, |caps: &regex::Captures| {
            format!("{}{}{}", RESET, &caps[1], open)
        });
        format!("{}{}{}", open, reopened, RESET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_named_colors() {
        assert_eq!("red".parse::<AnsiColor>().unwrap(), AnsiColor::Red);
        assert_eq!("Light_Blue".parse::<AnsiColor>().unwrap(), AnsiColor::LightBlue);
        assert!("chartreuse".parse::<AnsiColor>().is_err());
    }

    #[test]
    fn fg_and_bg_codes() {
        assert_eq!(AnsiColor::Red.fg_code(), 31);
        assert_eq!(AnsiColor::Red.bg_code(), 41);
        assert_eq!(AnsiColor::DarkGray.fg_code(), 90);
        assert_eq!(AnsiColor::White.bg_code(), 107);
    }

    #[test]
    fn open_sequence_orders_parameters() {
        let style = Style {
            fg: AnsiColor::Red,
            bg: Some(AnsiColor::Blue),
            bold: true,
            inverted: true,
            underline: true,
        };
        assert_eq!(style.open(), "\x1b[31;44;1;7;4m");
    }

    #[test]
    fn paint_wraps_span() {
        let style = Style::new(AnsiColor::Green);
        assert_eq!(style.paint("OK"), "\x1b[32mOK\x1b[0m");
    }

    #[test]
    fn paint_reopens_after_line_breaks() {
        let style = Style::new(AnsiColor::Red);
        assert_eq!(
            style.paint("a\nb"),
            "\x1b[31ma\x1b[0m\n\x1b[31mb\x1b[0m"
        );
        // A run of breaks is torn down and reopened once, not per byte.
        assert_eq!(
            style.paint("a\r\n\nb"),
            "\x1b[31ma\x1b[0m\r\n\n\x1b[31mb\x1b[0m"
        );
    }
}
