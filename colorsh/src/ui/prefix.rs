// colorsh/src/ui/prefix.rs
//! Filename and line-number prefixes for multi-file output.
//!
//! Prefixes are inserted at the start of every physical line of the colored
//! content, in front of any leading reset sequence, so they never land
//! inside an open color span. The engine guarantees styled spans close
//! before each line break and reopen after it, which is what makes this
//! insertion point safe.

use lazy_static::lazy_static;
use owo_colors::OwoColorize;
use regex::Regex;

lazy_static! {
    // Every physical line start, with an optional reset sequence captured so
    // the prefix can be placed in front of it.
    static ref LINE_START: Regex = Regex::new(r"(?m)^(\x1b\[0m)?").unwrap();
}

/// Abbreviates the user's home directory to `~/` in a displayed path.
pub fn shorten_home(path: &str) -> String {
    if let Some(home) = dirs::home_dir() {
        let home = home.to_string_lossy();
        if let Some(rest) = path.strip_prefix(home.as_ref()) {
            let rest = rest.strip_prefix('/').unwrap_or(rest);
            return format!("~/{}", rest);
        }
    }
    path.to_string()
}

/// Renders a `file:` or `file:line:` prefix.
pub fn file_prefix(file: &str, line: Option<u64>, color: bool) -> String {
    let file = shorten_home(file);
    if color {
        match line {
            Some(n) => format!(
                "{}{}{}{}",
                file.magenta(),
                ":".cyan(),
                n.yellow(),
                ":".cyan()
            ),
            None => format!("{}{}", file.magenta(), ":".cyan()),
        }
    } else {
        match line {
            Some(n) => format!("{}:{}:", file, n),
            None => format!("{}:", file),
        }
    }
}

/// Renders a bare `line:` prefix for single-file line mode.
pub fn line_prefix(line: u64, color: bool) -> String {
    if color {
        format!("{}{}", line.yellow(), ":".cyan())
    } else {
        format!("{}:", line)
    }
}

/// Inserts `prefix` at the start of every physical line of `content`,
/// keeping any leading reset sequence after the prefix.
pub fn prefix_lines(content: &str, prefix: &str) -> String {
    LINE_START
        .replace_all(content, |caps: &regex::Captures| {
            format!("{}{}", prefix, caps.get(1).map_or("", |m| m.as_str()))
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_every_physical_line() {
        assert_eq!(prefix_lines("a\nb", "f:"), "f:a\nf:b");
    }

    #[test]
    fn prefix_lands_before_a_leading_reset() {
        let content = "\x1b[0mrest of line";
        assert_eq!(prefix_lines(content, "f:"), "f:\x1b[0mrest of line");
    }

    #[test]
    fn uncolored_prefixes() {
        assert_eq!(file_prefix("app.log", Some(3), false), "app.log:3:");
        assert_eq!(file_prefix("app.log", None, false), "app.log:");
        assert_eq!(line_prefix(12, false), "12:");
    }

    #[test]
    fn colored_prefix_wraps_parts() {
        let prefix = file_prefix("app.log", None, true);
        assert!(prefix.contains("\x1b["));
        assert!(prefix.contains("app.log"));
    }
}
