//! engine.rs - The coloring engine.
//!
//! Applies the composite regex to a text buffer and rewrites every match
//! with the escape sequences of the style whose named group fired, leaving
//! text outside matches untouched. One call processes one buffer or line
//! and returns; the engine holds no state between invocations and performs
//! no I/O or logging of its own.
//!
//! License: MIT OR Apache-2.0

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use regex::{Captures, Match, Regex};

use crate::assembler::CompositeRegex;
use crate::errors::ColorshError;
use crate::style::StyleTable;

/// The decorated text plus the number of distinct style names that matched.
///
/// The hit count is consumed by the grep/filter layer: compared against the
/// configured pattern count for AND semantics, or against zero for the
/// default any-pattern-matched semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredOutput {
    pub text: String,
    pub distinct_hits: usize,
}

/// One captured byte range attributed to a style, relative to its match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MatchSpan<'n> {
    start: usize,
    end: usize,
    style_name: &'n str,
}

/// The coloring engine for one run: the composite regex, the optional erase
/// expression, and the style table, all immutable once constructed.
#[derive(Debug)]
pub struct Colorizer {
    composite: CompositeRegex,
    erase: Option<Regex>,
    styles: StyleTable,
    force: bool,
}

impl Colorizer {
    pub fn new(
        composite: CompositeRegex,
        erase: Option<Regex>,
        styles: StyleTable,
        force: bool,
    ) -> Self {
        Self {
            composite,
            erase,
            styles,
            force,
        }
    }

    /// Number of configured sub-patterns in the composite.
    pub fn pattern_count(&self) -> usize {
        self.composite.pattern_count
    }

    /// Colors a raw input buffer.
    ///
    /// Input that is not valid UTF-8 fails with `InvalidEncoding` unless the
    /// force override was set, in which case it is converted lossily first.
    /// The caller decides whether an encoding failure skips the input unit
    /// or aborts the run.
    pub fn color_bytes(&self, input: &[u8]) -> Result<ColoredOutput, ColorshError> {
        match std::str::from_utf8(input) {
            Ok(text) => Ok(self.color_text(text)),
            Err(_) if self.force => {
                let lossy = String::from_utf8_lossy(input);
                Ok(self.color_text(&lossy))
            }
            Err(e) => Err(ColorshError::InvalidEncoding(e.to_string())),
        }
    }

    /// Colors a text buffer: erase pass first, then scan and rewrite.
    pub fn color_text(&self, text: &str) -> ColoredOutput {
        let erased: Cow<'_, str> = match &self.erase {
            Some(re) => re.replace_all(text, ""),
            None => Cow::Borrowed(text),
        };

        let names: Vec<Option<&str>> = self.composite.regex.capture_names().collect();
        let mut hits: HashSet<&str> = HashSet::new();
        let mut out = String::with_capacity(erased.len());
        let mut last_end = 0usize;

        for caps in self.composite.regex.captures_iter(erased.as_ref()) {
            let Some(whole) = caps.get(0) else { continue };
            out.push_str(&erased[last_end..whole.start()]);
            out.push_str(&self.rewrite_match(&caps, &names, whole, &mut hits));
            last_end = whole.end();
        }
        out.push_str(&erased[last_end..]);

        ColoredOutput {
            text: out,
            distinct_hits: hits.len(),
        }
    }

    /// Rewrites one top-level match, returning its styled replacement.
    ///
    /// Group slots are walked in declaration order. A named slot that
    /// participated contributes its span under its own name; an anonymous
    /// slot is attributed to the most recently seen name, which lets a
    /// pattern author add nested or backreference groups without breaking
    /// attribution. When a style collected more than one span, the first is
    /// its own full-match duplicate (the sub-pattern contains a capturing
    /// group) and is discarded so the text is not wrapped twice.
    fn rewrite_match<'r>(
        &'r self,
        caps: &Captures<'_>,
        names: &[Option<&'r str>],
        whole: Match<'_>,
        hits: &mut HashSet<&'r str>,
    ) -> String {
        let base = whole.start();
        let mut spans_by_name: HashMap<&str, Vec<(usize, usize)>> = HashMap::new();
        let mut last_name: Option<&str> = None;

        for i in 1..caps.len() {
            let Some(group) = caps.get(i) else { continue };
            let span = (group.start() - base, group.end() - base);
            let name = match names[i] {
                Some(name) => {
                    last_name = Some(name);
                    name
                }
                None => match last_name {
                    Some(name) => name,
                    None => continue,
                },
            };
            if span.0 < span.1 && self.styles.contains_key(name) {
                hits.insert(name);
            }
            spans_by_name.entry(name).or_default().push(span);
        }

        for spans in spans_by_name.values_mut() {
            if spans.len() > 1 {
                spans.remove(0);
            }
        }

        // Flatten into one ordered span list and validate it before any
        // rewriting: spans must not overlap, and empty spans render nothing.
        let mut spans: Vec<MatchSpan<'r>> = spans_by_name
            .iter()
            .flat_map(|(&name, spans)| {
                spans.iter().map(move |&(start, end)| MatchSpan {
                    start,
                    end,
                    style_name: name,
                })
            })
            .filter(|span| span.start < span.end && self.styles.contains_key(span.style_name))
            .collect();
        spans.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then(b.end.cmp(&a.end))
                .then(a.style_name.cmp(b.style_name))
        });

        let mut accepted: Vec<MatchSpan<'r>> = Vec::with_capacity(spans.len());
        for span in spans {
            if accepted.last().map_or(true, |prev| span.start >= prev.end) {
                accepted.push(span);
            }
        }

        // Rewrite from the rightmost span backward so the byte offsets of
        // earlier spans stay valid as styled text is spliced in.
        let mut rewritten = whole.as_str().to_string();
        for span in accepted.iter().rev() {
            if let Some(style) = self.styles.get(span.style_name) {
                let styled = style.paint(&rewritten[span.start..span.end]);
                rewritten.replace_range(span.start..span.end, &styled);
            }
        }
        rewritten
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::{assemble, ModeFlags};
    use crate::config::PatternEntry;
    use crate::style::{AnsiColor, Style};

    fn colorizer(patterns: &[(&str, &str)]) -> Colorizer {
        let set: Vec<PatternEntry> = patterns
            .iter()
            .map(|(name, pattern)| PatternEntry {
                style_name: name.to_string(),
                pattern: pattern.to_string(),
            })
            .collect();
        let composite = assemble(&set, ModeFlags::default()).unwrap();
        let styles: StyleTable = patterns
            .iter()
            .map(|(name, _)| (name.to_string(), Style::new(name.parse::<AnsiColor>().unwrap())))
            .collect();
        Colorizer::new(composite, None, styles, false)
    }

    #[test]
    fn untouched_text_between_matches() {
        let c = colorizer(&[("red", "ERROR")]);
        let out = c.color_text("an ERROR occurred, then another ERROR");
        assert_eq!(
            out.text,
            "an \x1b[31mERROR\x1b[0m occurred, then another \x1b[31mERROR\x1b[0m"
        );
        assert_eq!(out.distinct_hits, 1);
    }

    #[test]
    fn force_applies_lossy_conversion() {
        let set = vec![PatternEntry {
            style_name: "red".to_string(),
            pattern: "ERROR".to_string(),
        }];
        let composite = assemble(&set, ModeFlags::default()).unwrap();
        let mut styles = StyleTable::new();
        styles.insert("red".to_string(), Style::new(AnsiColor::Red));
        let c = Colorizer::new(composite, None, styles, true);

        let out = c.color_bytes(b"ERROR \xff here").unwrap();
        assert!(out.text.starts_with("\x1b[31mERROR\x1b[0m"));
        assert_eq!(out.distinct_hits, 1);
    }

    #[test]
    fn invalid_encoding_without_force() {
        let c = colorizer(&[("red", "ERROR")]);
        assert!(matches!(
            c.color_bytes(b"ERROR \xff here"),
            Err(ColorshError::InvalidEncoding(_))
        ));
    }
}
