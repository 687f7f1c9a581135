// colorsh-core/tests/engine_tests.rs
//! Integration tests for the coloring engine: scan-and-rewrite behavior,
//! named-group attribution, erase handling, and hit counting.

use colorsh_core::{
    assemble, build_style_table, compile_erase, AnsiColor, Colorizer, ModeFlags, PatternEntry,
    StyleSpec,
};

/// Builds a colorizer whose style names are color names, one pattern each.
fn colorizer_with(patterns: &[(&str, &str)], erase: Option<&str>, flags: ModeFlags) -> Colorizer {
    let set: Vec<PatternEntry> = patterns
        .iter()
        .map(|(name, pattern)| PatternEntry {
            style_name: name.to_string(),
            pattern: pattern.to_string(),
        })
        .collect();
    let composite = assemble(&set, flags).unwrap();
    let styles = build_style_table(
        patterns
            .iter()
            .map(|(name, _)| StyleSpec::new(*name, name.parse::<AnsiColor>().unwrap()))
            .collect(),
    );
    let erase = erase.map(|pattern| compile_erase(pattern).unwrap());
    Colorizer::new(composite, erase, styles, false)
}

#[test]
fn text_without_matches_is_returned_unchanged() {
    let c = colorizer_with(&[("red", "ERROR"), ("green", "OK")], None, ModeFlags::default());
    let out = c.color_text("nothing to see here");
    assert_eq!(out.text, "nothing to see here");
    assert_eq!(out.distinct_hits, 0);
}

#[test]
fn empty_input_yields_empty_output() {
    let c = colorizer_with(&[("red", "ERROR")], None, ModeFlags::default());
    let out = c.color_text("");
    assert_eq!(out.text, "");
    assert_eq!(out.distinct_hits, 0);
}

#[test]
fn single_match_is_wrapped_and_counted() {
    let c = colorizer_with(&[("red", "ERROR")], None, ModeFlags::default());
    let out = c.color_text("an ERROR occurred");
    assert_eq!(out.text, "an \x1b[31mERROR\x1b[0m occurred");
    assert_eq!(out.distinct_hits, 1);
}

#[test]
fn distinct_hits_counts_styles_not_occurrences() {
    let c = colorizer_with(&[("red", "ERROR"), ("green", "OK")], None, ModeFlags::default());

    let out = c.color_text("OK but ERROR");
    assert_eq!(out.distinct_hits, 2);
    assert_eq!(out.text, "\x1b[32mOK\x1b[0m but \x1b[31mERROR\x1b[0m");

    // Two hits of the same style still count once.
    let out = c.color_text("OK and OK only");
    assert_eq!(out.distinct_hits, 1);
}

#[test]
fn erase_is_applied_before_coloring() {
    let c = colorizer_with(&[("blue", "user")], Some(r"\d+"), ModeFlags::default());
    let out = c.color_text("user123 active");
    assert_eq!(out.text, "\x1b[34muser\x1b[0m active");
    assert_eq!(out.distinct_hits, 1);
}

#[test]
fn erase_is_idempotent() {
    let c = colorizer_with(&[("blue", "zzz")], Some(r"\d+"), ModeFlags::default());
    let once = c.color_text("a1b22c333d");
    let twice = c.color_text(&once.text);
    assert_eq!(once.text, "abcd");
    assert_eq!(twice.text, once.text);
}

#[test]
fn disjoint_named_groups_within_one_match_rewrite_in_reverse_order() {
    // The outer group name is not in the style table; the two inner named
    // groups are. Rewriting the later span first must not corrupt the
    // offsets of the earlier one.
    let c = colorizer_with(
        &[("green", "x"), ("red", "y")],
        None,
        ModeFlags::default(),
    );
    // Build a dedicated colorizer where one alternation branch carries two
    // inner named groups.
    let set = vec![PatternEntry {
        style_name: "outer".to_string(),
        pattern: "(?P<green>OK) but (?P<red>ERROR)".to_string(),
    }];
    let composite = assemble(&set, ModeFlags::default()).unwrap();
    let styles = build_style_table(vec![
        StyleSpec::new("green", AnsiColor::Green),
        StyleSpec::new("red", AnsiColor::Red),
    ]);
    let c2 = Colorizer::new(composite, None, styles, false);

    let out = c2.color_text("OK but ERROR");
    assert_eq!(out.text, "\x1b[32mOK\x1b[0m but \x1b[31mERROR\x1b[0m");
    assert_eq!(out.distinct_hits, 2);

    // And the plain two-branch case behaves identically per line.
    let out = c.color_text("x then y");
    assert_eq!(out.text, "\x1b[32mx\x1b[0m then \x1b[31my\x1b[0m");
}

#[test]
fn own_capture_group_colors_the_span_once() {
    let c = colorizer_with(&[("blue", "(ab)+")], None, ModeFlags::default());
    let out = c.color_text("xx abab yy");
    // The sub-pattern's full-match duplicate is discarded; only the inner
    // captured span is wrapped, and only once.
    assert_eq!(out.text.matches("\x1b[34m").count(), 1);
    assert_eq!(out.text.matches("\x1b[0m").count(), 1);
    assert_eq!(out.distinct_hits, 1);
}

#[test]
fn anonymous_group_is_attributed_to_preceding_name() {
    let c = colorizer_with(&[("red", "ERR(OR)?")], None, ModeFlags::default());
    let out = c.color_text("an ERROR occurred");
    // The anonymous `(OR)` span belongs to `red`; the outer duplicate is
    // discarded, so the inner span is the one that gets wrapped.
    assert_eq!(out.text, "an ERR\x1b[31mOR\x1b[0m occurred");
    assert_eq!(out.distinct_hits, 1);
}

#[test]
fn overlapping_spans_keep_the_longer_one() {
    let set = vec![PatternEntry {
        style_name: "red".to_string(),
        pattern: "(?P<green>OK) but ERROR".to_string(),
    }];
    let composite = assemble(&set, ModeFlags::default()).unwrap();
    let styles = build_style_table(vec![
        StyleSpec::new("red", AnsiColor::Red),
        StyleSpec::new("green", AnsiColor::Green),
    ]);
    let c = Colorizer::new(composite, None, styles, false);

    // `red` covers the whole match and starts where `green` does; the
    // longer span wins and the contained one is dropped.
    let out = c.color_text("OK but ERROR");
    assert_eq!(out.text, "\x1b[31mOK but ERROR\x1b[0m");
}

#[test]
fn empty_matches_neither_alter_nor_count() {
    let c = colorizer_with(&[("red", "q?")], None, ModeFlags::default());
    let out = c.color_text("abc");
    assert_eq!(out.text, "abc");
    assert_eq!(out.distinct_hits, 0);
}

#[test]
fn unknown_named_groups_are_ignored() {
    let set = vec![PatternEntry {
        style_name: "shout".to_string(),
        pattern: "LOUD".to_string(),
    }];
    let composite = assemble(&set, ModeFlags::default()).unwrap();
    let styles = build_style_table(vec![StyleSpec::new("red", AnsiColor::Red)]);
    let c = Colorizer::new(composite, None, styles, false);

    let out = c.color_text("a LOUD noise");
    assert_eq!(out.text, "a LOUD noise");
    assert_eq!(out.distinct_hits, 0);
}

#[test]
fn single_line_mode_spans_reset_around_line_breaks() {
    let flags = ModeFlags { case_insensitive: false, single_line: true };
    let c = colorizer_with(&[("red", "O.K")], None, flags);
    let out = c.color_text("an O\nK here");
    assert_eq!(out.text, "an \x1b[31mO\x1b[0m\n\x1b[31mK\x1b[0m here");
    assert_eq!(out.distinct_hits, 1);
}

#[test]
fn case_insensitive_mode_matches_any_case() {
    let flags = ModeFlags { case_insensitive: true, single_line: false };
    let c = colorizer_with(&[("red", "error")], None, flags);
    let out = c.color_text("an ERROR occurred");
    assert_eq!(out.text, "an \x1b[31mERROR\x1b[0m occurred");
}

#[test]
fn stripping_escapes_round_trips_to_erase_adjusted_input() {
    let c = colorizer_with(
        &[("red", "ERROR"), ("green", "OK")],
        Some(r"\d+"),
        ModeFlags::default(),
    );
    let input = "OK line 42 with ERROR and more ERROR text";
    let out = c.color_text(input);

    let stripped = strip_ansi_escapes::strip(out.text.as_bytes());
    let expected = input.replace("42", "");
    assert_eq!(String::from_utf8_lossy(&stripped), expected);
}
