//! Raw text normalization
//!
//! Cleans text coming out of PDF extraction into a canonical form: printable
//! ASCII only, single-spaced, with common extraction artifacts repaired.
//! Normalization is total (never fails) and idempotent.

use lazy_static::lazy_static;
use regex::Regex;

/// Code points PDF extraction commonly mangles, with their ASCII stand-ins.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{00a0}", " "), // non-breaking space
    ("\u{fb01}", "fi"),
    ("\u{fb02}", "fl"),
    ("\u{fb00}", "ff"),
    ("\u{fb03}", "ffi"),
    ("\u{fb04}", "ffl"),
    ("\u{2013}", "-"), // en dash
    ("\u{2014}", "-"), // em dash
    ("\u{2018}", "'"),
    ("\u{2019}", "'"),
    ("\u{201c}", "\""),
    ("\u{201d}", "\""),
    ("\u{2022}", "-"), // bullet
];

lazy_static! {
    /// Runs of repeated `&`/`=` left behind by bad PDF extraction.
    static ref ARTIFACT_RUNS: Regex = Regex::new(r"[&=]{2,}").unwrap();
}

/// Normalize raw extracted text. Returns an empty string for empty input.
///
/// Steps, each total over the previous output:
/// 1. Replace the fixed table of problematic code points.
/// 2. Collapse runs of 2+ `&`/`=` to a single space.
/// 3. Map every character outside printable ASCII (0x20-0x7E) to a space.
/// 4. Delete a whitespace run sitting directly between two word characters
///    (letter-spaced extraction repair). Lossy: it also joins ordinary
///    words, so it must run before clause segmentation, which only relies
///    on punctuation, digits, and casing boundaries.
/// 5. Collapse remaining whitespace runs to single spaces and trim.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.to_string();
    for (bad, good) in REPLACEMENTS {
        if text.contains(bad) {
            text = text.replace(bad, good);
        }
    }

    let text = ARTIFACT_RUNS.replace_all(&text, " ");

    let text: String = text
        .chars()
        .map(|c| if (' '..='~').contains(&c) { c } else { ' ' })
        .collect();

    collapse_whitespace(&text)
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Steps 4 and 5 in a single scan: the `regex` crate has no look-around, so
/// the between-word-characters test is done manually.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_whitespace() {
            out.push(c);
            continue;
        }
        // Consume the whole whitespace run
        while chars.peek().is_some_and(|n| n.is_whitespace()) {
            chars.next();
        }
        let after_word = out.chars().next_back().is_some_and(is_word);
        let before_word = chars.peek().copied().is_some_and(is_word);
        if after_word && before_word {
            // Letter-spacing artifact: drop the run
        } else if !out.is_empty() && chars.peek().is_some() {
            out.push(' ');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_replaces_ligatures() {
        assert_eq!(normalize("con\u{fb01}dential"), "confidential");
        assert_eq!(normalize("e\u{fb00}ective"), "effective");
    }

    #[test]
    fn test_replaces_dashes_and_quotes() {
        assert_eq!(normalize("term \u{2013} end"), "term - end");
        assert_eq!(normalize("\u{201c}agreement\u{201d}"), "\"agreement\"");
        assert_eq!(normalize("party\u{2019}s"), "party's");
    }

    #[test]
    fn test_collapses_artifact_runs() {
        assert_eq!(normalize("clause ==== end."), "clauseend.");
        assert_eq!(normalize("&&&& 1. Scope"), "1. Scope");
        assert_eq!(normalize("&&&&"), "");
    }

    #[test]
    fn test_strips_control_characters() {
        assert_eq!(normalize("clause\u{0}\u{1}text"), "clausetext");
        assert_eq!(normalize("\t\r\nclause.\t"), "clause.");
    }

    #[test]
    fn test_repairs_letter_spaced_words() {
        assert_eq!(normalize("H e l l o"), "Hello");
        assert_eq!(normalize("T E R M S."), "TERMS.");
    }

    #[test]
    fn test_keeps_space_next_to_punctuation() {
        assert_eq!(normalize("one. Two"), "one. Two");
        assert_eq!(normalize("( a )"), "( a )");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \u{00a0}  "), "");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(input in any::<String>()) {
            let once = normalize(&input);
            prop_assert_eq!(&normalize(&once), &once);
        }

        #[test]
        fn output_is_printable_single_spaced(input in any::<String>()) {
            let out = normalize(&input);
            prop_assert!(out.chars().all(|c| (' '..='~').contains(&c)));
            prop_assert!(!out.contains("  "));
            prop_assert_eq!(out.trim(), &out);
        }
    }
}
