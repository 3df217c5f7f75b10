//! Small text helpers shared by the rule implementations.

use std::sync::LazyLock;

use regex::Regex;

/// Anything shaped like a markup tag: `<` then at least one non-`>` then `>`.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// Length in characters, not bytes.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub(crate) fn contains_tag(s: &str) -> bool {
    TAG_RE.is_match(s)
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

/// Title-case `s`: a cased character directly after another cased character
/// is lowercased, every other cased character is uppercased. Digits and
/// punctuation therefore start a new "word" (`4x6` becomes `4X6`).
pub(crate) fn to_title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = is_cased(c);
    }
    out
}

/// True when `s` has at least one cased character and none are lowercase.
pub(crate) fn is_all_upper(s: &str) -> bool {
    s.chars().any(is_cased) && !s.chars().any(char::is_lowercase)
}

/// Non-overlapping occurrences of `needle` in `haystack`.
pub(crate) fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
