//! Title rules: length, capitalization, forbidden words.

use regex::Regex;

use crate::error::CoreError;
use crate::issue::Issue;
use crate::listing::Listing;
use crate::severity::Severity;
use crate::text;

use super::{impl_meta, validate_bounds, ComplianceRule, RuleMeta};

/// Share of words that must start upper-case for a mixed-case title to pass.
pub const TITLE_CASE_RATIO: f64 = 0.7;

// ---------------------------------------------------------------------------
// TitleLengthRule
// ---------------------------------------------------------------------------

/// Title length (in characters) must lie in the closed range `[min, max]`.
#[derive(Debug, Clone)]
pub struct TitleLengthRule {
    meta: RuleMeta,
    pub min_length: usize,
    pub max_length: usize,
}

impl TitleLengthRule {
    pub const DEFAULT_SEVERITY: Severity = Severity::Critical;
    pub const DEFAULT_WEIGHT: f64 = 10.0;

    pub fn new(rule_id: impl Into<String>, min_length: usize, max_length: usize) -> Self {
        Self {
            meta: RuleMeta::new(
                rule_id,
                format!("Title length must be between {min_length} and {max_length} characters."),
                Self::DEFAULT_SEVERITY,
                Self::DEFAULT_WEIGHT,
            ),
            min_length,
            max_length,
        }
    }
}

impl ComplianceRule for TitleLengthRule {
    impl_meta!();

    fn evaluate(&self, listing: &Listing) -> Option<Issue> {
        let len = text::char_len(&listing.title);
        if (self.min_length..=self.max_length).contains(&len) {
            return None;
        }
        Some(
            self.meta
                .issue(format!(
                    "Title length is {len}. Expected between {} and {}.",
                    self.min_length, self.max_length
                ))
                .with_detail("current_length", len)
                .with_detail("min", self.min_length)
                .with_detail("max", self.max_length),
        )
    }

    fn validate(&self) -> Result<(), CoreError> {
        validate_bounds(&self.meta.rule_id, self.min_length, self.max_length)
    }
}

// ---------------------------------------------------------------------------
// TitleCapitalizationRule
// ---------------------------------------------------------------------------

/// Heuristic title-case check.
///
/// Passes when the title is already title-cased or entirely upper-case.
/// Otherwise, a title of two or more words fails unless more than
/// [`TITLE_CASE_RATIO`] of its words start with an upper-case letter.
#[derive(Debug, Clone)]
pub struct TitleCapitalizationRule {
    meta: RuleMeta,
}

impl TitleCapitalizationRule {
    pub const DEFAULT_SEVERITY: Severity = Severity::Warning;
    pub const DEFAULT_WEIGHT: f64 = 2.0;

    pub fn new(rule_id: impl Into<String>) -> Self {
        Self {
            meta: RuleMeta::new(
                rule_id,
                "Title should use title case (first letter of each major word capitalized).",
                Self::DEFAULT_SEVERITY,
                Self::DEFAULT_WEIGHT,
            ),
        }
    }
}

impl ComplianceRule for TitleCapitalizationRule {
    impl_meta!();

    fn evaluate(&self, listing: &Listing) -> Option<Issue> {
        let title = listing.title.as_str();
        if title == text::to_title_case(title) || text::is_all_upper(title) {
            return None;
        }

        let words: Vec<&str> = title.split_whitespace().collect();
        if words.len() < 2 {
            return None;
        }

        let capitalized = words
            .iter()
            .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
            .count();
        let ratio = capitalized as f64 / words.len() as f64;
        if ratio > TITLE_CASE_RATIO {
            return None;
        }

        Some(self.meta.issue(
            "Title does not appear to be in title case. Please review capitalization.",
        ))
    }
}

// ---------------------------------------------------------------------------
// TitleForbiddenWordsRule
// ---------------------------------------------------------------------------

/// Fails when any blocklisted word or phrase appears in the title as a whole
/// word, ignoring case.
#[derive(Debug, Clone)]
pub struct TitleForbiddenWordsRule {
    meta: RuleMeta,
    /// Lower-cased blocklist paired with its whole-word matcher, in
    /// configured order.
    words: Vec<(String, Regex)>,
}

impl TitleForbiddenWordsRule {
    pub const DEFAULT_SEVERITY: Severity = Severity::Critical;
    pub const DEFAULT_WEIGHT: f64 = 5.0;

    pub fn new<S: AsRef<str>>(
        rule_id: impl Into<String>,
        forbidden_words: &[S],
    ) -> Result<Self, CoreError> {
        let rule_id = rule_id.into();
        let mut words = Vec::with_capacity(forbidden_words.len());
        for word in forbidden_words {
            let lower = word.as_ref().to_lowercase();
            let re = Regex::new(&format!(r"\b{}\b", regex::escape(&lower))).map_err(|e| {
                CoreError::Validation(format!(
                    "rule '{rule_id}': cannot compile forbidden word '{lower}': {e}"
                ))
            })?;
            words.push((lower, re));
        }

        let listed: Vec<&str> = forbidden_words.iter().map(|w| w.as_ref()).collect();
        Ok(Self {
            meta: RuleMeta::new(
                rule_id,
                format!("Title contains forbidden words: {}.", listed.join(", ")),
                Self::DEFAULT_SEVERITY,
                Self::DEFAULT_WEIGHT,
            ),
            words,
        })
    }
}

impl ComplianceRule for TitleForbiddenWordsRule {
    impl_meta!();

    fn evaluate(&self, listing: &Listing) -> Option<Issue> {
        let title = listing.title.to_lowercase();
        let found: Vec<&str> = self
            .words
            .iter()
            .filter(|(_, re)| re.is_match(&title))
            .map(|(w, _)| w.as_str())
            .collect();
        if found.is_empty() {
            return None;
        }
        Some(
            self.meta
                .issue(format!("Title contains forbidden words: {}.", found.join(", ")))
                .with_detail("found_words", found),
        )
    }

    fn validate(&self) -> Result<(), CoreError> {
        if self.words.is_empty() {
            return Err(CoreError::Validation(format!(
                "rule '{}': forbidden word list must not be empty",
                self.meta.rule_id
            )));
        }
        Ok(())
    }
}
