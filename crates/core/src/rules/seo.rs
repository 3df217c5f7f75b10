//! SEO rules driven by the listing's own keyword list.
//!
//! Both rules pass vacuously when the listing carries no keywords.

use crate::issue::Issue;
use crate::listing::Listing;
use crate::severity::Severity;
use crate::text;

use super::{impl_meta, ComplianceRule, RuleMeta};

// ---------------------------------------------------------------------------
// KeywordInTitleRule
// ---------------------------------------------------------------------------

/// Every keyword should appear in the title (case-insensitive substring).
/// Reports only the keywords that are missing.
#[derive(Debug, Clone)]
pub struct KeywordInTitleRule {
    meta: RuleMeta,
}

impl KeywordInTitleRule {
    pub const DEFAULT_SEVERITY: Severity = Severity::SeoSuggestion;
    pub const DEFAULT_WEIGHT: f64 = 3.0;

    pub fn new(rule_id: impl Into<String>) -> Self {
        Self {
            meta: RuleMeta::new(
                rule_id,
                "Primary keywords should be present in the title.",
                Self::DEFAULT_SEVERITY,
                Self::DEFAULT_WEIGHT,
            ),
        }
    }
}

impl ComplianceRule for KeywordInTitleRule {
    impl_meta!();

    fn evaluate(&self, listing: &Listing) -> Option<Issue> {
        if listing.keywords.is_empty() {
            return None;
        }

        let title = listing.title.to_lowercase();
        let missing: Vec<&str> = listing
            .keywords
            .iter()
            .filter(|kw| !title.contains(&kw.to_lowercase()))
            .map(String::as_str)
            .collect();
        if missing.is_empty() {
            return None;
        }

        let message = if missing.len() == listing.keywords.len() {
            format!(
                "Consider adding primary keywords ({}) to the title for better SEO.",
                missing.join(", ")
            )
        } else {
            format!(
                "Consider adding keywords like '{}' to the title for better SEO.",
                missing.join(", ")
            )
        };
        Some(self.meta.issue(message).with_detail("missing_keywords", missing))
    }
}

// ---------------------------------------------------------------------------
// KeywordInDescriptionRule
// ---------------------------------------------------------------------------

/// Each keyword should occur at least `min_occurrences` times in the
/// description (case-insensitive, non-overlapping). Reports the first
/// deficient keyword only.
#[derive(Debug, Clone)]
pub struct KeywordInDescriptionRule {
    meta: RuleMeta,
    pub min_occurrences: usize,
}

impl KeywordInDescriptionRule {
    pub const DEFAULT_SEVERITY: Severity = Severity::SeoSuggestion;
    pub const DEFAULT_WEIGHT: f64 = 2.0;
    pub const DEFAULT_MIN_OCCURRENCES: usize = 1;

    pub fn new(rule_id: impl Into<String>, min_occurrences: usize) -> Self {
        Self {
            meta: RuleMeta::new(
                rule_id,
                format!(
                    "Primary keywords should appear at least {min_occurrences} time(s) in the description."
                ),
                Self::DEFAULT_SEVERITY,
                Self::DEFAULT_WEIGHT,
            ),
            min_occurrences,
        }
    }
}

impl ComplianceRule for KeywordInDescriptionRule {
    impl_meta!();

    fn evaluate(&self, listing: &Listing) -> Option<Issue> {
        let description = listing.description.to_lowercase();
        listing.keywords.iter().find_map(|keyword| {
            let occurrences = text::count_occurrences(&description, &keyword.to_lowercase());
            (occurrences < self.min_occurrences).then(|| {
                self.meta
                    .issue(format!(
                        "Keyword '{keyword}' appears less than {} time(s) in the description. \
                         Consider adding it more for SEO.",
                        self.min_occurrences
                    ))
                    .with_detail("keyword", keyword.as_str())
                    .with_detail("current_occurrences", occurrences)
            })
        })
    }
}
