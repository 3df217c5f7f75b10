//! Description rules: minimum length and markup.

use crate::issue::Issue;
use crate::listing::Listing;
use crate::severity::Severity;
use crate::text;

use super::{impl_meta, ComplianceRule, RuleMeta};

/// Description must be at least `min_length` characters long.
#[derive(Debug, Clone)]
pub struct DescriptionLengthRule {
    meta: RuleMeta,
    pub min_length: usize,
}

impl DescriptionLengthRule {
    pub const DEFAULT_SEVERITY: Severity = Severity::Warning;
    pub const DEFAULT_WEIGHT: f64 = 5.0;

    pub fn new(rule_id: impl Into<String>, min_length: usize) -> Self {
        Self {
            meta: RuleMeta::new(
                rule_id,
                format!("Description should be at least {min_length} characters long."),
                Self::DEFAULT_SEVERITY,
                Self::DEFAULT_WEIGHT,
            ),
            min_length,
        }
    }
}

impl ComplianceRule for DescriptionLengthRule {
    impl_meta!();

    fn evaluate(&self, listing: &Listing) -> Option<Issue> {
        let len = text::char_len(&listing.description);
        if len >= self.min_length {
            return None;
        }
        Some(
            self.meta
                .issue(format!(
                    "Description length is {len}. Expected at least {}.",
                    self.min_length
                ))
                .with_detail("current_length", len)
                .with_detail("min", self.min_length),
        )
    }
}

/// Flags tag-like markup in the description when the marketplace does not
/// accept HTML. With `allow_html` set the rule always passes.
#[derive(Debug, Clone)]
pub struct DescriptionHtmlRule {
    meta: RuleMeta,
    pub allow_html: bool,
}

impl DescriptionHtmlRule {
    pub const DEFAULT_SEVERITY: Severity = Severity::Critical;
    pub const DEFAULT_WEIGHT: f64 = 3.0;

    pub fn new(rule_id: impl Into<String>, allow_html: bool) -> Self {
        Self {
            meta: RuleMeta::new(
                rule_id,
                "HTML content in description check.",
                Self::DEFAULT_SEVERITY,
                Self::DEFAULT_WEIGHT,
            ),
            allow_html,
        }
    }
}

impl ComplianceRule for DescriptionHtmlRule {
    impl_meta!();

    fn evaluate(&self, listing: &Listing) -> Option<Issue> {
        if self.allow_html || !text::contains_tag(&listing.description) {
            return None;
        }
        Some(
            self.meta
                .issue("HTML tags are not allowed in the description for this marketplace."),
        )
    }
}
