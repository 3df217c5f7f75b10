//! Compliance rules.
//!
//! Every rule is a small value holding its configuration and a
//! [`RuleMeta`] (id, description, severity, weight). Evaluation is a pure
//! function of `&self` and `&Listing`, so one rule instance can be shared
//! across threads and reused for any number of listings.

pub mod catalog;
pub mod description;
pub mod images;
pub mod seo;
pub mod title;

use std::fmt;

use crate::error::CoreError;
use crate::issue::Issue;
use crate::listing::Listing;
use crate::severity::Severity;

pub use catalog::{PriceRangeRule, RequiredAttributeRule, RequiredCategoryRule};
pub use description::{DescriptionHtmlRule, DescriptionLengthRule};
pub use images::ImageCountRule;
pub use seo::{KeywordInDescriptionRule, KeywordInTitleRule};
pub use title::{TitleCapitalizationRule, TitleForbiddenWordsRule, TitleLengthRule};

/// Configuration shared by every rule variant.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMeta {
    pub rule_id: String,
    pub description: String,
    /// Severity of the issue emitted on violation.
    pub severity: Severity,
    /// Contribution to the score denominator; earned only when the rule passes.
    pub weight: f64,
}

impl RuleMeta {
    pub fn new(
        rule_id: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
        weight: f64,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            description: description.into(),
            severity,
            weight,
        }
    }

    /// Start an issue carrying this rule's id and severity.
    pub fn issue(&self, message: impl Into<String>) -> Issue {
        Issue::new(self.rule_id.clone(), message, self.severity)
    }
}

/// A single checkable policy unit.
pub trait ComplianceRule: fmt::Debug + Send + Sync {
    fn meta(&self) -> &RuleMeta;

    fn meta_mut(&mut self) -> &mut RuleMeta;

    /// Return an issue if `listing` violates this rule, `None` otherwise.
    ///
    /// Rules whose input data is absent (no keywords, no attributes) pass.
    fn evaluate(&self, listing: &Listing) -> Option<Issue>;

    /// Reject parameter combinations that can never be satisfied.
    /// Called by the profile when the rule is added.
    fn validate(&self) -> Result<(), CoreError> {
        Ok(())
    }

    fn rule_id(&self) -> &str {
        &self.meta().rule_id
    }

    fn description(&self) -> &str {
        &self.meta().description
    }

    fn severity(&self) -> Severity {
        self.meta().severity
    }

    fn weight(&self) -> f64 {
        self.meta().weight
    }

    fn with_severity(mut self, severity: Severity) -> Self
    where
        Self: Sized,
    {
        self.meta_mut().severity = severity;
        self
    }

    fn with_weight(mut self, weight: f64) -> Self
    where
        Self: Sized,
    {
        self.meta_mut().weight = weight;
        self
    }
}

/// Shared `[min, max]` sanity check for the bounded rules.
pub(crate) fn validate_bounds<T: PartialOrd + fmt::Display>(
    rule_id: &str,
    min: T,
    max: T,
) -> Result<(), CoreError> {
    if min > max {
        return Err(CoreError::Validation(format!(
            "rule '{rule_id}': min ({min}) must be <= max ({max})"
        )));
    }
    Ok(())
}

/// Implements the two metadata accessors for a rule struct with a `meta` field.
macro_rules! impl_meta {
    () => {
        fn meta(&self) -> &$crate::rules::RuleMeta {
            &self.meta
        }

        fn meta_mut(&mut self) -> &mut $crate::rules::RuleMeta {
            &mut self.meta
        }
    };
}

pub(crate) use impl_meta;
