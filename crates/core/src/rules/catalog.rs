//! Catalog data rules: attributes, category, price.

use crate::error::CoreError;
use crate::issue::Issue;
use crate::listing::Listing;
use crate::severity::Severity;

use super::{impl_meta, validate_bounds, ComplianceRule, RuleMeta};

// ---------------------------------------------------------------------------
// RequiredAttributeRule
// ---------------------------------------------------------------------------

/// The named attribute must exist and carry a non-empty value.
#[derive(Debug, Clone)]
pub struct RequiredAttributeRule {
    meta: RuleMeta,
    pub attribute_name: String,
}

impl RequiredAttributeRule {
    pub const DEFAULT_SEVERITY: Severity = Severity::Critical;
    pub const DEFAULT_WEIGHT: f64 = 7.0;

    pub fn new(rule_id: impl Into<String>, attribute_name: impl Into<String>) -> Self {
        let attribute_name = attribute_name.into();
        Self {
            meta: RuleMeta::new(
                rule_id,
                format!("Attribute '{attribute_name}' is required."),
                Self::DEFAULT_SEVERITY,
                Self::DEFAULT_WEIGHT,
            ),
            attribute_name,
        }
    }
}

impl ComplianceRule for RequiredAttributeRule {
    impl_meta!();

    fn evaluate(&self, listing: &Listing) -> Option<Issue> {
        if listing
            .attribute(&self.attribute_name)
            .is_some_and(|v| v.is_present())
        {
            return None;
        }
        Some(
            self.meta
                .issue(format!(
                    "Required attribute '{}' is missing or empty.",
                    self.attribute_name
                ))
                .with_detail("attribute_name", self.attribute_name.as_str()),
        )
    }

    fn validate(&self) -> Result<(), CoreError> {
        if self.attribute_name.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "rule '{}': attribute name must not be empty",
                self.meta.rule_id
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// RequiredCategoryRule
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RequiredCategoryRule {
    meta: RuleMeta,
}

impl RequiredCategoryRule {
    pub const DEFAULT_SEVERITY: Severity = Severity::Critical;
    pub const DEFAULT_WEIGHT: f64 = 5.0;

    pub fn new(rule_id: impl Into<String>) -> Self {
        Self {
            meta: RuleMeta::new(
                rule_id,
                "A product category is required.",
                Self::DEFAULT_SEVERITY,
                Self::DEFAULT_WEIGHT,
            ),
        }
    }
}

impl ComplianceRule for RequiredCategoryRule {
    impl_meta!();

    fn evaluate(&self, listing: &Listing) -> Option<Issue> {
        if !listing.category.trim().is_empty() {
            return None;
        }
        Some(self.meta.issue("Product category is missing or empty."))
    }
}

// ---------------------------------------------------------------------------
// PriceRangeRule
// ---------------------------------------------------------------------------

/// Price must be a finite number within `[min_price, max_price]`.
#[derive(Debug, Clone)]
pub struct PriceRangeRule {
    meta: RuleMeta,
    pub min_price: f64,
    pub max_price: f64,
}

impl PriceRangeRule {
    pub const DEFAULT_SEVERITY: Severity = Severity::Critical;
    pub const DEFAULT_WEIGHT: f64 = 5.0;

    pub fn new(rule_id: impl Into<String>, min_price: f64, max_price: f64) -> Self {
        Self {
            meta: RuleMeta::new(
                rule_id,
                format!("Price must be between {min_price:.2} and {max_price:.2}."),
                Self::DEFAULT_SEVERITY,
                Self::DEFAULT_WEIGHT,
            ),
            min_price,
            max_price,
        }
    }
}

impl ComplianceRule for PriceRangeRule {
    impl_meta!();

    fn evaluate(&self, listing: &Listing) -> Option<Issue> {
        let price = listing.price;
        if price.is_finite() && (self.min_price..=self.max_price).contains(&price) {
            return None;
        }
        Some(
            self.meta
                .issue(format!(
                    "Price is {price:.2}. Expected between {:.2} and {:.2}.",
                    self.min_price, self.max_price
                ))
                // NaN and infinities serialize as null.
                .with_detail("current_price", price)
                .with_detail("min", self.min_price)
                .with_detail("max", self.max_price),
        )
    }

    fn validate(&self) -> Result<(), CoreError> {
        if !self.min_price.is_finite() || !self.max_price.is_finite() {
            return Err(CoreError::Validation(format!(
                "rule '{}': price bounds must be finite numbers",
                self.meta.rule_id
            )));
        }
        validate_bounds(&self.meta.rule_id, self.min_price, self.max_price)
    }
}
