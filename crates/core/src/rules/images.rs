use crate::error::CoreError;
use crate::issue::Issue;
use crate::listing::Listing;
use crate::severity::Severity;

use super::{impl_meta, validate_bounds, ComplianceRule, RuleMeta};

/// Image count must lie in the closed range `[min_images, max_images]`.
#[derive(Debug, Clone)]
pub struct ImageCountRule {
    meta: RuleMeta,
    pub min_images: usize,
    pub max_images: usize,
}

impl ImageCountRule {
    pub const DEFAULT_SEVERITY: Severity = Severity::Critical;
    pub const DEFAULT_WEIGHT: f64 = 8.0;

    pub fn new(rule_id: impl Into<String>, min_images: usize, max_images: usize) -> Self {
        Self {
            meta: RuleMeta::new(
                rule_id,
                format!("Number of images must be between {min_images} and {max_images}."),
                Self::DEFAULT_SEVERITY,
                Self::DEFAULT_WEIGHT,
            ),
            min_images,
            max_images,
        }
    }
}

impl ComplianceRule for ImageCountRule {
    impl_meta!();

    fn evaluate(&self, listing: &Listing) -> Option<Issue> {
        let count = listing.images.len();
        if (self.min_images..=self.max_images).contains(&count) {
            return None;
        }
        Some(
            self.meta
                .issue(format!(
                    "Number of images is {count}. Expected between {} and {}.",
                    self.min_images, self.max_images
                ))
                .with_detail("current_count", count)
                .with_detail("min", self.min_images)
                .with_detail("max", self.max_images),
        )
    }

    fn validate(&self) -> Result<(), CoreError> {
        validate_bounds(&self.meta.rule_id, self.min_images, self.max_images)
    }
}
