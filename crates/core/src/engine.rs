//! Compliance engine -- pure logic, no I/O.
//!
//! Runs a listing through every rule of a profile in order and folds the
//! outcomes into a [`ComplianceReport`]:
//!
//! - every rule's weight counts toward the denominator;
//! - a passing rule earns its full weight, a violated rule earns nothing
//!   (no partial credit);
//! - the listing is compliant unless at least one CRITICAL issue was raised.
//!
//! Rules are not wrapped in any panic guard. A rule that panics is a
//! programming error and propagates to the caller.

use std::sync::Arc;

use crate::listing::Listing;
use crate::profile::MarketplaceProfile;
use crate::report::{BatchSummary, ComplianceReport};

/// Score reported for a profile with no rules (or zero total weight).
pub const VACUOUS_SCORE: f64 = 100.0;

/// Evaluate one listing against one profile.
pub fn evaluate_listing(profile: &MarketplaceProfile, listing: &Listing) -> ComplianceReport {
    let mut achieved_weight = 0.0;
    let mut total_weight = 0.0;
    let mut has_critical = false;
    let mut issues = Vec::new();

    for rule in profile.rules() {
        total_weight += rule.weight();
        match rule.evaluate(listing) {
            Some(issue) => {
                tracing::debug!(
                    listing_id = %listing.product_id,
                    rule_id = %issue.rule_id,
                    severity = %issue.severity,
                    "Rule violated",
                );
                has_critical |= issue.severity.is_critical();
                issues.push(issue);
            }
            None => achieved_weight += rule.weight(),
        }
    }

    let compliance_score = if total_weight > 0.0 {
        (achieved_weight / total_weight * 100.0).clamp(0.0, 100.0)
    } else {
        VACUOUS_SCORE
    };

    let report = ComplianceReport {
        listing_id: listing.product_id.clone(),
        marketplace_name: profile.marketplace_name().to_string(),
        compliance_score,
        issues,
        is_compliant: !has_critical,
    };

    tracing::debug!(
        listing_id = %report.listing_id,
        marketplace = %report.marketplace_name,
        score = report.compliance_score,
        compliant = report.is_compliant,
        issue_count = report.issues.len(),
        "Listing evaluated",
    );

    report
}

/// A profile bound to an engine. Cheap to clone; clones share the profile.
#[derive(Debug, Clone)]
pub struct ComplianceEngine {
    profile: Arc<MarketplaceProfile>,
}

impl ComplianceEngine {
    pub fn new(profile: MarketplaceProfile) -> Self {
        Self {
            profile: Arc::new(profile),
        }
    }

    pub fn profile(&self) -> &MarketplaceProfile {
        &self.profile
    }

    pub fn evaluate_listing(&self, listing: &Listing) -> ComplianceReport {
        evaluate_listing(&self.profile, listing)
    }

    /// Evaluate listings in order and summarise how many are compliant.
    pub fn evaluate_batch(&self, listings: &[Listing]) -> BatchSummary {
        let reports: Vec<ComplianceReport> =
            listings.iter().map(|l| self.evaluate_listing(l)).collect();
        BatchSummary::from_reports(self.profile.marketplace_name(), reports)
    }
}
