//! Marketplace profiles: a named, ordered rule set.
//!
//! A profile is assembled once at start-up and then shared read-only across
//! evaluations. All configuration checks happen in [`MarketplaceProfile::add_rule`]
//! so a profile that exists is always evaluable.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::rules::ComplianceRule;

#[derive(Debug)]
pub struct MarketplaceProfile {
    marketplace_name: String,
    rules: Vec<Box<dyn ComplianceRule>>,
    rule_ids: HashSet<String>,
}

impl MarketplaceProfile {
    /// Create an empty profile. The marketplace name must not be blank.
    pub fn new(marketplace_name: impl Into<String>) -> Result<Self, CoreError> {
        let marketplace_name = marketplace_name.into();
        if marketplace_name.trim().is_empty() {
            tracing::warn!("Rejected marketplace profile with empty name");
            return Err(CoreError::Validation(
                "marketplace_name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            marketplace_name,
            rules: Vec::new(),
            rule_ids: HashSet::new(),
        })
    }

    /// Append a rule after validating its id, weight and parameters.
    ///
    /// Rule ids must be unique within the profile; a duplicate would count
    /// its weight twice.
    pub fn add_rule<R: ComplianceRule + 'static>(&mut self, rule: R) -> Result<(), CoreError> {
        self.add_boxed_rule(Box::new(rule))
    }

    /// Chaining form of [`add_rule`](Self::add_rule).
    pub fn with_rule<R: ComplianceRule + 'static>(mut self, rule: R) -> Result<Self, CoreError> {
        self.add_rule(rule)?;
        Ok(self)
    }

    pub fn add_boxed_rule(&mut self, rule: Box<dyn ComplianceRule>) -> Result<(), CoreError> {
        if let Err(e) = self.check_rule(rule.as_ref()) {
            tracing::warn!(
                marketplace = %self.marketplace_name,
                rule_id = %rule.rule_id(),
                error = %e,
                "Rejected rule",
            );
            return Err(e);
        }

        tracing::debug!(
            marketplace = %self.marketplace_name,
            rule_id = %rule.rule_id(),
            severity = %rule.severity(),
            weight = rule.weight(),
            "Added rule",
        );
        self.rule_ids.insert(rule.rule_id().to_string());
        self.rules.push(rule);
        Ok(())
    }

    fn check_rule(&self, rule: &dyn ComplianceRule) -> Result<(), CoreError> {
        let rule_id = rule.rule_id();
        if rule_id.trim().is_empty() {
            return Err(CoreError::Validation("rule_id must not be empty".to_string()));
        }
        let weight = rule.weight();
        if !weight.is_finite() || weight <= 0.0 {
            return Err(CoreError::Validation(format!(
                "rule '{rule_id}': weight must be a positive number, got {weight}"
            )));
        }
        if self.rule_ids.contains(rule_id) {
            return Err(CoreError::DuplicateRule {
                marketplace: self.marketplace_name.clone(),
                rule_id: rule_id.to_string(),
            });
        }
        rule.validate()
    }

    pub fn marketplace_name(&self) -> &str {
        &self.marketplace_name
    }

    /// Rules in insertion order.
    pub fn rules(&self) -> &[Box<dyn ComplianceRule>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Sum of all rule weights (the score denominator).
    pub fn total_weight(&self) -> f64 {
        self.rules.iter().map(|r| r.weight()).sum()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::rules::{ImageCountRule, KeywordInTitleRule, TitleLengthRule};

    #[test]
    fn blank_marketplace_name_rejected() {
        assert_matches!(MarketplaceProfile::new("  "), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rules_keep_insertion_order() {
        let profile = MarketplaceProfile::new("Amazon")
            .unwrap()
            .with_rule(TitleLengthRule::new("B", 1, 10))
            .unwrap()
            .with_rule(ImageCountRule::new("A", 1, 3))
            .unwrap()
            .with_rule(KeywordInTitleRule::new("C"))
            .unwrap();

        let ids: Vec<&str> = profile.rules().iter().map(|r| r.rule_id()).collect();
        assert_eq!(ids, ["B", "A", "C"]);
        assert_eq!(profile.len(), 3);
        assert_eq!(profile.total_weight(), 10.0 + 8.0 + 3.0);
    }

    #[test]
    fn non_positive_weight_rejected() {
        let mut profile = MarketplaceProfile::new("Amazon").unwrap();
        assert_matches!(
            profile.add_rule(TitleLengthRule::new("T", 1, 10).with_weight(0.0)),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            profile.add_rule(TitleLengthRule::new("T", 1, 10).with_weight(-1.0)),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            profile.add_rule(TitleLengthRule::new("T", 1, 10).with_weight(f64::NAN)),
            Err(CoreError::Validation(_))
        );
        assert!(profile.is_empty());
    }

    #[test]
    fn duplicate_rule_id_rejected() {
        let mut profile = MarketplaceProfile::new("Amazon").unwrap();
        profile.add_rule(TitleLengthRule::new("T", 1, 10)).unwrap();

        let err = profile.add_rule(ImageCountRule::new("T", 1, 3)).unwrap_err();
        assert_matches!(
            err,
            CoreError::DuplicateRule { ref marketplace, ref rule_id }
                if marketplace == "Amazon" && rule_id == "T"
        );
        assert_eq!(profile.len(), 1);
    }

    #[test]
    fn rule_parameter_validation_runs_on_add() {
        let mut profile = MarketplaceProfile::new("Amazon").unwrap();
        assert_matches!(
            profile.add_rule(TitleLengthRule::new("T", 70, 10)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn blank_rule_id_rejected() {
        let mut profile = MarketplaceProfile::new("Amazon").unwrap();
        assert_matches!(
            profile.add_rule(KeywordInTitleRule::new("")),
            Err(CoreError::Validation(_))
        );
    }
}
