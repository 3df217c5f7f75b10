//! Declarative profile configuration.
//!
//! A profile can be described as data -- a marketplace name plus a list of
//! `(type, parameters, severity, weight)` entries -- and turned into a
//! [`MarketplaceProfile`] with [`ProfileConfig::build`]. Severity and weight
//! are optional per entry and fall back to the rule type's defaults.
//!
//! ```json
//! {
//!   "marketplace_name": "Amazon",
//!   "rules": [
//!     { "rule_id": "AMZ_TITLE_LEN", "type": "title_length", "min_length": 10, "max_length": 70 },
//!     { "rule_id": "AMZ_ATTR_COLOR", "type": "required_attribute", "attribute_name": "color",
//!       "severity": "WARNING", "weight": 3 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::profile::MarketplaceProfile;
use crate::rules::{
    ComplianceRule, DescriptionHtmlRule, DescriptionLengthRule, ImageCountRule,
    KeywordInDescriptionRule, KeywordInTitleRule, PriceRangeRule, RequiredAttributeRule,
    RequiredCategoryRule, TitleCapitalizationRule, TitleForbiddenWordsRule, TitleLengthRule,
};
use crate::severity::Severity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub marketplace_name: String,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// One rule entry: identity, optional overrides, and the typed parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub rule_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(flatten)]
    pub kind: RuleKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleKind {
    TitleLength {
        min_length: usize,
        max_length: usize,
    },
    TitleCapitalization,
    TitleForbiddenWords {
        forbidden_words: Vec<String>,
    },
    DescriptionLength {
        min_length: usize,
    },
    DescriptionHtml {
        #[serde(default)]
        allow_html: bool,
    },
    ImageCount {
        min_images: usize,
        max_images: usize,
    },
    RequiredAttribute {
        attribute_name: String,
    },
    RequiredCategory,
    PriceRange {
        min_price: f64,
        max_price: f64,
    },
    KeywordInTitle,
    KeywordInDescription {
        #[serde(default = "default_min_occurrences")]
        min_occurrences: usize,
    },
}

fn default_min_occurrences() -> usize {
    KeywordInDescriptionRule::DEFAULT_MIN_OCCURRENCES
}

impl RuleConfig {
    /// Construct the concrete rule with any severity/weight overrides applied.
    pub fn into_rule(self) -> Result<Box<dyn ComplianceRule>, CoreError> {
        let id = self.rule_id;
        let mut rule: Box<dyn ComplianceRule> = match self.kind {
            RuleKind::TitleLength {
                min_length,
                max_length,
            } => Box::new(TitleLengthRule::new(id, min_length, max_length)),
            RuleKind::TitleCapitalization => Box::new(TitleCapitalizationRule::new(id)),
            RuleKind::TitleForbiddenWords { forbidden_words } => {
                Box::new(TitleForbiddenWordsRule::new(id, forbidden_words.as_slice())?)
            }
            RuleKind::DescriptionLength { min_length } => {
                Box::new(DescriptionLengthRule::new(id, min_length))
            }
            RuleKind::DescriptionHtml { allow_html } => {
                Box::new(DescriptionHtmlRule::new(id, allow_html))
            }
            RuleKind::ImageCount {
                min_images,
                max_images,
            } => Box::new(ImageCountRule::new(id, min_images, max_images)),
            RuleKind::RequiredAttribute { attribute_name } => {
                Box::new(RequiredAttributeRule::new(id, attribute_name))
            }
            RuleKind::RequiredCategory => Box::new(RequiredCategoryRule::new(id)),
            RuleKind::PriceRange {
                min_price,
                max_price,
            } => Box::new(PriceRangeRule::new(id, min_price, max_price)),
            RuleKind::KeywordInTitle => Box::new(KeywordInTitleRule::new(id)),
            RuleKind::KeywordInDescription { min_occurrences } => {
                Box::new(KeywordInDescriptionRule::new(id, min_occurrences))
            }
        };

        if let Some(severity) = self.severity {
            rule.meta_mut().severity = severity;
        }
        if let Some(weight) = self.weight {
            rule.meta_mut().weight = weight;
        }
        Ok(rule)
    }
}

impl ProfileConfig {
    pub fn from_json(s: &str) -> Result<Self, CoreError> {
        serde_json::from_str(s).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Build the profile, adding rules in declaration order. Fails on the
    /// first rule the profile rejects.
    pub fn build(self) -> Result<MarketplaceProfile, CoreError> {
        let mut profile = MarketplaceProfile::new(self.marketplace_name)?;
        for rule in self.rules {
            profile.add_boxed_rule(rule.into_rule()?)?;
        }
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const AMAZON_JSON: &str = r#"{
        "marketplace_name": "Amazon",
        "rules": [
            {"rule_id": "T", "type": "title_length", "min_length": 10, "max_length": 70},
            {"rule_id": "C", "type": "title_capitalization", "severity": "INFO", "weight": 1},
            {"rule_id": "F", "type": "title_forbidden_words", "forbidden_words": ["FAST"]},
            {"rule_id": "H", "type": "description_html"},
            {"rule_id": "K", "type": "keyword_in_description"}
        ]
    }"#;

    #[test]
    fn parses_and_builds_in_order_with_defaults() {
        let profile = ProfileConfig::from_json(AMAZON_JSON).unwrap().build().unwrap();
        assert_eq!(profile.marketplace_name(), "Amazon");

        let summary: Vec<(&str, Severity, f64)> = profile
            .rules()
            .iter()
            .map(|r| (r.rule_id(), r.severity(), r.weight()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("T", Severity::Critical, 10.0),
                ("C", Severity::Info, 1.0),
                ("F", Severity::Critical, 5.0),
                ("H", Severity::Critical, 3.0),
                ("K", Severity::SeoSuggestion, 2.0),
            ]
        );
    }

    #[test]
    fn description_html_defaults_to_disallowed() {
        let cfg: RuleConfig =
            serde_json::from_str(r#"{"rule_id": "H", "type": "description_html"}"#).unwrap();
        assert_eq!(cfg.kind, RuleKind::DescriptionHtml { allow_html: false });
    }

    #[test]
    fn keyword_in_description_defaults_to_one_occurrence() {
        let cfg: RuleConfig =
            serde_json::from_str(r#"{"rule_id": "K", "type": "keyword_in_description"}"#).unwrap();
        assert_eq!(cfg.kind, RuleKind::KeywordInDescription { min_occurrences: 1 });
    }

    #[test]
    fn severity_override_accepts_any_casing() {
        let cfg: RuleConfig = serde_json::from_str(
            r#"{"rule_id": "C", "type": "title_capitalization", "severity": "seo_suggestion"}"#,
        )
        .unwrap();
        assert_eq!(cfg.severity, Some(Severity::SeoSuggestion));

        let json = r#"{"marketplace_name": "X", "rules": [
            {"rule_id": "C", "type": "title_capitalization", "severity": "fatal"}
        ]}"#;
        assert_matches!(ProfileConfig::from_json(json), Err(CoreError::Config(_)));
    }

    #[test]
    fn unknown_rule_type_is_a_config_error() {
        let json = r#"{"marketplace_name": "X", "rules": [{"rule_id": "Q", "type": "quantum"}]}"#;
        assert_matches!(ProfileConfig::from_json(json), Err(CoreError::Config(_)));
    }

    #[test]
    fn missing_parameter_is_a_config_error() {
        let json = r#"{"marketplace_name": "X", "rules": [{"rule_id": "T", "type": "title_length", "min_length": 3}]}"#;
        assert_matches!(ProfileConfig::from_json(json), Err(CoreError::Config(_)));
    }

    #[test]
    fn build_applies_profile_validation() {
        let json = r#"{"marketplace_name": "X", "rules": [
            {"rule_id": "T", "type": "keyword_in_title"},
            {"rule_id": "T", "type": "required_category"}
        ]}"#;
        let err = ProfileConfig::from_json(json).unwrap().build().unwrap_err();
        assert_matches!(err, CoreError::DuplicateRule { .. });

        let json = r#"{"marketplace_name": "X", "rules": [
            {"rule_id": "W", "type": "keyword_in_title", "weight": 0}
        ]}"#;
        let err = ProfileConfig::from_json(json).unwrap().build().unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn empty_rule_list_builds_empty_profile() {
        let profile = ProfileConfig::from_json(r#"{"marketplace_name": "Meesho"}"#)
            .unwrap()
            .build()
            .unwrap();
        assert!(profile.is_empty());
    }
}
