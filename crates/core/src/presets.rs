//! Built-in reference marketplace profiles.

use crate::error::CoreError;
use crate::profile::MarketplaceProfile;
use crate::rules::{
    ComplianceRule, DescriptionHtmlRule, DescriptionLengthRule, ImageCountRule,
    KeywordInDescriptionRule, KeywordInTitleRule, RequiredAttributeRule, TitleCapitalizationRule,
    TitleForbiddenWordsRule, TitleLengthRule,
};
use crate::severity::Severity;

pub const PRESET_AMAZON: &str = "amazon";
pub const PRESET_FLIPKART: &str = "flipkart";

/// All preset names accepted by [`by_name`].
pub const NAMES: &[&str] = &[PRESET_AMAZON, PRESET_FLIPKART];

pub fn amazon() -> Result<MarketplaceProfile, CoreError> {
    MarketplaceProfile::new("Amazon")?
        .with_rule(TitleLengthRule::new("AMZ_TITLE_LEN", 10, 70).with_weight(10.0))?
        .with_rule(
            TitleCapitalizationRule::new("AMZ_TITLE_CASE")
                .with_severity(Severity::Info)
                .with_weight(1.0),
        )?
        .with_rule(
            TitleForbiddenWordsRule::new("AMZ_TITLE_FORBIDDEN", &["FAST", "Special Edition"])?
                .with_weight(5.0),
        )?
        .with_rule(DescriptionLengthRule::new("AMZ_DESC_LEN", 100).with_weight(8.0))?
        .with_rule(DescriptionHtmlRule::new("AMZ_DESC_HTML", false).with_weight(3.0))?
        .with_rule(ImageCountRule::new("AMZ_IMG_COUNT", 3, 7).with_weight(10.0))?
        .with_rule(RequiredAttributeRule::new("AMZ_ATTR_BRAND", "brand").with_weight(7.0))?
        .with_rule(
            RequiredAttributeRule::new("AMZ_ATTR_COLOR", "color")
                .with_severity(Severity::Warning)
                .with_weight(3.0),
        )?
        .with_rule(KeywordInTitleRule::new("AMZ_SEO_KEY_TITLE").with_weight(5.0))?
        .with_rule(KeywordInDescriptionRule::new("AMZ_SEO_KEY_DESC", 2).with_weight(3.0))
}

pub fn flipkart() -> Result<MarketplaceProfile, CoreError> {
    MarketplaceProfile::new("Flipkart")?
        .with_rule(TitleLengthRule::new("FLP_TITLE_LEN", 5, 60).with_weight(10.0))?
        .with_rule(DescriptionLengthRule::new("FLP_DESC_LEN", 50).with_weight(8.0))?
        .with_rule(ImageCountRule::new("FLP_IMG_COUNT", 2, 5).with_weight(10.0))?
        .with_rule(RequiredAttributeRule::new("FLP_ATTR_BRAND", "brand").with_weight(7.0))?
        .with_rule(KeywordInTitleRule::new("FLP_SEO_KEY_TITLE").with_weight(5.0))
}

/// Look up a preset by name, ignoring case.
pub fn by_name(name: &str) -> Result<MarketplaceProfile, CoreError> {
    match name.to_ascii_lowercase().as_str() {
        PRESET_AMAZON => amazon(),
        PRESET_FLIPKART => flipkart(),
        _ => Err(CoreError::Validation(format!(
            "Unknown marketplace preset '{name}'. Valid presets: {}",
            NAMES.join(", ")
        ))),
    }
}
