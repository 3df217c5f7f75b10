use listcheck_core::rules::{
    ComplianceRule, DescriptionHtmlRule, DescriptionLengthRule, ImageCountRule,
    KeywordInDescriptionRule, KeywordInTitleRule, PriceRangeRule, RequiredAttributeRule,
    TitleCapitalizationRule, TitleLengthRule,
};
use listcheck_core::{evaluate_listing, Listing, MarketplaceProfile, Severity};
use proptest::prelude::*;

const SEVERITIES: [Severity; 4] = [
    Severity::Critical,
    Severity::Warning,
    Severity::Info,
    Severity::SeoSuggestion,
];

fn make_rule(kind: usize, id: String) -> Box<dyn ComplianceRule> {
    match kind {
        0 => Box::new(TitleLengthRule::new(id, 10, 70)),
        1 => Box::new(TitleCapitalizationRule::new(id)),
        2 => Box::new(DescriptionLengthRule::new(id, 40)),
        3 => Box::new(DescriptionHtmlRule::new(id, false)),
        4 => Box::new(ImageCountRule::new(id, 2, 5)),
        5 => Box::new(RequiredAttributeRule::new(id, "brand")),
        6 => Box::new(KeywordInTitleRule::new(id)),
        7 => Box::new(KeywordInDescriptionRule::new(id, 2)),
        _ => Box::new(PriceRangeRule::new(id, 1.0, 500.0)),
    }
}

fn arb_profile() -> impl Strategy<Value = MarketplaceProfile> {
    prop::collection::vec((0usize..9, 0.1f64..20.0, 0usize..4), 0..12).prop_map(|specs| {
        let mut profile = MarketplaceProfile::new("Prop").unwrap();
        for (i, (kind, weight, sev)) in specs.into_iter().enumerate() {
            let mut rule = make_rule(kind, format!("R{i}"));
            rule.meta_mut().weight = weight;
            rule.meta_mut().severity = SEVERITIES[sev];
            profile.add_boxed_rule(rule).unwrap();
        }
        profile
    })
}

fn arb_listing() -> impl Strategy<Value = Listing> {
    (
        "[a-zA-Z0-9 ]{0,90}",
        "[a-zA-Z<>/ ]{0,200}",
        0usize..9,
        0.0f64..1000.0,
        prop::collection::vec("[a-z]{1,8}( [a-z]{1,8})?", 0..4),
        prop::option::of("[A-Za-z]{0,10}"),
    )
        .prop_map(|(title, description, n_images, price, keywords, brand)| {
            let listing = Listing {
                product_id: "PROP".into(),
                title,
                description,
                images: (0..n_images).map(|i| format!("{i}.jpg")).collect(),
                price,
                category: "Misc".into(),
                keywords,
                ..Default::default()
            };
            match brand {
                Some(b) => listing.with_attribute("brand", b),
                None => listing,
            }
        })
}

proptest! {
    #[test]
    fn score_is_within_bounds(profile in arb_profile(), listing in arb_listing()) {
        let report = evaluate_listing(&profile, &listing);
        prop_assert!((0.0..=100.0).contains(&report.compliance_score));
    }

    #[test]
    fn empty_profile_is_fully_compliant(listing in arb_listing()) {
        let profile = MarketplaceProfile::new("Empty").unwrap();
        let report = evaluate_listing(&profile, &listing);
        prop_assert_eq!(report.compliance_score, 100.0);
        prop_assert!(report.is_compliant);
    }

    #[test]
    fn score_extremes_match_outcomes(profile in arb_profile(), listing in arb_listing()) {
        let report = evaluate_listing(&profile, &listing);
        if report.issues.is_empty() {
            prop_assert_eq!(report.compliance_score, 100.0);
        }
        if !profile.is_empty() && report.issues.len() == profile.len() {
            prop_assert_eq!(report.compliance_score, 0.0);
        }
    }

    #[test]
    fn compliance_tracks_critical_issues(profile in arb_profile(), listing in arb_listing()) {
        let report = evaluate_listing(&profile, &listing);
        let has_critical = report.issues.iter().any(|i| i.severity == Severity::Critical);
        prop_assert_eq!(report.is_compliant, !has_critical);
    }

    #[test]
    fn issues_follow_rule_order(profile in arb_profile(), listing in arb_listing()) {
        let report = evaluate_listing(&profile, &listing);
        let positions: Vec<usize> = report
            .issues
            .iter()
            .map(|issue| {
                profile
                    .rules()
                    .iter()
                    .position(|r| r.rule_id() == issue.rule_id)
                    .unwrap()
            })
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn evaluation_is_idempotent(profile in arb_profile(), listing in arb_listing()) {
        let first = evaluate_listing(&profile, &listing);
        let second = evaluate_listing(&profile, &listing);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
