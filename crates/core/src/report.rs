//! Evaluation output.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::issue::Issue;

const RULE_LINE: &str = "-------------------------------------------------------------";

/// Result of evaluating one listing against one marketplace profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub listing_id: String,
    pub marketplace_name: String,
    /// Weighted share of passed rules, `0.0..=100.0`.
    pub compliance_score: f64,
    /// Violations in profile rule order.
    pub issues: Vec<Issue>,
    /// False iff at least one CRITICAL issue is present.
    pub is_compliant: bool,
}

impl ComplianceReport {
    /// The score on a 0-10 scale.
    pub fn score_out_of_ten(&self) -> f64 {
        self.compliance_score / 10.0
    }

    pub fn critical_issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity.is_critical())
    }
}

impl fmt::Display for ComplianceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "--- Compliance Report for Listing '{}' on '{}' ---",
            self.listing_id, self.marketplace_name
        )?;
        writeln!(f, "Compliance Score: {:.2}%", self.compliance_score)?;
        writeln!(
            f,
            "Overall Compliant: {}",
            if self.is_compliant {
                "Yes"
            } else {
                "No (Critical Issues Found)"
            }
        )?;

        if self.issues.is_empty() {
            writeln!(f, "No issues found.")?;
        } else {
            writeln!(f, "Issues Found:")?;
            for issue in &self.issues {
                writeln!(
                    f,
                    "  - [{}] Rule ID: {}: {}",
                    issue.severity, issue.rule_id, issue.message
                )?;
                if let Some(details) = &issue.details {
                    let rendered =
                        serde_json::to_string(details).map_err(|_| fmt::Error)?;
                    writeln!(f, "    Details: {rendered}")?;
                }
            }
        }
        writeln!(f, "{RULE_LINE}")
    }
}

// ---------------------------------------------------------------------------
// Batch summary
// ---------------------------------------------------------------------------

/// Reports for several listings evaluated against the same profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub marketplace_name: String,
    pub total: usize,
    pub compliant_count: usize,
    /// Percentage of compliant listings, two decimals; `0.0` for an empty batch.
    pub compliance_rate: f64,
    pub reports: Vec<ComplianceReport>,
}

impl BatchSummary {
    pub fn from_reports(marketplace_name: &str, reports: Vec<ComplianceReport>) -> Self {
        let total = reports.len();
        let compliant_count = reports.iter().filter(|r| r.is_compliant).count();
        let compliance_rate = if total == 0 {
            0.0
        } else {
            round2(compliant_count as f64 / total as f64 * 100.0)
        };
        Self {
            marketplace_name: marketplace_name.to_string(),
            total,
            compliant_count,
            compliance_rate,
            reports,
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Batch on '{}': {}/{} listings compliant ({:.2}%)",
            self.marketplace_name, self.compliant_count, self.total, self.compliance_rate
        )
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;

    fn report(issues: Vec<Issue>, is_compliant: bool) -> ComplianceReport {
        ComplianceReport {
            listing_id: "ABC789".into(),
            marketplace_name: "Amazon".into(),
            compliance_score: 87.5,
            issues,
            is_compliant,
        }
    }

    #[test]
    fn renders_clean_report() {
        let text = report(vec![], true).to_string();
        assert!(text.starts_with("--- Compliance Report for Listing 'ABC789' on 'Amazon' ---\n"));
        assert!(text.contains("Compliance Score: 87.50%\n"));
        assert!(text.contains("Overall Compliant: Yes\n"));
        assert!(text.contains("No issues found.\n"));
        assert!(text.ends_with(&format!("{RULE_LINE}\n")));
    }

    #[test]
    fn renders_issues_with_details() {
        let issues = vec![
            Issue::new("AMZ_TITLE_LEN", "Title length is 5.", Severity::Critical)
                .with_detail("current_length", 5),
            Issue::new("AMZ_TITLE_CASE", "Check case.", Severity::Info),
        ];
        let text = report(issues, false).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[2], "Overall Compliant: No (Critical Issues Found)");
        assert_eq!(lines[3], "Issues Found:");
        assert_eq!(lines[4], "  - [CRITICAL] Rule ID: AMZ_TITLE_LEN: Title length is 5.");
        assert_eq!(lines[5], "    Details: {\"current_length\":5}");
        assert_eq!(lines[6], "  - [INFO] Rule ID: AMZ_TITLE_CASE: Check case.");
        assert_eq!(lines[7], RULE_LINE);
    }

    #[test]
    fn rendering_leaves_report_untouched() {
        let original = report(vec![Issue::new("R", "m", Severity::Warning)], true);
        let copy = original.clone();
        let _ = original.to_string();
        assert_eq!(original, copy);
    }

    #[test]
    fn score_out_of_ten_scales_down() {
        assert_eq!(report(vec![], true).score_out_of_ten(), 8.75);
    }

    #[test]
    fn critical_issues_filters_by_severity() {
        let issues = vec![
            Issue::new("A", "a", Severity::Critical),
            Issue::new("B", "b", Severity::Warning),
            Issue::new("C", "c", Severity::Critical),
        ];
        let r = report(issues, false);
        let ids: Vec<&str> = r.critical_issues().map(|i| i.rule_id.as_str()).collect();
        assert_eq!(ids, ["A", "C"]);
    }

    #[test]
    fn empty_batch_has_zero_rate() {
        let summary = BatchSummary::from_reports("Amazon", vec![]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.compliance_rate, 0.0);
    }

    #[test]
    fn batch_summary_line() {
        let summary = BatchSummary::from_reports(
            "Flipkart",
            vec![report(vec![], true), report(vec![], false)],
        );
        assert_eq!(
            summary.to_string(),
            "Batch on 'Flipkart': 1/2 listings compliant (50.00%)\n"
        );
    }

    #[test]
    fn report_serializes_for_downstream_consumers() {
        let value = serde_json::to_value(report(vec![], true)).unwrap();
        assert_eq!(value["listing_id"], "ABC789");
        assert_eq!(value["compliance_score"], 87.5);
        assert_eq!(value["is_compliant"], true);
        assert!(value["issues"].as_array().unwrap().is_empty());
    }
}
