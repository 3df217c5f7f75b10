//! A single rule violation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::severity::Severity;

/// Machine-readable context attached to an issue (measured lengths,
/// matched words, missing keywords, ...).
pub type IssueDetails = serde_json::Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub rule_id: String,
    pub message: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<IssueDetails>,
}

impl Issue {
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            severity,
            details: None,
        }
    }

    /// Attach one detail entry, creating the details map on first use.
    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(IssueDetails::new)
            .insert(key.to_string(), value.into());
        self
    }

    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref().and_then(|d| d.get(key))
    }
}
