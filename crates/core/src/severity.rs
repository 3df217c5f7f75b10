//! Issue severity levels.
//!
//! Only [`Severity::Critical`] affects overall compliance; every other level
//! lowers the score without flipping the compliance flag.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Wire names
// ---------------------------------------------------------------------------

pub const SEVERITY_CRITICAL: &str = "CRITICAL";
pub const SEVERITY_WARNING: &str = "WARNING";
pub const SEVERITY_INFO: &str = "INFO";
pub const SEVERITY_SEO_SUGGESTION: &str = "SEO_SUGGESTION";

/// All valid severity strings.
pub const VALID_SEVERITIES: &[&str] = &[
    SEVERITY_CRITICAL,
    SEVERITY_WARNING,
    SEVERITY_INFO,
    SEVERITY_SEO_SUGGESTION,
];

// ---------------------------------------------------------------------------
// Enum
// ---------------------------------------------------------------------------

/// Serializes as its upper-case wire name; deserializes from any casing of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum Severity {
    Critical,
    Warning,
    Info,
    SeoSuggestion,
}

impl Severity {
    /// Parse a severity from its wire name (case-insensitive).
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s.to_ascii_uppercase().as_str() {
            SEVERITY_CRITICAL => Ok(Self::Critical),
            SEVERITY_WARNING => Ok(Self::Warning),
            SEVERITY_INFO => Ok(Self::Info),
            SEVERITY_SEO_SUGGESTION => Ok(Self::SeoSuggestion),
            _ => Err(format!(
                "Invalid severity '{s}'. Must be one of: {}",
                VALID_SEVERITIES.join(", ")
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => SEVERITY_CRITICAL,
            Self::Warning => SEVERITY_WARNING,
            Self::Info => SEVERITY_INFO,
            Self::SeoSuggestion => SEVERITY_SEO_SUGGESTION,
        }
    }

    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Critical)
    }
}

impl TryFrom<String> for Severity {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str_value(&value)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
