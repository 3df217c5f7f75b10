//! The product listing under evaluation.
//!
//! A [`Listing`] is built by an upstream collaborator (ingestion, AI
//! extraction, a JSON file) and handed to the engine by shared reference.
//! Rules only ever see `&Listing`, so nothing can mutate it mid-evaluation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single attribute value. Attributes are free-form on the marketplace
/// side, but rules only need to distinguish these shapes. JSON `null`
/// maps to [`AttributeValue::Null`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Null,
}

impl AttributeValue {
    /// Whether the value counts as "present" for required-attribute checks.
    ///
    /// Null, empty text, zero, NaN and `false` are all empty. Whitespace-only
    /// text counts as present.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::Null => false,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Stable external identifier.
    pub product_id: String,
    pub title: String,
    pub description: String,
    /// Ordered image references (URLs or storage keys).
    #[serde(default)]
    pub images: Vec<String>,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeValue>,
    /// SEO target keywords, in priority order.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Listing {
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Insert or replace an attribute, returning `self` for chaining.
    pub fn with_attribute(mut self, name: &str, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }
}
