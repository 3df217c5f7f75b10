//! `listcheck-core` -- marketplace listing compliance engine.
//!
//! Evaluates a [`Listing`] against the ordered rules of a
//! [`MarketplaceProfile`] and produces a weighted [`ComplianceReport`].
//! Everything in this crate is pure logic: no I/O, no async, no global
//! mutable state. Listings and profiles are built by the caller.

pub mod config;
pub mod engine;
pub mod error;
pub mod issue;
pub mod listing;
pub mod presets;
pub mod profile;
pub mod report;
pub mod rules;
pub mod severity;
mod text;

pub use config::{ProfileConfig, RuleConfig, RuleKind};
pub use engine::{evaluate_listing, ComplianceEngine};
pub use error::CoreError;
pub use issue::{Issue, IssueDetails};
pub use listing::{AttributeValue, Listing};
pub use profile::MarketplaceProfile;
pub use report::{BatchSummary, ComplianceReport};
pub use rules::ComplianceRule;
pub use severity::Severity;
