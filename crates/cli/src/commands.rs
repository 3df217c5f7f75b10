//! Subcommand handlers. Each one writes its output to the given writer so
//! the binary and the tests share the same code path.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use listcheck_core::{presets, ComplianceEngine, Listing, MarketplaceProfile, ProfileConfig};

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::CliConfig;

/// Process exit status for `check --strict` when a listing is non-compliant.
pub const EXIT_NON_COMPLIANT: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NonCompliant,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::NonCompliant => EXIT_NON_COMPLIANT,
        }
    }
}

/// Dispatch a parsed command line.
///
/// `load_env` is only called by commands that read profile or format
/// settings, so a bad environment never breaks `presets`.
pub fn run<F>(cli: Cli, load_env: F, out: &mut dyn Write) -> anyhow::Result<Outcome>
where
    F: FnOnce() -> anyhow::Result<CliConfig>,
{
    match cli.command {
        Commands::Check {
            profile,
            format,
            strict,
            listings,
        } => {
            let config = load_env()?.with_overrides(profile, format);
            let profile = load_profile(&config.profile)?;
            let listings = listings
                .iter()
                .map(|p| load_listing(p))
                .collect::<anyhow::Result<Vec<_>>>()?;
            check(profile, &listings, config.format, strict, out)
        }
        Commands::Presets => {
            list_presets(out)?;
            Ok(Outcome::Success)
        }
        Commands::ShowProfile { profile } => {
            let config = load_env()?.with_overrides(profile, None);
            show_profile(&load_profile(&config.profile)?, out)?;
            Ok(Outcome::Success)
        }
    }
}

/// Resolve a preset name (case-insensitive) or a path to a profile JSON file.
pub fn load_profile(source: &str) -> anyhow::Result<MarketplaceProfile> {
    if presets::NAMES.iter().any(|n| n.eq_ignore_ascii_case(source)) {
        return Ok(presets::by_name(source)?);
    }

    let raw = fs::read_to_string(source).with_context(|| {
        format!(
            "Profile '{source}' is neither a preset ({}) nor a readable file",
            presets::NAMES.join(", ")
        )
    })?;
    let profile = ProfileConfig::from_json(&raw)
        .and_then(ProfileConfig::build)
        .with_context(|| format!("Invalid profile file '{source}'"))?;

    tracing::info!(
        source,
        marketplace = profile.marketplace_name(),
        rule_count = profile.len(),
        "Loaded profile",
    );
    Ok(profile)
}

pub fn load_listing(path: &Path) -> anyhow::Result<Listing> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read listing '{}'", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse listing '{}'", path.display()))
}

/// Evaluate listings and render the result.
///
/// Text output prints every report, plus a summary line when more than one
/// listing was checked. JSON output prints the lone report object, or the
/// whole batch summary for several listings.
pub fn check(
    profile: MarketplaceProfile,
    listings: &[Listing],
    format: OutputFormat,
    strict: bool,
    out: &mut dyn Write,
) -> anyhow::Result<Outcome> {
    let engine = ComplianceEngine::new(profile);
    let summary = engine.evaluate_batch(listings);
    tracing::info!(
        marketplace = %summary.marketplace_name,
        total = summary.total,
        compliant = summary.compliant_count,
        rate = summary.compliance_rate,
        "Checked listings",
    );

    match format {
        OutputFormat::Text => {
            for report in &summary.reports {
                write!(out, "{report}")?;
            }
            if summary.total > 1 {
                write!(out, "{summary}")?;
            }
        }
        OutputFormat::Json => {
            match summary.reports.as_slice() {
                [single] => serde_json::to_writer_pretty(&mut *out, single)?,
                _ => serde_json::to_writer_pretty(&mut *out, &summary)?,
            }
            writeln!(out)?;
        }
    }

    if strict && summary.compliant_count < summary.total {
        tracing::warn!(
            non_compliant = summary.total - summary.compliant_count,
            total = summary.total,
            "Strict mode: non-compliant listings found",
        );
        return Ok(Outcome::NonCompliant);
    }
    Ok(Outcome::Success)
}

pub fn list_presets(out: &mut dyn Write) -> anyhow::Result<()> {
    for name in presets::NAMES {
        let profile = presets::by_name(name)?;
        let ids: Vec<&str> = profile.rules().iter().map(|r| r.rule_id()).collect();
        writeln!(out, "{name}: {}", ids.join(", "))?;
    }
    Ok(())
}

pub fn show_profile(profile: &MarketplaceProfile, out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(
        out,
        "Profile '{}': {} rules, total weight {}",
        profile.marketplace_name(),
        profile.len(),
        profile.total_weight()
    )?;
    for rule in profile.rules() {
        writeln!(
            out,
            "  {:<20} {:<14} {:>5} {}",
            rule.rule_id(),
            rule.severity().as_str(),
            rule.weight(),
            rule.description()
        )?;
    }
    Ok(())
}
