use anyhow::bail;
use clap::ValueEnum;

use crate::cli::OutputFormat;

pub const ENV_PROFILE: &str = "LISTCHECK_PROFILE";
pub const ENV_FORMAT: &str = "LISTCHECK_FORMAT";

/// Profile used when neither `--profile` nor `LISTCHECK_PROFILE` is given.
pub const DEFAULT_PROFILE: &str = listcheck_core::presets::PRESET_AMAZON;

/// CLI defaults loaded from environment variables.
///
/// Command-line flags take precedence over these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Preset name or path to a profile JSON file.
    pub profile: String,
    pub format: OutputFormat,
}

impl CliConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var             | Default  |
    /// |---------------------|----------|
    /// | `LISTCHECK_PROFILE` | `amazon` |
    /// | `LISTCHECK_FORMAT`  | `text`   |
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CliConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let profile = lookup(ENV_PROFILE)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PROFILE.into());

        let format = match lookup(ENV_FORMAT) {
            None => OutputFormat::default(),
            Some(raw) => match OutputFormat::from_str(raw.trim(), true) {
                Ok(format) => format,
                Err(_) => bail!("{ENV_FORMAT} must be 'text' or 'json', got '{raw}'"),
            },
        };

        Ok(Self { profile, format })
    }

    /// Overlay command-line flags on the environment defaults.
    pub fn with_overrides(mut self, profile: Option<String>, format: Option<OutputFormat>) -> Self {
        if let Some(profile) = profile {
            self.profile = profile;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
