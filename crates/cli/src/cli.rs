use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "listcheck", version, about = "Marketplace listing compliance checker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate listing JSON files against a marketplace profile.
    Check {
        #[arg(long, help = "Preset name or path to a profile JSON file")]
        profile: Option<String>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        #[arg(long, default_value_t = false, help = "Exit with status 2 if any listing is non-compliant")]
        strict: bool,
        #[arg(required = true)]
        listings: Vec<PathBuf>,
    },
    /// List the built-in marketplace presets.
    Presets,
    /// Print the rules of a profile.
    ShowProfile {
        #[arg(long, help = "Preset name or path to a profile JSON file")]
        profile: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
