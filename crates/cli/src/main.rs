//! `listcheck` -- check marketplace listings against compliance profiles.
//!
//! # Environment variables
//!
//! | Variable            | Default  | Description                      |
//! |---------------------|----------|----------------------------------|
//! | `LISTCHECK_PROFILE` | `amazon` | Preset name or profile JSON path |
//! | `LISTCHECK_FORMAT`  | `text`   | Output format, `text` or `json`  |
//!
//! Logging is filtered by `RUST_LOG` and written to stderr; reports go to
//! stdout.

use std::io::Write;

use clap::Parser;
use listcheck_cli::cli::Cli;
use listcheck_cli::commands::{self, Outcome};
use listcheck_cli::config::CliConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "listcheck=info,listcheck_cli=info,listcheck_core=info";

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = commands::run(cli, CliConfig::from_env, &mut out)?;
    out.flush()?;

    if outcome == Outcome::NonCompliant {
        std::process::exit(outcome.exit_code());
    }
    Ok(())
}
