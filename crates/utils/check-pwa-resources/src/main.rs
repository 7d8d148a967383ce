//! # PWA Resource Check Utility
//!
//! Verifies that the icons and screenshots referenced by the web manifest exist
//! with their declared sizes before a release.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --package check-pwa-resources -- --public-dir exchange-web/public
//! ```
//!
//! The directory falls back to `PWA_PUBLIC_DIR`, then `exchange-web/public`.
//! Exit status is non-zero when a required file is missing or has the wrong size.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use check_pwa_resources::check::check_public_dir;
use check_pwa_resources::report::render_text;
use clap::Parser;
use lib_utils::get_env_or;
use tracing_subscriber::EnvFilter;

const DEFAULT_PUBLIC_DIR: &str = "exchange-web/public";

#[derive(Parser, Debug)]
#[command(name = "check-pwa-resources")]
#[command(about = "Check PWA icons and screenshots before a release", long_about = None)]
struct Args {
    /// Directory holding the manifest resources
    #[arg(short, long)]
    public_dir: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("check_pwa_resources=info,warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    init_logging();
    let args = Args::parse();

    let public_dir = args
        .public_dir
        .unwrap_or_else(|| PathBuf::from(get_env_or("PWA_PUBLIC_DIR", DEFAULT_PUBLIC_DIR)));
    tracing::info!(dir = %public_dir.display(), "Checking PWA resources");

    let report = check_public_dir(&public_dir)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        print!("{}", render_text(&report));
    }

    if report.passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::warn!(failures = report.failures(), "Resource check failed");
        Ok(ExitCode::FAILURE)
    }
}
