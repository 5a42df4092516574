//! # Lottie Demo
//!
//! Regenerates the listing artifacts of a directory of Lottie animations:
//!
//! - an HTML demo page with one autoplaying `<lottie-player>` per animation
//! - a JSON manifest naming every animation, for downstream consumers
//!
//! ## Usage
//!
//! ```sh
//! lottie_demo                 # both artifacts, default paths
//! lottie_demo html            # demo page only
//! lottie_demo manifest        # manifest only
//! ```
//!
//! ## Architecture
//!
//! Each generator is one linear pipeline:
//! 1. **Scanning**: list the names in the source directory that match the suffix
//! 2. **Sorting**: order them lexicographically so output is reproducible
//! 3. **Rendering**: fill the HTML or JSON template
//! 4. **Writing**: overwrite the output file
//!
//! Any filesystem error aborts the run with a non-zero exit status.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod scanner;
mod utils;

use cli::Cli;
use config::Config;
use models::GenerationReport;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!(version = env!("CARGO_PKG_VERSION"), "lottie_demo starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let config = args.apply(config);
    config.validate()?;
    debug!(?config, "Effective configuration");

    let selection = args.selection();
    let mut reports: Vec<GenerationReport> = Vec::with_capacity(2);

    if selection.html {
        reports.push(check(outputs::generate(&config.html_job()).await)?);
    }
    if selection.manifest {
        reports.push(check(outputs::generate(&config.manifest_job()).await)?);
    }

    for report in &reports {
        info!(
            kind = %report.kind,
            output = %report.output.display(),
            entries = report.entries,
            bytes = report.bytes,
            "Artifact up to date"
        );
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

/// Log a failed generator run before it aborts the process.
fn check(result: error::Result<GenerationReport>) -> Result<GenerationReport, Box<dyn Error>> {
    result.map_err(|e| {
        error!(path = %e.path().display(), error = %e, "Generation failed; aborting");
        e.into()
    })
}
