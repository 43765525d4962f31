//! Main entry point for the debcontents CLI application.
//!
//! Downloads a mirror's Contents index for one architecture, counts files per
//! package and prints the packages owning the most files.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};

use debcontents::{Cli, contents, logging, mirror, report};

/// Application entry point.
///
/// Any failure is logged once and turns into exit code 1; nothing is printed
/// to stdout in that case.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Pick up DEBIAN_MIRROR / RUST_LOG from .env; a missing file is fine
    dotenv::dotenv().ok();

    // Diagnostics to stderr before anything can fail
    logging::init();

    let cli = Cli::parse();

    // Any failure is reported once, then exit 1 with nothing on stdout
    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Fetch, count and report, strictly in that order.
///
/// The compressed index is fully downloaded before decompression starts, and
/// the counts are complete before anything reaches stdout.
///
/// # Arguments
///
/// * `cli` - Parsed command-line arguments
///
/// # Returns
///
/// Returns `Ok(())` once the report is written, or the first download, read
/// or write error.
async fn run(cli: &Cli) -> Result<()> {
    // Resolve the mirror: HTTP(S) URL or local directory
    let source = mirror::open(&cli.mirror)?;

    // Download the whole compressed index into memory
    info!("Downloading: {}", source.location(&cli.arch));
    let compressed = source.fetch(&cli.arch).await?;

    // Stream it through the decoder, counting files per package
    let scan = contents::scan(compressed.as_slice())?;
    drop(compressed);
    info!(
        "Counted {} files across {} packages",
        scan.stats.counted(),
        scan.counts.len()
    );

    // Rank and print the top N; only the table goes to stdout
    let rows = report::top_packages(&scan.counts, cli.top);
    info!("Top {} packages by number of files:", cli.top);

    let mut stdout = std::io::stdout().lock();
    report::write_report(&mut stdout, &rows)?;

    Ok(())
}
