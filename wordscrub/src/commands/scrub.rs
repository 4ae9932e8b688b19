//! The scrub command: load the blocklist, walk the input, report the totals.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io;
use std::sync::Arc;

use wordscrub_core::{load_blocklist, ScrubReport, Scrubber};

use crate::cli::RunConfig;
use crate::ui::output_format;

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Runs one scrub and returns its totals without printing them.
pub async fn run_scrub(config: &RunConfig) -> Result<ScrubReport> {
    info!("Starting wordscrub operation.");
    debug!("Resolved run configuration: {:?}", config);

    let blocklist = load_blocklist(&config.blocklist)
        .await
        .with_context(|| format!("Failed to load blocklist {}", config.blocklist.display()))?;
    let scrubber = Scrubber::with_options(Arc::new(blocklist), config.options.clone());

    let report = scrubber
        .scrub_path(&config.input)
        .await
        .with_context(|| format!("Failed to scrub {}", config.input.display()))?;

    info!("wordscrub operation completed.");
    Ok(report)
}

/// Runs one scrub and prints the report to stdout.
pub async fn run_and_report(config: &RunConfig) -> Result<ScrubReport> {
    let report = run_scrub(config).await?;
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal() && !config.json;
    let mut writer = stdout.lock();
    output_format::print_report(&mut writer, &report, config.json, supports_color)?;
    Ok(report)
}
