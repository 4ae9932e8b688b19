//! Console output helpers: error messages on stderr and the final report on stdout.
//!
//! Colors are applied only when the caller says the target is a terminal.
//! License: MIT OR Apache-2.0

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;

use wordscrub_core::ScrubReport;

pub fn print_error_message<W: Write>(writer: &mut W, message: &str, enable_colors: bool) -> Result<()> {
    if enable_colors {
        writeln!(writer, "{} {}", "Error:".red().bold(), message.red())?;
    } else {
        writeln!(writer, "Error: {}", message)?;
    }
    Ok(())
}

/// Prints the run totals, either as the classic one-line summary or as JSON.
pub fn print_report<W: Write>(
    writer: &mut W,
    report: &ScrubReport,
    as_json: bool,
    enable_colors: bool,
) -> Result<()> {
    if as_json {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)?;
    } else if enable_colors {
        writeln!(
            writer,
            "{} bad words were removed out of {} words.",
            report.tokens_removed.red().bold(),
            report.tokens_total.green().bold()
        )?;
    } else {
        writeln!(writer, "{}", report)?;
    }
    Ok(())
}
