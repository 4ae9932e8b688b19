//! This file defines the command-line interface (CLI) for the wordscrub application
//! and resolves parsed arguments into a [`RunConfig`].
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::env;
use std::path::PathBuf;

use wordscrub_core::{OutputOrder, ScrubOptions, DEFAULT_BLOCKLIST_FILENAME, DEFAULT_WORKER_BUDGET};

use crate::logger::level_from_flags;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wordscrub",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip blocklisted words from a file or directory tree",
    long_about = "wordscrub reads every file under a path, drops each whitespace-separated word that contains an entry of the blocklist, and writes the remaining words, one per line, to a mirrored tree in which every directory and file name ends in '-clean'.",
)]
pub struct Cli {
    /// The target file or directory.
    #[arg(long, short = 'p', value_name = "PATH", default_value = ".", env = "WORDSCRUB_PATH", help = "The path of the target file or directory. May also be passed after all flags as a positional argument.")]
    pub path: PathBuf,

    /// The output directory.
    #[arg(long, short = 'o', value_name = "DIR", default_value = ".", env = "WORDSCRUB_OUT", help = "The output directory.")]
    pub out: PathBuf,

    /// The blocklist file.
    #[arg(long, short = 'b', value_name = "FILE", env = "WORDSCRUB_BLOCKLIST", help = "The list of words to be stripped (default: bad-words.txt beside the executable).")]
    pub bad: Option<PathBuf>,

    /// Concurrent worker count per file.
    #[arg(
        long,
        short = 't',
        value_name = "N",
        default_value_t = DEFAULT_WORKER_BUDGET as u32,
        env = "WORDSCRUB_THREADS",
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Concurrent worker count."
    )]
    pub threads: u32,

    /// Keep surviving words in their original order.
    #[arg(long, help = "Write surviving words in their original order instead of as workers finish them.")]
    pub ordered: bool,

    /// Print the final report as JSON.
    #[arg(long, help = "Print the final report as JSON on stdout.")]
    pub json: bool,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short = 'd', conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Trailing words form the input path, joined by single spaces.
    #[arg(value_name = "PATH", help = "Target path; overrides --path. Several words are joined with spaces.")]
    pub positional: Vec<String>,
}

/// Everything a run needs, with defaults resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub blocklist: PathBuf,
    pub options: ScrubOptions,
    pub json: bool,
}

impl Cli {
    pub fn log_level(&self) -> Option<LevelFilter> {
        level_from_flags(self.quiet, self.debug)
    }

    /// The input path: trailing positional words win over `--path`.
    pub fn input_path(&self) -> PathBuf {
        if self.positional.is_empty() {
            self.path.clone()
        } else {
            PathBuf::from(self.positional.join(" "))
        }
    }

    pub fn resolve(&self) -> Result<RunConfig> {
        let blocklist = match &self.bad {
            Some(path) => path.clone(),
            None => default_blocklist_path()?,
        };
        let order = if self.ordered { OutputOrder::Original } else { OutputOrder::Arrival };

        Ok(RunConfig {
            input: self.input_path(),
            blocklist,
            options: ScrubOptions::default()
                .with_output_root(&self.out)
                .with_worker_budget(self.threads as usize)
                .with_order(order),
            json: self.json,
        })
    }
}

/// `bad-words.txt` in the directory holding the running executable.
pub fn default_blocklist_path() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe.parent().map(PathBuf::from).unwrap_or_default();
    Ok(dir.join(DEFAULT_BLOCKLIST_FILENAME))
}
