// wordscrub-core/src/config.rs
//! Configuration management for `wordscrub-core`.
//!
//! This module defines the run options consumed by the [`Scrubber`](crate::Scrubber)
//! and the loader for blocklist files. A blocklist file holds one blocked
//! substring per whitespace-separated word, in whatever encoding the inputs use.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::errors::ScrubError;
use wordscrub_matcher::Blocklist;

/// Marker appended to every segment of a derived output path.
pub const CLEAN_SUFFIX: &str = "-clean";

/// Default number of concurrent filtering workers per file.
pub const DEFAULT_WORKER_BUDGET: usize = 100;

/// File name of the blocklist looked up beside the executable when none is given.
pub const DEFAULT_BLOCKLIST_FILENAME: &str = "bad-words.txt";

/// Capacity of the intake and output channels of a file pipeline.
pub const QUEUE_DEPTH: usize = 1024;

/// Order in which surviving tokens are written to an output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputOrder {
    /// Tokens are written as workers produce them. Order across workers is unspecified.
    #[default]
    Arrival,
    /// Tokens are buffered per file and written in their original order.
    Original,
}

/// Resolved options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrubOptions {
    /// Directory the mirrored output tree is rooted at. `"."` means the working directory.
    pub output_root: PathBuf,
    /// Upper bound on concurrent workers per file. Values below 1 are treated as 1.
    pub worker_budget: usize,
    pub order: OutputOrder,
}

impl Default for ScrubOptions {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            worker_budget: DEFAULT_WORKER_BUDGET,
            order: OutputOrder::Arrival,
        }
    }
}

impl ScrubOptions {
    pub fn with_output_root<P: Into<PathBuf>>(mut self, output_root: P) -> Self {
        self.output_root = output_root.into();
        self
    }

    pub fn with_worker_budget(mut self, worker_budget: usize) -> Self {
        self.worker_budget = worker_budget;
        self
    }

    pub fn with_order(mut self, order: OutputOrder) -> Self {
        self.order = order;
        self
    }
}

/// Loads a blocklist from a whitespace-separated file.
///
/// The file is not decoded: entries are kept as raw bytes and compared with
/// tokens byte for byte.
pub async fn load_blocklist<P: AsRef<Path>>(path: P) -> Result<Blocklist, ScrubError> {
    let path = path.as_ref();
    info!("Loading blocklist from: {}", path.display());
    let raw = tokio::fs::read(path).await.map_err(|source| ScrubError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let blocklist = Blocklist::from_text(&raw).map_err(|e| ScrubError::Blocklist {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if blocklist.is_empty() {
        info!("Blocklist {} is empty; every token will pass.", path.display());
    } else {
        info!("Loaded {} blocklist entries from {}.", blocklist.len(), path.display());
    }
    debug!(
        "Blocklist entries: {:?}",
        blocklist
            .entries()
            .iter()
            .map(|e| String::from_utf8_lossy(e))
            .collect::<Vec<_>>()
    );
    Ok(blocklist)
}
