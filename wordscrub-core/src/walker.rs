// wordscrub-core/src/walker.rs
//! Tree walking.
//!
//! `Scrubber` visits a file or directory tree depth-first, children in lexical
//! order, and runs one [`run_file_pipeline`] per regular file. Files are
//! handled one after the other; each pipeline has finished writing its output
//! before the next path is looked at.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

use crate::config::ScrubOptions;
use crate::engine::TokenFilter;
use crate::errors::ScrubError;
use crate::paths::derive_output_path;
use crate::pipeline::{run_file_pipeline, FileOutcome, FileTask};
use crate::stats::{ScrubReport, ScrubStats};
use wordscrub_matcher::tokenize;

pub struct Scrubber {
    filter: Arc<dyn TokenFilter>,
    options: ScrubOptions,
    stats: Arc<ScrubStats>,
}

impl Scrubber {
    pub fn new(filter: Arc<dyn TokenFilter>) -> Self {
        Self::with_options(filter, ScrubOptions::default())
    }

    pub fn with_options(filter: Arc<dyn TokenFilter>, options: ScrubOptions) -> Self {
        Self {
            filter,
            options,
            stats: Arc::new(ScrubStats::new()),
        }
    }

    pub fn options(&self) -> &ScrubOptions {
        &self.options
    }

    /// The counters shared with every worker of this scrubber.
    pub fn stats(&self) -> &Arc<ScrubStats> {
        &self.stats
    }

    /// Scrubs every regular file reachable from `root` and returns the run totals.
    ///
    /// Stops at the first error. Output already written for earlier files is
    /// left in place.
    pub async fn scrub_path<P: AsRef<Path>>(&self, root: P) -> Result<ScrubReport, ScrubError> {
        let root = root.as_ref();
        info!(
            "Scrubbing {} into {} with up to {} workers per file",
            root.display(),
            self.options.output_root.display(),
            self.options.worker_budget
        );

        // Depth-first with an explicit stack; children are pushed in reverse so
        // they pop in lexical order.
        let mut pending = vec![root.to_path_buf()];
        while let Some(path) = pending.pop() {
            info!("{}", path.display());
            let metadata = fs::metadata(&path)
                .await
                .map_err(|e| ScrubError::from_stat(path.clone(), e))?;

            if metadata.is_dir() {
                let mut children = list_dir(&path).await?;
                children.reverse();
                pending.extend(children);
            } else if metadata.is_file() {
                self.scrub_file(&path).await?;
            } else {
                warn!("Skipping {}: not a regular file or directory", path.display());
            }
        }

        let report = self.stats.report();
        info!("Run complete: {:?}", report);
        Ok(report)
    }

    /// Runs the pipeline for one regular file.
    pub async fn scrub_file(&self, path: &Path) -> Result<FileOutcome, ScrubError> {
        let raw = fs::read(path).await.map_err(|source| ScrubError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let tokens = tokenize(&raw);
        self.stats.add_total(tokens.len() as u64);

        let task = FileTask {
            input: path.to_path_buf(),
            output: derive_output_path(path, &self.options.output_root),
            worker_budget: self.options.worker_budget,
        };
        let outcome = run_file_pipeline(
            &task,
            tokens,
            Arc::clone(&self.filter),
            Arc::clone(&self.stats),
            self.options.order,
        )
        .await?;
        self.stats.record_file();

        debug!(
            "{} -> {}: {} tokens, {} removed, {} kept",
            task.input.display(),
            task.output.display(),
            outcome.tokens,
            outcome.removed,
            outcome.kept
        );
        Ok(outcome)
    }
}

/// Lists the entries of `dir` sorted by file name.
async fn list_dir(dir: &Path) -> Result<Vec<PathBuf>, ScrubError> {
    let to_list_err = |source: std::io::Error| ScrubError::ListDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = fs::read_dir(dir).await.map_err(to_list_err)?;
    let mut children = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(to_list_err)? {
        children.push(entry.path());
    }
    children.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(children)
}
