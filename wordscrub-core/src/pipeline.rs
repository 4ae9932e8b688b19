// wordscrub-core/src/pipeline.rs
//! The per-file filtering pipeline.
//!
//! One pipeline handles exactly one input file:
//!
//! ```text
//!  tokens ──► intake ──► worker 0..N ──► output ──► writer ──► <derived path>
//! ```
//!
//! The producer feeds a bounded intake channel whose receiver is shared by all
//! workers. Workers drop blocked tokens (bumping the removed counter) and pass
//! survivors to a bounded output channel drained by a single writer task.
//! The pool is joined before the last output sender goes away, and the writer
//! is awaited after that, so a pipeline never returns before its file has been
//! flushed.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, trace};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;

use crate::config::{OutputOrder, QUEUE_DEPTH};
use crate::engine::TokenFilter;
use crate::errors::ScrubError;
use crate::stats::ScrubStats;

/// A token tagged with its position in the source file.
type Tagged = (usize, Vec<u8>);

type SharedIntake = Arc<Mutex<mpsc::Receiver<Tagged>>>;

/// Parameters of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    pub input: PathBuf,
    pub output: PathBuf,
    pub worker_budget: usize,
}

/// What a pipeline run did to one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileOutcome {
    pub tokens: u64,
    pub removed: u64,
    pub kept: u64,
    /// Number of workers actually spawned.
    pub workers: usize,
}

/// Workers spawned for a file: never more than there are tokens, and at least
/// one whenever there is any token at all.
pub fn effective_workers(worker_budget: usize, token_count: usize) -> usize {
    worker_budget.max(1).min(token_count)
}

/// Filters `tokens` through a worker pool and writes the survivors to `task.output`.
///
/// The caller is expected to have counted `tokens` into `stats` already; this
/// function only records removals.
pub async fn run_file_pipeline(
    task: &FileTask,
    tokens: Vec<Vec<u8>>,
    filter: Arc<dyn TokenFilter>,
    stats: Arc<ScrubStats>,
    order: OutputOrder,
) -> Result<FileOutcome, ScrubError> {
    let token_count = tokens.len();
    let workers = effective_workers(task.worker_budget, token_count);
    debug!(
        "Pipeline for {}: {} tokens, {} workers, filter '{}', output {}",
        task.input.display(),
        token_count,
        workers,
        filter.name(),
        task.output.display()
    );

    let (intake_tx, intake_rx) = mpsc::channel::<Tagged>(QUEUE_DEPTH);
    let (output_tx, output_rx) = mpsc::channel::<Tagged>(QUEUE_DEPTH);
    let intake_rx: SharedIntake = Arc::new(Mutex::new(intake_rx));

    let writer = tokio::spawn(write_output(task.output.clone(), output_rx, order));

    let mut pool = JoinSet::new();
    for id in 0..workers {
        pool.spawn(run_worker(
            id,
            Arc::clone(&intake_rx),
            output_tx.clone(),
            Arc::clone(&filter),
            Arc::clone(&stats),
        ));
    }
    // From here on only the workers hold these ends.
    drop(output_tx);
    drop(intake_rx);

    for tagged in tokens.into_iter().enumerate() {
        if intake_tx.send(tagged).await.is_err() {
            debug!("Intake for {} closed early; stopping producer.", task.input.display());
            break;
        }
    }
    drop(intake_tx);

    let mut removed = 0u64;
    let mut pool_error = None;
    while let Some(joined) = pool.join_next().await {
        match joined {
            Ok(worker_removed) => removed += worker_removed,
            Err(e) => {
                pool_error.get_or_insert(e);
            }
        }
    }

    // Every output sender is gone now, so the writer drains and finishes.
    let kept = writer.await??;
    if let Some(e) = pool_error {
        return Err(e.into());
    }

    Ok(FileOutcome {
        tokens: token_count as u64,
        removed,
        kept,
        workers,
    })
}

async fn run_worker(
    id: usize,
    intake: SharedIntake,
    output: mpsc::Sender<Tagged>,
    filter: Arc<dyn TokenFilter>,
    stats: Arc<ScrubStats>,
) -> u64 {
    let mut removed = 0u64;
    loop {
        let next = intake.lock().await.recv().await;
        let Some((index, token)) = next else { break };

        if filter.is_blocked(&token) {
            trace!("worker {} dropped token #{}", id, index);
            stats.record_removed();
            removed += 1;
            continue;
        }
        if output.send((index, token)).await.is_err() {
            // The writer is gone; its error is reported by the pipeline.
            break;
        }
    }
    removed
}

async fn write_output(
    path: PathBuf,
    mut output: mpsc::Receiver<Tagged>,
    order: OutputOrder,
) -> Result<u64, ScrubError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await.map_err(|source| ScrubError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    let file = fs::File::create(&path).await.map_err(|source| ScrubError::Write {
        path: path.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let mut written = 0u64;

    match order {
        OutputOrder::Arrival => {
            while let Some((_, token)) = output.recv().await {
                write_line(&mut writer, &path, &token).await?;
                written += 1;
            }
        }
        OutputOrder::Original => {
            let mut buffered = Vec::new();
            while let Some(tagged) = output.recv().await {
                buffered.push(tagged);
            }
            buffered.sort_unstable_by_key(|(index, _)| *index);
            for (_, token) in buffered {
                write_line(&mut writer, &path, &token).await?;
                written += 1;
            }
        }
    }

    writer.flush().await.map_err(|source| ScrubError::Write {
        path: path.clone(),
        source,
    })?;
    debug!("Wrote {} lines to {}", written, path.display());
    Ok(written)
}

async fn write_line(
    writer: &mut BufWriter<fs::File>,
    path: &Path,
    token: &[u8],
) -> Result<(), ScrubError> {
    let to_write_err = |source: std::io::Error| ScrubError::Write { path: path.to_path_buf(), source };
    writer.write_all(token).await.map_err(to_write_err)?;
    writer.write_all(b"\n").await.map_err(to_write_err)?;
    Ok(())
}
