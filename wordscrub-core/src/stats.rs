// wordscrub-core/src/stats.rs
//! Run-wide counters.
//!
//! One `ScrubStats` is created per run and shared by `Arc` with every worker.
//! The counters are plain atomics: increments never need to be ordered with
//! respect to anything else, so `Relaxed` is enough, and the final values are
//! read only after every pipeline has been joined.
//!
//! License: MIT OR APACHE 2.0

use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct ScrubStats {
    tokens_total: AtomicU64,
    tokens_removed: AtomicU64,
    files: AtomicU64,
}

impl ScrubStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the token count of a freshly tokenized file.
    pub fn add_total(&self, n: u64) {
        self.tokens_total.fetch_add(n, Ordering::Relaxed);
    }

    /// Records one dropped token.
    pub fn record_removed(&self) {
        self.tokens_removed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records one file whose pipeline completed.
    pub fn record_file(&self) {
        self.files.fetch_add(1, Ordering::Relaxed);
    }

    pub fn tokens_total(&self) -> u64 {
        self.tokens_total.load(Ordering::Relaxed)
    }

    pub fn tokens_removed(&self) -> u64 {
        self.tokens_removed.load(Ordering::Relaxed)
    }

    pub fn files(&self) -> u64 {
        self.files.load(Ordering::Relaxed)
    }

    /// Snapshots the counters for display.
    pub fn report(&self) -> ScrubReport {
        let tokens_total = self.tokens_total();
        let tokens_removed = self.tokens_removed();
        ScrubReport {
            files: self.files(),
            tokens_total,
            tokens_removed,
            tokens_kept: tokens_total.saturating_sub(tokens_removed),
        }
    }
}

/// Final figures of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScrubReport {
    pub files: u64,
    pub tokens_total: u64,
    pub tokens_removed: u64,
    pub tokens_kept: u64,
}

impl fmt::Display for ScrubReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bad words were removed out of {} words.",
            self.tokens_removed, self.tokens_total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_report_snapshot() {
        let stats = ScrubStats::new();
        stats.add_total(5);
        stats.record_removed();
        stats.record_removed();
        stats.record_file();

        let report = stats.report();
        assert_eq!(report.files, 1);
        assert_eq!(report.tokens_total, 5);
        assert_eq!(report.tokens_removed, 2);
        assert_eq!(report.tokens_kept, 3);
        assert_eq!(report.to_string(), "2 bad words were removed out of 5 words.");
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let stats = Arc::new(ScrubStats::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stats = Arc::clone(&stats);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        stats.record_removed();
                        stats.add_total(2);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.tokens_removed(), 8000);
        assert_eq!(stats.tokens_total(), 16000);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = ScrubReport { files: 2, tokens_total: 10, tokens_removed: 4, tokens_kept: 6 };
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["tokens_removed"], 4);
        assert_eq!(json["tokens_total"], 10);
        assert_eq!(json["files"], 2);
    }
}
