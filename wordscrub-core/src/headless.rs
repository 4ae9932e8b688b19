// wordscrub-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for a full, one-shot run without any CLI plumbing:
//! load a blocklist file, scrub a path, return the totals.

use std::path::Path;
use std::sync::Arc;

use crate::config::{load_blocklist, ScrubOptions};
use crate::errors::ScrubError;
use crate::stats::ScrubReport;
use crate::walker::Scrubber;

/// Loads the blocklist at `blocklist_path` and scrubs `input` with `options`.
pub async fn headless_scrub<P, Q>(
    input: P,
    blocklist_path: Q,
    options: ScrubOptions,
) -> Result<ScrubReport, ScrubError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let blocklist = load_blocklist(blocklist_path).await?;
    let scrubber = Scrubber::with_options(Arc::new(blocklist), options);
    scrubber.scrub_path(input).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::derive_output_path;

    #[test_log::test(tokio::test)]
    async fn test_headless_scrub_single_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("notes.txt");
        let blocklist = dir.path().join("bad-words.txt");
        let out = dir.path().join("out");
        std::fs::write(&input, "hello darkness my old friend")?;
        std::fs::write(&blocklist, "dark old")?;

        let report = headless_scrub(
            &input,
            &blocklist,
            ScrubOptions::default().with_output_root(&out).with_worker_budget(2),
        )
        .await?;

        assert_eq!(report.tokens_total, 5);
        assert_eq!(report.tokens_removed, 2);
        assert!(derive_output_path(&input, &out).is_file());
        Ok(())
    }

    #[tokio::test]
    async fn test_headless_scrub_missing_blocklist() {
        let dir = tempfile::tempdir().unwrap();
        let result = headless_scrub(
            dir.path(),
            dir.path().join("nope.txt"),
            ScrubOptions::default().with_output_root(dir.path().join("out")),
        )
        .await;
        assert!(matches!(result, Err(ScrubError::Read { .. })));
    }
}
