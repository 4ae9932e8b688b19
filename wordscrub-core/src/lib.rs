// wordscrub-core/src/lib.rs
//! # wordscrub Core Library
//!
//! `wordscrub-core` removes blocklisted words from a file or a whole directory
//! tree. Each regular file is split into whitespace-separated tokens, the tokens
//! are judged concurrently by a bounded pool of workers, and the survivors are
//! written one per line to a mirrored output tree in which every path segment
//! carries a `-clean` suffix.
//!
//! ## Modules
//!
//! * `config`: Run options, constants, and the blocklist file loader.
//! * `engine`: The `TokenFilter` trait the workers judge tokens with.
//! * `errors`: The `ScrubError` taxonomy.
//! * `paths`: Derivation of output paths.
//! * `pipeline`: The per-file worker pool and output writer.
//! * `stats`: Run-wide counters and the final report.
//! * `walker`: The `Scrubber`, which walks a tree and runs one pipeline per file.
//! * `headless`: One-shot convenience wrapper.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wordscrub_core::{load_blocklist, Scrubber, ScrubOptions};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let blocklist = load_blocklist("bad-words.txt").await?;
//!     let options = ScrubOptions::default().with_output_root("out").with_worker_budget(8);
//!     let scrubber = Scrubber::with_options(Arc::new(blocklist), options);
//!
//!     let report = scrubber.scrub_path("corpus").await?;
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every failure is fatal for the run and comes back as a [`ScrubError`] naming
//! the path involved. Nothing is retried and partial output is not cleaned up.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod paths;
pub mod pipeline;
pub mod stats;
pub mod walker;

pub use config::{
    load_blocklist,
    OutputOrder,
    ScrubOptions,
    CLEAN_SUFFIX,
    DEFAULT_BLOCKLIST_FILENAME,
    DEFAULT_WORKER_BUDGET,
    QUEUE_DEPTH,
};

pub use engine::TokenFilter;

pub use errors::ScrubError;

pub use headless::headless_scrub;

pub use paths::derive_output_path;

pub use pipeline::{effective_workers, run_file_pipeline, FileOutcome, FileTask};

pub use stats::{ScrubReport, ScrubStats};

pub use walker::Scrubber;

/// Re-exports the matcher types so callers need only this crate.
pub use wordscrub_matcher::{tokenize, Blocklist};
