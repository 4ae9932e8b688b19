// wordscrub/src/lib.rs
//! # wordscrub CLI Application
//!
//! Command-line front-end for `wordscrub-core`: argument parsing, defaults
//! resolution, logging setup and reporting.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use cli::{Cli, RunConfig};
pub use commands::scrub::{run_and_report, run_scrub};
