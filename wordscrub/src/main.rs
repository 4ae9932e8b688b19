// wordscrub/src/main.rs
//! wordscrub entry point.
//!
//! Loads `.env`, parses arguments, initializes logging and runs the scrub.
//! Any failure is printed once and ends the process with status 1.

use clap::Parser;

use wordscrub::commands::scrub::{error_msg, run_and_report};
use wordscrub::logger;
use wordscrub::Cli;

#[tokio::main]
async fn main() {
    // A missing .env file is the normal case.
    let _ = dotenvy::dotenv();

    let args = Cli::parse();
    logger::init_logger(args.log_level());
    log::debug!("wordscrub started. Version: {}", env!("CARGO_PKG_VERSION"));

    let result = match args.resolve() {
        Ok(config) => run_and_report(&config).await.map(|_| ()),
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error_msg(format!("{:#}", e));
        std::process::exit(1);
    }
}
