//! Binary entry point for `complaint-triage`.
//!
//! This module provides the command-line interface for complaint-triage with
//! options for configuration file paths and logging verbosity.  It initializes
//! the necessary components and starts the operator console.

use clap::Parser;
use complaint_triage::base::{config::Config, types::Void};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Complaint-triage, an LLM-scored complaint queue for operators.
///
/// Configuration can come from `config.toml` or environment variables.
/// The tool scores incoming complaints with an AI classifier and holds them
/// in a priority queue so the most severe one is always handled first.
#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None)]
struct Args {
    /// Override the config file path (optional).
    ///
    /// By default, the tool will look for a config file at `.hidden/config.toml`
    /// in the current directory.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: WARN level (keeps the console readable)
    /// - -v: INFO level
    /// - -vv or more: DEBUG level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Main entry point for the complaint-triage binary.
///
/// Sets up logging based on verbosity, loads configuration, and starts the console.
#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layer.  Logs share the terminal with the operator
    // console, so keep them terse.

    let stdout = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry().with(level_filter).with(stdout).init();

    let config = Config::load(args.config.as_deref())?;

    complaint_triage::start(config).await
}
