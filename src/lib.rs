//! Library root for `complaint-triage`.
//!
//! Complaint-triage is an LLM-scored intake queue for support operators:
//! - Free-text complaints are scored 1-10 by a severity classifier
//! - Complaints wait in a max-priority queue keyed on that score
//! - Operators always process the most severe pending complaint first
//!
//! The classifier is an external collaborator (OpenAI by default) behind an
//! injectable trait; when it fails, intake substitutes a fixed fallback
//! assessment and keeps going.  The architecture is built around extensible
//! traits that allow for different implementations of the classifier.

#[deny(missing_docs)]
pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up the runtime and runs the operator console:
/// - Creates the runtime context with the classifier client and an empty store
/// - Runs the command loop until the operator exits
pub async fn start(config: Config) -> Void {
    info!("Starting complaint-triage ...");

    // Initialize the runtime.
    let mut runtime = runtime::Runtime::new(config);

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
