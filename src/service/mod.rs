//! Service integrations and core state for complaint-triage.
//!
//! This module contains the two components of the system:
//! - The severity classifier (e.g., OpenAI), behind a generic trait so tests
//!   can substitute a deterministic stub.
//! - The complaint store, a max-priority queue keyed on severity.

pub mod classifier;
pub mod queue;
