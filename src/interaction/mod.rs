//! Operator interactions for complaint-triage.
//!
//! This module provides the intake/dispatch layer over the classifier and the
//! store, plus the interactive console that drives it:
//! - Submitting new complaints (classification with fallback, then insertion)
//! - Processing the highest-severity pending complaint

pub mod console;
pub mod intake;
