//! Core components, types, and utilities for complaint-triage.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - The rubric prompt for the severity classifier.
//! - Common types and result handling.

pub mod config;
pub mod prompts;
pub mod types;
