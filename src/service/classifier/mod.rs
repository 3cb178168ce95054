//! Integration with the severity classifier service.
//!
//! This module provides a thin wrapper around LLM clients (e.g., OpenAI)
//! for scoring complaint text.
//!
//! The module defines the `GenericClassifierClient` trait that can be
//! implemented for different providers, with a default implementation for
//! OpenAI.  Failures are returned as errors; the intake layer owns the
//! fallback substitution, so a classifier outage never reaches the operator
//! as a fault.

pub mod openai;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{Res, SeverityAssessment};

// Traits.

/// Generic classifier trait that clients must implement.
///
/// This trait defines the single call the system makes to an external model:
/// complaint text in, severity and reasoning out.  Implementing this trait
/// allows different LLM providers to be used with complaint-triage.
#[async_trait]
pub trait GenericClassifierClient: Send + Sync + 'static {
    /// Score a piece of complaint text.
    ///
    /// Returns the model's severity/reasoning verdict, or an error when the
    /// service is unreachable, times out, refuses, or replies with something
    /// that does not parse into the expected two fields.
    async fn assess(&self, text: &str) -> Res<SeverityAssessment>;
}

// Structs.

/// Classifier client for the application.
///
/// This is trivially cloneable and can be passed around without the need for
/// `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ClassifierClient {
    inner: Arc<dyn GenericClassifierClient>,
}

impl Deref for ClassifierClient {
    type Target = dyn GenericClassifierClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ClassifierClient {
    pub fn new(inner: Arc<dyn GenericClassifierClient>) -> Self {
        Self { inner }
    }
}
