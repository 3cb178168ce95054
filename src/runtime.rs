//! Runtime services and shared state for complaint-triage.

use tracing::instrument;

use crate::{
    base::{config::Config, types::Void},
    interaction::console,
    service::{classifier::ClassifierClient, queue::ComplaintStore},
};

/// Runtime service context for the application.
///
/// This struct holds the configuration, the classifier client, and the
/// complaint store.  The store is owned here explicitly rather than living in
/// any module-level state, and it is accessed by exactly one logical actor:
/// the operator console loop.
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The severity classifier client instance.
    pub classifier: ClassifierClient,
    /// The complaint store instance.
    pub store: ComplaintStore,
}

impl Runtime {
    /// Create a new runtime instance with an empty store.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Self {
        // Initialize the classifier client.
        let classifier = ClassifierClient::openai(&config);

        // Initialize the store.
        let store = ComplaintStore::new();

        Self { config, classifier, store }
    }

    /// Run the operator console until exit.
    pub async fn start(&mut self) -> Void {
        console::run(&self.classifier, &mut self.store).await
    }
}
