//! Complaint intake and dispatch.

use tracing::{info, instrument, warn};

use crate::{
    base::types::{Complaint, SeverityAssessment},
    service::{classifier::ClassifierClient, queue::ComplaintStore},
};

/// Submit a new complaint: classify it, then insert it into the store.
///
/// Classifier failure is absorbed here, never surfaced: an unreachable
/// service, a timeout, or an unparseable reply all substitute the fixed
/// fallback assessment and the complaint is queued regardless.  Blocks until
/// the classifier responds or its timeout expires.
#[instrument(skip_all)]
pub async fn submit_complaint(text: String, classifier: &ClassifierClient, store: &mut ComplaintStore) -> Complaint {
    let assessment = match classifier.assess(&text).await {
        Ok(assessment) => assessment,
        Err(err) => {
            warn!("Classifier failed, falling back to manual review: {err}");
            SeverityAssessment::fallback()
        }
    };

    let complaint = store.insert(text, &assessment);

    info!("Queued {} with severity {}/10: {}", complaint.id, complaint.severity, complaint.reasoning);

    complaint
}

/// Remove and return the highest-severity pending complaint.
///
/// `None` means the store is empty; that is an informational no-op, not a
/// fault.  Once returned, the complaint is gone: there is no undo and no
/// requeue.
#[instrument(skip_all)]
pub fn process_next(store: &mut ComplaintStore) -> Option<Complaint> {
    let complaint = store.pop_most_severe();

    match &complaint {
        Some(complaint) => info!("Dispatching {} (severity {}/10); {} still pending.", complaint.id, complaint.severity, store.len()),
        None => info!("Process requested with no pending complaints."),
    }

    complaint
}
