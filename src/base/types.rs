//! Common types and result aliases shared across the application.

use serde::{Deserialize, Serialize};

/// Crate-wide error type.
pub type Err = anyhow::Error;
/// Crate-wide result type.
pub type Res<T> = Result<T, Err>;
/// Result type for operations that return nothing on success.
pub type Void = Res<()>;

/// Severity substituted when the classifier fails or returns garbage.
pub const FALLBACK_SEVERITY: u8 = 5;
/// Reasoning substituted when the classifier fails or returns garbage.
pub const FALLBACK_REASONING: &str = "Manual review needed (AI Failed)";

/// The classifier's verdict for a piece of complaint text.
///
/// `severity` is deserialized wide (`i64`) because the model occasionally wanders
/// outside [1, 10]; intake clamps it via [`SeverityAssessment::clamped_severity`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityAssessment {
    /// Raw severity score from the classifier; may fall outside [1, 10].
    pub severity: i64,
    /// Short justification from the classifier.
    pub reasoning: String,
}

impl SeverityAssessment {
    /// The fixed assessment used when classification fails.
    pub fn fallback() -> Self {
        Self {
            severity: FALLBACK_SEVERITY as i64,
            reasoning: FALLBACK_REASONING.to_string(),
        }
    }

    /// Severity clamped into the documented [1, 10] range.
    pub fn clamped_severity(&self) -> u8 {
        self.severity.clamp(1, 10) as u8
    }
}

/// A single intake record: complaint text tagged with its sequence id and
/// the classifier's severity/reasoning pair.
///
/// Complaints are created exactly once at intake and destroyed exactly once
/// when the operator dequeues them; every field is immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    /// Fixed-width sequence tag, e.g. `C-001`.
    pub id: String,
    /// Original complaint text, passed through untouched.
    pub text: String,
    /// Severity in [1, 10]; higher is more urgent.
    pub severity: u8,
    /// Short justification from the classifier (or the fallback string).
    pub reasoning: String,
}
