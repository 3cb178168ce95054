//! The complaint store: a max-priority queue keyed on severity.
//!
//! Backed by a binary heap (insert and extract-max are O(log n)).  Extraction
//! always yields the currently-highest severity; equal severities come out
//! earliest-inserted-first, using the sequence counter as the secondary key.
//! The counter starts at 1, only ever increases, and is untouched by pops, so
//! ids are never reused.

use std::{cmp::Ordering, collections::BinaryHeap};

use tracing::warn;

use crate::base::types::{Complaint, SeverityAssessment};

/// Heap entry wrapping a complaint with its ordering keys.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QueuedComplaint {
    severity: u8,
    seq: u64,
    complaint: Complaint,
}

impl Ord for QueuedComplaint {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher severity first; among equals, the lower sequence number wins.
        self.severity.cmp(&other.severity).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueuedComplaint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// In-process store of pending complaints.
///
/// Owned by the runtime for the lifetime of the process; there is no
/// persistence, so termination discards anything still queued.
#[derive(Debug)]
pub struct ComplaintStore {
    heap: BinaryHeap<QueuedComplaint>,
    next_seq: u64,
}

impl Default for ComplaintStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplaintStore {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 1,
        }
    }

    /// Insert a complaint, tagging it with the next sequence id.
    ///
    /// The assessment's severity is clamped into [1, 10] here, so the store
    /// never holds an out-of-range severity.  Returns the created record.
    pub fn insert(&mut self, text: String, assessment: &SeverityAssessment) -> Complaint {
        let severity = assessment.clamped_severity();
        if i64::from(severity) != assessment.severity {
            warn!("Classifier severity {} out of range; clamped to {}.", assessment.severity, severity);
        }

        let seq = self.next_seq;
        self.next_seq += 1;

        let complaint = Complaint {
            id: format!("C-{seq:03}"),
            text,
            severity,
            reasoning: assessment.reasoning.clone(),
        };

        self.heap.push(QueuedComplaint {
            severity,
            seq,
            complaint: complaint.clone(),
        });

        complaint
    }

    /// Remove and return the highest-severity complaint, or `None` when the
    /// store is empty.  An empty pop mutates nothing.
    pub fn pop_most_severe(&mut self) -> Option<Complaint> {
        self.heap.pop().map(|entry| entry.complaint)
    }

    /// Number of pending complaints.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

// Tests.
