#![cfg(test)]

use std::sync::Arc;

use async_trait::async_trait;
use complaint_triage::{
    base::types::{FALLBACK_REASONING, Res, SeverityAssessment},
    interaction::intake,
    service::{
        classifier::{ClassifierClient, GenericClassifierClient},
        queue::ComplaintStore,
    },
};
use mockall::mock;

// Mocks.

// Mock classifier for testing; lets tests pin the severity for each text.

mock! {
    pub Classifier {}

    #[async_trait]
    impl GenericClassifierClient for Classifier {
        async fn assess(&self, text: &str) -> Res<SeverityAssessment>;
    }
}

/// A classifier stub that scores by keyword, defaulting to 1.
fn keyword_classifier(pairs: &'static [(&'static str, i64)]) -> ClassifierClient {
    let mut mock = MockClassifier::new();

    mock.expect_assess().returning(move |text| {
        let severity = pairs.iter().find(|(keyword, _)| text.contains(keyword)).map(|(_, severity)| *severity).unwrap_or(1);

        Ok(SeverityAssessment {
            severity,
            reasoning: format!("scored {severity}"),
        })
    });

    ClassifierClient::new(Arc::new(mock))
}

/// A classifier stub that always fails.
fn failing_classifier() -> ClassifierClient {
    let mut mock = MockClassifier::new();

    mock.expect_assess().returning(|_| Err(anyhow::anyhow!("service unreachable")));

    ClassifierClient::new(Arc::new(mock))
}

/// A classifier stub whose reply never parses into the expected shape.
fn unparseable_classifier() -> ClassifierClient {
    let mut mock = MockClassifier::new();

    mock.expect_assess().returning(|_| complaint_triage::service::classifier::openai::parse_assessment_json("not json at all"));

    ClassifierClient::new(Arc::new(mock))
}

// Tests.

#[tokio::test]
async fn test_dequeue_order_follows_ai_severity() {
    // Scenario: texts scored 3, then 9, then 6 must come back 9, 6, 3.
    let classifier = keyword_classifier(&[("slow", 3), ("fire", 9), ("bug", 6)]);
    let mut store = ComplaintStore::new();

    intake::submit_complaint("the dashboard is slow".to_string(), &classifier, &mut store).await;
    intake::submit_complaint("there is a fire in the server room".to_string(), &classifier, &mut store).await;
    intake::submit_complaint("found a bug in checkout".to_string(), &classifier, &mut store).await;

    let order: Vec<u8> = std::iter::from_fn(|| intake::process_next(&mut store)).map(|c| c.severity).collect();

    assert_eq!(order, vec![9, 6, 3]);
}

#[tokio::test]
async fn test_repeated_dequeues_are_non_increasing() {
    let classifier = keyword_classifier(&[("a", 4), ("b", 8), ("c", 8), ("d", 2), ("e", 10)]);
    let mut store = ComplaintStore::new();

    for text in ["a", "b", "c", "d", "e"] {
        intake::submit_complaint(text.to_string(), &classifier, &mut store).await;
    }

    let severities: Vec<u8> = std::iter::from_fn(|| intake::process_next(&mut store)).map(|c| c.severity).collect();

    assert_eq!(severities.len(), 5, "Every enqueued complaint is dequeued exactly once");
    assert!(severities.windows(2).all(|pair| pair[0] >= pair[1]), "Severities must be non-increasing: {severities:?}");
}

#[tokio::test]
async fn test_partial_drain_keeps_the_rest_pending() {
    let classifier = keyword_classifier(&[("low", 2), ("mid", 5), ("high", 9)]);
    let mut store = ComplaintStore::new();

    intake::submit_complaint("low priority".to_string(), &classifier, &mut store).await;
    intake::submit_complaint("mid priority".to_string(), &classifier, &mut store).await;
    intake::submit_complaint("high priority".to_string(), &classifier, &mut store).await;

    // Dequeue two of three; the largest two must come out.
    let first = intake::process_next(&mut store).unwrap();
    let second = intake::process_next(&mut store).unwrap();

    assert_eq!((first.severity, second.severity), (9, 5));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_ids_stay_monotonic_across_dequeues() {
    let classifier = keyword_classifier(&[("urgent", 9)]);
    let mut store = ComplaintStore::new();

    let first = intake::submit_complaint("urgent issue".to_string(), &classifier, &mut store).await;
    let second = intake::submit_complaint("mild issue".to_string(), &classifier, &mut store).await;

    // Drain everything, then enqueue again: the counter must not rewind.
    while intake::process_next(&mut store).is_some() {}

    let third = intake::submit_complaint("another issue".to_string(), &classifier, &mut store).await;

    assert_eq!(first.id, "C-001");
    assert_eq!(second.id, "C-002");
    assert_eq!(third.id, "C-003");
}

#[tokio::test]
async fn test_classifier_failure_falls_back() {
    // Scenario: the classifier errors; intake still succeeds with the fixed pair.
    let classifier = failing_classifier();
    let mut store = ComplaintStore::new();

    let complaint = intake::submit_complaint("my invoice is wrong".to_string(), &classifier, &mut store).await;

    assert_eq!(complaint.severity, 5);
    assert_eq!(complaint.reasoning, FALLBACK_REASONING);
    assert_eq!(store.len(), 1, "The complaint is queued despite the failure");
}

#[tokio::test]
async fn test_unparseable_reply_falls_back() {
    // Scenario: the classifier answers, but not in the expected JSON shape.
    let classifier = unparseable_classifier();
    let mut store = ComplaintStore::new();

    let complaint = intake::submit_complaint("my invoice is wrong".to_string(), &classifier, &mut store).await;

    assert_eq!(complaint.severity, 5);
    assert_eq!(complaint.reasoning, FALLBACK_REASONING);
}

#[tokio::test]
async fn test_process_on_fresh_store_is_empty() {
    // Scenario: process on a fresh store yields nothing and changes nothing.
    let classifier = keyword_classifier(&[]);
    let mut store = ComplaintStore::new();

    assert!(intake::process_next(&mut store).is_none());
    assert!(store.is_empty());

    // The id counter was untouched by the empty pop.
    let complaint = intake::submit_complaint("first real complaint".to_string(), &classifier, &mut store).await;
    assert_eq!(complaint.id, "C-001");
}

#[tokio::test]
async fn test_equal_severities_come_out_in_intake_order() {
    let classifier = keyword_classifier(&[("tie", 6)]);
    let mut store = ComplaintStore::new();

    intake::submit_complaint("tie one".to_string(), &classifier, &mut store).await;
    intake::submit_complaint("tie two".to_string(), &classifier, &mut store).await;
    intake::submit_complaint("tie three".to_string(), &classifier, &mut store).await;

    let texts: Vec<String> = std::iter::from_fn(|| intake::process_next(&mut store)).map(|c| c.text).collect();

    assert_eq!(texts, vec!["tie one", "tie two", "tie three"]);
}

#[tokio::test]
async fn test_empty_text_is_accepted_as_is() {
    // No input validation: empty text flows through to the classifier untouched.
    let classifier = keyword_classifier(&[]);
    let mut store = ComplaintStore::new();

    let complaint = intake::submit_complaint(String::new(), &classifier, &mut store).await;

    assert_eq!(complaint.text, "");
    assert_eq!(store.len(), 1);
}
