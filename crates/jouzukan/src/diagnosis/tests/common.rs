use std::sync::{Arc, Mutex};

use crate::config::SubmissionConfig;
use crate::diagnosis::dimension::Dimension;
use crate::diagnosis::domain::{AnswerSet, Profile};
use crate::diagnosis::submission::{ResultSubmission, SubmissionError, SubmissionSink};
use crate::diagnosis::{diagnosis_router, DiagnosisEngine, DiagnosisService};

pub(super) fn engine() -> Arc<DiagnosisEngine> {
    Arc::new(DiagnosisEngine::standard().expect("standard catalog is valid"))
}

/// Every question answered 3 except the listed overrides.
pub(super) fn answers_with(overrides: &[(u32, i64)]) -> AnswerSet {
    let mut answers = AnswerSet::uniform(1..=18, 3);
    for (question_id, value) in overrides {
        answers.insert(*question_id, *value);
    }
    answers
}

pub(super) fn profile_with(scores: &[(Dimension, f64)]) -> Profile {
    scores
        .iter()
        .fold(Profile::uniform(10.0), |profile, (dimension, value)| {
            profile.with(*dimension, *value)
        })
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[derive(Default, Clone)]
pub(super) struct MemorySink {
    pub(super) events: Arc<Mutex<Vec<ResultSubmission>>>,
}

impl SubmissionSink for MemorySink {
    fn submit(&self, submission: ResultSubmission) -> Result<(), SubmissionError> {
        self.events
            .lock()
            .expect("sink mutex poisoned")
            .push(submission);
        Ok(())
    }
}

impl MemorySink {
    pub(super) fn events(&self) -> Vec<ResultSubmission> {
        self.events.lock().expect("sink mutex poisoned").clone()
    }
}

pub(super) struct FailingSink;

impl SubmissionSink for FailingSink {
    fn submit(&self, _submission: ResultSubmission) -> Result<(), SubmissionError> {
        Err(SubmissionError::Transport("webhook offline".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<DiagnosisService<MemorySink>>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::default());
    let service = Arc::new(DiagnosisService::new(
        engine(),
        sink.clone(),
        SubmissionConfig::default(),
    ));
    (service, sink)
}

pub(super) fn failing_service() -> Arc<DiagnosisService<FailingSink>> {
    Arc::new(DiagnosisService::new(
        engine(),
        Arc::new(FailingSink),
        SubmissionConfig::default(),
    ))
}

pub(super) fn router_with_service<S>(service: Arc<DiagnosisService<S>>) -> axum::Router
where
    S: SubmissionSink + 'static,
{
    diagnosis_router(service)
}
