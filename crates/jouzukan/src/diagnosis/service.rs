use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::catalog::Archetype;
use super::domain::{AnswerSet, Question};
use super::import::AnswerSheet;
use super::submission::{Respondent, ResultSubmission, SubmissionSink};
use super::{DiagnosisEngine, DiagnosisOutcome};
use crate::config::SubmissionConfig;

/// Completed quiz handed over by the quiz flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisRequest {
    #[serde(default)]
    pub respondent: Option<Respondent>,
    #[serde(default)]
    pub answers: AnswerSet,
}

/// Service composing the diagnosis engine with the result submission hook.
pub struct DiagnosisService<S> {
    engine: Arc<DiagnosisEngine>,
    sink: Arc<S>,
    submissions: SubmissionConfig,
}

impl<S> DiagnosisService<S>
where
    S: SubmissionSink + 'static,
{
    pub fn new(engine: Arc<DiagnosisEngine>, sink: Arc<S>, submissions: SubmissionConfig) -> Self {
        Self {
            engine,
            sink,
            submissions,
        }
    }

    /// Score and classify a completed quiz. Result submission runs detached
    /// and never alters the returned outcome.
    pub fn diagnose(&self, request: DiagnosisRequest) -> DiagnosisOutcome {
        let DiagnosisRequest {
            respondent,
            answers,
        } = request;

        let outcome = self.engine.diagnose(&answers);
        info!(
            answered = answers.len(),
            archetype = %outcome.archetype.id,
            basis = %outcome.classification.summary(),
            "diagnosis completed"
        );

        if let Some(respondent) = respondent {
            if self.submissions.enabled {
                self.dispatch(ResultSubmission {
                    name: respondent.name,
                    email: respondent.email,
                    archetype_id: outcome.archetype.id.clone(),
                    archetype_name: outcome.archetype.display_name.clone(),
                    profile: outcome.profile.clone(),
                    submitted_at: Utc::now(),
                });
            }
        }

        outcome
    }

    /// Diagnose every imported sheet in order.
    pub fn diagnose_sheets(&self, sheets: Vec<AnswerSheet>) -> Vec<(String, DiagnosisOutcome)> {
        sheets
            .into_iter()
            .map(|sheet| {
                let respondent = sheet.email.clone().map(|email| Respondent {
                    name: sheet.respondent.clone(),
                    email,
                });
                let outcome = self.diagnose(DiagnosisRequest {
                    respondent,
                    answers: sheet.answers,
                });
                (sheet.respondent, outcome)
            })
            .collect()
    }

    pub fn questions(&self) -> Vec<Question> {
        self.engine.catalog().questions.iter().cloned().collect()
    }

    pub fn archetypes(&self) -> Vec<Archetype> {
        self.engine.catalog().archetypes.iter().cloned().collect()
    }

    pub fn archetype(&self, id: &str) -> Result<Archetype, DiagnosisServiceError> {
        self.engine
            .catalog()
            .archetypes
            .archetype(id)
            .cloned()
            .ok_or_else(|| DiagnosisServiceError::UnknownArchetype(id.to_string()))
    }

    fn dispatch(&self, submission: ResultSubmission) {
        let sink = Arc::clone(&self.sink);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(move || forward(sink.as_ref(), submission));
            }
            Err(_) => forward(sink.as_ref(), submission),
        }
    }
}

fn forward<S: SubmissionSink>(sink: &S, submission: ResultSubmission) {
    let archetype = submission.archetype_id.clone();
    if let Err(err) = sink.submit(submission) {
        warn!(error = %err, %archetype, "result submission failed");
    }
}

/// Error raised by the diagnosis service.
#[derive(Debug, thiserror::Error)]
pub enum DiagnosisServiceError {
    #[error("unknown archetype '{0}'")]
    UnknownArchetype(String),
}
