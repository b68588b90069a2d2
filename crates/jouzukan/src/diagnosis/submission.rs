use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::Profile;

/// Identity captured by the start form before the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Respondent {
    pub name: String,
    pub email: String,
}

/// Payload forwarded to the external results log after a diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSubmission {
    pub name: String,
    pub email: String,
    pub archetype_id: String,
    pub archetype_name: String,
    pub profile: Profile,
    pub submitted_at: DateTime<Utc>,
}

/// Outbound hook for result logging (spreadsheet webhook, mail adapter, ...).
pub trait SubmissionSink: Send + Sync {
    fn submit(&self, submission: ResultSubmission) -> Result<(), SubmissionError>;
}

/// Submission dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission transport unavailable: {0}")]
    Transport(String),
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Sink that only records submissions in the service log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSubmissionSink;

impl SubmissionSink for LogSubmissionSink {
    fn submit(&self, submission: ResultSubmission) -> Result<(), SubmissionError> {
        tracing::info!(
            archetype = %submission.archetype_id,
            submitted_at = %submission.submitted_at,
            "diagnosis result submitted"
        );
        Ok(())
    }
}
