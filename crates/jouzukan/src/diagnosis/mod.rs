//! Quiz scoring and archetype classification.
//!
//! An answer set flows through the question weights into a nine-dimensional
//! profile; the profile then selects one archetype through the ranked priority
//! rules (or the fallback group comparison) and a short comment keyed on its
//! dominant dimension. Everything here is pure over the immutable catalog.

pub mod catalog;
pub mod classifier;
pub mod comment;
pub mod dimension;
pub mod domain;
pub mod import;
pub mod router;
pub mod rules;
pub mod scoring;
pub mod service;
pub mod submission;

#[cfg(test)]
mod tests;

pub use catalog::{Archetype, ArchetypeCatalog, Catalog, CatalogError, QuestionCatalog};
pub use classifier::{ArchetypeClassifier, Classification, ClassificationBasis, FallbackGroups};
pub use dimension::Dimension;
pub use domain::{AnswerSet, Profile, ProfileError, Question};
pub use import::{AnswerSheet, AnswerSheetImporter, ImportError};
pub use router::diagnosis_router;
pub use rules::{Comparison, Condition, PriorityRule};
pub use scoring::{ScoreCalculator, BASE_SCORE};
pub use service::{DiagnosisRequest, DiagnosisService, DiagnosisServiceError};
pub use submission::{
    LogSubmissionSink, Respondent, ResultSubmission, SubmissionError, SubmissionSink,
};

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Number of strengths reported alongside the archetype.
pub const TOP_STRENGTH_COUNT: usize = 3;

/// Stateless pipeline over a shared catalog.
pub struct DiagnosisEngine {
    catalog: Arc<Catalog>,
    classifier: ArchetypeClassifier,
}

impl DiagnosisEngine {
    pub fn new(catalog: Arc<Catalog>) -> Result<Self, CatalogError> {
        let classifier = ArchetypeClassifier::new(&catalog.archetypes)?;
        Ok(Self {
            catalog,
            classifier,
        })
    }

    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(Arc::new(Catalog::standard()?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn classifier(&self) -> &ArchetypeClassifier {
        &self.classifier
    }

    pub fn compute_profile(&self, answers: &AnswerSet) -> Profile {
        ScoreCalculator::new(&self.catalog.questions).compute_profile(answers)
    }

    pub fn diagnose(&self, answers: &AnswerSet) -> DiagnosisOutcome {
        let profile = self.compute_profile(answers);
        let (archetype, classification) = self.classifier.classify_explained(&profile);
        let archetype = archetype.clone();
        let comment = comment::generate_comment(&profile);
        let top_strengths = comment::top_strengths(&profile, TOP_STRENGTH_COUNT)
            .into_iter()
            .map(|dimension| StrengthView {
                dimension,
                label: dimension.label().to_string(),
                score: profile.get(dimension),
            })
            .collect();

        DiagnosisOutcome {
            profile,
            archetype,
            classification,
            comment,
            top_strengths,
        }
    }
}

/// One of the respondent's strongest dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthView {
    pub dimension: Dimension,
    pub label: String,
    pub score: f64,
}

/// Full result of a diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisOutcome {
    pub profile: Profile,
    pub archetype: Archetype,
    pub classification: Classification,
    pub comment: String,
    pub top_strengths: Vec<StrengthView>,
}
