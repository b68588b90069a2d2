mod archetypes;
mod questions;

pub use archetypes::{Archetype, CAMEL, DONKEY, FALLBACK_ARCHETYPES, FISH};

use std::collections::HashSet;

use super::domain::Question;
use super::rules::{Condition, PriorityRule};

/// Number of archetypes selected through priority rules.
pub const RULED_ARCHETYPE_COUNT: usize = 9;

/// Static catalog problems. These are programming errors surfaced when the
/// catalog is built, never while classifying.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("question id {0} appears more than once")]
    DuplicateQuestion(u32),
    #[error("question {0} has no dimension weights")]
    EmptyWeights(u32),
    #[error("question {0} carries a non-finite weight")]
    NonFiniteWeight(u32),
    #[error("archetype '{0}' appears more than once")]
    DuplicateArchetype(String),
    #[error("archetype '{id}' is missing required field {field}")]
    MissingField { id: String, field: &'static str },
    #[error("priority rank {rank} is used by both '{first}' and '{second}'")]
    DuplicateRank {
        rank: u8,
        first: String,
        second: String,
    },
    #[error("priority rule '{0}' has no conditions")]
    EmptyRule(String),
    #[error("priority rule '{rule}' has an unsatisfiable count condition")]
    InvalidCountCondition { rule: String },
    #[error("fallback archetype '{0}' is missing")]
    MissingFallback(&'static str),
    #[error("fallback archetype '{0}' must not carry a priority rule")]
    RuledFallback(&'static str),
    #[error("expected {expected} ruled archetypes, found {found}")]
    RuleCount { expected: usize, found: usize },
}

/// Immutable question battery.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(questions::standard_questions())
    }

    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let catalog = Self { questions };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.questions.iter().map(|question| question.id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(CatalogError::DuplicateQuestion(question.id));
            }
            if question.weights.is_empty() {
                return Err(CatalogError::EmptyWeights(question.id));
            }
            if question.weights.values().any(|weight| !weight.is_finite()) {
                return Err(CatalogError::NonFiniteWeight(question.id));
            }
        }
        Ok(())
    }
}

/// Immutable archetype catalog with the rule table embedded per archetype.
#[derive(Debug, Clone)]
pub struct ArchetypeCatalog {
    archetypes: Vec<Archetype>,
}

impl ArchetypeCatalog {
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(archetypes::standard_archetypes())
    }

    pub fn new(archetypes: Vec<Archetype>) -> Result<Self, CatalogError> {
        let catalog = Self { archetypes };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn archetype(&self, id: &str) -> Option<&Archetype> {
        self.archetypes.iter().find(|archetype| archetype.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Archetype> {
        self.archetypes.iter()
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    /// Priority rules in evaluation order, each paired with its archetype.
    pub fn ranked_rules(&self) -> Vec<(&PriorityRule, &Archetype)> {
        let mut rules: Vec<(&PriorityRule, &Archetype)> = self
            .archetypes
            .iter()
            .filter_map(|archetype| {
                archetype
                    .priority_rule
                    .as_ref()
                    .map(|rule| (rule, archetype))
            })
            .collect();
        rules.sort_by_key(|(rule, _)| rule.rank);
        rules
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        for archetype in &self.archetypes {
            if !ids.insert(archetype.id.as_str()) {
                return Err(CatalogError::DuplicateArchetype(archetype.id.clone()));
            }
            let fields = [
                ("id", &archetype.id),
                ("display_name", &archetype.display_name),
                ("catchphrase", &archetype.catchphrase),
                ("description", &archetype.description),
                ("legend_name", &archetype.legend_name),
                ("legend_role", &archetype.legend_role),
            ];
            for (field, value) in fields {
                if value.trim().is_empty() {
                    return Err(CatalogError::MissingField {
                        id: archetype.id.clone(),
                        field,
                    });
                }
            }
            if let Some(rule) = &archetype.priority_rule {
                validate_rule(rule)?;
            }
        }

        for fallback in FALLBACK_ARCHETYPES {
            match self.archetype(fallback) {
                None => return Err(CatalogError::MissingFallback(fallback)),
                Some(archetype) if archetype.priority_rule.is_some() => {
                    return Err(CatalogError::RuledFallback(fallback))
                }
                Some(_) => {}
            }
        }

        let ranked = self.ranked_rules();
        if ranked.len() != RULED_ARCHETYPE_COUNT {
            return Err(CatalogError::RuleCount {
                expected: RULED_ARCHETYPE_COUNT,
                found: ranked.len(),
            });
        }
        for pair in ranked.windows(2) {
            let (first, first_archetype) = pair[0];
            let (second, second_archetype) = pair[1];
            if first.rank == second.rank {
                return Err(CatalogError::DuplicateRank {
                    rank: first.rank,
                    first: first_archetype.id.clone(),
                    second: second_archetype.id.clone(),
                });
            }
        }

        Ok(())
    }
}

fn validate_rule(rule: &PriorityRule) -> Result<(), CatalogError> {
    if rule.conditions.is_empty() {
        return Err(CatalogError::EmptyRule(rule.name.clone()));
    }
    for condition in &rule.conditions {
        if let Condition::CountAtLeast { dimensions, n, .. } = condition {
            if *n == 0 || *n > dimensions.len() {
                return Err(CatalogError::InvalidCountCondition {
                    rule: rule.name.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Question and archetype catalogs, validated together once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub questions: QuestionCatalog,
    pub archetypes: ArchetypeCatalog,
}

impl Catalog {
    pub fn new(
        questions: QuestionCatalog,
        archetypes: ArchetypeCatalog,
    ) -> Result<Self, CatalogError> {
        questions.validate()?;
        archetypes.validate()?;
        Ok(Self {
            questions,
            archetypes,
        })
    }

    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(QuestionCatalog::standard()?, ArchetypeCatalog::standard()?)
    }
}
