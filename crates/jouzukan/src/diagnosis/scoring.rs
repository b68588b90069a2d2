use tracing::debug;

use super::catalog::QuestionCatalog;
use super::dimension::DIMENSION_COUNT;
use super::domain::{likert_multiplier, round_to_tenth, AnswerSet, Profile};

/// Starting score for every dimension before any answer is applied.
pub const BASE_SCORE: f64 = 10.0;

/// Folds an answer set through the question weights into a profile.
pub struct ScoreCalculator<'a> {
    questions: &'a QuestionCatalog,
}

impl<'a> ScoreCalculator<'a> {
    pub fn new(questions: &'a QuestionCatalog) -> Self {
        Self { questions }
    }

    pub fn compute_profile(&self, answers: &AnswerSet) -> Profile {
        let mut scores = [BASE_SCORE; DIMENSION_COUNT];

        for (question_id, value) in answers.iter() {
            let Some(question) = self.questions.question(question_id) else {
                debug!(question_id, "ignoring answer for unknown question");
                continue;
            };

            if !(1..=5).contains(&value) {
                debug!(question_id, value, "answer outside likert range treated as neutral");
            }
            let multiplier = f64::from(likert_multiplier(value));

            for (dimension, weight) in &question.weights {
                scores[dimension.index()] += weight * multiplier;
            }
        }

        for slot in scores.iter_mut() {
            *slot = round_to_tenth(*slot);
        }

        Profile::from_scores(scores)
    }
}
