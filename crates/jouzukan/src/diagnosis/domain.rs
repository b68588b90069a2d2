use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::dimension::{Dimension, DIMENSION_COUNT};

/// One Likert prompt of the battery together with its dimension weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub weights: BTreeMap<Dimension, f64>,
}

impl Question {
    /// Weight applied to `dimension`; absent dimensions weigh nothing.
    pub fn weight(&self, dimension: Dimension) -> f64 {
        self.weights.get(&dimension).copied().unwrap_or(0.0)
    }
}

/// Respondent answers keyed by question id. Partial and over-complete sets
/// are both accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(pub BTreeMap<u32, i64>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same answer for every id in `ids`.
    pub fn uniform<I>(ids: I, value: i64) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Self(ids.into_iter().map(|id| (id, value)).collect())
    }

    pub fn insert(&mut self, question_id: u32, value: i64) -> Option<i64> {
        self.0.insert(question_id, value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, i64)> + '_ {
        self.0.iter().map(|(id, value)| (*id, *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u32, i64)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (u32, i64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Maps a Likert answer onto its score multiplier. Values outside 1..=5 are
/// neutral.
pub fn likert_multiplier(value: i64) -> i8 {
    match value {
        5 => 2,
        4 => 1,
        3 => 0,
        2 => -1,
        1 => -2,
        _ => 0,
    }
}

/// Rounds half away from zero to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Nine-dimensional score vector. Every dimension is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Dimension, f64>",
    into = "BTreeMap<Dimension, f64>"
)]
pub struct Profile {
    scores: [f64; DIMENSION_COUNT],
}

impl Profile {
    /// Profile with every dimension set to `value`.
    pub fn uniform(value: f64) -> Self {
        Self {
            scores: [value; DIMENSION_COUNT],
        }
    }

    pub(crate) fn from_scores(scores: [f64; DIMENSION_COUNT]) -> Self {
        Self { scores }
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.scores[dimension.index()]
    }

    /// Returns a copy with `dimension` replaced.
    pub fn with(mut self, dimension: Dimension, value: f64) -> Self {
        self.scores[dimension.index()] = value;
        self
    }

    /// Dimensions and scores in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL
            .into_iter()
            .map(|dimension| (dimension, self.get(dimension)))
    }

    pub fn to_map(&self) -> BTreeMap<Dimension, f64> {
        self.iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("profile is missing dimension {0}")]
    MissingDimension(Dimension),
    #[error("profile score for {0} is not a finite number")]
    NonFinite(Dimension),
}

impl TryFrom<BTreeMap<Dimension, f64>> for Profile {
    type Error = ProfileError;

    fn try_from(map: BTreeMap<Dimension, f64>) -> Result<Self, Self::Error> {
        let mut scores = [0.0; DIMENSION_COUNT];
        for dimension in Dimension::ALL {
            let value = *map
                .get(&dimension)
                .ok_or(ProfileError::MissingDimension(dimension))?;
            if !value.is_finite() {
                return Err(ProfileError::NonFinite(dimension));
            }
            scores[dimension.index()] = value;
        }
        Ok(Self { scores })
    }
}

impl From<Profile> for BTreeMap<Dimension, f64> {
    fn from(profile: Profile) -> Self {
        profile.to_map()
    }
}
