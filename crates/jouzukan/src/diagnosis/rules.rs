use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use super::domain::Profile;

/// Comparison operator applied by a threshold condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    AtLeast,
    GreaterThan,
    AtMost,
    LessThan,
}

impl Comparison {
    pub fn holds(self, actual: f64, expected: f64) -> bool {
        match self {
            Comparison::AtLeast => actual >= expected,
            Comparison::GreaterThan => actual > expected,
            Comparison::AtMost => actual <= expected,
            Comparison::LessThan => actual < expected,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::AtLeast => ">=",
            Comparison::GreaterThan => ">",
            Comparison::AtMost => "<=",
            Comparison::LessThan => "<",
        }
    }
}

/// Single clause of a priority rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    Threshold {
        dimension: Dimension,
        comparison: Comparison,
        value: f64,
    },
    /// Holds when at least `n` of `dimensions` score `>= value`.
    CountAtLeast {
        dimensions: Vec<Dimension>,
        value: f64,
        n: usize,
    },
}

impl Condition {
    pub fn at_least(dimension: Dimension, value: f64) -> Self {
        Condition::Threshold {
            dimension,
            comparison: Comparison::AtLeast,
            value,
        }
    }

    pub fn count_at_least(dimensions: &[Dimension], value: f64, n: usize) -> Self {
        Condition::CountAtLeast {
            dimensions: dimensions.to_vec(),
            value,
            n,
        }
    }

    pub fn holds(&self, profile: &Profile) -> bool {
        match self {
            Condition::Threshold {
                dimension,
                comparison,
                value,
            } => comparison.holds(profile.get(*dimension), *value),
            Condition::CountAtLeast {
                dimensions,
                value,
                n,
            } => {
                dimensions
                    .iter()
                    .filter(|dimension| profile.get(**dimension) >= *value)
                    .count()
                    >= *n
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Condition::Threshold {
                dimension,
                comparison,
                value,
            } => format!("{dimension} {} {value:.1}", comparison.symbol()),
            Condition::CountAtLeast {
                dimensions,
                value,
                n,
            } => {
                let names: Vec<&str> = dimensions.iter().map(|d| d.key()).collect();
                format!("at least {n} of {{{}}} >= {value:.1}", names.join(", "))
            }
        }
    }
}

/// Named conjunction of conditions. `rank` fixes its position in the
/// evaluation order; lower ranks are tried first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityRule {
    pub name: String,
    pub rank: u8,
    pub conditions: Vec<Condition>,
}

impl PriorityRule {
    pub fn new(name: impl Into<String>, rank: u8, conditions: Vec<Condition>) -> Self {
        Self {
            name: name.into(),
            rank,
            conditions,
        }
    }

    pub fn matches(&self, profile: &Profile) -> bool {
        self.conditions
            .iter()
            .all(|condition| condition.holds(profile))
    }

    pub fn describe(&self) -> String {
        let clauses: Vec<String> = self.conditions.iter().map(Condition::describe).collect();
        clauses.join(" and ")
    }
}
