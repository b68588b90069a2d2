use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::{Archetype, ArchetypeCatalog, CatalogError, CAMEL, DONKEY, FISH};
use super::dimension::Dimension;
use super::domain::Profile;
use super::rules::PriorityRule;

/// Sums compared when no priority rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackGroups {
    pub group_a: f64,
    pub group_b: f64,
    pub group_c: f64,
}

impl FallbackGroups {
    pub fn from_profile(profile: &Profile) -> Self {
        let group_a = profile.get(Dimension::Respect)
            + profile.get(Dimension::Warmth)
            + profile.get(Dimension::HeavenlyWork);
        let group_b = profile.get(Dimension::DivineGuidance)
            + profile.get(Dimension::Mission)
            + profile.get(Dimension::Innovation);
        let group_c =
            (profile.get(Dimension::Responsibility) + profile.get(Dimension::Thoroughness)) * 1.5;

        Self {
            group_a,
            group_b,
            group_c,
        }
    }

    /// Archetype id picked by the group comparison.
    ///
    /// Group A wins ties with `>=`, while group B must strictly beat A. It is
    /// unconfirmed whether that asymmetry was intended; keep it unchanged until
    /// the quiz owners decide.
    pub fn winner(&self) -> &'static str {
        if self.group_a >= self.group_b && self.group_a >= self.group_c {
            DONKEY
        } else if self.group_b > self.group_a && self.group_b >= self.group_c {
            FISH
        } else {
            CAMEL
        }
    }
}

/// How an archetype was selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassificationBasis {
    PriorityRule { name: String, rank: u8 },
    Fallback(FallbackGroups),
}

/// Audit trail of a classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub archetype_id: String,
    pub basis: ClassificationBasis,
}

impl Classification {
    pub fn summary(&self) -> String {
        match &self.basis {
            ClassificationBasis::PriorityRule { name, rank } => {
                format!("matched priority rule #{rank} '{name}'")
            }
            ClassificationBasis::Fallback(groups) => format!(
                "fallback groups A={:.1} B={:.1} C={:.1}",
                groups.group_a, groups.group_b, groups.group_c
            ),
        }
    }
}

/// Picks exactly one archetype for a profile: the first matching priority
/// rule, otherwise the fallback group comparison.
#[derive(Debug, Clone)]
pub struct ArchetypeClassifier {
    rules: Vec<(PriorityRule, Archetype)>,
    donkey: Archetype,
    fish: Archetype,
    camel: Archetype,
}

impl ArchetypeClassifier {
    pub fn new(catalog: &ArchetypeCatalog) -> Result<Self, CatalogError> {
        let fallback = |id: &'static str| {
            catalog
                .archetype(id)
                .cloned()
                .ok_or(CatalogError::MissingFallback(id))
        };

        Ok(Self {
            rules: catalog
                .ranked_rules()
                .into_iter()
                .map(|(rule, archetype)| (rule.clone(), archetype.clone()))
                .collect(),
            donkey: fallback(DONKEY)?,
            fish: fallback(FISH)?,
            camel: fallback(CAMEL)?,
        })
    }

    /// Rule names in evaluation order.
    pub fn rule_order(&self) -> Vec<&str> {
        self.rules.iter().map(|(rule, _)| rule.name.as_str()).collect()
    }

    pub fn classify(&self, profile: &Profile) -> &Archetype {
        self.resolve(profile).0
    }

    pub fn explain(&self, profile: &Profile) -> Classification {
        self.classify_explained(profile).1
    }

    /// Archetype together with the audit trail that selected it.
    pub fn classify_explained(&self, profile: &Profile) -> (&Archetype, Classification) {
        let (archetype, basis) = self.resolve(profile);
        let classification = Classification {
            archetype_id: archetype.id.clone(),
            basis,
        };
        (archetype, classification)
    }

    fn resolve(&self, profile: &Profile) -> (&Archetype, ClassificationBasis) {
        for (rule, archetype) in &self.rules {
            if rule.matches(profile) {
                debug!(rule = %rule.name, archetype = %archetype.id, "priority rule matched");
                return (
                    archetype,
                    ClassificationBasis::PriorityRule {
                        name: rule.name.clone(),
                        rank: rule.rank,
                    },
                );
            }
        }

        let groups = FallbackGroups::from_profile(profile);
        let archetype = match groups.winner() {
            DONKEY => &self.donkey,
            FISH => &self.fish,
            _ => &self.camel,
        };
        debug!(
            group_a = groups.group_a,
            group_b = groups.group_b,
            group_c = groups.group_c,
            archetype = %archetype.id,
            "no priority rule matched, using fallback groups"
        );

        (archetype, ClassificationBasis::Fallback(groups))
    }
}
