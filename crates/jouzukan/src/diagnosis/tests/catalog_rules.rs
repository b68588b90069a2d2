use super::common::*;
use crate::diagnosis::catalog::FALLBACK_ARCHETYPES;
use crate::diagnosis::dimension::Dimension;
use crate::diagnosis::rules::Condition;

#[test]
fn each_rule_is_independently_evaluable() {
    let engine = engine();
    let catalog = &engine.catalog().archetypes;

    let ant_rule = catalog
        .archetype("ant")
        .and_then(|archetype| archetype.priority_rule.as_ref())
        .expect("ant carries a rule");

    let below = profile_with(&[
        (Dimension::Thoroughness, 12.9),
        (Dimension::HeavenlyWork, 12.0),
    ]);
    let above = profile_with(&[
        (Dimension::Thoroughness, 13.0),
        (Dimension::HeavenlyWork, 11.5),
    ]);

    assert!(!ant_rule.matches(&below));
    assert!(ant_rule.matches(&above));
}

#[test]
fn fallback_archetypes_carry_no_rules() {
    let engine = engine();
    let catalog = &engine.catalog().archetypes;

    for id in FALLBACK_ARCHETYPES {
        let archetype = catalog.archetype(id).expect("fallback archetype present");
        assert!(archetype.priority_rule.is_none());
    }
    let ruled = catalog
        .iter()
        .filter(|archetype| archetype.priority_rule.is_some())
        .count();
    assert_eq!(ruled, 9);
}

#[test]
fn rule_tables_mix_threshold_and_count_conditions() {
    let engine = engine();
    let lamb = engine
        .catalog()
        .archetypes
        .archetype("lamb")
        .and_then(|archetype| archetype.priority_rule.clone())
        .expect("lamb carries a rule");

    assert!(matches!(lamb.conditions[0], Condition::Threshold { .. }));
    assert!(matches!(
        lamb.conditions[1],
        Condition::CountAtLeast { n: 2, .. }
    ));
    assert_eq!(
        lamb.describe(),
        "HeavenlyWork >= 12.5 and at least 2 of {Warmth, Innovation, Respect} >= 11.5"
    );
}
