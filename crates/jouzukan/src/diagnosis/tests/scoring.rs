use super::common::*;
use crate::diagnosis::dimension::Dimension;
use crate::diagnosis::domain::AnswerSet;
use crate::diagnosis::BASE_SCORE;

#[test]
fn empty_answers_leave_every_dimension_at_base() {
    let engine = engine();

    let profile = engine.compute_profile(&AnswerSet::new());

    for (_, score) in profile.iter() {
        assert_eq!(score, BASE_SCORE);
    }
}

#[test]
fn neutral_answers_leave_every_dimension_at_base() {
    let engine = engine();

    let profile = engine.compute_profile(&answers_with(&[]));

    for (dimension, score) in profile.iter() {
        assert_eq!(score, 10.0, "{dimension} moved on neutral answers");
    }
}

#[test]
fn strong_agreement_on_question_one_shifts_its_dimensions() {
    let engine = engine();

    let profile = engine.compute_profile(&answers_with(&[(1, 5)]));

    assert_eq!(profile.get(Dimension::Respect), 12.4);
    assert_eq!(profile.get(Dimension::Warmth), 10.6);
    assert_eq!(profile.get(Dimension::UniversalTruth), 9.4);
    for dimension in [
        Dimension::Responsibility,
        Dimension::DivineGuidance,
        Dimension::Mission,
        Dimension::HeavenlyWork,
        Dimension::Thoroughness,
        Dimension::Innovation,
    ] {
        assert_eq!(profile.get(dimension), 10.0);
    }
}

#[test]
fn strong_disagreement_inverts_the_weights() {
    let engine = engine();

    let profile = engine.compute_profile(&answers_with(&[(1, 1)]));

    assert_eq!(profile.get(Dimension::Respect), 7.6);
    assert_eq!(profile.get(Dimension::Warmth), 9.4);
    assert_eq!(profile.get(Dimension::UniversalTruth), 10.6);
}

#[test]
fn unknown_questions_and_out_of_range_values_are_ignored() {
    let engine = engine();
    let answers: AnswerSet = [(1, 9), (2, 0), (42, 5), (999, 1)].into_iter().collect();

    let profile = engine.compute_profile(&answers);

    assert_eq!(profile, engine.compute_profile(&AnswerSet::new()));
}

#[test]
fn profiles_are_deterministic_and_rounded_to_tenths() {
    let engine = engine();
    let answers = answers_with(&[(3, 5), (5, 4), (9, 2), (15, 1), (17, 5), (18, 4)]);

    let first = engine.compute_profile(&answers);
    let second = engine.compute_profile(&answers);

    assert_eq!(first, second);
    for (dimension, score) in first.iter() {
        let tenths = score * 10.0;
        assert!(
            (tenths - tenths.round()).abs() < 1e-9,
            "{dimension} score {score} is not a multiple of 0.1"
        );
    }
}

#[test]
fn agreement_with_one_question_accumulates_across_answers() {
    let engine = engine();

    let profile = engine.compute_profile(&answers_with(&[(5, 5), (6, 5)]));

    assert_eq!(profile.get(Dimension::Responsibility), 15.4);
    assert_eq!(profile.get(Dimension::Mission), 11.2);
    assert_eq!(profile.get(Dimension::UniversalTruth), 10.8);
    assert_eq!(profile.get(Dimension::Thoroughness), 9.4);
    assert_eq!(profile.get(Dimension::Innovation), 9.0);
}
