use std::collections::BTreeMap;

use intake_core::models::answer::Answers;
use intake_core::models::location::{Laterality, LocationSelection};
use intake_pathways::error::PathwayError;
use intake_pathways::evaluate::{build_submission, check_responses, resolve_pathways};

#[test]
fn no_red_flags_across_two_pathways() {
    let active = resolve_pathways(["chestPain", "fever"]);

    let mut responses = BTreeMap::new();
    responses.insert(
        "chestPain".to_string(),
        [("cpSeverity", 3)].into_iter().collect::<Answers>(),
    );
    responses.insert(
        "fever".to_string(),
        [("fvSeverity", 4)].into_iter().collect::<Answers>(),
    );

    let data = build_submission(&active, &responses);
    assert!(data.overall_red_flags.is_empty());
    assert_eq!(data.completed_pathways.len(), 2);
    assert!(data.completed);
    for entry in &data.completed_pathways {
        assert!(entry.red_flags_triggered.is_empty());
    }
}

#[test]
fn entries_follow_resolution_order_and_carry_shortcuts() {
    let active = resolve_pathways(["abdominalPain", "headache"]);

    let location = LocationSelection::new(["rightLowerQuadrant"]).with_laterality(Laterality::Right);
    let mut abdominal = Answers::new();
    abdominal.insert("abLocation", location.clone());
    abdominal.insert("abSeverity", 9);
    abdominal.insert("abRigid", true);

    let mut headache = Answers::new();
    headache.insert("haSeverity", 5);
    headache.insert("haNeuroSymptoms", ["weakness"]);

    let responses = BTreeMap::from([
        ("headache".to_string(), headache),
        ("abdominalPain".to_string(), abdominal),
    ]);

    let data = build_submission(&active, &responses);
    let keys: Vec<&str> = data
        .completed_pathways
        .iter()
        .map(|e| e.pathway_key.as_str())
        .collect();
    assert_eq!(keys, vec!["abdominalPain", "headache"]);

    let ab = data.entry("abdominalPain").expect("entry");
    assert_eq!(ab.severity, Some(9.0));
    assert_eq!(ab.location.as_ref(), Some(&location));
    assert_eq!(ab.red_flags_triggered, vec!["abSeverity", "abRigid"]);

    let ha = data.entry("headache").expect("entry");
    assert_eq!(ha.severity, Some(5.0));
    assert_eq!(ha.location, None);

    assert_eq!(
        data.overall_red_flags,
        vec!["abSeverity", "abRigid", "haNeuroSymptoms"]
    );
    assert!(data.has_red_flags());
}

#[test]
fn pathway_without_answers_still_gets_an_entry() {
    let active = resolve_pathways(["cough"]);
    let data = build_submission(&active, &BTreeMap::new());

    assert_eq!(data.completed_pathways.len(), 1);
    let entry = &data.completed_pathways[0];
    assert!(entry.answers.is_empty());
    assert_eq!(entry.severity, None);
    assert!(entry.red_flags_triggered.is_empty());
}

#[test]
fn overall_red_flags_are_deduplicated() {
    // Same pathway listed twice by a caller that skipped resolution.
    let pathway = intake_pathways::get_pathway("rash").expect("registered");
    let active = [pathway, pathway];
    let responses = BTreeMap::from([(
        "rash".to_string(),
        [("rsBreathing", true)].into_iter().collect::<Answers>(),
    )]);

    let data = build_submission(&active, &responses);
    assert_eq!(data.completed_pathways.len(), 2);
    assert_eq!(data.overall_red_flags, vec!["rsBreathing"]);
}

#[test]
fn empty_selection_builds_empty_completed_submission() {
    let data = build_submission(&[], &BTreeMap::new());
    assert!(data.completed_pathways.is_empty());
    assert!(data.overall_red_flags.is_empty());
    assert!(data.completed);
}

#[test]
fn check_responses_reports_first_failing_pathway() {
    let active = resolve_pathways(["cough"]);
    let responses = BTreeMap::from([(
        "cough".to_string(),
        [("cgDuration", "forever")].into_iter().collect::<Answers>(),
    )]);

    match check_responses(&active, &responses) {
        Err(PathwayError::InvalidAnswers {
            pathway_key,
            errors,
        }) => {
            assert_eq!(pathway_key, "cough");
            assert!(errors.iter().any(|e| e.question_id == "cgDuration"));
        }
        other => panic!("expected InvalidAnswers, got {other:?}"),
    }
}
