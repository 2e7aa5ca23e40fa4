use intake_core::models::answer::Answers;
use intake_core::models::location::LocationSelection;
use intake_pathways::evaluate::{is_visible, visible_questions};
use intake_pathways::question::{ConditionValue, PathwayQuestion, Scalar, VisibilityCondition};
use intake_pathways::get_pathway;

fn abdominal_question(id: &str) -> PathwayQuestion {
    get_pathway("abdominalPain")
        .and_then(|p| p.question(id).cloned())
        .expect("question exists")
}

#[test]
fn unconditional_questions_are_always_visible() {
    let question = abdominal_question("abSeverity");
    assert!(is_visible(&question, &Answers::new()));
}

#[test]
fn conditional_question_follows_its_dependency() {
    let question = abdominal_question("abSuddenActivity");

    assert!(!is_visible(&question, &Answers::new()));

    let gradual: Answers = [("abOnsetType", "gradual")].into_iter().collect();
    assert!(!is_visible(&question, &gradual));

    let sudden: Answers = [("abOnsetType", "sudden")].into_iter().collect();
    assert!(is_visible(&question, &sudden));
}

#[test]
fn single_required_value_matches_membership_in_multi_choice_answer() {
    let question = get_pathway("fever")
        .and_then(|p| p.question("fvRashBlanching").cloned())
        .expect("question exists");

    let mut answers = Answers::new();
    answers.insert("fvAssociated", ["chills", "rash"]);
    assert!(is_visible(&question, &answers));

    answers.insert("fvAssociated", ["chills"]);
    assert!(!is_visible(&question, &answers));
}

#[test]
fn scalar_answer_matches_any_of_required_values() {
    let question = abdominal_question("abVaginalBleeding");

    for (answer, expected) in [("yes", true), ("unsure", true), ("no", false)] {
        let answers: Answers = [("abPregnancy", answer)].into_iter().collect();
        assert_eq!(is_visible(&question, &answers), expected, "{answer}");
    }
}

#[test]
fn boolean_condition_requires_matching_boolean() {
    let question = get_pathway("injuryTrauma")
        .and_then(|p| p.question("itLostConsciousness").cloned())
        .expect("question exists");

    let yes: Answers = [("itHeadStruck", true)].into_iter().collect();
    let no: Answers = [("itHeadStruck", false)].into_iter().collect();
    let text: Answers = [("itHeadStruck", "true")].into_iter().collect();

    assert!(is_visible(&question, &yes));
    assert!(!is_visible(&question, &no));
    // No coercion between strings and booleans.
    assert!(!is_visible(&question, &text));
}

#[test]
fn collection_answer_against_collection_condition_needs_overlap() {
    let condition = VisibilityCondition {
        depends_on: "symptoms".to_string(),
        required_value: ConditionValue::AnyOf(vec![
            Scalar::from("cough"),
            Scalar::from("wheeze"),
        ]),
    };

    let overlap: Answers = [("symptoms", ["wheeze", "fever"])].into_iter().collect();
    let disjoint: Answers = [("symptoms", ["fever"])].into_iter().collect();

    assert!(condition.is_met(&overlap));
    assert!(!condition.is_met(&disjoint));
}

#[test]
fn location_answer_is_matched_by_region() {
    let condition = VisibilityCondition {
        depends_on: "where".to_string(),
        required_value: ConditionValue::One(Scalar::from("rightLowerQuadrant")),
    };

    let mut answers = Answers::new();
    answers.insert("where", LocationSelection::new(["rightLowerQuadrant"]));
    assert!(condition.is_met(&answers));

    answers.insert("where", LocationSelection::new(["epigastric"]));
    assert!(!condition.is_met(&answers));
}

#[test]
fn visible_questions_tracks_answer_changes() {
    let pathway = get_pathway("injuryTrauma").expect("registered");
    let mut answers = Answers::new();

    let before = visible_questions(pathway, &answers).len();
    answers.insert("itHeadStruck", true);
    let after: Vec<&str> = visible_questions(pathway, &answers)
        .iter()
        .map(|q| q.id.as_str())
        .collect();

    assert_eq!(after.len(), before + 3);
    assert!(after.contains(&"itHeadLocation"));
    assert!(after.contains(&"itLostConsciousness"));
    assert!(after.contains(&"itBloodThinners"));
}
