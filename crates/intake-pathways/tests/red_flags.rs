use intake_core::models::answer::Answers;
use intake_core::models::location::LocationSelection;
use intake_pathways::SymptomPathway;
use intake_pathways::evaluate::detect_red_flags;
use intake_pathways::get_pathway;
use intake_pathways::question::{LocationKind, PathwayQuestion};

fn flags(pathway: &str, answers: Answers) -> Vec<String> {
    detect_red_flags(get_pathway(pathway).expect("registered"), &answers)
}

#[test]
fn severity_slider_triggers_at_threshold() {
    let at = |n: i32| flags("abdominalPain", [("abSeverity", n)].into_iter().collect());

    assert!(at(7).is_empty());
    assert_eq!(at(8), vec!["abSeverity"]);
    assert_eq!(at(10), vec!["abSeverity"]);
}

#[test]
fn slider_without_numeric_rule_uses_default_threshold() {
    let pathway = get_pathway("backPain").expect("registered");
    let rule = pathway
        .question("bpSeverity")
        .and_then(|q| q.red_flag.as_ref())
        .expect("red flag rule");
    assert_eq!(rule.threshold(), 8.0);

    assert!(flags("backPain", [("bpSeverity", 7.5)].into_iter().collect()).is_empty());
    assert_eq!(
        flags("backPain", [("bpSeverity", 8)].into_iter().collect()),
        vec!["bpSeverity"]
    );
}

#[test]
fn custom_slider_threshold() {
    let answers = |t: f64| {
        let mut answers = Answers::new();
        answers.insert("fvMeasured", true);
        answers.insert("fvTemperature", t);
        answers
    };
    assert!(flags("fever", answers(39.9)).is_empty());
    assert_eq!(flags("fever", answers(40.2)), vec!["fvTemperature"]);
}

#[test]
fn slider_answer_given_as_text_is_ignored() {
    assert!(flags("abdominalPain", [("abSeverity", "9")].into_iter().collect()).is_empty());
}

#[test]
fn multi_choice_triggers_on_intersection() {
    let with = flags(
        "headache",
        [("haNeuroSymptoms", ["nausea", "doubleVision"])]
            .into_iter()
            .collect(),
    );
    assert_eq!(with, vec!["haNeuroSymptoms"]);

    let without = flags(
        "headache",
        [("haNeuroSymptoms", ["nausea"])].into_iter().collect(),
    );
    assert!(without.is_empty());
}

#[test]
fn single_choice_and_boolean_trigger_on_membership() {
    let mut answers = Answers::new();
    answers.insert("cpCharacter", "tearing");
    answers.insert("cpSweating", true);
    answers.insert("cpShortBreath", false);
    answers.insert("cpSeverity", 3);

    assert_eq!(flags("chestPain", answers), vec!["cpCharacter", "cpSweating"]);
}

#[test]
fn boolean_rule_on_false() {
    assert_eq!(
        flags("nauseaVomiting", [("nvKeepsFluids", false)].into_iter().collect()),
        vec!["nvKeepsFluids"]
    );
    assert!(flags("nauseaVomiting", [("nvKeepsFluids", true)].into_iter().collect()).is_empty());
}

#[test]
fn results_follow_question_order() {
    let mut answers = Answers::new();
    // Insert in reverse of pathway order.
    answers.insert("abRigid", true);
    answers.insert("abAssociated", ["vomitingBlood"]);
    answers.insert("abSeverity", 9);

    assert_eq!(
        flags("abdominalPain", answers),
        vec!["abSeverity", "abAssociated", "abRigid"]
    );
}

#[test]
fn detection_is_idempotent() {
    let pathway = get_pathway("chestPain").expect("registered");
    let mut answers = Answers::new();
    answers.insert("cpRadiation", ["jaw"]);
    answers.insert("cpSeverity", 9);

    let first = detect_red_flags(pathway, &answers);
    let second = detect_red_flags(pathway, &answers);
    assert_eq!(first, second);
    assert_eq!(first, vec!["cpSeverity", "cpRadiation"]);
}

struct Custom;

impl SymptomPathway for Custom {
    fn key(&self) -> &str {
        "custom"
    }

    fn name(&self) -> &str {
        "Custom"
    }

    fn questions(&self) -> &[PathwayQuestion] {
        static QUESTIONS: std::sync::LazyLock<Vec<PathwayQuestion>> =
            std::sync::LazyLock::new(|| {
                vec![
                    PathwayQuestion::body_location("where", "Where?", LocationKind::Abdomen)
                        .red_flag_on(&["rightLowerQuadrant"]),
                    PathwayQuestion::free_text("notes", "Notes").red_flag_on(&["help"]),
                ]
            });
        &QUESTIONS
    }
}

#[test]
fn location_and_free_text_rules() {
    let mut answers = Answers::new();
    answers.insert(
        "where",
        LocationSelection::new(["epigastric", "rightLowerQuadrant"]),
    );
    answers.insert("notes", "help");
    assert_eq!(detect_red_flags(&Custom, &answers), vec!["where", "notes"]);

    answers.insert("where", LocationSelection::new(["epigastric"]));
    answers.insert("notes", "fine");
    assert!(detect_red_flags(&Custom, &answers).is_empty());
}
