use intake_pathways::question::PathwayQuestion;
use intake_pathways::registry::{ensure_consistent, validate_pathway, validate_registry};
use intake_pathways::{SymptomPathway, all_pathways, get_pathway, mapping, require_pathway};

#[test]
fn registry_has_twelve_pathways_with_unique_keys() {
    let keys: Vec<&str> = all_pathways().iter().map(|p| p.key()).collect();
    assert_eq!(keys.len(), 12);
    let mut deduped = keys.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), 12);
}

#[test]
fn registry_is_consistent() {
    let errors = validate_registry();
    assert!(errors.is_empty(), "{errors:#?}");
    assert!(ensure_consistent().is_ok());
}

#[test]
fn every_mapping_targets_a_registered_pathway() {
    for (complaint, key) in mapping::COMPLAINT_PATHWAYS {
        assert!(get_pathway(key).is_some(), "{complaint} -> {key}");
    }
    for complaint in mapping::UNMAPPED_COMPLAINTS {
        assert_eq!(mapping::pathway_key_for(complaint), None);
    }
}

#[test]
fn lookup_by_key() {
    assert_eq!(get_pathway("chestPain").map(|p| p.name()), Some("Chest Pain"));
    assert!(get_pathway("nope").is_none());
    assert!(require_pathway("nope").is_err());
}

struct Broken;

impl SymptomPathway for Broken {
    fn key(&self) -> &str {
        "broken"
    }

    fn name(&self) -> &str {
        "Broken"
    }

    fn questions(&self) -> &[PathwayQuestion] {
        static QUESTIONS: std::sync::LazyLock<Vec<PathwayQuestion>> =
            std::sync::LazyLock::new(|| {
                vec![
                    // Depends on a later question.
                    PathwayQuestion::boolean("early", "Early?").shown_when("late", true),
                    PathwayQuestion::boolean("late", "Late?"),
                    PathwayQuestion::single_choice("empty", "Empty?", &[]),
                    PathwayQuestion::slider("inverted", "Inverted?", 10.0, 0.0, 1.0),
                    PathwayQuestion::severity("pain", "Pain?").red_flag_at(11.0),
                    PathwayQuestion::single_choice("pick", "Pick?", &[("a", "A")])
                        .red_flag_on(&["b"]),
                    PathwayQuestion::boolean("late", "Duplicate?"),
                    PathwayQuestion::boolean("elsewhere", "Elsewhere?")
                        .shown_when("otherPathwayQuestion", true),
                ]
            });
        &QUESTIONS
    }
}

#[test]
fn broken_pathway_reports_each_problem() {
    let errors = validate_pathway(&Broken);
    let flagged: Vec<Option<&str>> = errors.iter().map(|e| e.question_id.as_deref()).collect();

    assert_eq!(
        flagged,
        vec![
            Some("early"),
            Some("empty"),
            Some("inverted"),
            Some("pain"),
            Some("pick"),
            Some("late"),
            Some("elsewhere"),
        ]
    );
    assert!(errors.iter().all(|e| e.pathway_key == "broken"));
    assert!(errors[0].message.contains("not an earlier question"));
}
