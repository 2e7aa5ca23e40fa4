use std::collections::HashSet;

use intake_pathways::evaluate::{resolve_pathways, selected_complaints};
use intake_pathways::{get_pathway, mapping};

fn keys(complaints: &[&str]) -> Vec<String> {
    resolve_pathways(complaints)
        .iter()
        .map(|p| p.key().to_string())
        .collect()
}

#[test]
fn empty_selection_resolves_to_nothing() {
    assert!(resolve_pathways(Vec::<String>::new()).is_empty());
}

#[test]
fn aliases_of_one_pathway_collapse_to_a_single_entry() {
    assert_eq!(keys(&["headInjury", "injuryTrauma"]), vec!["injuryTrauma"]);
}

#[test]
fn order_follows_first_mention() {
    assert_eq!(
        keys(&["vomiting", "chestPain", "nausea", "headache"]),
        vec!["nauseaVomiting", "chestPain", "headache"]
    );
}

#[test]
fn unmapped_and_unknown_complaints_are_dropped() {
    assert_eq!(keys(&["fatigue", "fever", "notAComplaint"]), vec!["fever"]);
    assert!(keys(&["anxiety", "other"]).is_empty());
}

#[test]
fn every_chief_complaint_resolves_to_registered_pathways_without_duplicates() {
    let all: Vec<&str> = mapping::chief_complaints().collect();
    let resolved = resolve_pathways(&all);

    let mut seen = HashSet::new();
    for pathway in &resolved {
        assert!(seen.insert(pathway.key()), "duplicate {}", pathway.key());
        assert!(get_pathway(pathway.key()).is_some());
    }
    assert_eq!(resolved.len(), 12);
}

#[test]
fn selected_complaints_keeps_only_set_flags_in_order() {
    let flags = [
        ("headInjury", true),
        ("fever", false),
        ("injuryTrauma", true),
        ("cough", true),
    ];
    assert_eq!(
        selected_complaints(flags),
        vec!["headInjury", "injuryTrauma", "cough"]
    );
    assert_eq!(keys(&["headInjury", "injuryTrauma", "cough"]), vec!["injuryTrauma", "cough"]);
}
