use intake_core::models::answer::Answers;
use intake_core::models::location::{Laterality, LocationSelection};
use intake_pathways::get_pathway;

#[test]
fn empty_answers_produce_heading_only() {
    let pathway = get_pathway("cough").expect("registered");
    assert_eq!(
        pathway.to_structured_input(&Answers::new()),
        "## Cough / Sore Throat\n\n\n"
    );
}

#[test]
fn answers_are_rendered_with_labels_and_red_flags() {
    let pathway = get_pathway("abdominalPain").expect("registered");

    let mut answers = Answers::new();
    answers.insert(
        "abLocation",
        LocationSelection::new(["rightLowerQuadrant"]).with_laterality(Laterality::Right),
    );
    answers.insert("abSeverity", 9);
    answers.insert("abOnsetType", "gradual");
    // Hidden because onset is gradual.
    answers.insert("abSuddenActivity", "eating");
    answers.insert("abAssociated", ["nausea", "fever"]);

    let text = pathway.to_structured_input(&answers);
    assert!(text.starts_with("## Abdominal Pain\n\n"));
    assert!(text.contains("- Where is the pain?: rightLowerQuadrant (right side)\n"));
    assert!(text.contains("- How severe is the pain right now?: 9/10 **[red flag]**\n"));
    assert!(text.contains("- How did the pain start?: Gradually (hours to days)\n"));
    assert!(text.contains("- Do you have any of these as well?: Nausea, Fever\n"));
    assert!(!text.contains("What were you doing"));
}

#[test]
fn booleans_render_as_yes_no() {
    let pathway = get_pathway("rash").expect("registered");
    let answers: Answers = [("rsBreathing", true), ("rsSpreading", false)]
        .into_iter()
        .collect();

    let text = pathway.to_structured_input(&answers);
    assert!(text.contains("- Is it spreading quickly?: No\n"));
    assert!(text.contains("- Are you having trouble breathing?: Yes **[red flag]**\n"));
}
