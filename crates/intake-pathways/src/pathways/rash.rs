use crate::SymptomPathway;
use crate::question::PathwayQuestion;

/// Rash and itching: spread, appearance, anaphylaxis screen.
pub struct Rash;

impl SymptomPathway for Rash {
    fn key(&self) -> &str {
        "rash"
    }

    fn name(&self) -> &str {
        "Rash / Skin"
    }

    fn questions(&self) -> &[PathwayQuestion] {
        static QUESTIONS: std::sync::LazyLock<Vec<PathwayQuestion>> =
            std::sync::LazyLock::new(|| {
                vec![
                    PathwayQuestion::free_text("rsWhere", "Where on your body is the rash?"),
                    PathwayQuestion::multi_choice(
                        "rsAppearance",
                        "What does it look like?",
                        &[
                            ("red", "Red or blotchy"),
                            ("raised", "Raised bumps or hives"),
                            ("blisters", "Blisters"),
                            ("purple", "Purple or bruise-like spots"),
                            ("peeling", "Peeling skin"),
                        ],
                    )
                    .max_selections(3)
                    .red_flag_on(&["purple"]),
                    PathwayQuestion::severity("rsItch", "How itchy or painful is it?"),
                    PathwayQuestion::boolean("rsSpreading", "Is it spreading quickly?"),
                    PathwayQuestion::single_choice(
                        "rsSwelling",
                        "Is there any swelling?",
                        &[
                            ("none", "No swelling"),
                            ("rashArea", "Only around the rash"),
                            ("lipsTongue", "Lips, tongue or face"),
                        ],
                    )
                    .red_flag_on(&["lipsTongue"]),
                    PathwayQuestion::boolean("rsBreathing", "Are you having trouble breathing?")
                        .red_flag_when(true),
                    PathwayQuestion::boolean(
                        "rsNewMedication",
                        "Did you start a new medication in the last two weeks?",
                    ),
                    PathwayQuestion::free_text("rsMedicationName", "Which medication?")
                        .shown_when("rsNewMedication", true),
                ]
            });
        &QUESTIONS
    }
}
