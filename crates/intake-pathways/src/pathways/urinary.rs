use crate::SymptomPathway;
use crate::question::PathwayQuestion;

/// Urinary symptoms: infection, kidney involvement, retention.
pub struct Urinary;

impl SymptomPathway for Urinary {
    fn key(&self) -> &str {
        "urinary"
    }

    fn name(&self) -> &str {
        "Urinary Problems"
    }

    fn questions(&self) -> &[PathwayQuestion] {
        static QUESTIONS: std::sync::LazyLock<Vec<PathwayQuestion>> =
            std::sync::LazyLock::new(|| {
                vec![
                    PathwayQuestion::multi_choice(
                        "urSymptoms",
                        "Which of these do you have?",
                        &[
                            ("burning", "Burning or pain when passing urine"),
                            ("frequency", "Needing to go more often"),
                            ("urgency", "Sudden urge to go"),
                            ("blood", "Blood in urine"),
                            ("cannotPass", "Unable to pass urine"),
                        ],
                    )
                    .red_flag_on(&["cannotPass"]),
                    PathwayQuestion::severity("urSeverity", "How uncomfortable are you right now?"),
                    PathwayQuestion::boolean("urFlankPain", "Do you have pain in your side or back?"),
                    PathwayQuestion::boolean("urFever", "Do you have a fever or shivers?")
                        .shown_when("urFlankPain", true)
                        .red_flag_when(true),
                    PathwayQuestion::single_choice(
                        "urPregnancy",
                        "Could you be pregnant?",
                        &[
                            ("yes", "Yes"),
                            ("no", "No"),
                            ("unsure", "Not sure"),
                            ("notApplicable", "Not applicable"),
                        ],
                    ),
                ]
            });
        &QUESTIONS
    }
}
