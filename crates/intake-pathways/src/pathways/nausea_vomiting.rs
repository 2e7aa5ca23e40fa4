use crate::SymptomPathway;
use crate::question::PathwayQuestion;

use super::DURATION;

/// Nausea, vomiting and diarrhea: frequency, hydration, bleeding.
pub struct NauseaVomiting;

impl SymptomPathway for NauseaVomiting {
    fn key(&self) -> &str {
        "nauseaVomiting"
    }

    fn name(&self) -> &str {
        "Nausea / Vomiting"
    }

    fn questions(&self) -> &[PathwayQuestion] {
        static QUESTIONS: std::sync::LazyLock<Vec<PathwayQuestion>> =
            std::sync::LazyLock::new(|| {
                vec![
                    PathwayQuestion::severity("nvSeverity", "How bad is the nausea right now?"),
                    PathwayQuestion::boolean("nvVomiting", "Have you been vomiting?"),
                    PathwayQuestion::single_choice(
                        "nvVomitCount",
                        "How many times in the last 24 hours?",
                        &[
                            ("oneToTwo", "1–2 times"),
                            ("threeToFive", "3–5 times"),
                            ("moreThanFive", "More than 5 times"),
                        ],
                    )
                    .shown_when("nvVomiting", true),
                    PathwayQuestion::boolean("nvBlood", "Is there blood or coffee-ground material in it?")
                        .shown_when("nvVomiting", true)
                        .red_flag_when(true),
                    PathwayQuestion::boolean("nvKeepsFluids", "Can you keep fluids down?")
                        .red_flag_when(false),
                    PathwayQuestion::single_choice("nvDuration", "How long has this gone on?", DURATION),
                    PathwayQuestion::boolean("nvDiarrhea", "Do you have diarrhea?"),
                    PathwayQuestion::boolean(
                        "nvReducedUrine",
                        "Are you passing much less urine than usual?",
                    )
                    .red_flag_when(true),
                ]
            });
        &QUESTIONS
    }
}
