use crate::SymptomPathway;
use crate::question::PathwayQuestion;

/// Cough and sore throat.
pub struct Cough;

impl SymptomPathway for Cough {
    fn key(&self) -> &str {
        "cough"
    }

    fn name(&self) -> &str {
        "Cough / Sore Throat"
    }

    fn questions(&self) -> &[PathwayQuestion] {
        static QUESTIONS: std::sync::LazyLock<Vec<PathwayQuestion>> =
            std::sync::LazyLock::new(|| {
                vec![
                    PathwayQuestion::single_choice(
                        "cgDuration",
                        "How long have you had the cough?",
                        &[
                            ("lessThanWeek", "Less than a week"),
                            ("oneToThreeWeeks", "1–3 weeks"),
                            ("moreThanThreeWeeks", "More than 3 weeks"),
                        ],
                    ),
                    PathwayQuestion::severity("cgSeverity", "How much is it bothering you?"),
                    PathwayQuestion::boolean("cgProductive", "Are you coughing anything up?"),
                    PathwayQuestion::single_choice(
                        "cgSputum",
                        "What does it look like?",
                        &[
                            ("clear", "Clear or white"),
                            ("yellowGreen", "Yellow or green"),
                            ("bloody", "Blood-stained"),
                        ],
                    )
                    .shown_when("cgProductive", true)
                    .red_flag_on(&["bloody"]),
                    PathwayQuestion::boolean("cgSoreThroat", "Do you have a sore throat?"),
                    PathwayQuestion::boolean(
                        "cgSwallowing",
                        "Are you unable to swallow your own saliva?",
                    )
                    .shown_when("cgSoreThroat", true)
                    .red_flag_when(true),
                    PathwayQuestion::boolean("cgWeightLoss", "Have you lost weight without trying?")
                        .shown_when("cgDuration", "moreThanThreeWeeks")
                        .red_flag_when(true),
                ]
            });
        &QUESTIONS
    }
}
