use crate::SymptomPathway;
use crate::question::PathwayQuestion;

/// Dizziness and fainting: type, syncope, stroke screen.
pub struct Dizziness;

impl SymptomPathway for Dizziness {
    fn key(&self) -> &str {
        "dizziness"
    }

    fn name(&self) -> &str {
        "Dizziness / Fainting"
    }

    fn questions(&self) -> &[PathwayQuestion] {
        static QUESTIONS: std::sync::LazyLock<Vec<PathwayQuestion>> =
            std::sync::LazyLock::new(|| {
                vec![
                    PathwayQuestion::single_choice(
                        "dzType",
                        "What does the dizziness feel like?",
                        &[
                            ("spinning", "The room is spinning"),
                            ("lightheaded", "Light-headed, about to faint"),
                            ("unsteady", "Unsteady on my feet"),
                        ],
                    ),
                    PathwayQuestion::severity("dzSeverity", "How severe is it right now?"),
                    PathwayQuestion::boolean("dzFainted", "Did you pass out?").red_flag_when(true),
                    PathwayQuestion::boolean("dzFaintExertion", "Did you pass out during exercise?")
                        .shown_when("dzFainted", true)
                        .red_flag_when(true),
                    PathwayQuestion::multi_choice(
                        "dzAssociated",
                        "Do you have any of these as well?",
                        &[
                            ("nausea", "Nausea"),
                            ("hearingLoss", "Hearing loss or ringing"),
                            ("doubleVision", "Double vision"),
                            ("slurredSpeech", "Slurred speech"),
                            ("weakness", "Weakness or numbness on one side"),
                            ("none", "None of these"),
                        ],
                    )
                    .max_selections(3)
                    .red_flag_on(&["doubleVision", "slurredSpeech", "weakness"]),
                    PathwayQuestion::boolean(
                        "dzPositional",
                        "Is it triggered by turning your head or rolling over?",
                    )
                    .shown_when("dzType", "spinning"),
                ]
            });
        &QUESTIONS
    }
}
