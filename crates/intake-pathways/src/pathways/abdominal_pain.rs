use crate::SymptomPathway;
use crate::question::{LocationKind, PathwayQuestion};

use super::{DURATION, ONSET};

/// Abdominal pain: location, severity, onset, bleeding and pregnancy screens.
pub struct AbdominalPain;

impl SymptomPathway for AbdominalPain {
    fn key(&self) -> &str {
        "abdominalPain"
    }

    fn name(&self) -> &str {
        "Abdominal Pain"
    }

    fn questions(&self) -> &[PathwayQuestion] {
        static QUESTIONS: std::sync::LazyLock<Vec<PathwayQuestion>> =
            std::sync::LazyLock::new(|| {
                vec![
                    PathwayQuestion::body_location(
                        "abLocation",
                        "Where is the pain?",
                        LocationKind::Abdomen,
                    ),
                    PathwayQuestion::severity("abSeverity", "How severe is the pain right now?")
                        .red_flag_at(8.0),
                    PathwayQuestion::single_choice("abOnsetType", "How did the pain start?", ONSET),
                    PathwayQuestion::single_choice(
                        "abSuddenActivity",
                        "What were you doing when it started?",
                        &[
                            ("resting", "Resting or sleeping"),
                            ("eating", "Eating"),
                            ("exercising", "Exercising or lifting"),
                            ("other", "Something else"),
                        ],
                    )
                    .shown_when("abOnsetType", "sudden"),
                    PathwayQuestion::single_choice("abDuration", "How long have you had it?", DURATION),
                    PathwayQuestion::multi_choice(
                        "abAssociated",
                        "Do you have any of these as well?",
                        &[
                            ("nausea", "Nausea"),
                            ("vomiting", "Vomiting"),
                            ("diarrhea", "Diarrhea"),
                            ("constipation", "Constipation"),
                            ("fever", "Fever"),
                            ("bloodInStool", "Blood in stool or black stool"),
                            ("vomitingBlood", "Vomiting blood"),
                            ("none", "None of these"),
                        ],
                    )
                    .red_flag_on(&["bloodInStool", "vomitingBlood"]),
                    PathwayQuestion::boolean(
                        "abRigid",
                        "Is your belly hard and too painful to touch?",
                    )
                    .red_flag_when(true),
                    PathwayQuestion::single_choice(
                        "abPregnancy",
                        "Could you be pregnant?",
                        &[
                            ("yes", "Yes"),
                            ("no", "No"),
                            ("unsure", "Not sure"),
                            ("notApplicable", "Not applicable"),
                        ],
                    ),
                    PathwayQuestion::boolean("abVaginalBleeding", "Do you have any vaginal bleeding?")
                        .shown_when_any("abPregnancy", &["yes", "unsure"])
                        .red_flag_when(true),
                ]
            });
        &QUESTIONS
    }
}
