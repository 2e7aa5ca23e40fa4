use crate::SymptomPathway;
use crate::question::{LocationKind, PathwayQuestion};

use super::{DURATION, ONSET};

/// Headache: onset, location, severity, neurological warning signs.
pub struct Headache;

impl SymptomPathway for Headache {
    fn key(&self) -> &str {
        "headache"
    }

    fn name(&self) -> &str {
        "Headache"
    }

    fn questions(&self) -> &[PathwayQuestion] {
        static QUESTIONS: std::sync::LazyLock<Vec<PathwayQuestion>> =
            std::sync::LazyLock::new(|| {
                vec![
                    PathwayQuestion::single_choice("haOnsetType", "How did the headache start?", ONSET),
                    PathwayQuestion::boolean(
                        "haWorstEver",
                        "Is this the worst headache you have ever had?",
                    )
                    .shown_when("haOnsetType", "sudden")
                    .red_flag_when(true),
                    PathwayQuestion::body_location(
                        "haLocation",
                        "Where is the headache?",
                        LocationKind::Head,
                    ),
                    PathwayQuestion::severity("haSeverity", "How severe is the headache right now?")
                        .red_flag_severe(),
                    PathwayQuestion::single_choice("haDuration", "How long have you had it?", DURATION),
                    PathwayQuestion::multi_choice(
                        "haNeuroSymptoms",
                        "Do you have any of these along with the headache?",
                        &[
                            ("nausea", "Nausea"),
                            ("lightSensitivity", "Sensitivity to light"),
                            ("doubleVision", "Double or blurred vision"),
                            ("weakness", "Weakness or numbness on one side"),
                            ("none", "None of these"),
                        ],
                    )
                    .red_flag_on(&["doubleVision", "weakness"]),
                    PathwayQuestion::boolean("haFeverStiffNeck", "Do you have a fever and a stiff neck?")
                        .red_flag_when(true),
                    PathwayQuestion::boolean(
                        "haHeadInjury",
                        "Did the headache start after a blow to the head?",
                    ),
                    PathwayQuestion::free_text(
                        "haRelief",
                        "Has anything helped (medication, rest, darkness)?",
                    ),
                ]
            });
        &QUESTIONS
    }
}
