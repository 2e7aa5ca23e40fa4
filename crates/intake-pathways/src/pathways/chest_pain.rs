use crate::SymptomPathway;
use crate::question::PathwayQuestion;

use super::ONSET;

/// Chest pain: character, radiation, exertional pattern, cardiac warning signs.
pub struct ChestPain;

impl SymptomPathway for ChestPain {
    fn key(&self) -> &str {
        "chestPain"
    }

    fn name(&self) -> &str {
        "Chest Pain"
    }

    fn questions(&self) -> &[PathwayQuestion] {
        static QUESTIONS: std::sync::LazyLock<Vec<PathwayQuestion>> =
            std::sync::LazyLock::new(|| {
                vec![
                    PathwayQuestion::single_choice("cpOnsetType", "How did the pain start?", ONSET),
                    PathwayQuestion::single_choice(
                        "cpCharacter",
                        "What does the pain feel like?",
                        &[
                            ("pressure", "Pressure, squeezing or heaviness"),
                            ("sharp", "Sharp or stabbing"),
                            ("burning", "Burning"),
                            ("tearing", "Tearing or ripping"),
                        ],
                    )
                    .red_flag_on(&["tearing"]),
                    PathwayQuestion::severity("cpSeverity", "How severe is the pain right now?")
                        .red_flag_at(8.0),
                    PathwayQuestion::multi_choice(
                        "cpRadiation",
                        "Does the pain spread anywhere?",
                        &[
                            ("leftArm", "Left arm"),
                            ("jaw", "Jaw or neck"),
                            ("back", "Back"),
                            ("none", "It stays in one place"),
                        ],
                    )
                    .red_flag_on(&["leftArm", "jaw"]),
                    PathwayQuestion::boolean("cpExertional", "Does activity make it worse?"),
                    PathwayQuestion::boolean("cpAtRest", "Does it also happen when resting?")
                        .shown_when("cpExertional", true)
                        .red_flag_when(true),
                    PathwayQuestion::boolean("cpShortBreath", "Are you short of breath?")
                        .red_flag_when(true),
                    PathwayQuestion::boolean("cpSweating", "Are you sweating or clammy?")
                        .red_flag_when(true),
                    PathwayQuestion::boolean(
                        "cpCardiacHistory",
                        "Have you had heart problems before?",
                    ),
                ]
            });
        &QUESTIONS
    }
}
