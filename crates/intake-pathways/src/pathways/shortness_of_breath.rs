use crate::SymptomPathway;
use crate::question::PathwayQuestion;

use super::ONSET;

/// Shortness of breath: severity at rest, speech, cyanosis.
pub struct ShortnessOfBreath;

impl SymptomPathway for ShortnessOfBreath {
    fn key(&self) -> &str {
        "shortnessOfBreath"
    }

    fn name(&self) -> &str {
        "Shortness of Breath"
    }

    fn questions(&self) -> &[PathwayQuestion] {
        static QUESTIONS: std::sync::LazyLock<Vec<PathwayQuestion>> =
            std::sync::LazyLock::new(|| {
                vec![
                    PathwayQuestion::severity("sbSeverity", "How hard is it to breathe right now?")
                        .red_flag_severe(),
                    PathwayQuestion::single_choice("sbOnsetType", "How did it start?", ONSET),
                    PathwayQuestion::boolean("sbAtRest", "Are you short of breath while resting?")
                        .red_flag_when(true),
                    PathwayQuestion::single_choice(
                        "sbSpeech",
                        "How much can you say in one breath?",
                        &[
                            ("fullSentences", "Full sentences"),
                            ("shortPhrases", "Short phrases"),
                            ("singleWords", "Only single words"),
                        ],
                    )
                    .red_flag_on(&["singleWords"]),
                    PathwayQuestion::multi_choice(
                        "sbAssociated",
                        "Do you have any of these as well?",
                        &[
                            ("wheeze", "Wheezing"),
                            ("cough", "Cough"),
                            ("chestPain", "Chest pain"),
                            ("blueLips", "Blue or grey lips"),
                            ("swollenLegs", "Swollen legs"),
                            ("none", "None of these"),
                        ],
                    )
                    .red_flag_on(&["chestPain", "blueLips"]),
                    PathwayQuestion::multi_choice(
                        "sbHistory",
                        "Have you been diagnosed with any of these?",
                        &[
                            ("asthma", "Asthma"),
                            ("copd", "COPD"),
                            ("heartFailure", "Heart failure"),
                            ("bloodClot", "A blood clot in the past"),
                            ("none", "None of these"),
                        ],
                    )
                    .optional(),
                    PathwayQuestion::boolean("sbInhalerHelps", "Has your inhaler helped?")
                        .shown_when_any("sbHistory", &["asthma", "copd"]),
                ]
            });
        &QUESTIONS
    }
}
