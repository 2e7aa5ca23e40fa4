use crate::SymptomPathway;
use crate::question::PathwayQuestion;

use super::DURATION;

/// Fever: measured temperature, duration, meningitis and sepsis screens.
pub struct Fever;

impl SymptomPathway for Fever {
    fn key(&self) -> &str {
        "fever"
    }

    fn name(&self) -> &str {
        "Fever"
    }

    fn questions(&self) -> &[PathwayQuestion] {
        static QUESTIONS: std::sync::LazyLock<Vec<PathwayQuestion>> =
            std::sync::LazyLock::new(|| {
                vec![
                    PathwayQuestion::severity("fvSeverity", "Overall, how unwell do you feel?"),
                    PathwayQuestion::boolean("fvMeasured", "Have you measured your temperature?"),
                    // Celsius
                    PathwayQuestion::slider(
                        "fvTemperature",
                        "What was the highest temperature (°C)?",
                        35.0,
                        42.0,
                        0.1,
                    )
                    .shown_when("fvMeasured", true)
                    .red_flag_at(40.0),
                    PathwayQuestion::single_choice("fvDuration", "How long have you had a fever?", DURATION),
                    PathwayQuestion::multi_choice(
                        "fvAssociated",
                        "Do you have any of these as well?",
                        &[
                            ("chills", "Chills or shaking"),
                            ("cough", "Cough"),
                            ("soreThroat", "Sore throat"),
                            ("rash", "Rash"),
                            ("stiffNeck", "Stiff neck"),
                            ("confusion", "Confusion or drowsiness"),
                            ("none", "None of these"),
                        ],
                    )
                    .red_flag_on(&["stiffNeck", "confusion"]),
                    PathwayQuestion::single_choice(
                        "fvRashBlanching",
                        "Does the rash fade when you press a glass against it?",
                        &[
                            ("blanching", "Yes, it fades"),
                            ("nonBlanching", "No, it stays visible"),
                            ("unsure", "Not sure"),
                        ],
                    )
                    .shown_when("fvAssociated", "rash")
                    .red_flag_on(&["nonBlanching"]),
                    PathwayQuestion::boolean(
                        "fvImmunocompromised",
                        "Do you have a weakened immune system (chemotherapy, transplant, steroids)?",
                    )
                    .red_flag_when(true),
                    PathwayQuestion::boolean("fvRecentTravel", "Have you travelled abroad in the last month?"),
                    PathwayQuestion::free_text("fvTravelDestination", "Where did you travel?")
                        .shown_when("fvRecentTravel", true),
                ]
            });
        &QUESTIONS
    }
}
