use crate::SymptomPathway;
use crate::question::{LocationKind, PathwayQuestion};

/// Injury or trauma: mechanism, head injury screen, bleeding, weight bearing.
pub struct InjuryTrauma;

impl SymptomPathway for InjuryTrauma {
    fn key(&self) -> &str {
        "injuryTrauma"
    }

    fn name(&self) -> &str {
        "Injury / Trauma"
    }

    fn questions(&self) -> &[PathwayQuestion] {
        static QUESTIONS: std::sync::LazyLock<Vec<PathwayQuestion>> =
            std::sync::LazyLock::new(|| {
                vec![
                    PathwayQuestion::single_choice(
                        "itMechanism",
                        "How did the injury happen?",
                        &[
                            ("fall", "Fall"),
                            ("vehicle", "Road traffic collision"),
                            ("sports", "Sports"),
                            ("assault", "Assault"),
                            ("other", "Other"),
                        ],
                    ),
                    PathwayQuestion::boolean("itHighFall", "Did you fall from higher than your own height?")
                        .shown_when("itMechanism", "fall")
                        .red_flag_when(true),
                    PathwayQuestion::boolean("itHeadStruck", "Did you hit your head?"),
                    PathwayQuestion::body_location(
                        "itHeadLocation",
                        "Where on your head?",
                        LocationKind::Head,
                    )
                    .shown_when("itHeadStruck", true),
                    PathwayQuestion::boolean("itLostConsciousness", "Did you lose consciousness?")
                        .shown_when("itHeadStruck", true)
                        .red_flag_when(true),
                    PathwayQuestion::boolean(
                        "itBloodThinners",
                        "Do you take blood thinners (warfarin, apixaban, rivaroxaban)?",
                    )
                    .shown_when("itHeadStruck", true)
                    .red_flag_when(true),
                    PathwayQuestion::severity("itPain", "How severe is the pain right now?")
                        .red_flag_severe(),
                    PathwayQuestion::single_choice(
                        "itBleeding",
                        "Is there any bleeding?",
                        &[
                            ("none", "No bleeding"),
                            ("minor", "Minor, stopped with pressure"),
                            ("heavy", "Heavy or will not stop"),
                        ],
                    )
                    .red_flag_on(&["heavy"]),
                    PathwayQuestion::boolean("itCanBearWeight", "Can you walk or put weight on it?"),
                    PathwayQuestion::boolean("itDeformity", "Does any limb look bent or out of shape?")
                        .red_flag_when(true),
                ]
            });
        &QUESTIONS
    }
}
