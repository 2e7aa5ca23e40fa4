use crate::SymptomPathway;
use crate::question::PathwayQuestion;

use super::ONSET;

/// Back pain: severity, radiation, cauda equina screen.
pub struct BackPain;

impl SymptomPathway for BackPain {
    fn key(&self) -> &str {
        "backPain"
    }

    fn name(&self) -> &str {
        "Back Pain"
    }

    fn questions(&self) -> &[PathwayQuestion] {
        static QUESTIONS: std::sync::LazyLock<Vec<PathwayQuestion>> =
            std::sync::LazyLock::new(|| {
                vec![
                    PathwayQuestion::severity("bpSeverity", "How severe is the pain right now?")
                        .red_flag_severe(),
                    PathwayQuestion::single_choice("bpOnsetType", "How did the pain start?", ONSET),
                    PathwayQuestion::single_choice(
                        "bpArea",
                        "Which part of your back hurts?",
                        &[
                            ("upper", "Upper back"),
                            ("middle", "Middle back"),
                            ("lower", "Lower back"),
                        ],
                    ),
                    PathwayQuestion::boolean("bpRadiates", "Does the pain travel down a leg?"),
                    PathwayQuestion::single_choice(
                        "bpRadiationSide",
                        "Which leg?",
                        &[("left", "Left"), ("right", "Right"), ("both", "Both")],
                    )
                    .shown_when("bpRadiates", true)
                    .red_flag_on(&["both"]),
                    PathwayQuestion::multi_choice(
                        "bpNeuroSymptoms",
                        "Have you noticed any of these?",
                        &[
                            ("saddleNumbness", "Numbness between the legs or buttocks"),
                            ("bladderChange", "Trouble passing urine or leaking"),
                            ("bowelChange", "Loss of bowel control"),
                            ("legWeakness", "Leg weakness"),
                            ("none", "None of these"),
                        ],
                    )
                    .red_flag_on(&["saddleNumbness", "bladderChange", "bowelChange", "legWeakness"]),
                    PathwayQuestion::boolean("bpInjury", "Did it start after an injury or fall?"),
                ]
            });
        &QUESTIONS
    }
}
