pub mod abdominal_pain;
pub mod back_pain;
pub mod chest_pain;
pub mod cough;
pub mod dizziness;
pub mod fever;
pub mod headache;
pub mod injury_trauma;
pub mod nausea_vomiting;
pub mod rash;
pub mod shortness_of_breath;
pub mod urinary;

/// Onset options shared by several pathways.
pub(crate) const ONSET: &[(&str, &str)] = &[
    ("sudden", "Suddenly (seconds to minutes)"),
    ("gradual", "Gradually (hours to days)"),
];

/// Duration options shared by several pathways.
pub(crate) const DURATION: &[(&str, &str)] = &[
    ("lessThanDay", "Less than a day"),
    ("oneToThreeDays", "1–3 days"),
    ("fourToSevenDays", "4–7 days"),
    ("moreThanWeek", "More than a week"),
];
