//! Chief complaint → pathway lookup.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Complaint key → pathway key. Several complaints may share a pathway.
pub const COMPLAINT_PATHWAYS: &[(&str, &str)] = &[
    ("headache", "headache"),
    ("migraine", "headache"),
    ("chestPain", "chestPain"),
    ("palpitations", "chestPain"),
    ("abdominalPain", "abdominalPain"),
    ("stomachAche", "abdominalPain"),
    ("fever", "fever"),
    ("chills", "fever"),
    ("injuryTrauma", "injuryTrauma"),
    ("headInjury", "injuryTrauma"),
    ("fall", "injuryTrauma"),
    ("shortnessOfBreath", "shortnessOfBreath"),
    ("wheezing", "shortnessOfBreath"),
    ("cough", "cough"),
    ("soreThroat", "cough"),
    ("backPain", "backPain"),
    ("dizziness", "dizziness"),
    ("fainting", "dizziness"),
    ("rash", "rash"),
    ("itching", "rash"),
    ("nausea", "nauseaVomiting"),
    ("vomiting", "nauseaVomiting"),
    ("diarrhea", "nauseaVomiting"),
    ("urinaryProblems", "urinary"),
];

/// Chief complaints the intake form offers that have no follow-up pathway.
pub const UNMAPPED_COMPLAINTS: &[&str] = &["fatigue", "anxiety", "lowMood", "sleepProblems", "other"];

static LOOKUP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| COMPLAINT_PATHWAYS.iter().copied().collect());

/// The pathway key a complaint maps to, if any.
pub fn pathway_key_for(complaint: &str) -> Option<&'static str> {
    LOOKUP.get(complaint).copied()
}

/// Every chief complaint key the intake form offers.
pub fn chief_complaints() -> impl Iterator<Item = &'static str> {
    COMPLAINT_PATHWAYS
        .iter()
        .map(|(complaint, _)| *complaint)
        .chain(UNMAPPED_COMPLAINTS.iter().copied())
}
