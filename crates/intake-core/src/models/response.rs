use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::Answers;
use super::location::LocationSelection;

/// Captured state for one active pathway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SymptomResponseEntry {
    pub pathway_key: String,
    #[ts(as = "std::collections::BTreeMap<String, crate::models::answer::AnswerValue>")]
    pub answers: Answers,
    /// Answer to the pathway's first slider question, if numeric.
    pub severity: Option<f64>,
    /// Answer to the pathway's first body-location question.
    pub location: Option<LocationSelection>,
    pub red_flags_triggered: Vec<String>,
}

/// The adaptive section of a questionnaire submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AdaptiveQuestionsData {
    pub completed_pathways: Vec<SymptomResponseEntry>,
    pub overall_red_flags: Vec<String>,
    pub completed: bool,
}

impl AdaptiveQuestionsData {
    pub fn has_red_flags(&self) -> bool {
        !self.overall_red_flags.is_empty()
    }

    pub fn entry(&self, pathway_key: &str) -> Option<&SymptomResponseEntry> {
        self.completed_pathways
            .iter()
            .find(|e| e.pathway_key == pathway_key)
    }
}
