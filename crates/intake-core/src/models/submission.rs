use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::response::AdaptiveQuestionsData;
use crate::error::CoreError;

/// The questionnaire document handed to persistence. The adaptive section is
/// stored as-is; nothing downstream interprets its fields.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuestionnaireSubmission {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub chief_complaints: Vec<String>,
    pub adaptive_questions: AdaptiveQuestionsData,
    pub submitted_at: jiff::Timestamp,
}

impl QuestionnaireSubmission {
    pub fn new(
        patient_id: Uuid,
        chief_complaints: Vec<String>,
        adaptive_questions: AdaptiveQuestionsData,
        submitted_at: jiff::Timestamp,
    ) -> Result<Self, CoreError> {
        if !adaptive_questions.completed {
            return Err(CoreError::Incomplete);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            patient_id,
            chief_complaints,
            adaptive_questions,
            submitted_at,
        })
    }

    pub fn to_document(&self) -> Result<serde_json::Value, CoreError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn from_document(document: serde_json::Value) -> Result<Self, CoreError> {
        Ok(serde_json::from_value(document)?)
    }
}
