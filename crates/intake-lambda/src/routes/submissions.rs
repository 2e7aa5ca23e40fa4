use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use uuid::Uuid;

use intake_core::models::answer::Answers;
use intake_core::models::submission::QuestionnaireSubmission;
use intake_pathways::evaluate;

use super::pathways::check_complaint_count;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub patient_id: Uuid,
    pub complaints: Vec<String>,
    /// Answers keyed by pathway key.
    #[serde(default)]
    pub responses: BTreeMap<String, Answers>,
}

/// Validate and aggregate the adaptive answers into a submission document.
pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<SubmissionRequest>,
) -> Result<Json<QuestionnaireSubmission>, ApiError> {
    check_complaint_count(&state, &req.complaints)?;

    let active = evaluate::resolve_pathways(&req.complaints);
    evaluate::check_responses(&active, &req.responses)?;

    let adaptive = evaluate::build_submission(&active, &req.responses);
    if adaptive.has_red_flags() {
        tracing::warn!(
            patient_id = %req.patient_id,
            red_flags = ?adaptive.overall_red_flags,
            "submission has red flags"
        );
    }

    let submission = QuestionnaireSubmission::new(
        req.patient_id,
        req.complaints,
        adaptive,
        jiff::Timestamp::now(),
    )?;
    tracing::info!(
        submission_id = %submission.id,
        pathways = submission.adaptive_questions.completed_pathways.len(),
        "questionnaire submitted"
    );
    Ok(Json(submission))
}
