use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use intake_core::models::answer::Answers;
use intake_pathways::question::PathwayQuestion;
use intake_pathways::{SymptomPathway, all_pathways, evaluate, require_pathway};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct PathwaySummary {
    key: String,
    name: String,
}

#[derive(Serialize)]
pub struct PathwayDetail {
    key: String,
    name: String,
    questions: Vec<PathwayQuestion>,
}

impl PathwayDetail {
    fn from_pathway(pathway: &dyn SymptomPathway) -> Self {
        Self {
            key: pathway.key().to_string(),
            name: pathway.name().to_string(),
            questions: pathway.questions().to_vec(),
        }
    }
}

#[derive(Deserialize)]
pub struct ResolveRequest {
    pub complaints: Vec<String>,
}

#[derive(Deserialize)]
pub struct AnswersRequest {
    #[serde(default)]
    pub answers: Answers,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleQuestions {
    visible_questions: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedFlags {
    red_flags: Vec<String>,
}

pub async fn list_pathways() -> Json<Vec<PathwaySummary>> {
    let pathways: Vec<PathwaySummary> = all_pathways()
        .iter()
        .map(|p| PathwaySummary {
            key: p.key().to_string(),
            name: p.name().to_string(),
        })
        .collect();
    Json(pathways)
}

pub async fn get_pathway_detail(Path(key): Path<String>) -> Result<Json<PathwayDetail>, ApiError> {
    let pathway = require_pathway(&key)?;
    Ok(Json(PathwayDetail::from_pathway(pathway)))
}

/// Resolve selected chief complaints to their follow-up pathways.
pub async fn resolve(
    State(state): State<AppState>,
    Json(req): Json<ResolveRequest>,
) -> Result<Json<Vec<PathwayDetail>>, ApiError> {
    check_complaint_count(&state, &req.complaints)?;
    let pathways = evaluate::resolve_pathways(&req.complaints)
        .into_iter()
        .map(PathwayDetail::from_pathway)
        .collect();
    Ok(Json(pathways))
}

pub async fn visible_questions(
    Path(key): Path<String>,
    Json(req): Json<AnswersRequest>,
) -> Result<Json<VisibleQuestions>, ApiError> {
    let pathway = require_pathway(&key)?;
    let visible_questions = evaluate::visible_questions(pathway, &req.answers)
        .into_iter()
        .map(|q| q.id.clone())
        .collect();
    Ok(Json(VisibleQuestions { visible_questions }))
}

pub async fn red_flags(
    Path(key): Path<String>,
    Json(req): Json<AnswersRequest>,
) -> Result<Json<RedFlags>, ApiError> {
    let pathway = require_pathway(&key)?;
    Ok(Json(RedFlags {
        red_flags: evaluate::detect_red_flags(pathway, &req.answers),
    }))
}

pub(crate) fn check_complaint_count(state: &AppState, complaints: &[String]) -> Result<(), ApiError> {
    let max = state.config.max_chief_complaints;
    if complaints.len() > max {
        return Err(ApiError::BadRequest(format!(
            "at most {max} chief complaints may be selected, got {}",
            complaints.len()
        )));
    }
    Ok(())
}
