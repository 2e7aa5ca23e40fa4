//! The questionnaire rules: which pathways apply, which questions show, and
//! which answers are red flags. Every function here is pure; callers re-run
//! them on each answer change.

use std::collections::{BTreeMap, HashSet};

use intake_core::models::answer::{AnswerValue, Answers};
use intake_core::models::response::{AdaptiveQuestionsData, SymptomResponseEntry};

use crate::error::PathwayError;
use crate::question::{PathwayQuestion, QuestionKind};
use crate::{SymptomPathway, get_pathway, mapping};

/// Keys whose flag is set, in input order.
pub fn selected_complaints<I, S>(flags: I) -> Vec<String>
where
    I: IntoIterator<Item = (S, bool)>,
    S: Into<String>,
{
    flags
        .into_iter()
        .filter(|(_, selected)| *selected)
        .map(|(key, _)| key.into())
        .collect()
}

/// Map selected chief complaints to the pathways that follow them up.
///
/// Complaints without a pathway are skipped. Each pathway appears once, at
/// the position of the first complaint that led to it.
pub fn resolve_pathways<I, S>(complaints: I) -> Vec<&'static dyn SymptomPathway>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut resolved = Vec::new();

    for complaint in complaints {
        let complaint = complaint.as_ref();
        let Some(key) = mapping::pathway_key_for(complaint) else {
            tracing::debug!(complaint, "no pathway for chief complaint");
            continue;
        };
        if !seen.insert(key) {
            continue;
        }
        match get_pathway(key) {
            Some(pathway) => resolved.push(pathway),
            None => tracing::warn!(complaint, key, "mapped pathway is not registered"),
        }
    }
    resolved
}

pub fn is_visible(question: &PathwayQuestion, answers: &Answers) -> bool {
    question
        .condition
        .as_ref()
        .is_none_or(|condition| condition.is_met(answers))
}

/// The questions of `pathway` that should currently be shown.
pub fn visible_questions<'a, P>(pathway: &'a P, answers: &Answers) -> Vec<&'a PathwayQuestion>
where
    P: SymptomPathway + ?Sized,
{
    pathway
        .questions()
        .iter()
        .filter(|q| is_visible(q, answers))
        .collect()
}

/// Ids of the questions whose answers are red flags, in question order.
pub fn detect_red_flags<P>(pathway: &P, answers: &Answers) -> Vec<String>
where
    P: SymptomPathway + ?Sized,
{
    pathway
        .questions()
        .iter()
        .filter(|q| {
            let (Some(rule), Some(answer)) = (&q.red_flag, answers.get(&q.id)) else {
                return false;
            };
            match &q.kind {
                QuestionKind::Slider { .. } => {
                    answer.as_number().is_some_and(|n| n >= rule.threshold())
                }
                QuestionKind::MultiChoice { .. } | QuestionKind::BodyLocation { .. } => {
                    answer.members().is_some_and(|m| rule.intersects(m))
                }
                _ => rule.matches_scalar(answer),
            }
        })
        .map(|q| q.id.clone())
        .collect()
}

/// Build the per-pathway entry handed over at submission.
pub fn build_entry<P>(pathway: &P, answers: &Answers) -> SymptomResponseEntry
where
    P: SymptomPathway + ?Sized,
{
    let severity = pathway
        .severity_question()
        .and_then(|q| answers.get(&q.id))
        .and_then(AnswerValue::as_number);
    let location = pathway
        .location_question()
        .and_then(|q| answers.get(&q.id))
        .and_then(AnswerValue::as_location)
        .cloned();

    SymptomResponseEntry {
        pathway_key: pathway.key().to_string(),
        answers: answers.clone(),
        severity,
        location,
        red_flags_triggered: detect_red_flags(pathway, answers),
    }
}

/// Aggregate the answers of every active pathway into the submitted form.
///
/// Pathways with no recorded answers still get an (empty) entry.
pub fn build_submission(
    active: &[&dyn SymptomPathway],
    responses: &BTreeMap<String, Answers>,
) -> AdaptiveQuestionsData {
    let empty = Answers::new();
    let completed_pathways: Vec<SymptomResponseEntry> = active
        .iter()
        .map(|pathway| build_entry(*pathway, responses.get(pathway.key()).unwrap_or(&empty)))
        .collect();

    let mut seen = HashSet::new();
    let overall_red_flags = completed_pathways
        .iter()
        .flat_map(|entry| &entry.red_flags_triggered)
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect();

    AdaptiveQuestionsData {
        completed_pathways,
        overall_red_flags,
        completed: true,
    }
}

/// Validate every active pathway's answers, failing on the first pathway
/// with problems.
pub fn check_responses(
    active: &[&dyn SymptomPathway],
    responses: &BTreeMap<String, Answers>,
) -> Result<(), PathwayError> {
    let empty = Answers::new();
    for pathway in active {
        let answers = responses.get(pathway.key()).unwrap_or(&empty);
        let errors = pathway.validate_answers(answers);
        if !errors.is_empty() {
            return Err(PathwayError::InvalidAnswers {
                pathway_key: pathway.key().to_string(),
                errors,
            });
        }
    }
    Ok(())
}
