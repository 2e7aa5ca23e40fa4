//! Consistency checks over the static pathway data.

use std::collections::HashSet;

use crate::error::PathwayError;
use crate::question::{PathwayQuestion, QuestionKind, RegistryError};
use crate::{SymptomPathway, all_pathways, get_pathway, mapping};

/// Check one pathway's question list.
pub fn validate_pathway(pathway: &dyn SymptomPathway) -> Vec<RegistryError> {
    let mut errors = Vec::new();
    let mut earlier: HashSet<&str> = HashSet::new();

    for question in pathway.questions() {
        let mut problem = |message: String| {
            errors.push(RegistryError {
                pathway_key: pathway.key().to_string(),
                question_id: Some(question.id.clone()),
                message: format!("{}: {message}", pathway.name()),
            });
        };

        if earlier.contains(question.id.as_str()) {
            problem(format!("duplicate question id '{}'", question.id));
        }

        match &question.kind {
            QuestionKind::SingleChoice { options } | QuestionKind::MultiChoice { options, .. }
                if options.is_empty() =>
            {
                problem(format!("choice question '{}' has no options", question.id));
            }
            QuestionKind::MultiChoice {
                max_selections: Some(0),
                ..
            } => {
                problem(format!("question '{}' allows zero selections", question.id));
            }
            QuestionKind::Slider { min, max, step } if min >= max || *step <= 0.0 => {
                problem(format!(
                    "slider '{}' has invalid bounds [{min}, {max}] step {step}",
                    question.id
                ));
            }
            _ => {}
        }

        if let Some(condition) = &question.condition
            && !earlier.contains(condition.depends_on.as_str())
        {
            problem(format!(
                "question '{}' depends on '{}', which is not an earlier question",
                question.id, condition.depends_on
            ));
        }

        if let Some(message) = check_red_flag(question) {
            problem(message);
        }

        earlier.insert(question.id.as_str());
    }
    errors
}

fn check_red_flag(question: &PathwayQuestion) -> Option<String> {
    let rule = question.red_flag.as_ref()?;
    match &question.kind {
        QuestionKind::Slider { min, max, .. } => {
            let threshold = rule.threshold();
            (threshold < *min || threshold > *max).then(|| {
                format!(
                    "slider '{}' red-flag threshold {threshold} is outside [{min}, {max}]",
                    question.id
                )
            })
        }
        QuestionKind::SingleChoice { options } | QuestionKind::MultiChoice { options, .. } => rule
            .values
            .iter()
            .find(|v| {
                !v.as_text()
                    .is_some_and(|t| options.iter().any(|o| o.value == t))
            })
            .map(|v| format!("question '{}' red-flags non-option value {v:?}", question.id)),
        _ => None,
    }
}

/// Check every registered pathway and the complaint mapping table.
pub fn validate_registry() -> Vec<RegistryError> {
    let mut errors: Vec<RegistryError> = all_pathways()
        .iter()
        .flat_map(|p| validate_pathway(*p))
        .collect();

    let mut keys = HashSet::new();
    for pathway in all_pathways() {
        if !keys.insert(pathway.key()) {
            errors.push(RegistryError {
                pathway_key: pathway.key().to_string(),
                question_id: None,
                message: format!("duplicate pathway key '{}'", pathway.key()),
            });
        }
    }

    for (complaint, key) in mapping::COMPLAINT_PATHWAYS {
        if get_pathway(key).is_none() {
            errors.push(RegistryError {
                pathway_key: key.to_string(),
                question_id: None,
                message: format!("complaint '{complaint}' maps to unregistered pathway '{key}'"),
            });
        }
    }
    errors
}

/// [`validate_registry`] as a `Result`, for startup checks.
pub fn ensure_consistent() -> Result<(), PathwayError> {
    let errors = validate_registry();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(PathwayError::InconsistentRegistry(errors))
    }
}
