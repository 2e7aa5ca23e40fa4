//! intake-pathways
//!
//! Adaptive symptom questionnaire. Pure data and pure functions, no I/O.
//! Holds the registry of symptom pathways, the chief-complaint mapping, and
//! the rules that decide which questions show and which answers are red flags.

pub mod error;
pub mod evaluate;
pub mod mapping;
pub mod pathways;
pub mod question;
pub mod registry;

use intake_core::models::answer::{AnswerValue, Answers};

use error::PathwayError;
use question::{AnswerError, PathwayQuestion, QuestionKind};

/// Trait implemented by each symptom pathway.
pub trait SymptomPathway: Send + Sync {
    /// Stable key for this pathway (e.g., "headache", "chestPain").
    fn key(&self) -> &str;

    /// Human-readable name (e.g., "Headache", "Chest Pain").
    fn name(&self) -> &str;

    /// The questions in display order.
    fn questions(&self) -> &[PathwayQuestion];

    fn question(&self, id: &str) -> Option<&PathwayQuestion> {
        self.questions().iter().find(|q| q.id == id)
    }

    /// The first slider question, whose answer is the pathway's severity.
    fn severity_question(&self) -> Option<&PathwayQuestion> {
        self.questions()
            .iter()
            .find(|q| matches!(q.kind, QuestionKind::Slider { .. }))
    }

    /// The first body-location question.
    fn location_question(&self) -> Option<&PathwayQuestion> {
        self.questions()
            .iter()
            .find(|q| matches!(q.kind, QuestionKind::BodyLocation { .. }))
    }

    /// Check recorded answers against this pathway's questions.
    ///
    /// Only visible questions are checked; answers left behind on questions
    /// that have since been hidden are ignored.
    fn validate_answers(&self, answers: &Answers) -> Vec<AnswerError> {
        let mut errors = Vec::new();

        for (id, _) in answers.iter() {
            if self.question(id).is_none() {
                errors.push(answer_error(self.key(), id, format!("unknown question '{id}'")));
            }
        }

        for question in evaluate::visible_questions(self, answers) {
            match answers.get(&question.id) {
                None if question.required => {
                    errors.push(answer_error(
                        self.key(),
                        &question.id,
                        format!("{}: an answer is required", question.label),
                    ));
                }
                None => {}
                Some(answer) => {
                    if let Some(message) = check_answer(question, answer) {
                        errors.push(answer_error(
                            self.key(),
                            &question.id,
                            format!("{}: {message}", question.label),
                        ));
                    }
                }
            }
        }
        errors
    }

    /// Format answers as structured text for inclusion in a summary prompt.
    fn to_structured_input(&self, answers: &Answers) -> String {
        let red_flags = evaluate::detect_red_flags(self, answers);
        let mut output = format!("## {}\n\n", self.name());
        for question in evaluate::visible_questions(self, answers) {
            let Some(answer) = answers.get(&question.id) else {
                continue;
            };
            output.push_str(&format!(
                "- {}: {}",
                question.label,
                describe_answer(question, answer)
            ));
            if red_flags.contains(&question.id) {
                output.push_str(" **[red flag]**");
            }
            output.push('\n');
        }
        output.push('\n');
        output
    }
}

fn answer_error(pathway_key: &str, question_id: &str, message: String) -> AnswerError {
    AnswerError {
        pathway_key: pathway_key.to_string(),
        question_id: question_id.to_string(),
        message,
    }
}

fn check_answer(question: &PathwayQuestion, answer: &AnswerValue) -> Option<String> {
    let is_option = |value: &str| question.kind.options().iter().any(|o| o.value == value);

    match (&question.kind, answer) {
        (QuestionKind::SingleChoice { .. }, AnswerValue::Text(value)) => {
            (!is_option(value.as_str())).then(|| format!("'{value}' is not one of the options"))
        }
        (QuestionKind::MultiChoice { max_selections, .. }, AnswerValue::Choices(values)) => {
            if let Some(bad) = values.iter().find(|v| !is_option(v.as_str())) {
                Some(format!("'{bad}' is not one of the options"))
            } else if let Some(limit) = max_selections
                && values.len() > *limit
            {
                Some(format!("at most {limit} selections allowed, got {}", values.len()))
            } else if question.required && values.is_empty() {
                Some("select at least one option".to_string())
            } else {
                None
            }
        }
        (QuestionKind::Slider { min, max, .. }, AnswerValue::Number(value)) => {
            (*value < *min || *value > *max)
                .then(|| format!("{value} is outside range [{min}, {max}]"))
        }
        (QuestionKind::Boolean, AnswerValue::Flag(_)) => None,
        (QuestionKind::BodyLocation { region }, AnswerValue::Location(selection)) => {
            if let Some(bad) = selection
                .regions
                .iter()
                .find(|r| !region.regions().contains(&r.as_str()))
            {
                Some(format!("'{bad}' is not a known region"))
            } else if question.required && selection.regions.is_empty() {
                Some("select at least one region".to_string())
            } else {
                None
            }
        }
        (QuestionKind::FreeText, AnswerValue::Text(_)) => None,
        _ => Some("answer has the wrong shape for this question".to_string()),
    }
}

fn describe_answer(question: &PathwayQuestion, answer: &AnswerValue) -> String {
    match answer {
        AnswerValue::Flag(true) => "Yes".to_string(),
        AnswerValue::Flag(false) => "No".to_string(),
        AnswerValue::Number(n) => match question.kind {
            QuestionKind::Slider { max, .. } => format!("{n}/{max}"),
            _ => n.to_string(),
        },
        AnswerValue::Text(value) => question.kind.option_label(value).to_string(),
        AnswerValue::Choices(values) => values
            .iter()
            .map(|v| question.kind.option_label(v))
            .collect::<Vec<_>>()
            .join(", "),
        AnswerValue::Location(selection) => {
            let regions = selection.regions.join(", ");
            match selection.laterality {
                Some(side) => format!("{regions} ({})", side.label()),
                None => regions,
            }
        }
    }
}

static PATHWAYS: [&dyn SymptomPathway; 12] = [
    &pathways::headache::Headache,
    &pathways::chest_pain::ChestPain,
    &pathways::abdominal_pain::AbdominalPain,
    &pathways::fever::Fever,
    &pathways::injury_trauma::InjuryTrauma,
    &pathways::shortness_of_breath::ShortnessOfBreath,
    &pathways::cough::Cough,
    &pathways::back_pain::BackPain,
    &pathways::dizziness::Dizziness,
    &pathways::rash::Rash,
    &pathways::nausea_vomiting::NauseaVomiting,
    &pathways::urinary::Urinary,
];

/// Return all registered pathways.
pub fn all_pathways() -> &'static [&'static dyn SymptomPathway] {
    &PATHWAYS
}

/// Look up a pathway by key.
pub fn get_pathway(key: &str) -> Option<&'static dyn SymptomPathway> {
    PATHWAYS.iter().copied().find(|p| p.key() == key)
}

/// Like [`get_pathway`], for callers that treat an unknown key as an error.
pub fn require_pathway(key: &str) -> Result<&'static dyn SymptomPathway, PathwayError> {
    get_pathway(key).ok_or_else(|| PathwayError::UnknownPathway(key.to_string()))
}
