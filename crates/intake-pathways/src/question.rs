use intake_core::models::answer::{AnswerValue, Answers};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Slider red-flag threshold used when a rule names no numeric value.
pub const DEFAULT_SEVERITY_THRESHOLD: f64 = 8.0;

/// One selectable option of a choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

/// Which body diagram a location question shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum LocationKind {
    Abdomen,
    Head,
}

impl LocationKind {
    /// Region identifiers the diagram can report.
    pub fn regions(&self) -> &'static [&'static str] {
        match self {
            LocationKind::Abdomen => &[
                "rightUpperQuadrant",
                "leftUpperQuadrant",
                "rightLowerQuadrant",
                "leftLowerQuadrant",
                "epigastric",
                "periumbilical",
                "suprapubic",
            ],
            LocationKind::Head => &[
                "frontal",
                "temporal",
                "parietal",
                "occipital",
                "behindEyes",
                "wholeHead",
            ],
        }
    }
}

/// The kind of a question, carrying only the fields that kind needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum QuestionKind {
    SingleChoice {
        options: Vec<ChoiceOption>,
    },
    MultiChoice {
        options: Vec<ChoiceOption>,
        #[serde(rename = "maxSelections")]
        max_selections: Option<usize>,
    },
    Slider {
        min: f64,
        max: f64,
        step: f64,
    },
    Boolean,
    BodyLocation {
        region: LocationKind,
    },
    FreeText,
}

impl QuestionKind {
    pub fn options(&self) -> &[ChoiceOption] {
        match self {
            QuestionKind::SingleChoice { options } | QuestionKind::MultiChoice { options, .. } => {
                options
            }
            _ => &[],
        }
    }

    pub fn option_label<'a>(&'a self, value: &'a str) -> &'a str {
        self.options()
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
            .unwrap_or(value)
    }
}

/// A plain value a condition or red-flag rule compares answers against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Scalar {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl Scalar {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Strict equality against a scalar answer. Values of different shapes
    /// never match, and collection answers never equal a scalar.
    pub fn matches(&self, answer: &AnswerValue) -> bool {
        match (self, answer) {
            (Scalar::Flag(a), AnswerValue::Flag(b)) => a == b,
            (Scalar::Number(a), AnswerValue::Number(b)) => a == b,
            (Scalar::Text(a), AnswerValue::Text(b)) => a == b,
            _ => false,
        }
    }

    fn is_member_of(&self, members: &[String]) -> bool {
        self.as_text()
            .is_some_and(|t| members.iter().any(|m| m == t))
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Flag(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

/// The value a visibility condition requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ConditionValue {
    One(Scalar),
    AnyOf(Vec<Scalar>),
}

/// Shows a question only when an earlier question has a matching answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VisibilityCondition {
    pub depends_on: String,
    pub required_value: ConditionValue,
}

impl VisibilityCondition {
    pub fn is_met(&self, answers: &Answers) -> bool {
        let Some(answer) = answers.get(&self.depends_on) else {
            return false;
        };

        match (answer.members(), &self.required_value) {
            (Some(members), ConditionValue::One(required)) => required.is_member_of(members),
            // Collection against collection: any overlap counts.
            (Some(members), ConditionValue::AnyOf(required)) => {
                required.iter().any(|r| r.is_member_of(members))
            }
            (None, ConditionValue::AnyOf(required)) => required.iter().any(|r| r.matches(answer)),
            (None, ConditionValue::One(required)) => required.matches(answer),
        }
    }
}

/// Answer values that mark a question as clinically urgent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RedFlag {
    pub values: Vec<Scalar>,
}

impl RedFlag {
    /// Slider threshold: the first value if numeric, otherwise
    /// [`DEFAULT_SEVERITY_THRESHOLD`].
    pub fn threshold(&self) -> f64 {
        self.values
            .first()
            .and_then(Scalar::as_number)
            .unwrap_or(DEFAULT_SEVERITY_THRESHOLD)
    }

    pub fn matches_scalar(&self, answer: &AnswerValue) -> bool {
        self.values.iter().any(|v| v.matches(answer))
    }

    pub fn intersects(&self, members: &[String]) -> bool {
        self.values.iter().any(|v| v.is_member_of(members))
    }
}

/// One question within a pathway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PathwayQuestion {
    pub id: String,
    pub label: String,
    pub kind: QuestionKind,
    pub condition: Option<VisibilityCondition>,
    pub red_flag: Option<RedFlag>,
    pub required: bool,
}

impl PathwayQuestion {
    fn new(id: &str, label: &str, kind: QuestionKind) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            condition: None,
            red_flag: None,
            required: true,
        }
    }

    pub fn single_choice(id: &str, label: &str, options: &[(&str, &str)]) -> Self {
        Self::new(
            id,
            label,
            QuestionKind::SingleChoice {
                options: choice_options(options),
            },
        )
    }

    pub fn multi_choice(id: &str, label: &str, options: &[(&str, &str)]) -> Self {
        Self::new(
            id,
            label,
            QuestionKind::MultiChoice {
                options: choice_options(options),
                max_selections: None,
            },
        )
    }

    /// A 0–10 rating slider.
    pub fn severity(id: &str, label: &str) -> Self {
        Self::slider(id, label, 0.0, 10.0, 1.0)
    }

    pub fn slider(id: &str, label: &str, min: f64, max: f64, step: f64) -> Self {
        Self::new(id, label, QuestionKind::Slider { min, max, step })
    }

    pub fn boolean(id: &str, label: &str) -> Self {
        Self::new(id, label, QuestionKind::Boolean)
    }

    pub fn body_location(id: &str, label: &str, region: LocationKind) -> Self {
        Self::new(id, label, QuestionKind::BodyLocation { region })
    }

    pub fn free_text(id: &str, label: &str) -> Self {
        Self::new(id, label, QuestionKind::FreeText).optional()
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn max_selections(mut self, limit: usize) -> Self {
        if let QuestionKind::MultiChoice { max_selections, .. } = &mut self.kind {
            *max_selections = Some(limit);
        }
        self
    }

    pub fn shown_when(mut self, depends_on: &str, value: impl Into<Scalar>) -> Self {
        self.condition = Some(VisibilityCondition {
            depends_on: depends_on.to_string(),
            required_value: ConditionValue::One(value.into()),
        });
        self
    }

    pub fn shown_when_any(mut self, depends_on: &str, values: &[&str]) -> Self {
        self.condition = Some(VisibilityCondition {
            depends_on: depends_on.to_string(),
            required_value: ConditionValue::AnyOf(values.iter().map(|v| (*v).into()).collect()),
        });
        self
    }

    /// Red flag on any of the given option values.
    pub fn red_flag_on(mut self, values: &[&str]) -> Self {
        self.red_flag = Some(RedFlag {
            values: values.iter().map(|v| (*v).into()).collect(),
        });
        self
    }

    /// Red flag on a yes/no answer.
    pub fn red_flag_when(mut self, value: bool) -> Self {
        self.red_flag = Some(RedFlag {
            values: vec![value.into()],
        });
        self
    }

    /// Slider red flag at or above `threshold`.
    pub fn red_flag_at(mut self, threshold: f64) -> Self {
        self.red_flag = Some(RedFlag {
            values: vec![threshold.into()],
        });
        self
    }

    /// Slider red flag at the default threshold.
    pub fn red_flag_severe(mut self) -> Self {
        self.red_flag = Some(RedFlag::default());
        self
    }
}

fn choice_options(options: &[(&str, &str)]) -> Vec<ChoiceOption> {
    options
        .iter()
        .map(|(value, label)| ChoiceOption {
            value: value.to_string(),
            label: label.to_string(),
        })
        .collect()
}

/// A data problem in a pathway definition or the complaint mapping table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
#[error("{message}")]
pub struct RegistryError {
    pub pathway_key: String,
    pub question_id: Option<String>,
    pub message: String,
}

/// A recorded answer that does not fit its question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
#[error("{message}")]
pub struct AnswerError {
    pub pathway_key: String,
    pub question_id: String,
    pub message: String,
}
