use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::location::LocationSelection;

/// A single recorded answer. The shape depends on the question kind that
/// produced it; nothing here checks that the shape fits the question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Flag(bool),
    Number(f64),
    Text(String),
    Choices(Vec<String>),
    Location(LocationSelection),
}

impl AnswerValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_location(&self) -> Option<&LocationSelection> {
        match self {
            AnswerValue::Location(loc) => Some(loc),
            _ => None,
        }
    }

    /// Members of a collection-shaped answer: the selected options of a
    /// multi-choice answer or the regions of a location answer.
    pub fn members(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Choices(items) => Some(items),
            AnswerValue::Location(loc) => Some(&loc.regions),
            _ => None,
        }
    }

    pub fn is_collection(&self) -> bool {
        self.members().is_some()
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Flag(value)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<i32> for AnswerValue {
    fn from(value: i32) -> Self {
        AnswerValue::Number(f64::from(value))
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(value: Vec<String>) -> Self {
        AnswerValue::Choices(value)
    }
}

impl From<&[&str]> for AnswerValue {
    fn from(value: &[&str]) -> Self {
        AnswerValue::Choices(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for AnswerValue {
    fn from(value: [&str; N]) -> Self {
        AnswerValue::Choices(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<LocationSelection> for AnswerValue {
    fn from(value: LocationSelection) -> Self {
        AnswerValue::Location(value)
    }
}

/// Answers recorded so far for one pathway, keyed by question id.
///
/// JSON `null` entries are dropped on the way in, so a cleared answer and an
/// absent answer look the same to the evaluator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Option<AnswerValue>>")]
pub struct Answers(BTreeMap<String, AnswerValue>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.0.get(question_id)
    }

    pub fn insert(
        &mut self,
        question_id: impl Into<String>,
        value: impl Into<AnswerValue>,
    ) -> Option<AnswerValue> {
        self.0.insert(question_id.into(), value.into())
    }

    pub fn remove(&mut self, question_id: &str) -> Option<AnswerValue> {
        self.0.remove(question_id)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<BTreeMap<String, Option<AnswerValue>>> for Answers {
    fn from(raw: BTreeMap<String, Option<AnswerValue>>) -> Self {
        Self(
            raw.into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v)))
                .collect(),
        )
    }
}

impl<K, V> FromIterator<(K, V)> for Answers
where
    K: Into<String>,
    V: Into<AnswerValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
