use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Answer to a body-location question: the regions the patient tapped on the
/// diagram plus an optional side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LocationSelection {
    pub regions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub laterality: Option<Laterality>,
}

impl LocationSelection {
    pub fn new<I, S>(regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            regions: regions.into_iter().map(Into::into).collect(),
            laterality: None,
        }
    }

    pub fn with_laterality(mut self, laterality: Laterality) -> Self {
        self.laterality = Some(laterality);
        self
    }

    pub fn contains(&self, region: &str) -> bool {
        self.regions.iter().any(|r| r == region)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Laterality {
    Bilateral,
    Left,
    Right,
    NotApplicable,
}

impl Laterality {
    pub fn label(&self) -> &'static str {
        match self {
            Laterality::Bilateral => "both sides",
            Laterality::Left => "left side",
            Laterality::Right => "right side",
            Laterality::NotApplicable => "not applicable",
        }
    }
}
