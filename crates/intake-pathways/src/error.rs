use thiserror::Error;

use crate::question::{AnswerError, RegistryError};

#[derive(Debug, Error)]
pub enum PathwayError {
    #[error("unknown pathway: {0}")]
    UnknownPathway(String),

    #[error("invalid answers for pathway '{pathway_key}': {} problem(s)", errors.len())]
    InvalidAnswers {
        pathway_key: String,
        errors: Vec<AnswerError>,
    },

    #[error("pathway registry is inconsistent: {} problem(s)", .0.len())]
    InconsistentRegistry(Vec<RegistryError>),
}
