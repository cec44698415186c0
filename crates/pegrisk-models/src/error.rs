use thiserror::Error;

use pegrisk_core::error::CoreError;

use crate::fields::ValidationError;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown model: {0}")]
    UnknownModel(String),

    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("degenerate computation in {term}: {reason}")]
    Degenerate { term: &'static str, reason: String },

    #[error(transparent)]
    Record(#[from] CoreError),
}

impl ModelError {
    pub(crate) fn degenerate(term: &'static str, reason: impl Into<String>) -> Self {
        ModelError::Degenerate {
            term,
            reason: reason.into(),
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
