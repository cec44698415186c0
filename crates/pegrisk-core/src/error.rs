use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("field '{field}' expects a {expected} value, got {found}")]
    WrongType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("field '{field}': '{raw}' is not a number")]
    InvalidNumber { field: String, raw: String },

    #[error("field '{field}': '{raw}' is not an ISO 8601 date: {source}")]
    InvalidDate {
        field: String,
        raw: String,
        #[source]
        source: jiff::Error,
    },
}
