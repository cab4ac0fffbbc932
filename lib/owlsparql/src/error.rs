use thiserror::Error;

/// An error raised while parsing a SPARQL `SELECT` query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid SPARQL query: {message}")]
pub struct QuerySyntaxError {
    message: String,
}

impl QuerySyntaxError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
