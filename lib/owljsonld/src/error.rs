use thiserror::Error;

/// Error returned when a JSON-LD document cannot be read.
///
/// The only failure mode is malformed JSON; structurally surprising but
/// well-formed documents parse into a (possibly empty) ontology instead.
#[derive(Debug, Error)]
#[error("Invalid JSON: {0}")]
pub struct JsonLdParseError(#[from] serde_json::Error);
