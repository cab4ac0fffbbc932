use thiserror::Error;

/// Error returned when a document cannot be read as an ontology.
#[derive(Debug, Error)]
pub enum OntologyParseError {
    /// Invalid JSON-LD input.
    #[error(transparent)]
    JsonLd(#[from] owljsonld::JsonLdParseError),
    /// Invalid RDF/XML input.
    #[error(transparent)]
    RdfXml(#[from] owlrdfxml::RdfXmlParseError),
    /// No format was given and none could be detected from the input.
    #[error("unable to detect the ontology serialization format")]
    UnknownFormat,
}
