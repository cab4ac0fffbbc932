use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Error returned when an RDF/XML document cannot be read.
///
/// Covers malformed markup only; well-formed documents that merely lack the
/// elements this parser looks for produce a (possibly empty) ontology.
#[derive(Debug, Error)]
#[error("Invalid XML: {0}")]
pub struct RdfXmlParseError(#[from] quick_xml::Error);

impl From<AttrError> for RdfXmlParseError {
    fn from(error: AttrError) -> Self {
        Self(error.into())
    }
}

impl From<quick_xml::escape::EscapeError> for RdfXmlParseError {
    fn from(error: quick_xml::escape::EscapeError) -> Self {
        Self(error.into())
    }
}
