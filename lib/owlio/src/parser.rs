use owljsonld::JsonLdParser;
use owlmodel::Ontology;
use owlrdfxml::RdfXmlParser;
use owlttl::TurtleParser;

use crate::error::OntologyParseError;
use crate::format::OntologyFormat;

/// A parser for any of the supported ontology serializations.
///
/// It currently supports the following formats:
/// * [JSON-LD](https://www.w3.org/TR/json-ld/) ([`OntologyFormat::JsonLd`])
/// * [RDF/XML](https://www.w3.org/TR/rdf-syntax-grammar/) ([`OntologyFormat::RdfXml`])
/// * [Turtle](https://www.w3.org/TR/turtle/) ([`OntologyFormat::Turtle`])
///
/// A parser built with [`new`](Self::new) detects the format from the input
/// text using [`OntologyFormat::from_content`] and fails with
/// [`OntologyParseError::UnknownFormat`] when no format can be told apart.
/// [`from_format`](Self::from_format) pins the format instead.
///
/// ```
/// use owlio::{OntologyFormat, OntologyParser};
///
/// let turtle = "<http://example.org/zoo#Lion> a owl:Class .";
/// let ontology = OntologyParser::from_format(OntologyFormat::Turtle).parse_str(turtle)?;
/// assert!(ontology.contains_class("http://example.org/zoo#Lion"));
/// # Ok::<_, owlio::OntologyParseError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct OntologyParser {
    format: Option<OntologyFormat>,
}

impl OntologyParser {
    /// Builds a parser that detects the format from the input text.
    #[inline]
    pub fn new() -> Self {
        Self { format: None }
    }

    /// Builds a parser for the given format.
    #[inline]
    pub fn from_format(format: OntologyFormat) -> Self {
        Self {
            format: Some(format),
        }
    }

    pub fn parse_str(self, content: &str) -> Result<Ontology, OntologyParseError> {
        let format = self
            .format
            .or_else(|| OntologyFormat::from_content(content))
            .ok_or(OntologyParseError::UnknownFormat)?;
        Ok(match format {
            OntologyFormat::JsonLd => JsonLdParser::new().parse_str(content)?,
            OntologyFormat::RdfXml => RdfXmlParser::new().parse_str(content)?,
            OntologyFormat::Turtle => TurtleParser::new().parse_str(content),
        })
    }
}
