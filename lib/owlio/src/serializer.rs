use owljsonld::JsonLdSerializer;
use owlmodel::Ontology;
use owlrdfxml::RdfXmlSerializer;
use owlttl::TurtleSerializer;

use crate::format::OntologyFormat;

/// A serializer for any of the supported ontology serializations.
///
/// ```
/// use owlio::{OntologyFormat, OntologySerializer};
/// use owlmodel::Ontology;
///
/// let ontology = Ontology::new("http://example.org/zoo", "Zoo");
/// let serializer = OntologySerializer::from_format(OntologyFormat::RdfXml);
/// let xml = serializer.serialize_to_string(&ontology);
/// assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
/// ```
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct OntologySerializer {
    format: OntologyFormat,
}

impl OntologySerializer {
    /// Builds a serializer for the given format.
    #[inline]
    pub fn from_format(format: OntologyFormat) -> Self {
        Self { format }
    }

    /// The format this serializer writes.
    #[inline]
    pub const fn format(self) -> OntologyFormat {
        self.format
    }

    pub fn serialize_to_string(self, ontology: &Ontology) -> String {
        match self.format {
            OntologyFormat::JsonLd => JsonLdSerializer::new().serialize_to_string(ontology),
            OntologyFormat::RdfXml => RdfXmlSerializer::new().serialize_to_string(ontology),
            OntologyFormat::Turtle => TurtleSerializer::new().serialize_to_string(ontology),
        }
    }
}
