use std::fmt;

/// Ontology serialization formats.
///
/// This enumeration is non exhaustive. New formats might be added in the future.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
#[non_exhaustive]
pub enum OntologyFormat {
    /// [JSON-LD](https://www.w3.org/TR/json-ld/)
    JsonLd,
    /// [RDF/XML](https://www.w3.org/TR/rdf-syntax-grammar/)
    RdfXml,
    /// [Turtle](https://www.w3.org/TR/turtle/)
    Turtle,
}

impl OntologyFormat {
    /// The format canonical IRI according to the [Unique URIs for file formats registry](https://www.w3.org/ns/formats/).
    ///
    /// ```
    /// use owlio::OntologyFormat;
    ///
    /// assert_eq!(
    ///     OntologyFormat::Turtle.iri(),
    ///     "http://www.w3.org/ns/formats/Turtle"
    /// )
    /// ```
    #[inline]
    pub const fn iri(self) -> &'static str {
        match self {
            Self::JsonLd => "https://www.w3.org/ns/formats/data/JSON-LD",
            Self::RdfXml => "http://www.w3.org/ns/formats/RDF_XML",
            Self::Turtle => "http://www.w3.org/ns/formats/Turtle",
        }
    }

    /// The format [IANA media type](https://tools.ietf.org/html/rfc2046).
    ///
    /// ```
    /// use owlio::OntologyFormat;
    ///
    /// assert_eq!(OntologyFormat::Turtle.media_type(), "text/turtle")
    /// ```
    #[inline]
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::JsonLd => "application/ld+json",
            Self::RdfXml => "application/rdf+xml",
            Self::Turtle => "text/turtle",
        }
    }

    /// The format [IANA-registered](https://tools.ietf.org/html/rfc2046) file extension.
    ///
    /// ```
    /// use owlio::OntologyFormat;
    ///
    /// assert_eq!(OntologyFormat::JsonLd.file_extension(), "jsonld")
    /// ```
    #[inline]
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::JsonLd => "jsonld",
            Self::RdfXml => "rdf",
            Self::Turtle => "ttl",
        }
    }

    /// The format name.
    ///
    /// ```
    /// use owlio::OntologyFormat;
    ///
    /// assert_eq!(OntologyFormat::RdfXml.name(), "RDF/XML")
    /// ```
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::JsonLd => "JSON-LD",
            Self::RdfXml => "RDF/XML",
            Self::Turtle => "Turtle",
        }
    }

    /// Looks for a known format from a media type.
    ///
    /// It supports some media type aliases.
    /// For example, "application/xml" is going to return `OntologyFormat::RdfXml` even if it is not its canonical media type.
    ///
    /// Example:
    /// ```
    /// use owlio::OntologyFormat;
    ///
    /// assert_eq!(
    ///     OntologyFormat::from_media_type("text/turtle; charset=utf-8"),
    ///     Some(OntologyFormat::Turtle)
    /// )
    /// ```
    #[inline]
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        const MEDIA_SUBTYPES: [(&str, OntologyFormat); 7] = [
            ("json", OntologyFormat::JsonLd),
            ("jsonld", OntologyFormat::JsonLd),
            ("ld+json", OntologyFormat::JsonLd),
            ("owl+xml", OntologyFormat::RdfXml),
            ("rdf+xml", OntologyFormat::RdfXml),
            ("turtle", OntologyFormat::Turtle),
            ("xml", OntologyFormat::RdfXml),
        ];

        let type_subtype = media_type
            .split_once(';')
            .map_or(media_type, |(type_subtype, _)| type_subtype);
        let (r#type, subtype) = type_subtype.split_once('/')?;
        let r#type = r#type.trim();
        if !r#type.eq_ignore_ascii_case("application") && !r#type.eq_ignore_ascii_case("text") {
            return None;
        }
        let subtype = subtype.trim();
        let subtype = subtype.strip_prefix("x-").unwrap_or(subtype);
        for (candidate_subtype, candidate_id) in MEDIA_SUBTYPES {
            if candidate_subtype.eq_ignore_ascii_case(subtype) {
                return Some(candidate_id);
            }
        }
        None
    }

    /// Looks for a known format from an extension.
    ///
    /// It supports some aliases.
    ///
    /// Example:
    /// ```
    /// use owlio::OntologyFormat;
    ///
    /// assert_eq!(
    ///     OntologyFormat::from_extension("owl"),
    ///     Some(OntologyFormat::RdfXml)
    /// )
    /// ```
    #[inline]
    pub fn from_extension(extension: &str) -> Option<Self> {
        const EXTENSIONS: [(&str, OntologyFormat); 7] = [
            ("json", OntologyFormat::JsonLd),
            ("jsonld", OntologyFormat::JsonLd),
            ("owl", OntologyFormat::RdfXml),
            ("rdf", OntologyFormat::RdfXml),
            ("ttl", OntologyFormat::Turtle),
            ("turtle", OntologyFormat::Turtle),
            ("xml", OntologyFormat::RdfXml),
        ];
        for (candidate_extension, candidate_id) in EXTENSIONS {
            if candidate_extension.eq_ignore_ascii_case(extension) {
                return Some(candidate_id);
            }
        }
        None
    }

    /// Looks for a known format from the document text itself.
    ///
    /// A leading `{` or `[` means JSON-LD, a leading XML marker
    /// (`<?xml`, `<rdf:RDF`, `<RDF` or `<Ontology`) means RDF/XML and a
    /// `@prefix` or `@base` directive anywhere means Turtle. Anything else is
    /// `None` rather than a guess.
    ///
    /// Example:
    /// ```
    /// use owlio::OntologyFormat;
    ///
    /// assert_eq!(
    ///     OntologyFormat::from_content("@prefix owl: <http://www.w3.org/2002/07/owl#> ."),
    ///     Some(OntologyFormat::Turtle)
    /// )
    /// ```
    pub fn from_content(content: &str) -> Option<Self> {
        let trimmed = content.trim_start();
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            return Some(Self::JsonLd);
        }
        if ["<?xml", "<rdf:RDF", "<RDF", "<Ontology"]
            .iter()
            .any(|marker| trimmed.starts_with(marker))
        {
            return Some(Self::RdfXml);
        }
        if content.contains("@prefix") || content.contains("@base") {
            return Some(Self::Turtle);
        }
        None
    }
}

impl fmt::Display for OntologyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_media_type_resolves_aliases() {
        assert_eq!(OntologyFormat::from_media_type("foo/bar"), None);
        assert_eq!(OntologyFormat::from_media_type("text/csv"), None);
        assert_eq!(
            OntologyFormat::from_media_type("text/turtle"),
            Some(OntologyFormat::Turtle)
        );
        assert_eq!(
            OntologyFormat::from_media_type("application/x-turtle"),
            Some(OntologyFormat::Turtle)
        );
        assert_eq!(
            OntologyFormat::from_media_type("text/turtle; charset=utf-8"),
            Some(OntologyFormat::Turtle)
        );
        assert_eq!(
            OntologyFormat::from_media_type("application/ld+json"),
            Some(OntologyFormat::JsonLd)
        );
        assert_eq!(
            OntologyFormat::from_media_type("application/json"),
            Some(OntologyFormat::JsonLd)
        );
        assert_eq!(
            OntologyFormat::from_media_type("application/rdf+xml"),
            Some(OntologyFormat::RdfXml)
        );
        assert_eq!(
            OntologyFormat::from_media_type("application/xml"),
            Some(OntologyFormat::RdfXml)
        );
    }

    #[test]
    fn from_extension_resolves_aliases() {
        assert_eq!(OntologyFormat::from_extension("csv"), None);
        assert_eq!(
            OntologyFormat::from_extension("ttl"),
            Some(OntologyFormat::Turtle)
        );
        assert_eq!(
            OntologyFormat::from_extension("JSONLD"),
            Some(OntologyFormat::JsonLd)
        );
        assert_eq!(
            OntologyFormat::from_extension("owl"),
            Some(OntologyFormat::RdfXml)
        );
    }

    #[test]
    fn from_content_markers() {
        assert_eq!(
            OntologyFormat::from_content("  {\"@context\": {}}"),
            Some(OntologyFormat::JsonLd)
        );
        assert_eq!(
            OntologyFormat::from_content("[{\"@id\": \"http://example.org/a\"}]"),
            Some(OntologyFormat::JsonLd)
        );
        assert_eq!(
            OntologyFormat::from_content("<?xml version=\"1.0\"?><rdf:RDF/>"),
            Some(OntologyFormat::RdfXml)
        );
        assert_eq!(
            OntologyFormat::from_content("<rdf:RDF xmlns:owl=\"http://www.w3.org/2002/07/owl#\"/>"),
            Some(OntologyFormat::RdfXml)
        );
        assert_eq!(
            OntologyFormat::from_content("<Ontology about=\"http://example.org/o\"/>"),
            Some(OntologyFormat::RdfXml)
        );
        assert_eq!(
            OntologyFormat::from_content("# a comment\n@prefix owl: <http://www.w3.org/2002/07/owl#> ."),
            Some(OntologyFormat::Turtle)
        );
        assert_eq!(OntologyFormat::from_content("plain text"), None);
        assert_eq!(OntologyFormat::from_content(""), None);
    }

    #[test]
    fn display_uses_the_format_name() {
        assert_eq!(OntologyFormat::JsonLd.to_string(), "JSON-LD");
        assert_eq!(OntologyFormat::Turtle.to_string(), "Turtle");
    }
}
