//! The namespace registry: well-known vocabulary IRIs plus prefix expansion
//! and local-name helpers shared by the codecs and the query engine.

use std::borrow::Cow;

pub mod rdf {
    //! [RDF](https://www.w3.org/TR/rdf11-concepts/) vocabulary.

    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// The subject is an instance of a class.
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

pub mod rdfs {
    //! [RDF Schema](https://www.w3.org/TR/rdf-schema/) vocabulary.

    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// A human-readable name for the subject.
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// A description of the subject resource.
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    /// The subject is a subclass of a class.
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// The subject is a subproperty of a property.
    pub const SUB_PROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
    /// A domain of the subject property.
    pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    /// A range of the subject property.
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    /// The class resource, everything.
    pub const RESOURCE: &str = "http://www.w3.org/2000/01/rdf-schema#Resource";
}

pub mod owl {
    //! [OWL 2](https://www.w3.org/TR/owl2-overview/) vocabulary.

    pub const NS: &str = "http://www.w3.org/2002/07/owl#";
    /// The class of ontologies.
    pub const ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    /// The class of OWL classes.
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// The class of OWL individuals.
    pub const THING: &str = "http://www.w3.org/2002/07/owl#Thing";
    /// The class of named individuals.
    pub const NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
    /// The class of object properties.
    pub const OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// The class of data properties.
    pub const DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    /// The class of annotation properties.
    pub const ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
    /// Version information attached to an ontology.
    pub const VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
    /// The subject ontology imports another ontology.
    pub const IMPORTS: &str = "http://www.w3.org/2002/07/owl#imports";
    /// The subject and object classes share no instance.
    pub const DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";
    /// The subject and object classes have the same instances.
    pub const EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";
    /// The subject and object individuals denote the same thing.
    pub const SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";
    /// The subject and object individuals denote different things.
    pub const DIFFERENT_FROM: &str = "http://www.w3.org/2002/07/owl#differentFrom";
}

pub mod xsd {
    //! [XML Schema datatypes](https://www.w3.org/TR/xmlschema11-2/) namespace.

    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";
}

/// The well-known prefixes in lookup order.
pub const PREFIXES: [(&str, &str); 4] = [
    ("rdf:", rdf::NS),
    ("rdfs:", rdfs::NS),
    ("owl:", owl::NS),
    ("xsd:", xsd::NS),
];

/// Expands a term to a full IRI.
///
/// Strips one layer of surrounding angle brackets, trims whitespace, then
/// rewrites the first matching well-known prefix to its namespace. Terms with
/// no known prefix come back unchanged.
///
/// ```
/// use owlmodel::vocab;
///
/// assert_eq!(vocab::expand("owl:Class"), vocab::owl::CLASS);
/// assert_eq!(vocab::expand("<http://example.org/x>"), "http://example.org/x");
/// assert_eq!(vocab::expand("ex:thing"), "ex:thing");
/// ```
pub fn expand(term: &str) -> Cow<'_, str> {
    let stripped = term.strip_prefix('<').unwrap_or(term);
    let stripped = stripped.strip_suffix('>').unwrap_or(stripped);
    let stripped = stripped.trim();
    for (prefix, namespace) in PREFIXES {
        if let Some(rest) = stripped.strip_prefix(prefix) {
            return Cow::Owned(format!("{namespace}{rest}"));
        }
    }
    Cow::Borrowed(stripped)
}

/// Derives a short name from an IRI.
///
/// Returns the fragment after the last `#` when there is one and it is not
/// empty. An IRI without any `#` comes back whole. When the IRI ends with
/// `#`, falls back to the segment after the last `/`, then to the whole IRI.
pub fn local_name(iri: &str) -> &str {
    let after_hash = match iri.rsplit_once('#') {
        Some((_, fragment)) => fragment,
        None => iri,
    };
    if !after_hash.is_empty() {
        return after_hash;
    }
    let after_slash = match iri.rsplit_once('/') {
        Some((_, segment)) => segment,
        None => iri,
    };
    if !after_slash.is_empty() {
        return after_slash;
    }
    iri
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_known_prefixes() {
        assert_eq!(expand("rdf:type"), rdf::TYPE);
        assert_eq!(expand("rdfs:label"), rdfs::LABEL);
        assert_eq!(expand("owl:Thing"), owl::THING);
        assert_eq!(
            expand("xsd:string"),
            "http://www.w3.org/2001/XMLSchema#string"
        );
    }

    #[test]
    fn expand_passes_through_unknown_terms() {
        assert_eq!(expand("http://example.org/x"), "http://example.org/x");
        assert_eq!(expand("ex:unknown"), "ex:unknown");
        assert_eq!(expand("  owl:Class  "), owl::CLASS);
    }

    #[test]
    fn expand_strips_angle_brackets() {
        assert_eq!(expand("<http://example.org/x>"), "http://example.org/x");
        assert_eq!(expand("<owl:Class>"), owl::CLASS);
    }

    #[test]
    fn local_name_fallback_chain() {
        assert_eq!(local_name("http://example.org/o#Person"), "Person");
        // no fragment separator: the whole IRI is the name
        assert_eq!(local_name("http://example.org/Person"), "http://example.org/Person");
        assert_eq!(local_name("http://example.org/o#"), "o#");
        assert_eq!(local_name("#"), "#");
    }
}
