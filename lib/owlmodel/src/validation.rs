//! Structural validation of [`Ontology`] values.
//!
//! [`validate`] checks IRI well-formedness, not logical consistency; the
//! reasoner covers the latter. Problems are returned as human-readable
//! messages, an empty list meaning the ontology is valid.

use crate::ontology::Ontology;
use oxiri::Iri;

/// Prefixes accepted in reference positions alongside full HTTP(S) IRIs.
const REFERENCE_PREFIXES: [&str; 3] = ["owl:", "rdfs:", "xsd:"];

/// Validates the ontology and returns every problem found.
///
/// Entity ids, the ontology id and import targets must be syntactically
/// valid HTTP(S) IRIs. Reference positions (superclasses, property domains
/// and ranges, individual types) may instead use the well-known `owl:`,
/// `rdfs:` and `xsd:` prefixes.
///
/// ```
/// use owlmodel::{Ontology, OntologyClass, validation};
///
/// let mut ontology = Ontology::new("not a uri", "Broken");
/// ontology.insert_class(OntologyClass::new("invalid:class", "Broken class"));
/// let errors = validation::validate(&ontology);
/// assert_eq!(errors.len(), 2);
/// assert!(errors[0].starts_with("Ontology IRI must be a valid HTTP(S) URI"));
/// ```
pub fn validate(ontology: &Ontology) -> Vec<String> {
    let mut errors = Vec::new();

    if !is_http_iri(ontology.id()) {
        errors.push(format!(
            "Ontology IRI must be a valid HTTP(S) URI: {}",
            ontology.id()
        ));
    }

    for import in ontology.imports() {
        if !is_http_iri(import) {
            errors.push(format!("Invalid import IRI: {import}"));
        }
    }

    for class in ontology.classes() {
        if !is_http_iri(&class.id) {
            errors.push(format!(
                "Class \"{}\" has an invalid IRI: {}",
                class.name, class.id
            ));
        }
        for super_class in &class.super_classes {
            if !is_reference_iri(super_class) {
                errors.push(format!(
                    "Class \"{}\" has an invalid superclass IRI: {super_class}",
                    class.name
                ));
            }
        }
    }

    for property in ontology.properties() {
        if !is_http_iri(&property.id) {
            errors.push(format!(
                "Property \"{}\" has an invalid IRI: {}",
                property.name, property.id
            ));
        }
        for domain in &property.domain {
            if !is_reference_iri(domain) {
                errors.push(format!(
                    "Property \"{}\" has an invalid domain IRI: {domain}",
                    property.name
                ));
            }
        }
        for range in &property.range {
            if !is_reference_iri(range) {
                errors.push(format!(
                    "Property \"{}\" has an invalid range IRI: {range}",
                    property.name
                ));
            }
        }
    }

    for individual in ontology.individuals() {
        if !is_http_iri(&individual.id) {
            errors.push(format!(
                "Individual \"{}\" has an invalid IRI: {}",
                individual.name, individual.id
            ));
        }
        for individual_type in &individual.types {
            if !is_reference_iri(individual_type) {
                errors.push(format!(
                    "Individual \"{}\" has an invalid type IRI: {individual_type}",
                    individual.name
                ));
            }
        }
    }

    errors
}

fn is_http_iri(value: &str) -> bool {
    (value.starts_with("http://") || value.starts_with("https://")) && Iri::parse(value).is_ok()
}

fn is_reference_iri(value: &str) -> bool {
    is_http_iri(value)
        || REFERENCE_PREFIXES
            .iter()
            .any(|prefix| value.starts_with(prefix))
}
