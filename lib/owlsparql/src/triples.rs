use crate::term::Term;
use owlmodel::{LiteralValue, Ontology, vocab};
use std::fmt;

/// One statement of the ontology projection queried by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Triple {
    /// The described resource, spelled the way the model spells its id.
    pub subject: String,
    /// The relation, always a fully expanded IRI.
    pub predicate: String,
    pub object: Term,
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

fn statement(subject: &str, predicate: &str, object: Term) -> Triple {
    Triple {
        subject: subject.to_owned(),
        predicate: predicate.to_owned(),
        object,
    }
}

fn iri(value: &str) -> Term {
    Term::Iri(value.to_owned())
}

fn literal(value: &str) -> Term {
    Term::Literal(LiteralValue::from(value))
}

/// Projects an [`Ontology`] into the flat triple list the query engine
/// matches against.
///
/// The projection is deterministic: the ontology header first, then classes,
/// properties and individuals in model insertion order, each entity's axioms
/// in declaration order. Every entity contributes an `rdfs:label` triple,
/// falling back to its name when no label is set. A property assertion whose
/// value is a string projects as an IRI object pointing at the referenced
/// resource; numbers and booleans stay literals.
#[must_use]
pub fn ontology_triples(ontology: &Ontology) -> Vec<Triple> {
    let mut triples = Vec::new();

    triples.push(statement(
        ontology.id(),
        vocab::rdf::TYPE,
        iri(vocab::owl::ONTOLOGY),
    ));
    if let Some(version) = ontology.version() {
        triples.push(statement(
            ontology.id(),
            vocab::owl::VERSION_INFO,
            literal(version),
        ));
    }

    for class in ontology.classes() {
        triples.push(statement(&class.id, vocab::rdf::TYPE, iri(vocab::owl::CLASS)));
        triples.push(statement(
            &class.id,
            vocab::rdfs::LABEL,
            literal(class.label_or_name()),
        ));
        if let Some(description) = &class.description {
            triples.push(statement(
                &class.id,
                vocab::rdfs::COMMENT,
                literal(description),
            ));
        }
        for super_id in &class.super_classes {
            triples.push(statement(&class.id, vocab::rdfs::SUB_CLASS_OF, iri(super_id)));
        }
        for disjoint_id in &class.disjoint_with {
            triples.push(statement(
                &class.id,
                vocab::owl::DISJOINT_WITH,
                iri(disjoint_id),
            ));
        }
        for equivalent_id in &class.equivalent_to {
            triples.push(statement(
                &class.id,
                vocab::owl::EQUIVALENT_CLASS,
                iri(equivalent_id),
            ));
        }
    }

    for property in ontology.properties() {
        // The type IRI follows `PropertyKind::as_str`, so data properties
        // project as owl#DataProperty.
        let kind_iri = format!("{}{}", vocab::owl::NS, property.kind.as_str());
        triples.push(statement(&property.id, vocab::rdf::TYPE, Term::Iri(kind_iri)));
        triples.push(statement(
            &property.id,
            vocab::rdfs::LABEL,
            literal(property.label_or_name()),
        ));
        if let Some(description) = &property.description {
            triples.push(statement(
                &property.id,
                vocab::rdfs::COMMENT,
                literal(description),
            ));
        }
        for domain_id in &property.domain {
            triples.push(statement(&property.id, vocab::rdfs::DOMAIN, iri(domain_id)));
        }
        for range_id in &property.range {
            triples.push(statement(&property.id, vocab::rdfs::RANGE, iri(range_id)));
        }
        for super_id in &property.super_properties {
            triples.push(statement(
                &property.id,
                vocab::rdfs::SUB_PROPERTY_OF,
                iri(super_id),
            ));
        }
    }

    for individual in ontology.individuals() {
        triples.push(statement(
            &individual.id,
            vocab::rdf::TYPE,
            iri(vocab::owl::NAMED_INDIVIDUAL),
        ));
        for type_id in &individual.types {
            triples.push(statement(&individual.id, vocab::rdf::TYPE, iri(type_id)));
        }
        triples.push(statement(
            &individual.id,
            vocab::rdfs::LABEL,
            literal(individual.label_or_name()),
        ));
        for assertion in &individual.property_assertions {
            let object = match &assertion.value {
                LiteralValue::String(value) => iri(value),
                value => Term::Literal(value.clone()),
            };
            triples.push(statement(&individual.id, &assertion.property, object));
        }
        for same_id in &individual.same_as {
            triples.push(statement(&individual.id, vocab::owl::SAME_AS, iri(same_id)));
        }
        for different_id in &individual.different_from {
            triples.push(statement(
                &individual.id,
                vocab::owl::DIFFERENT_FROM,
                iri(different_id),
            ));
        }
    }

    triples
}
