use owlmodel::{Ontology, vocab};

/// A [Turtle](https://www.w3.org/TR/turtle/) serializer for ontologies.
///
/// Emits one stanza per entity in insertion order, using full IRIs for every
/// subject and object. Disjointness, equivalence and individual assertions
/// are not part of this codec's subset; the JSON-LD and RDF/XML codecs carry
/// them.
///
/// ```
/// use owlmodel::{Ontology, OntologyClass};
/// use owlttl::TurtleSerializer;
///
/// let mut ontology = Ontology::new("http://example.org/zoo", "Zoo");
/// ontology.set_version("1.0");
/// ontology.insert_class(OntologyClass::new("http://example.org/zoo#Lion", "Lion"));
///
/// let turtle = TurtleSerializer::new().serialize_to_string(&ontology);
/// assert!(turtle.starts_with("@prefix owl:"));
/// assert!(turtle.contains("<http://example.org/zoo> a owl:Ontology ;\n  owl:versionInfo \"1.0\""));
/// assert!(turtle.contains("<http://example.org/zoo#Lion> a owl:Class"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct TurtleSerializer;

impl TurtleSerializer {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    pub fn serialize_to_string(self, ontology: &Ontology) -> String {
        let mut turtle = String::new();
        for (prefix, namespace) in [
            ("owl", vocab::owl::NS),
            ("rdf", vocab::rdf::NS),
            ("rdfs", vocab::rdfs::NS),
            ("xsd", vocab::xsd::NS),
        ] {
            turtle.push_str("@prefix ");
            turtle.push_str(prefix);
            turtle.push_str(": <");
            turtle.push_str(namespace);
            turtle.push_str("> .\n");
        }
        turtle.push('\n');

        push_subject(&mut turtle, ontology.id());
        turtle.push_str("owl:Ontology");
        if let Some(version) = ontology.version() {
            push_literal_clause(&mut turtle, "owl:versionInfo", version);
        }
        turtle.push_str(" .\n\n");

        for class in ontology.classes() {
            push_subject(&mut turtle, &class.id);
            turtle.push_str("owl:Class");
            if let Some(label) = &class.label {
                push_literal_clause(&mut turtle, "rdfs:label", label);
            }
            if let Some(description) = &class.description {
                push_literal_clause(&mut turtle, "rdfs:comment", description);
            }
            for super_class in &class.super_classes {
                push_iri_clause(&mut turtle, "rdfs:subClassOf", super_class);
            }
            turtle.push_str(" .\n\n");
        }

        for property in ontology.properties() {
            push_subject(&mut turtle, &property.id);
            turtle.push_str("owl:");
            turtle.push_str(property.kind.as_str());
            if let Some(label) = &property.label {
                push_literal_clause(&mut turtle, "rdfs:label", label);
            }
            if let Some(description) = &property.description {
                push_literal_clause(&mut turtle, "rdfs:comment", description);
            }
            for domain in &property.domain {
                push_iri_clause(&mut turtle, "rdfs:domain", domain);
            }
            for range in &property.range {
                push_iri_clause(&mut turtle, "rdfs:range", range);
            }
            turtle.push_str(" .\n\n");
        }

        for individual in ontology.individuals() {
            push_subject(&mut turtle, &individual.id);
            for (i, individual_type) in individual.types.iter().enumerate() {
                if i > 0 {
                    turtle.push_str(", ");
                }
                turtle.push('<');
                turtle.push_str(individual_type);
                turtle.push('>');
            }
            if let Some(label) = &individual.label {
                push_literal_clause(&mut turtle, "rdfs:label", label);
            }
            turtle.push_str(" .\n\n");
        }

        turtle
    }
}

/// Starts a stanza: `<id> a `.
fn push_subject(turtle: &mut String, id: &str) {
    turtle.push('<');
    turtle.push_str(id);
    turtle.push_str("> a ");
}

/// Appends ` ;\n  predicate "value"`.
fn push_literal_clause(turtle: &mut String, predicate: &str, value: &str) {
    turtle.push_str(" ;\n  ");
    turtle.push_str(predicate);
    turtle.push_str(" \"");
    turtle.push_str(value);
    turtle.push('"');
}

/// Appends ` ;\n  predicate <iri>`.
fn push_iri_clause(turtle: &mut String, predicate: &str, iri: &str) {
    turtle.push_str(" ;\n  ");
    turtle.push_str(predicate);
    turtle.push_str(" <");
    turtle.push_str(iri);
    turtle.push('>');
}
