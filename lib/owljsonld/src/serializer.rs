use owlmodel::{NamedIndividual, Ontology, OntologyClass, OntologyProperty, vocab};
use serde_json::{Map, Value, json};

/// A JSON-LD serializer for ontologies.
///
/// The document layout is fixed: `@context`, `@id`, `@type`, optional
/// `owl:versionInfo`, `owl:imports`, then `@graph` holding classes,
/// properties and individuals in insertion order. Output is pretty-printed
/// with two-space indentation and absent optionals are omitted rather than
/// written as `null`.
///
/// ```
/// use owljsonld::JsonLdSerializer;
/// use owlmodel::Ontology;
///
/// let mut ontology = Ontology::new("http://example.org/zoo", "Zoo");
/// ontology.set_version("1.0");
/// let document = JsonLdSerializer::new().serialize_to_string(&ontology);
/// assert!(document.contains("\"@id\": \"http://example.org/zoo\""));
/// assert!(document.contains("\"owl:versionInfo\": \"1.0\""));
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct JsonLdSerializer;

impl JsonLdSerializer {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    pub fn serialize_to_string(self, ontology: &Ontology) -> String {
        let mut root = Map::new();
        root.insert(
            "@context".into(),
            json!({
                "owl": vocab::owl::NS,
                "rdf": vocab::rdf::NS,
                "rdfs": vocab::rdfs::NS,
                "xsd": vocab::xsd::NS,
            }),
        );
        root.insert("@id".into(), ontology.id().into());
        root.insert("@type".into(), "owl:Ontology".into());
        if let Some(version) = ontology.version() {
            root.insert("owl:versionInfo".into(), version.into());
        }
        root.insert("owl:imports".into(), id_refs(ontology.imports()));

        let mut graph = Vec::new();
        for class in ontology.classes() {
            graph.push(class_node(class));
        }
        for property in ontology.properties() {
            graph.push(property_node(property));
        }
        for individual in ontology.individuals() {
            graph.push(individual_node(individual));
        }
        root.insert("@graph".into(), Value::Array(graph));

        serde_json::to_string_pretty(&Value::Object(root)).unwrap_or_default()
    }
}

fn class_node(class: &OntologyClass) -> Value {
    let mut node = Map::new();
    node.insert("@id".into(), class.id.as_str().into());
    node.insert("@type".into(), "owl:Class".into());
    node.insert("rdfs:label".into(), class.label_or_name().into());
    if let Some(description) = &class.description {
        node.insert("rdfs:comment".into(), description.as_str().into());
    }
    node.insert("rdfs:subClassOf".into(), id_refs(&class.super_classes));
    node.insert("owl:disjointWith".into(), id_refs(&class.disjoint_with));
    Value::Object(node)
}

fn property_node(property: &OntologyProperty) -> Value {
    let mut node = Map::new();
    node.insert("@id".into(), property.id.as_str().into());
    node.insert(
        "@type".into(),
        format!("owl:{}", property.kind.as_str()).into(),
    );
    node.insert("rdfs:label".into(), property.label_or_name().into());
    if let Some(description) = &property.description {
        node.insert("rdfs:comment".into(), description.as_str().into());
    }
    node.insert("rdfs:domain".into(), id_refs(&property.domain));
    node.insert("rdfs:range".into(), id_refs(&property.range));
    node.insert(
        "rdfs:subPropertyOf".into(),
        id_refs(&property.super_properties),
    );
    Value::Object(node)
}

fn individual_node(individual: &NamedIndividual) -> Value {
    let mut node = Map::new();
    node.insert("@id".into(), individual.id.as_str().into());
    node.insert("@type".into(), id_refs(&individual.types));
    node.insert("rdfs:label".into(), individual.label_or_name().into());
    Value::Object(node)
}

/// `["…", …]` rendered as an array of `{"@id": …}` references.
fn id_refs(iris: &[String]) -> Value {
    Value::Array(iris.iter().map(|iri| json!({ "@id": iri })).collect())
}
