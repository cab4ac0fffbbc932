use crate::error::JsonLdParseError;
use owlmodel::{NamedIndividual, Ontology, OntologyClass, OntologyProperty, PropertyKind, vocab};
use serde_json::Value;

/// Ontology IRI used when the document carries no `@id`.
const DEFAULT_ONTOLOGY_IRI: &str = "http://example.org/imported-ontology";
const DEFAULT_ONTOLOGY_NAME: &str = "Imported Ontology";

/// A tolerant JSON-LD parser for ontologies.
///
/// Nodes are taken from `@graph` when present, otherwise the root object is
/// read as a single node; an array root is treated as a bare graph. Node
/// kinds are sniffed from `@type`: a string mentioning `Class` declares a
/// class, one mentioning `Property` declares a property, any other typed
/// node becomes a named individual. Reference values may be strings,
/// `{"@id": …}` objects, or arrays of either. Nodes without `@id` and values
/// of unexpected shapes are skipped, never an error; only malformed JSON
/// fails.
///
/// ```
/// use owljsonld::JsonLdParser;
///
/// let document = r#"{
///   "@id": "http://example.org/zoo",
///   "@graph": [
///     { "@id": "http://example.org/zoo#Lion", "@type": "owl:Class" }
///   ]
/// }"#;
/// let ontology = JsonLdParser::new().parse_str(document)?;
/// assert_eq!(ontology.id(), "http://example.org/zoo");
/// assert!(ontology.contains_class("http://example.org/zoo#Lion"));
/// # Ok::<_, owljsonld::JsonLdParseError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct JsonLdParser;

impl JsonLdParser {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    pub fn parse_str(self, content: &str) -> Result<Ontology, JsonLdParseError> {
        let data: Value = serde_json::from_str(content)?;
        let mut ontology = Ontology::new(DEFAULT_ONTOLOGY_IRI, DEFAULT_ONTOLOGY_NAME);

        if let Some(id) = non_empty_string(data.get("@id")) {
            ontology.set_id(id);
        }
        if let Some(name) = non_empty_string(data.get("rdfs:label")) {
            ontology.set_name(name);
        }
        if let Some(version) = string_value(data.get("owl:versionInfo")) {
            ontology.set_version(version);
        }
        for import in id_list(data.get("owl:imports")) {
            ontology.add_import(import);
        }

        let nodes: &[Value] = match &data {
            Value::Array(items) => items,
            _ => match data.get("@graph") {
                Some(Value::Array(items)) => items,
                _ => std::slice::from_ref(&data),
            },
        };

        for item in nodes {
            read_node(item, &mut ontology);
        }

        Ok(ontology)
    }
}

fn read_node(item: &Value, ontology: &mut Ontology) {
    let Some(id) = non_empty_string(item.get("@id")) else {
        return;
    };
    match item.get("@type") {
        Some(Value::String(tag)) if tag.contains("Class") => {
            let mut class = OntologyClass::new(id.clone(), node_name(item, &id));
            class.label = string_value(item.get("rdfs:label"));
            class.description = string_value(item.get("rdfs:comment"));
            class.super_classes = id_list(item.get("rdfs:subClassOf"));
            class.disjoint_with = id_list(item.get("owl:disjointWith"));
            ontology.insert_class(class);
        }
        Some(Value::String(tag)) if tag.contains("Property") => {
            let kind = if tag.contains("Object") {
                PropertyKind::Object
            } else if tag.contains("Data") {
                PropertyKind::Data
            } else {
                PropertyKind::Annotation
            };
            let mut property = OntologyProperty::new(id.clone(), node_name(item, &id), kind);
            property.label = string_value(item.get("rdfs:label"));
            property.description = string_value(item.get("rdfs:comment"));
            property.domain = id_list(item.get("rdfs:domain"));
            property.range = id_list(item.get("rdfs:range"));
            property.super_properties = id_list(item.get("rdfs:subPropertyOf"));
            ontology.insert_property(property);
        }
        Some(Value::String(tag)) if !tag.is_empty() => {
            // any other typed node is an individual, except the ontology header itself
            let type_iri = vocab::expand(tag);
            if type_iri == vocab::owl::ONTOLOGY {
                return;
            }
            let mut individual = NamedIndividual::new(id.clone(), node_name(item, &id));
            individual.label = string_value(item.get("rdfs:label"));
            if type_iri != vocab::owl::NAMED_INDIVIDUAL {
                individual.types.push(type_iri.into_owned());
            }
            ontology.insert_individual(individual);
        }
        Some(Value::Array(types)) => {
            let mut individual = NamedIndividual::new(id.clone(), node_name(item, &id));
            individual.label = string_value(item.get("rdfs:label"));
            for item_type in types {
                let Some(raw) = type_ref(item_type) else {
                    continue;
                };
                let expanded = vocab::expand(raw);
                if expanded != vocab::owl::NAMED_INDIVIDUAL {
                    individual.types.push(expanded.into_owned());
                }
            }
            ontology.insert_individual(individual);
        }
        _ => {}
    }
}

fn type_ref(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s),
        Value::Object(map) => map.get("@id").and_then(Value::as_str),
        _ => None,
    }
}

fn string_value(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_owned)
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    string_value(value).filter(|s| !s.is_empty())
}

fn node_name(item: &Value, id: &str) -> String {
    match non_empty_string(item.get("rdfs:label")) {
        Some(label) => label,
        None => vocab::local_name(id).to_owned(),
    }
}

/// Reads a reference value that may be a string, a `{"@id": …}` object, or
/// an array of either.
fn id_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(id_of).collect(),
        Some(single) => id_of(single).into_iter().collect(),
        None => Vec::new(),
    }
}

fn id_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map.get("@id").and_then(Value::as_str).map(str::to_owned),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JsonLdSerializer;

    #[test]
    fn invalid_json_is_an_error() {
        let error = JsonLdParser::new().parse_str("{ not json").unwrap_err();
        assert!(error.to_string().starts_with("Invalid JSON:"));
    }

    #[test]
    fn header_defaults() {
        let ontology = JsonLdParser::new().parse_str("{}").unwrap();
        assert_eq!(ontology.id(), "http://example.org/imported-ontology");
        assert_eq!(ontology.name(), "Imported Ontology");
        assert!(ontology.is_empty());
    }

    #[test]
    fn sniffs_full_iri_types() {
        let document = r#"{
          "@graph": [
            { "@id": "http://example.org/o#A", "@type": "http://www.w3.org/2002/07/owl#Class" },
            { "@id": "http://example.org/o#p", "@type": "http://www.w3.org/2002/07/owl#ObjectProperty" }
          ]
        }"#;
        let ontology = JsonLdParser::new().parse_str(document).unwrap();
        assert!(ontology.contains_class("http://example.org/o#A"));
        assert_eq!(
            ontology.property("http://example.org/o#p").unwrap().kind,
            PropertyKind::Object
        );
    }

    #[test]
    fn tolerant_reference_shapes() {
        let document = r#"{
          "@graph": [
            {
              "@id": "http://example.org/o#A",
              "@type": "owl:Class",
              "rdfs:subClassOf": "http://example.org/o#B"
            },
            {
              "@id": "http://example.org/o#C",
              "@type": "owl:Class",
              "rdfs:subClassOf": { "@id": "http://example.org/o#D" }
            },
            {
              "@id": "http://example.org/o#E",
              "@type": "owl:Class",
              "rdfs:subClassOf": [
                "http://example.org/o#F",
                { "@id": "http://example.org/o#G" },
                42
              ]
            }
          ]
        }"#;
        let ontology = JsonLdParser::new().parse_str(document).unwrap();
        assert_eq!(
            ontology.class("http://example.org/o#A").unwrap().super_classes,
            ["http://example.org/o#B"]
        );
        assert_eq!(
            ontology.class("http://example.org/o#C").unwrap().super_classes,
            ["http://example.org/o#D"]
        );
        assert_eq!(
            ontology.class("http://example.org/o#E").unwrap().super_classes,
            ["http://example.org/o#F", "http://example.org/o#G"]
        );
    }

    #[test]
    fn typed_nodes_become_individuals() {
        let document = r#"{
          "@graph": [
            { "@id": "http://example.org/o#john", "@type": [{ "@id": "http://example.org/o#Person" }], "rdfs:label": "John" },
            { "@id": "http://example.org/o#jane", "@type": "http://example.org/o#Person" },
            { "@id": "http://example.org/o#ghost", "@type": ["owl:NamedIndividual", "http://example.org/o#Spirit"] }
          ]
        }"#;
        let ontology = JsonLdParser::new().parse_str(document).unwrap();
        let john = ontology.individual("http://example.org/o#john").unwrap();
        assert_eq!(john.types, ["http://example.org/o#Person"]);
        assert_eq!(john.label.as_deref(), Some("John"));
        assert_eq!(john.name, "John");
        let jane = ontology.individual("http://example.org/o#jane").unwrap();
        assert_eq!(jane.types, ["http://example.org/o#Person"]);
        assert_eq!(jane.name, "jane");
        // the marker class is not recorded as a type
        let ghost = ontology.individual("http://example.org/o#ghost").unwrap();
        assert_eq!(ghost.types, ["http://example.org/o#Spirit"]);
    }

    #[test]
    fn nodes_without_id_or_type_are_skipped() {
        let document = r#"{
          "@graph": [
            { "@type": "owl:Class" },
            { "@id": "http://example.org/o#untyped" }
          ]
        }"#;
        let ontology = JsonLdParser::new().parse_str(document).unwrap();
        assert!(ontology.is_empty());
    }

    #[test]
    fn array_root_is_a_bare_graph() {
        let document = r#"[
          { "@id": "http://example.org/o#A", "@type": "owl:Class" }
        ]"#;
        let ontology = JsonLdParser::new().parse_str(document).unwrap();
        assert_eq!(ontology.id(), "http://example.org/imported-ontology");
        assert!(ontology.contains_class("http://example.org/o#A"));
    }

    #[test]
    fn own_output_round_trips() {
        let mut original = Ontology::new("http://example.org/zoo", "Zoo");
        original.set_version("2.0");
        original.add_import("http://example.org/base");
        let mut lion = OntologyClass::new("http://example.org/zoo#Lion", "Lion");
        lion.super_classes.push("http://example.org/zoo#Animal".into());
        lion.disjoint_with.push("http://example.org/zoo#Plant".into());
        original.insert_class(lion);
        original.insert_class(OntologyClass::new("http://example.org/zoo#Animal", "Animal"));
        let mut eats = OntologyProperty::new(
            "http://example.org/zoo#eats",
            "eats",
            PropertyKind::Object,
        );
        eats.domain.push("http://example.org/zoo#Animal".into());
        eats.range.push("http://example.org/zoo#Animal".into());
        eats.super_properties
            .push("http://example.org/zoo#interactsWith".into());
        original.insert_property(eats);
        let mut leo = NamedIndividual::new("http://example.org/zoo#leo", "leo");
        leo.types.push("http://example.org/zoo#Lion".into());
        original.insert_individual(leo);

        let document = JsonLdSerializer::new().serialize_to_string(&original);
        let parsed = JsonLdParser::new().parse_str(&document).unwrap();

        assert_eq!(parsed.id(), "http://example.org/zoo");
        assert_eq!(parsed.version(), Some("2.0"));
        assert_eq!(parsed.imports(), ["http://example.org/base"]);
        assert_eq!(parsed.class_count(), 2);
        let lion = parsed.class("http://example.org/zoo#Lion").unwrap();
        assert_eq!(lion.super_classes, ["http://example.org/zoo#Animal"]);
        assert_eq!(lion.disjoint_with, ["http://example.org/zoo#Plant"]);
        let eats = parsed.property("http://example.org/zoo#eats").unwrap();
        assert_eq!(eats.kind, PropertyKind::Object);
        assert_eq!(eats.domain, ["http://example.org/zoo#Animal"]);
        assert_eq!(eats.super_properties, ["http://example.org/zoo#interactsWith"]);
        let leo = parsed.individual("http://example.org/zoo#leo").unwrap();
        assert_eq!(leo.types, ["http://example.org/zoo#Lion"]);
    }
}
