use owlmodel::{Ontology, OntologyClass, OntologyProperty, PropertyKind, vocab};

/// Ontology IRI used when the document carries no `owl:Ontology` header.
const DEFAULT_ONTOLOGY_IRI: &str = "http://example.org/imported-ontology";
const DEFAULT_ONTOLOGY_NAME: &str = "Imported Ontology";

/// What the current subject was last declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubjectKind {
    Class,
    Property,
}

/// A line scanner for the Turtle subset [`TurtleSerializer`] writes.
///
/// The scanner never fails: `@prefix` lines, comments and anything it does
/// not recognize are skipped. It recovers the ontology header (id and
/// `owl:versionInfo`), class and property declarations, and their labels.
/// Individuals are out of this codec's subset.
///
/// [`TurtleSerializer`]: crate::TurtleSerializer
///
/// ```
/// use owlttl::TurtleParser;
///
/// let turtle = r#"
/// @prefix owl: <http://www.w3.org/2002/07/owl#> .
///
/// <http://example.org/zoo#Lion> a owl:Class ;
///   rdfs:label "Lion" .
/// "#;
/// let ontology = TurtleParser::new().parse_str(turtle);
/// let lion = ontology.class("http://example.org/zoo#Lion").unwrap();
/// assert_eq!(lion.name, "Lion");
/// assert_eq!(lion.label.as_deref(), Some("Lion"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct TurtleParser;

impl TurtleParser {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    pub fn parse_str(self, content: &str) -> Ontology {
        let mut ontology = Ontology::new(DEFAULT_ONTOLOGY_IRI, DEFAULT_ONTOLOGY_NAME);
        let mut header_id: Option<String> = None;
        let mut current_subject: Option<String> = None;
        let mut current_kind: Option<SubjectKind> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.starts_with("@prefix") || line.starts_with('#') || line.is_empty() {
                continue;
            }

            if let Some(subject) = bracketed(line) {
                current_subject = Some(subject.to_owned());
            }

            if line.contains("owl:Ontology") && header_id.is_none() {
                if let Some(subject) = &current_subject {
                    header_id = Some(subject.clone());
                    ontology.set_id(subject.clone());
                }
            }

            if line.contains("owl:versionInfo")
                && ontology.version().is_none()
                && header_id.is_some()
                && current_subject == header_id
            {
                if let Some(version) = quoted(line) {
                    ontology.set_version(version);
                }
            }

            if line.contains("owl:Class") {
                if let Some(subject) = &current_subject {
                    let name = vocab::local_name(subject).to_owned();
                    ontology.insert_class(OntologyClass::new(subject.clone(), name));
                    current_kind = Some(SubjectKind::Class);
                }
            }

            if line.contains("owl:ObjectProperty")
                || line.contains("owl:DatatypeProperty")
                || line.contains("owl:DataProperty")
            {
                if let Some(subject) = &current_subject {
                    let kind = if line.contains("owl:ObjectProperty") {
                        PropertyKind::Object
                    } else {
                        PropertyKind::Data
                    };
                    let name = vocab::local_name(subject).to_owned();
                    ontology.insert_property(OntologyProperty::new(subject.clone(), name, kind));
                    current_kind = Some(SubjectKind::Property);
                }
            }

            if line.contains("rdfs:label") {
                if let (Some(subject), Some(text)) = (&current_subject, quoted(line)) {
                    match current_kind {
                        Some(SubjectKind::Class) => {
                            if let Some(class) = ontology.class_mut(subject) {
                                class.label = Some(text.to_owned());
                            }
                        }
                        Some(SubjectKind::Property) => {
                            if let Some(property) = ontology.property_mut(subject) {
                                property.label = Some(text.to_owned());
                            }
                        }
                        None => {}
                    }
                }
            }
        }

        ontology
    }
}

/// First non-empty `<…>` token on the line.
fn bracketed(line: &str) -> Option<&str> {
    let start = line.find('<')?;
    let rest = &line[start + 1..];
    let end = rest.find('>')?;
    let inner = &rest[..end];
    if inner.is_empty() { None } else { Some(inner) }
}

/// First non-empty `"…"` span on the line.
fn quoted(line: &str) -> Option<&str> {
    let mut from = 0;
    while let Some(offset) = line[from..].find('"') {
        let start = from + offset + 1;
        match line[start..].find('"') {
            Some(0) => from = start,
            Some(len) => return Some(&line[start..start + len]),
            None => return None,
        }
    }
    None
}
