use owlmodel::{NamedIndividual, Ontology, OntologyClass, OntologyProperty, PropertyKind, vocab};
use oxiri::Iri;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::RdfXmlParseError;

/// Ontology IRI used when the document has no `owl:Ontology` element.
const DEFAULT_ONTOLOGY_IRI: &str = "http://example.org/ontology";
const DEFAULT_ONTOLOGY_NAME: &str = "Imported Ontology";

/// Text child currently being captured for the open subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextField {
    Version,
    Label,
    Comment,
}

/// A subject element under the document root, while its children are read.
enum Subject {
    Header,
    Class(OntologyClass),
    Property(OntologyProperty),
    Individual {
        individual: NamedIndividual,
        /// Set for `rdf:Description` subjects, which only count as
        /// individuals when they carry `rdf:type` children.
        needs_types: bool,
    },
    Skipped,
}

/// An individual declaration kept aside until the whole document is read.
struct Candidate {
    individual: NamedIndividual,
    needs_types: bool,
}

impl Candidate {
    fn merge(&mut self, other: Self) {
        for type_iri in other.individual.types {
            if !self.individual.types.contains(&type_iri) {
                self.individual.types.push(type_iri);
            }
        }
        if self.individual.label.is_none() {
            self.individual.label = other.individual.label;
        }
        for iri in other.individual.same_as {
            if !self.individual.same_as.contains(&iri) {
                self.individual.same_as.push(iri);
            }
        }
        for iri in other.individual.different_from {
            if !self.individual.different_from.contains(&iri) {
                self.individual.different_from.push(iri);
            }
        }
        self.needs_types = self.needs_types && other.needs_types;
    }
}

#[derive(Default)]
struct DocumentBuilder {
    ontology: Ontology,
    header_seen: bool,
    header_id: Option<String>,
    header_label: Option<String>,
    version: Option<String>,
    imports: Vec<String>,
    candidates: Vec<Candidate>,
}

/// An [RDF/XML](https://www.w3.org/TR/rdf-syntax-grammar/) parser for
/// ontologies.
///
/// Element and attribute names are matched on their local name, so
/// `owl:Class`, `Class` and any other prefix spelling are equivalent.
/// Relative `rdf:about`/`rdf:resource` references resolve against the root's
/// `xml:base`. Individuals may be declared as `owl:NamedIndividual`
/// subjects, as `rdf:Description` subjects with `rdf:type` children, or as
/// typed subject elements; they are classified only once the whole document
/// has been read, so an IRI declared as a class or property never also
/// becomes an individual.
///
/// ```
/// use owlrdfxml::RdfXmlParser;
///
/// let xml = r#"<?xml version="1.0"?>
/// <rdf:RDF xmlns:owl="http://www.w3.org/2002/07/owl#"
///          xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
///     <owl:Class rdf:about="http://example.org/zoo#Lion"/>
/// </rdf:RDF>"#;
/// let ontology = RdfXmlParser::new().parse_str(xml)?;
/// assert!(ontology.contains_class("http://example.org/zoo#Lion"));
/// # Ok::<_, owlrdfxml::RdfXmlParseError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct RdfXmlParser;

impl RdfXmlParser {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    pub fn parse_str(self, content: &str) -> Result<Ontology, RdfXmlParseError> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().expand_empty_elements = true;

        let mut builder = DocumentBuilder::default();
        let mut base: Option<Iri<String>> = None;
        let mut subject: Option<Subject> = None;
        let mut capture: Option<TextField> = None;
        let mut text = String::new();
        // Number of currently open elements. Subjects sit at the root's
        // child level, or at the root itself when there is no rdf:RDF
        // wrapper around a lone subject element.
        let mut depth = 0usize;
        let mut subject_depth = 1usize;
        let mut root_seen = false;

        loop {
            match reader.read_event()? {
                Event::Start(event) => {
                    if !root_seen {
                        root_seen = true;
                        base = base_attribute(&event)?;
                        if event.local_name().as_ref() != b"RDF" {
                            subject_depth = 0;
                            subject = Some(builder.open_subject(&event, base.as_ref())?);
                        }
                    } else if depth == subject_depth {
                        subject = Some(builder.open_subject(&event, base.as_ref())?);
                    } else if depth == subject_depth + 1 {
                        if let Some(current) = &mut subject {
                            capture = handle_child(&mut builder, current, &event, base.as_ref())?;
                            text.clear();
                        }
                    }
                    depth += 1;
                }
                Event::End(_) => {
                    depth = depth.saturating_sub(1);
                    if depth == subject_depth + 1 {
                        if let (Some(current), Some(field)) = (&mut subject, capture.take()) {
                            store_text(&mut builder, current, field, &text);
                        }
                    } else if depth == subject_depth {
                        if let Some(finished) = subject.take() {
                            builder.close_subject(finished);
                        }
                    }
                }
                Event::Text(event) => {
                    if capture.is_some() {
                        text.push_str(&event.unescape()?);
                    }
                }
                Event::Eof => break,
                _ => (),
            }
        }

        Ok(builder.finish())
    }
}

impl DocumentBuilder {
    fn open_subject(
        &mut self,
        event: &BytesStart<'_>,
        base: Option<&Iri<String>>,
    ) -> Result<Subject, RdfXmlParseError> {
        let about = attribute_value(event, b"about", base)?;
        let name = event.local_name();
        Ok(match name.as_ref() {
            b"Ontology" => {
                if self.header_seen {
                    Subject::Skipped
                } else {
                    self.header_seen = true;
                    self.header_id = about;
                    Subject::Header
                }
            }
            b"Class" => about.map_or(Subject::Skipped, |id| {
                Subject::Class(OntologyClass::new(id, String::new()))
            }),
            b"ObjectProperty" => property_subject(about, PropertyKind::Object),
            b"DatatypeProperty" | b"DataProperty" => property_subject(about, PropertyKind::Data),
            b"AnnotationProperty" => property_subject(about, PropertyKind::Annotation),
            b"Description" => individual_subject(about, true),
            // owl:NamedIndividual subjects and typed subject elements such as
            // <ex:Person rdf:about="..."> both land here; the element name is
            // not turned into a type assertion.
            _ => individual_subject(about, false),
        })
    }

    fn close_subject(&mut self, subject: Subject) {
        match subject {
            Subject::Header | Subject::Skipped => (),
            Subject::Class(mut class) => {
                finish_entity(&mut class.name, &mut class.label, &class.id);
                self.ontology.insert_class(class);
            }
            Subject::Property(mut property) => {
                finish_entity(&mut property.name, &mut property.label, &property.id);
                self.ontology.insert_property(property);
            }
            Subject::Individual {
                individual,
                needs_types,
            } => self.candidates.push(Candidate {
                individual,
                needs_types,
            }),
        }
    }

    fn finish(self) -> Ontology {
        let Self {
            mut ontology,
            header_id,
            header_label,
            version,
            imports,
            candidates,
            ..
        } = self;

        let id = header_id.unwrap_or_else(|| DEFAULT_ONTOLOGY_IRI.to_owned());
        let name = header_label.unwrap_or_else(|| {
            let local = vocab::local_name(&id);
            if local.is_empty() {
                DEFAULT_ONTOLOGY_NAME.to_owned()
            } else {
                local.to_owned()
            }
        });
        ontology.set_name(name);
        ontology.set_id(id);
        if let Some(version) = version {
            ontology.set_version(version);
        }
        for import in imports {
            ontology.add_import(import);
        }

        let mut merged: Vec<Candidate> = Vec::new();
        for candidate in candidates {
            if let Some(position) = merged
                .iter()
                .position(|entry| entry.individual.id == candidate.individual.id)
            {
                merged[position].merge(candidate);
            } else {
                merged.push(candidate);
            }
        }
        for Candidate {
            mut individual,
            needs_types,
        } in merged
        {
            if needs_types && individual.types.is_empty() {
                continue;
            }
            if ontology.contains_class(&individual.id) || ontology.contains_property(&individual.id)
            {
                continue;
            }
            finish_entity(&mut individual.name, &mut individual.label, &individual.id);
            ontology.insert_individual(individual);
        }

        ontology
    }
}

fn property_subject(about: Option<String>, kind: PropertyKind) -> Subject {
    about.map_or(Subject::Skipped, |id| {
        Subject::Property(OntologyProperty::new(id, String::new(), kind))
    })
}

fn individual_subject(about: Option<String>, needs_types: bool) -> Subject {
    about.map_or(Subject::Skipped, |id| Subject::Individual {
        individual: NamedIndividual::new(id, String::new()),
        needs_types,
    })
}

fn handle_child(
    builder: &mut DocumentBuilder,
    subject: &mut Subject,
    event: &BytesStart<'_>,
    base: Option<&Iri<String>>,
) -> Result<Option<TextField>, RdfXmlParseError> {
    let name = event.local_name();
    match subject {
        Subject::Header => match name.as_ref() {
            b"versionInfo" => return Ok(Some(TextField::Version)),
            b"label" => return Ok(Some(TextField::Label)),
            b"imports" => {
                if let Some(import) = attribute_value(event, b"resource", base)? {
                    builder.imports.push(import);
                }
            }
            _ => (),
        },
        Subject::Class(class) => match name.as_ref() {
            b"label" => return Ok(Some(TextField::Label)),
            b"comment" => return Ok(Some(TextField::Comment)),
            b"subClassOf" => push_resource(&mut class.super_classes, event, base)?,
            b"disjointWith" => push_resource(&mut class.disjoint_with, event, base)?,
            b"equivalentClass" => push_resource(&mut class.equivalent_to, event, base)?,
            _ => (),
        },
        Subject::Property(property) => match name.as_ref() {
            b"label" => return Ok(Some(TextField::Label)),
            b"comment" => return Ok(Some(TextField::Comment)),
            b"domain" => push_resource(&mut property.domain, event, base)?,
            b"range" => push_resource(&mut property.range, event, base)?,
            b"subPropertyOf" => push_resource(&mut property.super_properties, event, base)?,
            _ => (),
        },
        Subject::Individual { individual, .. } => match name.as_ref() {
            b"label" => return Ok(Some(TextField::Label)),
            b"type" => push_resource(&mut individual.types, event, base)?,
            b"sameAs" => push_resource(&mut individual.same_as, event, base)?,
            b"differentFrom" => push_resource(&mut individual.different_from, event, base)?,
            _ => (),
        },
        Subject::Skipped => (),
    }
    Ok(None)
}

/// First occurrence wins, like a first-match lookup over the subtree.
fn store_text(builder: &mut DocumentBuilder, subject: &mut Subject, field: TextField, text: &str) {
    match (subject, field) {
        (Subject::Header, TextField::Version) => {
            if builder.version.is_none() {
                builder.version = Some(text.to_owned());
            }
        }
        (Subject::Header, TextField::Label) => {
            if builder.header_label.is_none() {
                builder.header_label = Some(text.to_owned());
            }
        }
        (Subject::Class(class), TextField::Label) => {
            if class.label.is_none() {
                class.label = Some(text.to_owned());
            }
        }
        (Subject::Class(class), TextField::Comment) => {
            if class.description.is_none() {
                class.description = Some(text.to_owned());
            }
        }
        (Subject::Property(property), TextField::Label) => {
            if property.label.is_none() {
                property.label = Some(text.to_owned());
            }
        }
        (Subject::Property(property), TextField::Comment) => {
            if property.description.is_none() {
                property.description = Some(text.to_owned());
            }
        }
        (Subject::Individual { individual, .. }, TextField::Label) => {
            if individual.label.is_none() {
                individual.label = Some(text.to_owned());
            }
        }
        _ => (),
    }
}

/// Fills in the display name from the label, or from the IRI's local name
/// when no label was declared; the label is backfilled from the same value.
fn finish_entity(name: &mut String, label: &mut Option<String>, id: &str) {
    if label.is_none() {
        *label = Some(vocab::local_name(id).to_owned());
    }
    if let Some(label) = label {
        name.clone_from(label);
    }
}

/// Value of the first attribute with the given local name, base-resolved.
fn attribute_value(
    event: &BytesStart<'_>,
    name: &[u8],
    base: Option<&Iri<String>>,
) -> Result<Option<String>, RdfXmlParseError> {
    for attribute in event.attributes() {
        let attribute = attribute?;
        if attribute.key.local_name().as_ref() == name {
            let value = attribute.unescape_value()?;
            return Ok(Some(resolve_reference(&value, base)));
        }
    }
    Ok(None)
}

fn base_attribute(event: &BytesStart<'_>) -> Result<Option<Iri<String>>, RdfXmlParseError> {
    for attribute in event.attributes() {
        let attribute = attribute?;
        if attribute.key.as_ref() == b"xml:base" {
            let value = attribute.unescape_value()?;
            return Ok(Iri::parse(value.into_owned()).ok());
        }
    }
    Ok(None)
}

/// Absolute references pass through; anything else (such as `#Person`)
/// resolves against the base when one is known.
fn resolve_reference(value: &str, base: Option<&Iri<String>>) -> String {
    if Iri::parse(value).is_ok() {
        return value.to_owned();
    }
    base.and_then(|base| base.resolve(value).ok())
        .map_or_else(|| value.to_owned(), Iri::into_inner)
}

fn push_resource(
    target: &mut Vec<String>,
    event: &BytesStart<'_>,
    base: Option<&Iri<String>>,
) -> Result<(), RdfXmlParseError> {
    if let Some(resource) = attribute_value(event, b"resource", base)? {
        target.push(resource);
    }
    Ok(())
}
