use owlmodel::{NamedIndividual, Ontology, OntologyClass, OntologyProperty, vocab};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// An [RDF/XML](https://www.w3.org/TR/rdf-syntax-grammar/) serializer for
/// ontologies.
///
/// Writes one subject element per entity: `owl:Ontology` for the header,
/// `owl:Class` per class, an element named after the kind tag per property
/// and exactly one `owl:NamedIndividual` per individual with one `rdf:type`
/// child per asserted type. Text children and attribute values are
/// XML-escaped.
///
/// ```
/// use owlmodel::{Ontology, OntologyClass};
/// use owlrdfxml::RdfXmlSerializer;
///
/// let mut ontology = Ontology::new("http://example.org/zoo", "Zoo");
/// ontology.insert_class(OntologyClass::new("http://example.org/zoo#Lion", "Lion"));
///
/// let xml = RdfXmlSerializer::new().serialize_to_string(&ontology);
/// assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
/// assert!(xml.contains("<owl:Class rdf:about=\"http://example.org/zoo#Lion\">"));
/// assert!(xml.contains("<rdfs:label>Lion</rdfs:label>"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct RdfXmlSerializer;

impl RdfXmlSerializer {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    pub fn serialize_to_string(self, ontology: &Ontology) -> String {
        // The only writer sink is a Vec, which never fails to write.
        write_document(ontology).unwrap_or_default()
    }
}

/// Base IRI for the document: the ontology IRI itself when it already ends
/// in `#` or `/`, otherwise the IRI up to and including its last `#` (with a
/// `#` appended when there is none).
fn derive_base(id: &str) -> String {
    if id.ends_with('#') || id.ends_with('/') {
        return id.to_owned();
    }
    match id.rfind('#') {
        Some(position) => format!("{}#", &id[..position]),
        None => format!("{id}#"),
    }
}

fn write_document(ontology: &Ontology) -> Result<String, quick_xml::Error> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let base = derive_base(ontology.id());
    let mut root = BytesStart::new("rdf:RDF");
    root.push_attribute(("xmlns", base.as_str()));
    root.push_attribute(("xml:base", base.as_str()));
    root.push_attribute(("xmlns:owl", vocab::owl::NS));
    root.push_attribute(("xmlns:rdf", vocab::rdf::NS));
    root.push_attribute(("xmlns:rdfs", vocab::rdfs::NS));
    root.push_attribute(("xmlns:xsd", vocab::xsd::NS));
    writer.write_event(Event::Start(root))?;

    write_header(&mut writer, ontology)?;
    for class in ontology.classes() {
        write_class(&mut writer, class)?;
    }
    for property in ontology.properties() {
        write_property(&mut writer, property)?;
    }
    for individual in ontology.individuals() {
        write_individual(&mut writer, individual)?;
    }

    writer.write_event(Event::End(BytesEnd::new("rdf:RDF")))?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

fn write_header(
    writer: &mut Writer<Vec<u8>>,
    ontology: &Ontology,
) -> Result<(), quick_xml::Error> {
    let mut open = BytesStart::new("owl:Ontology");
    open.push_attribute(("rdf:about", ontology.id()));
    writer.write_event(Event::Start(open))?;
    if let Some(version) = ontology.version() {
        write_text_element(writer, "owl:versionInfo", version)?;
    }
    for import in ontology.imports() {
        write_resource_element(writer, "owl:imports", import)?;
    }
    Ok(writer.write_event(Event::End(BytesEnd::new("owl:Ontology")))?)
}

fn write_class(
    writer: &mut Writer<Vec<u8>>,
    class: &OntologyClass,
) -> Result<(), quick_xml::Error> {
    let mut open = BytesStart::new("owl:Class");
    open.push_attribute(("rdf:about", class.id.as_str()));
    writer.write_event(Event::Start(open))?;
    write_text_element(writer, "rdfs:label", class.label_or_name())?;
    if let Some(description) = &class.description {
        write_text_element(writer, "rdfs:comment", description)?;
    }
    for superclass in &class.super_classes {
        write_resource_element(writer, "rdfs:subClassOf", superclass)?;
    }
    for target in &class.disjoint_with {
        write_resource_element(writer, "owl:disjointWith", target)?;
    }
    for target in &class.equivalent_to {
        write_resource_element(writer, "owl:equivalentClass", target)?;
    }
    Ok(writer.write_event(Event::End(BytesEnd::new("owl:Class")))?)
}

fn write_property(
    writer: &mut Writer<Vec<u8>>,
    property: &OntologyProperty,
) -> Result<(), quick_xml::Error> {
    let name = format!("owl:{}", property.kind.as_str());
    let mut open = BytesStart::new(name.as_str());
    open.push_attribute(("rdf:about", property.id.as_str()));
    writer.write_event(Event::Start(open))?;
    write_text_element(writer, "rdfs:label", property.label_or_name())?;
    if let Some(description) = &property.description {
        write_text_element(writer, "rdfs:comment", description)?;
    }
    for domain in &property.domain {
        write_resource_element(writer, "rdfs:domain", domain)?;
    }
    for range in &property.range {
        write_resource_element(writer, "rdfs:range", range)?;
    }
    for super_property in &property.super_properties {
        write_resource_element(writer, "rdfs:subPropertyOf", super_property)?;
    }
    Ok(writer.write_event(Event::End(BytesEnd::new(name.as_str())))?)
}

fn write_individual(
    writer: &mut Writer<Vec<u8>>,
    individual: &NamedIndividual,
) -> Result<(), quick_xml::Error> {
    let mut open = BytesStart::new("owl:NamedIndividual");
    open.push_attribute(("rdf:about", individual.id.as_str()));
    writer.write_event(Event::Start(open))?;
    for type_iri in &individual.types {
        write_resource_element(writer, "rdf:type", type_iri)?;
    }
    write_text_element(writer, "rdfs:label", individual.label_or_name())?;
    Ok(writer.write_event(Event::End(BytesEnd::new("owl:NamedIndividual")))?)
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    Ok(writer.write_event(Event::End(BytesEnd::new(name)))?)
}

fn write_resource_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    resource: &str,
) -> Result<(), quick_xml::Error> {
    let mut element = BytesStart::new(name);
    element.push_attribute(("rdf:resource", resource));
    Ok(writer.write_event(Event::Empty(element))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use owlmodel::PropertyKind;

    fn zoo() -> Ontology {
        Ontology::new("http://example.org/ontology", "ontology")
    }

    #[test]
    fn declares_encoding_and_namespaces() {
        let xml = RdfXmlSerializer::new().serialize_to_string(&zoo());

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("xmlns:owl=\"http://www.w3.org/2002/07/owl#\""));
        assert!(xml.contains("xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\""));
        assert!(xml.contains("xmlns:rdfs=\"http://www.w3.org/2000/01/rdf-schema#\""));
        assert!(xml.contains("xmlns:xsd=\"http://www.w3.org/2001/XMLSchema#\""));
        assert!(xml.contains("<owl:Ontology rdf:about=\"http://example.org/ontology\">"));
        assert!(xml.trim_end().ends_with("</rdf:RDF>"));
    }

    #[test]
    fn base_is_derived_from_the_ontology_iri() {
        let mut ontology = zoo();
        ontology.set_id("http://example.org/myontology#");
        let xml = RdfXmlSerializer::new().serialize_to_string(&ontology);
        assert!(xml.contains("xml:base=\"http://example.org/myontology#\""));

        ontology.set_id("http://example.org/o#part");
        let xml = RdfXmlSerializer::new().serialize_to_string(&ontology);
        assert!(xml.contains("xml:base=\"http://example.org/o#\""));

        ontology.set_id("http://example.org/ontology");
        let xml = RdfXmlSerializer::new().serialize_to_string(&ontology);
        assert!(xml.contains("xml:base=\"http://example.org/ontology#\""));
    }

    #[test]
    fn header_carries_version_and_imports() {
        let mut ontology = zoo();
        ontology.set_version("3.1.4");
        ontology.add_import("http://example.org/imported1");
        ontology.add_import("http://example.org/imported2");

        let xml = RdfXmlSerializer::new().serialize_to_string(&ontology);

        assert!(xml.contains("<owl:versionInfo>3.1.4</owl:versionInfo>"));
        assert!(xml.contains("<owl:imports rdf:resource=\"http://example.org/imported1\"/>"));
        assert!(xml.contains("<owl:imports rdf:resource=\"http://example.org/imported2\"/>"));
    }

    #[test]
    fn class_elements_carry_axioms() {
        let mut ontology = zoo();
        let mut student = OntologyClass::new("http://example.org/o#Student", "Student");
        student.description = Some("A person enrolled somewhere".to_owned());
        student.super_classes.push("http://example.org/o#Person".to_owned());
        student.disjoint_with.push("http://example.org/o#Teacher".to_owned());
        student.equivalent_to.push("http://example.org/o#Pupil".to_owned());
        ontology.insert_class(student);

        let xml = RdfXmlSerializer::new().serialize_to_string(&ontology);

        assert!(xml.contains("<owl:Class rdf:about=\"http://example.org/o#Student\">"));
        assert!(xml.contains("<rdfs:label>Student</rdfs:label>"));
        assert!(xml.contains("<rdfs:comment>A person enrolled somewhere</rdfs:comment>"));
        assert!(xml.contains("<rdfs:subClassOf rdf:resource=\"http://example.org/o#Person\"/>"));
        assert!(xml.contains("<owl:disjointWith rdf:resource=\"http://example.org/o#Teacher\"/>"));
        assert!(xml.contains("<owl:equivalentClass rdf:resource=\"http://example.org/o#Pupil\"/>"));
        assert!(xml.contains("</owl:Class>"));
    }

    #[test]
    fn property_elements_use_kind_tags() {
        let mut ontology = zoo();
        let mut has_age =
            OntologyProperty::new("http://example.org/o#hasAge", "hasAge", PropertyKind::Data);
        has_age.domain.push("http://example.org/o#Person".to_owned());
        has_age
            .range
            .push("http://www.w3.org/2001/XMLSchema#integer".to_owned());
        has_age
            .super_properties
            .push("http://example.org/o#hasTrait".to_owned());
        ontology.insert_property(has_age);

        let xml = RdfXmlSerializer::new().serialize_to_string(&ontology);

        assert!(xml.contains("<owl:DataProperty rdf:about=\"http://example.org/o#hasAge\">"));
        assert!(xml.contains("<rdfs:domain rdf:resource=\"http://example.org/o#Person\"/>"));
        assert!(
            xml.contains("<rdfs:range rdf:resource=\"http://www.w3.org/2001/XMLSchema#integer\"/>")
        );
        assert!(
            xml.contains("<rdfs:subPropertyOf rdf:resource=\"http://example.org/o#hasTrait\"/>")
        );
        assert!(xml.contains("</owl:DataProperty>"));
    }

    #[test]
    fn one_individual_element_lists_every_type() {
        let mut ontology = zoo();
        let mut john = NamedIndividual::new("http://example.org/o#john", "John");
        john.types.push("http://example.org/o#Person".to_owned());
        john.types.push("http://example.org/o#Employee".to_owned());
        ontology.insert_individual(john);

        let xml = RdfXmlSerializer::new().serialize_to_string(&ontology);

        assert!(xml.contains("<owl:NamedIndividual rdf:about=\"http://example.org/o#john\">"));
        assert!(xml.contains("<rdf:type rdf:resource=\"http://example.org/o#Person\"/>"));
        assert!(xml.contains("<rdf:type rdf:resource=\"http://example.org/o#Employee\"/>"));
        assert!(xml.contains("<rdfs:label>John</rdfs:label>"));
        assert_eq!(xml.matches("<owl:NamedIndividual").count(), 1);
    }

    #[test]
    fn escapes_markup_in_text_and_attributes() {
        let mut ontology = zoo();
        let mut class = OntologyClass::new("http://example.org/o#Test", "Test");
        class.label = Some("Test & <Special> \"Characters\"".to_owned());
        class.description = Some("Description with 'quotes' & <tags>".to_owned());
        ontology.insert_class(class);

        let xml = RdfXmlSerializer::new().serialize_to_string(&ontology);

        assert!(xml.contains("&amp;"));
        assert!(xml.contains("&lt;"));
        assert!(xml.contains("&gt;"));
        assert!(xml.contains("&quot;"));
        assert!(!xml.contains("Test & <Special>"));
    }
}
