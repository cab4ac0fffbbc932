use owlmodel::{
    NamedIndividual, Ontology, OntologyClass, OntologyProperty, PropertyAssertion, PropertyKind,
};
use owlsparql::{QueryResults, SelectQuery, evaluate_query};

const ONTOLOGY_IRI: &str = "http://example.org/company";

fn iri(local: &str) -> String {
    format!("{ONTOLOGY_IRI}#{local}")
}

fn company() -> Ontology {
    let mut ontology = Ontology::new(ONTOLOGY_IRI, "Company");
    ontology.set_version("1.0.0");

    ontology.insert_class(OntologyClass::new(iri("Person"), "Person"));
    let mut organization = OntologyClass::new(iri("Organization"), "Organization");
    organization.description = Some("A group of people".to_owned());
    ontology.insert_class(organization);
    let mut employee = OntologyClass::new(iri("Employee"), "Employee");
    employee.super_classes.push(iri("Person"));
    ontology.insert_class(employee);

    let mut works_for = OntologyProperty::new(iri("worksFor"), "worksFor", PropertyKind::Object);
    works_for.domain.push(iri("Employee"));
    works_for.range.push(iri("Organization"));
    ontology.insert_property(works_for);
    let mut has_age = OntologyProperty::new(iri("hasAge"), "hasAge", PropertyKind::Data);
    has_age.domain.push(iri("Person"));
    ontology.insert_property(has_age);

    let mut john = NamedIndividual::new(iri("john"), "john");
    john.types.push(iri("Employee"));
    john.property_assertions
        .push(PropertyAssertion::new(iri("worksFor"), iri("acme")));
    john.property_assertions
        .push(PropertyAssertion::new(iri("hasAge"), 30.0));
    ontology.insert_individual(john);
    let mut acme = NamedIndividual::new(iri("acme"), "acme");
    acme.types.push(iri("Organization"));
    ontology.insert_individual(acme);

    ontology
}

fn column(results: &QueryResults, variable: &str) -> Vec<String> {
    results
        .iter()
        .filter_map(|solution| solution.get(variable).map(ToString::to_string))
        .collect()
}

#[test]
fn classes_are_found_with_their_labels() {
    let results = evaluate_query(
        &company(),
        "SELECT ?class ?label WHERE { ?class rdf:type owl:Class . OPTIONAL { ?class rdfs:label ?label } }",
    )
    .unwrap();

    assert_eq!(
        column(&results, "class"),
        [iri("Person"), iri("Organization"), iri("Employee")]
    );
    assert_eq!(column(&results, "label"), ["Person", "Organization", "Employee"]);
}

#[test]
fn the_result_count_matches_the_class_count() {
    let ontology = company();
    let results =
        evaluate_query(&ontology, "SELECT ?class WHERE { ?class rdf:type owl:Class }").unwrap();
    assert_eq!(results.len(), ontology.class_count());
}

#[test]
fn property_kinds_match_their_full_iris() {
    let object_properties = evaluate_query(
        &company(),
        "SELECT ?p WHERE { ?p rdf:type <http://www.w3.org/2002/07/owl#ObjectProperty> }",
    )
    .unwrap();
    assert_eq!(column(&object_properties, "p"), [iri("worksFor")]);

    // data properties are typed owl#DataProperty, not owl#DatatypeProperty
    let data_properties = evaluate_query(
        &company(),
        "SELECT ?p WHERE { ?p rdf:type <http://www.w3.org/2002/07/owl#DataProperty> }",
    )
    .unwrap();
    assert_eq!(column(&data_properties, "p"), [iri("hasAge")]);
}

#[test]
fn subclass_pairs_join_both_positions() {
    let results = evaluate_query(
        &company(),
        "SELECT ?sub ?super WHERE { ?sub rdfs:subClassOf ?super }",
    )
    .unwrap();

    assert_eq!(column(&results, "sub"), [iri("Employee")]);
    assert_eq!(column(&results, "super"), [iri("Person")]);
}

#[test]
fn individuals_filter_by_their_types() {
    let query = format!(
        "SELECT ?i WHERE {{ ?i rdf:type owl:NamedIndividual . ?i rdf:type <{}> }}",
        iri("Employee")
    );
    let results = evaluate_query(&company(), &query).unwrap();
    assert_eq!(column(&results, "i"), [iri("john")]);
}

#[test]
fn star_projections_list_every_bound_variable() {
    let results =
        evaluate_query(&company(), "SELECT * WHERE { ?sub rdfs:subClassOf ?super }").unwrap();

    let names: Vec<_> = results.variables().iter().map(|v| v.as_str()).collect();
    assert_eq!(names, ["sub", "super"]);
    assert_eq!(results.len(), 1);
}

#[test]
fn invalid_queries_report_what_is_missing() {
    let error = evaluate_query(&company(), "INVALID QUERY").unwrap_err();
    assert_eq!(
        error.to_string(),
        "invalid SPARQL query: expected the SELECT keyword, found \"INVALID\""
    );
}

#[test]
fn unknown_iris_with_dots_yield_empty_results() {
    let results = evaluate_query(
        &company(),
        "SELECT ?s WHERE { ?s rdf:type <http://nonexistent.example.org/Class> }",
    )
    .unwrap();
    assert!(results.is_empty());
}

#[test]
fn optional_blocks_are_left_joins() {
    let results = evaluate_query(
        &company(),
        "SELECT ?class ?doc WHERE { ?class rdf:type owl:Class . OPTIONAL { ?class rdfs:comment ?doc } }",
    )
    .unwrap();

    // classes without a comment keep their row, with ?doc unbound
    assert_eq!(results.len(), 3);
    assert_eq!(
        column(&results, "class"),
        [iri("Person"), iri("Organization"), iri("Employee")]
    );
    assert_eq!(column(&results, "doc"), ["A group of people"]);
}

#[test]
fn prefixed_and_full_spellings_are_equivalent() {
    let prefixed =
        evaluate_query(&company(), "SELECT ?c WHERE { ?c rdf:type owl:Class }").unwrap();
    let full = evaluate_query(
        &company(),
        "SELECT ?c WHERE { ?c <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2002/07/owl#Class> }",
    )
    .unwrap();
    assert_eq!(column(&prefixed, "c"), column(&full, "c"));
}

#[test]
fn the_version_projects_as_a_literal() {
    let query = format!("SELECT ?v WHERE {{ <{ONTOLOGY_IRI}> owl:versionInfo ?v }}");
    let results = evaluate_query(&company(), &query).unwrap();

    assert_eq!(results.len(), 1);
    let version = results.solutions()[0].get("v").unwrap();
    assert!(version.is_literal());
    assert_eq!(version.to_string(), "1.0.0");
}

#[test]
fn string_assertions_behave_as_resource_links() {
    let query = format!("SELECT ?who ?org WHERE {{ ?who <{}> ?org }}", iri("worksFor"));
    let results = evaluate_query(&company(), &query).unwrap();

    assert_eq!(column(&results, "who"), [iri("john")]);
    let organization = results.solutions()[0].get("org").unwrap();
    assert!(organization.is_iri());
    assert_eq!(organization.as_iri(), Some(iri("acme").as_str()));
}

#[test]
fn number_assertions_stay_literals() {
    let query = format!(
        "SELECT ?age WHERE {{ <{}> <{}> ?age }}",
        iri("john"),
        iri("hasAge")
    );
    let results = evaluate_query(&company(), &query).unwrap();

    let age = results.solutions()[0].get("age").unwrap();
    assert!(age.is_literal());
    assert_eq!(age.to_string(), "30");
}

#[test]
fn parsed_queries_are_reusable() {
    let query: SelectQuery = "SELECT ?c WHERE { ?c rdf:type owl:Class }".parse().unwrap();

    assert_eq!(query.evaluate(&company()).len(), 3);
    let empty = Ontology::new("http://example.org/empty", "Empty");
    assert!(query.evaluate(&empty).is_empty());
}

#[test]
fn common_exploration_queries_all_run() {
    let queries = [
        "SELECT ?class ?label WHERE { ?class rdf:type owl:Class . OPTIONAL { ?class rdfs:label ?label } }",
        "SELECT ?property ?label WHERE { ?property rdf:type owl:ObjectProperty . OPTIONAL { ?property rdfs:label ?label } }",
        "SELECT ?subclass ?superclass WHERE { ?subclass rdfs:subClassOf ?superclass }",
        "SELECT ?individual ?type WHERE { ?individual rdf:type owl:NamedIndividual . OPTIONAL { ?individual rdf:type ?type } }",
        "SELECT ?property ?domain WHERE { ?property rdfs:domain ?domain }",
        "SELECT ?property ?range WHERE { ?property rdfs:range ?range }",
    ];

    let ontology = company();
    for query in queries {
        let results = evaluate_query(&ontology, query).unwrap();
        assert!(!results.is_empty(), "no solutions for {query}");
    }
}
