use crate::error::QuerySyntaxError;
use crate::query::{
    OptionalBlock, PatternElement, PatternTerm, SelectClause, SelectQuery, TriplePattern,
};
use crate::solution::{QueryResults, QuerySolution};
use crate::term::{Term, Variable};
use crate::triples::{Triple, ontology_triples};
use owlmodel::{Ontology, vocab};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// One partial row of the join, variable name to bound term.
type Binding = FxHashMap<String, Term>;

/// Parses `query` and evaluates it against the triple projection of
/// `ontology`.
///
/// ```
/// use owlmodel::{NamedIndividual, Ontology, OntologyClass};
/// use owlsparql::evaluate_query;
///
/// let mut ontology = Ontology::new("http://example.org/zoo", "Zoo");
/// ontology.insert_class(OntologyClass::new("http://example.org/zoo#Animal", "Animal"));
/// let mut leo = NamedIndividual::new("http://example.org/zoo#leo", "leo");
/// leo.types.push("http://example.org/zoo#Animal".into());
/// ontology.insert_individual(leo);
///
/// let results = evaluate_query(
///     &ontology,
///     "SELECT ?animal WHERE { ?animal rdf:type <http://example.org/zoo#Animal> }",
/// )?;
/// assert_eq!(results.len(), 1);
/// # Ok::<_, owlsparql::QuerySyntaxError>(())
/// ```
pub fn evaluate_query(ontology: &Ontology, query: &str) -> Result<QueryResults, QuerySyntaxError> {
    Ok(SelectQuery::parse(query)?.evaluate(ontology))
}

pub(crate) fn evaluate(query: &SelectQuery, ontology: &Ontology) -> QueryResults {
    let triples = ontology_triples(ontology);

    // Seeding with one empty binding lets the first pattern join like any
    // other one.
    let mut bindings = vec![Binding::default()];
    for element in &query.where_clause.elements {
        match element {
            PatternElement::Triple(pattern) => {
                bindings = join_pattern(&bindings, pattern, &triples);
            }
            PatternElement::Optional(block) => {
                bindings = left_join(&bindings, block, &triples);
            }
        }
    }

    let variables: Arc<[Variable]> = projected_variables(query, &bindings).into();
    let solutions = bindings
        .into_iter()
        .map(|binding| {
            let values: Vec<_> = variables
                .iter()
                .map(|variable| binding.get(variable.as_str()).cloned())
                .collect();
            QuerySolution::from((Arc::clone(&variables), values))
        })
        .collect();
    QueryResults::new(variables, solutions)
}

fn join_pattern(bindings: &[Binding], pattern: &TriplePattern, triples: &[Triple]) -> Vec<Binding> {
    let mut joined = Vec::new();
    for binding in bindings {
        for triple in triples {
            if let Some(extended) = extend_binding(binding, pattern, triple) {
                joined.push(extended);
            }
        }
    }
    joined
}

/// Joins each binding against the whole optional group, keeping the original
/// binding untouched when the group does not match.
fn left_join(bindings: &[Binding], block: &OptionalBlock, triples: &[Triple]) -> Vec<Binding> {
    let mut joined = Vec::new();
    for binding in bindings {
        let mut extended = vec![binding.clone()];
        for pattern in &block.patterns {
            extended = join_pattern(&extended, pattern, triples);
        }
        if extended.is_empty() {
            joined.push(binding.clone());
        } else {
            joined.append(&mut extended);
        }
    }
    joined
}

fn extend_binding(binding: &Binding, pattern: &TriplePattern, triple: &Triple) -> Option<Binding> {
    let mut extended = binding.clone();
    unify_iri(&mut extended, &pattern.subject, &triple.subject)?;
    unify_iri(&mut extended, &pattern.predicate, &triple.predicate)?;
    unify_term(&mut extended, &pattern.object, &triple.object)?;
    Some(extended)
}

/// Matches a subject or predicate position. Variables bind the value as
/// spelled by the triple; IRI constants compare after prefix expansion of the
/// triple side, the pattern side being expanded at parse time already.
fn unify_iri(binding: &mut Binding, term: &PatternTerm, value: &str) -> Option<()> {
    match term {
        PatternTerm::Variable(variable) => match binding.get(variable.as_str()) {
            Some(Term::Iri(bound)) if bound == value => Some(()),
            Some(_) => None,
            None => {
                binding.insert(variable.as_str().to_owned(), Term::Iri(value.to_owned()));
                Some(())
            }
        },
        PatternTerm::Iri(iri) => (vocab::expand(value) == iri.as_str()).then_some(()),
    }
}

/// Matches an object position. A bound variable must hold an equal term of
/// the same kind; an IRI constant also matches a literal whose lexical form
/// equals the constant spelling.
fn unify_term(binding: &mut Binding, term: &PatternTerm, value: &Term) -> Option<()> {
    match term {
        PatternTerm::Variable(variable) => match binding.get(variable.as_str()) {
            Some(bound) if bound == value => Some(()),
            Some(_) => None,
            None => {
                binding.insert(variable.as_str().to_owned(), value.clone());
                Some(())
            }
        },
        PatternTerm::Iri(iri) => match value {
            Term::Iri(object) => (vocab::expand(object) == iri.as_str()).then_some(()),
            Term::Literal(literal) => (literal.to_string() == *iri).then_some(()),
        },
    }
}

/// The result header: the explicit projection verbatim, or for `SELECT *`
/// every pattern variable in order of first appearance that got bound in at
/// least one solution.
fn projected_variables(query: &SelectQuery, bindings: &[Binding]) -> Vec<Variable> {
    match &query.projection {
        SelectClause::Variables(variables) => variables.clone(),
        SelectClause::All => {
            let mut seen = Vec::new();
            for element in &query.where_clause.elements {
                match element {
                    PatternElement::Triple(pattern) => collect_variables(pattern, &mut seen),
                    PatternElement::Optional(block) => {
                        for pattern in &block.patterns {
                            collect_variables(pattern, &mut seen);
                        }
                    }
                }
            }
            seen.retain(|variable| {
                bindings
                    .iter()
                    .any(|binding| binding.contains_key(variable.as_str()))
            });
            seen
        }
    }
}

fn collect_variables(pattern: &TriplePattern, seen: &mut Vec<Variable>) {
    for term in [&pattern.subject, &pattern.predicate, &pattern.object] {
        if let PatternTerm::Variable(variable) = term {
            if !seen.contains(variable) {
                seen.push(variable.clone());
            }
        }
    }
}
