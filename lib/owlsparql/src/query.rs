use crate::error::QuerySyntaxError;
use crate::solution::QueryResults;
use crate::term::Variable;
use crate::{eval, parser};
use owlmodel::Ontology;
use std::fmt;
use std::str::FromStr;

/// A parsed SPARQL-like `SELECT` query.
///
/// The supported subset is `SELECT` with a variable list or `*`, a `WHERE`
/// block of triple patterns, and non-nested `OPTIONAL` blocks. IRI constants
/// are expanded at parse time, so the AST only ever carries full IRIs.
///
/// ```
/// use owlsparql::{PatternElement, SelectQuery};
///
/// let query = SelectQuery::parse("SELECT ?class WHERE { ?class rdf:type owl:Class }")?;
/// assert_eq!(query.where_clause.elements.len(), 1);
/// assert!(matches!(
///     query.where_clause.elements[0],
///     PatternElement::Triple(_)
/// ));
/// # Ok::<_, owlsparql::QuerySyntaxError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    pub projection: SelectClause,
    pub where_clause: WhereClause,
}

impl SelectQuery {
    pub fn parse(query: &str) -> Result<Self, QuerySyntaxError> {
        parser::parse_select(query)
    }

    /// Evaluates the query against the triple projection of `ontology`.
    ///
    /// Evaluation never fails: patterns over IRIs the ontology does not
    /// mention simply produce no solutions.
    #[must_use]
    pub fn evaluate(&self, ontology: &Ontology) -> QueryResults {
        eval::evaluate(self, ontology)
    }
}

impl FromStr for SelectQuery {
    type Err = QuerySyntaxError;

    #[inline]
    fn from_str(query: &str) -> Result<Self, QuerySyntaxError> {
        Self::parse(query)
    }
}

impl fmt::Display for SelectQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT {} WHERE {{ ", self.projection)?;
        for (index, element) in self.where_clause.elements.iter().enumerate() {
            if index > 0 {
                f.write_str(" . ")?;
            }
            element.fmt(f)?;
        }
        f.write_str(" }")
    }
}

/// The projection of a [`SelectQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectClause {
    /// `SELECT *`: project every variable bound somewhere in the `WHERE`
    /// block, in order of first appearance.
    All,
    /// An explicit variable list, projected verbatim.
    Variables(Vec<Variable>),
}

impl fmt::Display for SelectClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("*"),
            Self::Variables(variables) => {
                for (index, variable) in variables.iter().enumerate() {
                    if index > 0 {
                        f.write_str(" ")?;
                    }
                    variable.fmt(f)?;
                }
                Ok(())
            }
        }
    }
}

/// The body of a [`SelectQuery`], one element per group member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    pub elements: Vec<PatternElement>,
}

/// One member of a `WHERE` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternElement {
    Triple(TriplePattern),
    Optional(OptionalBlock),
}

impl fmt::Display for PatternElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Triple(pattern) => pattern.fmt(f),
            Self::Optional(block) => block.fmt(f),
        }
    }
}

/// An `OPTIONAL { ... }` block: a left join against the enclosing group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalBlock {
    pub patterns: Vec<TriplePattern>,
}

impl fmt::Display for OptionalBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OPTIONAL { ")?;
        for (index, pattern) in self.patterns.iter().enumerate() {
            if index > 0 {
                f.write_str(" . ")?;
            }
            pattern.fmt(f)?;
        }
        f.write_str(" }")
    }
}

/// A subject-predicate-object pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriplePattern {
    pub subject: PatternTerm,
    pub predicate: PatternTerm,
    pub object: PatternTerm,
}

impl fmt::Display for TriplePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

/// One position of a [`TriplePattern`]: a variable or a full IRI constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternTerm {
    Variable(Variable),
    Iri(String),
}

impl fmt::Display for PatternTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(variable) => variable.fmt(f),
            Self::Iri(iri) => write!(f, "<{iri}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_render_and_reparse() {
        let query = SelectQuery::parse(
            "SELECT ?s ?label WHERE { ?s rdf:type owl:Class . OPTIONAL { ?s rdfs:label ?label } }",
        )
        .unwrap();
        let rendered = query.to_string();
        assert_eq!(
            rendered,
            "SELECT ?s ?label WHERE { \
             ?s <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2002/07/owl#Class> . \
             OPTIONAL { ?s <http://www.w3.org/2000/01/rdf-schema#label> ?label } }"
        );
        assert_eq!(rendered.parse::<SelectQuery>().unwrap(), query);
    }

    #[test]
    fn star_projections_render_as_star() {
        let query = SelectQuery::parse("SELECT * WHERE { ?s ?p ?o }").unwrap();
        assert_eq!(query.projection, SelectClause::All);
        assert_eq!(query.to_string(), "SELECT * WHERE { ?s ?p ?o }");
    }

    #[test]
    fn from_str_matches_parse() {
        let text = "SELECT ?s WHERE { ?s ?p ?o }";
        assert_eq!(
            text.parse::<SelectQuery>().unwrap(),
            SelectQuery::parse(text).unwrap()
        );
    }
}
