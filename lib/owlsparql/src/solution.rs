//! Definition of [`QuerySolution`] and [`QueryResults`] and their accessors.

use crate::term::{Term, Variable};
use std::fmt;
use std::iter::Zip;
use std::ops::Index;
use std::sync::Arc;

/// Tuple associating variables and terms that are the result of a `SELECT` query.
///
/// It is the equivalent of a row in SQL.
///
/// ```
/// use owlsparql::{QuerySolution, Term, Variable};
///
/// let solution = QuerySolution::from((
///     vec![Variable::new("foo"), Variable::new("bar")],
///     vec![Some(Term::Iri("http://example.org/foo".to_owned())), None],
/// ));
/// assert_eq!(
///     solution.get("foo"),
///     Some(&Term::Iri("http://example.org/foo".to_owned()))
/// );
/// assert_eq!(solution.get(1), None); // the second column is unbound
/// ```
pub struct QuerySolution {
    variables: Arc<[Variable]>,
    values: Vec<Option<Term>>,
}

impl QuerySolution {
    /// Returns a value for a given position in the tuple ([`usize`]) or a given
    /// variable name ([`&str`](str) or [`Variable`]).
    ///
    /// ```
    /// use owlsparql::{QuerySolution, Term, Variable};
    ///
    /// let solution = QuerySolution::from((
    ///     vec![Variable::new("foo"), Variable::new("bar")],
    ///     vec![Some(Term::Iri("http://example.org/foo".to_owned())), None],
    /// ));
    /// assert_eq!(solution.get(0), solution.get("foo"));
    /// assert_eq!(solution.get("bar"), None);
    /// ```
    #[inline]
    pub fn get(&self, index: impl VariableSolutionIndex) -> Option<&Term> {
        self.values.get(index.index(self)?).and_then(Option::as_ref)
    }

    /// The number of variables which could be bound.
    ///
    /// It is also the number of columns in the solutions table.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Is there any variable bound in the row?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Returns an iterator over bound variables.
    ///
    /// ```
    /// use owlsparql::{QuerySolution, Term, Variable};
    ///
    /// let solution = QuerySolution::from((
    ///     vec![Variable::new("foo"), Variable::new("bar")],
    ///     vec![Some(Term::Iri("http://example.org/foo".to_owned())), None],
    /// ));
    /// assert_eq!(
    ///     solution.iter().collect::<Vec<_>>(),
    ///     vec![(
    ///         &Variable::new("foo"),
    ///         &Term::Iri("http://example.org/foo".to_owned())
    ///     )]
    /// );
    /// ```
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Term)> {
        self.into_iter()
    }

    /// Returns the ordered slice of variable values, unbound columns included.
    #[inline]
    pub fn values(&self) -> &[Option<Term>] {
        &self.values
    }

    /// Returns the ordered slice of the solution variables, bound or not.
    #[inline]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }
}

impl<V: Into<Arc<[Variable]>>, S: Into<Vec<Option<Term>>>> From<(V, S)> for QuerySolution {
    #[inline]
    fn from((v, s): (V, S)) -> Self {
        Self {
            variables: v.into(),
            values: s.into(),
        }
    }
}

impl<'a> IntoIterator for &'a QuerySolution {
    type Item = (&'a Variable, &'a Term);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.variables.iter().zip(&self.values),
        }
    }
}

impl Index<usize> for QuerySolution {
    type Output = Term;

    #[expect(clippy::panic)]
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("The column {index} is not set in this solution"))
    }
}

impl Index<&str> for QuerySolution {
    type Output = Term;

    #[expect(clippy::panic)]
    #[inline]
    fn index(&self, index: &str) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("The variable ?{index} is not set in this solution"))
    }
}

impl Index<&Variable> for QuerySolution {
    type Output = Term;

    #[inline]
    fn index(&self, index: &Variable) -> &Self::Output {
        self.index(index.as_str())
    }
}

impl Index<Variable> for QuerySolution {
    type Output = Term;

    #[inline]
    fn index(&self, index: Variable) -> &Self::Output {
        self.index(index.as_str())
    }
}

impl PartialEq for QuerySolution {
    fn eq(&self, other: &Self) -> bool {
        for (k, v) in self.iter() {
            if other.get(k) != Some(v) {
                return false;
            }
        }
        for (k, v) in other.iter() {
            if self.get(k) != Some(v) {
                return false;
            }
        }
        true
    }
}

impl fmt::Debug for QuerySolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// An iterator over [`QuerySolution`] bound variables.
pub struct Iter<'a> {
    inner: Zip<std::slice::Iter<'a, Variable>, std::slice::Iter<'a, Option<Term>>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Variable, &'a Term);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        for (variable, value) in &mut self.inner {
            if let Some(value) = value {
                return Some((variable, value));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// A utility trait to get values for a given variable or tuple position.
///
/// See [`QuerySolution::get`].
pub trait VariableSolutionIndex {
    fn index(self, solution: &QuerySolution) -> Option<usize>;
}

impl VariableSolutionIndex for usize {
    #[inline]
    fn index(self, _: &QuerySolution) -> Option<usize> {
        Some(self)
    }
}

impl VariableSolutionIndex for &str {
    #[inline]
    fn index(self, solution: &QuerySolution) -> Option<usize> {
        solution.variables.iter().position(|v| v.as_str() == self)
    }
}

impl VariableSolutionIndex for &Variable {
    #[inline]
    fn index(self, solution: &QuerySolution) -> Option<usize> {
        VariableSolutionIndex::index(self.as_str(), solution)
    }
}

impl VariableSolutionIndex for Variable {
    #[inline]
    fn index(self, solution: &QuerySolution) -> Option<usize> {
        VariableSolutionIndex::index(self.as_str(), solution)
    }
}

/// The solutions of a `SELECT` query, with the projected header.
///
/// The header lists every projected variable in `SELECT` clause order; a
/// variable projected but never bound stays in the header and its column is
/// unbound in every solution.
///
/// ```
/// use owlmodel::{Ontology, OntologyClass};
/// use owlsparql::evaluate_query;
///
/// let mut ontology = Ontology::new("http://example.org/o", "O");
/// ontology.insert_class(OntologyClass::new("http://example.org/o#A", "A"));
/// let results = evaluate_query(&ontology, "SELECT ?class WHERE { ?class rdf:type owl:Class }")?;
/// assert_eq!(results.variables().len(), 1);
/// assert_eq!(results.len(), 1);
/// # Ok::<_, owlsparql::QuerySyntaxError>(())
/// ```
#[derive(Debug)]
pub struct QueryResults {
    variables: Arc<[Variable]>,
    solutions: Vec<QuerySolution>,
}

impl QueryResults {
    pub(crate) fn new(variables: Arc<[Variable]>, solutions: Vec<QuerySolution>) -> Self {
        Self {
            variables,
            solutions,
        }
    }

    /// The projected variables, in `SELECT` clause order.
    #[inline]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The number of solutions.
    #[inline]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, QuerySolution> {
        self.solutions.iter()
    }

    /// All solutions, in evaluation order.
    #[inline]
    pub fn solutions(&self) -> &[QuerySolution] {
        &self.solutions
    }
}

impl IntoIterator for QueryResults {
    type Item = QuerySolution;
    type IntoIter = std::vec::IntoIter<QuerySolution>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryResults {
    type Item = &'a QuerySolution;
    type IntoIter = std::slice::Iter<'a, QuerySolution>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}
