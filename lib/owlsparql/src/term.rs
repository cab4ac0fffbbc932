use owlmodel::LiteralValue;
use std::fmt;

/// A SPARQL query variable, named without the leading `?`.
///
/// ```
/// use owlsparql::Variable;
///
/// assert_eq!(Variable::new("label").to_string(), "?label");
/// ```
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Hash)]
pub struct Variable {
    name: String,
}

impl Variable {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The variable name without the leading `?`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.name
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.name)
    }
}

/// A concrete RDF term in the triple projection: an IRI reference or a
/// literal.
///
/// `Display` renders the IRI spelling or the bare literal lexical form,
/// without angle brackets or quoting.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// An IRI, kept exactly as the model spells it.
    Iri(String),
    /// A literal value.
    Literal(LiteralValue),
}

impl Term {
    #[inline]
    #[must_use]
    pub const fn is_iri(&self) -> bool {
        matches!(self, Self::Iri(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// The IRI when this term is one.
    #[inline]
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Iri(iri) => Some(iri),
            Self::Literal(_) => None,
        }
    }

    /// The literal value when this term is one.
    #[inline]
    #[must_use]
    pub const fn as_literal(&self) -> Option<&LiteralValue> {
        match self {
            Self::Iri(_) => None,
            Self::Literal(value) => Some(value),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => f.write_str(iri),
            Self::Literal(value) => value.fmt(f),
        }
    }
}
