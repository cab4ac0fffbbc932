use std::fmt;

/// An OWL class declaration together with its axioms about other classes.
///
/// The `id` is the full class IRI. `name` is a short human-readable handle,
/// usually the IRI fragment; `label` and `description` carry the
/// `rdfs:label` / `rdfs:comment` annotations when present.
///
/// ```
/// use owlmodel::OntologyClass;
///
/// let mut person = OntologyClass::new("http://example.org/onto#Person", "Person");
/// person.super_classes.push("http://example.org/onto#Agent".into());
/// assert_eq!(person.label_or_name(), "Person");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OntologyClass {
    pub id: String,
    pub name: String,
    pub label: Option<String>,
    pub description: Option<String>,
    /// IRIs of direct `rdfs:subClassOf` targets.
    pub super_classes: Vec<String>,
    pub annotations: Vec<Annotation>,
    /// Ids of properties that list this class in their domain.
    pub properties: Vec<String>,
    pub disjoint_with: Vec<String>,
    pub equivalent_to: Vec<String>,
}

impl OntologyClass {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// The label when set, the name otherwise.
    #[inline]
    pub fn label_or_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// The three OWL property flavors.
///
/// [`as_str`](Self::as_str) returns the tag used in typed serializations
/// (`owl:ObjectProperty`, `owl:DataProperty`, `owl:AnnotationProperty`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Object,
    Data,
    Annotation,
}

impl PropertyKind {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Object => "ObjectProperty",
            Self::Data => "DataProperty",
            Self::Annotation => "AnnotationProperty",
        }
    }
}

impl fmt::Display for PropertyKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global characteristics a property may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyCharacteristic {
    Functional,
    InverseFunctional,
    Transitive,
    Symmetric,
    Asymmetric,
    Reflexive,
    Irreflexive,
}

impl PropertyCharacteristic {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Functional => "Functional",
            Self::InverseFunctional => "InverseFunctional",
            Self::Transitive => "Transitive",
            Self::Symmetric => "Symmetric",
            Self::Asymmetric => "Asymmetric",
            Self::Reflexive => "Reflexive",
            Self::Irreflexive => "Irreflexive",
        }
    }
}

impl fmt::Display for PropertyCharacteristic {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An OWL property declaration.
///
/// ```
/// use owlmodel::{OntologyProperty, PropertyKind};
///
/// let mut works_for =
///     OntologyProperty::new("http://example.org/onto#worksFor", "worksFor", PropertyKind::Object);
/// works_for.domain.push("http://example.org/onto#Person".into());
/// works_for.range.push("http://example.org/onto#Organization".into());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OntologyProperty {
    pub id: String,
    pub name: String,
    pub label: Option<String>,
    pub description: Option<String>,
    pub kind: PropertyKind,
    pub domain: Vec<String>,
    pub range: Vec<String>,
    /// IRIs of direct `rdfs:subPropertyOf` targets.
    pub super_properties: Vec<String>,
    pub characteristics: Vec<PropertyCharacteristic>,
    pub inverse: Option<String>,
    pub annotations: Vec<Annotation>,
}

impl OntologyProperty {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            label: None,
            description: None,
            kind,
            domain: Vec::new(),
            range: Vec::new(),
            super_properties: Vec::new(),
            characteristics: Vec::new(),
            inverse: None,
            annotations: Vec::new(),
        }
    }

    /// The label when set, the name otherwise.
    #[inline]
    pub fn label_or_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// An OWL named individual with its class memberships and assertions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NamedIndividual {
    pub id: String,
    pub name: String,
    pub label: Option<String>,
    /// IRIs of the classes this individual is an instance of.
    pub types: Vec<String>,
    pub property_assertions: Vec<PropertyAssertion>,
    pub annotations: Vec<Annotation>,
    pub same_as: Vec<String>,
    pub different_from: Vec<String>,
}

impl NamedIndividual {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// The label when set, the name otherwise.
    #[inline]
    pub fn label_or_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// A property value attached to a named individual.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyAssertion {
    /// IRI of the asserted property.
    pub property: String,
    pub value: LiteralValue,
    /// Optional datatype IRI for typed literals.
    pub datatype: Option<String>,
}

impl PropertyAssertion {
    pub fn new(property: impl Into<String>, value: impl Into<LiteralValue>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            datatype: None,
        }
    }
}

/// The scalar value of a property assertion.
///
/// [`Display`](fmt::Display) renders the bare lexical form; integral numbers
/// print without a decimal point.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl LiteralValue {
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self {
            Some(s)
        } else {
            None
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for LiteralValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for LiteralValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<f64> for LiteralValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// An annotation (`property`, `value`) pair with an optional language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub property: String,
    pub value: String,
    pub language: Option<String>,
}

impl Annotation {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            language: None,
        }
    }
}
