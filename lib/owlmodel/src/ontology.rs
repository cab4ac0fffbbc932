use crate::entity::{Annotation, NamedIndividual, OntologyClass, OntologyProperty};
use rustc_hash::FxHashMap;

/// Id-keyed collection preserving first-insertion order.
///
/// Re-inserting an existing id replaces the value in place; removal keeps the
/// relative order of the remainder.
#[derive(Debug, Clone)]
struct EntityMap<T> {
    entries: Vec<T>,
    index: FxHashMap<String, usize>,
}

impl<T> Default for EntityMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<T> EntityMap<T> {
    fn insert(&mut self, id: String, value: T) {
        if let Some(&slot) = self.index.get(&id) {
            self.entries[slot] = value;
        } else {
            self.index.insert(id, self.entries.len());
            self.entries.push(value);
        }
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&slot| &self.entries[slot])
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.index.get(id).map(|&slot| &mut self.entries[slot])
    }

    fn remove(&mut self, id: &str) -> Option<T> {
        let slot = self.index.remove(id)?;
        let value = self.entries.remove(slot);
        for other in self.index.values_mut() {
            if *other > slot {
                *other -= 1;
            }
        }
        Some(value)
    }

    fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// An in-memory OWL-style ontology.
///
/// Classes, properties and individuals are keyed by their IRI and iterate in
/// first-insertion order, so serializations are deterministic. The container
/// is `Clone`; code that treats ontologies as immutable values clones before
/// mutating.
///
/// ```
/// use owlmodel::{Ontology, OntologyClass};
///
/// let mut ontology = Ontology::new("http://example.org/zoo", "Zoo");
/// ontology.insert_class(OntologyClass::new("http://example.org/zoo#Lion", "Lion"));
/// assert!(ontology.contains_class("http://example.org/zoo#Lion"));
/// assert_eq!(ontology.classes().count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    id: String,
    name: String,
    version: Option<String>,
    imports: Vec<String>,
    classes: EntityMap<OntologyClass>,
    properties: EntityMap<OntologyProperty>,
    individuals: EntityMap<NamedIndividual>,
    annotations: Vec<Annotation>,
}

impl Ontology {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// The ontology IRI.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The `owl:versionInfo` value when one is set.
    #[inline]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    #[inline]
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
    }

    /// IRIs of directly imported ontologies, in declaration order.
    #[inline]
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn add_import(&mut self, import: impl Into<String>) {
        self.imports.push(import.into());
    }

    #[inline]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Inserts a class, replacing any class with the same id in place.
    ///
    /// Entities with an empty id are never stored.
    pub fn insert_class(&mut self, class: OntologyClass) {
        debug_assert!(!class.id.is_empty(), "class id must not be empty");
        if !class.id.is_empty() {
            self.classes.insert(class.id.clone(), class);
        }
    }

    pub fn class(&self, id: &str) -> Option<&OntologyClass> {
        self.classes.get(id)
    }

    pub fn class_mut(&mut self, id: &str) -> Option<&mut OntologyClass> {
        self.classes.get_mut(id)
    }

    pub fn remove_class(&mut self, id: &str) -> Option<OntologyClass> {
        self.classes.remove(id)
    }

    pub fn contains_class(&self, id: &str) -> bool {
        self.classes.contains(id)
    }

    /// Classes in first-insertion order.
    pub fn classes(&self) -> impl Iterator<Item = &OntologyClass> {
        self.classes.iter()
    }

    #[inline]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Inserts a property, replacing any property with the same id in place.
    pub fn insert_property(&mut self, property: OntologyProperty) {
        debug_assert!(!property.id.is_empty(), "property id must not be empty");
        if !property.id.is_empty() {
            self.properties.insert(property.id.clone(), property);
        }
    }

    pub fn property(&self, id: &str) -> Option<&OntologyProperty> {
        self.properties.get(id)
    }

    pub fn property_mut(&mut self, id: &str) -> Option<&mut OntologyProperty> {
        self.properties.get_mut(id)
    }

    pub fn remove_property(&mut self, id: &str) -> Option<OntologyProperty> {
        self.properties.remove(id)
    }

    pub fn contains_property(&self, id: &str) -> bool {
        self.properties.contains(id)
    }

    /// Properties in first-insertion order.
    pub fn properties(&self) -> impl Iterator<Item = &OntologyProperty> {
        self.properties.iter()
    }

    #[inline]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Inserts an individual, replacing any individual with the same id in place.
    pub fn insert_individual(&mut self, individual: NamedIndividual) {
        debug_assert!(!individual.id.is_empty(), "individual id must not be empty");
        if !individual.id.is_empty() {
            self.individuals.insert(individual.id.clone(), individual);
        }
    }

    pub fn individual(&self, id: &str) -> Option<&NamedIndividual> {
        self.individuals.get(id)
    }

    pub fn individual_mut(&mut self, id: &str) -> Option<&mut NamedIndividual> {
        self.individuals.get_mut(id)
    }

    pub fn remove_individual(&mut self, id: &str) -> Option<NamedIndividual> {
        self.individuals.remove(id)
    }

    pub fn contains_individual(&self, id: &str) -> bool {
        self.individuals.contains(id)
    }

    /// Individuals in first-insertion order.
    pub fn individuals(&self) -> impl Iterator<Item = &NamedIndividual> {
        self.individuals.iter()
    }

    #[inline]
    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }

    /// `true` when the ontology declares no entity at all.
    pub fn is_empty(&self) -> bool {
        self.classes.len() == 0 && self.properties.len() == 0 && self.individuals.len() == 0
    }

    /// Entity and axiom counts for this ontology.
    pub fn stats(&self) -> OntologyStats {
        let mut axiom_count = 0;
        for class in self.classes.iter() {
            axiom_count +=
                class.super_classes.len() + class.disjoint_with.len() + class.equivalent_to.len();
        }
        for property in self.properties.iter() {
            axiom_count +=
                property.domain.len() + property.range.len() + property.super_properties.len();
        }
        for individual in self.individuals.iter() {
            axiom_count += individual.types.len()
                + individual.property_assertions.len()
                + individual.same_as.len()
                + individual.different_from.len();
        }
        OntologyStats {
            class_count: self.classes.len(),
            property_count: self.properties.len(),
            individual_count: self.individuals.len(),
            axiom_count,
        }
    }
}

/// Summary counts returned by [`Ontology::stats`].
///
/// `axiom_count` counts the declared relational axioms: subclass, disjointness
/// and equivalence edges, property domain/range/super-property edges, and
/// individual types, assertions, `owl:sameAs` and `owl:differentFrom` links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OntologyStats {
    pub class_count: usize,
    pub property_count: usize,
    pub individual_count: usize,
    pub axiom_count: usize,
}
