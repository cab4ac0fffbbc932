//! owlmodel provides the in-memory data structures shared by the owlkit
//! crates: an [`Ontology`] container with insertion-ordered collections of
//! classes, properties and named individuals, the [`vocab`] namespace
//! registry, and the [`validation`] structural validator.
//!
//! This crate is the basic building block the codec crates, the reasoner and
//! the query engine are written against.
//!
//! Usage example:
//!
//! ```
//! use owlmodel::{Ontology, OntologyClass, PropertyKind, OntologyProperty};
//!
//! let mut ontology = Ontology::new("http://example.org/zoo", "Zoo");
//!
//! let mut lion = OntologyClass::new("http://example.org/zoo#Lion", "Lion");
//! lion.super_classes.push("http://example.org/zoo#Animal".into());
//! ontology.insert_class(lion);
//!
//! ontology.insert_property(OntologyProperty::new(
//!     "http://example.org/zoo#eats",
//!     "eats",
//!     PropertyKind::Object,
//! ));
//!
//! assert_eq!(ontology.stats().class_count, 1);
//! assert_eq!(
//!     ontology.class("http://example.org/zoo#Lion").unwrap().super_classes,
//!     ["http://example.org/zoo#Animal"]
//! );
//! ```
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod entity;
mod ontology;
pub mod validation;
pub mod vocab;

pub use crate::entity::{
    Annotation, LiteralValue, NamedIndividual, OntologyClass, OntologyProperty,
    PropertyAssertion, PropertyCharacteristic, PropertyKind,
};
pub use crate::ontology::{Ontology, OntologyStats};
